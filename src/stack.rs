// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::fmt::{Debug, Error, Formatter};

use log::trace;
use static_assertions::assert_impl_all;

use crate::buffer::RawBuffer;
use crate::error::StackError;

/// The capacity of a freshly constructed [`Stack`][Stack].
///
/// [Stack]: struct.Stack.html
pub const INITIAL_CAPACITY: usize = 5;

/// A last in, first out stack of `A` backed by a single contiguous buffer.
///
/// The buffer starts out with room for [`INITIAL_CAPACITY`][INITIAL_CAPACITY]
/// elements and doubles in size whenever a push finds it full. It never
/// shrinks: popping leaves the capacity alone, and [`clear()`][clear]
/// reallocates at whatever the capacity was before the call.
///
/// # Examples
///
/// ```rust
/// # use growstack::Stack;
/// let mut stack: Stack<char> = Stack::new();
/// stack.push('a');
/// stack.push('b');
/// stack.push('c');
/// assert_eq!(Ok('c'), stack.pop());
/// assert_eq!(Ok(&'b'), stack.peek());
/// assert_eq!(2, stack.count());
/// ```
///
/// [INITIAL_CAPACITY]: constant.INITIAL_CAPACITY.html
/// [clear]: #method.clear
pub struct Stack<A> {
    buffer: RawBuffer<A>,
    count: usize,
}

assert_impl_all!(Stack<usize>: Send, Sync);
assert_impl_all!(Stack<String>: Send, Sync);

impl<A> Stack<A> {
    /// Construct an empty stack with a capacity of
    /// [`INITIAL_CAPACITY`][INITIAL_CAPACITY].
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use growstack::Stack;
    /// let stack: Stack<f64> = Stack::new();
    /// assert_eq!(0, stack.count());
    /// assert_eq!(5, stack.capacity());
    /// ```
    ///
    /// [INITIAL_CAPACITY]: constant.INITIAL_CAPACITY.html
    pub fn new() -> Self {
        Self {
            buffer: RawBuffer::new(INITIAL_CAPACITY),
            count: 0,
        }
    }

    /// Get the number of elements currently on the stack.
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Get the number of elements the stack can hold before it has to grow.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Test if the stack is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Push a value onto the top of the stack.
    ///
    /// If the stack is full, its buffer is first reallocated at exactly twice
    /// its current capacity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use growstack::Stack;
    /// let mut stack = Stack::new();
    /// for i in 0..5 {
    ///     stack.push(i);
    /// }
    /// assert_eq!(5, stack.capacity());
    /// stack.push(5);
    /// assert_eq!(10, stack.capacity());
    /// ```
    pub fn push(&mut self, value: A) {
        if self.count == self.capacity() {
            self.grow();
        }
        unsafe { self.buffer.write(self.count, value) };
        self.count += 1;
    }

    fn grow(&mut self) {
        let old_capacity = self.capacity();
        let new_capacity = old_capacity * 2;
        trace!(
            "growing stack buffer from {} to {} slots",
            old_capacity,
            new_capacity
        );
        unsafe { self.buffer.grow(self.count, new_capacity) };
    }

    /// Get a reference to the value on top of the stack.
    ///
    /// Returns [`StackError::Empty`][Empty] if there's nothing on the stack.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use growstack::{Stack, StackError};
    /// let mut stack = Stack::new();
    /// assert_eq!(Err(StackError::Empty), stack.peek());
    /// stack.push(1337);
    /// assert_eq!(Ok(&1337), stack.peek());
    /// assert_eq!(1, stack.count());
    /// ```
    ///
    /// [Empty]: enum.StackError.html#variant.Empty
    pub fn peek(&self) -> Result<&A, StackError> {
        match self.top_index() {
            Some(index) => Ok(unsafe { self.buffer.get(index) }),
            None => Err(StackError::Empty),
        }
    }

    /// Get a mutable reference to the value on top of the stack.
    ///
    /// Returns [`StackError::Empty`][Empty] if there's nothing on the stack.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use growstack::Stack;
    /// let mut stack = Stack::new();
    /// stack.push(String::from("abc"));
    /// stack.peek_mut()?.push_str("xyz");
    /// assert_eq!(Ok("abcxyz".to_string()), stack.pop());
    /// # Ok::<(), growstack::StackError>(())
    /// ```
    ///
    /// [Empty]: enum.StackError.html#variant.Empty
    pub fn peek_mut(&mut self) -> Result<&mut A, StackError> {
        match self.top_index() {
            Some(index) => Ok(unsafe { self.buffer.get_mut(index) }),
            None => Err(StackError::Empty),
        }
    }

    /// Remove the value on top of the stack and return it.
    ///
    /// The vacated slot gives up ownership of the value, so nothing is kept
    /// alive by the stack after it's been popped. The capacity is unchanged.
    ///
    /// Returns [`StackError::Empty`][Empty] if there's nothing on the stack.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use growstack::{Stack, StackError};
    /// let mut stack = Stack::new();
    /// stack.push(1);
    /// stack.push(2);
    /// assert_eq!(Ok(2), stack.pop());
    /// assert_eq!(Ok(1), stack.pop());
    /// assert_eq!(Err(StackError::Empty), stack.pop());
    /// ```
    ///
    /// [Empty]: enum.StackError.html#variant.Empty
    pub fn pop(&mut self) -> Result<A, StackError> {
        let index = self.top_index().ok_or(StackError::Empty)?;
        self.count = index;
        Ok(unsafe { self.buffer.read(index) })
    }

    /// Discard every value on the stack.
    ///
    /// The buffer is reallocated at its current capacity, which is not reset
    /// to [`INITIAL_CAPACITY`][INITIAL_CAPACITY].
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use growstack::Stack;
    /// let mut stack = Stack::new();
    /// for i in 0..6 {
    ///     stack.push(i);
    /// }
    /// stack.clear();
    /// assert_eq!(0, stack.count());
    /// assert_eq!(10, stack.capacity());
    /// ```
    ///
    /// [INITIAL_CAPACITY]: constant.INITIAL_CAPACITY.html
    pub fn clear(&mut self) {
        let capacity = self.capacity();
        trace!(
            "clearing {} values from stack with {} slots",
            self.count,
            capacity
        );
        let count = std::mem::replace(&mut self.count, 0);
        // `count` is already zero, so a panicking destructor can't lead to
        // a second drop of anything in the buffer.
        unsafe { self.buffer.drop_prefix(count) };
        self.buffer = RawBuffer::new(capacity);
    }

    #[inline(always)]
    fn top_index(&self) -> Option<usize> {
        self.count.checked_sub(1)
    }

    #[inline(always)]
    fn as_slice(&self) -> &[A] {
        unsafe { self.buffer.as_slice(self.count) }
    }
}

impl<A> Default for Stack<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> Drop for Stack<A> {
    fn drop(&mut self) {
        let count = std::mem::replace(&mut self.count, 0);
        unsafe { self.buffer.drop_prefix(count) };
    }
}

impl<A> Clone for Stack<A>
where
    A: Clone,
{
    /// Clone a stack.
    ///
    /// The clone has the same capacity as the original, not just enough room
    /// for its contents.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use growstack::Stack;
    /// let mut stack = Stack::new();
    /// for i in 0..6 {
    ///     stack.push(i);
    /// }
    /// let mut copy = stack.clone();
    /// assert_eq!(10, copy.capacity());
    /// assert_eq!(Ok(5), copy.pop());
    /// assert_eq!(6, stack.count());
    /// ```
    fn clone(&self) -> Self {
        let mut out = Self {
            buffer: RawBuffer::new(self.capacity()),
            count: 0,
        };
        for value in self.as_slice() {
            out.push(value.clone());
        }
        out
    }
}

impl<A> Debug for Stack<A>
where
    A: Debug,
{
    /// Debug implementation for `Stack`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use growstack::Stack;
    /// let mut stack = Stack::new();
    /// stack.push(1);
    /// stack.push(2);
    /// assert_eq!("Stack[2/5][1, 2]", format!("{:?}", stack));
    /// ```
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "Stack[{}/{}]", self.count, self.capacity())?;
        f.debug_list().entries(self.as_slice()).finish()
    }
}
