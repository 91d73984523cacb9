// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! A last in, first out [`Stack`][Stack] backed by a single contiguous
//! buffer which grows by doubling.
//!
//! # Capacity
//!
//! A new stack always starts out with room for exactly
//! [`INITIAL_CAPACITY`][INITIAL_CAPACITY] (5) elements. When a push finds the
//! buffer full, a new buffer of exactly twice the size is allocated and the
//! existing elements are moved across, so the capacity goes 5, 10, 20, 40 and
//! so on. Nothing ever shrinks it: [`pop()`][Stack::pop] leaves it as it is,
//! and [`clear()`][Stack::clear] reallocates at the current capacity rather
//! than going back to 5.
//!
//! # Errors
//!
//! [`peek()`][Stack::peek] and [`pop()`][Stack::pop] return
//! [`StackError::Empty`][StackError] when there's nothing on the stack, so an
//! empty stack can always be told apart from one holding a default value.
//! Nothing else can fail.
//!
//! # Thread Safety
//!
//! [`Stack`][Stack] has no internal locking. Every mutation takes `&mut self`,
//! so sharing one between threads means wrapping it in a lock of your own.
//!
//! # Example
//!
//! ```rust
//! # use growstack::{Stack, StackError};
//! let mut stack: Stack<usize> = Stack::new();
//! assert_eq!(5, stack.capacity());
//!
//! for i in 0..6 {
//!     stack.push(i);
//! }
//! // The sixth push found the buffer full and doubled it.
//! assert_eq!(10, stack.capacity());
//!
//! assert_eq!(Ok(5), stack.pop());
//! assert_eq!(Ok(&4), stack.peek());
//!
//! stack.clear();
//! assert_eq!(0, stack.count());
//! assert_eq!(10, stack.capacity());
//! assert_eq!(Err(StackError::Empty), stack.pop());
//! ```
//!
//! [Stack]: struct.Stack.html
//! [Stack::pop]: struct.Stack.html#method.pop
//! [Stack::peek]: struct.Stack.html#method.peek
//! [Stack::clear]: struct.Stack.html#method.clear
//! [StackError]: enum.StackError.html
//! [INITIAL_CAPACITY]: constant.INITIAL_CAPACITY.html

#![forbid(rust_2018_idioms)]
#![deny(nonstandard_style)]
#![warn(unreachable_pub, missing_docs, missing_debug_implementations)]

mod buffer;
mod error;
mod stack;

pub use self::error::StackError;
pub use self::stack::{Stack, INITIAL_CAPACITY};

#[cfg(test)]
mod test {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct DropTest<'a> {
        counter: &'a AtomicUsize,
    }

    impl<'a> DropTest<'a> {
        fn new(counter: &'a AtomicUsize) -> Self {
            counter.fetch_add(1, Ordering::Relaxed);
            DropTest { counter }
        }
    }

    impl<'a> Drop for DropTest<'a> {
        fn drop(&mut self) {
            self.counter.fetch_sub(1, Ordering::Relaxed);
        }
    }

    fn fill_drop(size: usize) {
        let counter = AtomicUsize::new(0);
        {
            let mut stack = Stack::new();
            for _ in 0..size {
                stack.push(DropTest::new(&counter));
            }
            assert_eq!(size, counter.load(Ordering::SeqCst));
        }
        assert_eq!(0, counter.load(Ordering::SeqCst));
    }

    #[test]
    fn dropping_small() {
        fill_drop(3);
    }

    #[test]
    fn dropping_grown() {
        fill_drop(2048);
    }

    #[test]
    fn dropping_empty() {
        fill_drop(0);
    }

    #[test]
    fn pop_releases_ownership() {
        let counter = AtomicUsize::new(0);
        let mut stack = Stack::new();
        for _ in 0..11 {
            stack.push(DropTest::new(&counter));
        }
        for left in (0..11).rev() {
            let popped = stack.pop().ok();
            assert!(popped.is_some());
            assert_eq!(left + 1, counter.load(Ordering::SeqCst));
            drop(popped);
            // Only what's still on the stack is alive.
            assert_eq!(left, counter.load(Ordering::SeqCst));
        }
        assert_eq!(20, stack.capacity());
    }

    #[test]
    fn clear_drops_everything_once() {
        let counter = AtomicUsize::new(0);
        let mut stack = Stack::new();
        for _ in 0..7 {
            stack.push(DropTest::new(&counter));
        }
        stack.pop().ok();
        assert_eq!(6, counter.load(Ordering::SeqCst));
        stack.clear();
        assert_eq!(0, counter.load(Ordering::SeqCst));
        assert_eq!(10, stack.capacity());
        stack.push(DropTest::new(&counter));
        drop(stack);
        assert_eq!(0, counter.load(Ordering::SeqCst));
    }

    #[test]
    fn clone_then_drop_both() {
        let counter = AtomicUsize::new(0);

        #[derive(Clone)]
        struct Tracked<'a>(std::rc::Rc<DropTest<'a>>);

        let mut stack = Stack::new();
        for _ in 0..6 {
            stack.push(Tracked(std::rc::Rc::new(DropTest::new(&counter))));
        }
        let copy = stack.clone();
        assert_eq!(6, counter.load(Ordering::SeqCst));
        drop(stack);
        assert_eq!(6, counter.load(Ordering::SeqCst));
        drop(copy);
        assert_eq!(0, counter.load(Ordering::SeqCst));
    }

    #[test]
    fn zero_sized_values() {
        let mut stack = Stack::new();
        for _ in 0..11 {
            stack.push(());
        }
        assert_eq!(20, stack.capacity());
        assert_eq!(Ok(()), stack.pop());
        assert_eq!(10, stack.count());
    }

    struct Boom<'a> {
        drops: &'a AtomicUsize,
        panics: bool,
    }

    impl<'a> Drop for Boom<'a> {
        fn drop(&mut self) {
            self.drops.fetch_add(1, Ordering::SeqCst);
            if self.panics {
                panic!("boom");
            }
        }
    }

    #[test]
    fn clear_with_panicking_drop_drops_each_value_once() {
        let drops = AtomicUsize::new(0);
        let mut stack = Stack::new();
        for i in 0..7 {
            stack.push(Boom {
                drops: &drops,
                panics: i == 0,
            });
        }
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| stack.clear()));
        assert!(result.is_err());
        assert_eq!(7, drops.load(Ordering::SeqCst));
        assert_eq!(0, stack.count());
        assert_eq!(10, stack.capacity());
        drop(stack);
        assert_eq!(7, drops.load(Ordering::SeqCst));
    }
}
