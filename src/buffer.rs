// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::mem::MaybeUninit;

/// A fixed size run of possibly uninitialised slots.
///
/// The buffer doesn't know which of its slots are live, so it never drops
/// anything on its own. Whoever owns it keeps track of that and calls
/// [`drop_prefix()`][drop_prefix] before letting go.
///
/// [drop_prefix]: #method.drop_prefix
pub(crate) struct RawBuffer<A> {
    slots: Box<[MaybeUninit<A>]>,
}

impl<A> RawBuffer<A> {
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            slots: std::iter::repeat_with(MaybeUninit::uninit)
                .take(capacity)
                .collect(),
        }
    }

    #[inline(always)]
    pub(crate) fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[inline(always)]
    fn data_ptr(&self) -> *const A {
        self.slots.as_ptr().cast::<A>()
    }

    #[inline(always)]
    fn data_ptr_mut(&mut self) -> *mut A {
        self.slots.as_mut_ptr().cast::<A>()
    }

    /// Move `value` into the slot at `index`.
    ///
    /// # Safety
    ///
    /// `index` must be in bounds and the slot must not hold a live value, or
    /// that value is leaked.
    #[inline(always)]
    pub(crate) unsafe fn write(&mut self, index: usize, value: A) {
        debug_assert!(index < self.capacity());
        self.data_ptr_mut().add(index).write(value);
    }

    /// Move the value out of the slot at `index`, leaving it uninitialised.
    ///
    /// # Safety
    ///
    /// The slot must hold a live value, and the caller must treat it as
    /// vacant afterwards.
    #[inline(always)]
    pub(crate) unsafe fn read(&mut self, index: usize) -> A {
        debug_assert!(index < self.capacity());
        self.data_ptr().add(index).read()
    }

    /// # Safety
    ///
    /// The slot at `index` must hold a live value.
    #[inline(always)]
    pub(crate) unsafe fn get(&self, index: usize) -> &A {
        debug_assert!(index < self.capacity());
        &*self.data_ptr().add(index)
    }

    /// # Safety
    ///
    /// The slot at `index` must hold a live value.
    #[inline(always)]
    pub(crate) unsafe fn get_mut(&mut self, index: usize) -> &mut A {
        debug_assert!(index < self.capacity());
        &mut *self.data_ptr_mut().add(index)
    }

    /// View the first `len` slots as initialised values.
    ///
    /// # Safety
    ///
    /// Slots `0..len` must all hold live values.
    #[inline(always)]
    pub(crate) unsafe fn as_slice(&self, len: usize) -> &[A] {
        debug_assert!(len <= self.capacity());
        std::slice::from_raw_parts(self.data_ptr(), len)
    }

    /// Replace this buffer with a new one of `capacity` slots, moving the
    /// first `len` values across to the same positions.
    ///
    /// # Safety
    ///
    /// Slots `0..len` must all hold live values, and `capacity` must be at
    /// least `len`.
    pub(crate) unsafe fn grow(&mut self, len: usize, capacity: usize) {
        debug_assert!(len <= self.capacity());
        debug_assert!(len <= capacity);
        let mut grown = Self::new(capacity);
        std::ptr::copy_nonoverlapping(self.data_ptr(), grown.data_ptr_mut(), len);
        // The old slots are bitwise copies now and must not be dropped,
        // which `MaybeUninit` already guarantees.
        *self = grown;
    }

    /// Drop the values in the first `len` slots in place.
    ///
    /// # Safety
    ///
    /// Slots `0..len` must all hold live values, and the caller must treat
    /// them as vacant afterwards.
    pub(crate) unsafe fn drop_prefix(&mut self, len: usize) {
        debug_assert!(len <= self.capacity());
        if std::mem::needs_drop::<A>() {
            std::ptr::drop_in_place(std::slice::from_raw_parts_mut(self.data_ptr_mut(), len));
        }
    }
}
