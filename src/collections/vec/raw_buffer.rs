//! `RawBuffer` — exclusively owned, manually allocated element storage.
//!
//! The buffer knows its capacity but not which slots hold live values; the
//! owning collection tracks the initialized prefix and is responsible for
//! dropping elements. Dropping a `RawBuffer` only frees the allocation.
//!
//! Zero-sized types and zero capacities never touch the allocator: the
//! pointer is dangling (but well aligned) and the capacity is purely logical.

use core::alloc::Layout;
use core::marker::PhantomData;
use core::mem::{self, ManuallyDrop};
use core::ptr::{self, NonNull};
use std::alloc::{alloc, dealloc, handle_alloc_error};

/// Heap storage for `capacity` slots of `T`, none of which are assumed initialized.
pub(crate) struct RawBuffer<T> {
    ptr: NonNull<T>,
    cap: usize,
    _marker: PhantomData<T>,
}

// SAFETY: `RawBuffer` uniquely owns its allocation, exactly like `Box<[T]>`.
unsafe impl<T: Send> Send for RawBuffer<T> {}
// SAFETY: shared access only hands out `*const T`.
unsafe impl<T: Sync> Sync for RawBuffer<T> {}

impl<T> RawBuffer<T> {
    const IS_ZST: bool = mem::size_of::<T>() == 0;

    /// Allocates storage for exactly `capacity` slots.
    ///
    /// # Panics
    /// Panics with "capacity overflow" if the byte size exceeds `isize::MAX`.
    /// Allocation failure is routed to [`handle_alloc_error`].
    pub(crate) fn allocate(capacity: usize) -> Self {
        if Self::IS_ZST || capacity == 0 {
            return Self {
                ptr: NonNull::dangling(),
                cap: capacity,
                _marker: PhantomData,
            };
        }

        let layout = array_layout::<T>(capacity);
        // SAFETY: `layout` has a non-zero size because `T` is not a ZST and `capacity > 0`.
        let raw = unsafe { alloc(layout) }.cast::<T>();
        let Some(ptr) = NonNull::new(raw) else {
            handle_alloc_error(layout)
        };
        Self {
            ptr,
            cap: capacity,
            _marker: PhantomData,
        }
    }

    /// Number of slots in the allocation.
    #[inline(always)]
    pub(crate) const fn capacity(&self) -> usize {
        self.cap
    }

    #[inline(always)]
    pub(crate) const fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }

    #[inline(always)]
    pub(crate) fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Moves the first `len` slots into a fresh allocation of `new_capacity`
    /// slots and frees the old one.
    ///
    /// # Safety
    /// The first `len` slots must be initialized, and `len <= new_capacity`.
    /// After the call they live in the new allocation; the old slots are
    /// treated as moved-from.
    pub(crate) unsafe fn relocate(&mut self, new_capacity: usize, len: usize) {
        debug_assert!(len <= self.cap);
        debug_assert!(len <= new_capacity);
        let mut next = Self::allocate(new_capacity);
        ptr::copy_nonoverlapping(self.as_ptr(), next.as_mut_ptr(), len);
        // `next` now holds the old allocation, which is freed without
        // dropping any element.
        mem::swap(self, &mut next);
    }

    /// Converts the first `len` slots into a boxed slice, keeping the
    /// allocation when `len == capacity`.
    ///
    /// # Safety
    /// The first `len` slots must be initialized and `len <= capacity`.
    /// Ownership of those values moves into the returned box.
    pub(crate) unsafe fn into_boxed_slice(self, len: usize) -> Box<[T]> {
        debug_assert!(len <= self.cap);
        if len == self.cap || Self::IS_ZST {
            // The allocation was made with `Layout::array::<T>(cap)` by the
            // global allocator, which is exactly the layout of `Box<[T]>`.
            let this = ManuallyDrop::new(self);
            return Box::from_raw(ptr::slice_from_raw_parts_mut(this.ptr.as_ptr(), len));
        }

        let mut exact = Self::allocate(len);
        ptr::copy_nonoverlapping(self.as_ptr(), exact.as_mut_ptr(), len);
        // `self` drops here and frees the old, now moved-from, allocation.
        exact.into_boxed_slice(len)
    }
}

impl<T> Drop for RawBuffer<T> {
    fn drop(&mut self) {
        if Self::IS_ZST || self.cap == 0 {
            return;
        }
        let layout = array_layout::<T>(self.cap);
        // SAFETY: the pointer came from `alloc` with this same layout.
        unsafe { dealloc(self.ptr.as_ptr().cast::<u8>(), layout) };
    }
}

#[inline]
fn array_layout<T>(capacity: usize) -> Layout {
    match Layout::array::<T>(capacity) {
        Ok(layout) => layout,
        Err(_) => capacity_overflow(),
    }
}

#[cold]
#[inline(never)]
pub(crate) fn capacity_overflow() -> ! {
    panic!("capacity overflow");
}
