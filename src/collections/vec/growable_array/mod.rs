//! `GrowableArray` — a contiguous growable array with an explicit growth policy.
//!
//! ## Model
//!
//! The array owns one contiguous buffer of `capacity` slots. The first `len`
//! slots hold live values; the rest are uninitialized and never observable.
//!
//! - **Growth**: when a push finds `len == capacity`, the buffer is replaced
//!   by one of `floor(capacity / growth_factor)` slots (at least one more than
//!   before). The factor is a *divisor* restricted to `(0.2, 0.8)`, so growth
//!   is between 1.25× and 5× per event; the default `0.5` doubles.
//! - **Monotonic capacity**: the live buffer never shrinks. Compaction
//!   produces a separate, exactly sized buffer.
//! - **Permissive construction**: invalid capacities and factors are replaced
//!   by the defaults (16 and 0.5) instead of being rejected.
//!
//! ## Time Complexity
//! - **Push**: O(1) amortized, O(len) on a growth event
//! - **Indexed access**: O(1)
//! - **Compact**: O(1) when full, O(len) otherwise
//! - **Iteration**: O(1) per element, no compaction step
//!
//! ## Usage
//! ```rust
//! use growarray::GrowableArray;
//!
//! let mut array = GrowableArray::new();
//! array.push(10);
//! array.push(20);
//! array.push(30);
//!
//! assert_eq!(array.len(), 3);
//! assert_eq!(array.capacity(), 16);
//! assert_eq!(array.at(2), Ok(&30));
//! assert_eq!(&*array.compact(), &[10, 20, 30]);
//! ```

mod config;
mod error;
mod iter;


pub use config::{
    normalize_capacity, normalize_growth_factor, GrowthConfig, DEFAULT_CAPACITY,
    DEFAULT_GROWTH_FACTOR, MAX_GROWTH_FACTOR, MIN_GROWTH_FACTOR,
};
pub use error::IndexOutOfRange;
pub use iter::{IntoIter, Iter};

use super::raw_buffer::{capacity_overflow, RawBuffer};
use core::mem::ManuallyDrop;
use core::ops::{Index, IndexMut};
use core::{fmt, ptr, slice};
use std::borrow::Cow;

/// Computes the capacity that follows `capacity` for the given growth factor.
///
/// The result is `floor(capacity / growth_factor)`, bumped to
/// `capacity + 1` when the division does not make progress (for example
/// `floor(1 / 0.75) == 1`).
///
/// # Panics
/// Panics with "capacity overflow" if the result does not fit in `usize`.
#[inline]
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn next_capacity(capacity: usize, growth_factor: f64) -> usize {
    let scaled = (capacity as f64 / growth_factor).floor();
    if !(scaled < usize::MAX as f64) {
        capacity_overflow();
    }
    let Some(minimum) = capacity.checked_add(1) else {
        capacity_overflow()
    };
    (scaled as usize).max(minimum)
}

/// A contiguous, owned, append-only array with a configurable growth policy.
pub struct GrowableArray<T> {
    buf: RawBuffer<T>,
    len: usize,
    growth_factor: f64,
}

impl<T> GrowableArray<T> {
    /// Creates an empty array with capacity 16 and growth factor 0.5.
    pub fn new() -> Self {
        Self::from_parts(DEFAULT_CAPACITY, DEFAULT_GROWTH_FACTOR)
    }

    /// Creates an empty array with the given capacity and the default growth
    /// factor. A capacity of `0` is replaced by the default.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_parts(normalize_capacity(capacity), DEFAULT_GROWTH_FACTOR)
    }

    /// Creates an empty array with the given capacity and growth factor.
    ///
    /// Both values are normalized: `0` becomes 16, and a factor outside
    /// `(0.2, 0.8)` becomes 0.5.
    pub fn with_growth(capacity: usize, growth_factor: f64) -> Self {
        Self::from_parts(
            normalize_capacity(capacity),
            normalize_growth_factor(growth_factor),
        )
    }

    /// Creates an empty array sized by `config`.
    pub fn from_config(config: &GrowthConfig) -> Self {
        let (capacity, growth_factor) = config.normalized();
        Self::from_parts(capacity, growth_factor)
    }

    /// Creates an array pre-populated with `items`.
    ///
    /// The capacity is taken from the number of items, overriding
    /// `config.capacity`; only the growth factor is read from `config`. An
    /// empty sequence yields the default capacity.
    pub fn from_items<I>(config: &GrowthConfig, items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        let items = items.into_iter();
        let mut array = Self::from_parts(
            normalize_capacity(items.len()),
            config.normalized_growth_factor(),
        );
        // A dishonest `len()` only costs an extra growth event.
        array.extend(items);
        array
    }

    fn from_parts(capacity: usize, growth_factor: f64) -> Self {
        debug_assert!(capacity > 0);
        debug_assert!(growth_factor > MIN_GROWTH_FACTOR && growth_factor < MAX_GROWTH_FACTOR);
        Self {
            buf: RawBuffer::allocate(capacity),
            len: 0,
            growth_factor,
        }
    }

    /// Number of live elements.
    #[inline(always)]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no element has been pushed.
    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Physical size of the backing buffer (not the element count).
    #[inline(always)]
    pub const fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// The normalized growth divisor in effect.
    #[inline(always)]
    pub const fn growth_factor(&self) -> f64 {
        self.growth_factor
    }

    /// Appends `value`, growing the buffer first if it is full.
    ///
    /// # Panics
    /// Panics with "capacity overflow" if the next capacity is not
    /// representable.
    #[inline]
    pub fn push(&mut self, value: T) {
        if self.len == self.buf.capacity() {
            self.grow();
        }
        // SAFETY: `len < capacity` after the check above, so the slot is in
        // bounds and uninitialized.
        unsafe { self.buf.as_mut_ptr().add(self.len).write(value) };
        self.len += 1;
    }

    #[cold]
    #[inline(never)]
    fn grow(&mut self) {
        let old_capacity = self.buf.capacity();
        let new_capacity = next_capacity(old_capacity, self.growth_factor);
        #[cfg(feature = "tracing")]
        tracing::trace!(old_capacity, new_capacity, len = self.len, "growing buffer");
        // SAFETY: the first `len` slots are initialized and
        // `len == old_capacity < new_capacity`.
        unsafe { self.buf.relocate(new_capacity, self.len) };
    }

    /// Returns the element at `index`, or `None` when `index >= len`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index < self.len {
            // SAFETY: `index < len`, so the slot is initialized.
            Some(unsafe { self.get_unchecked(index) })
        } else {
            None
        }
    }

    /// Returns a mutable reference to the element at `index`, or `None` when
    /// `index >= len`.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index < self.len {
            // SAFETY: `index < len`, so the slot is initialized.
            Some(unsafe { &mut *self.buf.as_mut_ptr().add(index) })
        } else {
            None
        }
    }

    /// Returns the element at `index` without bounds checks.
    ///
    /// # Safety
    /// Caller must ensure `index < self.len()`.
    #[inline(always)]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.len);
        &*self.buf.as_ptr().add(index)
    }

    /// Bounds-checked access.
    ///
    /// # Errors
    /// Returns [`IndexOutOfRange::PastEnd`] when `index >= len`.
    #[inline]
    pub fn at(&self, index: usize) -> Result<&T, IndexOutOfRange> {
        self.get(index).ok_or(IndexOutOfRange::PastEnd {
            index,
            len: self.len,
        })
    }

    /// Bounds-checked access for callers holding signed indices.
    ///
    /// # Errors
    /// Returns [`IndexOutOfRange::Negative`] for negative indices and
    /// [`IndexOutOfRange::PastEnd`] when `index >= len`.
    pub fn at_signed(&self, index: isize) -> Result<&T, IndexOutOfRange> {
        match usize::try_from(index) {
            Ok(index) => self.at(index),
            Err(_) => Err(IndexOutOfRange::Negative {
                index,
                len: self.len,
            }),
        }
    }

    /// The live elements `[0, len)` as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: the first `len` slots are initialized; the pointer is
        // non-null and aligned even when nothing is allocated.
        unsafe { slice::from_raw_parts(self.buf.as_ptr(), self.len) }
    }

    /// The live elements `[0, len)` as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as in `as_slice`, with exclusive access through `&mut self`.
        unsafe { slice::from_raw_parts_mut(self.buf.as_mut_ptr(), self.len) }
    }

    /// Iterates the live elements in insertion order.
    ///
    /// Each call starts from the first element; the iterator borrows the
    /// array, so it cannot be mutated while iteration is in progress.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Returns the live elements in a buffer whose length equals `len`.
    ///
    /// When the buffer is exactly full the live buffer is returned as-is
    /// (borrowed, no copy). Otherwise the elements are cloned into a new,
    /// exactly sized buffer. The array itself is left untouched either way.
    pub fn compact(&self) -> Cow<'_, [T]>
    where
        T: Clone,
    {
        if self.len == self.buf.capacity() {
            return Cow::Borrowed(self.as_slice());
        }
        #[cfg(feature = "tracing")]
        tracing::trace!(len = self.len, capacity = self.buf.capacity(), "compacting into trimmed copy");
        Cow::Owned(self.as_slice().to_vec())
    }

    /// Consumes the array and returns its elements as an exactly sized boxed
    /// slice.
    ///
    /// A full buffer is handed over without copying; otherwise the elements
    /// are moved into a trimmed allocation.
    pub fn into_boxed_slice(self) -> Box<[T]> {
        let (buf, len) = self.into_raw_parts();
        // SAFETY: the first `len` slots of `buf` are initialized and owned by us.
        unsafe { buf.into_boxed_slice(len) }
    }

    /// Splits the array into its buffer and live length without dropping
    /// any element.
    fn into_raw_parts(self) -> (RawBuffer<T>, usize) {
        let this = ManuallyDrop::new(self);
        // SAFETY: `this` is never used again, so the buffer is moved out
        // exactly once and `Drop for GrowableArray` does not run.
        let buf = unsafe { ptr::read(&this.buf) };
        (buf, this.len)
    }
}

impl<T> Default for GrowableArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for GrowableArray<T> {
    fn drop(&mut self) {
        // SAFETY: exactly the first `len` slots are initialized. The buffer
        // frees the allocation afterwards.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.buf.as_mut_ptr(),
                self.len,
            ));
        }
    }
}

impl<T: Clone> Clone for GrowableArray<T> {
    fn clone(&self) -> Self {
        let mut array = Self {
            buf: RawBuffer::allocate(self.buf.capacity()),
            len: 0,
            growth_factor: self.growth_factor,
        };
        // The capacity matches, so these pushes never grow.
        for item in self {
            array.push(item.clone());
        }
        array
    }
}

impl<T: fmt::Debug> fmt::Debug for GrowableArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for GrowableArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for GrowableArray<T> {}

impl<T> AsRef<[T]> for GrowableArray<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> Index<usize> for GrowableArray<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        match self.at(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> IndexMut<usize> for GrowableArray<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.len;
        match self.get_mut(index) {
            Some(value) => value,
            None => panic!("{}", IndexOutOfRange::PastEnd { index, len }),
        }
    }
}

impl<T> Extend<T> for GrowableArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T> From<Vec<T>> for GrowableArray<T> {
    /// Takes ownership of the vector's elements; the capacity snaps to their
    /// count (or the default for an empty vector).
    fn from(mut vec: Vec<T>) -> Self {
        let len = vec.len();
        let mut array = Self::from_parts(normalize_capacity(len), DEFAULT_GROWTH_FACTOR);
        // SAFETY: the destination has room for `len` values. After the copy
        // the vector forgets them (`set_len(0)`) so each is owned exactly once.
        unsafe {
            ptr::copy_nonoverlapping(vec.as_ptr(), array.buf.as_mut_ptr(), len);
            vec.set_len(0);
        }
        array.len = len;
        array
    }
}

impl<T: Clone> From<&[T]> for GrowableArray<T> {
    fn from(items: &[T]) -> Self {
        Self::from_items(&GrowthConfig::default(), items.iter().cloned())
    }
}

impl<T> FromIterator<T> for GrowableArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<T>>())
    }
}

impl<'a, T> IntoIterator for &'a GrowableArray<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for GrowableArray<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let (buf, len) = self.into_raw_parts();
        IntoIter::new(buf, len)
    }
}
