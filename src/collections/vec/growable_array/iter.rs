//! Borrowing and owning iterators for `GrowableArray`.

use super::GrowableArray;
use crate::collections::vec::raw_buffer::RawBuffer;
use core::iter::FusedIterator;
use core::{fmt, ptr};

/// Iterator over `&T` for a `GrowableArray`.
///
/// Walks indices `[0, len)` of the live buffer directly. Cloning an iterator
/// captures its position, so a fresh clone replays the same sequence.
pub struct Iter<'a, T> {
    array: &'a GrowableArray<T>,
    front: usize,
    back: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(super) fn new(array: &'a GrowableArray<T>) -> Self {
        Self {
            array,
            front: 0,
            back: array.len(),
        }
    }

    /// Returns how many items remain.
    pub fn remaining(&self) -> usize {
        self.back - self.front
    }
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self {
            array: self.array,
            front: self.front,
            back: self.back,
        }
    }
}

impl<'a, T: fmt::Debug> fmt::Debug for Iter<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter")
            .field(&&self.array.as_slice()[self.front..self.back])
            .finish()
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let i = self.front;
        self.front += 1;
        // SAFETY: `i < back <= array.len()`.
        Some(unsafe { self.array.get_unchecked(i) })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.remaining();
        (rem, Some(rem))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        // SAFETY: `front <= back < array.len()`.
        Some(unsafe { self.array.get_unchecked(self.back) })
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}
impl<'a, T> FusedIterator for Iter<'a, T> {}

/// Owning iterator for a `GrowableArray`.
///
/// Elements not yet yielded are dropped together with the iterator.
pub struct IntoIter<T> {
    buf: RawBuffer<T>,
    front: usize,
    back: usize,
}

impl<T> IntoIter<T> {
    pub(super) fn new(buf: RawBuffer<T>, len: usize) -> Self {
        Self {
            buf,
            front: 0,
            back: len,
        }
    }

    /// Returns how many items remain.
    pub fn remaining(&self) -> usize {
        self.back - self.front
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        if self.front >= self.back {
            return None;
        }
        let i = self.front;
        self.front += 1;
        // SAFETY: slot `i` is initialized and is read out exactly once
        // because `front` has moved past it.
        Some(unsafe { ptr::read(self.buf.as_ptr().add(i)) })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.remaining();
        (rem, Some(rem))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        // SAFETY: slot `back` is initialized and is read out exactly once.
        Some(unsafe { ptr::read(self.buf.as_ptr().add(self.back)) })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        // SAFETY: slots `[front, back)` are initialized and not yet yielded.
        unsafe {
            let remaining = self.buf.as_mut_ptr().add(self.front);
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                remaining,
                self.back - self.front,
            ));
        }
    }
}
