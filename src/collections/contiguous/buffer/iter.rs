use std::fmt::{self, Debug, Formatter};
use std::iter::FusedIterator;
use std::mem::MaybeUninit;
use std::ptr;
use std::slice;

use super::Buffer;
#[allow(unused)]
use crate::collections::contiguous::Vector;

impl<T> IntoIterator for Buffer<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let size = self.size();
        IntoIter::new(self.forget_init(), size)
    }
}

/// An owned type for owned iteration over a [`Buffer`] or [`Vector`]. See [`Buffer::into_iter`] and
/// [`Vector::into_iter`].
///
/// The iterator keeps the original block alive and frees it when dropped, along with any values
/// that haven't been yielded.
pub struct IntoIter<T> {
    buf: Buffer<MaybeUninit<T>>,
    start: usize,
    end: usize,
}

impl<T> IntoIter<T> {
    /// Creates an iterator over the first `len` values of `buf`, which must all be initialized.
    pub(crate) fn new(buf: Buffer<MaybeUninit<T>>, len: usize) -> IntoIter<T> {
        debug_assert!(len <= buf.size());
        IntoIter {
            buf,
            start: 0,
            end: len,
        }
    }

    /// Returns the values that are yet to be yielded as a slice.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: Values in start..end are initialized and within the allocated range of the block.
        // The slice borrows self, so the values can't be yielded while it is alive.
        unsafe {
            slice::from_raw_parts(
                self.buf.data().add(self.start).as_ptr().cast(),
                self.end - self.start,
            )
        }
    }
}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        // SAFETY: start <= end <= size, so the offset is within the allocated range of the block.
        let first = unsafe { self.buf.data().add(self.start) };
        let remaining = ptr::slice_from_raw_parts_mut(first.as_ptr().cast::<T>(), self.len());
        self.start = self.end;

        // SAFETY: Values in the remaining range are initialized and haven't been yielded, so they
        // are ready to drop.
        unsafe { ptr::drop_in_place(remaining) }

        // The block itself is freed when buf is dropped, which doesn't touch the values.
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.start < self.end {
            // SAFETY: start < end, so the value is initialized and within range. Incrementing start
            // afterwards means the value on the heap is never read or dropped again, which is as
            // close as we can get to moving it off of the heap.
            let value = unsafe { self.buf.data().add(self.start).read().assume_init() };
            self.start += 1;
            Some(value)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.end - self.start;
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.start < self.end {
            self.end -= 1;
            // SAFETY: The newly decremented end is >= start, so the value is initialized, within
            // range and hasn't been yielded.
            let value = unsafe { self.buf.data().add(self.end).read().assume_init() };
            Some(value)
        } else {
            None
        }
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.end - self.start
    }
}

impl<T: Debug> Debug for IntoIter<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

// Borrowed iteration uses the iter and iter_mut definitions provided by Deref<Target = [T]>.
impl<'a, T> IntoIterator for &'a Buffer<T> {
    type Item = &'a T;

    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Buffer<T> {
    type Item = &'a mut T;

    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
