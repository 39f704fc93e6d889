use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::mem::ManuallyDrop;
use std::ptr::{self, NonNull};
use std::slice;

use super::Vector;
use crate::alloc::Allocator;

impl<T, A: Allocator> IntoIterator for Vector<T, A> {
    type Item = T;

    type IntoIter = IntoIter<T, A>;

    fn into_iter(self) -> Self::IntoIter {
        let vec = ManuallyDrop::new(self);

        IntoIter {
            buf: vec.ptr,
            cap: vec.cap,
            start: 0,
            end: vec.len,
            // SAFETY: vec is never dropped, so the allocator is moved out exactly once.
            alloc: unsafe { ptr::read(&vec.alloc) },
            _phantom: PhantomData,
        }
    }
}

impl<'a, T, A: Allocator> IntoIterator for &'a Vector<T, A> {
    type Item = &'a T;

    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, A: Allocator> IntoIterator for &'a mut Vector<T, A> {
    type Item = &'a mut T;

    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// A type for owned iteration over a [`Vector`]. See [`Vector::into_iter`]. The buffer is
/// released once the iterator is dropped.
pub struct IntoIter<T, A: Allocator> {
    pub(crate) buf: NonNull<T>,
    pub(crate) cap: usize,
    // Values in [start, end) are still initialized and owned by the iterator.
    pub(crate) start: usize,
    pub(crate) end: usize,
    pub(crate) alloc: A,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T, A: Allocator> IntoIter<T, A> {
    /// Returns the remaining elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: All values in [start, end) are initialized and within the buffer.
        unsafe { slice::from_raw_parts(self.buf.add(self.start).as_ptr(), self.end - self.start) }
    }
}

impl<T, A: Allocator> Drop for IntoIter<T, A> {
    fn drop(&mut self) {
        for i in self.start..self.end {
            // SAFETY: All values in [start, end) haven't been yielded and are still initialized.
            unsafe { self.alloc.destroy(self.buf.add(i)) }
        }

        // SAFETY: The buffer came from a Vector with the same allocator and capacity.
        unsafe { Vector::<T, A>::release_buffer(&self.alloc, self.buf, self.cap) }
    }
}

impl<T, A: Allocator> Iterator for IntoIter<T, A> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.start < self.end {
            // SAFETY: start is in bounds and initialized. Incrementing start afterwards means the
            // value is effectively moved out of the buffer.
            let value = unsafe { self.buf.add(self.start).read() };
            self.start += 1;
            Some(value)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<T, A: Allocator> DoubleEndedIterator for IntoIter<T, A> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.start < self.end {
            self.end -= 1;
            // SAFETY: end has just been decremented and was greater than start, so it points to an
            // initialized value which is no longer tracked.
            Some(unsafe { self.buf.add(self.end).read() })
        } else {
            None
        }
    }
}

impl<T, A: Allocator> FusedIterator for IntoIter<T, A> {}

impl<T, A: Allocator> ExactSizeIterator for IntoIter<T, A> {
    fn len(&self) -> usize {
        self.end - self.start
    }
}
