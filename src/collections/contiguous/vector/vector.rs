use std::borrow::{Borrow, BorrowMut};
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::mem;
use std::ops::{Deref, DerefMut};
use std::ptr::{self, NonNull};
use std::slice;

use super::growth;
use crate::alloc::{AllocError, Allocator, CapacityOverflow, Global};
use crate::util::error::IndexOutOfBounds;
use crate::util::result::ResultExtension;

/// A variable size contiguous collection, generic over the [`Allocator`] used for its buffer.
///
/// Capacity grows in powers of two when pushing, but is otherwise exactly the value provided to
/// [`reserve`](Vector::reserve), [`with_cap`](Vector::with_cap) and friends. Reallocation moves
/// all elements into the new buffer before the old one is released, so a failed allocation leaves
/// the Vector untouched. Any reallocation invalidates pointers obtained through
/// [`as_ptr`](Vector::as_ptr).
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Vector.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `at` | `O(1)` |
/// | `len` | `O(1)` |
/// | `push_back` | `O(1)`*, `O(n)` |
/// | `pop_back` | `O(1)` |
/// | `insert` | `O(n-i)` |
/// | `remove` | `O(n-i)` |
/// | `reserve` | `O(n)`**, `O(1)` |
/// | `resize` | `O(n)` |
/// | `shrink_to_fit` | `O(n)` |
/// | `swap` | `O(1)` |
///
/// \* If the Vector doesn't have enough capacity for the new element, `push_back` will take
/// `O(n)`.
///
/// \** If the Vector has enough capacity already, `reserve` is `O(1)`.
pub struct Vector<T, A: Allocator = Global> {
    pub(crate) ptr: NonNull<T>,
    pub(crate) len: usize,
    pub(crate) cap: usize,
    pub(crate) alloc: A,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> Vector<T> {
    /// Creates a new Vector with length and capacity 0. Memory will be allocated when the capacity
    /// changes.
    ///
    /// # Examples
    /// ```
    /// # use sequence_lib::collections::contiguous::Vector;
    /// let vec: Vector<u8> = Vector::new();
    /// assert_eq!(vec.len(), 0);
    /// assert_eq!(vec.cap(), 0);
    /// assert!(vec.as_ptr().is_null());
    /// ```
    pub const fn new() -> Vector<T> {
        Vector::new_in(Global)
    }

    /// Creates a new Vector with capacity exactly equal to the provided value, allowing values to
    /// be added without reallocation.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use sequence_lib::collections::contiguous::Vector;
    /// let vec: Vector<u8> = Vector::with_cap(5);
    /// assert_eq!(vec.cap(), 5);
    /// assert!(vec.is_empty());
    /// ```
    pub fn with_cap(cap: usize) -> Vector<T> {
        Vector::with_cap_in(cap, Global)
    }
}

impl<T: Default> Vector<T> {
    /// Creates a new Vector containing `len` default values, with capacity exactly `len`.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use sequence_lib::collections::contiguous::Vector;
    /// let vec: Vector<u32> = Vector::with_len(50);
    /// assert_eq!(vec.len(), 50);
    /// assert_eq!(vec.cap(), 50);
    /// assert!(vec.iter().all(|i| *i == 0));
    /// ```
    pub fn with_len(len: usize) -> Vector<T> {
        Vector::with_len_in(len, Global)
    }
}

impl<T: Default, A: Allocator> Vector<T, A> {
    /// Creates a new Vector containing `len` default values within the provided allocator.
    ///
    /// # Panics
    /// Panics if the allocator can't provide memory for `len` elements.
    pub fn with_len_in(len: usize, alloc: A) -> Vector<T, A> {
        let mut vec = Vector::with_cap_in(len, alloc);

        for _ in 0..len {
            // SAFETY: vec has been created with capacity for exactly len elements.
            unsafe { vec.push_unchecked(T::default()); }
        }

        vec
    }

    /// Resizes the Vector to contain exactly `len` elements, filling new slots with the default
    /// value of `T`. See [`resize_with`](Vector::resize_with).
    ///
    /// # Panics
    /// Panics if the required capacity can't be allocated.
    ///
    /// # Examples
    /// ```
    /// # use sequence_lib::collections::contiguous::Vector;
    /// let mut vec = Vector::from([1_u8, 2, 3]);
    /// vec.resize(5);
    /// assert_eq!(&*vec, &[1, 2, 3, 0, 0]);
    /// assert_eq!(vec.cap(), 8);
    /// vec.resize(1);
    /// assert_eq!(&*vec, &[1]);
    /// assert_eq!(vec.cap(), 8);
    /// ```
    pub fn resize(&mut self, len: usize) {
        self.resize_with(len, T::default);
    }
}

impl<T, A: Allocator> Vector<T, A> {
    /// Creates a new, empty Vector which will use the provided allocator once memory is required.
    pub const fn new_in(alloc: A) -> Vector<T, A> {
        Vector {
            ptr: NonNull::dangling(),
            len: 0,
            cap: 0,
            alloc,
            _phantom: PhantomData,
        }
    }

    /// Creates a new Vector with capacity exactly `cap`, allocated within `alloc`.
    ///
    /// # Panics
    /// Panics if the allocator can't provide memory for `cap` elements.
    pub fn with_cap_in(cap: usize, alloc: A) -> Vector<T, A> {
        Vector::try_with_cap_in(cap, alloc).throw()
    }

    /// Creates a new Vector with capacity exactly `cap`, allocated within `alloc`, returning an
    /// error rather than panicking if the allocation fails.
    pub fn try_with_cap_in(cap: usize, alloc: A) -> Result<Vector<T, A>, AllocError> {
        let ptr = Vector::<T, A>::allocate_buffer(&alloc, cap)?;

        Ok(Vector {
            ptr,
            len: 0,
            cap,
            alloc,
            _phantom: PhantomData,
        })
    }

    /// Creates a Vector within `alloc` from the items of `iter`, in order.
    ///
    /// # Panics
    /// Panics if the allocator can't provide the required memory.
    pub fn from_iter_in<I: IntoIterator<Item = T>>(iter: I, alloc: A) -> Vector<T, A> {
        let iter = iter.into_iter();
        let mut vec = Vector::with_cap_in(iter.size_hint().0, alloc);
        vec.extend(iter);
        vec
    }

    /// Returns the length of the Vector.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns the current capacity of the Vector: the number of allocated slots, initialized or
    /// not.
    pub const fn cap(&self) -> usize {
        self.cap
    }

    /// Returns true if the Vector holds no elements, either because it has length 0 or because it
    /// owns no allocation at all.
    ///
    /// # Examples
    /// ```
    /// # use sequence_lib::collections::contiguous::Vector;
    /// let mut vec: Vector<u8> = Vector::new();
    /// assert!(vec.is_empty());
    /// vec.push_back(1);
    /// assert!(!vec.is_empty());
    /// ```
    pub const fn is_empty(&self) -> bool {
        self.len == 0 || self.cap == 0
    }

    /// Returns a reference to the allocator used by this Vector.
    pub const fn allocator(&self) -> &A {
        &self.alloc
    }

    /// Returns a raw pointer to the underlying buffer, or a null pointer if the Vector owns no
    /// allocation. The pointer is invalidated by any operation that reallocates.
    pub const fn as_ptr(&self) -> *const T {
        if self.cap == 0 {
            ptr::null()
        } else {
            self.ptr.as_ptr().cast_const()
        }
    }

    /// Returns a mutable raw pointer to the underlying buffer, or a null pointer if the Vector owns
    /// no allocation. The pointer is invalidated by any operation that reallocates.
    pub const fn as_mut_ptr(&mut self) -> *mut T {
        if self.cap == 0 {
            ptr::null_mut()
        } else {
            self.ptr.as_ptr()
        }
    }

    /// Returns a reference to the first element, if there is one.
    pub fn front(&self) -> Option<&T> {
        self.first()
    }

    /// Returns a mutable reference to the first element, if there is one.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.first_mut()
    }

    /// Returns a reference to the last element, if there is one.
    pub fn back(&self) -> Option<&T> {
        self.last()
    }

    /// Returns a mutable reference to the last element, if there is one.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.last_mut()
    }

    /// Returns a reference to the element at `index`, checking that it is in bounds.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= len`.
    ///
    /// # Examples
    /// ```
    /// # use sequence_lib::collections::contiguous::Vector;
    /// let vec = Vector::from([1, 2, 3, 4, 5, 6]);
    /// assert_eq!(vec.at(2), Ok(&3));
    /// assert!(vec.at(6).is_err());
    /// ```
    pub fn at(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        self.check_index(index)?;
        // SAFETY: index has been checked to be less than len.
        Ok(unsafe { self.get_unchecked(index) })
    }

    /// Returns a mutable reference to the element at `index`, checking that it is in bounds.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= len`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        self.check_index(index)?;
        // SAFETY: index has been checked to be less than len.
        Ok(unsafe { self.get_unchecked_mut(index) })
    }

    /// Returns a reference to the element at `index` without any bounds checking.
    ///
    /// # Safety
    /// `index` must be less than [`len`](Vector::len). Calling this method with an out of bounds
    /// index is undefined behavior, even if the returned reference isn't used.
    pub const unsafe fn get_unchecked(&self, index: usize) -> &T {
        // SAFETY: The caller guarantees that index < len, so the value is in bounds and
        // initialized.
        unsafe { self.ptr.add(index).as_ref() }
    }

    /// Returns a mutable reference to the element at `index` without any bounds checking.
    ///
    /// # Safety
    /// `index` must be less than [`len`](Vector::len). Calling this method with an out of bounds
    /// index is undefined behavior, even if the returned reference isn't used.
    pub const unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        // SAFETY: The caller guarantees that index < len, so the value is in bounds and
        // initialized. The mutable borrow of self ensures uniqueness.
        unsafe { self.ptr.add(index).as_mut() }
    }

    /// Push the provided value onto the end of the Vector, increasing the capacity if required.
    ///
    /// The Vector grows whenever its capacity doesn't strictly exceed `len + 1`, rounding
    /// `cap + 1` up to the next power of two.
    ///
    /// # Panics
    /// Panics if the new capacity can't be allocated.
    ///
    /// # Examples
    /// ```
    /// # use sequence_lib::collections::contiguous::Vector;
    /// let mut vec = Vector::new();
    /// vec.push_back(1);
    /// vec.push_back(2);
    /// assert_eq!(vec.front(), Some(&1));
    /// assert_eq!(vec.back(), Some(&2));
    /// ```
    pub fn push_back(&mut self, value: T) {
        self.grow_for_push().throw();
        // SAFETY: The capacity has just been adjusted to support the addition of the new item.
        unsafe { self.push_unchecked(value) }
    }

    /// Constructs a new element at the end of the Vector using `make`, returning a mutable
    /// reference to it. Growth follows the same rules as [`push_back`](Vector::push_back), and
    /// happens before `make` is invoked.
    ///
    /// # Panics
    /// Panics if the new capacity can't be allocated.
    ///
    /// # Examples
    /// ```
    /// # use sequence_lib::collections::contiguous::Vector;
    /// let mut strs: Vector<String> = Vector::new();
    /// strs.emplace_back(|| "Hello".to_owned());
    /// strs.emplace_back(|| String::from("World")).push('!');
    /// assert_eq!(strs[1], "World!");
    /// ```
    pub fn emplace_back<F: FnOnce() -> T>(&mut self, make: F) -> &mut T {
        self.grow_for_push().throw();
        // SAFETY: The capacity has just been adjusted to support the addition of the new item.
        unsafe { self.push_unchecked(make()) };
        // SAFETY: The Vector has just had an element pushed, so len - 1 is in bounds.
        unsafe { self.get_unchecked_mut(self.len - 1) }
    }

    /// Push the provided value onto the end of the Vector, assuming that there is enough capacity
    /// to do so.
    ///
    /// # Safety
    /// It is up to the caller to ensure that `len < cap`, using methods like
    /// [`reserve`](Vector::reserve) or [`with_cap`](Vector::with_cap). Using this method on a
    /// Vector without enough capacity is undefined behavior.
    pub unsafe fn push_unchecked(&mut self, value: T) {
        // SAFETY: It is up to the caller to ensure that the Vector has enough capacity for this
        // push, so the slot at len is allocated and uninitialized.
        unsafe { self.alloc.construct(self.ptr.add(self.len), value) }
        self.len += 1;
    }

    /// Removes the last value from the Vector and returns it, or [`None`] if the Vector is empty.
    /// Capacity is unaffected.
    ///
    /// # Examples
    /// ```
    /// # use sequence_lib::collections::contiguous::Vector;
    /// let mut vec = Vector::from([1, 2]);
    /// assert_eq!(vec.pop_back(), Some(2));
    /// assert_eq!(vec.pop_back(), Some(1));
    /// assert_eq!(vec.pop_back(), None);
    /// assert_eq!(vec.cap(), 2);
    /// ```
    pub fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            // Decrement len before reading, the slot is logically uninitialized from here on.
            self.len -= 1;

            // SAFETY: len has just been decremented and is within the capacity of the Vector. The
            // value is read out bitwise and never accessed through the buffer again.
            Some(unsafe { self.ptr.add(self.len).read() })
        }
    }

    /// Inserts the provided value at `index`, shifting all following elements back by one.
    ///
    /// # Panics
    /// Panics if `index > len` or the new capacity can't be allocated.
    ///
    /// # Examples
    /// ```
    /// # use sequence_lib::collections::contiguous::Vector;
    /// let mut vec = Vector::from([0, 1, 2]);
    /// vec.insert(1, 100);
    /// vec.insert(4, 200);
    /// assert_eq!(&*vec, &[0, 100, 1, 2, 200]);
    /// ```
    pub fn insert(&mut self, index: usize, value: T) {
        if index > self.len {
            Err(IndexOutOfBounds { index, len: self.len }).throw()
        }

        self.grow_for_push().throw();

        // SAFETY: There is capacity for one more element, so shifting [index, len) back by one
        // stays in bounds. ptr::copy handles the overlap.
        unsafe {
            let slot = self.ptr.add(index);
            ptr::copy(slot.as_ptr(), slot.add(1).as_ptr(), self.len - index);
            self.alloc.construct(slot, value);
        }

        self.len += 1;
    }

    /// Removes and returns the element at `index`, shifting all following elements forward.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    ///
    /// # Examples
    /// ```
    /// # use sequence_lib::collections::contiguous::Vector;
    /// let mut vec: Vector<_> = "Hello".chars().collect();
    /// assert_eq!(vec.remove(1), 'e');
    /// assert_eq!(&*vec, &['H', 'l', 'l', 'o']);
    /// ```
    pub fn remove(&mut self, index: usize) -> T {
        self.check_index(index).throw();

        // SAFETY: index < len, so the value is initialized. After reading it out, the following
        // elements are moved forward over the vacated slot.
        unsafe {
            let slot = self.ptr.add(index);
            let value = slot.read();
            ptr::copy(slot.add(1).as_ptr(), slot.as_ptr(), self.len - index - 1);
            self.len -= 1;
            value
        }
    }

    /// Ensures that the Vector has capacity for at least `cap` elements in total. If `cap` is
    /// less than or equal to the current capacity, nothing happens. Otherwise a buffer of exactly
    /// `cap` slots is allocated and all elements are moved into it.
    ///
    /// # Panics
    /// Panics if the new buffer can't be allocated, in which case the Vector is left unmodified.
    ///
    /// # Examples
    /// ```
    /// # use sequence_lib::collections::contiguous::Vector;
    /// let mut vec = Vector::from([1, 2, 3]);
    /// vec.reserve(10);
    /// assert_eq!(vec.cap(), 10);
    /// vec.reserve(4);
    /// assert_eq!(vec.cap(), 10);
    /// ```
    pub fn reserve(&mut self, cap: usize) {
        self.try_reserve(cap).throw()
    }

    /// The fallible version of [`reserve`](Vector::reserve).
    ///
    /// # Errors
    /// Returns an [`AllocError`] if the allocator can't provide the new buffer. The Vector's
    /// contents and capacity are unchanged when this happens.
    pub fn try_reserve(&mut self, cap: usize) -> Result<(), AllocError> {
        if cap <= self.cap { return Ok(()); }

        self.realloc_with_cap(cap)
    }

    /// Resizes the Vector to contain exactly `len` elements.
    ///
    /// If `len` is not greater than the current length, the Vector is [truncated](Vector::truncate)
    /// and the capacity stays the same. Otherwise the capacity is reserved up to the next power of
    /// two of `len` and new elements are produced by calling `fill`.
    ///
    /// # Panics
    /// Panics if the required capacity overflows or can't be allocated.
    pub fn resize_with<F: FnMut() -> T>(&mut self, len: usize, mut fill: F) {
        if len <= self.len {
            self.truncate(len);
            return;
        }

        let cap = growth::alloc_size(len).ok_or(CapacityOverflow).throw();
        self.reserve(cap);

        while self.len < len {
            // SAFETY: The capacity has been reserved to at least len.
            unsafe { self.push_unchecked(fill()) }
        }
    }

    /// Shortens the Vector to `len` elements, destroying the rest. Has no effect if `len` is
    /// greater than or equal to the current length. Capacity is unaffected.
    pub fn truncate(&mut self, len: usize) {
        if len >= self.len { return; }

        let old_len = self.len;
        // Shrink first so that a panicking destructor can't lead to a double drop.
        self.len = len;

        for i in len..old_len {
            // SAFETY: All values in [len, old_len) were initialized and are no longer reachable
            // through the Vector.
            unsafe { self.alloc.destroy(self.ptr.add(i)) }
        }
    }

    /// Removes all elements from the Vector, keeping its capacity.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Shrinks the Vector so that its capacity is equal to its length. A Vector with no elements
    /// releases its allocation entirely.
    ///
    /// # Panics
    /// Panics if the new buffer can't be allocated.
    ///
    /// # Examples
    /// ```
    /// # use sequence_lib::collections::contiguous::Vector;
    /// let mut vec: Vector<u8> = Vector::with_cap(10);
    /// vec.push_back(1);
    /// vec.shrink_to_fit();
    /// assert_eq!(vec.cap(), 1);
    /// ```
    pub fn shrink_to_fit(&mut self) {
        if self.len == self.cap { return; }

        self.realloc_with_cap(self.len).throw()
    }

    /// Exchanges the contents, capacity and allocator of two Vectors without moving any elements.
    pub fn swap(&mut self, other: &mut Vector<T, A>) {
        mem::swap(self, other);
    }

    /// Ensures that the Vector can take at least one more element, following the push growth
    /// policy.
    pub(crate) fn grow_for_push(&mut self) -> Result<(), AllocError> {
        if self.cap - self.len > 1 { return Ok(()); }

        let request = self.cap.checked_add(1).ok_or(CapacityOverflow)?;
        let new_cap = growth::alloc_size(request).ok_or(CapacityOverflow)?;

        self.try_reserve(new_cap)
    }

    /// Moves all elements into a freshly allocated buffer of exactly `new_cap` slots, then
    /// releases the old buffer. Nothing is modified if the allocation fails.
    pub(crate) fn realloc_with_cap(&mut self, new_cap: usize) -> Result<(), AllocError> {
        debug_assert!(new_cap >= self.len);

        let new_ptr = Vector::<T, A>::allocate_buffer(&self.alloc, new_cap)?;

        // SAFETY: Both buffers are valid for len elements and can't overlap because new_ptr was
        // just allocated (or is dangling for zero-sized layouts, where the copy is a no-op).
        unsafe { ptr::copy_nonoverlapping(self.ptr.as_ptr(), new_ptr.as_ptr(), self.len) }

        // SAFETY: The old buffer was allocated with the current cap and its values have all been
        // moved out bitwise.
        unsafe { Vector::<T, A>::release_buffer(&self.alloc, self.ptr, self.cap) }

        self.ptr = new_ptr;
        self.cap = new_cap;
        Ok(())
    }

    /// Allocates a buffer for `cap` elements, without involving the allocator for zero-sized
    /// layouts.
    pub(crate) fn allocate_buffer(alloc: &A, cap: usize) -> Result<NonNull<T>, AllocError> {
        if cap == 0 || size_of::<T>() == 0 {
            Ok(NonNull::dangling())
        } else {
            alloc.allocate(cap)
        }
    }

    /// The counterpart to [`Vector::allocate_buffer`].
    ///
    /// # Safety
    /// `ptr` must have been returned by `allocate_buffer` with the same `alloc` and `cap`.
    pub(crate) unsafe fn release_buffer(alloc: &A, ptr: NonNull<T>, cap: usize) {
        if cap != 0 && size_of::<T>() != 0 {
            // SAFETY: Non-zero layouts were allocated by alloc with this same cap.
            unsafe { alloc.deallocate(ptr, cap) }
        }
    }

    pub(crate) const fn check_index(&self, index: usize) -> Result<(), IndexOutOfBounds> {
        if index < self.len {
            Ok(())
        } else {
            Err(IndexOutOfBounds { index, len: self.len })
        }
    }
}

impl<T, A: Allocator + Default> Vector<T, A> {
    /// Moves the contents out of this Vector, leaving it empty with no allocation.
    ///
    /// # Examples
    /// ```
    /// # use sequence_lib::collections::contiguous::Vector;
    /// let mut a = Vector::from([1, 2, 3]);
    /// let b = a.take();
    /// assert_eq!((a.len(), a.cap()), (0, 0));
    /// assert_eq!(&*b, &[1, 2, 3]);
    /// ```
    pub fn take(&mut self) -> Vector<T, A> {
        mem::take(self)
    }
}

impl<T, A: Allocator> Extend<T> for Vector<T, A> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            if self.len < self.cap {
                // SAFETY: There is at least one free slot.
                unsafe { self.push_unchecked(item) }
            } else {
                self.push_back(item);
            }
        }
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        Vector::from_iter_in(value, Global)
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T> {
    /// Creates a Vector with capacity exactly `N`, moving in each element in order.
    fn from(value: [T; N]) -> Self {
        let mut vec = Vector::with_cap(N);

        for item in value {
            // SAFETY: vec has been created with capacity for all N elements.
            unsafe { vec.push_unchecked(item); }
        }

        vec
    }
}

impl<T: Clone> From<&[T]> for Vector<T> {
    /// Creates a Vector with capacity exactly `value.len()`, cloning each element in order.
    fn from(value: &[T]) -> Self {
        let mut vec = Vector::with_cap(value.len());

        for item in value {
            // SAFETY: vec has been created with capacity for every element of value. If clone
            // panics, vec only drops the elements pushed so far.
            unsafe { vec.push_unchecked(item.clone()); }
        }

        vec
    }
}

impl<T, A: Allocator + Default> Default for Vector<T, A> {
    fn default() -> Self {
        Self::new_in(A::default())
    }
}

impl<T, A: Allocator> Drop for Vector<T, A> {
    fn drop(&mut self) {
        self.truncate(0);

        // SAFETY: The buffer was allocated by allocate_buffer with the current cap and all values
        // have been destroyed.
        unsafe { Vector::<T, A>::release_buffer(&self.alloc, self.ptr, self.cap) }
    }
}

impl<T, A: Allocator> Deref for Vector<T, A> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: Vector is valid as a slice for len values, which are all initialized. The pointer
        // is nonnull and properly aligned, even when dangling for an empty Vector.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }
}

impl<T, A: Allocator> DerefMut for Vector<T, A> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: As for deref, with uniqueness guaranteed by the mutable borrow of self.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }
}

impl<T, A: Allocator> AsRef<[T]> for Vector<T, A> {
    fn as_ref(&self) -> &[T] {
        self
    }
}

impl<T, A: Allocator> AsMut<[T]> for Vector<T, A> {
    fn as_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T, A: Allocator> Borrow<[T]> for Vector<T, A> {
    fn borrow(&self) -> &[T] {
        self
    }
}

impl<T, A: Allocator> BorrowMut<[T]> for Vector<T, A> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self
    }
}

// SAFETY: Vectors uniquely own their buffer, so they can be sent when both the elements and the
// allocator can.
unsafe impl<T: Send, A: Allocator + Send> Send for Vector<T, A> {}
// SAFETY: Vector's safe API obeys all rules of the borrow checker, so no interior mutability
// occurs.
unsafe impl<T: Sync, A: Allocator + Sync> Sync for Vector<T, A> {}

impl<T: Clone, A: Allocator + Clone> Clone for Vector<T, A> {
    /// Deep copies every element into a new buffer with the same capacity as self.
    fn clone(&self) -> Self {
        let mut vec = Vector::with_cap_in(self.cap, self.alloc.clone());

        for value in self.iter() {
            // SAFETY: vec has the same capacity as self, which is at least len. A panicking clone
            // leaves vec holding only the elements cloned so far, which it drops.
            unsafe { vec.push_unchecked(value.clone()); }
        }

        vec
    }

    /// Copies `source` into self. The copy is built completely before being swapped in, so a
    /// panicking clone leaves self untouched.
    fn clone_from(&mut self, source: &Self) {
        let mut copy = source.clone();
        self.swap(&mut copy);
    }
}

impl<T: Hash, A: Allocator> Hash for Vector<T, A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl<T: Debug, A: Allocator> Debug for Vector<T, A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector")
            .field("contents", &&**self)
            .field("len", &self.len)
            .field("cap", &self.cap)
            .finish()
    }
}

impl<T: Debug, A: Allocator> Display for Vector<T, A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Creates a [`Vector`] containing the provided elements, with capacity equal to their count.
///
/// # Examples
/// ```
/// # use sequence_lib::vector;
/// let vec = vector![1, 2, 3, 4, 5];
/// assert_eq!(vec.len(), 5);
/// assert_eq!(vec.cap(), 5);
/// ```
#[macro_export]
macro_rules! vector {
    () => {
        $crate::collections::contiguous::Vector::new()
    };
    ($($item:expr),+ $(,)?) => {
        $crate::collections::contiguous::Vector::from([$($item),+])
    };
}
