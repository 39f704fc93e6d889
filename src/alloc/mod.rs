//! Pluggable allocation strategies for [`Vector`](crate::collections::contiguous::Vector).
//!
//! The standard library's `Allocator` trait isn't stable yet, so this module provides its own
//! [`Allocator`] capability trait, covering both the raw memory (`allocate` / `deallocate`) and
//! the lifecycle of individual values within it (`construct` / `destroy`). Containers take the
//! strategy as a type parameter, defaulting to [`Global`].

mod global;

pub use global::*;
#[doc(inline)]
pub use crate::util::error::{AllocError, CapacityOverflow, Exhausted};

use std::ptr::{self, NonNull};

/// A strategy for obtaining and releasing memory for values of any type.
///
/// Allocators are used by value inside of a container and are moved, swapped and cloned along
/// with it.
///
/// # Safety
/// Implementors must uphold the following:
/// - A pointer returned from [`allocate`](Allocator::allocate) is properly aligned for `T` and
///   valid for reads and writes of `count` values of `T` until it is passed to
///   [`deallocate`](Allocator::deallocate).
/// - Memory handed out must not be handed out again while it is still allocated.
/// - An allocator moved or cloned from another must be able to deallocate memory allocated by the
///   original.
pub unsafe trait Allocator {
    /// Allocates uninitialized memory for `count` values of `T`.
    ///
    /// Containers never call this with a zero-sized layout (`count == 0` or a zero-sized `T`).
    ///
    /// # Errors
    /// Returns [`AllocError::CapacityOverflow`] if the memory layout would exceed [`isize::MAX`]
    /// bytes and [`AllocError::Exhausted`] if the allocator can't provide the memory.
    fn allocate<T>(&self, count: usize) -> Result<NonNull<T>, AllocError>;

    /// Releases memory previously obtained from [`allocate`](Allocator::allocate).
    ///
    /// # Safety
    /// `ptr` must have been returned by `allocate::<T>(count)` on this allocator (or one it was
    /// moved or cloned from) with the same `count`, and must not be used afterwards.
    unsafe fn deallocate<T>(&self, ptr: NonNull<T>, count: usize);

    /// Moves `value` into the uninitialized slot at `slot`.
    ///
    /// # Safety
    /// `slot` must be valid for writes and properly aligned. Any value previously in the slot is
    /// overwritten without being dropped.
    unsafe fn construct<T>(&self, slot: NonNull<T>, value: T) {
        // SAFETY: The caller guarantees that slot is valid for writes and aligned.
        unsafe { slot.write(value) }
    }

    /// Drops the value stored at `slot` in place, leaving the slot uninitialized.
    ///
    /// # Safety
    /// `slot` must point to an initialized value of `T` that isn't used again until it is
    /// reconstructed.
    unsafe fn destroy<T>(&self, slot: NonNull<T>) {
        // SAFETY: The caller guarantees that slot is initialized and won't be reused.
        unsafe { ptr::drop_in_place(slot.as_ptr()) }
    }
}
