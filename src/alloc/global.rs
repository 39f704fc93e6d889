use std::alloc::{self, Layout};
use std::ptr::NonNull;

use super::{AllocError, Allocator, CapacityOverflow};

/// The default [`Allocator`], forwarding to the global allocator registered with Rust.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Global;

impl Global {
    /// Creates a [`Layout`] for `count` values of `T`.
    pub(crate) fn make_layout<T>(count: usize) -> Result<Layout, CapacityOverflow> {
        Layout::array::<T>(count).map_err(|_| CapacityOverflow)
    }
}

// SAFETY: Memory is obtained from and returned to the global allocator using identical layouts,
// and Global holds no state, so any instance can release memory allocated by another.
unsafe impl Allocator for Global {
    /// # Errors
    /// Out of memory conditions don't return an error. As recommended, this method calls
    /// [`alloc::handle_alloc_error`] instead.
    fn allocate<T>(&self, count: usize) -> Result<NonNull<T>, AllocError> {
        let layout = Global::make_layout::<T>(count)?;

        if layout.size() == 0 {
            return Ok(NonNull::dangling());
        }

        // SAFETY: Zero-sized layouts have been guarded against.
        let raw_ptr: *mut T = unsafe { alloc::alloc(layout).cast() };

        Ok(NonNull::new(raw_ptr).unwrap_or_else(|| alloc::handle_alloc_error(layout)))
    }

    unsafe fn deallocate<T>(&self, ptr: NonNull<T>, count: usize) {
        // The layout was already validated when the memory was allocated.
        let Ok(layout) = Global::make_layout::<T>(count) else {
            return;
        };

        if layout.size() != 0 {
            // SAFETY: The caller guarantees that ptr was allocated by the global allocator with
            // this same layout.
            unsafe { alloc::dealloc(ptr.as_ptr().cast(), layout) }
        }
    }
}
