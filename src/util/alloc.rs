use std::cell::{Cell, RefCell};
use std::ops::{Deref, DerefMut};
use std::ptr::NonNull;
use std::rc::Rc;

use crate::alloc::{AllocError, Allocator, Exhausted, Global};

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ZeroSizedType;

#[derive(Debug, Clone)]
pub struct CountedDrop(pub Rc<RefCell<usize>>);

impl CountedDrop {
    pub fn new(value: usize) -> CountedDrop {
        CountedDrop(Rc::new(RefCell::new(value)))
    }
}

impl Deref for CountedDrop {
    type Target = Rc<RefCell<usize>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for CountedDrop {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl Drop for CountedDrop {
    fn drop(&mut self) {
        self.0.replace_with(|v| *v + 1);
    }
}

impl PartialEq for CountedDrop {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// A value whose `clone` panics once the shared countdown reaches zero. Every instance dropped,
/// including the ones produced by successful clones, is counted.
#[derive(Debug)]
pub struct PanicOnClone {
    pub clones_left: Rc<Cell<usize>>,
    pub dropped: CountedDrop,
}

impl Clone for PanicOnClone {
    fn clone(&self) -> Self {
        let left = self.clones_left.get();
        if left == 0 {
            panic!("clone budget exhausted");
        }
        self.clones_left.set(left - 1);

        PanicOnClone {
            clones_left: self.clones_left.clone(),
            dropped: self.dropped.clone(),
        }
    }
}

#[derive(Debug, Default)]
pub struct Tracking {
    pub allocations: Cell<usize>,
    pub deallocations: Cell<usize>,
    pub live_slots: Cell<usize>,
    pub constructed: Cell<usize>,
    pub destroyed: Cell<usize>,
    /// Remaining allocations before the allocator reports exhaustion, unlimited if None.
    pub budget: Cell<Option<usize>>,
}

/// An [`Allocator`] wrapping [`Global`] that records every call made through it.
#[derive(Debug, Clone, Default)]
pub struct TrackingAlloc(pub Rc<Tracking>);

impl TrackingAlloc {
    pub fn new() -> TrackingAlloc {
        TrackingAlloc::default()
    }

    pub fn with_budget(budget: usize) -> TrackingAlloc {
        let alloc = TrackingAlloc::default();
        alloc.0.budget.set(Some(budget));
        alloc
    }

    pub fn outstanding(&self) -> usize {
        self.0.allocations.get() - self.0.deallocations.get()
    }
}

impl Deref for TrackingAlloc {
    type Target = Tracking;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

// SAFETY: All memory is delegated to Global, clones share the same bookkeeping.
unsafe impl Allocator for TrackingAlloc {
    fn allocate<T>(&self, count: usize) -> Result<NonNull<T>, AllocError> {
        if let Some(budget) = self.budget.get() {
            match budget.checked_sub(1) {
                Some(left) => self.budget.set(Some(left)),
                None => return Err(Exhausted { count }.into()),
            }
        }

        let ptr = Global.allocate(count)?;
        self.allocations.set(self.allocations.get() + 1);
        self.live_slots.set(self.live_slots.get() + count);
        Ok(ptr)
    }

    unsafe fn deallocate<T>(&self, ptr: NonNull<T>, count: usize) {
        self.deallocations.set(self.deallocations.get() + 1);
        self.live_slots.set(self.live_slots.get() - count);
        // SAFETY: ptr was allocated by Global in allocate with the same count.
        unsafe { Global.deallocate(ptr, count) }
    }

    unsafe fn construct<T>(&self, slot: NonNull<T>, value: T) {
        self.constructed.set(self.constructed.get() + 1);
        // SAFETY: Upheld by the caller.
        unsafe { slot.write(value) }
    }

    unsafe fn destroy<T>(&self, slot: NonNull<T>) {
        self.destroyed.set(self.destroyed.get() + 1);
        // SAFETY: Upheld by the caller.
        unsafe { slot.drop_in_place() }
    }
}
