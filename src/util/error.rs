use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// An index was outside the live elements of a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfBounds {
    /// The requested index.
    pub index: usize,
    /// The length of the collection at the time of the request.
    pub len: usize,
}

impl Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Index {} out of bounds for collection with {} elements!", self.index, self.len)
    }
}

impl Error for IndexOutOfBounds {}

/// A length or capacity would exceed what can be represented or allocated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityOverflow;

impl Display for CapacityOverflow {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Capacity overflow!")
    }
}

impl Error for CapacityOverflow {}

/// The allocator was unable to provide the requested memory.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Allocator exhausted while requesting {count} elements!")]
pub struct Exhausted {
    /// The number of elements requested.
    pub count: usize,
}

/// Element-wise operations require both operands to have the same length.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Size mismatch between operands with {left} and {right} elements!")]
pub struct SizeMismatch {
    /// The length of the left operand.
    pub left: usize,
    /// The length of the right operand.
    pub right: usize,
}

/// Any failure to obtain memory from an [`Allocator`](crate::alloc::Allocator).
#[derive(Debug, Display, Error, From, TryInto, IsVariant, Clone, Copy, PartialEq, Eq)]
pub enum AllocError {
    /// The requested layout can't be represented.
    CapacityOverflow(CapacityOverflow),
    /// The allocator has no memory left to give.
    Exhausted(Exhausted),
}
