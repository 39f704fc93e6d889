//! Contiguous collection types. Namely [`Vector`], a growable buffer generic over its
//! [`Allocator`](crate::alloc::Allocator).
#![warn(missing_docs)]

pub mod vector;

#[doc(inline)]
pub use vector::Vector;
