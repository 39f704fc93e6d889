//! A module containing [`Vector`] and associated types.
//!
//! The only other included type is [`IntoIter`] for owned iteration over a Vector.
//! [`IterMut`](std::slice::IterMut) and [`Iter`](std::slice::Iter) from [`std::slice`] are used
//! for borrowed iteration, reverse traversal comes from their [`DoubleEndedIterator`] impls.
//!
//! [`Vector`] is also re-exported under the parent module.

pub mod growth;
mod iter;
mod ops;
mod vector;

pub use iter::*;
#[doc(inline)]
pub use crate::util::error::{IndexOutOfBounds, SizeMismatch};
pub use vector::*;
