//! Sequence container types.
//!
//! # Method
//! [`Vector`](contiguous::Vector) implements [`Deref<Target = [T]>`](std::ops::Deref) (and
//! DerefMut), which provides sorting, searching, slicing and safe indexing without repeating them
//! here. The linked lists are self contained.
//!
//! # Features
//! Each family of collections sits behind a Cargo feature: `contiguous` and `linked`, both enabled
//! by `collections-all` (the default).

#[cfg(feature = "contiguous")]
pub mod contiguous;
#[cfg(feature = "linked")]
pub mod linked;
