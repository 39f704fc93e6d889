//! Generic sequence containers with explicit, pluggable allocation.
//!
//! # Contents
//! - [`Vector`](collections::contiguous::Vector): a growable contiguous array, generic over an
//!   [`Allocator`](alloc::Allocator). Capacity grows to the next power of two, checked access
//!   returns a [`Result`] and unchecked access is `unsafe`. Vectors of the same length can be added
//!   or subtracted element by element.
//! - [`LinkedList`](collections::linked::LinkedList): a doubly linked list with `O(1)` operations
//!   at either end.
//! - [`ForwardList`](collections::linked::ForwardList): a singly linked list operating on its
//!   front.
//!
//! # Error Handling
//! Fallible operations return strongly typed errors: structs (often ZSTs) that implement
//! [`Error`](std::error::Error), combined with enums for static dispatch rather than dynamic. Where
//! handling an error every time would be unergonomic (imagine handling a capacity overflow on every
//! push), the method panics instead and a `try_` counterpart returns the error.
//!
//! # Dependencies
//! This crate uses `std` for its global allocator and formatting. It doesn't use [`Vec`] to build
//! any of its collections. `derive_more` provides the derives for its error enums.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod alloc;
#[cfg(feature = "collections")]
pub mod collections;

pub(crate) mod util;
