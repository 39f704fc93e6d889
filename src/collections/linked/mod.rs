//! Linked collection types: the doubly linked [`LinkedList`] and the singly linked
//! [`ForwardList`].
#![warn(missing_docs)]

pub mod forward;
pub mod list;

#[doc(inline)]
pub use forward::ForwardList;
#[doc(inline)]
pub use list::LinkedList;
