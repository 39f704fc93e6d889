//! A module containing the singly linked [`ForwardList`] and its iterators.

mod forward_list;
mod iter;
mod tests;

pub use forward_list::*;
pub use iter::*;
