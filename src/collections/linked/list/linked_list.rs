use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::{Index, IndexMut};

use derive_more::IsVariant;

use super::{Iter, IterMut, Length, Node, NodePtr, ONE};
#[doc(inline)]
pub use crate::util::error::{CapacityOverflow, IndexOutOfBounds};
use crate::util::option::OptionExtension;
use crate::util::result::ResultExtension;

/// A list with links in both directions, supporting constant time insertion and removal at either
/// end.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the LinkedList.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front/back` | `O(1)` |
/// | `push_front/back` | `O(1)` |
/// | `emplace_front/back` | `O(1)` |
/// | `pop_front/back` | `O(1)` |
/// | `get` | `O(min(i, n-i))` |
/// | `append` | `O(1)` |
/// | `contains` | `O(n)` |
/// | `clear` | `O(n)` |
///
/// Every `O(i)` or `O(n)` operation walks the nodes one at a time, so
/// [`Vector`](crate::collections::contiguous::Vector) should be preferred unless the `O(1)` end
/// operations are what's needed.
///
/// # Examples
/// ```
/// # use sequence_lib::collections::linked::LinkedList;
/// let mut list = LinkedList::new();
/// list.push_back(2);
/// list.push_front(1);
/// list.push_back(3);
///
/// assert_eq!(list.len(), 3);
/// assert_eq!(list.front(), Some(&1));
/// assert_eq!(list[1], 2);
/// assert_eq!(list.pop_back(), Some(3));
/// ```
pub struct LinkedList<T> {
    pub(crate) state: ListState<T>,
    pub(crate) _phantom: PhantomData<T>,
}

#[derive(Default, IsVariant)]
pub(crate) enum ListState<T> {
    #[default]
    Empty,
    Full(ListContents<T>),
}

use ListState::*;

pub(crate) struct ListContents<T> {
    pub len: Length,
    pub head: NodePtr<T>,
    pub tail: NodePtr<T>,
}

impl<T> LinkedList<T> {
    /// Creates a new LinkedList with no elements.
    pub const fn new() -> LinkedList<T> {
        LinkedList {
            state: Empty,
            _phantom: PhantomData,
        }
    }

    /// Returns the length of the LinkedList.
    pub const fn len(&self) -> usize {
        self.state.len()
    }

    /// Returns true if the LinkedList contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Returns a reference to the first element in the list, if it exists.
    pub const fn front(&self) -> Option<&T> {
        match &self.state {
            Empty => None,
            Full(ListContents { head, .. }) => Some(head.value()),
        }
    }

    /// Returns a mutable reference to the first element in the list, if it exists.
    pub const fn front_mut(&mut self) -> Option<&mut T> {
        match &self.state {
            Empty => None,
            Full(ListContents { head, .. }) => Some(head.value_mut()),
        }
    }

    /// Returns a reference to the last element in the list, if it exists.
    pub const fn back(&self) -> Option<&T> {
        match &self.state {
            Empty => None,
            Full(ListContents { tail, .. }) => Some(tail.value()),
        }
    }

    /// Returns a mutable reference to the last element in the list, if it exists.
    pub const fn back_mut(&mut self) -> Option<&mut T> {
        match &self.state {
            Empty => None,
            Full(ListContents { tail, .. }) => Some(tail.value_mut()),
        }
    }

    /// Adds the provided element to the front of the LinkedList.
    ///
    /// # Panics
    /// Panics if the length would overflow a [`usize`].
    pub fn push_front(&mut self, value: T) {
        match &mut self.state {
            Empty => self.state = ListState::single(value),
            Full(contents) => contents.push_front(value),
        }
    }

    /// Adds the provided element to the back of the LinkedList.
    ///
    /// # Panics
    /// Panics if the length would overflow a [`usize`].
    pub fn push_back(&mut self, value: T) {
        match &mut self.state {
            Empty => self.state = ListState::single(value),
            Full(contents) => contents.push_back(value),
        }
    }

    /// Constructs a new element at the front of the LinkedList using `make`, returning a mutable
    /// reference to it.
    ///
    /// # Examples
    /// ```
    /// # use sequence_lib::collections::linked::LinkedList;
    /// let mut list = LinkedList::from([String::from("b")]);
    /// list.emplace_front(|| String::from("a")).push('!');
    /// assert_eq!(list.front().map(String::as_str), Some("a!"));
    /// ```
    pub fn emplace_front<F: FnOnce() -> T>(&mut self, make: F) -> &mut T {
        self.push_front(make());
        // SAFETY: An element was just added, so the list has a front.
        unsafe { self.front_mut().unreachable() }
    }

    /// Constructs a new element at the back of the LinkedList using `make`, returning a mutable
    /// reference to it.
    pub fn emplace_back<F: FnOnce() -> T>(&mut self, make: F) -> &mut T {
        self.push_back(make());
        // SAFETY: An element was just added, so the list has a back.
        unsafe { self.back_mut().unreachable() }
    }

    /// Removes the first element from the list and returns it, if the list isn't empty.
    pub fn pop_front(&mut self) -> Option<T> {
        match &mut self.state {
            Empty => None,
            Full(ListContents { len, head, .. }) => {
                // SAFETY: The head is unlinked from the list below and never used again.
                let node = unsafe { head.take_node() };

                match len.checked_sub(1) {
                    Some(new_len) => {
                        // SAFETY: Previous length is greater than 1, so the first element is
                        // followed by at least one more.
                        let new_head = unsafe { node.next.unreachable() };
                        new_head.set_prev(None);
                        *head = new_head;
                        *len = new_len;
                    },
                    None => self.state = Empty,
                }

                Some(node.value)
            },
        }
    }

    /// Removes the last element from the list and returns it, if the list isn't empty.
    pub fn pop_back(&mut self) -> Option<T> {
        match &mut self.state {
            Empty => None,
            Full(ListContents { len, tail, .. }) => {
                // SAFETY: The tail is unlinked from the list below and never used again.
                let node = unsafe { tail.take_node() };

                match len.checked_sub(1) {
                    Some(new_len) => {
                        // SAFETY: Previous length is greater than 1, so the last element is
                        // preceded by at least one more.
                        let new_tail = unsafe { node.prev.unreachable() };
                        new_tail.set_next(None);
                        *tail = new_tail;
                        *len = new_len;
                    },
                    None => self.state = Empty,
                }

                Some(node.value)
            },
        }
    }

    /// Returns a reference to the element at the provided `index`, panicking on a failure.
    ///
    /// The same functionality can be achieved using the [`Index`] operator.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the LinkedList.
    pub fn get(&self, index: usize) -> &T {
        self.try_get(index).throw()
    }

    /// Returns a reference to the element at the provided `index`, returning an [`Err`] on a
    /// failure rather than panicking.
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        Ok(self.checked_seek(index)?.value())
    }

    /// Returns a mutable reference to the element at the provided `index`, panicking on a failure.
    ///
    /// The same functionality can be achieved using the [`IndexMut`] operator.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the LinkedList.
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        self.try_get_mut(index).throw()
    }

    /// Returns a mutable reference to the element at the provided `index`, returning an [`Err`] on
    /// a failure rather than panicking.
    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        Ok(self.checked_seek(index)?.value_mut())
    }

    /// Moves all elements of `other` onto the back of this list, without copying any of them.
    ///
    /// # Panics
    /// Panics if the combined length would overflow a [`usize`].
    ///
    /// # Examples
    /// ```
    /// # use sequence_lib::collections::linked::LinkedList;
    /// let mut list = LinkedList::from([1, 2]);
    /// list.append(LinkedList::from([3, 4]));
    /// assert_eq!(list, LinkedList::from([1, 2, 3, 4]));
    /// ```
    pub fn append(&mut self, mut other: LinkedList<T>) {
        let other_contents = match other.state.take() {
            Empty => return,
            Full(contents) => contents,
        };

        match &mut self.state {
            Empty => self.state = Full(other_contents),
            Full(self_contents) => {
                self_contents.len = self_contents.len
                    .checked_add(other_contents.len.get())
                    .ok_or(CapacityOverflow)
                    .throw();

                self_contents.tail.set_next(Some(other_contents.head));
                other_contents.head.set_prev(Some(self_contents.tail));
                self_contents.tail = other_contents.tail;
            },
        }
    }

    /// Drops every element, leaving the list empty.
    pub fn clear(&mut self) {
        if let Full(ListContents { head, .. }) = self.state.take() {
            let mut curr = Some(head);
            while let Some(ptr) = curr {
                curr = ptr.next();
                // SAFETY: The list no longer references any of its nodes and each is visited once.
                drop(unsafe { ptr.take_node() });
            }
        }
    }

    /// Returns an iterator over references to the elements, front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// Returns an iterator over mutable references to the elements, front to back.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }
}

impl<T: PartialEq> LinkedList<T> {
    /// Returns true if the list contains an element equal to `item`.
    pub fn contains(&self, item: &T) -> bool {
        self.iter().any(|i| i == item)
    }
}

impl<T> LinkedList<T> {
    pub(crate) fn checked_seek(&self, index: usize) -> Result<NodePtr<T>, IndexOutOfBounds> {
        match &self.state {
            Empty => Err(IndexOutOfBounds { index, len: 0 }),
            Full(contents) if index < contents.len.get() => Ok(contents.seek(index)),
            Full(contents) => Err(IndexOutOfBounds { index, len: contents.len.get() }),
        }
    }

    #[cfg(test)]
    #[allow(clippy::unwrap_used)]
    pub(crate) fn verify_double_links(&self) {
        if let Full(ListContents { len, head, tail }) = &self.state {
            let mut curr = *head;
            let mut count = 1;
            assert!(head.prev().is_none());
            while let Some(next) = curr.next() {
                // UNWRAP: This needs to panic if prev is None.
                assert!(next.prev().unwrap() == curr);
                curr = next;
                count += 1;
            }
            assert!(*tail == curr);
            assert_eq!(count, len.get());
        }
    }
}

impl<T> ListContents<T> {
    /// Walks from whichever end is closer. `index` must be in bounds.
    pub fn seek(&self, index: usize) -> NodePtr<T> {
        if index < self.len.get() / 2 {
            let mut node = self.head;
            for _ in 0..index {
                // SAFETY: index is within bounds, so every node before it has a next node.
                node = unsafe { node.next().unreachable() };
            }
            node
        } else {
            let mut node = self.tail;
            for _ in index..self.last_index() {
                // SAFETY: index is within bounds, so every node after it has a previous node.
                node = unsafe { node.prev().unreachable() };
            }
            node
        }
    }

    pub fn push_front(&mut self, value: T) {
        self.len = self.len.checked_add(1).ok_or(CapacityOverflow).throw();

        let node = NodePtr::from_node(Node {
            value,
            prev: None,
            next: Some(self.head),
        });

        self.head.set_prev(Some(node));
        self.head = node;
    }

    pub fn push_back(&mut self, value: T) {
        self.len = self.len.checked_add(1).ok_or(CapacityOverflow).throw();

        let node = NodePtr::from_node(Node {
            value,
            prev: Some(self.tail),
            next: None,
        });

        self.tail.set_next(Some(node));
        self.tail = node;
    }

    pub fn wrap_one(value: T) -> ListContents<T> {
        let node = NodePtr::from_node(Node {
            value,
            prev: None,
            next: None,
        });

        ListContents {
            len: ONE,
            head: node,
            tail: node,
        }
    }

    pub const fn last_index(&self) -> usize {
        self.len.get() - 1
    }
}

impl<T> ListState<T> {
    pub fn single(value: T) -> ListState<T> {
        Full(ListContents::wrap_one(value))
    }

    pub const fn len(&self) -> usize {
        match self {
            Empty => 0,
            Full(ListContents { len, .. }) => len.get(),
        }
    }

    pub fn take(&mut self) -> ListState<T> {
        std::mem::take(self)
    }
}

// Copies of the pointers only, used by the borrowing iterators.
impl<T> Clone for ListContents<T> {
    fn clone(&self) -> Self {
        ListContents {
            len: self.len,
            head: self.head,
            tail: self.tail,
        }
    }
}

impl<T> Clone for ListState<T> {
    fn clone(&self) -> Self {
        match self {
            Empty => Empty,
            Full(contents) => Full(contents.clone()),
        }
    }
}

impl<T> Index<usize> for LinkedList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index)
    }
}

impl<T> IndexMut<usize> for LinkedList<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.get_mut(index)
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T, const N: usize> From<[T; N]> for LinkedList<T> {
    fn from(value: [T; N]) -> Self {
        value.into_iter().collect()
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: Hash> Hash for LinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for item in self.iter() {
            item.hash(state);
        }
    }
}

impl<T: Debug> Debug for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkedList")
            .field("contents", &DebugEntries(self))
            .field("len", &self.len())
            .finish()
    }
}

struct DebugEntries<'a, T>(&'a LinkedList<T>);

impl<T: Debug> Debug for DebugEntries<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

/// Formats the list as a chain of nodes.
///
/// # Examples
/// ```
/// # use sequence_lib::collections::linked::LinkedList;
/// assert_eq!(LinkedList::from([1, 2, 3]).to_string(), "(1) -> (2) -> (3)");
/// assert_eq!(LinkedList::<u8>::new().to_string(), "()");
/// ```
impl<T: Display> Display for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (index, item) in self.iter().enumerate() {
            if index != 0 {
                write!(f, ") -> (")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, ")")
    }
}

// SAFETY: LinkedList owns its nodes exclusively, so it can be sent or shared whenever T can.
unsafe impl<T: Send> Send for LinkedList<T> {}

// SAFETY: Shared access only hands out shared references to T.
unsafe impl<T: Sync> Sync for LinkedList<T> {}
