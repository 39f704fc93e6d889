use std::fmt::{self, Debug, Formatter};
use std::hash::{Hash, Hasher};

use super::{Iter, IterMut};
use crate::util::error::CapacityOverflow;
use crate::util::option::OptionExtension;
use crate::util::result::ResultExtension;

/// A list with links in one direction only. Elements can only be added or removed at the front.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the ForwardList.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front` | `O(1)` |
/// | `push_front` | `O(1)` |
/// | `pop_front` | `O(1)` |
/// | `reverse` | `O(n)` |
/// | `contains` | `O(n)` |
///
/// # Examples
/// ```
/// # use sequence_lib::collections::linked::ForwardList;
/// let mut list = ForwardList::from([2, 3]);
/// list.push_front(1);
///
/// assert_eq!(list.front(), Some(&1));
/// assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
/// ```
pub struct ForwardList<T> {
    pub(crate) head: Link<T>,
    pub(crate) len: usize,
}

pub(crate) type Link<T> = Option<Box<Node<T>>>;

pub(crate) struct Node<T> {
    pub value: T,
    pub next: Link<T>,
}

impl<T> ForwardList<T> {
    /// Creates a new ForwardList with no elements.
    pub const fn new() -> ForwardList<T> {
        ForwardList {
            head: None,
            len: 0,
        }
    }

    /// Returns the length of the ForwardList.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the ForwardList contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a reference to the first element in the list, if it exists.
    pub fn front(&self) -> Option<&T> {
        self.head.as_deref().map(|node| &node.value)
    }

    /// Returns a mutable reference to the first element in the list, if it exists.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.head.as_deref_mut().map(|node| &mut node.value)
    }

    /// Adds the provided element to the front of the ForwardList.
    ///
    /// # Panics
    /// Panics if the length would overflow a [`usize`].
    pub fn push_front(&mut self, value: T) {
        self.len = self.len.checked_add(1).ok_or(CapacityOverflow).throw();
        self.head = Some(Box::new(Node {
            value,
            next: self.head.take(),
        }));
    }

    /// Constructs a new element at the front of the ForwardList using `make`, returning a mutable
    /// reference to it.
    pub fn emplace_front<F: FnOnce() -> T>(&mut self, make: F) -> &mut T {
        self.push_front(make());
        // SAFETY: An element was just added, so the list has a front.
        unsafe { self.front_mut().unreachable() }
    }

    /// Removes the first element from the list and returns it, if the list isn't empty.
    pub fn pop_front(&mut self) -> Option<T> {
        self.head.take().map(|node| {
            let Node { value, next } = *node;
            self.head = next;
            self.len -= 1;
            value
        })
    }

    /// Reverses the order of the elements in place, by relinking every node.
    ///
    /// # Examples
    /// ```
    /// # use sequence_lib::collections::linked::ForwardList;
    /// let mut list = ForwardList::from([1, 2, 3]);
    /// list.reverse();
    /// assert_eq!(list, ForwardList::from([3, 2, 1]));
    /// ```
    pub fn reverse(&mut self) {
        let mut reversed: Link<T> = None;
        let mut curr = self.head.take();

        while let Some(mut node) = curr {
            curr = node.next.take();
            node.next = reversed;
            reversed = Some(node);
        }

        self.head = reversed;
    }

    /// Drops every element, leaving the list empty.
    pub fn clear(&mut self) {
        // Unlink one node at a time, so that dropping a long list doesn't recurse through every
        // Box.
        let mut curr = self.head.take();
        while let Some(mut node) = curr {
            curr = node.next.take();
        }
        self.len = 0;
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

impl<T: PartialEq> ForwardList<T> {
    /// Returns true if the list contains an element equal to `item`.
    pub fn contains(&self, item: &T) -> bool {
        self.iter().any(|i| i == item)
    }
}

/// Collects elements so that the first element yielded ends up at the front.
impl<T> FromIterator<T> for ForwardList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = ForwardList::new();
        let mut tail = &mut list.head;

        for value in iter {
            list.len = list.len.checked_add(1).ok_or(CapacityOverflow).throw();
            let node = tail.insert(Box::new(Node { value, next: None }));
            tail = &mut node.next;
        }

        list
    }
}

impl<T, const N: usize> From<[T; N]> for ForwardList<T> {
    fn from(value: [T; N]) -> Self {
        value.into_iter().collect()
    }
}

impl<T> Default for ForwardList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for ForwardList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for ForwardList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for ForwardList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for ForwardList<T> {}

impl<T: Hash> Hash for ForwardList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        for item in self.iter() {
            item.hash(state);
        }
    }
}

impl<T: Debug> Debug for ForwardList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
