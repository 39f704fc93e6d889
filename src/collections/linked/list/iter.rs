use std::iter::FusedIterator;
use std::marker::PhantomData;

use ListState::*;

use super::{LinkedList, ListContents, ListState, NodePtr};
use crate::util::option::OptionExtension;

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            list: self,
        }
    }
}

/// An owning iterator over the elements of a [`LinkedList`].
pub struct IntoIter<T> {
    // Holding the list and popping from it keeps ownership of the remaining nodes with the list.
    pub(crate) list: LinkedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.list.pop_back()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.list.len()
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            remaining: self.state.clone(),
            _phantom: PhantomData,
        }
    }
}

/// A borrowing iterator over the elements of a [`LinkedList`].
pub struct Iter<'a, T> {
    // A copy of the list's pointers, shrunk from either end as elements are yielded. The nodes
    // themselves are never modified.
    pub(crate) remaining: ListState<T>,
    pub(crate) _phantom: PhantomData<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.remaining.advance_front().map(NodePtr::value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.remaining.advance_back().map(NodePtr::value)
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.remaining.len()
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            remaining: self.remaining.clone(),
            _phantom: PhantomData,
        }
    }
}

impl<'a, T> IntoIterator for &'a mut LinkedList<T> {
    type Item = &'a mut T;

    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        IterMut {
            remaining: self.state.clone(),
            _phantom: PhantomData,
        }
    }
}

/// A mutably borrowing iterator over the elements of a [`LinkedList`].
pub struct IterMut<'a, T> {
    pub(crate) remaining: ListState<T>,
    pub(crate) _phantom: PhantomData<&'a mut T>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        // Each node is yielded at most once, so the mutable references never alias.
        self.remaining.advance_front().map(NodePtr::value_mut)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.remaining.advance_back().map(NodePtr::value_mut)
    }
}

impl<T> FusedIterator for IterMut<'_, T> {}

impl<T> ExactSizeIterator for IterMut<'_, T> {
    fn len(&self) -> usize {
        self.remaining.len()
    }
}

impl<T> ListState<T> {
    /// Drops the first node from this view of the list and returns it. Only the copied pointers
    /// change, the nodes are left alone.
    fn advance_front(&mut self) -> Option<NodePtr<T>> {
        match self {
            Empty => None,
            Full(ListContents { len, head, .. }) => {
                let node = *head;

                match len.checked_sub(1) {
                    Some(new_len) => {
                        // SAFETY: More than one node remains in view, so head has a next node.
                        *head = unsafe { node.next().unreachable() };
                        *len = new_len;
                    },
                    None => *self = Empty,
                }

                Some(node)
            },
        }
    }

    /// Drops the last node from this view of the list and returns it.
    fn advance_back(&mut self) -> Option<NodePtr<T>> {
        match self {
            Empty => None,
            Full(ListContents { len, tail, .. }) => {
                let node = *tail;

                match len.checked_sub(1) {
                    Some(new_len) => {
                        // SAFETY: More than one node remains in view, so tail has a previous node.
                        *tail = unsafe { node.prev().unreachable() };
                        *len = new_len;
                    },
                    None => *self = Empty,
                }

                Some(node)
            },
        }
    }
}
