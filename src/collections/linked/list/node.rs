use std::ptr::NonNull;

pub(crate) type Link<T> = Option<NodePtr<T>>;

// NOTE: Nodes are allocated with Box<T> rather than alloc, because Box<T> has the special property
// that dereferencing it allows a value to be moved out of the heap.

/// A copyable pointer to a heap allocated [`Node`].
///
/// NodePtrs are only ever held by the list that owns the node (or by iterators borrowing that
/// list) and are never dereferenced after the node is taken or dropped. All accessors rely on
/// this.
#[derive(Debug)]
pub(crate) struct NodePtr<T>(NonNull<Node<T>>);

impl<T> NodePtr<T> {
    pub fn from_node(node: Node<T>) -> NodePtr<T> {
        NodePtr(NonNull::from(Box::leak(Box::new(node))))
    }

    pub const fn value<'a>(self) -> &'a T {
        // SAFETY: The node is live while its list is, see the type level docs.
        unsafe { &(*self.0.as_ptr()).value }
    }

    pub const fn value_mut<'a>(self) -> &'a mut T {
        // SAFETY: The node is live while its list is, and the list hands out mutable access only
        // through a unique borrow of itself.
        unsafe { &mut (*self.0.as_ptr()).value }
    }

    pub const fn prev(self) -> Link<T> {
        // SAFETY: The node is live while its list is.
        unsafe { (*self.0.as_ptr()).prev }
    }

    pub const fn next(self) -> Link<T> {
        // SAFETY: The node is live while its list is.
        unsafe { (*self.0.as_ptr()).next }
    }

    pub fn set_prev(self, prev: Link<T>) {
        // SAFETY: The node is live while its list is, and links are only written through a unique
        // borrow of the list.
        unsafe { (*self.0.as_ptr()).prev = prev }
    }

    pub fn set_next(self, next: Link<T>) {
        // SAFETY: As for set_prev.
        unsafe { (*self.0.as_ptr()).next = next }
    }

    /// Takes ownership of the node, deallocating it.
    ///
    /// # Safety
    /// This NodePtr (and every copy of it) must not be used again.
    pub unsafe fn take_node(self) -> Node<T> {
        // SAFETY: The pointer was created from a leaked Box in from_node and the caller guarantees
        // that it isn't used again.
        unsafe { *Box::from_raw(self.0.as_ptr()) }
    }
}

impl<T> Clone for NodePtr<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodePtr<T> {}

impl<T> PartialEq for NodePtr<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

pub(crate) struct Node<T> {
    pub value: T,
    pub prev: Link<T>,
    pub next: Link<T>,
}
