use std::fmt::{Debug, Formatter};
use std::marker::PhantomData;
use std::ptr::NonNull;

use snafu::prelude::*;

use crate::error::{EmptyContainerSnafu, Result, ValueNotFoundSnafu};
use crate::list::cursor::{Cursor, CursorMut, Position};
use crate::{IntoIter, Iter, IterMut};

pub mod cursor;
pub mod iterator;

mod algorithms;

/// The `List` is a singly-linked list with owned nodes and a sentinel head.
/// It allows appending and prepending elements in constant time.
/// In compromise, finding, erasing or inserting after a given value take
/// *O*(*n*) time.
///
/// The `List` contains:
/// - a boxed `ghost` node without payload, whose `next` link points at the
///   first node of the list;
/// - a `tail` pointer to the last node, used for appending in constant time;
/// - a length field `len` indicating the length of the list.
///
/// Every node is allocated by [`Box::leak`] when attached and reclaimed by
/// [`Box::from_raw`] when detached, so all links and `tail` are raw pointers
/// of the same origin.
///
/// # Invariants
///
/// - the chain starting from `ghost.next` visits exactly `len` nodes before
///   reaching `None`;
/// - `tail` is `None` if and only if `len == 0`, otherwise it points at the
///   only node whose `next` link is `None`.
pub struct List<T> {
    ghost: Box<Ghost<T>>,
    tail: Link<T>,
    /// the length of the list
    pub(crate) len: usize,
    _marker: PhantomData<Box<Node<T>>>,
}

/// A link to the next node, or `None` at the end of the chain.
pub(crate) type Link<T> = Option<NonNull<Node<T>>>;

pub(crate) struct Node<T> {
    pub(crate) next: Link<T>,
    pub(crate) element: T,
}

/// The sentinel head of the list. It precedes the first node and carries no
/// payload.
struct Ghost<T> {
    next: Link<T>,
}

// private methods
impl<T> List<T> {
    pub(crate) fn front_node(&self) -> Link<T> {
        self.ghost.next
    }

    pub(crate) fn back_node(&self) -> Link<T> {
        self.tail
    }

    /// Returns the link to the node right after `prev`, where `None` stands
    /// for the ghost node.
    ///
    /// It is unsafe because it does not check whether `prev` belongs to the list.
    unsafe fn link_after(&mut self, prev: Link<T>) -> &mut Link<T> {
        match prev {
            None => &mut self.ghost.next,
            Some(prev) => &mut (*prev.as_ptr()).next,
        }
    }

    /// Attach a new node holding `element` right after `prev` (or right after the
    /// ghost node if `prev` is `None`), and return the new node.
    ///
    /// It is unsafe because it does not check whether `prev` belongs to the list.
    ///
    /// If the `prev` does not belong to the list, this function call will make
    /// the list ill-formed.
    pub(crate) unsafe fn attach_node(&mut self, prev: Link<T>, element: T) -> NonNull<Node<T>> {
        let link = self.link_after(prev);
        let next = *link;
        let node = Node::new_detached(element, next);
        *link = Some(node);
        if next.is_none() {
            self.tail = Some(node);
        }
        self.len += 1;
        #[cfg(debug_assertions)]
        self.assert_tail();
        node
    }

    /// Detach the node right after `prev` (or right after the ghost node if `prev`
    /// is `None`), and return it as a box, or return `None` if `prev` is the last
    /// node.
    ///
    /// The successor of the detached node is handed over to `prev`. If the detached
    /// node was the last one, `prev` becomes the last node (or the list becomes
    /// empty if `prev` is the ghost node).
    ///
    /// It is unsafe because it does not check whether `prev` belongs to the list.
    ///
    /// If the `prev` does not belong to the list, this function call will make
    /// the list ill-formed.
    pub(crate) unsafe fn detach_node(&mut self, prev: Link<T>) -> Option<Box<Node<T>>> {
        let link = self.link_after(prev);
        let node = Box::from_raw(link.take()?.as_ptr());
        *link = node.next;
        if node.next.is_none() {
            self.tail = prev;
        }
        self.len -= 1;
        #[cfg(debug_assertions)]
        self.assert_tail();
        Some(node)
    }

    /// Fails with `EmptyContainer` if the list is empty, reporting the rejected
    /// operation `op`.
    fn ensure_not_empty(&self, op: &'static str) -> Result<()> {
        if self.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::debug!(op, "rejected on empty list");
            return EmptyContainerSnafu.fail();
        }
        Ok(())
    }

    /// Provides a cursor with editing operations at the first node holding `x`.
    ///
    /// The scan does not mutate the list, so a failed lookup leaves it intact.
    fn cursor_find_mut(&mut self, x: &T) -> Result<CursorMut<'_, T>>
    where
        T: PartialEq,
    {
        ensure!(!self.is_empty(), EmptyContainerSnafu);
        let mut cursor = self.cursor_start_mut();
        while !cursor.is_end() {
            if cursor.current()? == x {
                return Ok(cursor);
            }
            cursor.move_next()?;
        }
        ValueNotFoundSnafu.fail()
    }

    #[cfg(debug_assertions)]
    fn assert_tail(&self) {
        assert_eq!(self.tail.is_none(), self.len == 0);
        if let Some(tail) = self.tail {
            // SAFETY: `tail` always points at a node owned by the list.
            assert!(unsafe { (*tail.as_ptr()).next.is_none() });
        }
    }
}

impl<T> List<T> {
    /// Create an empty `List`
    ///
    /// # Examples
    /// ```
    /// use slist::List;
    /// let list: List<u32> = List::new();
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self {
            ghost: Box::new(Ghost { next: None }),
            tail: None,
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Returns `true` if the `List` is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use slist::List;
    ///
    /// let mut list = List::new();
    /// assert!(list.is_empty());
    ///
    /// list.push_front("foo");
    /// assert!(!list.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tail.is_none()
    }

    /// Returns the length of the `List`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use slist::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// assert_eq!(list.len(), 1);
    ///
    /// list.push_front(1);
    /// assert_eq!(list.len(), 2);
    ///
    /// list.push_back(3);
    /// assert_eq!(list.len(), 3);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Removes all elements from the `List`.
    ///
    /// The nodes are reclaimed one by one from the front, so clearing a long
    /// list does not recurse. The ghost node is kept, and the list can be used
    /// again afterwards.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time and *O*(1) memory.
    ///
    /// # Examples
    ///
    /// ```
    /// use slist::{Error, List};
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// list.push_front(1);
    /// assert_eq!(list.len(), 2);
    /// assert_eq!(list.front(), Ok(&1));
    ///
    /// list.clear();
    /// assert_eq!(list.len(), 0);
    /// assert_eq!(list.front(), Err(Error::EmptyContainer));
    /// ```
    pub fn clear(&mut self) {
        #[cfg(feature = "tracing")]
        tracing::trace!(len = self.len, "clear");
        while self.pop_front().is_some() {}
    }

    /// Provides a reference to the front element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyContainer`](crate::Error::EmptyContainer) if the list
    /// is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use slist::{Error, List};
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.front(), Err(Error::EmptyContainer));
    ///
    /// list.push_front(1);
    /// assert_eq!(list.front(), Ok(&1));
    /// ```
    #[inline]
    pub fn front(&self) -> Result<&T> {
        self.ensure_not_empty("front")?;
        self.cursor_start().current()
    }

    /// Provides a mutable reference to the front element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyContainer`](crate::Error::EmptyContainer) if the list
    /// is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use slist::List;
    ///
    /// let mut list = List::new();
    /// assert!(list.front_mut().is_err());
    ///
    /// list.push_front(1);
    /// if let Ok(x) = list.front_mut() {
    ///     *x = 5;
    /// }
    /// assert_eq!(list.front(), Ok(&5));
    /// ```
    #[inline]
    pub fn front_mut(&mut self) -> Result<&mut T> {
        self.ensure_not_empty("front_mut")?;
        let front = self.front_node().context(EmptyContainerSnafu)?;
        // SAFETY: `front` points at the first node, which is owned by the list,
        // and the list is borrowed mutably.
        Ok(unsafe { &mut (*front.as_ptr()).element })
    }

    /// Provides a reference to the back element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyContainer`](crate::Error::EmptyContainer) if the list
    /// is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use slist::{Error, List};
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.back(), Err(Error::EmptyContainer));
    ///
    /// list.push_back(1);
    /// assert_eq!(list.back(), Ok(&1));
    /// ```
    #[inline]
    pub fn back(&self) -> Result<&T> {
        self.ensure_not_empty("back")?;
        let tail = self.back_node().context(EmptyContainerSnafu)?;
        // SAFETY: `tail` points at the last node, which is owned by the list.
        Ok(unsafe { &(*tail.as_ptr()).element })
    }

    /// Provides a mutable reference to the back element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyContainer`](crate::Error::EmptyContainer) if the list
    /// is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use slist::List;
    ///
    /// let mut list = List::new();
    /// assert!(list.back_mut().is_err());
    ///
    /// list.push_back(1);
    /// if let Ok(x) = list.back_mut() {
    ///     *x = 5;
    /// }
    /// assert_eq!(list.back(), Ok(&5));
    /// ```
    #[inline]
    pub fn back_mut(&mut self) -> Result<&mut T> {
        self.ensure_not_empty("back_mut")?;
        let tail = self.back_node().context(EmptyContainerSnafu)?;
        // SAFETY: `tail` points at the last node, which is owned by the list,
        // and the list is borrowed mutably.
        Ok(unsafe { &mut (*tail.as_ptr()).element })
    }

    /// Adds an element first in the list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use slist::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// assert_eq!(list.front(), Ok(&2));
    ///
    /// list.push_front(1);
    /// assert_eq!(list.front(), Ok(&1));
    /// assert_eq!(list.back(), Ok(&2));
    /// ```
    pub fn push_front(&mut self, elt: T) {
        self.cursor_start_mut().insert(elt);
    }

    /// Removes the first element and returns it, or `None` if the list is
    /// empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use slist::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.pop_front(), None);
    ///
    /// list.push_front(1);
    /// list.push_front(3);
    /// assert_eq!(list.pop_front(), Some(3));
    /// assert_eq!(list.pop_front(), Some(1));
    /// assert_eq!(list.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        self.cursor_start_mut().remove().ok()
    }

    /// Appends an element to the back of a list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use slist::List;
    ///
    /// let mut list = List::new();
    /// list.push_back(1);
    /// list.push_back(3);
    /// assert_eq!(list.back(), Ok(&3));
    /// assert_eq!(list.front(), Ok(&1));
    /// ```
    pub fn push_back(&mut self, elt: T) {
        self.cursor_end_mut().insert(elt);
    }

    /// Provides a reference to the first element equal to `x`, or `None` if
    /// there is no such element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyContainer`](crate::Error::EmptyContainer) if the list
    /// is empty. Searching an empty list is an error, while searching a non-empty
    /// list without a match is not.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use slist::{Error, List};
    ///
    /// let list = List::from([1, 27, -3, 100, 5]);
    /// assert_eq!(list.find(&27), Ok(Some(&27)));
    /// assert_eq!(list.find(&101), Ok(None));
    ///
    /// let empty = List::<i32>::new();
    /// assert_eq!(empty.find(&10), Err(Error::EmptyContainer));
    /// ```
    pub fn find(&self, x: &T) -> Result<Option<&T>>
    where
        T: PartialEq,
    {
        self.ensure_not_empty("find")?;
        Ok(self.iter().find(|elt| *elt == x))
    }

    /// Provides a mutable reference to the first element equal to `x`, or `None`
    /// if there is no such element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyContainer`](crate::Error::EmptyContainer) if the list
    /// is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use slist::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    /// if let Ok(Some(x)) = list.find_mut(&2) {
    ///     *x = 20;
    /// }
    /// assert_eq!(list, List::from([1, 20, 3]));
    /// ```
    pub fn find_mut(&mut self, x: &T) -> Result<Option<&mut T>>
    where
        T: PartialEq,
    {
        self.ensure_not_empty("find_mut")?;
        Ok(self.iter_mut().find(|elt| **elt == *x))
    }

    /// Removes the first element equal to `x` and returns it.
    ///
    /// If the removed element was the last one, its predecessor becomes the
    /// back of the list.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyContainer`](crate::Error::EmptyContainer) if the list is
    ///   empty;
    /// - [`Error::ValueNotFound`](crate::Error::ValueNotFound) if no element is
    ///   equal to `x`. The list is left untouched.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use slist::{Error, List};
    ///
    /// let mut list = List::from([1, 2, 3, 4, 5]);
    /// assert_eq!(list.erase(&4), Ok(4));
    /// assert_eq!(list.erase(&2), Ok(2));
    /// assert_eq!(list, List::from([1, 3, 5]));
    ///
    /// assert_eq!(list.erase(&2), Err(Error::ValueNotFound));
    /// ```
    pub fn erase(&mut self, x: &T) -> Result<T>
    where
        T: PartialEq,
    {
        let erased = self.cursor_find_mut(x).and_then(|mut cursor| cursor.remove());
        #[cfg(feature = "tracing")]
        match &erased {
            Ok(_) => tracing::trace!(len = self.len, "erase"),
            Err(error) => tracing::debug!(%error, "erase rejected"),
        }
        erased
    }

    /// Inserts `elt` right after the first element equal to `pos`.
    ///
    /// If the element equal to `pos` was the last one, the new element becomes
    /// the back of the list.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyContainer`](crate::Error::EmptyContainer) if the list is
    ///   empty;
    /// - [`Error::ValueNotFound`](crate::Error::ValueNotFound) if no element is
    ///   equal to `pos`. The list is left untouched.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use slist::{Error, List};
    ///
    /// let mut list = List::from([1, -3, 5]);
    /// assert_eq!(list.insert_after(&-3, 1000), Ok(()));
    /// assert_eq!(list.insert_after(&5, 1000), Ok(()));
    /// assert_eq!(list, List::from([1, -3, 1000, 5, 1000]));
    /// assert_eq!(list.back(), Ok(&1000));
    ///
    /// assert_eq!(list.insert_after(&7, 1000), Err(Error::ValueNotFound));
    /// ```
    pub fn insert_after(&mut self, pos: &T, elt: T) -> Result<()>
    where
        T: PartialEq,
    {
        let inserted = self
            .cursor_find_mut(pos)
            .and_then(|mut cursor| cursor.insert_after(elt));
        #[cfg(feature = "tracing")]
        match &inserted {
            Ok(()) => tracing::trace!(len = self.len, "insert_after"),
            Err(error) => tracing::debug!(%error, "insert_after rejected"),
        }
        inserted
    }

    /// Provides a cursor at the first node.
    ///
    /// The cursor is at the end position if the list is empty, so that it compares
    /// equal to [`List::cursor_end`].
    ///
    /// # Examples
    ///
    /// ```
    /// use slist::List;
    ///
    /// let list = List::from([1, 2, 3]);
    /// let cursor = list.cursor_start();
    /// assert_eq!(cursor.current(), Ok(&1));
    ///
    /// let empty = List::<i32>::new();
    /// assert!(empty.cursor_start() == empty.cursor_end());
    /// ```
    pub fn cursor_start(&self) -> Cursor<'_, T> {
        Cursor::new(self, Position::from(self.front_node()), 0)
    }

    /// Provides a cursor at the end position, one past the last node.
    ///
    /// # Examples
    ///
    /// ```
    /// use slist::{Error, List};
    ///
    /// let list = List::from([1, 2, 3]);
    /// let cursor = list.cursor_end();
    /// assert!(cursor.is_end());
    /// assert_eq!(cursor.current(), Err(Error::InvalidNodeAccess));
    /// ```
    pub fn cursor_end(&self) -> Cursor<'_, T> {
        Cursor::new(self, Position::End, self.len)
    }

    /// Provides a cursor with editing operations at the first node.
    ///
    /// The cursor is at the end position if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use slist::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    /// let mut cursor = list.cursor_start_mut();
    ///
    /// if let Ok(x) = cursor.current_mut() {
    ///     *x *= 5;
    /// }
    /// assert_eq!(cursor.current(), Ok(&5));
    /// ```
    pub fn cursor_start_mut(&mut self) -> CursorMut<'_, T> {
        let front = self.front_node();
        CursorMut::new(self, None, Position::from(front), 0)
    }

    /// Provides a cursor with editing operations at the end position.
    ///
    /// Inserting at this cursor appends to the list.
    ///
    /// # Examples
    ///
    /// ```
    /// use slist::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    /// let mut cursor = list.cursor_end_mut();
    ///
    /// cursor.insert(4);
    /// assert!(cursor.is_end());
    /// assert_eq!(list.back(), Ok(&4));
    /// ```
    pub fn cursor_end_mut(&mut self) -> CursorMut<'_, T> {
        let back = self.back_node();
        let len = self.len;
        CursorMut::new(self, back, Position::End, len)
    }

    /// Provides a forward iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use slist::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_back(0);
    /// list.push_back(1);
    /// list.push_back(2);
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&0));
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.front_node(), self.len)
    }

    /// Provides a forward iterator with mutable references.
    ///
    /// # Examples
    ///
    /// ```
    /// use slist::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_back(0);
    /// list.push_back(1);
    /// list.push_back(2);
    ///
    /// for element in list.iter_mut() {
    ///     *element += 10;
    /// }
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&10));
    /// assert_eq!(iter.next(), Some(&11));
    /// assert_eq!(iter.next(), Some(&12));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self.front_node(), self.len)
    }
}

impl<T: Debug> Debug for List<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Node<T> {
    /// Create a detached node with given element and successor. The node is
    /// leaked until it is reclaimed by [`List::detach_node`].
    pub(crate) fn new_detached(element: T, next: Link<T>) -> NonNull<Node<T>> {
        NonNull::from(Box::leak(Box::new(Node { next, element })))
    }

    pub(crate) fn into_element(self: Box<Self>) -> T {
        self.element
    }
}

/// Nodes are reclaimed by [`List::clear`] one at a time through `Box::from_raw`,
/// and the ghost node is released right after, when `ghost` itself is dropped.
impl<T> Drop for List<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

unsafe impl<T: Send> Send for List<T> {}

unsafe impl<T: Sync> Sync for List<T> {}

// Ensure that `List` and its read-only iterators are covariant in their type parameters.
#[allow(dead_code)]
fn assert_covariance() {
    fn a<'a>(x: List<&'static str>) -> List<&'a str> {
        x
    }
    fn b<'i, 'a>(x: Iter<'i, &'static str>) -> Iter<'i, &'a str> {
        x
    }
    fn c<'a>(x: IntoIter<&'static str>) -> IntoIter<&'a str> {
        x
    }
}

#[cfg(test)]
mod tests {
    use crate::list::List;
    use crate::Error;
    use std::cell::RefCell;
    use std::fmt::Debug;

    fn list_eq<T, I>(list: &List<T>, expected: I)
    where
        T: Debug + Clone + Eq,
        I: IntoIterator<Item = T>,
    {
        assert_eq!(
            Vec::from_iter(list.iter().cloned()),
            Vec::from_iter(expected)
        );
        assert_ends(list);
    }

    /// `front` and `back` must agree with a forward traversal.
    fn assert_ends<T: Debug + Eq>(list: &List<T>) {
        assert_eq!(list.front().ok(), list.iter().next());
        assert_eq!(list.back().ok(), list.iter().last());
        assert_eq!(list.len(), list.iter().count());
        assert_eq!(list.is_empty(), list.len() == 0);
    }

    #[test]
    fn list_create() {
        let mut list = List::<i32>::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        list.push_back(1);
        assert!(!list.is_empty());
        assert_eq!(list.pop_front(), Some(1));
        assert!(list.is_empty());
    }

    #[test]
    fn list_drop() {
        #[derive(Debug)]
        struct DropChecker<'a, T: Copy> {
            value: T,
            dropped: &'a RefCell<Vec<T>>,
        }
        impl<'a, T: Copy> DropChecker<'a, T> {
            fn new(value: T, dropped: &'a RefCell<Vec<T>>) -> Self {
                Self { value, dropped }
            }
        }
        impl<'a, T: Copy> Drop for DropChecker<'a, T> {
            fn drop(&mut self) {
                self.dropped.borrow_mut().push(self.value);
            }
        }
        let dropped = RefCell::new(Vec::<i32>::new());
        let mut list = List::new();
        list.push_back(DropChecker::new(2, &dropped));
        list.push_back(DropChecker::new(3, &dropped));
        list.push_front(DropChecker::new(1, &dropped));
        list.push_back(DropChecker::new(4, &dropped));
        drop(list);
        assert_eq!(dropped.borrow().as_slice(), &[1, 2, 3, 4]);

        dropped.borrow_mut().clear();
        let mut list = List::new();
        list.push_back(DropChecker::new(1, &dropped));
        list.push_back(DropChecker::new(2, &dropped));
        list.clear();
        assert_eq!(dropped.borrow().as_slice(), &[1, 2]);
        list.push_back(DropChecker::new(3, &dropped));
        drop(list);
        assert_eq!(dropped.borrow().as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn list_drop_long() {
        let mut list = List::from_iter(0..1_000_000);
        list.clear();
        assert!(list.is_empty());
        list.extend(0..1_000_000);
        assert_eq!(list.len(), 1_000_000);
        drop(list);
    }

    #[test]
    fn list_empty() {
        let mut list = List::<i32>::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.front(), Err(Error::EmptyContainer));
        assert_eq!(list.back(), Err(Error::EmptyContainer));
        assert_eq!(list.front_mut(), Err(Error::EmptyContainer));
        assert_eq!(list.back_mut(), Err(Error::EmptyContainer));
        assert_eq!(list.find(&10), Err(Error::EmptyContainer));
        assert_eq!(list.find_mut(&10), Err(Error::EmptyContainer));
        assert_eq!(list.erase(&1), Err(Error::EmptyContainer));
        assert_eq!(list.insert_after(&10, 11), Err(Error::EmptyContainer));
        assert_eq!(list.pop_front(), None);
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.iter().next(), None);
    }

    #[test]
    fn list_push() {
        let mut list = List::new();
        list.push_back(1);
        list.push_back(2);
        list.push_back(3);
        list_eq(&list, [1, 2, 3]);

        let mut list = List::new();
        list.push_front(3);
        list.push_front(2);
        list.push_front(1);
        list_eq(&list, [1, 2, 3]);

        let mut list = List::from([1, 2, 3]);
        list.push_back(4);
        list.push_back(5);
        list.push_back(6);
        list_eq(&list, 1..=6);

        let mut list = List::from([4, 5, 6]);
        list.push_front(3);
        list.push_front(2);
        list.push_front(1);
        list_eq(&list, 1..=6);

        let mut list = List::new();
        list.push_front(1);
        assert_eq!(list.back(), Ok(&1));
        list.push_back(2);
        list.push_front(0);
        list_eq(&list, 0..3);
    }

    #[test]
    fn list_find() {
        let list = List::from([1, 27, -3, 100, 5]);
        assert_eq!(list.find(&27), Ok(Some(&27)));
        assert_eq!(list.find(&1), Ok(Some(&1)));
        assert_eq!(list.find(&5), Ok(Some(&5)));
        assert_eq!(list.find(&-3), Ok(Some(&-3)));
        assert_eq!(list.find(&100), Ok(Some(&100)));
        assert_eq!(list.find(&101), Ok(None));

        // The first match is returned.
        let list = List::from([(1, 'a'), (2, 'b'), (1, 'c')]);
        let found = list.iter().find(|(k, _)| *k == 1);
        assert_eq!(found, Some(&(1, 'a')));
        assert!(std::ptr::eq(
            list.find(&(1, 'a')).unwrap().unwrap(),
            list.front().unwrap(),
        ));
    }

    #[test]
    fn list_find_mut() {
        let mut list = List::from([1, 2, 2, 3]);
        *list.find_mut(&2).unwrap().unwrap() = 20;
        list_eq(&list, [1, 20, 2, 3]);
        assert_eq!(list.find_mut(&4), Ok(None));
    }

    #[test]
    fn list_erase() {
        let mut list = List::from([1, 2, 3, 4, 5]);
        assert_eq!(list.erase(&4), Ok(4));
        assert_eq!(list.erase(&2), Ok(2));
        list_eq(&list, [1, 3, 5]);

        assert_eq!(list.erase(&2), Err(Error::ValueNotFound));
        list_eq(&list, [1, 3, 5]);

        // Erasing the back moves the tail to the predecessor.
        assert_eq!(list.erase(&5), Ok(5));
        list_eq(&list, [1, 3]);
        list.push_back(7);
        list_eq(&list, [1, 3, 7]);

        // Erasing the front.
        assert_eq!(list.erase(&1), Ok(1));
        list_eq(&list, [3, 7]);

        // Erasing the only element empties the list.
        let mut list = List::from([9]);
        assert_eq!(list.erase(&9), Ok(9));
        assert!(list.is_empty());
        assert_eq!(list.back(), Err(Error::EmptyContainer));
        assert_eq!(list.erase(&9), Err(Error::EmptyContainer));
        list.push_back(10);
        list_eq(&list, [10]);

        // Only the first occurrence is erased.
        let mut list = List::from([1, 2, 1, 2]);
        assert_eq!(list.erase(&2), Ok(2));
        list_eq(&list, [1, 1, 2]);
    }

    #[test]
    fn list_insert_after() {
        let mut list = List::from([1, -3, 100, 3, 5]);
        for pos in [1, -3, 100, 3, 5] {
            assert_eq!(list.insert_after(&pos, 1000), Ok(()));
        }
        list_eq(&list, [1, 1000, -3, 1000, 100, 1000, 3, 1000, 5, 1000]);
        assert_eq!(list.len(), 10);

        assert_eq!(list.insert_after(&7, 1), Err(Error::ValueNotFound));
        assert_eq!(list.len(), 10);

        // Inserting after the back makes the new element the back.
        let mut list = List::from([1]);
        assert_eq!(list.insert_after(&1, 2), Ok(()));
        list_eq(&list, [1, 2]);
        list.push_back(3);
        list_eq(&list, [1, 2, 3]);

        // Only the first occurrence is used as the position.
        let mut list = List::from([1, 2, 1]);
        assert_eq!(list.insert_after(&1, 5), Ok(()));
        list_eq(&list, [1, 5, 2, 1]);
    }

    #[test]
    fn list_clear() {
        let mut list = List::from([1, 2, 3, 4, 5]);
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        list.clear();
        assert!(list.is_empty());
        assert_ends(&list);

        list.push_back(1);
        list.push_back(2);
        list.push_back(3);
        assert!(!list.is_empty());
        list_eq(&list, [1, 2, 3]);
    }

    #[test]
    fn list_size() {
        let mut list = List::new();
        for i in 0..100 {
            list.push_back(i);
        }
        assert_eq!(list.len(), 100);
    }

    #[test]
    fn list_front_back() {
        let mut list = List::from([1, 2, 3, 4, 5]);
        assert_eq!(list.front(), Ok(&1));
        assert_eq!(list.back(), Ok(&5));

        *list.front_mut().unwrap() = 10;
        *list.back_mut().unwrap() = 50;
        list_eq(&list, [10, 2, 3, 4, 50]);
    }

    #[test]
    fn list_back_after_front_mut() {
        let mut list = List::new();
        list.push_back(1);
        *list.front_mut().unwrap() = 2;
        assert_eq!(list.back(), Ok(&2));
        *list.back_mut().unwrap() = 3;
        assert_eq!(list.front(), Ok(&3));
        list.push_back(4);
        list_eq(&list, [3, 4]);
    }

    #[test]
    fn list_push_back_after_failed_erase() {
        let mut list = List::from([1, 2, 3]);
        assert_eq!(list.erase(&9), Err(Error::ValueNotFound));
        list.push_back(4);
        list_eq(&list, [1, 2, 3, 4]);

        assert_eq!(list.insert_after(&9, 0), Err(Error::ValueNotFound));
        assert_eq!(list.insert_after(&4, 5), Ok(()));
        list_eq(&list, 1..=5);
    }

    #[test]
    fn list_tail_after_mutable_scans() {
        let mut list = List::from([1, 2, 3]);
        for x in list.iter_mut() {
            *x *= 10;
        }
        assert_eq!(list.back(), Ok(&30));
        list.push_back(40);

        *list.find_mut(&40).unwrap().unwrap() = 4;
        assert_eq!(list.back(), Ok(&4));
        assert_eq!(list.insert_after(&4, 5), Ok(()));

        let mut cursor = list.cursor_start_mut();
        while cursor.move_next().is_ok() {}
        cursor.insert(6);
        list_eq(&list, [10, 20, 30, 4, 5, 6]);
    }

    #[cfg(feature = "tracing")]
    #[test]
    fn list_empty_rejections_are_logged() {
        use std::io;
        use std::sync::{Arc, Mutex};

        #[derive(Clone, Default)]
        struct Captured(Arc<Mutex<Vec<u8>>>);
        impl io::Write for Captured {
            fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
                self.0.lock().unwrap().extend_from_slice(buf);
                Ok(buf.len())
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, || {
            let mut list = List::<i32>::new();
            assert_eq!(list.front(), Err(Error::EmptyContainer));
            assert_eq!(list.back(), Err(Error::EmptyContainer));
            assert_eq!(list.front_mut(), Err(Error::EmptyContainer));
            assert_eq!(list.back_mut(), Err(Error::EmptyContainer));
            assert_eq!(list.find(&1), Err(Error::EmptyContainer));
            assert_eq!(list.find_mut(&1), Err(Error::EmptyContainer));
        });

        let logs = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert_eq!(logs.matches("rejected on empty list").count(), 6);
        for op in ["front", "back", "front_mut", "back_mut", "find", "find_mut"] {
            assert!(logs.contains(&format!("op=\"{op}\"")), "{logs}");
        }
    }

    #[test]
    fn list_mixed_operations() {
        let mut list = List::new();
        let mut expected = Vec::new();
        for i in 0..20 {
            match i % 5 {
                0 | 1 => {
                    list.push_back(i);
                    expected.push(i);
                }
                2 => {
                    list.push_front(i);
                    expected.insert(0, i);
                }
                3 => {
                    let pos = expected[expected.len() / 2];
                    list.insert_after(&pos, i).unwrap();
                    let at = expected.iter().position(|x| *x == pos).unwrap();
                    expected.insert(at + 1, i);
                }
                _ => {
                    let x = expected[expected.len() - 1];
                    assert_eq!(list.erase(&x), Ok(x));
                    expected.pop();
                }
            }
            list_eq(&list, expected.iter().copied());
        }
        list.clear();
        assert_ends(&list);
    }
}
