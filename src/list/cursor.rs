use crate::error::{InvalidNodeAccessSnafu, Result};
use crate::list::{Link, List, Node};
use crate::Iter;
use snafu::prelude::*;
use std::fmt;
use std::ptr::{self, NonNull};

/// The position of a cursor: either at a node of the list, or at the end
/// position one past the last node.
#[derive(Clone, Copy)]
pub(crate) enum Position<N> {
    Node(N),
    End,
}

impl<N: Copy> Position<N> {
    /// Returns the node at this position, or an error at the end position.
    fn node(&self) -> Result<N> {
        match *self {
            Position::Node(node) => Ok(node),
            Position::End => InvalidNodeAccessSnafu.fail(),
        }
    }

    fn is_end(&self) -> bool {
        matches!(self, Position::End)
    }
}

impl<N> From<Option<N>> for Position<N> {
    fn from(node: Option<N>) -> Self {
        match node {
            Some(node) => Position::Node(node),
            None => Position::End,
        }
    }
}

/// A cursor over a `List`.
///
/// A `Cursor` is like a forward iterator that can be compared and inspected
/// without advancing. In a list with length *n*, there are *n* + 1 valid
/// locations for the cursor, indexed by 0, 1, ..., *n*, where *n* is the end
/// position.
///
/// Reading the element or the next link at the end position fails with
/// [`Error::InvalidNodeAccess`](crate::Error::InvalidNodeAccess).
///
/// # Examples
///
/// ```
/// use slist::{Error, List};
///
/// // Create a list: [ A B C ]
/// let list = List::from(['A', 'B', 'C']);
///
/// // Create a cursor at start: [|A B C ] (index = 0)
/// let mut cursor = list.cursor_start();
/// assert_eq!(cursor.current(), Ok(&'A'));
/// assert_eq!(cursor.peek_next(), Ok(Some(&'B')));
///
/// // Move cursor forward: [ A|B C ] (index = 1)
/// assert!(cursor.move_next().is_ok());
/// assert_eq!(cursor.current(), Ok(&'B'));
///
/// // Move cursor to the end: [ A B C|] (index = 3)
/// assert!(cursor.move_next().is_ok());
/// assert!(cursor.move_next().is_ok());
/// assert!(cursor == list.cursor_end());
/// assert_eq!(cursor.current(), Err(Error::InvalidNodeAccess));
/// assert_eq!(cursor.move_next(), Err(Error::InvalidNodeAccess));
/// ```
pub struct Cursor<'a, T: 'a> {
    index: usize,
    position: Position<NonNull<Node<T>>>,
    list: &'a List<T>,
}

impl<'a, T: 'a> Clone for Cursor<'a, T> {
    fn clone(&self) -> Self {
        Self {
            index: self.index,
            position: self.position,
            list: self.list,
        }
    }
}

/// Compare cursors by its position.
///
/// Only cursors belong to the same list and have the same positions
/// are considered equal.
///
/// # Examples
/// ```
/// use slist::List;
///
/// let list = List::from([1, 2, 3]);
/// let cursor1 = list.cursor_start();
/// let mut cursor2 = cursor1.clone();
/// // The same list, and the same position.
/// assert!(cursor1 == cursor2);
///
/// cursor2.move_next().unwrap();
/// // The same list, but different positions.
/// assert!(cursor1 != cursor2);
///
/// let another_list = list.clone();
/// let cursor3 = another_list.cursor_start();
/// // Different list, different positions.
/// assert!(cursor1 != cursor3);
/// ```
impl<'a, T: 'a> PartialEq for Cursor<'a, T> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.list, other.list)
            && match (self.position, other.position) {
                (Position::Node(a), Position::Node(b)) => a == b,
                (Position::End, Position::End) => true,
                _ => false,
            }
    }
}

impl<'a, T: 'a> Eq for Cursor<'a, T> {}

impl<'a, T: fmt::Debug + 'a> fmt::Debug for Cursor<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("index", &self.index)
            .field("current", &self.current().ok())
            .finish()
    }
}

impl<'a, T: 'a> Cursor<'a, T> {
    pub(crate) fn new(list: &'a List<T>, position: Position<NonNull<Node<T>>>, index: usize) -> Self {
        Self {
            index,
            position,
            list,
        }
    }

    /// Return the index of the cursor
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns `true` if the cursor is at the end position.
    pub fn is_end(&self) -> bool {
        self.position.is_end()
    }

    /// Provides a reference to the element at the cursor.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidNodeAccess`](crate::Error::InvalidNodeAccess) at
    /// the end position.
    pub fn current(&self) -> Result<&'a T> {
        // SAFETY: the node at the cursor is owned by the list, which is borrowed
        // for `'a`.
        self.position
            .node()
            .map(|node| unsafe { &(*node.as_ptr()).element })
    }

    /// Provides a reference to the element right after the cursor, or `None` if
    /// the cursor is at the last node.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidNodeAccess`](crate::Error::InvalidNodeAccess) at
    /// the end position, which has no next link.
    pub fn peek_next(&self) -> Result<Option<&'a T>> {
        let node = self.position.node()?;
        // SAFETY: see `current`.
        unsafe {
            let next = (*node.as_ptr()).next;
            Ok(next.map(|next| &(*next.as_ptr()).element))
        }
    }

    /// Move the cursor to the next position. Moving from the last node reaches
    /// the end position.
    ///
    /// This operation should compute in *O*(*1*) time.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidNodeAccess`](crate::Error::InvalidNodeAccess) at
    /// the end position, where the cursor stays.
    pub fn move_next(&mut self) -> Result<()> {
        let node = self.position.node()?;
        // SAFETY: see `current`.
        self.position = Position::from(unsafe { (*node.as_ptr()).next });
        self.index += 1;
        Ok(())
    }
}

/// Convert the cursor to an iterator over the elements from the cursor to the
/// end of the list.
///
/// # Examples
/// ```
/// use slist::List;
///
/// let list = List::from([1, 2, 3, 4]);
/// let mut cursor = list.cursor_start();
/// cursor.move_next().unwrap();
/// assert_eq!(Vec::from_iter(cursor), vec![&2, &3, &4]);
/// ```
impl<'a, T: 'a> IntoIterator for Cursor<'a, T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        let node = self.position.node().ok();
        Iter::new(node, self.list.len() - self.index)
    }
}

/// A cursor over a `List` with editing operations.
///
/// A `CursorMut` is like a forward iterator, except that it can safely mutate
/// the list during iteration. This is because the lifetime of its yielded
/// references is tied to its own lifetime, instead of just the underlying list.
/// This means cursors cannot yield multiple elements at once.
///
/// Besides the current node, the cursor remembers the node before it (or the
/// ghost node at the front), so that the current node can be removed and new
/// nodes can be inserted before it in constant time.
///
/// The list cannot be touched while the cursor is alive, so a cursor is never
/// invalidated by a mutation it does not perform itself.
///
/// # Examples
///
/// ```compile_fail
/// use slist::List;
///
/// let mut list = List::from([1, 2, 3]);
/// let mut cursor = list.cursor_start_mut();
/// list.push_back(4);
/// println!("{:?}", cursor.current());
/// ```
pub struct CursorMut<'a, T: 'a> {
    index: usize,
    /// the node before the cursor, or `None` for the ghost node
    prev: Link<T>,
    position: Position<NonNull<Node<T>>>,
    list: &'a mut List<T>,
}

impl<'a, T: fmt::Debug + 'a> fmt::Debug for CursorMut<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorMut")
            .field("index", &self.index)
            .field("current", &self.current().ok())
            .finish()
    }
}

impl<'a, T: 'a> CursorMut<'a, T> {
    pub(crate) fn new(
        list: &'a mut List<T>,
        prev: Link<T>,
        position: Position<NonNull<Node<T>>>,
        index: usize,
    ) -> Self {
        Self {
            index,
            prev,
            position,
            list,
        }
    }

    /// Return the index of the cursor
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns `true` if the cursor is at the end position.
    pub fn is_end(&self) -> bool {
        self.position.is_end()
    }

    /// Temporarily borrow the list being edited.
    ///
    /// # Examples
    ///
    /// ```
    /// use slist::List;
    ///
    /// let mut list = List::from([1, 2]);
    /// let mut cursor = list.cursor_start_mut();
    /// cursor.insert(0);
    /// assert_eq!(cursor.view(), &List::from([0, 1, 2]));
    /// ```
    pub fn view(&self) -> &List<T> {
        self.list
    }

    /// Provides a reference to the element at the cursor.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidNodeAccess`](crate::Error::InvalidNodeAccess) at
    /// the end position.
    pub fn current(&self) -> Result<&T> {
        // SAFETY: the node at the cursor is owned by the list, which is borrowed
        // by the cursor.
        self.position
            .node()
            .map(|node| unsafe { &(*node.as_ptr()).element })
    }

    /// Provides a mutable reference to the element at the cursor.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidNodeAccess`](crate::Error::InvalidNodeAccess) at
    /// the end position.
    pub fn current_mut(&mut self) -> Result<&mut T> {
        // SAFETY: the node at the cursor is owned by the list, which is borrowed
        // mutably by the cursor.
        self.position
            .node()
            .map(|node| unsafe { &mut (*node.as_ptr()).element })
    }

    /// Provides a reference to the element right after the cursor, or `None` if
    /// the cursor is at the last node.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidNodeAccess`](crate::Error::InvalidNodeAccess) at
    /// the end position.
    pub fn peek_next(&self) -> Result<Option<&T>> {
        let node = self.position.node()?;
        // SAFETY: see `current`.
        unsafe {
            let next = (*node.as_ptr()).next;
            Ok(next.map(|next| &(*next.as_ptr()).element))
        }
    }

    /// Move the cursor to the next position. Moving from the last node reaches
    /// the end position.
    ///
    /// This operation should compute in *O*(*1*) time.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidNodeAccess`](crate::Error::InvalidNodeAccess) at
    /// the end position, where the cursor stays.
    pub fn move_next(&mut self) -> Result<()> {
        let node = self.position.node()?;
        // SAFETY: see `current_mut`.
        let next = unsafe { (*node.as_ptr()).next };
        self.prev = Some(node);
        self.position = Position::from(next);
        self.index += 1;
        Ok(())
    }

    /// Insert a new element before the cursor. The cursor keeps pointing at the
    /// same node (or at the end position), whose index grows by one.
    ///
    /// Inserting at the end position appends to the list, and inserting at the
    /// first node prepends to it.
    ///
    /// This operation should compute in *O*(*1*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use slist::List;
    ///
    /// let mut list = List::from([1, 3]);
    /// let mut cursor = list.cursor_start_mut();
    /// cursor.insert(0);
    /// cursor.move_next().unwrap();
    /// cursor.insert(2);
    /// assert_eq!(cursor.current(), Ok(&3));
    /// assert_eq!(cursor.index(), 3);
    /// assert_eq!(Vec::from_iter(list), vec![0, 1, 2, 3]);
    /// ```
    pub fn insert(&mut self, elt: T) {
        // SAFETY: `prev` is the ghost node or the node right before the cursor.
        let node = unsafe { self.list.attach_node(self.prev, elt) };
        self.prev = Some(node);
        self.index += 1;
    }

    /// Insert a new element right after the cursor. The cursor keeps pointing
    /// at the same node.
    ///
    /// If the cursor is at the last node, the new element becomes the back of
    /// the list.
    ///
    /// This operation should compute in *O*(*1*) time.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidNodeAccess`](crate::Error::InvalidNodeAccess) at
    /// the end position, which has no next link.
    ///
    /// # Examples
    ///
    /// ```
    /// use slist::List;
    ///
    /// let mut list = List::from([1, 3]);
    /// let mut cursor = list.cursor_start_mut();
    /// cursor.insert_after(2).unwrap();
    /// assert_eq!(cursor.current(), Ok(&1));
    /// assert_eq!(cursor.peek_next(), Ok(Some(&2)));
    /// assert_eq!(Vec::from_iter(list), vec![1, 2, 3]);
    /// ```
    pub fn insert_after(&mut self, elt: T) -> Result<()> {
        let node = self.position.node()?;
        // SAFETY: `node` is the node at the cursor, which belongs to the list.
        unsafe { self.list.attach_node(Some(node), elt) };
        Ok(())
    }

    /// Remove the element at the cursor and return it. The cursor moves to the
    /// next node (or the end position), whose index becomes the current index.
    ///
    /// If the removed element was the last one, the node before it becomes the
    /// back of the list.
    ///
    /// This operation should compute in *O*(*1*) time.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidNodeAccess`](crate::Error::InvalidNodeAccess) at
    /// the end position.
    ///
    /// # Examples
    ///
    /// ```
    /// use slist::{Error, List};
    ///
    /// let mut list = List::from([1, 2, 3]);
    /// let mut cursor = list.cursor_start_mut();
    /// cursor.move_next().unwrap();
    /// cursor.move_next().unwrap();
    /// assert_eq!(cursor.remove(), Ok(3));
    /// assert!(cursor.is_end());
    /// assert_eq!(cursor.remove(), Err(Error::InvalidNodeAccess));
    /// assert_eq!(list.back(), Ok(&2));
    /// ```
    pub fn remove(&mut self) -> Result<T> {
        ensure!(!self.is_end(), InvalidNodeAccessSnafu);
        // SAFETY: `prev` is the ghost node or the node right before the cursor.
        let removed = unsafe { self.list.detach_node(self.prev) }.context(InvalidNodeAccessSnafu)?;
        // SAFETY: `prev` still belongs to the list, and now links to the successor
        // of the removed node.
        let next = unsafe { *self.list.link_after(self.prev) };
        self.position = Position::from(next);
        Ok(removed.into_element())
    }
}

unsafe impl<T: Sync> Send for Cursor<'_, T> {}

unsafe impl<T: Sync> Sync for Cursor<'_, T> {}

unsafe impl<T: Send> Send for CursorMut<'_, T> {}

unsafe impl<T: Sync> Sync for CursorMut<'_, T> {}
