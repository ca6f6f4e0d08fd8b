//! This crate provides a singly-linked list with owned nodes and a sentinel
//! head.
//!
//! The [`List`] allows appending and prepending elements in constant time.
//! Searching, erasing or inserting after a given value take *O*(*n*) time,
//! since the list has to be scanned from the head.
//!
//! Here is a quick example showing how the list works.
//!
//! ```
//! use slist::{Error, List};
//!
//! let mut list = List::from([1, 2, 3, 4]);
//!
//! list.push_front(0);
//! list.push_back(5);
//! assert_eq!(list.to_string(), "0 1 2 3 4 5 ");
//!
//! list.erase(&3)?;
//! list.insert_after(&4, 10)?;
//! assert_eq!(list, List::from([0, 1, 2, 4, 10, 5]));
//!
//! assert_eq!(list.find(&10)?, Some(&10));
//! assert_eq!(list.find(&3)?, None);
//! assert_eq!(list.erase(&3), Err(Error::ValueNotFound));
//!
//! list.clear();
//! assert_eq!(list.front(), Err(Error::EmptyContainer));
//! # Ok::<(), Error>(())
//! ```
//!
//! # Memory Layout
//!
//! The memory layout of the list is like the following graph:
//! ```text
//!   (Ghost)
//! ┌───────────┐       ╔═══════════╗       ╔═══════════╗              ╔═══════════╗
//! │   next    │ ────→ ║   next    ║ ────→ ║   next    ║ ────→ ┄┄ ──→ ║   next    ║ ──→ None
//! ├───────────┤       ╟───────────╢       ╟───────────╢              ╟───────────╢
//! ┊No payload ┊       ║ payload T ║       ║ payload T ║              ║ payload T ║
//! └╌╌╌╌╌╌╌╌╌╌╌┘       ╚═══════════╝       ╚═══════════╝              ╚═══════════╝
//!       ↑                 Node 0              Node 1                    Node N-1
//!       │                                                                  ↑
//! ╔═══════════╗                                                            │
//! ║   ghost   ║ ───────────────────────────────────────────────────────────┘
//! ╟───────────╢                                                    (tail, not owning)
//! ║   tail    ║
//! ╟───────────╢
//! ║    len    ║
//! ╚═══════════╝
//!     List
//! ```
//! The `List` contains:
//! - a boxed ghost node, which is allocated when the list is created and
//!   released when the list is dropped;
//! - a `tail` pointer to the last node, or nothing if the list is empty. It never
//!   owns the node it points to;
//! - a length field `len` indicating the length of the list.
//!
//! Each node is allocated on the heap when it is linked in and reclaimed as soon
//! as it is unlinked. Links between nodes and the `tail` pointer are raw pointers
//! to these allocations, and only the list itself hands them out or frees them.
//! Dropping or clearing the list reclaims the nodes one by one in chain order, so
//! long lists do not overflow the stack.
//!
//! # Iteration
//!
//! Iterating over a list is by the [`Iter`] and [`IterMut`] iterators. These are
//! forward and fused iterators. [`IterMut`] provides mutability of the elements
//! (but not the linked structure of the list).
//!
//! ## Examples
//!
//! ```
//! use slist::List;
//!
//! let mut list = List::from([1, 2, 3]);
//! let mut iter = list.iter();
//! assert_eq!(iter.next(), Some(&1));
//! assert_eq!(iter.next(), Some(&2));
//! assert_eq!(iter.next(), Some(&3));
//! assert_eq!(iter.next(), None);
//! assert_eq!(iter.next(), None); // Fused
//!
//! list.iter_mut().for_each(|item| *item *= 2);
//! assert_eq!(Vec::from_iter(list), vec![2, 4, 6]);
//! ```
//!
//! # Cursors
//!
//! The cursors [`Cursor`] and [`CursorMut`] stand either at a node of the list,
//! or at the end position one past the last node. Reading the element or the
//! next link at the end position fails with [`Error::InvalidNodeAccess`].
//!
//! [`CursorMut`] provides ways to mutate the list at the cursor:
//! - [`insert`]: insert a new item before the cursor;
//! - [`insert_after`]: insert a new item after the cursor;
//! - [`remove`]: remove the item at the cursor;
//!
//! ## Examples
//!
//! ```
//! use slist::{Error, List};
//!
//! let mut list = List::from([1, 2, 3]);
//!
//! let mut cursor = list.cursor_start_mut();
//! cursor.insert(0); // becomes [0, 1, 2, 3], points to 1
//! assert_eq!(cursor.current(), Ok(&1));
//!
//! cursor.move_next()?;
//! assert_eq!(cursor.remove(), Ok(2)); // becomes [0, 1, 3], points to 3
//! cursor.insert_after(4)?; // becomes [0, 1, 3, 4], points to 3
//!
//! cursor.move_next()?;
//! cursor.move_next()?;
//! assert_eq!(cursor.current(), Err(Error::InvalidNodeAccess));
//!
//! assert_eq!(Vec::from_iter(list), vec![0, 1, 3, 4]);
//! # Ok::<(), Error>(())
//! ```
//!
//! [`List`]: crate::List
//! [`Iter`]: crate::Iter
//! [`IterMut`]: crate::IterMut
//! [`Cursor`]: crate::list::cursor::Cursor
//! [`CursorMut`]: crate::list::cursor::CursorMut
//! [`Error::InvalidNodeAccess`]: crate::Error::InvalidNodeAccess
//! [`insert`]: crate::list::cursor::CursorMut::insert
//! [`insert_after`]: crate::list::cursor::CursorMut::insert_after
//! [`remove`]: crate::list::cursor::CursorMut::remove

#[doc(inline)]
pub use error::{Error, Result};
#[doc(inline)]
pub use list::cursor::{Cursor, CursorMut};
#[doc(inline)]
pub use list::iterator::{IntoIter, Iter, IterMut};
#[doc(inline)]
pub use list::List;

pub mod list;

mod error;
