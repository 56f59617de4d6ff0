//! A singly linked list with a sentinel node and forward cursors.
//!
//! Every list owns a sentinel link cell that sits before the first element. The
//! before-first cursor addresses it, which lets insertion and removal at the front go
//! through the same [`insert_after`](SingleLinkedList::insert_after) /
//! [`erase_after`](SingleLinkedList::erase_after) path as anywhere else.
//!
//! ```
//! use single_linked_list::SingleLinkedList;
//!
//! let mut list = SingleLinkedList::from([10, 20, 30]);
//! let mut at_20 = list.cbegin();
//! unsafe {
//!     at_20.move_next();
//!     list.insert_after(at_20, 25);
//! }
//! assert!(list.iter().eq(&[10, 20, 25, 30]));
//!
//! unsafe {
//!     list.erase_after(at_20);
//! }
//! list.pop_front();
//! assert!(list.iter().eq(&[20, 30]));
//! assert_eq!(list.len(), 2);
//! ```
//!
//! Cursors are plain node addresses that do not borrow the list, so everything that
//! follows one is `unsafe`. Debug builds check that a cursor belongs to the list it is
//! used with.

mod base;
pub mod cmp;
pub mod cursor;
pub mod iter;

pub use base::SingleLinkedList;
pub use cmp::swap;
pub use cursor::{BasicCursor, Cursor, CursorMut};
