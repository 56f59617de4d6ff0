//! Forward cursors over the nodes of a [`SingleLinkedList`](crate::SingleLinkedList).
//!
//! A cursor is a bare node address: it does not borrow the list, it is `Copy`, and it stays
//! valid until the node it points to is erased. Because nothing ties a cursor to the list
//! at compile time, every operation that follows or dereferences one is `unsafe`.
//!
//! There are three kinds of positions:
//! * a real node, obtained from `begin`/`cbegin`, `insert_after` or by moving forward;
//! * the before-first position (`before_begin`/`cbefore_begin`), which addresses the
//!   list's sentinel and may only be used as an anchor for `insert_after`/`erase_after`;
//! * the end position, which addresses nothing and is what `Default` produces.

use std::{
    fmt::{self, Debug},
    hash::{Hash, Hasher},
    marker::PhantomData,
    ptr::NonNull,
};

use crate::base::{Anchor, Node};

mod sealed {
    pub trait Sealed {}
}

/// Access level granted by a cursor. Implemented by [`Const`] and [`Mut`] only.
pub trait Access: sealed::Sealed {}

/// Read-only access.
pub enum Const {}

/// Read-write access.
pub enum Mut {}

impl sealed::Sealed for Const {}
impl sealed::Sealed for Mut {}
impl Access for Const {}
impl Access for Mut {}

pub struct BasicCursor<T, A: Access> {
    anchor: Option<NonNull<Anchor<T>>>,
    _marker: PhantomData<(*const T, fn() -> A)>,
}

/// Read-only cursor.
pub type Cursor<T> = BasicCursor<T, Const>;

/// Cursor that can also hand out `&mut T`. Converts into [`Cursor`], never the reverse.
pub type CursorMut<T> = BasicCursor<T, Mut>;

impl<T, A: Access> BasicCursor<T, A> {
    pub(crate) const fn from_anchor(anchor: Option<NonNull<Anchor<T>>>) -> Self {
        Self {
            anchor,
            _marker: PhantomData,
        }
    }

    pub(crate) const fn anchor(self) -> Option<NonNull<Anchor<T>>> {
        self.anchor
    }

    /// The end cursor. Equal to the `end`/`cend` of every list.
    pub const fn end() -> Self {
        Self::from_anchor(None)
    }

    pub const fn is_end(&self) -> bool {
        self.anchor.is_none()
    }

    pub const fn as_const(self) -> Cursor<T> {
        BasicCursor::from_anchor(self.anchor)
    }

    /// Moves to the successor and returns the same cursor.
    /// The end cursor stays where it is.
    ///
    /// # Safety
    /// * the node (or sentinel) `self` points to is still alive
    pub unsafe fn move_next(&mut self) -> &mut Self {
        if let Some(anchor) = self.anchor {
            self.anchor = anchor.as_ref().next.map(Node::anchor_ptr);
        }
        self
    }

    /// Moves to the successor and returns the position held before the move.
    ///
    /// # Safety
    /// * same as [`move_next`](Self::move_next)
    pub unsafe fn post_move_next(&mut self) -> Self {
        let old = *self;
        self.move_next();
        old
    }

    /// Returns a cursor to the successor, leaving `self` untouched.
    ///
    /// # Safety
    /// * same as [`move_next`](Self::move_next)
    pub unsafe fn next(mut self) -> Self {
        self.move_next();
        self
    }

    /// # Safety
    /// * `self` points to a live real node: not the end cursor, not the before-first cursor
    /// * no `&mut T` to the same value exists for `'a`
    pub unsafe fn get<'a>(self) -> &'a T {
        debug_assert!(!self.is_end(), "dereferenced the end cursor");
        let node = Anchor::node_ptr(self.anchor.unwrap_unchecked());
        &(*node.as_ptr()).value
    }
}

impl<T> BasicCursor<T, Mut> {
    /// # Safety
    /// * `self` points to a live real node: not the end cursor, not the before-first cursor
    /// * no other reference to the same value exists for `'a`
    pub unsafe fn get_mut<'a>(self) -> &'a mut T {
        debug_assert!(!self.is_end(), "dereferenced the end cursor");
        let node = Anchor::node_ptr(self.anchor.unwrap_unchecked());
        &mut (*node.as_ptr()).value
    }
}

impl<T, A: Access> Clone for BasicCursor<T, A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, A: Access> Copy for BasicCursor<T, A> {}

impl<T, A: Access> Default for BasicCursor<T, A> {
    fn default() -> Self {
        Self::end()
    }
}

impl<T> From<CursorMut<T>> for Cursor<T> {
    fn from(value: CursorMut<T>) -> Self {
        value.as_const()
    }
}

impl<T, A: Access, B: Access> PartialEq<BasicCursor<T, B>> for BasicCursor<T, A> {
    fn eq(&self, other: &BasicCursor<T, B>) -> bool {
        self.anchor == other.anchor
    }
}

impl<T, A: Access> Eq for BasicCursor<T, A> {}

impl<T, A: Access> Hash for BasicCursor<T, A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.anchor.hash(state);
    }
}

impl<T, A: Access> Debug for BasicCursor<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.anchor {
            Some(anchor) => f.debug_tuple("Cursor").field(&anchor).finish(),
            None => f.write_str("Cursor(end)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SingleLinkedList;

    #[test]
    fn default_is_end() {
        let list = SingleLinkedList::<i32>::new();
        assert_eq!(Cursor::<i32>::default(), list.cend());
        assert_eq!(CursorMut::<i32>::default(), list.cend());
        assert!(Cursor::<i32>::default().is_end());
        assert_eq!(list.cbegin(), list.cend());
    }

    #[test]
    fn mixed_flavor_comparison() {
        let mut list = SingleLinkedList::from([1, 2, 3]);
        let first = list.begin();
        let first_const: Cursor<_> = first.into();
        assert_eq!(first, first_const);
        assert_eq!(first_const, first);
        assert_eq!(first, list.cbegin());
        assert_ne!(first, list.cbefore_begin());
        assert_ne!(list.before_begin(), list.cend());
    }

    #[test]
    fn move_next_walks_to_end() {
        let list = SingleLinkedList::from([1, 2, 3]);
        let mut cursor = list.cbegin();
        let mut seen = Vec::new();
        unsafe {
            while cursor != list.cend() {
                seen.push(*cursor.get());
                cursor.move_next();
            }
            assert_eq!(seen, [1, 2, 3]);

            cursor.move_next();
            assert!(cursor.is_end());
        }
    }

    #[test]
    fn pre_and_post_increment() {
        let list = SingleLinkedList::from(['a', 'b', 'c']);
        let mut cursor = list.cbegin();
        unsafe {
            let old = cursor.post_move_next();
            assert_eq!(*old.get(), 'a');
            assert_eq!(*cursor.get(), 'b');

            let same = *cursor.move_next();
            assert_eq!(same, cursor);
            assert_eq!(*cursor.get(), 'c');

            let peek = list.cbefore_begin().next();
            assert_eq!(peek, list.cbegin());
        }
    }

    #[test]
    fn write_through_cursor_mut() {
        let mut list = SingleLinkedList::from([1, 2, 3]);
        let mut cursor = list.begin();
        unsafe {
            while !cursor.is_end() {
                *cursor.get_mut() *= 10;
                cursor.move_next();
            }
        }
        assert!(list.iter().eq(&[10, 20, 30]));
    }

    #[test]
    fn debug_output() {
        let list = SingleLinkedList::<u8>::new();
        assert_eq!(format!("{:?}", list.cend()), "Cursor(end)");
        assert!(format!("{:?}", list.cbefore_begin()).starts_with("Cursor(0x"));
    }
}
