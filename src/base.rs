use std::{
    fmt::{self, Debug},
    marker::PhantomData,
    mem,
    ptr::NonNull,
};

use crate::{
    cursor::{Access, BasicCursor, Cursor, CursorMut},
    iter::{IntoIter, Iter, IterMut},
};

/// Singly linked list anchored on a sentinel link cell.
///
/// The sentinel is allocated once per list and never moves, so a cursor obtained from
/// [`before_begin`](Self::before_begin) stays valid for the life of the list, including
/// across moves of the list value and [`swap`](Self::swap).
pub struct SingleLinkedList<T> {
    sentinel: NonNull<Anchor<T>>,
    len: usize,
    _marker: PhantomData<Box<Node<T>>>,
}

unsafe impl<T: Send> Send for SingleLinkedList<T> {}
unsafe impl<T: Sync> Sync for SingleLinkedList<T> {}

pub(crate) type Link<T> = Option<NonNull<Node<T>>>;

/// The link part of a node. The sentinel is a bare `Anchor`.
#[repr(C)]
pub(crate) struct Anchor<T> {
    pub(crate) next: Link<T>,
}

// `anchor` must stay the first field: cursors hold `NonNull<Anchor<T>>` and cast it back.
#[repr(C)]
pub(crate) struct Node<T> {
    pub(crate) anchor: Anchor<T>,
    pub(crate) value: T,
}

impl<T> Node<T> {
    fn new_ptr(value: T, next: Link<T>) -> NonNull<Self> {
        Box::leak(Box::new(Node {
            anchor: Anchor { next },
            value,
        }))
        .into()
    }

    pub(crate) fn anchor_ptr(node: NonNull<Self>) -> NonNull<Anchor<T>> {
        node.cast()
    }

    /// # Safety
    /// * `node` is unlinked and owned by the caller
    unsafe fn into_value(node: NonNull<Self>) -> T {
        Box::from_raw(node.as_ptr()).value
    }
}

impl<T> Anchor<T> {
    /// # Safety
    /// * `anchor` is the link cell of a real node, not a sentinel
    pub(crate) unsafe fn node_ptr(anchor: NonNull<Self>) -> NonNull<Node<T>> {
        anchor.cast()
    }
}

impl<T> SingleLinkedList<T> {
    pub fn new() -> Self {
        Self {
            sentinel: Box::leak(Box::new(Anchor { next: None })).into(),
            len: 0,
            _marker: PhantomData,
        }
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn first(&self) -> Link<T> {
        unsafe { self.sentinel.as_ref().next }
    }

    fn first_mut(&mut self) -> &mut Link<T> {
        unsafe { &mut (*self.sentinel.as_ptr()).next }
    }

    pub fn front(&self) -> Option<&T> {
        self.first().map(|node| unsafe { &(*node.as_ptr()).value })
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.first().map(|node| unsafe { &mut (*node.as_ptr()).value })
    }

    pub fn push_front(&mut self, value: T) {
        unsafe {
            self.link_after(self.sentinel, value);
        }
    }

    /// Removes the first element. Returns `None` and leaves the list alone if it is empty.
    pub fn pop_front(&mut self) -> Option<T> {
        unsafe {
            let node = self.unlink_after(self.sentinel)?;
            Some(Node::into_value(node))
        }
    }

    /// Drops every element, front to back. The sentinel is kept.
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    /// Exchanges the contents of two lists in O(1).
    ///
    /// Only the first links and the lengths move; the sentinels stay with their lists, so
    /// no cursor of either list is invalidated. Cursors to real nodes follow the nodes.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self.first_mut(), other.first_mut());
        mem::swap(&mut self.len, &mut other.len);
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.first(), self.len)
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self.first(), self.len)
    }

    pub fn begin(&mut self) -> CursorMut<T> {
        BasicCursor::from_anchor(self.first().map(Node::anchor_ptr))
    }

    pub fn end(&mut self) -> CursorMut<T> {
        BasicCursor::end()
    }

    pub fn cbegin(&self) -> Cursor<T> {
        BasicCursor::from_anchor(self.first().map(Node::anchor_ptr))
    }

    pub fn cend(&self) -> Cursor<T> {
        BasicCursor::end()
    }

    /// Cursor to the position before the first element. Never dereference it; it exists to
    /// be passed to [`insert_after`](Self::insert_after) and [`erase_after`](Self::erase_after).
    pub fn before_begin(&mut self) -> CursorMut<T> {
        BasicCursor::from_anchor(Some(self.sentinel))
    }

    pub fn cbefore_begin(&self) -> Cursor<T> {
        BasicCursor::from_anchor(Some(self.sentinel))
    }

    /// Inserts `value` right after `pos` and returns a cursor to the new node.
    /// No existing cursor is invalidated.
    ///
    /// # Safety
    /// * `pos` is the before-first cursor of `self` or points to a live node of `self`
    pub unsafe fn insert_after<A: Access>(
        &mut self,
        pos: BasicCursor<T, A>,
        value: T,
    ) -> CursorMut<T> {
        debug_assert!(self.owns(pos), "`pos` is not a position of this list");
        let node = self.link_after(pos.anchor().unwrap_unchecked(), value);
        BasicCursor::from_anchor(Some(Node::anchor_ptr(node)))
    }

    /// Drops the element right after `pos` and returns a cursor to the element that now
    /// follows `pos` (the end cursor if there is none). Only cursors to the dropped element
    /// are invalidated.
    ///
    /// # Safety
    /// * `pos` is the before-first cursor of `self` or points to a live node of `self`
    /// * `pos` has a successor
    pub unsafe fn erase_after<A: Access>(&mut self, pos: BasicCursor<T, A>) -> CursorMut<T> {
        let removed = self.remove_after(pos);
        debug_assert!(removed.is_some(), "`pos` has no successor to erase");
        drop(removed);
        CursorMut::from_anchor(pos.anchor()).next()
    }

    /// Unlinks the element right after `pos` and returns it, or returns `None` if `pos` has
    /// no successor.
    ///
    /// # Safety
    /// * `pos` is the before-first cursor of `self` or points to a live node of `self`
    pub unsafe fn remove_after<A: Access>(&mut self, pos: BasicCursor<T, A>) -> Option<T> {
        debug_assert!(self.owns(pos), "`pos` is not a position of this list");
        let node = self.unlink_after(pos.anchor()?)?;
        Some(Node::into_value(node))
    }

    /// Moves every element of `other` in after `pos`, keeping their order. Takes
    /// O(`other.len()`) to find the tail of `other`. Cursors into `other` stay valid and now
    /// point into `self`.
    ///
    /// # Safety
    /// * `pos` is the before-first cursor of `self` or points to a live node of `self`
    pub unsafe fn splice_after<A: Access>(&mut self, pos: BasicCursor<T, A>, other: Self) {
        debug_assert!(self.owns(pos), "`pos` is not a position of this list");
        self.splice_after_anchor(pos.anchor().unwrap_unchecked(), other);
    }

    /// Detaches everything after `pos` into a new list.
    ///
    /// # Safety
    /// * `pos` is the before-first cursor of `self` or points to a live node of `self`
    pub unsafe fn split_after<A: Access>(&mut self, pos: BasicCursor<T, A>) -> Self {
        debug_assert!(self.owns(pos), "`pos` is not a position of this list");
        let mut rest = Self::new();
        let anchor = pos.anchor().unwrap_unchecked();
        let detached = (*anchor.as_ptr()).next.take();

        let mut count = 0;
        let mut node = detached;
        while let Some(current) = node {
            count += 1;
            node = (*current.as_ptr()).anchor.next;
        }

        *rest.first_mut() = detached;
        rest.len = count;
        self.len -= count;
        rest
    }

    /// # Safety
    /// * `pos` points to a live real node of `self`
    pub unsafe fn get<A: Access>(&self, pos: BasicCursor<T, A>) -> &T {
        debug_assert!(
            pos.anchor() != Some(self.sentinel),
            "dereferenced the before-first cursor"
        );
        debug_assert!(self.owns(pos), "`pos` is not a position of this list");
        pos.get()
    }

    /// # Safety
    /// * `pos` points to a live real node of `self`
    pub unsafe fn get_mut(&mut self, pos: CursorMut<T>) -> &mut T {
        debug_assert!(
            pos.anchor() != Some(self.sentinel),
            "dereferenced the before-first cursor"
        );
        debug_assert!(self.owns(pos), "`pos` is not a position of this list");
        pos.get_mut()
    }

    /// Links a new node after `anchor`.
    ///
    /// # Safety
    /// * `anchor` is the sentinel of `self` or the link cell of a live node of `self`
    unsafe fn link_after(&mut self, anchor: NonNull<Anchor<T>>, value: T) -> NonNull<Node<T>> {
        let next = &mut (*anchor.as_ptr()).next;
        let node = Node::new_ptr(value, *next);
        *next = Some(node);
        self.len += 1;
        node
    }

    /// Unlinks the node after `anchor` without freeing it.
    ///
    /// # Safety
    /// * `anchor` is the sentinel of `self` or the link cell of a live node of `self`
    unsafe fn unlink_after(&mut self, anchor: NonNull<Anchor<T>>) -> Link<T> {
        let removed = (*anchor.as_ptr()).next?;
        (*anchor.as_ptr()).next = (*removed.as_ptr()).anchor.next;
        self.len -= 1;
        Some(removed)
    }

    /// Appends the items of `iter` one by one after `tail`, returning the new tail.
    /// `len` is bumped per node, so a panicking iterator leaves `self` consistent.
    ///
    /// # Safety
    /// * `tail` is the sentinel of `self` or the link cell of a live node of `self`
    unsafe fn fill_after<I: IntoIterator<Item = T>>(
        &mut self,
        mut tail: NonNull<Anchor<T>>,
        iter: I,
    ) -> NonNull<Anchor<T>> {
        for value in iter {
            tail = Node::anchor_ptr(self.link_after(tail, value));
        }
        tail
    }

    /// # Safety
    /// * `anchor` is the sentinel of `self` or the link cell of a live node of `self`
    unsafe fn splice_after_anchor(&mut self, anchor: NonNull<Anchor<T>>, mut other: Self) {
        if other.is_empty() {
            return;
        }
        let other_tail = other.tail_anchor();
        let other_first = other.first_mut().take();

        let next = &mut (*anchor.as_ptr()).next;
        (*other_tail.as_ptr()).next = *next;
        *next = other_first;
        self.len += mem::take(&mut other.len);
    }

    fn tail_anchor(&self) -> NonNull<Anchor<T>> {
        let mut tail = self.sentinel;
        while let Some(next) = unsafe { tail.as_ref().next } {
            tail = Node::anchor_ptr(next);
        }
        tail
    }

    /// Whether `pos` is the sentinel or a node reachable from it. O(n), debug checks only.
    fn owns<A: Access>(&self, pos: BasicCursor<T, A>) -> bool {
        let Some(target) = pos.anchor() else {
            return false;
        };
        let mut anchor = Some(self.sentinel);
        while let Some(current) = anchor {
            if current == target {
                return true;
            }
            anchor = unsafe { current.as_ref().next.map(Node::anchor_ptr) };
        }
        false
    }
}

impl<T> Drop for SingleLinkedList<T> {
    fn drop(&mut self) {
        // iterative, a recursive drop would overflow the stack on long chains
        self.clear();
        unsafe {
            drop(Box::from_raw(self.sentinel.as_ptr()));
        }
    }
}

impl<T: Clone> Clone for SingleLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }

    /// Builds the full copy first and swaps it in, so a panicking `T::clone` leaves `self`
    /// untouched.
    fn clone_from(&mut self, source: &Self) {
        let mut copy = source.clone();
        self.swap(&mut copy);
    }
}

impl<T> FromIterator<T> for SingleLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        let sentinel = list.sentinel;
        unsafe {
            list.fill_after(sentinel, iter);
        }
        list
    }
}

impl<T, const N: usize> From<[T; N]> for SingleLinkedList<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

/// Appends at the tail. The new elements are collected into a separate list first, so a
/// panicking iterator leaves `self` untouched.
impl<T> Extend<T> for SingleLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let other: Self = iter.into_iter().collect();
        let tail = self.tail_anchor();
        unsafe {
            self.splice_after_anchor(tail, other);
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for SingleLinkedList<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T> IntoIterator for SingleLinkedList<T> {
    type IntoIter = IntoIter<T>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a SingleLinkedList<T> {
    type IntoIter = Iter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut SingleLinkedList<T> {
    type IntoIter = IterMut<'a, T>;
    type Item = &'a mut T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T: Debug> Debug for SingleLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut iter = self.iter();
        write!(f, "[")?;
        if let Some(val) = iter.next() {
            write!(f, "{val:?}")?;
            for val in iter {
                write!(f, ", {val:?}")?;
            }
        }
        write!(f, "]")
    }
}

impl<T> Default for SingleLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}
