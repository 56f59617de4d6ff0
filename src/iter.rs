use std::{iter::FusedIterator, marker::PhantomData, ptr::NonNull};

use crate::base::{Link, Node, SingleLinkedList};

/// Raw forward walk over the nodes, carrying the number of nodes left.
struct IterPtr<T> {
    head: Link<T>,
    len: usize,
}

impl<T> Clone for IterPtr<T> {
    fn clone(&self) -> Self {
        Self {
            head: self.head,
            len: self.len,
        }
    }
}

impl<T> Iterator for IterPtr<T> {
    type Item = NonNull<Node<T>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.head.map(|head| {
            self.len -= 1;
            self.head = unsafe { (*head.as_ptr()).anchor.next };
            head
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> ExactSizeIterator for IterPtr<T> {
    fn len(&self) -> usize {
        self.len
    }
}

pub struct Iter<'a, T> {
    iter_ptr: IterPtr<T>,
    _marker: PhantomData<&'a SingleLinkedList<T>>,
}

impl<T> Iter<'_, T> {
    pub(crate) fn new(head: Link<T>, len: usize) -> Self {
        Self {
            iter_ptr: IterPtr { head, len },
            _marker: PhantomData,
        }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            iter_ptr: self.iter_ptr.clone(),
            _marker: PhantomData,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter_ptr
            .next()
            .map(|ptr| unsafe { &(*ptr.as_ptr()).value })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter_ptr.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.iter_ptr.len()
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

pub struct IterMut<'a, T> {
    iter_ptr: IterPtr<T>,
    _marker: PhantomData<&'a mut SingleLinkedList<T>>,
}

impl<T> IterMut<'_, T> {
    pub(crate) fn new(head: Link<T>, len: usize) -> Self {
        Self {
            iter_ptr: IterPtr { head, len },
            _marker: PhantomData,
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter_ptr
            .next()
            .map(|ptr| unsafe { &mut (*ptr.as_ptr()).value })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter_ptr.size_hint()
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {
    fn len(&self) -> usize {
        self.iter_ptr.len()
    }
}

impl<T> FusedIterator for IterMut<'_, T> {}

/// Owning iterator. Pops from the front, so whatever is left is freed with the list.
pub struct IntoIter<T> {
    list: SingleLinkedList<T>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(list: SingleLinkedList<T>) -> Self {
        Self { list }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.list.len()
    }
}

impl<T> FusedIterator for IntoIter<T> {}
