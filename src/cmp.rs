//! Structural comparison of lists and the free-standing operators.
//!
//! Two lists are equal when they have the same length and pairwise equal elements; ordering
//! is lexicographic. The free functions mirror the operators: `ne` is `!eq`, and `le`, `gt`,
//! `ge` are all derived from `lt`, so for element types with incomparable values (`NAN`)
//! `le`/`ge` answer "not greater"/"not less" rather than `PartialOrd::le`/`ge`.

use std::{
    cmp::Ordering,
    hash::{Hash, Hasher},
};

use crate::SingleLinkedList;

impl<T: PartialEq> PartialEq for SingleLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        // pairwise comparison alone would call a list equal to its own prefix
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for SingleLinkedList<T> {}

impl<T: PartialOrd> PartialOrd for SingleLinkedList<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }

    fn lt(&self, other: &Self) -> bool {
        self.iter().lt(other.iter())
    }

    fn le(&self, other: &Self) -> bool {
        self.iter().le(other.iter())
    }

    fn gt(&self, other: &Self) -> bool {
        self.iter().gt(other.iter())
    }

    fn ge(&self, other: &Self) -> bool {
        self.iter().ge(other.iter())
    }
}

impl<T: Ord> Ord for SingleLinkedList<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T: Hash> Hash for SingleLinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        for value in self {
            value.hash(state);
        }
    }
}

/// Same as [`SingleLinkedList::swap`].
pub fn swap<T>(lhs: &mut SingleLinkedList<T>, rhs: &mut SingleLinkedList<T>) {
    lhs.swap(rhs);
}

pub fn eq<T: PartialEq>(lhs: &SingleLinkedList<T>, rhs: &SingleLinkedList<T>) -> bool {
    lhs == rhs
}

pub fn ne<T: PartialEq>(lhs: &SingleLinkedList<T>, rhs: &SingleLinkedList<T>) -> bool {
    !eq(lhs, rhs)
}

/// Lexicographic "less than".
pub fn lt<T: PartialOrd>(lhs: &SingleLinkedList<T>, rhs: &SingleLinkedList<T>) -> bool {
    lhs.iter().lt(rhs.iter())
}

pub fn le<T: PartialOrd>(lhs: &SingleLinkedList<T>, rhs: &SingleLinkedList<T>) -> bool {
    !lt(rhs, lhs)
}

pub fn gt<T: PartialOrd>(lhs: &SingleLinkedList<T>, rhs: &SingleLinkedList<T>) -> bool {
    lt(rhs, lhs)
}

pub fn ge<T: PartialOrd>(lhs: &SingleLinkedList<T>, rhs: &SingleLinkedList<T>) -> bool {
    !lt(lhs, rhs)
}

#[cfg(test)]
mod tests {
    use std::{
        collections::hash_map::DefaultHasher,
        hash::{Hash, Hasher},
    };

    use super::*;

    fn list<const N: usize>(values: [i32; N]) -> SingleLinkedList<i32> {
        SingleLinkedList::from(values)
    }

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn equality_is_length_sensitive() {
        assert_ne!(list([1, 2]), list([1, 2, 3]));
        assert_ne!(list([1, 2, 3]), list([1, 2]));
        assert_ne!(list([]), list([1]));
        assert!(ne(&list([1, 2]), &list([1, 2, 3])));
        assert!(!eq(&list([1, 2, 3]), &list([1, 2])));
    }

    #[test]
    fn equality_is_an_equivalence() {
        let a = list([4, 5, 6]);
        let b = a.clone();
        let c = list([4, 5, 6]);
        assert_eq!(a, a);
        assert_eq!(a, b);
        assert_eq!(b, a);
        assert_eq!(b, c);
        assert_eq!(a, c);
        assert!(eq(&a, &c));
        assert_ne!(a, list([4, 5, 7]));
    }

    #[test]
    fn lexicographic_order() {
        assert!(list([1, 2]) < list([1, 3]));
        assert!(list([1]) < list([1, 2]));
        assert!(list([]) < list([1]));
        assert!(list([2]) > list([1, 9, 9]));
        assert!(list([1, 2]) <= list([1, 2]));
        assert!(list([1, 2]) >= list([1, 2]));
        assert_eq!(list([3, 1]).cmp(&list([3, 1])), Ordering::Equal);
        assert_eq!(list([3]).cmp(&list([2, 5])), Ordering::Greater);
    }

    #[test]
    fn free_ordering_functions() {
        let small = list([1, 2]);
        let big = list([1, 3]);
        assert!(lt(&small, &big));
        assert!(le(&small, &big));
        assert!(le(&small, &small));
        assert!(gt(&big, &small));
        assert!(ge(&big, &small));
        assert!(ge(&big, &big));
        assert!(!lt(&big, &small));
        assert!(!gt(&small, &small));
    }

    #[test]
    fn free_swap() {
        let mut a = list([1, 2, 3]);
        let mut b = list([9]);
        swap(&mut a, &mut b);
        assert_eq!(a, list([9]));
        assert_eq!(b, list([1, 2, 3]));
        assert_eq!((a.len(), b.len()), (1, 3));
    }

    #[test]
    fn hash_follows_equality() {
        assert_eq!(hash_of(&list([1, 2, 3])), hash_of(&list([1, 2, 3])));
        assert_ne!(hash_of(&list([1, 2])), hash_of(&list([1, 2, 3])));
    }

    #[test]
    fn sort_lists() {
        let mut lists = vec![list([2]), list([1, 5]), list([]), list([1])];
        lists.sort();
        assert_eq!(lists, vec![list([]), list([1]), list([1, 5]), list([2])]);
    }
}
