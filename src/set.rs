//! An ordered set implemented with an AVL tree.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::iter::{FromIterator, FusedIterator, Peekable};

use crate::error::{Error, Result};
use crate::key::Identity;
use crate::tree::{self, AvlTree};

/// An ordered set implemented with an AVL tree.
///
/// Bulk set algebra walks both sets in order side by side, so combining sets of
/// sizes *n* and *m* costs *O*(*n* + *m*) rather than *m* lookups.
///
/// ```
/// use avl_collections::AvlTreeSet;
/// let mut set = AvlTreeSet::new();
/// set.insert(0);
/// set.insert(1);
/// set.insert(2);
/// assert_eq!(set.get(&1), Some(&1));
/// set.discard(&1);
/// assert!(set.get(&1).is_none());
/// ```
#[derive(Clone)]
pub struct AvlTreeSet<T> {
    tree: AvlTree<T, Identity>,
}

/// An iterator over the values of a set.
pub struct Iter<'a, T> {
    tree_iter: tree::Iter<'a, T>,
}

/// An owning iterator over the values of a set.
pub struct IntoIter<T> {
    tree_iter: tree::IntoIter<T>,
}

/// Walks two ordered sequences side by side.
///
/// Each step yields the smallest pending value of either side, paired with the
/// equal value of the other side if there is one.
struct MergeIter<L: Iterator, R: Iterator> {
    lhs: Peekable<L>,
    rhs: Peekable<R>,
}

/// A lazy iterator for the values in the union of two sets.
///
/// This `struct` is created by the [`union`] method on [`AvlTreeSet`].
///
/// [`union`]: AvlTreeSet::union
pub struct Union<'a, T> {
    merge: MergeIter<Iter<'a, T>, Iter<'a, T>>,
}

/// A lazy iterator for the values in the intersection of two sets.
///
/// This `struct` is created by the [`intersection`] method on [`AvlTreeSet`].
///
/// [`intersection`]: AvlTreeSet::intersection
pub struct Intersection<'a, T> {
    merge: MergeIter<Iter<'a, T>, Iter<'a, T>>,
}

/// A lazy iterator for the values of one set that are not in another.
///
/// This `struct` is created by the [`difference`] method on [`AvlTreeSet`].
///
/// [`difference`]: AvlTreeSet::difference
pub struct Difference<'a, T> {
    merge: MergeIter<Iter<'a, T>, Iter<'a, T>>,
}

/// A lazy iterator for the values in exactly one of two sets.
///
/// This `struct` is created by the [`symmetric_difference`] method on [`AvlTreeSet`].
///
/// [`symmetric_difference`]: AvlTreeSet::symmetric_difference
pub struct SymmetricDifference<'a, T> {
    merge: MergeIter<Iter<'a, T>, Iter<'a, T>>,
}

impl<T: Ord> AvlTreeSet<T> {
    /// Creates an empty set.
    /// No memory is allocated until the first item is inserted.
    pub fn new() -> Self {
        Self {
            tree: AvlTree::new(),
        }
    }

    /// Returns a reference to the value in the set that is equal to the given value.
    ///
    /// The value may be any borrowed form of the set's value type, but the ordering
    /// on the borrowed form *must* match the ordering on the value type.
    pub fn get<Q>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.find(value)
    }

    /// Returns true if the set contains a value.
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.contains_key(value)
    }

    /// Inserts a value into the set.
    /// Returns whether the value was newly inserted.
    pub fn insert(&mut self, value: T) -> bool {
        self.tree.insert(value)
    }

    /// Removes a value from the set and returns it,
    /// failing with [`Error::KeyNotFound`] if it is absent.
    pub fn remove<Q>(&mut self, value: &Q) -> Result<T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.remove(value).ok_or(Error::KeyNotFound)
    }

    /// Removes a value from the set if present.
    /// Returns whether the value was previously in the set.
    pub fn discard<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.remove(value).is_some()
    }

    /// Removes a value from the set.
    /// Returns the value if it was previously in the set.
    pub fn take<Q>(&mut self, value: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.remove(value)
    }

    /// Removes and returns the smallest value.
    /// Fails with [`Error::Empty`] if the set is empty.
    pub fn pop(&mut self) -> Result<T> {
        self.tree.pop_first().ok_or(Error::Empty)
    }

    /// Gets an iterator over the values of the union set,
    /// i.e., all values in `self` or `other`, without duplicates,
    /// in ascending order.
    pub fn union<'a>(&'a self, other: &'a Self) -> Union<'a, T> {
        Union {
            merge: MergeIter::new(self.iter(), other.iter()),
        }
    }

    /// Gets an iterator over the values of the intersection set,
    /// i.e., all values that are both in `self` and `other`,
    /// in ascending order.
    pub fn intersection<'a>(&'a self, other: &'a Self) -> Intersection<'a, T> {
        Intersection {
            merge: MergeIter::new(self.iter(), other.iter()),
        }
    }

    /// Gets an iterator over the values in `self` but not in `other`,
    /// in ascending order.
    pub fn difference<'a>(&'a self, other: &'a Self) -> Difference<'a, T> {
        Difference {
            merge: MergeIter::new(self.iter(), other.iter()),
        }
    }

    /// Gets an iterator over the values in `self` or in `other` but not in both,
    /// in ascending order.
    pub fn symmetric_difference<'a>(&'a self, other: &'a Self) -> SymmetricDifference<'a, T> {
        SymmetricDifference {
            merge: MergeIter::new(self.iter(), other.iter()),
        }
    }

    /// Returns `true` if `self` has no elements in common with `other`.
    /// This is equivalent to checking for an empty intersection.
    pub fn is_disjoint(&self, other: &Self) -> bool {
        self.intersection(other).next().is_none()
    }

    /// Returns `true` if every value of `self` is in `other`.
    pub fn is_subset(&self, other: &Self) -> bool {
        self.len() <= other.len() && self.difference(other).next().is_none()
    }

    /// Returns `true` if every value of `other` is in `self`.
    pub fn is_superset(&self, other: &Self) -> bool {
        other.is_subset(self)
    }

    /// Adds all values of `other` to `self`.
    pub fn union_update(&mut self, other: &Self)
    where
        T: Clone,
    {
        let lhs = self.tree.take_sorted_vec();
        let rhs = other.iter().cloned();
        self.rebuild(MergeIter::new(lhs.into_iter(), rhs).filter_map(|pair| match pair {
            (Some(value), _) | (None, Some(value)) => Some(value),
            (None, None) => None,
        }));
    }

    /// Moves all values from `other` into `self`, leaving `other` empty.
    pub fn append(&mut self, other: &mut Self) {
        let lhs = self.tree.take_sorted_vec();
        let rhs = other.tree.take_sorted_vec();
        self.rebuild(MergeIter::new(lhs.into_iter(), rhs.into_iter()).filter_map(|pair| match pair {
            (Some(value), _) | (None, Some(value)) => Some(value),
            (None, None) => None,
        }));
    }

    /// Keeps only the values of `self` that are also in `other`.
    pub fn intersection_update(&mut self, other: &Self) {
        let mut others = other.iter().peekable();
        let values = self.tree.take_sorted_vec();
        self.rebuild(values.into_iter().filter(|value| {
            while others.next_if(|other| *other < value).is_some() {}
            others.next_if_eq(&value).is_some()
        }));
    }

    /// Removes all values of `other` from `self`.
    pub fn difference_update(&mut self, other: &Self) {
        let mut others = other.iter().peekable();
        let values = self.tree.take_sorted_vec();
        self.rebuild(values.into_iter().filter(|value| {
            while others.next_if(|other| *other < value).is_some() {}
            others.next_if_eq(&value).is_none()
        }));
    }

    /// Keeps the values that are in exactly one of `self` and `other`.
    pub fn symmetric_difference_update(&mut self, other: &Self)
    where
        T: Clone,
    {
        let lhs = self.tree.take_sorted_vec();
        let rhs = other.iter().cloned();
        self.rebuild(MergeIter::new(lhs.into_iter(), rhs).filter_map(|pair| match pair {
            (Some(value), None) | (None, Some(value)) => Some(value),
            (Some(_), Some(_)) | (None, None) => None,
        }));
    }

    /// Asserts that the internal tree structure is consistent.
    #[cfg(any(test, feature = "consistency_check"))]
    pub fn check_consistency(&self) {
        self.tree.check_consistency()
    }

    // Replaces the contents with strictly increasing `values`.
    fn rebuild<I: Iterator<Item = T>>(&mut self, values: I) {
        self.tree = AvlTree::from_sorted_vec(values.collect(), Identity);
    }
}

impl<T> AvlTreeSet<T> {
    /// Returns true if the set contains no elements.
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Returns the number of elements in the set.
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Clears the set, deallocating all memory.
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Returns the smallest value.
    pub fn first(&self) -> Option<&T> {
        self.tree.first()
    }

    /// Returns the largest value.
    pub fn last(&self) -> Option<&T> {
        self.tree.last()
    }

    /// Gets an iterator over the values of the set in sorted order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            tree_iter: self.tree.iter(),
        }
    }
}

impl<T: Ord> Default for AvlTreeSet<T> {
    /// Creates an empty set.
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> PartialEq for AvlTreeSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for AvlTreeSet<T> {}

impl<T: Ord> FromIterator<T> for AvlTreeSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T: fmt::Debug> fmt::Debug for AvlTreeSet<T> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_set().entries(self.iter()).finish()
    }
}

impl<'a, T> IntoIterator for &'a AvlTreeSet<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for AvlTreeSet<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            tree_iter: self.tree.into_iter(),
        }
    }
}

impl<T: Ord> Extend<T> for AvlTreeSet<T> {
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        iter.into_iter().for_each(move |value| {
            self.insert(value);
        });
    }
}

impl<'a, T> Extend<&'a T> for AvlTreeSet<T>
where
    T: Ord + Copy,
    T: 'a,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = &'a T>,
    {
        self.extend(iter.into_iter().copied());
    }
}

// Auto derived clone seems to have an invalid type bound of T: Clone
impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self {
            tree_iter: self.tree_iter.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(&self.tree_iter, f)
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.tree_iter.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.tree_iter.size_hint()
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.tree_iter.next_back()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(&self.tree_iter, f)
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.tree_iter.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.tree_iter.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.tree_iter.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T, L, R> MergeIter<L, R>
where
    T: Ord,
    L: Iterator<Item = T>,
    R: Iterator<Item = T>,
{
    fn new(lhs: L, rhs: R) -> Self {
        Self {
            lhs: lhs.peekable(),
            rhs: rhs.peekable(),
        }
    }
}

impl<L, R> Clone for MergeIter<L, R>
where
    L: Iterator + Clone,
    R: Iterator + Clone,
    L::Item: Clone,
    R::Item: Clone,
{
    fn clone(&self) -> Self {
        Self {
            lhs: self.lhs.clone(),
            rhs: self.rhs.clone(),
        }
    }
}

impl<T, L, R> Iterator for MergeIter<L, R>
where
    T: Ord,
    L: Iterator<Item = T>,
    R: Iterator<Item = T>,
{
    type Item = (Option<T>, Option<T>);

    fn next(&mut self) -> Option<Self::Item> {
        let order = match (self.lhs.peek(), self.rhs.peek()) {
            (None, None) => return None,
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (Some(lhs), Some(rhs)) => lhs.cmp(rhs),
        };
        Some(match order {
            Ordering::Less => (self.lhs.next(), None),
            Ordering::Equal => (self.lhs.next(), self.rhs.next()),
            Ordering::Greater => (None, self.rhs.next()),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lhs_min, lhs_max) = self.lhs.size_hint();
        let (rhs_min, rhs_max) = self.rhs.size_hint();
        let max = match (lhs_max, rhs_max) {
            (Some(lhs), Some(rhs)) => lhs.checked_add(rhs),
            _ => None,
        };
        (lhs_min.max(rhs_min), max)
    }
}

impl<T, L, R> FusedIterator for MergeIter<L, R>
where
    T: Ord,
    L: FusedIterator<Item = T>,
    R: FusedIterator<Item = T>,
{
}

// Auto derived clone seems to have an invalid type bound of T: Clone
impl<'a, T> Clone for Union<'a, T> {
    fn clone(&self) -> Self {
        Self {
            merge: self.merge.clone(),
        }
    }
}

impl<'a, T: Ord + fmt::Debug> fmt::Debug for Union<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, T: Ord> Iterator for Union<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.merge.next().and_then(|pair| match pair {
            (Some(value), _) | (None, Some(value)) => Some(value),
            (None, None) => None,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.merge.size_hint()
    }
}

impl<T: Ord> FusedIterator for Union<'_, T> {}

// Auto derived clone seems to have an invalid type bound of T: Clone
impl<'a, T> Clone for Intersection<'a, T> {
    fn clone(&self) -> Self {
        Self {
            merge: self.merge.clone(),
        }
    }
}

impl<'a, T: Ord + fmt::Debug> fmt::Debug for Intersection<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, T: Ord> Iterator for Intersection<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.merge.next()? {
                (Some(value), Some(_)) => return Some(value),
                _ => continue,
            }
        }
    }
}

impl<T: Ord> FusedIterator for Intersection<'_, T> {}

// Auto derived clone seems to have an invalid type bound of T: Clone
impl<'a, T> Clone for Difference<'a, T> {
    fn clone(&self) -> Self {
        Self {
            merge: self.merge.clone(),
        }
    }
}

impl<'a, T: Ord + fmt::Debug> fmt::Debug for Difference<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, T: Ord> Iterator for Difference<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.merge.next()? {
                (Some(value), None) => return Some(value),
                _ => continue,
            }
        }
    }
}

impl<T: Ord> FusedIterator for Difference<'_, T> {}

// Auto derived clone seems to have an invalid type bound of T: Clone
impl<'a, T> Clone for SymmetricDifference<'a, T> {
    fn clone(&self) -> Self {
        Self {
            merge: self.merge.clone(),
        }
    }
}

impl<'a, T: Ord + fmt::Debug> fmt::Debug for SymmetricDifference<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, T: Ord> Iterator for SymmetricDifference<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.merge.next()? {
                (Some(value), None) | (None, Some(value)) => return Some(value),
                _ => continue,
            }
        }
    }
}

impl<T: Ord> FusedIterator for SymmetricDifference<'_, T> {}
