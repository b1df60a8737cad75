//! An ordered set based on an unbalanced binary search tree.

use compare::{Compare, Natural};
use std::cmp::Ordering::{self, Equal, Greater, Less};
use std::fmt::{self, Debug};
use std::hash::{self, Hash};
use std::iter::{self, FusedIterator};
use crate::error::Error;
use crate::order::Identity;
use crate::tree::{self, Position, Tree};

/// A cursor over a set's items.
pub type Cursor<'a, T, C> = tree::Cursor<'a, T, Identity, C>;

/// An ordered set based on an unbalanced binary search tree.
///
/// The behavior of this set is unspecified if an item's ordering relative to any other item
/// changes while the item is in the set. This is normally only possible through `Cell`,
/// `RefCell`, or unsafe code.
#[derive(Clone)]
pub struct Set<T, C = Natural<T>> where C: Compare<T> {
    tree: Tree<T, Identity, C>,
}

impl<T> Set<T> where T: Ord {
    /// Creates an empty set ordered according to the natural order of its items.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = sentinel_tree::Set::new();
    ///
    /// set.insert(2);
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// let mut it = set.iter();
    /// assert_eq!(it.next(), Some(&1));
    /// assert_eq!(it.next(), Some(&2));
    /// assert_eq!(it.next(), Some(&3));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn new() -> Self { Set::with_cmp(compare::natural()) }
}

impl<T, C> Set<T, C> where C: Compare<T> {
    /// Creates an empty set ordered according to the given comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// use compare::{Compare, natural};
    ///
    /// let mut set = sentinel_tree::Set::with_cmp(natural().rev());
    ///
    /// set.insert(2);
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// let mut it = set.iter();
    /// assert_eq!(it.next(), Some(&3));
    /// assert_eq!(it.next(), Some(&2));
    /// assert_eq!(it.next(), Some(&1));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn with_cmp(cmp: C) -> Self { Set { tree: Tree::with_cmp(cmp) } }

    /// Checks if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = sentinel_tree::Set::new();
    /// assert!(set.is_empty());
    ///
    /// set.insert(2);
    /// assert!(!set.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool { self.tree.is_empty() }

    /// Returns the number of items in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = sentinel_tree::Set::new();
    /// assert_eq!(set.len(), 0);
    ///
    /// set.insert(2);
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn len(&self) -> usize { self.tree.len() }

    /// Returns an advisory upper bound on the number of items the set can hold.
    pub fn max_size(&self) -> usize { self.tree.max_size() }

    /// Returns a reference to the set's comparator.
    pub fn cmp(&self) -> &C { self.tree.order().cmp() }

    /// Removes all items from the set.
    pub fn clear(&mut self) { self.tree.clear(); }

    /// Returns a cursor at the smallest item, or at the end if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = sentinel_tree::Set::new();
    /// assert!(set.begin() == set.end());
    ///
    /// set.insert(1);
    /// assert_eq!(set.begin().get(), Some(&1));
    /// ```
    pub fn begin(&self) -> Cursor<T, C> { self.tree.begin() }

    /// Returns a cursor one past the largest item.
    pub fn end(&self) -> Cursor<T, C> { self.tree.end() }

    /// Returns a cursor at the given position.
    pub fn cursor(&self, pos: Position) -> Result<Cursor<T, C>, Error> { self.tree.cursor(pos) }

    /// Inserts an item into the set unless an equal item is already present.
    ///
    /// Returns the position of the item and whether it was inserted.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = sentinel_tree::Set::new();
    ///
    /// let (pos, inserted) = set.insert(1);
    /// assert!(inserted);
    /// assert_eq!(set.insert(1), (pos, false));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert(&mut self, item: T) -> (Position, bool) { self.tree.insert(item) }

    /// Removes the item equal to the given one, returning whether it was present.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = sentinel_tree::Set::new();
    ///
    /// set.insert(2);
    /// set.insert(1);
    ///
    /// assert!(set.remove(&1));
    /// assert!(!set.remove(&1));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn remove<Q: ?Sized>(&mut self, item: &Q) -> bool where C: Compare<Q, T> {
        match self.tree.lookup(item) {
            Some(index) => { self.tree.remove_index(index); true }
            None => false,
        }
    }

    /// Removes and returns the item at the given position.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set: sentinel_tree::Set<_> = vec![1, 2, 3].into_iter().collect();
    ///
    /// let pos = set.begin().position();
    /// assert_eq!(set.erase(pos), Ok(1));
    /// assert_eq!(set.begin().get(), Some(&2));
    /// assert_eq!(set.len(), 2);
    /// ```
    pub fn erase(&mut self, pos: Position) -> Result<T, Error> { self.tree.erase(pos) }

    /// Returns a cursor at the item equal to the given one, or at the end if there is none.
    ///
    /// # Examples
    ///
    /// ```
    /// let set: sentinel_tree::Set<_> = vec![1, 2, 3].into_iter().collect();
    ///
    /// assert_eq!(set.find(&2).get(), Some(&2));
    /// assert!(set.find(&4).is_end());
    /// ```
    pub fn find<Q: ?Sized>(&self, item: &Q) -> Cursor<T, C> where C: Compare<Q, T> {
        self.tree.find(item)
    }

    /// Checks if the set contains the given item.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set = sentinel_tree::Set::new();
    /// assert!(!set.contains(&1));
    ///
    /// set.insert(1);
    /// assert!(set.contains(&1));
    /// ```
    pub fn contains<Q: ?Sized>(&self, item: &Q) -> bool where C: Compare<Q, T> {
        self.tree.contains(item)
    }

    /// Moves every item of `other` that is not present in this set into this set.
    ///
    /// Items already present stay in `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut set: sentinel_tree::Set<_> = vec![1, 2, 3].into_iter().collect();
    /// let mut other: sentinel_tree::Set<_> = vec![2, 3, 4, 7].into_iter().collect();
    ///
    /// set.merge(&mut other);
    ///
    /// assert_eq!(set.iter().cloned().collect::<Vec<_>>(), [1, 2, 3, 4, 7]);
    /// assert_eq!(other.iter().cloned().collect::<Vec<_>>(), [2, 3]);
    /// ```
    pub fn merge(&mut self, other: &mut Self) { self.tree.merge(&mut other.tree); }

    /// Exchanges the contents of two sets, including their comparators.
    pub fn swap(&mut self, other: &mut Self) { self.tree.swap(&mut other.tree); }

    /// Returns a reference to the smallest item, or `None` if the set is empty.
    pub fn first(&self) -> Option<&T> { self.tree.first() }

    /// Returns a reference to the largest item, or `None` if the set is empty.
    pub fn last(&self) -> Option<&T> { self.tree.last() }

    /// Returns an iterator over the set's items in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// let set: sentinel_tree::Set<_> = vec![3, 1, 2].into_iter().collect();
    ///
    /// let mut it = set.iter();
    /// assert_eq!(it.next(), Some(&1));
    /// assert_eq!(it.next_back(), Some(&3));
    /// assert_eq!(it.next(), Some(&2));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn iter(&self) -> Iter<T, C> { Iter(self.tree.iter()) }
}

impl<T, C> Debug for Set<T, C> where T: Debug, C: Compare<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T, C> Default for Set<T, C> where C: Compare<T> + Default {
    fn default() -> Self { Set::with_cmp(Default::default()) }
}

impl<T, C> Extend<T> for Set<T, C> where C: Compare<T> {
    fn extend<I: IntoIterator<Item=T>>(&mut self, it: I) {
        for item in it { self.insert(item); }
    }
}

impl<T, C> iter::FromIterator<T> for Set<T, C> where C: Compare<T> + Default {
    fn from_iter<I: IntoIterator<Item=T>>(it: I) -> Self {
        let mut set: Self = Default::default();
        set.extend(it);
        set
    }
}

impl<T, C> Hash for Set<T, C> where T: Hash, C: Compare<T> {
    fn hash<H: hash::Hasher>(&self, h: &mut H) {
        for item in self.iter() { item.hash(h); }
    }
}

impl<'a, T, C> IntoIterator for &'a Set<T, C> where C: Compare<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, C>;
    fn into_iter(self) -> Iter<'a, T, C> { self.iter() }
}

impl<T, C> IntoIterator for Set<T, C> where C: Compare<T> {
    type Item = T;
    type IntoIter = IntoIter<T, C>;
    fn into_iter(self) -> IntoIter<T, C> { IntoIter(self.tree.into_iter()) }
}

impl<T, C> PartialEq for Set<T, C> where C: Compare<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() &&
            self.iter().zip(other.iter()).all(|(l, r)| self.cmp().compares_eq(l, r))
    }
}

impl<T, C> Eq for Set<T, C> where C: Compare<T> {}

impl<T, C> PartialOrd for Set<T, C> where C: Compare<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> { Some(Ord::cmp(self, other)) }
}

impl<T, C> Ord for Set<T, C> where C: Compare<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        let mut l = self.iter();
        let mut r = other.iter();

        loop {
            match (l.next(), r.next()) {
                (None, None) => return Equal,
                (None, Some(_)) => return Less,
                (Some(_), None) => return Greater,
                (Some(l), Some(r)) => match self.cmp().compare(l, r) {
                    Equal => {}
                    non_eq => return non_eq,
                },
            }
        }
    }
}

/// An iterator that consumes the set.
///
/// The iterator yields the items in ascending order according to the set's comparator.
///
/// # Examples
///
/// Acquire through the `IntoIterator` trait:
///
/// ```
/// let mut set = sentinel_tree::Set::new();
///
/// set.insert(2);
/// set.insert(1);
/// set.insert(3);
///
/// for item in set {
///     println!("{:?}", item);
/// }
/// ```
pub struct IntoIter<T, C>(tree::IntoIter<T, Identity, C>);

impl<T, C> Iterator for IntoIter<T, C> {
    type Item = T;
    fn next(&mut self) -> Option<T> { self.0.next() }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<T, C> DoubleEndedIterator for IntoIter<T, C> {
    fn next_back(&mut self) -> Option<T> { self.0.next_back() }
}

impl<T, C> ExactSizeIterator for IntoIter<T, C> {}

impl<T, C> FusedIterator for IntoIter<T, C> {}

/// An iterator over the set's items.
///
/// The iterator yields the items in ascending order according to the set's comparator.
///
/// # Examples
///
/// Acquire through [`Set::iter`](struct.Set.html#method.iter) or the `IntoIterator` trait:
///
/// ```
/// let mut set = sentinel_tree::Set::new();
///
/// set.insert(2);
/// set.insert(1);
/// set.insert(3);
///
/// for item in &set {
///     println!("{:?}", item);
/// }
/// ```
pub struct Iter<'a, T: 'a, C: 'a>(tree::Iter<'a, T, Identity, C>);

impl<'a, T, C> Clone for Iter<'a, T, C> {
    fn clone(&self) -> Iter<'a, T, C> { Iter(self.0.clone()) }
}

impl<'a, T, C> Iterator for Iter<'a, T, C> where C: Compare<T> {
    type Item = &'a T;
    fn next(&mut self) -> Option<&'a T> { self.0.next() }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, T, C> DoubleEndedIterator for Iter<'a, T, C> where C: Compare<T> {
    fn next_back(&mut self) -> Option<&'a T> { self.0.next_back() }
}

impl<'a, T, C> ExactSizeIterator for Iter<'a, T, C> where C: Compare<T> {}

impl<'a, T, C> FusedIterator for Iter<'a, T, C> where C: Compare<T> {}
