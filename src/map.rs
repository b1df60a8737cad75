//! An ordered map based on an unbalanced binary search tree.

use compare::{Compare, Natural};
use std::cmp::Ordering::{self, Equal, Greater, Less};
use std::fmt::{self, Debug};
use std::hash::{self, Hash};
use std::iter::{self, FusedIterator};
use std::ops;
use crate::error::Error;
use crate::order::First;
use crate::tree::{self, Position, Tree};

/// A cursor over a map's entries.
pub type Cursor<'a, K, V, C> = tree::Cursor<'a, (K, V), First, C>;

/// An ordered map based on an unbalanced binary search tree.
///
/// Entries are kept in ascending key order according to the map's comparator, bounded by a
/// head position before the first entry and an end position after the last one.
///
/// The behavior of this map is unspecified if a key's ordering relative to any other key
/// changes while the key is in the map. This is normally only possible through `Cell`,
/// `RefCell`, or unsafe code.
#[derive(Clone)]
pub struct Map<K, V, C = Natural<K>> where C: Compare<K> {
    tree: Tree<(K, V), First, C>,
}

impl<K, V> Map<K, V> where K: Ord {
    /// Creates an empty map ordered according to the natural order of its keys.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = sentinel_tree::Map::new();
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// map.insert(3, "c");
    ///
    /// let mut it = map.iter();
    /// assert_eq!(it.next(), Some((&1, &"a")));
    /// assert_eq!(it.next(), Some((&2, &"b")));
    /// assert_eq!(it.next(), Some((&3, &"c")));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn new() -> Self { Map::with_cmp(compare::natural()) }
}

impl<K, V, C> Map<K, V, C> where C: Compare<K> {
    /// Creates an empty map ordered according to the given comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// use compare::{Compare, natural};
    ///
    /// let mut map = sentinel_tree::Map::with_cmp(natural().rev());
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// map.insert(3, "c");
    ///
    /// let mut it = map.iter();
    /// assert_eq!(it.next(), Some((&3, &"c")));
    /// assert_eq!(it.next(), Some((&2, &"b")));
    /// assert_eq!(it.next(), Some((&1, &"a")));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn with_cmp(cmp: C) -> Self { Map { tree: Tree::with_cmp(cmp) } }

    /// Checks if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = sentinel_tree::Map::new();
    /// assert!(map.is_empty());
    ///
    /// map.insert(2, "b");
    /// assert!(!map.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool { self.tree.is_empty() }

    /// Returns the number of entries in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = sentinel_tree::Map::new();
    /// assert_eq!(map.len(), 0);
    ///
    /// map.insert(2, "b");
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn len(&self) -> usize { self.tree.len() }

    /// Returns an advisory upper bound on the number of entries the map can hold.
    pub fn max_size(&self) -> usize { self.tree.max_size() }

    /// Returns a reference to the map's comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// use compare::{Compare, natural};
    ///
    /// let map: sentinel_tree::Map<i32, &str> = sentinel_tree::Map::new();
    /// assert!(map.cmp().compares_lt(&1, &2));
    ///
    /// let map: sentinel_tree::Map<i32, &str, _> = sentinel_tree::Map::with_cmp(natural().rev());
    /// assert!(map.cmp().compares_gt(&1, &2));
    /// ```
    pub fn cmp(&self) -> &C { self.tree.order().cmp() }

    /// Removes all entries from the map.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = sentinel_tree::Map::new();
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    ///
    /// map.clear();
    ///
    /// assert_eq!(map.len(), 0);
    /// assert!(map.begin() == map.end());
    /// ```
    pub fn clear(&mut self) { self.tree.clear(); }

    /// Returns a cursor at the entry with the smallest key, or at the end if the map is empty.
    pub fn begin(&self) -> Cursor<K, V, C> { self.tree.begin() }

    /// Returns a cursor one past the entry with the largest key.
    pub fn end(&self) -> Cursor<K, V, C> { self.tree.end() }

    /// Returns a cursor at the given position.
    pub fn cursor(&self, pos: Position) -> Result<Cursor<K, V, C>, Error> { self.tree.cursor(pos) }

    /// Inserts an entry into the map unless the key is already present.
    ///
    /// Returns the position of the entry holding the key and whether the entry was inserted.
    /// An existing entry keeps its value.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = sentinel_tree::Map::new();
    ///
    /// let (pos, inserted) = map.insert(1, "a");
    /// assert!(inserted);
    ///
    /// assert_eq!(map.insert(1, "b"), (pos, false));
    /// assert_eq!(map.get(&1), Some(&"a"));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> (Position, bool) { self.tree.insert((key, value)) }

    /// Inserts an entry into the map, overwriting the value if the key is already present.
    ///
    /// Returns the position of the entry and whether a new entry was created.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = sentinel_tree::Map::new();
    ///
    /// assert!(map.insert_or_assign(1, "a").1);
    /// assert!(!map.insert_or_assign(1, "b").1);
    /// assert_eq!(map.get(&1), Some(&"b"));
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn insert_or_assign(&mut self, key: K, value: V) -> (Position, bool) {
        match self.tree.insert_elem((key, value)) {
            Ok(index) => (self.tree.node_position(index), true),
            Err((index, (_, value))) => {
                self.tree.elem_mut(index).1 = value;
                (self.tree.node_position(index), false)
            }
        }
    }

    /// Returns a reference to the value associated with the given key, or an error carrying
    /// the key if the map does not contain it.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_tree::Error;
    ///
    /// let map: sentinel_tree::Map<_, _> = vec![(1, 4), (2, 5), (3, 6)].into_iter().collect();
    ///
    /// assert_eq!(map.at(&2), Ok(&5));
    /// assert_eq!(map.at(&5), Err(Error::OutOfRange(5)));
    /// ```
    pub fn at(&self, key: &K) -> Result<&V, Error<K>> where K: Clone {
        match self.tree.lookup(key) {
            Some(index) => Ok(&self.tree.elem(index).1),
            None => Err(Error::OutOfRange(key.clone())),
        }
    }

    /// Returns a mutable reference to the value associated with the given key, or an error
    /// carrying the key if the map does not contain it.
    pub fn at_mut(&mut self, key: &K) -> Result<&mut V, Error<K>> where K: Clone {
        match self.tree.lookup(key) {
            Some(index) => Ok(&mut self.tree.elem_mut(index).1),
            None => Err(Error::OutOfRange(key.clone())),
        }
    }

    /// Returns a mutable reference to the value associated with the given key, inserting the
    /// default value first if the map does not contain the key.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = sentinel_tree::Map::new();
    ///
    /// *map.get_or_insert_default("a") += 2;
    /// *map.get_or_insert_default("a") += 3;
    /// *map.get_or_insert_default("b") += 1;
    ///
    /// assert_eq!(map.get(&"a"), Some(&5));
    /// assert_eq!(map.get(&"b"), Some(&1));
    /// ```
    pub fn get_or_insert_default(&mut self, key: K) -> &mut V where V: Default {
        let index = match self.tree.lookup(&key) {
            Some(index) => index,
            None => match self.tree.insert_elem((key, V::default())) {
                Ok(index) | Err((index, _)) => index,
            },
        };

        &mut self.tree.elem_mut(index).1
    }

    /// Returns a reference to the value associated with the given key, or `None` if the map
    /// does not contain the key.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = sentinel_tree::Map::new();
    /// assert_eq!(map.get(&1), None);
    ///
    /// map.insert(1, "a");
    /// assert_eq!(map.get(&1), Some(&"a"));
    /// ```
    pub fn get<Q: ?Sized>(&self, key: &Q) -> Option<&V> where C: Compare<Q, K> {
        self.tree.lookup(key).map(|index| &self.tree.elem(index).1)
    }

    /// Returns a mutable reference to the value associated with the given key, or `None` if
    /// the map does not contain the key.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = sentinel_tree::Map::new();
    /// map.insert(1, "a");
    ///
    /// {
    ///     let value = map.get_mut(&1).unwrap();
    ///     *value = "b";
    /// }
    ///
    /// assert_eq!(map.get(&1), Some(&"b"));
    /// ```
    pub fn get_mut<Q: ?Sized>(&mut self, key: &Q) -> Option<&mut V> where C: Compare<Q, K> {
        match self.tree.lookup(key) {
            Some(index) => Some(&mut self.tree.elem_mut(index).1),
            None => None,
        }
    }

    /// Checks if the map contains the given key.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = sentinel_tree::Map::new();
    /// assert!(!map.contains_key(&1));
    ///
    /// map.insert(1, "a");
    /// assert!(map.contains_key(&1));
    /// ```
    pub fn contains_key<Q: ?Sized>(&self, key: &Q) -> bool where C: Compare<Q, K> {
        self.tree.contains(key)
    }

    /// Checks if the map contains the given key. Equivalent to `contains_key`.
    pub fn contains<Q: ?Sized>(&self, key: &Q) -> bool where C: Compare<Q, K> {
        self.tree.contains(key)
    }

    /// Returns a cursor at the entry with the given key, or at the end if the map does not
    /// contain the key.
    ///
    /// # Examples
    ///
    /// ```
    /// let map: sentinel_tree::Map<_, _> = vec![(1, "a"), (2, "b")].into_iter().collect();
    ///
    /// assert_eq!(map.find(&2).get(), Some(&(2, "b")));
    /// assert!(map.find(&3) == map.end());
    /// ```
    pub fn find<Q: ?Sized>(&self, key: &Q) -> Cursor<K, V, C> where C: Compare<Q, K> {
        self.tree.find(key)
    }

    /// Removes and returns the entry whose key is equal to the given key, returning `None` if
    /// the map does not contain the key.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = sentinel_tree::Map::new();
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    ///
    /// assert_eq!(map.remove(&1), Some((1, "a")));
    /// assert_eq!(map.len(), 1);
    /// assert_eq!(map.remove(&1), None);
    /// ```
    pub fn remove<Q: ?Sized>(&mut self, key: &Q) -> Option<(K, V)> where C: Compare<Q, K> {
        match self.tree.lookup(key) {
            Some(index) => Some(self.tree.remove_index(index)),
            None => None,
        }
    }

    /// Removes and returns the entry at the given position.
    ///
    /// Positions of the other entries remain valid.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_tree::{Error, Position};
    ///
    /// let mut map: sentinel_tree::Map<_, _> = vec![(1, "a"), (2, "b")].into_iter().collect();
    ///
    /// let first = map.begin().position();
    /// let second = map.find(&2).position();
    ///
    /// assert_eq!(map.erase(first), Ok((1, "a")));
    /// assert_eq!(map.erase(first), Err(Error::InvalidIterator));
    /// assert_eq!(map.erase(Position::end()), Err(Error::InvalidIterator));
    /// assert!(map.begin().position() == second);
    /// ```
    pub fn erase(&mut self, pos: Position) -> Result<(K, V), Error> { self.tree.erase(pos) }

    /// Returns a mutable reference to the value of the entry at the given position.
    pub fn value_mut(&mut self, pos: Position) -> Result<&mut V, Error> {
        let index = self.tree.resolve_node(pos)?;
        Ok(&mut self.tree.elem_mut(index).1)
    }

    /// Moves every entry of `other` whose key is not present in this map into this map.
    ///
    /// Entries whose keys are already present stay in `other`. No key or value is cloned.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map: sentinel_tree::Map<_, _> = vec![(1, "a"), (2, "b")].into_iter().collect();
    /// let mut other: sentinel_tree::Map<_, _> = vec![(2, "x"), (3, "y")].into_iter().collect();
    ///
    /// map.merge(&mut other);
    ///
    /// assert_eq!(map.iter().collect::<Vec<_>>(), [(&1, &"a"), (&2, &"b"), (&3, &"y")]);
    /// assert_eq!(other.iter().collect::<Vec<_>>(), [(&2, &"x")]);
    /// ```
    pub fn merge(&mut self, other: &mut Self) { self.tree.merge(&mut other.tree); }

    /// Exchanges the contents of two maps, including their comparators.
    pub fn swap(&mut self, other: &mut Self) { self.tree.swap(&mut other.tree); }

    /// Returns a reference to the entry with the smallest key, or `None` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = sentinel_tree::Map::new();
    /// assert_eq!(map.first(), None);
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// assert_eq!(map.first(), Some((&1, &"a")));
    /// ```
    pub fn first(&self) -> Option<(&K, &V)> { self.tree.first().map(|e| (&e.0, &e.1)) }

    /// Returns a reference to the entry with the largest key, or `None` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = sentinel_tree::Map::new();
    /// assert_eq!(map.last(), None);
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// assert_eq!(map.last(), Some((&2, &"b")));
    /// ```
    pub fn last(&self) -> Option<(&K, &V)> { self.tree.last().map(|e| (&e.0, &e.1)) }

    /// Returns an iterator over the map's entries in ascending key order.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = sentinel_tree::Map::new();
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// map.insert(3, "c");
    ///
    /// let mut it = map.iter();
    /// assert_eq!(it.next(), Some((&1, &"a")));
    /// assert_eq!(it.next_back(), Some((&3, &"c")));
    /// assert_eq!(it.next(), Some((&2, &"b")));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn iter(&self) -> Iter<K, V, C> { Iter(self.tree.iter()) }

    /// Returns an iterator over the map's keys in ascending order.
    pub fn keys(&self) -> Keys<K, V, C> { Keys(self.iter()) }

    /// Returns an iterator over the map's values in ascending key order.
    pub fn values(&self) -> Values<K, V, C> { Values(self.iter()) }
}

impl<K, V, C> Debug for Map<K, V, C> where K: Debug, V: Debug, C: Compare<K> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V, C> Default for Map<K, V, C> where C: Compare<K> + Default {
    fn default() -> Self { Map::with_cmp(Default::default()) }
}

impl<K, V, C> Extend<(K, V)> for Map<K, V, C> where C: Compare<K> {
    fn extend<I: IntoIterator<Item=(K, V)>>(&mut self, it: I) {
        for (k, v) in it { self.insert(k, v); }
    }
}

impl<K, V, C> iter::FromIterator<(K, V)> for Map<K, V, C>
    where C: Compare<K> + Default {

    fn from_iter<I: IntoIterator<Item=(K, V)>>(it: I) -> Self {
        let mut map: Self = Default::default();
        map.extend(it);
        map
    }
}

impl<K, V, C> Hash for Map<K, V, C> where K: Hash, V: Hash, C: Compare<K> {
    fn hash<H: hash::Hasher>(&self, h: &mut H) {
        for e in self.iter() { e.hash(h); }
    }
}

impl<'a, K, V, C, Q: ?Sized> ops::Index<&'a Q> for Map<K, V, C>
    where C: Compare<K> + Compare<Q, K> {

    type Output = V;
    fn index(&self, key: &Q) -> &V { self.get(key).expect("key not found") }
}

impl<'a, K, V, C> IntoIterator for &'a Map<K, V, C> where C: Compare<K> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V, C>;
    fn into_iter(self) -> Iter<'a, K, V, C> { self.iter() }
}

impl<K, V, C> IntoIterator for Map<K, V, C> where C: Compare<K> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V, C>;
    fn into_iter(self) -> IntoIter<K, V, C> { IntoIter(self.tree.into_iter()) }
}

impl<K, V, C> PartialEq for Map<K, V, C> where V: PartialEq, C: Compare<K> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(l, r)| {
            self.cmp().compares_eq(l.0, r.0) && l.1 == r.1
        })
    }
}

impl<K, V, C> Eq for Map<K, V, C> where V: Eq, C: Compare<K> {}

impl<K, V, C> PartialOrd for Map<K, V, C> where V: PartialOrd, C: Compare<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        let mut l = self.iter();
        let mut r = other.iter();

        loop {
            match (l.next(), r.next()) {
                (None, None) => return Some(Equal),
                (None, Some(_)) => return Some(Less),
                (Some(_), None) => return Some(Greater),
                (Some(l), Some(r)) => match self.cmp().compare(l.0, r.0) {
                    Equal => match l.1.partial_cmp(r.1) {
                        Some(Equal) => {}
                        non_eq => return non_eq,
                    },
                    non_eq => return Some(non_eq),
                },
            }
        }
    }
}

impl<K, V, C> Ord for Map<K, V, C> where V: Ord, C: Compare<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        let mut l = self.iter();
        let mut r = other.iter();

        loop {
            match (l.next(), r.next()) {
                (None, None) => return Equal,
                (None, Some(_)) => return Less,
                (Some(_), None) => return Greater,
                (Some(l), Some(r)) => match self.cmp().compare(l.0, r.0) {
                    Equal => match l.1.cmp(r.1) {
                        Equal => {}
                        non_eq => return non_eq,
                    },
                    non_eq => return non_eq,
                },
            }
        }
    }
}

/// An iterator that consumes the map.
///
/// The iterator yields the entries in ascending order according to the map's comparator.
///
/// # Examples
///
/// Acquire through the `IntoIterator` trait:
///
/// ```
/// let mut map = sentinel_tree::Map::new();
///
/// map.insert(2, "b");
/// map.insert(1, "a");
/// map.insert(3, "c");
///
/// for (key, value) in map {
///     println!("{:?}: {:?}", key, value);
/// }
/// ```
pub struct IntoIter<K, V, C>(tree::IntoIter<(K, V), First, C>);

impl<K, V, C> Iterator for IntoIter<K, V, C> {
    type Item = (K, V);
    fn next(&mut self) -> Option<(K, V)> { self.0.next() }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<K, V, C> DoubleEndedIterator for IntoIter<K, V, C> {
    fn next_back(&mut self) -> Option<(K, V)> { self.0.next_back() }
}

impl<K, V, C> ExactSizeIterator for IntoIter<K, V, C> {}

impl<K, V, C> FusedIterator for IntoIter<K, V, C> {}

/// An iterator over the map's entries.
///
/// The iterator yields the entries in ascending order according to the map's comparator.
///
/// # Examples
///
/// Acquire through [`Map::iter`](struct.Map.html#method.iter) or the `IntoIterator` trait:
///
/// ```
/// let mut map = sentinel_tree::Map::new();
///
/// map.insert(2, "b");
/// map.insert(1, "a");
/// map.insert(3, "c");
///
/// for (key, value) in &map {
///     println!("{:?}: {:?}", key, value);
/// }
/// ```
pub struct Iter<'a, K: 'a, V: 'a, C: 'a>(tree::Iter<'a, (K, V), First, C>);

impl<'a, K, V, C> Clone for Iter<'a, K, V, C> {
    fn clone(&self) -> Iter<'a, K, V, C> { Iter(self.0.clone()) }
}

impl<'a, K, V, C> Iterator for Iter<'a, K, V, C> where C: Compare<K> {
    type Item = (&'a K, &'a V);
    fn next(&mut self) -> Option<(&'a K, &'a V)> { self.0.next().map(|e| (&e.0, &e.1)) }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, K, V, C> DoubleEndedIterator for Iter<'a, K, V, C> where C: Compare<K> {
    fn next_back(&mut self) -> Option<(&'a K, &'a V)> { self.0.next_back().map(|e| (&e.0, &e.1)) }
}

impl<'a, K, V, C> ExactSizeIterator for Iter<'a, K, V, C> where C: Compare<K> {}

impl<'a, K, V, C> FusedIterator for Iter<'a, K, V, C> where C: Compare<K> {}

/// An iterator over the map's keys in ascending order.
///
/// Acquire through [`Map::keys`](struct.Map.html#method.keys).
pub struct Keys<'a, K: 'a, V: 'a, C: 'a>(Iter<'a, K, V, C>);

impl<'a, K, V, C> Clone for Keys<'a, K, V, C> {
    fn clone(&self) -> Keys<'a, K, V, C> { Keys(self.0.clone()) }
}

impl<'a, K, V, C> Iterator for Keys<'a, K, V, C> where C: Compare<K> {
    type Item = &'a K;
    fn next(&mut self) -> Option<&'a K> { self.0.next().map(|e| e.0) }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, K, V, C> DoubleEndedIterator for Keys<'a, K, V, C> where C: Compare<K> {
    fn next_back(&mut self) -> Option<&'a K> { self.0.next_back().map(|e| e.0) }
}

impl<'a, K, V, C> ExactSizeIterator for Keys<'a, K, V, C> where C: Compare<K> {}

/// An iterator over the map's values in ascending key order.
///
/// Acquire through [`Map::values`](struct.Map.html#method.values).
pub struct Values<'a, K: 'a, V: 'a, C: 'a>(Iter<'a, K, V, C>);

impl<'a, K, V, C> Clone for Values<'a, K, V, C> {
    fn clone(&self) -> Values<'a, K, V, C> { Values(self.0.clone()) }
}

impl<'a, K, V, C> Iterator for Values<'a, K, V, C> where C: Compare<K> {
    type Item = &'a V;
    fn next(&mut self) -> Option<&'a V> { self.0.next().map(|e| e.1) }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, K, V, C> DoubleEndedIterator for Values<'a, K, V, C> where C: Compare<K> {
    fn next_back(&mut self) -> Option<&'a V> { self.0.next_back().map(|e| e.1) }
}

impl<'a, K, V, C> ExactSizeIterator for Values<'a, K, V, C> where C: Compare<K> {}

#[cfg(test)]
mod test {
    use super::Map;

    #[test]
    fn test_insert_keeps_existing_value() {
        let mut map = Map::new();
        let (pos, inserted) = map.insert(3, 'a');
        assert!(inserted);
        assert_eq!(map.insert(3, 'b'), (pos, false));
        assert_eq!(map[&3], 'a');
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_value_mut_through_position() {
        let mut map = Map::new();
        let pos = map.insert("k", 1).0;
        *map.value_mut(pos).unwrap() += 41;
        assert_eq!(map.get(&"k"), Some(&42));

        map.remove(&"k");
        assert!(map.value_mut(pos).is_err());
    }

    #[test]
    #[should_panic(expected = "key not found")]
    fn test_index_missing() {
        let map: Map<i32, i32> = Map::new();
        let _value = map[&1];
    }

    #[test]
    fn test_cursor_walk() {
        let map: Map<_, _> = (0..5).map(|k| (k, k * k)).collect();
        let mut cursor = map.find(&2);
        cursor.advance(2).unwrap();
        assert_eq!(cursor.get(), Some(&(4, 16)));
        cursor.retreat(4).unwrap();
        assert!(cursor == map.begin());
        assert!(cursor.advance(6).is_err());
        assert!(cursor.is_end());
    }

    #[test]
    fn test_at_mut() {
        let mut map: Map<_, _> = vec![(1, 4), (2, 5), (3, 6)].into_iter().collect();
        *map.at_mut(&2).unwrap() = 50;
        assert_eq!(map.at(&2), Ok(&50));
        assert!(map.at_mut(&9).is_err());
    }

    #[test]
    fn test_keys_values() {
        let map: Map<_, _> = vec![(2, 'b'), (1, 'a')].into_iter().collect();
        assert_eq!(map.keys().cloned().collect::<Vec<_>>(), [1, 2]);
        assert_eq!(map.values().rev().cloned().collect::<Vec<_>>(), ['b', 'a']);
        assert_eq!(format!("{:?}", map), "{1: 'a', 2: 'b'}");
    }
}
