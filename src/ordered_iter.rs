use compare::Natural;
use ordered_iter::{OrderedMapIterator, OrderedSetIterator};
use crate::{map, set};

// Only naturally ordered containers agree with the `Ord` the joins rely on.

impl<K, V> OrderedMapIterator for map::IntoIter<K, V, Natural<K>> where K: Ord {
    type Key = K;
    type Val = V;
}

impl<'a, K, V> OrderedMapIterator for map::Iter<'a, K, V, Natural<K>> where K: Ord {
    type Key = &'a K;
    type Val = &'a V;
}

impl<T> OrderedSetIterator for set::IntoIter<T, Natural<T>> where T: Ord {}

impl<'a, T> OrderedSetIterator for set::Iter<'a, T, Natural<T>> where T: Ord {}
