//! Ordering policies shared by the map and the set.
//!
//! An [`Order`] pairs a key projection with a comparator. The tree only ever compares
//! projected keys, so a map's values carry no ordering weight while a set's items are
//! compared directly.

use compare::Compare;
use std::cmp::Ordering;
use std::fmt::{self, Debug};
use std::marker::PhantomData;

/// Projects the ordering key out of a stored element.
pub trait KeyOf<E> {
    /// The projected key type.
    type Key;

    /// Returns a reference to the element's key.
    fn key_of(elem: &E) -> &Self::Key;
}

/// Projection for elements that are their own keys.
#[allow(unused)]
pub enum Identity {}

impl<T> KeyOf<T> for Identity {
    type Key = T;
    fn key_of(elem: &T) -> &T { elem }
}

/// Projection onto the first component of a key-value pair.
#[allow(unused)]
pub enum First {}

impl<K, V> KeyOf<(K, V)> for First {
    type Key = K;
    fn key_of(elem: &(K, V)) -> &K { &elem.0 }
}

/// A key projection `P` combined with a comparator `C` over the projected keys.
pub struct Order<P, C> {
    cmp: C,
    _proj: PhantomData<fn() -> P>,
}

impl<P, C> Order<P, C> {
    /// Creates an ordering policy from the given comparator.
    pub fn new(cmp: C) -> Self { Order { cmp: cmp, _proj: PhantomData } }

    /// Returns a reference to the underlying comparator.
    pub fn cmp(&self) -> &C { &self.cmp }

    /// Returns a reference to the element's projected key.
    pub fn key<'a, E>(&self, elem: &'a E) -> &'a P::Key where P: KeyOf<E> { P::key_of(elem) }

    /// Compares two elements by their projected keys.
    pub fn compare<E>(&self, l: &E, r: &E) -> Ordering
        where P: KeyOf<E>, C: Compare<P::Key> {

        self.cmp.compare(P::key_of(l), P::key_of(r))
    }

    /// Compares a probe key against an element's projected key.
    pub fn probe<Q: ?Sized, E>(&self, key: &Q, elem: &E) -> Ordering
        where P: KeyOf<E>, C: Compare<Q, P::Key> {

        self.cmp.compare(key, P::key_of(elem))
    }

    pub fn less_than<E>(&self, l: &E, r: &E) -> bool where P: KeyOf<E>, C: Compare<P::Key> {
        self.cmp.compares_lt(P::key_of(l), P::key_of(r))
    }

    pub fn greater_than<E>(&self, l: &E, r: &E) -> bool where P: KeyOf<E>, C: Compare<P::Key> {
        self.cmp.compares_gt(P::key_of(l), P::key_of(r))
    }

    pub fn less_or_equals<E>(&self, l: &E, r: &E) -> bool
        where P: KeyOf<E>, C: Compare<P::Key> {

        self.cmp.compares_le(P::key_of(l), P::key_of(r))
    }

    pub fn greater_or_equals<E>(&self, l: &E, r: &E) -> bool
        where P: KeyOf<E>, C: Compare<P::Key> {

        self.cmp.compares_ge(P::key_of(l), P::key_of(r))
    }

    pub fn equals<E>(&self, l: &E, r: &E) -> bool where P: KeyOf<E>, C: Compare<P::Key> {
        self.cmp.compares_eq(P::key_of(l), P::key_of(r))
    }

    pub fn not_equals<E>(&self, l: &E, r: &E) -> bool where P: KeyOf<E>, C: Compare<P::Key> {
        self.cmp.compares_ne(P::key_of(l), P::key_of(r))
    }
}

impl<P, C> Clone for Order<P, C> where C: Clone {
    fn clone(&self) -> Self { Order::new(self.cmp.clone()) }
}

impl<P, C> Debug for Order<P, C> where C: Debug {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("Order").field(&self.cmp).finish()
    }
}

impl<P, C> Default for Order<P, C> where C: Default {
    fn default() -> Self { Order::new(C::default()) }
}
