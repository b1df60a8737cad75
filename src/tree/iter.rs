use compare::Compare;
use std::iter::FusedIterator;
use crate::order::KeyOf;
use super::Tree;
use super::node::{Left, Link, Right};

/// An iterator over a tree's elements in ascending order.
pub struct Iter<'a, E: 'a, P: 'a, C: 'a> {
    tree: &'a Tree<E, P, C>,
    /// The next node to yield from the front.
    front: Link,
    /// The last position yielded from the back, starting at the tail.
    back: Link,
    len: usize,
}

impl<'a, E, P, C> Iter<'a, E, P, C> {
    pub(super) fn new(tree: &'a Tree<E, P, C>) -> Self {
        Iter { tree: tree, front: tree.head, back: Link::Tail, len: tree.len }
    }
}

impl<'a, E, P, C> Clone for Iter<'a, E, P, C> {
    fn clone(&self) -> Self {
        Iter { tree: self.tree, front: self.front, back: self.back, len: self.len }
    }
}

impl<'a, E, P, C> Iterator for Iter<'a, E, P, C> where P: KeyOf<E>, C: Compare<P::Key> {
    type Item = &'a E;

    fn next(&mut self) -> Option<&'a E> {
        if self.len == 0 { return None; }
        let index = self.front.index()?;
        self.front = self.tree.node_step::<Right>(index);
        self.len -= 1;
        Some(self.tree.elem(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) { (self.len, Some(self.len)) }
}

impl<'a, E, P, C> DoubleEndedIterator for Iter<'a, E, P, C>
    where P: KeyOf<E>, C: Compare<P::Key> {

    fn next_back(&mut self) -> Option<&'a E> {
        if self.len == 0 { return None; }
        self.back = self.tree.step::<Left>(self.back)?;
        let index = self.back.index()?;
        self.len -= 1;
        Some(self.tree.elem(index))
    }
}

impl<'a, E, P, C> ExactSizeIterator for Iter<'a, E, P, C> where P: KeyOf<E>, C: Compare<P::Key> {}

impl<'a, E, P, C> FusedIterator for Iter<'a, E, P, C> where P: KeyOf<E>, C: Compare<P::Key> {}

/// An iterator that consumes a tree, yielding its elements in ascending order.
pub struct IntoIter<E, P, C>(Tree<E, P, C>);

impl<E, P, C> IntoIter<E, P, C> {
    pub(super) fn new(tree: Tree<E, P, C>) -> Self { IntoIter(tree) }
}

impl<E, P, C> Iterator for IntoIter<E, P, C> {
    type Item = E;

    fn next(&mut self) -> Option<E> {
        let index = self.0.head.index()?;
        Some(self.0.unlink(index).elem)
    }

    fn size_hint(&self) -> (usize, Option<usize>) { (self.0.len, Some(self.0.len)) }
}

impl<E, P, C> DoubleEndedIterator for IntoIter<E, P, C> {
    fn next_back(&mut self) -> Option<E> {
        let index = self.0.tail.index()?;
        Some(self.0.unlink(index).elem)
    }
}

impl<E, P, C> ExactSizeIterator for IntoIter<E, P, C> {}

impl<E, P, C> FusedIterator for IntoIter<E, P, C> {}
