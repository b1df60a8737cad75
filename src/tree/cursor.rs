use compare::Compare;
use std::fmt::{self, Debug};
use std::ptr;
use crate::error::Error;
use crate::order::KeyOf;
use super::Tree;
use super::node::{Dir, Left, Link, Right};

/// A position in a tree that does not borrow it.
///
/// A position denotes the head sentinel, the tail sentinel, or one particular node. A node
/// position keeps denoting the same element until that element is removed from the tree;
/// erasing other elements leaves it valid. Once the element is gone, every operation given
/// the position fails with [`Error::InvalidIterator`](enum.Error.html).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position(Place);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum Place {
    Head,
    Tail,
    Node { index: usize, stamp: u64 },
}

impl Position {
    /// Returns the position of the tail sentinel, one past the maximum element.
    pub fn end() -> Position { Position(Place::Tail) }

    /// Returns the position of the head sentinel, one before the minimum element.
    pub fn head() -> Position { Position(Place::Head) }

    /// Checks if this is the position of the tail sentinel.
    pub fn is_end(&self) -> bool { self.0 == Place::Tail }

    /// Checks if this is the position of the head sentinel.
    pub fn is_head(&self) -> bool { self.0 == Place::Head }
}

impl<E, P, C> Tree<E, P, C> {
    pub(super) fn position(&self, link: Link) -> Position {
        Position(match link {
            Link::Head => Place::Head,
            Link::Node(index) => Place::Node { index: index, stamp: self.nodes[index].stamp },
            _ => Place::Tail,
        })
    }

    pub(super) fn resolve(&self, pos: Position) -> Result<Link, Error> {
        match pos.0 {
            Place::Head => Ok(Link::Head),
            Place::Tail => Ok(Link::Tail),
            Place::Node { index, stamp } => match self.nodes.get(index) {
                Some(node) if node.stamp == stamp => Ok(Link::Node(index)),
                _ => Err(Error::InvalidIterator),
            },
        }
    }
}

/// A bidirectional cursor over a tree's ordered sequence.
///
/// A cursor rests on an element or on one of the two sentinels. Stepping forward from the
/// maximum element reaches the tail; stepping backward from the minimum reaches the head.
/// Stepping beyond either sentinel is an error and leaves the cursor where it was.
pub struct Cursor<'a, E: 'a, P: 'a, C: 'a> {
    tree: &'a Tree<E, P, C>,
    link: Link,
}

impl<'a, E, P, C> Clone for Cursor<'a, E, P, C> {
    fn clone(&self) -> Self { *self }
}

impl<'a, E, P, C> Copy for Cursor<'a, E, P, C> {}

impl<'a, E, P, C> Cursor<'a, E, P, C> {
    pub(super) fn new(tree: &'a Tree<E, P, C>, link: Link) -> Self {
        Cursor { tree: tree, link: link }
    }

    /// Returns a position that can be used to return to this cursor's place later.
    pub fn position(&self) -> Position { self.tree.position(self.link) }

    /// Returns a reference to the element under the cursor, or `None` at a sentinel.
    pub fn get(&self) -> Option<&'a E> { self.link.index().map(|index| self.tree.elem(index)) }

    /// Checks if the cursor rests on the tail sentinel.
    pub fn is_end(&self) -> bool { self.link == Link::Tail }

    /// Checks if the cursor rests on the head sentinel.
    pub fn is_head(&self) -> bool { self.link == Link::Head }
}

impl<'a, E, P, C> Cursor<'a, E, P, C> where P: KeyOf<E>, C: Compare<P::Key> {
    /// Moves the cursor to the next position in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// let set: sentinel_tree::Set<_> = vec![1, 2].into_iter().collect();
    ///
    /// let mut cursor = set.begin();
    /// assert_eq!(cursor.get(), Some(&1));
    /// assert!(cursor.move_next().is_ok());
    /// assert_eq!(cursor.get(), Some(&2));
    /// assert!(cursor.move_next().is_ok());
    /// assert!(cursor.is_end());
    /// assert!(cursor.move_next().is_err());
    /// assert!(cursor.is_end());
    /// ```
    pub fn move_next(&mut self) -> Result<(), Error> { self.move_to::<Right>() }

    /// Moves the cursor to the previous position in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// let set: sentinel_tree::Set<_> = vec![1, 2].into_iter().collect();
    ///
    /// let mut cursor = set.end();
    /// assert!(cursor.move_prev().is_ok());
    /// assert_eq!(cursor.get(), Some(&2));
    /// ```
    pub fn move_prev(&mut self) -> Result<(), Error> { self.move_to::<Left>() }

    /// Moves the cursor `n` positions forward, stopping at the first failing step.
    pub fn advance(&mut self, n: usize) -> Result<(), Error> {
        (0..n).try_for_each(|_| self.move_next())
    }

    /// Moves the cursor `n` positions backward, stopping at the first failing step.
    pub fn retreat(&mut self, n: usize) -> Result<(), Error> {
        (0..n).try_for_each(|_| self.move_prev())
    }

    fn move_to<D: Dir>(&mut self) -> Result<(), Error> {
        self.link = self.tree.step::<D>(self.link).ok_or(Error::InvalidIterator)?;
        Ok(())
    }
}

impl<'a, E, P, C> PartialEq for Cursor<'a, E, P, C> {
    fn eq(&self, other: &Self) -> bool { ptr::eq(self.tree, other.tree) && self.link == other.link }
}

impl<'a, E, P, C> Eq for Cursor<'a, E, P, C> {}

impl<'a, E, P, C> Debug for Cursor<'a, E, P, C> where E: Debug {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.get() {
            Some(elem) => f.debug_tuple("Cursor").field(elem).finish(),
            None if self.is_head() => f.write_str("Cursor(head)"),
            None => f.write_str("Cursor(end)"),
        }
    }
}
