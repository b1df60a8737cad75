//! The binary search tree shared by [`Map`](../map/struct.Map.html) and
//! [`Set`](../set/struct.Set.html).
//!
//! Nodes live in an arena and point at each other by index. Each node knows its parent, so a
//! cursor can walk the tree in either direction without an auxiliary stack. The ordered
//! sequence is bounded by two sentinels: the head precedes the minimum and the tail follows
//! the maximum. The minimum's left link is always the head and the maximum's right link is
//! always the tail; when the tree is empty the sentinels are each other's parent.
//!
//! The tree is never rebalanced.

mod cursor;
mod iter;
mod node;

#[cfg(test)]
mod test;

use compare::Compare;
use log::{debug, trace};
use slab::Slab;
use std::cmp::Ordering::{self, Equal, Greater, Less};
use std::fmt::{self, Debug};
use std::mem;
use crate::error::Error;
use crate::order::{KeyOf, Order};
use self::node::{Dir, Left, Link, Node, Right};

pub use self::cursor::{Cursor, Position};
pub use self::iter::{IntoIter, Iter};

/// The outcome of a descent from the root.
enum Search {
    Empty,
    Found(usize),
    /// The key is absent. `boundary` is the null link or sentinel the descent ran into below
    /// `parent`, on the left side if `left` is `true`.
    Vacant { parent: usize, left: bool, boundary: Link },
}

/// An unbalanced binary search tree bounded by head and tail sentinels.
///
/// `E` is the stored element, `P` projects the ordering key out of an element and `C`
/// compares keys. Every element's key is unique.
pub struct Tree<E, P, C> {
    nodes: Slab<Node<E>>,
    root: Link,
    /// The head sentinel's parent.
    head: Link,
    /// The tail sentinel's parent.
    tail: Link,
    len: usize,
    order: Order<P, C>,
}

/// A node that has been unlinked from a tree and can be attached to another one.
///
/// Acquire through [`Tree::detach`](struct.Tree.html#method.detach).
pub struct Detached<E>(Node<E>);

impl<E> Detached<E> {
    /// Returns a reference to the node's element.
    pub fn get(&self) -> &E { &self.0.elem }

    /// Consumes the node, returning its element.
    pub fn into_inner(self) -> E { self.0.elem }
}

impl<E> Debug for Detached<E> where E: Debug {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("Detached").field(&self.0.elem).finish()
    }
}

impl<E, P, C> Tree<E, P, C> {
    /// Creates an empty tree ordered according to the given comparator.
    pub fn with_cmp(cmp: C) -> Self {
        Tree {
            nodes: Slab::new(),
            root: Link::Null,
            head: Link::Tail,
            tail: Link::Head,
            len: 0,
            order: Order::new(cmp),
        }
    }

    /// Checks if the tree is empty.
    pub fn is_empty(&self) -> bool { self.root == Link::Null }

    /// Returns the number of elements in the tree.
    pub fn len(&self) -> usize { self.len }

    /// Returns an advisory upper bound on the number of elements the tree can hold.
    pub fn max_size(&self) -> usize { usize::MAX / (2 * mem::size_of::<Node<E>>()) }

    /// Returns a reference to the tree's ordering policy.
    pub fn order(&self) -> &Order<P, C> { &self.order }

    /// Returns a cursor at the tree's minimum element, or at the end if the tree is empty.
    pub fn begin(&self) -> Cursor<E, P, C> { Cursor::new(self, self.head) }

    /// Returns a cursor at the tail sentinel.
    pub fn end(&self) -> Cursor<E, P, C> { Cursor::new(self, Link::Tail) }

    /// Returns a cursor at the given position.
    pub fn cursor(&self, pos: Position) -> Result<Cursor<E, P, C>, Error> {
        self.resolve(pos).map(|link| Cursor::new(self, link))
    }

    /// Returns a reference to the element at the given position.
    pub fn get(&self, pos: Position) -> Result<&E, Error> {
        self.resolve_node(pos).map(|index| &self.nodes[index].elem)
    }

    /// Returns a reference to the minimum element, or `None` if the tree is empty.
    pub fn first(&self) -> Option<&E> { self.head.index().map(|index| &self.nodes[index].elem) }

    /// Returns a reference to the maximum element, or `None` if the tree is empty.
    pub fn last(&self) -> Option<&E> { self.tail.index().map(|index| &self.nodes[index].elem) }

    /// Removes all elements from the tree.
    pub fn clear(&mut self) {
        trace!("clear: dropping {} nodes", self.len);
        self.nodes.clear();
        self.root = Link::Null;
        self.head = Link::Tail;
        self.tail = Link::Head;
        self.len = 0;
    }

    /// Exchanges the contents of two trees without touching their elements.
    pub fn swap(&mut self, other: &mut Self) {
        trace!("swap: {} <-> {} nodes", self.len, other.len);
        mem::swap(self, other);
    }

    /// Removes the element at the given position and returns it.
    ///
    /// Positions of the other elements remain valid.
    pub fn erase(&mut self, pos: Position) -> Result<E, Error> {
        let index = self.resolve_node(pos)?;
        Ok(self.unlink(index).elem)
    }

    /// Unlinks the node at the given position so that it can be attached to another tree.
    pub fn detach(&mut self, pos: Position) -> Result<Detached<E>, Error> {
        let index = self.resolve_node(pos)?;
        let mut node = self.unlink(index);
        node.reset();
        Ok(Detached(node))
    }

    pub(crate) fn elem(&self, index: usize) -> &E { &self.nodes[index].elem }

    pub(crate) fn elem_mut(&mut self, index: usize) -> &mut E { &mut self.nodes[index].elem }

    pub(crate) fn remove_index(&mut self, index: usize) -> E { self.unlink(index).elem }

    pub(crate) fn node_position(&self, index: usize) -> Position {
        self.position(Link::Node(index))
    }

    pub(crate) fn resolve_node(&self, pos: Position) -> Result<usize, Error> {
        self.resolve(pos)?.index().ok_or(Error::InvalidIterator)
    }

    fn search<F>(&self, mut probe: F) -> Search where F: FnMut(&E) -> Ordering {
        let mut current = match self.root {
            Link::Node(index) => index,
            _ => return Search::Empty,
        };

        loop {
            let node = &self.nodes[current];

            let (next, left) = match probe(&node.elem) {
                Equal => return Search::Found(current),
                Less => (node.left, true),
                Greater => (node.right, false),
            };

            match next {
                Link::Node(child) => current = child,
                boundary => return Search::Vacant { parent: current, left: left, boundary: boundary },
            }
        }
    }

    fn sentinel_parent(&self, sentinel: Link) -> Link {
        if sentinel == Link::Head { self.head } else { self.tail }
    }

    fn set_parent(&mut self, child: Link, parent: Link) {
        match child {
            Link::Node(index) => self.nodes[index].parent = parent,
            Link::Head => self.head = parent,
            Link::Tail => self.tail = parent,
            Link::Null => {}
        }
    }

    /// Points whichever link of `parent` held `old` at `new`, or makes `new` the root.
    fn replace_child(&mut self, parent: Link, old: usize, new: Link) {
        match parent {
            Link::Node(parent) => {
                let parent = &mut self.nodes[parent];
                if parent.left == Link::Node(old) { parent.left = new; } else { parent.right = new; }
            }
            _ => self.root = new,
        }
    }

    fn extremum<D: Dir>(&self, mut index: usize) -> usize {
        while let Link::Node(next) = D::forward(&self.nodes[index]) { index = next; }
        index
    }

    fn unlink(&mut self, index: usize) -> Node<E> {
        let (parent, left, right) = {
            let node = &self.nodes[index];
            (node.parent, node.left, node.right)
        };

        match (left, right) {
            (Link::Null, Link::Null) => {
                trace!("erase: leaf");
                self.replace_child(parent, index, Link::Null);
            }
            (child, Link::Null) | (Link::Null, child) => {
                trace!("erase: single child {:?}", child);
                self.replace_child(parent, index, child);
                self.set_parent(child, parent);
            }
            (Link::Node(left), Link::Node(right)) => {
                trace!("erase: two children, promoting predecessor");
                self.splice::<Right>(index, parent, left, Link::Node(right));
            }
            (Link::Node(left), sentinel) => {
                trace!("erase: left subtree beside {:?}", sentinel);
                self.splice::<Right>(index, parent, left, sentinel);
            }
            (sentinel, Link::Node(right)) => {
                trace!("erase: right subtree beside {:?}", sentinel);
                self.splice::<Left>(index, parent, right, sentinel);
            }
            (_, _) => {
                trace!("erase: last node");
                self.root = Link::Null;
                self.head = Link::Tail;
                self.tail = Link::Head;
            }
        }

        let node = self.nodes.remove(index);
        self.len -= 1;
        debug_assert!(self.sentinels_linked());
        node
    }

    /// Moves the extreme node on side `D` of `child`'s subtree into the slot of the node at
    /// `index`. The moved node adopts `far` as its `D` child and, unless it is `child`
    /// itself, adopts `child` as its other child.
    fn splice<D: Dir>(&mut self, index: usize, parent: Link, child: usize, far: Link) {
        let extreme = self.extremum::<D>(child);

        if extreme != child {
            let rest = D::Opposite::forward(&self.nodes[extreme]);
            let above = self.nodes[extreme].parent;
            if let Link::Node(above) = above { *D::forward_mut(&mut self.nodes[above]) = rest; }
            self.set_parent(rest, above);

            *D::Opposite::forward_mut(&mut self.nodes[extreme]) = Link::Node(child);
            self.nodes[child].parent = Link::Node(extreme);
        }

        *D::forward_mut(&mut self.nodes[extreme]) = far;
        self.set_parent(far, Link::Node(extreme));
        self.nodes[extreme].parent = parent;
        self.replace_child(parent, index, Link::Node(extreme));
    }

    fn sentinels_linked(&self) -> bool {
        match (self.head, self.tail) {
            (Link::Tail, Link::Head) => self.root == Link::Null && self.len == 0,
            (Link::Node(min), Link::Node(max)) =>
                self.nodes[min].left == Link::Head && self.nodes[max].right == Link::Tail,
            _ => false,
        }
    }
}

impl<E, P, C> Tree<E, P, C> where P: KeyOf<E>, C: Compare<P::Key> {
    /// Inserts an element into the tree.
    ///
    /// Returns the position of the element with an equal key and whether the given element
    /// was inserted. The tree is left untouched when an equal key is already present.
    pub fn insert(&mut self, elem: E) -> (Position, bool) {
        match self.link(Node::new(elem)) {
            Ok(index) => (self.node_position(index), true),
            Err((index, _)) => (self.node_position(index), false),
        }
    }

    /// Links a node detached from another tree into this one without copying its element.
    ///
    /// Returns the node unchanged if the tree already contains an equal key.
    pub fn attach(&mut self, node: Detached<E>) -> Result<Position, Detached<E>> {
        match self.link(node.0) {
            Ok(index) => Ok(self.node_position(index)),
            Err((_, node)) => Err(Detached(node)),
        }
    }

    /// Moves every element of `other` whose key is not present in `self` into `self`.
    ///
    /// Elements with keys already present stay in `other`.
    pub fn merge(&mut self, other: &mut Self) {
        let (mut moved, mut kept) = (0, 0);
        let mut link = other.head;

        while let Link::Node(index) = link {
            link = other.node_step::<Right>(index);

            let elem = &other.nodes[index].elem;
            if let Search::Found(_) = self.search(|e| self.order.compare(elem, e)) {
                kept += 1;
                continue;
            }

            let mut node = other.unlink(index);
            node.reset();
            let linked = self.link(node).is_ok();
            debug_assert!(linked);
            moved += 1;
        }

        debug!("merge: moved {} nodes, left {} behind", moved, kept);
    }

    /// Returns a cursor at the element with the given key, or at the end if there is none.
    pub fn find<Q: ?Sized>(&self, key: &Q) -> Cursor<E, P, C> where C: Compare<Q, P::Key> {
        Cursor::new(self, self.lookup(key).map_or(Link::Tail, Link::Node))
    }

    /// Checks if the tree contains an element with the given key.
    pub fn contains<Q: ?Sized>(&self, key: &Q) -> bool where C: Compare<Q, P::Key> {
        self.lookup(key).is_some()
    }

    /// Returns an iterator over the tree's elements in ascending order.
    pub fn iter(&self) -> Iter<E, P, C> { Iter::new(self) }

    pub(crate) fn lookup<Q: ?Sized>(&self, key: &Q) -> Option<usize>
        where C: Compare<Q, P::Key> {

        match self.search(|elem| self.order.probe(key, elem)) {
            Search::Found(index) => Some(index),
            _ => None,
        }
    }

    /// Inserts an element, returning its index, or the index of the equal element along
    /// with the rejected one.
    pub(crate) fn insert_elem(&mut self, elem: E) -> Result<usize, (usize, E)> {
        self.link(Node::new(elem)).map_err(|(index, node)| (index, node.elem))
    }

    fn link(&mut self, mut node: Node<E>) -> Result<usize, (usize, Node<E>)> {
        let search = self.search(|elem| self.order.compare(&node.elem, elem));

        let index = match search {
            Search::Found(index) => return Err((index, node)),
            Search::Empty => {
                trace!("insert: new root");
                node.left = Link::Head;
                node.right = Link::Tail;
                let index = self.nodes.insert(node);
                self.root = Link::Node(index);
                self.head = Link::Node(index);
                self.tail = Link::Node(index);
                index
            }
            Search::Vacant { parent, left, boundary } => {
                trace!("insert: below node {} ({}), boundary {:?}",
                       parent, if left { "left" } else { "right" }, boundary);
                node.parent = Link::Node(parent);
                if left { node.left = boundary; } else { node.right = boundary; }
                let index = self.nodes.insert(node);
                let parent = &mut self.nodes[parent];
                if left { parent.left = Link::Node(index); } else { parent.right = Link::Node(index); }
                self.set_parent(boundary, Link::Node(index));
                index
            }
        };

        self.len += 1;
        Ok(index)
    }

    /// Steps from `link` in direction `D`, or returns `None` when stepping past a sentinel.
    fn step<D: Dir>(&self, link: Link) -> Option<Link> {
        match link {
            Link::Node(index) => Some(self.node_step::<D>(index)),
            Link::Null => None,
            sentinel if sentinel == D::sentinel() => None,
            sentinel => Some(self.sentinel_parent(sentinel)),
        }
    }

    fn node_step<D: Dir>(&self, index: usize) -> Link {
        let node = &self.nodes[index];

        match D::forward(node) {
            Link::Node(child) => Link::Node(self.extremum::<D::Opposite>(child)),
            Link::Null => {
                let parent = match node.parent {
                    Link::Node(parent) => parent,
                    _ => return D::sentinel(),
                };

                if D::Opposite::forward(&self.nodes[parent]) == Link::Node(index) {
                    return Link::Node(parent);
                }

                let mut ancestor = parent;
                while D::behind(&self.order, &self.nodes[ancestor].elem, &node.elem) {
                    match self.nodes[ancestor].parent {
                        Link::Node(next) => ancestor = next,
                        _ => return D::sentinel(),
                    }
                }
                Link::Node(ancestor)
            }
            sentinel => sentinel,
        }
    }
}

impl<E, P, C> Clone for Tree<E, P, C> where E: Clone, C: Clone {
    fn clone(&self) -> Self {
        let mut nodes = self.nodes.clone();
        for (_, entry) in nodes.iter_mut() { entry.stamp = node::fresh_stamp(); }

        Tree {
            nodes: nodes,
            root: self.root,
            head: self.head,
            tail: self.tail,
            len: self.len,
            order: self.order.clone(),
        }
    }
}

impl<E, P, C> Debug for Tree<E, P, C> where E: Debug, P: KeyOf<E>, C: Compare<P::Key> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<E, P, C> Default for Tree<E, P, C> where C: Default {
    fn default() -> Self { Tree::with_cmp(C::default()) }
}

impl<'a, E, P, C> IntoIterator for &'a Tree<E, P, C> where P: KeyOf<E>, C: Compare<P::Key> {
    type Item = &'a E;
    type IntoIter = Iter<'a, E, P, C>;
    fn into_iter(self) -> Iter<'a, E, P, C> { self.iter() }
}

impl<E, P, C> IntoIterator for Tree<E, P, C> {
    type Item = E;
    type IntoIter = IntoIter<E, P, C>;
    fn into_iter(self) -> IntoIter<E, P, C> { IntoIter::new(self) }
}
