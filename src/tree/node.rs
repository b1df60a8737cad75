use compare::Compare;
use std::sync::atomic::{self, AtomicU64};
use crate::order::{KeyOf, Order};

static STAMPS: AtomicU64 = AtomicU64::new(0);

/// Returns a stamp that no other node in the process has been given.
pub fn fresh_stamp() -> u64 { STAMPS.fetch_add(1, atomic::Ordering::Relaxed) }

/// An outgoing link of a node or sentinel.
///
/// The two sentinels are not stored in the arena; `Head` and `Tail` name them directly and
/// their parent links live in the tree itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Link {
    Null,
    Head,
    Tail,
    Node(usize),
}

impl Link {
    pub fn index(self) -> Option<usize> {
        match self {
            Link::Node(index) => Some(index),
            _ => None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Node<E> {
    pub parent: Link,
    pub left: Link,
    pub right: Link,
    pub stamp: u64,
    pub elem: E,
}

impl<E> Node<E> {
    pub fn new(elem: E) -> Self {
        Node {
            parent: Link::Null,
            left: Link::Null,
            right: Link::Null,
            stamp: fresh_stamp(),
            elem: elem,
        }
    }

    /// Clears the node's links and gives it a new identity.
    pub fn reset(&mut self) {
        self.parent = Link::Null;
        self.left = Link::Null;
        self.right = Link::Null;
        self.stamp = fresh_stamp();
    }
}

pub trait Dir: Sized {
    type Opposite: Dir<Opposite=Self>;

    /// The sentinel bounding the sequence on this side.
    fn sentinel() -> Link;

    fn forward<E>(node: &Node<E>) -> Link;
    fn forward_mut<E>(node: &mut Node<E>) -> &mut Link;

    /// Checks if `ancestor` lies behind `elem` when stepping in this direction.
    fn behind<E, P, C>(order: &Order<P, C>, ancestor: &E, elem: &E) -> bool
        where P: KeyOf<E>, C: Compare<P::Key>;
}

#[allow(unused)]
pub enum Left {}

impl Dir for Left {
    type Opposite = Right;

    fn sentinel() -> Link { Link::Head }

    fn forward<E>(node: &Node<E>) -> Link { node.left }
    fn forward_mut<E>(node: &mut Node<E>) -> &mut Link { &mut node.left }

    fn behind<E, P, C>(order: &Order<P, C>, ancestor: &E, elem: &E) -> bool
        where P: KeyOf<E>, C: Compare<P::Key> {

        order.greater_than(ancestor, elem)
    }
}

#[allow(unused)]
pub enum Right {}

impl Dir for Right {
    type Opposite = Left;

    fn sentinel() -> Link { Link::Tail }

    fn forward<E>(node: &Node<E>) -> Link { node.right }
    fn forward_mut<E>(node: &mut Node<E>) -> &mut Link { &mut node.right }

    fn behind<E, P, C>(order: &Order<P, C>, ancestor: &E, elem: &E) -> bool
        where P: KeyOf<E>, C: Compare<P::Key> {

        order.less_than(ancestor, elem)
    }
}
