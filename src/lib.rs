//! Ordered maps and sets based on an unbalanced binary search tree.
//!
//! Both containers are configurations of one engine, [`Tree`](struct.Tree.html), which keeps
//! its nodes in an arena and links each node to its parent. The ordered sequence is bounded by
//! a head sentinel before the smallest element and a tail sentinel (the "end") after the
//! largest one, so a [`Cursor`](struct.Cursor.html) can walk it in either direction.
//!
//! Elements are addressed by [`Position`](struct.Position.html)s. A position outlives any
//! borrow of its container and stays valid until its own element is removed; using it after
//! that yields [`Error::InvalidIterator`](enum.Error.html).
//!
//! The tree is never rebalanced, so its height, and the cost of every operation, depends on
//! the insertion order.
//!
//! # Examples
//!
//! ```
//! use sentinel_tree::{Map, Set};
//!
//! let mut map = Map::new();
//! map.insert(2, "b");
//! map.insert(1, "a");
//! assert_eq!(map.iter().collect::<Vec<_>>(), [(&1, &"a"), (&2, &"b")]);
//!
//! let mut set: Set<_> = vec![1, 2, 3].into_iter().collect();
//! let mut other: Set<_> = vec![2, 3, 4, 7].into_iter().collect();
//! set.merge(&mut other);
//! assert_eq!(set.len(), 5);
//! assert_eq!(other.len(), 2);
//! ```

pub use crate::error::Error;
pub use crate::map::Map;
pub use crate::set::Set;
pub use crate::tree::{Cursor, Detached, IntoIter, Iter, Position, Tree};

mod error;
mod tree;

pub mod map;
pub mod order;
pub mod set;

#[cfg(feature = "ordered_iter")]
mod ordered_iter;

#[cfg(feature = "quickcheck")]
mod quickcheck;
