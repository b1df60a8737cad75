use compare::{Natural, natural};
use quickcheck::{Arbitrary, Gen, TestResult, quickcheck};
use std::fmt::Debug;
use crate::error::Error;
use crate::order::Identity;
use super::{Position, Tree};
use super::node::{Left, Link, Right};

type IntTree = Tree<u32, Identity, Natural<u32>>;

fn new_tree() -> IntTree { Tree::with_cmp(natural()) }

fn build(keys: &[u32]) -> IntTree {
    let mut tree = new_tree();
    for &key in keys { assert!(tree.insert(key).1); }
    tree
}

/// An operation on a tree.
#[derive(Clone, Debug)]
enum Op {
    /// Insert a key into the tree.
    Insert(u8),
    /// Erase the element at index `n % tree.len()` of the ascending sequence.
    Erase(usize),
}

impl Arbitrary for Op {
    fn arbitrary(gen: &mut Gen) -> Op {
        if bool::arbitrary(gen) {
            Op::Insert(Arbitrary::arbitrary(gen))
        } else {
            Op::Erase(Arbitrary::arbitrary(gen))
        }
    }
}

impl Op {
    /// Perform the operation on the given tree.
    fn exec(self, tree: &mut Tree<u8, Identity, Natural<u8>>) {
        match self {
            Op::Insert(key) => { tree.insert(key); }
            Op::Erase(index) => if !tree.is_empty() {
                let mut cursor = tree.begin();
                cursor.advance(index % tree.len()).unwrap();
                let pos = cursor.position();
                tree.erase(pos).unwrap();
            },
        }
    }
}

/// Checks parent links, key order, sentinel placement and the cached length.
fn assert_tree<T>(tree: &Tree<T, Identity, Natural<T>>) where T: Copy + Ord + Debug {
    fn walk<T>(tree: &Tree<T, Identity, Natural<T>>, index: usize, lo: Option<T>, hi: Option<T>)
        -> usize where T: Copy + Ord + Debug {

        let node = &tree.nodes[index];
        if let Some(lo) = lo { assert!(lo < node.elem); }
        if let Some(hi) = hi { assert!(node.elem < hi); }

        let mut count = 1;

        match node.left {
            Link::Node(child) => {
                assert_eq!(tree.nodes[child].parent, Link::Node(index));
                count += walk(tree, child, lo, Some(node.elem));
            }
            Link::Head => assert_eq!(tree.head, Link::Node(index)),
            Link::Tail => panic!("tail hangs off a left link"),
            Link::Null => {}
        }

        match node.right {
            Link::Node(child) => {
                assert_eq!(tree.nodes[child].parent, Link::Node(index));
                count += walk(tree, child, Some(node.elem), hi);
            }
            Link::Tail => assert_eq!(tree.tail, Link::Node(index)),
            Link::Head => panic!("head hangs off a right link"),
            Link::Null => {}
        }

        count
    }

    match tree.root {
        Link::Null => {
            assert_eq!(tree.len, 0);
            assert!(tree.nodes.is_empty());
            assert_eq!(tree.head, Link::Tail);
            assert_eq!(tree.tail, Link::Head);
        }
        Link::Node(root) => {
            assert_eq!(tree.nodes[root].parent, Link::Null);
            assert_eq!(walk(tree, root, None, None), tree.len);
            assert_eq!(tree.nodes.len(), tree.len);

            let min = tree.extremum::<Left>(root);
            let max = tree.extremum::<Right>(root);
            assert_eq!(tree.head, Link::Node(min));
            assert_eq!(tree.tail, Link::Node(max));
            assert_eq!(tree.nodes[min].left, Link::Head);
            assert_eq!(tree.nodes[max].right, Link::Tail);
        }
        link => panic!("root is {:?}", link),
    }

    assert_walks(tree);
}

/// Checks that walking in either direction visits every element once, in order.
fn assert_walks<T>(tree: &Tree<T, Identity, Natural<T>>) where T: Copy + Ord + Debug {
    let forward: Vec<T> = tree.iter().cloned().collect();
    let mut backward: Vec<T> = tree.iter().rev().cloned().collect();
    backward.reverse();

    assert_eq!(forward.len(), tree.len());
    assert!(forward.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(forward, backward);

    let mut cursor = tree.end();
    for _ in 0..tree.len() { cursor.move_prev().unwrap(); }
    assert_eq!(cursor, tree.begin());
    cursor.move_prev().unwrap();
    assert!(cursor.is_head());
    assert_eq!(cursor.move_prev(), Err(Error::InvalidIterator));
    cursor.advance(tree.len() + 1).unwrap();
    assert!(cursor.is_end());
}

fn permutations(n: u32) -> Vec<Vec<u32>> {
    fn permute(rest: &mut Vec<u32>, prefix: &mut Vec<u32>, out: &mut Vec<Vec<u32>>) {
        if rest.is_empty() { out.push(prefix.clone()); return; }

        for i in 0..rest.len() {
            let key = rest.remove(i);
            prefix.push(key);
            permute(rest, prefix, out);
            prefix.pop();
            rest.insert(i, key);
        }
    }

    let mut out = vec![];
    permute(&mut (1..n + 1).collect(), &mut vec![], &mut out);
    out
}

#[test]
fn test_empty() {
    let tree = new_tree();
    assert_tree(&tree);
    assert_eq!(tree.begin(), tree.end());
    assert_eq!(tree.first(), None);
    assert_eq!(tree.last(), None);
    assert_eq!(tree.iter().next(), None);
}

#[test]
fn test_single() {
    let mut tree = build(&[7]);
    assert_tree(&tree);
    assert_eq!(tree.root, tree.head);
    assert_eq!(tree.root, tree.tail);

    let pos = tree.find(&7).position();
    assert_eq!(tree.erase(pos), Ok(7));
    assert_tree(&tree);
}

#[test]
fn test_insert_every_order() {
    for n in 1..6 {
        for keys in permutations(n) {
            let tree = build(&keys);
            assert_tree(&tree);
            assert_eq!(tree.iter().cloned().collect::<Vec<_>>(), (1..n + 1).collect::<Vec<_>>());
        }
    }
}

#[test]
fn test_erase_every_order() {
    for n in 1..5 {
        for keys in permutations(n) {
            let tree = build(&keys);

            for order in permutations(n) {
                let mut tree = tree.clone();
                let mut expected: Vec<u32> = (1..n + 1).collect();

                for key in order {
                    let pos = tree.find(&key).position();
                    assert_eq!(tree.erase(pos), Ok(key));
                    expected.retain(|&k| k != key);
                    assert_tree(&tree);
                    assert_eq!(tree.iter().cloned().collect::<Vec<_>>(), expected);
                }
            }
        }
    }
}

#[test]
fn test_erase_max_with_deep_left_subtree() {
    let mut tree = build(&[5, 2, 4, 3]);
    let pos = tree.find(&5).position();
    assert_eq!(tree.erase(pos), Ok(5));
    assert_tree(&tree);

    let root = tree.root.index().unwrap();
    assert_eq!(tree.nodes[root].elem, 4);
    assert_eq!(tree.nodes[root].right, Link::Tail);

    let mut cursor = tree.end();
    cursor.move_prev().unwrap();
    assert_eq!(cursor.get(), Some(&4));
}

#[test]
fn test_erase_min_with_deep_right_subtree() {
    let mut tree = build(&[1, 4, 2, 3]);
    let pos = tree.find(&1).position();
    assert_eq!(tree.erase(pos), Ok(1));
    assert_tree(&tree);

    let root = tree.root.index().unwrap();
    assert_eq!(tree.nodes[root].elem, 2);
    assert_eq!(tree.nodes[root].left, Link::Head);
    assert_eq!(tree.begin().get(), Some(&2));
}

#[test]
fn test_erase_interior_promotes_predecessor() {
    let mut tree = build(&[4, 2, 6, 1, 3, 5, 7]);
    let pos = tree.find(&4).position();
    assert_eq!(tree.erase(pos), Ok(4));
    assert_tree(&tree);

    let root = tree.root.index().unwrap();
    assert_eq!(tree.nodes[root].elem, 3);
}

#[test]
fn test_stale_position() {
    let mut tree = build(&[2, 1, 3]);
    let pos = tree.find(&2).position();
    tree.erase(pos).unwrap();

    assert_eq!(tree.erase(pos), Err(Error::InvalidIterator));
    assert_eq!(tree.get(pos), Err(Error::InvalidIterator));
    assert!(tree.cursor(pos).is_err());

    // the freed slot is reused by the next insertion
    tree.insert(2);
    assert_eq!(tree.get(pos), Err(Error::InvalidIterator));
    assert_tree(&tree);
}

#[test]
fn test_positions_survive_other_erasures() {
    let mut tree = build(&[4, 2, 6, 1, 3, 5, 7]);
    let positions: Vec<Position> = (1..8).map(|key| tree.find(&key).position()).collect();

    for &key in &[4, 2, 7] {
        tree.erase(positions[key as usize - 1]).unwrap();
    }

    for &key in &[1, 3, 5, 6] {
        assert_eq!(tree.get(positions[key as usize - 1]), Ok(&key));
    }
}

#[test]
fn test_sentinel_positions() {
    let mut tree = build(&[1]);
    assert_eq!(tree.erase(Position::end()), Err(Error::InvalidIterator));
    assert_eq!(tree.erase(Position::head()), Err(Error::InvalidIterator));
    assert!(tree.cursor(Position::end()).unwrap().is_end());
    assert!(tree.cursor(Position::head()).unwrap().is_head());
    assert_eq!(tree.len(), 1);
}

#[test]
fn test_clone_gives_fresh_positions() {
    let tree = build(&[1, 2]);
    let pos = tree.find(&1).position();
    let copy = tree.clone();

    assert_tree(&copy);
    assert_eq!(copy.get(pos), Err(Error::InvalidIterator));
    assert_eq!(tree.get(pos), Ok(&1));
}

#[test]
fn test_detach_attach() {
    let mut left = build(&[1, 2, 3]);
    let mut right = build(&[2]);

    let pos = left.find(&2).position();
    let node = left.detach(pos).unwrap();
    assert_eq!(node.get(), &2);
    assert_tree(&left);

    let node = right.attach(node).unwrap_err();
    let pos = left.find(&1).position();
    let node2 = left.detach(pos).unwrap();
    let moved = right.attach(node2).unwrap();
    assert_eq!(right.get(moved), Ok(&1));
    assert_eq!(left.get(moved), Err(Error::InvalidIterator));
    assert_eq!(node.into_inner(), 2);
    assert_tree(&right);
}

#[test]
fn test_merge() {
    let mut set = build(&[1, 2, 3]);
    let mut other = build(&[2, 3, 4, 7]);
    set.merge(&mut other);

    assert_tree(&set);
    assert_tree(&other);
    assert_eq!(set.iter().cloned().collect::<Vec<_>>(), [1, 2, 3, 4, 7]);
    assert_eq!(other.iter().cloned().collect::<Vec<_>>(), [2, 3]);
}

#[test]
fn test_swap_twice() {
    let mut a = build(&[1, 2]);
    let mut b = build(&[9]);
    let pos = a.find(&2).position();

    a.swap(&mut b);
    assert_eq!(b.get(pos), Ok(&2));
    assert_eq!(a.iter().cloned().collect::<Vec<_>>(), [9]);

    a.swap(&mut b);
    assert_eq!(a.get(pos), Ok(&2));
    assert_tree(&a);
    assert_tree(&b);
}

#[test]
fn test_into_iter_from_both_ends() {
    let mut iter = build(&[3, 1, 4, 2, 5]).into_iter();
    assert_eq!(iter.len(), 5);
    assert_eq!(iter.next(), Some(1));
    assert_eq!(iter.next_back(), Some(5));
    assert_eq!(iter.collect::<Vec<_>>(), [2, 3, 4]);
}

#[test]
fn test_clear() {
    let mut tree = build(&[3, 1, 2]);
    tree.clear();
    assert_tree(&tree);
    tree.insert(1);
    assert_tree(&tree);
}

#[test]
fn test_ops() {
    fn check(ops: Vec<Op>) -> TestResult {
        let mut tree = Tree::with_cmp(natural());
        for op in ops {
            op.exec(&mut tree);
            assert_tree(&tree);
        }
        TestResult::passed()
    }

    quickcheck(check as fn(_) -> _);
}
