use core::borrow::Borrow;
use core::cmp::Ordering::{Equal, Greater, Less};
use core::fmt::{self, Write as _};

use alloc::string::String;
use alloc::vec::Vec;

use smallvec::SmallVec;

use crate::error::{DuplicateKey, OutOfRange};

use super::arena::Arena;
use super::handle::Handle;
use super::node::{Color, Direction, RbNode};

/// In-order traversal stack; spills to the heap past this depth.
type TraversalStack = SmallVec<[Handle; 16]>;

/// The red-black engine backing `RankSet`.
///
/// Nodes are arena slots linked by handles; `root` is the single entry
/// point. Parent links exist so rotations and insert fix-up can walk
/// upward without re-searching from the root. Nodes store no subtree
/// sizes: every query that needs one recomputes it by traversal.
#[derive(Clone)]
pub(crate) struct RawRankSet<T> {
    nodes: Arena<RbNode<T>>,
    root: Option<Handle>,
}

impl<T> RawRankSet<T> {
    pub(crate) const fn new() -> Self {
        Self { nodes: Arena::new(), root: None }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self { nodes: Arena::with_capacity(capacity), root: None }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    /// Counts the nodes reachable from the root by full traversal.
    pub(crate) fn len(&self) -> usize {
        self.subtree_size(self.root)
    }

    #[inline]
    fn node(&self, handle: Handle) -> &RbNode<T> {
        self.nodes.get(handle)
    }

    #[inline]
    fn node_mut(&mut self, handle: Handle) -> &mut RbNode<T> {
        self.nodes.get_mut(handle)
    }

    fn subtree_size(&self, link: Option<Handle>) -> usize {
        link.map_or(0, |handle| {
            let node = self.node(handle);
            1 + self.subtree_size(node.child(Direction::Left))
                + self.subtree_size(node.child(Direction::Right))
        })
    }

    /// Returns the `rank`-th smallest key, 1-indexed.
    ///
    /// In-order traversal with an explicit stack that stops after visiting
    /// `rank` nodes. There is no size metadata to descend by, so this is
    /// O(rank + height), a linear select.
    pub(crate) fn select(&self, rank: usize) -> Result<&T, OutOfRange> {
        if rank == 0 {
            return Err(OutOfRange(rank));
        }
        let mut remaining = rank;
        let mut stack = TraversalStack::new();
        let mut cursor = self.root;
        loop {
            while let Some(handle) = cursor {
                stack.push(handle);
                cursor = self.node(handle).child(Direction::Left);
            }
            let Some(handle) = stack.pop() else {
                return Err(OutOfRange(rank));
            };
            remaining -= 1;
            if remaining == 0 {
                return Ok(self.node(handle).key());
            }
            cursor = self.node(handle).child(Direction::Right);
        }
    }

    /// Counts the keys strictly less than `key`.
    ///
    /// A node whose key is `>= key` rules out itself and its right
    /// subtree; one whose key is `< key` contributes itself plus its whole
    /// left subtree, whose size is recomputed on the spot.
    pub(crate) fn count_less<Q>(&self, key: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.count_less_in(self.root, key)
    }

    fn count_less_in<Q>(&self, link: Option<Handle>, key: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let Some(handle) = link else { return 0 };
        let node = self.node(handle);
        if key <= node.key().borrow() {
            self.count_less_in(node.child(Direction::Left), key)
        } else {
            1 + self.subtree_size(node.child(Direction::Left))
                + self.count_less_in(node.child(Direction::Right), key)
        }
    }

    /// Collects the keys in ascending order. Backs `Debug` and the
    /// structural tests; not part of the public surface.
    pub(crate) fn in_order_keys(&self) -> Vec<&T> {
        let mut keys = Vec::new();
        let mut stack = TraversalStack::new();
        let mut cursor = self.root;
        loop {
            while let Some(handle) = cursor {
                stack.push(handle);
                cursor = self.node(handle).child(Direction::Left);
            }
            let Some(handle) = stack.pop() else { break };
            keys.push(self.node(handle).key());
            cursor = self.node(handle).child(Direction::Right);
        }
        keys
    }
}

impl<T: Ord> RawRankSet<T> {
    /// Inserts `key`, failing with [`DuplicateKey`] if it is present.
    ///
    /// The descent mutates nothing until the key has been proven absent,
    /// so a failed insert is a pure read.
    pub(crate) fn insert(&mut self, key: T) -> Result<(), DuplicateKey> {
        let Some(root) = self.root else {
            let handle = self.nodes.alloc(RbNode::new(key, Color::Black, None));
            self.root = Some(handle);
            return Ok(());
        };

        let mut parent = root;
        let side = loop {
            let node = self.node(parent);
            let dir = match key.cmp(node.key()) {
                Equal => return Err(DuplicateKey),
                Less => Direction::Left,
                Greater => Direction::Right,
            };
            match node.child(dir) {
                Some(child) => parent = child,
                None => break dir,
            }
        };

        let handle = self.nodes.alloc(RbNode::new(key, Color::Red, Some(parent)));
        self.node_mut(parent).set_child(side, Some(handle));
        self.insert_fixup(handle);
        Ok(())
    }

    /// Restores the coloring invariants after `cursor` was attached RED.
    ///
    /// Standard red-black fix-up as an iterative loop: a RED uncle pushes
    /// the violation up two levels; a BLACK or absent uncle is resolved
    /// with at most two rotations and a color swap, which terminates.
    fn insert_fixup(&mut self, mut cursor: Handle) {
        loop {
            let Some(parent) = self.node(cursor).parent() else { break };
            if self.node(parent).color() == Color::Black {
                break;
            }
            // A RED parent is never the root, so the grandparent exists
            // (and is BLACK while the invariants held before this insert).
            let grandparent = self
                .node(parent)
                .parent()
                .expect("`insert_fixup()` - RED parent has no parent!");
            let side = if self.node(grandparent).child(Direction::Left) == Some(parent) {
                Direction::Left
            } else {
                Direction::Right
            };
            let uncle = self.node(grandparent).child(side.opposite());
            match uncle {
                Some(uncle) if self.node(uncle).color() == Color::Red => {
                    // Push the violation upward.
                    self.node_mut(parent).set_color(Color::Black);
                    self.node_mut(uncle).set_color(Color::Black);
                    self.node_mut(grandparent).set_color(Color::Red);
                    cursor = grandparent;
                }
                _ => {
                    let mut top = parent;
                    if self.node(parent).child(side.opposite()) == Some(cursor) {
                        // Zig-zag: straighten the path into the zig-zig shape.
                        self.rotate(parent, side);
                        top = cursor;
                    }
                    // Zig-zig: swap colors and rotate the grandparent away.
                    self.node_mut(top).set_color(Color::Black);
                    self.node_mut(grandparent).set_color(Color::Red);
                    self.rotate(grandparent, side.opposite());
                    break;
                }
            }
        }
        let root = self.root.expect("`insert_fixup()` - tree has no root!");
        self.node_mut(root).set_color(Color::Black);
    }

    /// Rotates in direction `dir` around `pivot`: the child opposite `dir`
    /// takes `pivot`'s place, `pivot` descends in direction `dir`, and the
    /// displaced middle subtree re-attaches under `pivot`.
    ///
    /// # Panics
    ///
    /// Panics if `pivot` has no child opposite `dir`. Callers only rotate
    /// where the coloring invariants guarantee that child, so hitting the
    /// panic means the invariants were already broken.
    fn rotate(&mut self, pivot: Handle, dir: Direction) {
        let up = self
            .node(pivot)
            .child(dir.opposite())
            .expect("`rotate()` - pivot has no child to rotate up!");
        let middle = self.node(up).child(dir);
        let parent = self.node(pivot).parent();

        self.node_mut(pivot).set_child(dir.opposite(), middle);
        if let Some(middle) = middle {
            self.node_mut(middle).set_parent(Some(pivot));
        }

        self.node_mut(up).set_child(dir, Some(pivot));
        self.node_mut(pivot).set_parent(Some(up));
        self.node_mut(up).set_parent(parent);

        match parent {
            Some(parent) => {
                let side = if self.node(parent).child(Direction::Left) == Some(pivot) {
                    Direction::Left
                } else {
                    Direction::Right
                };
                self.node_mut(parent).set_child(side, Some(up));
            }
            None => self.root = Some(up),
        }
    }
}

impl<T: fmt::Debug> RawRankSet<T> {
    /// Renders the tree sideways, right subtree above, one node per line
    /// tagged `R` or `B`.
    pub(crate) fn dump(&self) -> String {
        let mut out = String::new();
        self.dump_node(self.root, 0, &mut out);
        out
    }

    fn dump_node(&self, link: Option<Handle>, depth: usize, out: &mut String) {
        let Some(handle) = link else { return };
        let node = self.node(handle);
        self.dump_node(node.child(Direction::Right), depth + 1, out);
        let tag = match node.color() {
            Color::Red => 'R',
            Color::Black => 'B',
        };
        // Writing to a String cannot fail.
        let _ = writeln!(out, "{:indent$}{tag} {:?}", "", node.key(), indent = depth * 4);
        self.dump_node(node.child(Direction::Left), depth + 1, out);
    }
}
