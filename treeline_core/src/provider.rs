// Copyright 2026 the Treeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The tree provider contract and the derived depth-first position algebra.

use core::fmt;
use core::hash::Hash;

/// Content provider for tree structures.
///
/// A provider exposes a tree (or forest) through five local relation
/// primitives plus a node lookup, all keyed by an opaque [`Position`]. The
/// total depth-first order over the tree is *derived* from the primitives by
/// the provided methods ([`TreeProvider::next_depth_first`] and friends); it
/// is never stored, so providers can represent structures far larger than
/// what is ever visited.
///
/// Structural absence (no such parent, sibling, or child) is always `None`,
/// never an error; a position that no longer resolves simply behaves as
/// absent. The five primitives must be mutually consistent: if
/// `first_child_of(p) == Some(c)` then `parent_of(c) == Some(p)`, and if
/// `next_sibling_of(p) == Some(s)` then `prev_sibling_of(s) == Some(p)`.
/// The induced graph must be a forest; top-level roots are siblings of each
/// other, so a forest is browsed through the sibling chain of
/// [`TreeProvider::root`].
///
/// Methods take `&mut self` so implementations and wrappers are free to
/// maintain internal caches without exposing interior mutability at the
/// call site.
///
/// [`Position`]: TreeProvider::Position
pub trait TreeProvider {
    /// Opaque address of a node. Equal positions denote the same node; no
    /// two distinct live positions alias one node within a tree snapshot.
    type Position: Clone + Eq + Hash + fmt::Debug;
    /// The content value addressed by a position.
    type Node;

    /// The first top-level position, or `None` for an empty tree.
    fn root(&mut self) -> Option<Self::Position>;

    /// Looks up the node at `pos`, or `None` if the position does not
    /// resolve to a node at the time of the call.
    fn node_at(&mut self, pos: &Self::Position) -> Option<Self::Node>;

    /// The position of the parent of the node at `pos`.
    fn parent_of(&mut self, pos: &Self::Position) -> Option<Self::Position>;

    /// The position of the first child of the node at `pos`.
    fn first_child_of(&mut self, pos: &Self::Position) -> Option<Self::Position>;

    /// The position of the last child of the node at `pos`.
    fn last_child_of(&mut self, pos: &Self::Position) -> Option<Self::Position>;

    /// The position of the next sibling of the node at `pos`.
    fn next_sibling_of(&mut self, pos: &Self::Position) -> Option<Self::Position>;

    /// The position of the previous sibling of the node at `pos`.
    fn prev_sibling_of(&mut self, pos: &Self::Position) -> Option<Self::Position>;

    // --- Derived depth-first order ---

    /// The next position in depth-first (pre-)order.
    ///
    /// First child if present, else next sibling, else the next sibling of
    /// the closest ancestor that has one. Wrappers that memoize this walk
    /// may override it, provided the value is unchanged.
    fn next_depth_first(&mut self, pos: &Self::Position) -> Option<Self::Position> {
        if let Some(child) = self.first_child_of(pos) {
            return Some(child);
        }
        if let Some(sibling) = self.next_sibling_of(pos) {
            return Some(sibling);
        }
        self.next_of_kin_of(pos)
    }

    /// The next sibling of the closest ancestor of `pos` that has one.
    ///
    /// This is where the depth-first order continues once the subtree
    /// holding `pos` is exhausted; it never descends into `pos` itself, so
    /// the answer is independent of the subtree's visibility.
    fn next_of_kin_of(&mut self, pos: &Self::Position) -> Option<Self::Position> {
        let mut cursor = self.parent_of(pos);
        while let Some(ancestor) = cursor {
            if let Some(sibling) = self.next_sibling_of(&ancestor) {
                return Some(sibling);
            }
            cursor = self.parent_of(&ancestor);
        }
        None
    }

    /// The previous position in depth-first (pre-)order.
    ///
    /// The last descendant of the previous sibling if one exists, else the
    /// parent. Roots with no previous sibling have no predecessor.
    fn prev_depth_first(&mut self, pos: &Self::Position) -> Option<Self::Position> {
        if let Some(sibling) = self.prev_sibling_of(pos) {
            return Some(self.last_descendant_of(sibling));
        }
        self.parent_of(pos)
    }

    /// Number of ancestors between `pos` and its top-level root.
    fn depth_of(&mut self, pos: &Self::Position) -> usize {
        let mut depth = 0;
        let mut cursor = self.parent_of(pos);
        while let Some(ancestor) = cursor {
            depth += 1;
            cursor = self.parent_of(&ancestor);
        }
        depth
    }

    /// The depth-0 ancestor of `pos` (its top-level root).
    fn first_ancestor_of(&mut self, pos: &Self::Position) -> Self::Position {
        let mut current = pos.clone();
        while let Some(parent) = self.parent_of(&current) {
            current = parent;
        }
        current
    }

    /// The last position, in depth-first order, of the subtree rooted at
    /// `pos`; `pos` itself for leaves.
    fn last_descendant_of(&mut self, pos: Self::Position) -> Self::Position {
        let mut current = pos;
        while let Some(child) = self.last_child_of(&current) {
            current = child;
        }
        current
    }

    /// The first position in the sibling chain of `pos`.
    fn first_sibling_of(&mut self, pos: &Self::Position) -> Self::Position {
        let mut current = pos.clone();
        while let Some(sibling) = self.prev_sibling_of(&current) {
            current = sibling;
        }
        current
    }

    /// The last position in the sibling chain of `pos`.
    fn last_sibling_of(&mut self, pos: &Self::Position) -> Self::Position {
        let mut current = pos.clone();
        while let Some(sibling) = self.next_sibling_of(&current) {
            current = sibling;
        }
        current
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use crate::{SimpleNode, SimpleTree, TreePath, TreeProvider};

    /// root -> [A -> [A1, A2], B]
    fn sample() -> SimpleTree<&'static str> {
        SimpleTree::new(alloc::vec![
            SimpleNode::new("root")
                .child(
                    SimpleNode::new("A")
                        .child(SimpleNode::new("A1"))
                        .child(SimpleNode::new("A2")),
                )
                .child(SimpleNode::new("B")),
        ])
    }

    fn enumerate<T: TreeProvider>(tree: &mut T) -> Vec<T::Position> {
        let mut order = Vec::new();
        let mut cursor = tree.root();
        while let Some(pos) = cursor {
            cursor = tree.next_depth_first(&pos);
            order.push(pos);
        }
        order
    }

    #[test]
    fn enumeration_matches_preorder() {
        let mut tree = sample();
        let names: Vec<_> = enumerate(&mut tree)
            .iter()
            .map(|p| tree.node_at(p).unwrap())
            .collect();
        assert_eq!(names, ["root", "A", "A1", "A2", "B"]);
    }

    #[test]
    fn next_and_prev_are_inverse_over_the_whole_tree() {
        let mut tree = sample();
        let order = enumerate(&mut tree);
        for pair in order.windows(2) {
            assert_eq!(tree.next_depth_first(&pair[0]).as_ref(), Some(&pair[1]));
            assert_eq!(tree.prev_depth_first(&pair[1]).as_ref(), Some(&pair[0]));
        }
        // The root has no predecessor; the last position has no successor.
        assert_eq!(tree.prev_depth_first(&order[0]), None);
        assert_eq!(tree.next_depth_first(&order[order.len() - 1]), None);
    }

    #[test]
    fn concrete_neighbors() {
        let mut tree = sample();
        let a1 = TreePath::from_indices(&[0, 0, 0]);
        let a2 = TreePath::from_indices(&[0, 0, 1]);
        let a = TreePath::from_indices(&[0, 0]);
        let b = TreePath::from_indices(&[0, 1]);

        assert_eq!(tree.next_depth_first(&a1), Some(a2.clone()));
        assert_eq!(tree.prev_depth_first(&b), Some(a2.clone()));
        assert_eq!(tree.parent_of(&a2), Some(a));
    }

    #[test]
    fn depth_and_ancestor_walks() {
        let mut tree = sample();
        let root = TreePath::from_indices(&[0]);
        let a1 = TreePath::from_indices(&[0, 0, 0]);

        assert_eq!(tree.depth_of(&root), 0);
        assert_eq!(tree.depth_of(&a1), 2);
        assert_eq!(tree.first_ancestor_of(&a1), root);
        assert_eq!(
            tree.last_descendant_of(root.clone()),
            TreePath::from_indices(&[0, 1]),
        );
    }

    #[test]
    fn sibling_chain_walks() {
        let mut tree = sample();
        let a1 = TreePath::from_indices(&[0, 0, 0]);
        let a2 = TreePath::from_indices(&[0, 0, 1]);

        assert_eq!(tree.first_sibling_of(&a2), a1);
        assert_eq!(tree.last_sibling_of(&a1), a2);
    }

    #[test]
    fn forest_is_walked_through_the_root_sibling_chain() {
        let mut forest = SimpleTree::new(alloc::vec![
            SimpleNode::new("x").child(SimpleNode::new("x1")),
            SimpleNode::new("y"),
        ]);
        let names: Vec<_> = enumerate(&mut forest)
            .iter()
            .map(|p| forest.node_at(p).unwrap())
            .collect();
        assert_eq!(names, ["x", "x1", "y"]);
    }
}
