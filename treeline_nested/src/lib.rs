// Copyright 2026 the Treeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=treeline_nested --heading-base-level=0

//! Treeline Nested: splice embedded sub-structures into one position space.
//!
//! Some trees carry nodes that are themselves browsable: a message whose
//! body is another tree, a directory entry that expands into a generated
//! listing. [`NestedTree`] wraps an outer [`TreeProvider`] whose nodes
//! declare such content through the [`Embed`] capability and presents
//! everything as a single tree with one addressable position space.
//!
//! The capability is an explicit discriminated choice, not a structural
//! guess: a node stands alone ([`Embedded::None`]), carries a whole
//! sub-tree ([`Embedded::Tree`]), or carries a flat sub-list
//! ([`Embedded::List`]).
//!
//! Positions are two-part ([`NestedPos`]): the outer position plus an
//! optional inner coordinate. A tree-like node *is* its sub-tree's root —
//! the outer position with no inner part denotes that root, so no two
//! positions alias one node — and the sub-tree's deeper positions hang
//! below it. A list-like node's items are its children in list order, with
//! sibling steps mapping to index arithmetic and no further descent.
//! Relation queries on plain nodes fall through to the outer provider and
//! are rewrapped.
//!
//! Depth works out by construction: the inherited
//! [`TreeProvider::depth_of`] walk sums the outer depth and the embedded
//! depth, while [`NestedTree::outer_depth_of`] reports the outer-only
//! depth for hosts that indent by outer level.
//!
//! The composer is stateless; each relation query re-fetches the carrying
//! outer node. Node types with embedded content should therefore be cheap
//! to clone or share their structure internally.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

use treeline_core::TreeProvider;

/// A flat, indexable sequence a node can embed.
///
/// Methods take `&mut self` for symmetry with [`TreeProvider`], so
/// implementations may maintain caches.
pub trait ListProvider {
    /// The item value type.
    type Node;

    /// Number of items.
    fn len(&mut self) -> usize;

    /// Returns `true` if there are no items.
    fn is_empty(&mut self) -> bool {
        self.len() == 0
    }

    /// The item at `index`, or `None` past the end.
    fn get(&mut self, index: usize) -> Option<Self::Node>;
}

impl<T: Clone> ListProvider for Vec<T> {
    type Node = T;

    fn len(&mut self) -> usize {
        self.as_slice().len()
    }

    fn get(&mut self, index: usize) -> Option<T> {
        self.as_slice().get(index).cloned()
    }
}

/// What a node embeds, if anything.
#[derive(Debug)]
pub enum Embedded<'a, T, L> {
    /// A plain node.
    None,
    /// The node carries a whole sub-tree.
    Tree(&'a mut T),
    /// The node carries a flat sub-list.
    List(&'a mut L),
}

/// The capability a node type implements to participate in nested
/// composition.
///
/// Embedded sub-trees and sub-lists produce the same node type as the
/// carrier, so the composed tree is uniform. Sub-trees are expected to be
/// single-rooted; further top-level nodes of an embedded forest are not
/// spliced.
pub trait Embed: Sized {
    /// Provider type of an embedded sub-tree.
    type Tree: TreeProvider<Node = Self>;
    /// Provider type of an embedded sub-list.
    type List: ListProvider<Node = Self>;

    /// The node's embedded content, if any.
    fn embedded_mut(&mut self) -> Embedded<'_, Self::Tree, Self::List>;
}

/// The inner coordinate of a composed position.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Inner<Q> {
    /// A position inside an embedded sub-tree (never its root; the root is
    /// the carrying position itself).
    Tree(Q),
    /// An index into an embedded sub-list.
    List(usize),
}

/// A position in a composed tree: outer position plus optional inner
/// coordinate.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct NestedPos<P, Q> {
    /// Position in the outer tree.
    pub outer: P,
    /// Coordinate within the embedded content, if the position points into
    /// any.
    pub inner: Option<Inner<Q>>,
}

impl<P, Q> NestedPos<P, Q> {
    /// The position of the outer node itself (for tree-like nodes, the
    /// embedded root).
    pub fn at(outer: P) -> Self {
        Self { outer, inner: None }
    }

    /// A position inside the sub-tree embedded at `outer`.
    pub fn in_tree(outer: P, inner: Q) -> Self {
        Self {
            outer,
            inner: Some(Inner::Tree(inner)),
        }
    }

    /// A position inside the sub-list embedded at `outer`.
    pub fn in_list(outer: P, index: usize) -> Self {
        Self {
            outer,
            inner: Some(Inner::List(index)),
        }
    }
}

/// Position type of the sub-tree provider embedded in nodes of type `N`.
pub type SubPosition<N> = <<N as Embed>::Tree as TreeProvider>::Position;

/// Composes an outer provider and the sub-structures embedded in its nodes
/// into one tree. See the [crate docs](crate) for the position model.
#[derive(Clone, Debug)]
pub struct NestedTree<O> {
    outer: O,
}

impl<O> NestedTree<O> {
    /// Wraps an outer provider.
    pub fn new(outer: O) -> Self {
        Self { outer }
    }

    /// Shared access to the outer provider.
    pub fn outer(&self) -> &O {
        &self.outer
    }

    /// Mutable access to the outer provider.
    pub fn outer_mut(&mut self) -> &mut O {
        &mut self.outer
    }

    /// Unwraps the outer provider.
    pub fn into_outer(self) -> O {
        self.outer
    }
}

impl<O> NestedTree<O>
where
    O: TreeProvider,
    O::Node: Embed,
{
    /// Depth counting outer levels only, ignoring any embedded part.
    pub fn outer_depth_of(&mut self, pos: &NestedPos<O::Position, SubPosition<O::Node>>) -> usize {
        self.outer.depth_of(&pos.outer)
    }
}

impl<O> TreeProvider for NestedTree<O>
where
    O: TreeProvider,
    O::Node: Embed,
{
    type Position = NestedPos<O::Position, SubPosition<O::Node>>;
    type Node = O::Node;

    fn root(&mut self) -> Option<Self::Position> {
        self.outer.root().map(NestedPos::at)
    }

    fn node_at(&mut self, pos: &Self::Position) -> Option<O::Node> {
        let mut node = self.outer.node_at(&pos.outer)?;
        match &pos.inner {
            None => {
                // A tree-like node is displayed as its sub-tree's root.
                if let Embedded::Tree(sub) = node.embedded_mut() {
                    let root = sub.root()?;
                    return sub.node_at(&root);
                }
                Some(node)
            }
            Some(Inner::Tree(inner)) => match node.embedded_mut() {
                Embedded::Tree(sub) => {
                    if sub.root().as_ref() == Some(inner) {
                        // The sub-root is addressed as the outer position;
                        // refuse the alias.
                        return None;
                    }
                    sub.node_at(inner)
                }
                _ => None,
            },
            Some(Inner::List(index)) => match node.embedded_mut() {
                Embedded::List(list) => list.get(*index),
                _ => None,
            },
        }
    }

    fn parent_of(&mut self, pos: &Self::Position) -> Option<Self::Position> {
        match &pos.inner {
            None => self.outer.parent_of(&pos.outer).map(NestedPos::at),
            Some(Inner::Tree(inner)) => {
                let mut node = self.outer.node_at(&pos.outer)?;
                let Embedded::Tree(sub) = node.embedded_mut() else {
                    return None;
                };
                match sub.parent_of(inner) {
                    Some(parent) => {
                        if sub.root().as_ref() == Some(&parent) {
                            // Directly below the sub-root: the parent is the
                            // carrier itself.
                            Some(NestedPos::at(pos.outer.clone()))
                        } else {
                            Some(NestedPos::in_tree(pos.outer.clone(), parent))
                        }
                    }
                    // Top level of the embedded provider.
                    None => Some(NestedPos::at(pos.outer.clone())),
                }
            }
            Some(Inner::List(_)) => Some(NestedPos::at(pos.outer.clone())),
        }
    }

    fn first_child_of(&mut self, pos: &Self::Position) -> Option<Self::Position> {
        match &pos.inner {
            None => {
                let mut node = self.outer.node_at(&pos.outer)?;
                match node.embedded_mut() {
                    Embedded::Tree(sub) => {
                        let root = sub.root()?;
                        let child = sub.first_child_of(&root)?;
                        Some(NestedPos::in_tree(pos.outer.clone(), child))
                    }
                    Embedded::List(list) => {
                        if list.is_empty() {
                            None
                        } else {
                            Some(NestedPos::in_list(pos.outer.clone(), 0))
                        }
                    }
                    Embedded::None => self.outer.first_child_of(&pos.outer).map(NestedPos::at),
                }
            }
            Some(Inner::Tree(inner)) => {
                let mut node = self.outer.node_at(&pos.outer)?;
                let Embedded::Tree(sub) = node.embedded_mut() else {
                    return None;
                };
                let child = sub.first_child_of(inner)?;
                Some(NestedPos::in_tree(pos.outer.clone(), child))
            }
            // List items have no further descent.
            Some(Inner::List(_)) => None,
        }
    }

    fn last_child_of(&mut self, pos: &Self::Position) -> Option<Self::Position> {
        match &pos.inner {
            None => {
                let mut node = self.outer.node_at(&pos.outer)?;
                match node.embedded_mut() {
                    Embedded::Tree(sub) => {
                        let root = sub.root()?;
                        let child = sub.last_child_of(&root)?;
                        Some(NestedPos::in_tree(pos.outer.clone(), child))
                    }
                    Embedded::List(list) => {
                        let len = list.len();
                        if len == 0 {
                            None
                        } else {
                            Some(NestedPos::in_list(pos.outer.clone(), len - 1))
                        }
                    }
                    Embedded::None => self.outer.last_child_of(&pos.outer).map(NestedPos::at),
                }
            }
            Some(Inner::Tree(inner)) => {
                let mut node = self.outer.node_at(&pos.outer)?;
                let Embedded::Tree(sub) = node.embedded_mut() else {
                    return None;
                };
                let child = sub.last_child_of(inner)?;
                Some(NestedPos::in_tree(pos.outer.clone(), child))
            }
            Some(Inner::List(_)) => None,
        }
    }

    fn next_sibling_of(&mut self, pos: &Self::Position) -> Option<Self::Position> {
        match &pos.inner {
            None => self.outer.next_sibling_of(&pos.outer).map(NestedPos::at),
            Some(Inner::Tree(inner)) => {
                let mut node = self.outer.node_at(&pos.outer)?;
                let Embedded::Tree(sub) = node.embedded_mut() else {
                    return None;
                };
                let sibling = sub.next_sibling_of(inner)?;
                Some(NestedPos::in_tree(pos.outer.clone(), sibling))
            }
            Some(Inner::List(index)) => {
                let mut node = self.outer.node_at(&pos.outer)?;
                let Embedded::List(list) = node.embedded_mut() else {
                    return None;
                };
                let next = *index + 1;
                if next < list.len() {
                    Some(NestedPos::in_list(pos.outer.clone(), next))
                } else {
                    None
                }
            }
        }
    }

    fn prev_sibling_of(&mut self, pos: &Self::Position) -> Option<Self::Position> {
        match &pos.inner {
            None => self.outer.prev_sibling_of(&pos.outer).map(NestedPos::at),
            Some(Inner::Tree(inner)) => {
                let mut node = self.outer.node_at(&pos.outer)?;
                let Embedded::Tree(sub) = node.embedded_mut() else {
                    return None;
                };
                let sibling = sub.prev_sibling_of(inner)?;
                Some(NestedPos::in_tree(pos.outer.clone(), sibling))
            }
            Some(Inner::List(index)) => {
                if *index == 0 {
                    None
                } else {
                    Some(NestedPos::in_list(pos.outer.clone(), index - 1))
                }
            }
        }
    }
}
