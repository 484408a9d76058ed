// Copyright 2026 the Treeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=treeline_list --heading-base-level=0

//! Treeline List: the flat, focusable face of a tree provider stack.
//!
//! [`TreeList`] owns a [`TreeProvider`] (typically the top of a decoration
//! stack) and exposes it the way a scrollable list view wants to consume
//! it: an index-free sequence addressed by positions, one focused position,
//! and single steps in either direction of the derived depth-first order.
//!
//! Failure is degradation, never a crash: a focus that stops resolving
//! (because the underlying data changed shape) makes [`TreeList::get_focus`]
//! return `None`, and navigation to or from unresolvable positions yields
//! `None`, so a view holding stale state scrolls to nothing and recovers by
//! resetting its focus.
//!
//! Beyond sequential steps, the semantic actions a tree browser binds to
//! keys are provided directly: focus the parent, the first child, a
//! sibling, the top-level ancestor, or the end of the focused subtree. When
//! the wrapped stack is [`Collapse`]-capable, the focused subtree can be
//! collapsed, expanded, or toggled in place.
//!
//! Change notification is poll-based: [`TreeList::revision`] increases on
//! every focus or collapse change made through the adapter, and consumers
//! compare it against the value they last rendered.
//!
//! ```rust
//! use treeline_core::{SimpleNode, SimpleTree};
//! use treeline_list::TreeList;
//!
//! let tree = SimpleTree::new(vec![
//!     SimpleNode::new("root").child(SimpleNode::new("a")).child(SimpleNode::new("b")),
//! ]);
//! let mut list = TreeList::new(tree);
//!
//! let (node, _pos) = list.get_focus().unwrap();
//! assert_eq!(node, "root");
//!
//! assert!(list.focus_next());
//! let (node, _pos) = list.get_focus().unwrap();
//! assert_eq!(node, "a");
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use core::fmt;

use treeline_collapse::Collapse;
use treeline_core::{Revision, TreeProvider};

/// The linearization adapter: a provider stack plus a focus.
///
/// See the [crate docs](crate) for the model.
pub struct TreeList<M: TreeProvider> {
    model: M,
    focus: Option<M::Position>,
    revision: Revision,
}

impl<M: TreeProvider> TreeList<M> {
    /// Wraps `model`, focusing its root (no focus for an empty tree).
    pub fn new(mut model: M) -> Self {
        let focus = model.root();
        Self {
            model,
            focus,
            revision: Revision::ZERO,
        }
    }

    /// Shared access to the wrapped stack.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Mutable access to the wrapped stack.
    ///
    /// Changing the underlying data may leave the focus unresolvable; that
    /// is safe — [`TreeList::get_focus`] degrades to `None` until the focus
    /// is reset.
    pub fn model_mut(&mut self) -> &mut M {
        &mut self.model
    }

    /// Unwraps the stack, discarding focus state.
    pub fn into_model(self) -> M {
        self.model
    }

    /// The change counter; bumped on every focus or collapse change made
    /// through this adapter.
    #[must_use]
    pub fn revision(&self) -> Revision {
        self.revision
    }

    /// The focused position, resolved or not.
    pub fn focus(&self) -> Option<&M::Position> {
        self.focus.as_ref()
    }

    /// The focused node and position.
    ///
    /// `None` if the tree is empty or the focus no longer resolves.
    pub fn get_focus(&mut self) -> Option<(M::Node, M::Position)> {
        let pos = self.focus.clone()?;
        let node = self.model.node_at(&pos)?;
        Some((node, pos))
    }

    /// Moves the focus. A no-op (and no notification) if `pos` is already
    /// focused.
    pub fn set_focus(&mut self, pos: M::Position) {
        if self.focus.as_ref() == Some(&pos) {
            return;
        }
        self.focus = Some(pos);
        self.revision.bump();
    }

    /// Re-focuses the root, the usual recovery after the previous focus
    /// went stale. Returns `false` for an empty tree.
    pub fn focus_root(&mut self) -> bool {
        match self.model.root() {
            Some(root) => {
                self.set_focus(root);
                true
            }
            None => false,
        }
    }

    /// The node and position one step forward in depth-first order from
    /// `pos`, or `None` at the end of the sequence or if the neighbor does
    /// not resolve.
    pub fn get_next(&mut self, pos: &M::Position) -> Option<(M::Node, M::Position)> {
        let next = self.model.next_depth_first(pos)?;
        let node = self.model.node_at(&next)?;
        Some((node, next))
    }

    /// The node and position one step backward in depth-first order from
    /// `pos`, or `None` at the start of the sequence or if the neighbor
    /// does not resolve.
    pub fn get_prev(&mut self, pos: &M::Position) -> Option<(M::Node, M::Position)> {
        let prev = self.model.prev_depth_first(pos)?;
        let node = self.model.node_at(&prev)?;
        Some((node, prev))
    }

    /// Moves the focus one step forward in depth-first order.
    pub fn focus_next(&mut self) -> bool {
        self.refocus(|model, pos| model.next_depth_first(pos))
    }

    /// Moves the focus one step backward in depth-first order.
    pub fn focus_prev(&mut self) -> bool {
        self.refocus(|model, pos| model.prev_depth_first(pos))
    }

    /// Focuses the parent of the focused position.
    pub fn focus_parent(&mut self) -> bool {
        self.refocus(|model, pos| model.parent_of(pos))
    }

    /// Focuses the first child of the focused position.
    pub fn focus_first_child(&mut self) -> bool {
        self.refocus(|model, pos| model.first_child_of(pos))
    }

    /// Focuses the next sibling of the focused position.
    pub fn focus_next_sibling(&mut self) -> bool {
        self.refocus(|model, pos| model.next_sibling_of(pos))
    }

    /// Focuses the previous sibling of the focused position.
    pub fn focus_prev_sibling(&mut self) -> bool {
        self.refocus(|model, pos| model.prev_sibling_of(pos))
    }

    /// Focuses the top-level ancestor of the focused position.
    pub fn focus_first_ancestor(&mut self) -> bool {
        self.refocus(|model, pos| Some(model.first_ancestor_of(pos)))
    }

    /// Focuses the last position of the focused subtree.
    pub fn focus_last_descendant(&mut self) -> bool {
        self.refocus(|model, pos| Some(model.last_descendant_of(pos.clone())))
    }

    /// Applies a step to the focus; reports whether the focus moved.
    fn refocus(
        &mut self,
        step: impl FnOnce(&mut M, &M::Position) -> Option<M::Position>,
    ) -> bool {
        let Some(current) = self.focus.clone() else {
            return false;
        };
        match step(&mut self.model, &current) {
            Some(target) if target != current => {
                self.focus = Some(target);
                self.revision.bump();
                true
            }
            _ => false,
        }
    }
}

impl<M: Collapse> TreeList<M> {
    /// Requests a collapse state through the stack; bumps the revision only
    /// if the effective state changed.
    pub fn set_collapsed(&mut self, pos: &M::Position, collapsed: bool) {
        if self.model.is_collapsed(pos) == collapsed {
            return;
        }
        self.model.set_collapsed(pos, collapsed);
        self.revision.bump();
    }

    /// Hides the focused subtree.
    pub fn collapse_focused(&mut self) {
        if let Some(pos) = self.focus.clone() {
            self.set_collapsed(&pos, true);
        }
    }

    /// Reveals the focused subtree.
    pub fn expand_focused(&mut self) {
        if let Some(pos) = self.focus.clone() {
            self.set_collapsed(&pos, false);
        }
    }

    /// Flips the collapse state of the focused subtree.
    pub fn toggle_focused(&mut self) {
        if let Some(pos) = self.focus.clone() {
            let collapsed = self.model.is_collapsed(&pos);
            self.set_collapsed(&pos, !collapsed);
        }
    }
}

impl<M> fmt::Debug for TreeList<M>
where
    M: TreeProvider + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TreeList")
            .field("model", &self.model)
            .field("focus", &self.focus)
            .field("revision", &self.revision)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use treeline_collapse::Collapsible;
    use treeline_core::{Cached, SimpleNode, SimpleTree, TreePath};

    use super::TreeList;

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

    #[test]
    fn sequential_navigation_covers_the_tree() {
        let mut list = TreeList::new(sample());
        let (node, mut pos) = list.get_focus().unwrap();
        assert_eq!(node, "root");

        let mut nodes = alloc::vec![node];
        while let Some((node, next)) = list.get_next(&pos) {
            nodes.push(node);
            pos = next;
        }
        assert_eq!(nodes, ["root", "A", "A1", "A2", "B"]);

        let mut back = Vec::new();
        while let Some((node, prev)) = list.get_prev(&pos) {
            back.push(node);
            pos = prev;
        }
        assert_eq!(back, ["A2", "A1", "A", "root"]);
    }

    #[test]
    fn focus_moves_bump_the_revision_once_each() {
        let mut list = TreeList::new(sample());
        let start = list.revision();

        assert!(list.focus_next());
        let after_step = list.revision();
        assert!(after_step > start);

        // Refusing to move (already at the first position's parent edge)
        // keeps the revision unchanged.
        assert!(list.focus_parent());
        assert!(!list.focus_parent(), "the root has no parent");
        let settled = list.revision();
        assert!(!list.focus_prev(), "nothing precedes the root");
        assert_eq!(list.revision(), settled);
    }

    #[test]
    fn set_focus_is_quiet_when_unchanged() {
        let mut list = TreeList::new(sample());
        let (_, pos) = list.get_focus().unwrap();

        let before = list.revision();
        list.set_focus(pos.clone());
        assert_eq!(list.revision(), before);

        list.set_focus(TreePath::from_indices(&[0, 1]));
        assert!(list.revision() > before);
    }

    #[test]
    fn semantic_actions_move_along_relations() {
        let mut list = TreeList::new(sample());

        assert!(list.focus_first_child());
        assert_eq!(list.get_focus().unwrap().0, "A");

        assert!(list.focus_next_sibling());
        assert_eq!(list.get_focus().unwrap().0, "B");

        assert!(list.focus_prev_sibling());
        assert!(list.focus_first_child());
        assert_eq!(list.get_focus().unwrap().0, "A1");

        assert!(list.focus_first_ancestor());
        assert_eq!(list.get_focus().unwrap().0, "root");

        assert!(list.focus_last_descendant());
        assert_eq!(list.get_focus().unwrap().0, "B");
    }

    #[test]
    fn stale_focus_degrades_to_none() {
        let mut list = TreeList::new(sample());
        list.set_focus(TreePath::from_indices(&[0, 0, 1]));
        assert_eq!(list.get_focus().unwrap().0, "A2");

        // The provider changes shape underneath; the held focus no longer
        // resolves.
        list.model_mut().roots_mut().clear();
        assert_eq!(list.get_focus(), None);
        assert!(!list.focus_root(), "an empty tree has nothing to focus");

        // Navigation from the stale position degrades the same way.
        let stale = TreePath::from_indices(&[0, 0, 1]);
        assert_eq!(list.get_next(&stale), None);
    }

    #[test]
    fn empty_trees_have_no_focus() {
        let mut list: TreeList<SimpleTree<&str>> = TreeList::new(SimpleTree::default());
        assert_eq!(list.get_focus(), None);
        assert!(!list.focus_next());
    }

    #[test]
    fn collapse_passthrough_notifies_and_skips_subtrees() {
        let stack = Cached::new(Collapsible::all_expanded(sample()));
        let mut list = TreeList::new(stack);
        let a = TreePath::from_indices(&[0, 0]);

        list.set_focus(a.clone());
        let before = list.revision();
        list.collapse_focused();
        assert!(list.revision() > before);

        // A's subtree is now skipped in sequence.
        let (_, pos) = list.get_focus().unwrap();
        assert_eq!(list.get_next(&pos).unwrap().0, "B");

        // Toggling an already-collapsed subtree to the same state is quiet.
        let settled = list.revision();
        list.collapse_focused();
        assert_eq!(list.revision(), settled);

        list.toggle_focused();
        assert_eq!(list.get_next(&a).unwrap().0, "A1");
    }
}
