// Copyright 2026 the Treeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=treeline_collapse --heading-base-level=0

//! Treeline Collapse: hide and reveal subtrees by position.
//!
//! [`Collapsible`] wraps any [`TreeProvider`] and overrides the two
//! child-relation primitives: while a position is collapsed, both
//! `first_child_of` and `last_child_of` report `None`. Because the
//! depth-first order is *derived* from the relation primitives, that one
//! override makes sequential navigation skip the entire subtree while the
//! collapsed position itself, its siblings, and its ancestors stay
//! reachable. Collapsing never removes anything from the tree: a directly
//! held descendant position still resolves, it just no longer appears in
//! the walk.
//!
//! Collapse state is not stored per node. A base predicate decides the
//! initial state of every position, and a divergent set records exactly the
//! positions whose state has been toggled away from it; the effective state
//! is the XOR of the two. Toggling is O(1) and idempotent (toggling back
//! removes the divergence), and toggling a position the provider no longer
//! knows is simply a state change that nothing ever asks about — never an
//! error, so a controller stays valid across provider reshapes.
//!
//! Changes are observed by polling [`Collapsible::revision`]; there are no
//! callbacks.
//!
//! ```rust
//! use treeline_collapse::{Collapse, Collapsible};
//! use treeline_core::{SimpleNode, SimpleTree, TreeProvider};
//!
//! let tree = SimpleTree::new(vec![
//!     SimpleNode::new("root")
//!         .child(SimpleNode::new("a").child(SimpleNode::new("a1")))
//!         .child(SimpleNode::new("b")),
//! ]);
//! let mut view = Collapsible::all_expanded(tree);
//!
//! let root = view.root().unwrap();
//! let a = view.first_child_of(&root).unwrap();
//! view.collapse(&a);
//!
//! // The walk now skips a's subtree: root, a, b.
//! let mut names = Vec::new();
//! let mut cursor = Some(root);
//! while let Some(pos) = cursor {
//!     names.push(view.node_at(&pos).unwrap());
//!     cursor = view.next_depth_first(&pos);
//! }
//! assert_eq!(names, ["root", "a", "b"]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod cached;

use core::fmt;

use hashbrown::HashSet;
use treeline_core::{Revision, TreeProvider};

/// The collapse capability of a provider stack.
///
/// Implemented by [`Collapsible`] and forwarded by every decorating wrapper
/// above it, so a host can toggle subtrees on the outermost layer of a
/// stack. `set_collapsed` on a position already in the requested state is a
/// no-op and notifies nobody.
pub trait Collapse: TreeProvider {
    /// Effective collapse state of `pos`.
    fn is_collapsed(&mut self, pos: &Self::Position) -> bool;

    /// Requests a collapse state for `pos`; does nothing if already there.
    fn set_collapsed(&mut self, pos: &Self::Position, collapsed: bool);

    /// Hides the subtree below `pos`.
    fn collapse(&mut self, pos: &Self::Position) {
        self.set_collapsed(pos, true);
    }

    /// Reveals the subtree below `pos`.
    fn expand(&mut self, pos: &Self::Position) {
        self.set_collapsed(pos, false);
    }

    /// Flips the collapse state of `pos`.
    fn toggle_collapsed(&mut self, pos: &Self::Position) {
        let collapsed = self.is_collapsed(pos);
        self.set_collapsed(pos, !collapsed);
    }
}

/// A provider wrapper tracking which subtrees are hidden.
///
/// See the [crate docs](crate) for the model. The base predicate is fixed at
/// construction; [`Collapsible::all_expanded`] and
/// [`Collapsible::all_collapsed`] cover the two common cases.
pub struct Collapsible<T: TreeProvider, F> {
    inner: T,
    initially_collapsed: F,
    divergent: HashSet<T::Position>,
    revision: Revision,
}

/// Predicate type used by the [`Collapsible::all_expanded`] and
/// [`Collapsible::all_collapsed`] constructors.
pub type FixedPredicate<T> = fn(&<T as TreeProvider>::Position) -> bool;

impl<T: TreeProvider> Collapsible<T, FixedPredicate<T>> {
    /// Wraps `inner` with every subtree initially visible.
    pub fn all_expanded(inner: T) -> Self {
        Self::new(inner, |_| false)
    }

    /// Wraps `inner` with every subtree initially hidden.
    pub fn all_collapsed(inner: T) -> Self {
        Self::new(inner, |_| true)
    }
}

impl<T, F> Collapsible<T, F>
where
    T: TreeProvider,
    F: Fn(&T::Position) -> bool,
{
    /// Wraps `inner` with the given base predicate.
    pub fn new(inner: T, initially_collapsed: F) -> Self {
        Self {
            inner,
            initially_collapsed,
            divergent: HashSet::new(),
            revision: Revision::ZERO,
        }
    }

    /// Shared access to the wrapped provider.
    pub fn inner(&self) -> &T {
        &self.inner
    }

    /// Mutable access to the wrapped provider.
    pub fn inner_mut(&mut self) -> &mut T {
        &mut self.inner
    }

    /// Unwraps the provider, discarding collapse state.
    pub fn into_inner(self) -> T {
        self.inner
    }

    /// The change counter; bumped on every effective collapse change.
    #[must_use]
    pub fn revision(&self) -> Revision {
        self.revision
    }

    /// Number of positions whose state diverges from the base predicate.
    #[must_use]
    pub fn divergent_len(&self) -> usize {
        self.divergent.len()
    }

    /// Collapses every position that has children.
    ///
    /// Sweeps the *underlying* provider's full depth-first order, ignoring
    /// current collapse state; O(n) by contract. One revision bump if
    /// anything changed.
    pub fn collapse_all(&mut self) {
        self.sweep(true);
    }

    /// Expands every position that has children. O(n), one revision bump if
    /// anything changed.
    pub fn expand_all(&mut self) {
        self.sweep(false);
    }

    fn effective(&self, pos: &T::Position) -> bool {
        (self.initially_collapsed)(pos) ^ self.divergent.contains(pos)
    }

    /// Moves `pos` to the requested state; returns whether anything changed.
    fn apply(&mut self, pos: &T::Position, collapsed: bool) -> bool {
        if self.effective(pos) == collapsed {
            return false;
        }
        if !self.divergent.remove(pos) {
            self.divergent.insert(pos.clone());
        }
        true
    }

    fn sweep(&mut self, collapsed: bool) {
        let mut changed = false;
        let mut cursor = self.inner.root();
        while let Some(pos) = cursor {
            if self.inner.first_child_of(&pos).is_some() {
                changed |= self.apply(&pos, collapsed);
            }
            cursor = self.inner.next_depth_first(&pos);
        }
        if changed {
            self.revision.bump();
        }
    }
}

impl<T, F> TreeProvider for Collapsible<T, F>
where
    T: TreeProvider,
    F: Fn(&T::Position) -> bool,
{
    type Position = T::Position;
    type Node = T::Node;

    fn root(&mut self) -> Option<T::Position> {
        self.inner.root()
    }

    fn node_at(&mut self, pos: &T::Position) -> Option<T::Node> {
        self.inner.node_at(pos)
    }

    fn parent_of(&mut self, pos: &T::Position) -> Option<T::Position> {
        self.inner.parent_of(pos)
    }

    // Collapsed positions report no children; the derived depth-first order
    // then steps from the position straight to its next sibling or kin.
    fn first_child_of(&mut self, pos: &T::Position) -> Option<T::Position> {
        if self.effective(pos) {
            return None;
        }
        self.inner.first_child_of(pos)
    }

    fn last_child_of(&mut self, pos: &T::Position) -> Option<T::Position> {
        if self.effective(pos) {
            return None;
        }
        self.inner.last_child_of(pos)
    }

    fn next_sibling_of(&mut self, pos: &T::Position) -> Option<T::Position> {
        self.inner.next_sibling_of(pos)
    }

    fn prev_sibling_of(&mut self, pos: &T::Position) -> Option<T::Position> {
        self.inner.prev_sibling_of(pos)
    }
}

impl<T, F> Collapse for Collapsible<T, F>
where
    T: TreeProvider,
    F: Fn(&T::Position) -> bool,
{
    fn is_collapsed(&mut self, pos: &T::Position) -> bool {
        self.effective(pos)
    }

    fn set_collapsed(&mut self, pos: &T::Position, collapsed: bool) {
        if self.apply(pos, collapsed) {
            self.revision.bump();
        }
    }
}

impl<T, F> fmt::Debug for Collapsible<T, F>
where
    T: TreeProvider + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Collapsible")
            .field("inner", &self.inner)
            .field("divergent", &self.divergent)
            .field("revision", &self.revision)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use treeline_core::{SimpleNode, SimpleTree, TreePath, TreeProvider};

    use super::{Collapse, Collapsible};

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

    fn walk<T: TreeProvider<Node = &'static str>>(tree: &mut T) -> Vec<&'static str> {
        let mut names = Vec::new();
        let mut cursor = tree.root();
        while let Some(pos) = cursor {
            names.push(tree.node_at(&pos).unwrap());
            cursor = tree.next_depth_first(&pos);
        }
        names
    }

    #[test]
    fn collapsing_hides_exactly_the_descendants() {
        let mut view = Collapsible::all_expanded(sample());
        let a = TreePath::from_indices(&[0, 0]);

        assert_eq!(walk(&mut view), ["root", "A", "A1", "A2", "B"]);

        view.collapse(&a);
        assert!(view.is_collapsed(&a));
        assert_eq!(view.first_child_of(&a), None);
        assert_eq!(walk(&mut view), ["root", "A", "B"]);

        // A direct position into the hidden subtree still resolves.
        let a2 = TreePath::from_indices(&[0, 0, 1]);
        assert_eq!(view.node_at(&a2), Some("A2"));
        assert_eq!(view.parent_of(&a2), Some(a.clone()));

        view.expand(&a);
        assert_eq!(walk(&mut view), ["root", "A", "A1", "A2", "B"]);
    }

    #[test]
    fn toggling_back_removes_the_divergence() {
        let mut view = Collapsible::all_expanded(sample());
        let a = TreePath::from_indices(&[0, 0]);

        view.collapse(&a);
        assert_eq!(view.divergent_len(), 1);
        view.expand(&a);
        assert_eq!(view.divergent_len(), 0, "back to base state, no divergence kept");

        // collapse / expand / collapse equals a single collapse.
        view.collapse(&a);
        view.expand(&a);
        view.collapse(&a);
        assert_eq!(view.divergent_len(), 1);
        assert!(view.is_collapsed(&a));
    }

    #[test]
    fn no_op_requests_do_not_notify() {
        let mut view = Collapsible::all_expanded(sample());
        let a = TreePath::from_indices(&[0, 0]);

        let before = view.revision();
        view.expand(&a);
        assert_eq!(view.revision(), before, "already expanded, nothing changed");

        view.collapse(&a);
        assert!(view.revision() > before);

        let after = view.revision();
        view.collapse(&a);
        assert_eq!(view.revision(), after);
    }

    #[test]
    fn unknown_positions_are_in_their_base_state() {
        let mut view = Collapsible::all_expanded(sample());
        let missing = TreePath::from_indices(&[4, 4]);

        assert!(!view.is_collapsed(&missing));
        // Toggling an unknown position is tracked, not an error.
        view.toggle_collapsed(&missing);
        assert!(view.is_collapsed(&missing));
    }

    #[test]
    fn base_predicate_starts_subtrees_hidden() {
        let a = TreePath::from_indices(&[0, 0]);
        let a_for_predicate = a.clone();
        let mut view = Collapsible::new(sample(), move |pos| *pos == a_for_predicate);

        assert_eq!(walk(&mut view), ["root", "A", "B"]);

        // Expanding diverges from the base predicate.
        view.expand(&a);
        assert_eq!(walk(&mut view), ["root", "A", "A1", "A2", "B"]);
        assert_eq!(view.divergent_len(), 1);
    }

    #[test]
    fn sweeps_cover_every_position_with_children() {
        let mut view = Collapsible::all_expanded(sample());

        let before = view.revision();
        view.collapse_all();
        assert!(view.revision() > before);
        assert_eq!(walk(&mut view), ["root"]);
        assert!(view.is_collapsed(&TreePath::from_indices(&[0, 0])));

        // A second sweep changes nothing and stays quiet.
        let after = view.revision();
        view.collapse_all();
        assert_eq!(view.revision(), after);

        view.expand_all();
        assert_eq!(walk(&mut view), ["root", "A", "A1", "A2", "B"]);
    }

    #[test]
    fn all_collapsed_starts_from_the_other_base() {
        let mut view = Collapsible::all_collapsed(sample());
        assert_eq!(walk(&mut view), ["root"]);

        let root = TreePath::toplevel(0);
        view.expand(&root);
        assert_eq!(walk(&mut view), ["root", "A", "B"]);
    }
}
