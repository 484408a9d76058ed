// Copyright 2026 the Treeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plain indentation decoration.

use treeline_core::TreeProvider;

use crate::{Line, Segment};

/// Prepends a blank spacer of `depth * indent` columns to every line.
///
/// The simplest decorator: no bars, no connectors, just horizontal offset
/// proportional to depth. All relation queries delegate verbatim to the
/// wrapped provider.
#[derive(Clone, Debug)]
pub struct Indented<T> {
    inner: T,
    indent: usize,
}

impl<T> Indented<T> {
    /// Wraps `inner` with the default indent of 2 columns per level.
    pub fn new(inner: T) -> Self {
        Self { inner, indent: 2 }
    }

    /// Sets the spacer columns per depth level. `0` disables indentation.
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Columns per depth level.
    #[must_use]
    pub fn indent(&self) -> usize {
        self.indent
    }

    /// Shared access to the wrapped provider.
    pub fn inner(&self) -> &T {
        &self.inner
    }

    /// Mutable access to the wrapped provider.
    pub fn inner_mut(&mut self) -> &mut T {
        &mut self.inner
    }

    /// Unwraps the provider.
    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T> TreeProvider for Indented<T>
where
    T: TreeProvider,
    T::Node: Into<Line>,
{
    type Position = T::Position;
    type Node = Line;

    fn root(&mut self) -> Option<T::Position> {
        self.inner.root()
    }

    fn node_at(&mut self, pos: &T::Position) -> Option<Line> {
        let node = self.inner.node_at(pos)?;
        let mut line: Line = node.into();
        let depth = self.inner.depth_of(pos);
        if depth > 0 && self.indent > 0 {
            line.prepend([Segment::spacer(depth * self.indent)]);
        }
        Some(line)
    }

    fn parent_of(&mut self, pos: &T::Position) -> Option<T::Position> {
        self.inner.parent_of(pos)
    }

    fn first_child_of(&mut self, pos: &T::Position) -> Option<T::Position> {
        self.inner.first_child_of(pos)
    }

    fn last_child_of(&mut self, pos: &T::Position) -> Option<T::Position> {
        self.inner.last_child_of(pos)
    }

    fn next_sibling_of(&mut self, pos: &T::Position) -> Option<T::Position> {
        self.inner.next_sibling_of(pos)
    }

    fn prev_sibling_of(&mut self, pos: &T::Position) -> Option<T::Position> {
        self.inner.prev_sibling_of(pos)
    }
}

#[cfg(test)]
mod tests {
    use treeline_core::{SimpleNode, SimpleTree, TreePath, TreeProvider};

    use super::Indented;
    use crate::SegmentKind;

    fn chain() -> SimpleTree<&'static str> {
        // root -> d1 -> d2 -> d3
        SimpleTree::new(alloc::vec![SimpleNode::new("root").child(
            SimpleNode::new("d1").child(SimpleNode::new("d2").child(SimpleNode::new("d3"))),
        )])
    }

    #[test]
    fn spacer_width_is_depth_times_indent() {
        let mut view = Indented::new(chain());
        let d3 = TreePath::from_indices(&[0, 0, 0, 0]);

        let line = view.node_at(&d3).unwrap();
        let spacer = &line.segments()[0];
        assert_eq!(spacer.kind, SegmentKind::Spacer);
        assert_eq!(spacer.width, 6, "depth 3 at 2 columns per level");
        assert_eq!(line.text(), "      d3");
    }

    #[test]
    fn roots_are_not_indented() {
        let mut view = Indented::new(chain());
        let root = view.root().unwrap();
        let line = view.node_at(&root).unwrap();
        assert_eq!(line.segments().len(), 1);
        assert_eq!(line.text(), "root");
    }

    #[test]
    fn zero_indent_disables_the_spacer() {
        let mut view = Indented::new(chain()).with_indent(0);
        let d2 = TreePath::from_indices(&[0, 0, 0]);
        assert_eq!(view.node_at(&d2).unwrap().text(), "d2");
    }

    #[test]
    fn relations_delegate_verbatim() {
        let mut view = Indented::new(chain());
        let root = view.root().unwrap();
        let d1 = view.first_child_of(&root).unwrap();
        assert_eq!(view.parent_of(&d1), Some(root));
        assert_eq!(view.next_sibling_of(&d1), None);
    }
}
