// Copyright 2026 the Treeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Index-path positions for array-backed trees.

use core::fmt;

use smallvec::SmallVec;

/// A position in an array-backed tree: the sequence of child indices leading
/// from a top-level root to the node.
///
/// The first index selects the top-level node (`[0]` is the first root, so
/// top-level nodes of a forest are siblings of each other), each further
/// index selects a child. A path is never empty.
///
/// Paths compare and hash structurally, which makes them usable directly as
/// cache keys. Sibling and child steppers are pure index arithmetic; whether
/// the stepped-to position actually exists is for the owning provider to
/// decide.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct TreePath(SmallVec<[usize; 8]>);

impl TreePath {
    /// The path of the top-level node at `index`.
    #[must_use]
    pub fn toplevel(index: usize) -> Self {
        let mut indices = SmallVec::new();
        indices.push(index);
        Self(indices)
    }

    /// Builds a path from explicit indices.
    ///
    /// # Panics
    ///
    /// Panics if `indices` is empty; an empty path addresses nothing.
    #[must_use]
    pub fn from_indices(indices: &[usize]) -> Self {
        assert!(!indices.is_empty(), "a tree path must have at least one index");
        Self(SmallVec::from_slice(indices))
    }

    /// The child indices from the top level down to this node.
    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    /// The index of this node within its sibling chain.
    #[must_use]
    pub fn leaf_index(&self) -> usize {
        self.0[self.0.len() - 1]
    }

    /// Depth of the node: `0` for top-level nodes.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.0.len() - 1
    }

    /// The parent path, or `None` for top-level nodes.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        if self.0.len() > 1 {
            Some(Self(SmallVec::from_slice(&self.0[..self.0.len() - 1])))
        } else {
            None
        }
    }

    /// The path of this node's child at `index`.
    #[must_use]
    pub fn child(&self, index: usize) -> Self {
        let mut indices = self.0.clone();
        indices.push(index);
        Self(indices)
    }

    /// The path one step further along the sibling chain.
    #[must_use]
    pub fn next_sibling(&self) -> Self {
        let mut indices = self.0.clone();
        let last = indices.len() - 1;
        indices[last] += 1;
        Self(indices)
    }

    /// The path one step back along the sibling chain, or `None` for the
    /// first sibling.
    #[must_use]
    pub fn prev_sibling(&self) -> Option<Self> {
        if self.leaf_index() == 0 {
            return None;
        }
        let mut indices = self.0.clone();
        let last = indices.len() - 1;
        indices[last] -= 1;
        Some(Self(indices))
    }
}

impl fmt::Debug for TreePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TreePath{:?}", self.0.as_slice())
    }
}
