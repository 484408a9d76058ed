// Copyright 2026 the Treeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A memoizing wrapper around a tree provider.

use crate::{Memo, TreeProvider};

/// Wraps a provider and memoizes the artifacts that are expensive to
/// reproduce: the constructed node for a position (in a browser stack this
/// is the fully decorated line) and the next/prev depth-first neighbors
/// (whose ancestor walks are linear in tree depth).
///
/// All relation primitives delegate verbatim, so `Cached` never changes what
/// the wrapped provider reports, it only remembers it. An outer `Cached`
/// therefore depends on, but does not duplicate, anything computed below it.
///
/// Invalidation is the caller's contract: state changes that alter a cached
/// value must be followed by the matching [`Cached::invalidate_node`] /
/// [`Cached::invalidate_next`] / [`Cached::invalidate_prev`] calls, or by
/// [`Cached::clear`] after wholesale data changes. The collapse layer
/// forwards its toggles through this wrapper and performs the precise
/// per-toggle invalidation itself.
pub struct Cached<T: TreeProvider> {
    inner: T,
    nodes: Memo<T::Position, T::Node>,
    next: Memo<T::Position, Option<T::Position>>,
    prev: Memo<T::Position, Option<T::Position>>,
}

impl<T: TreeProvider + core::fmt::Debug> core::fmt::Debug for Cached<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Cached")
            .field("inner", &self.inner)
            .field("nodes_cached", &self.nodes.len())
            .field("next_cached", &self.next.len())
            .field("prev_cached", &self.prev.len())
            .finish_non_exhaustive()
    }
}

impl<T: TreeProvider> Cached<T> {
    /// Wraps `inner` with empty caches.
    pub fn new(inner: T) -> Self {
        Self {
            inner,
            nodes: Memo::new(),
            next: Memo::new(),
            prev: Memo::new(),
        }
    }

    /// Shared access to the wrapped provider.
    pub fn inner(&self) -> &T {
        &self.inner
    }

    /// Mutable access to the wrapped provider.
    ///
    /// The caches are left untouched; callers that change anything a cached
    /// artifact was derived from must invalidate the affected entries or
    /// [`Cached::clear`] the wrapper.
    pub fn inner_mut(&mut self) -> &mut T {
        &mut self.inner
    }

    /// Unwraps the provider, discarding the caches.
    pub fn into_inner(self) -> T {
        self.inner
    }

    /// Drops every cached artifact.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.next.clear();
        self.prev.clear();
    }

    /// Forgets the constructed node for `pos`.
    pub fn invalidate_node(&mut self, pos: &T::Position) {
        let _ = self.nodes.invalidate(pos);
    }

    /// Forgets the memoized depth-first successor of `pos`.
    pub fn invalidate_next(&mut self, pos: &T::Position) {
        let _ = self.next.invalidate(pos);
    }

    /// Forgets the memoized depth-first predecessor of `pos`.
    pub fn invalidate_prev(&mut self, pos: &T::Position) {
        let _ = self.prev.invalidate(pos);
    }
}

impl<T> TreeProvider for Cached<T>
where
    T: TreeProvider,
    T::Node: Clone,
{
    type Position = T::Position;
    type Node = T::Node;

    fn root(&mut self) -> Option<T::Position> {
        self.inner.root()
    }

    fn node_at(&mut self, pos: &T::Position) -> Option<T::Node> {
        if let Some(hit) = self.nodes.get(pos) {
            return Some(hit.clone());
        }
        // Misses where the position does not resolve are not cached; the
        // position may start resolving after a provider change.
        let constructed = self.inner.node_at(pos)?;
        self.nodes.insert(pos.clone(), constructed.clone());
        Some(constructed)
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

    fn next_depth_first(&mut self, pos: &T::Position) -> Option<T::Position> {
        let inner = &mut self.inner;
        self.next
            .get_or_insert_with(pos, || inner.next_depth_first(pos))
            .clone()
    }

    fn prev_depth_first(&mut self, pos: &T::Position) -> Option<T::Position> {
        let inner = &mut self.inner;
        self.prev
            .get_or_insert_with(pos, || inner.prev_depth_first(pos))
            .clone()
    }
}
