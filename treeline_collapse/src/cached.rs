// Copyright 2026 the Treeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Collapse forwarding through the memoizing wrapper, with precise
//! invalidation.

use treeline_core::Cached;

use crate::Collapse;

/// Toggling through a [`Cached`] wrapper invalidates exactly the entries a
/// toggle can change:
///
/// - the toggled position's constructed node (its icon flips),
/// - the toggled position's memoized successor (first child vs. next
///   sibling/kin),
/// - the memoized predecessor of the position that *follows* the toggled
///   subtree (last descendant vs. the toggled position itself).
///
/// That follower is the toggled position's next sibling or next of kin; the
/// walk never descends into the subtree, so it names the same position in
/// both collapse states. Entries for descendants stay cached: they are
/// unreachable while hidden and valid again verbatim after expansion.
impl<T> Collapse for Cached<T>
where
    T: Collapse,
    T::Node: Clone,
{
    fn is_collapsed(&mut self, pos: &T::Position) -> bool {
        self.inner_mut().is_collapsed(pos)
    }

    fn set_collapsed(&mut self, pos: &T::Position, collapsed: bool) {
        if self.inner_mut().is_collapsed(pos) == collapsed {
            return;
        }
        let follower = match self.inner_mut().next_sibling_of(pos) {
            Some(sibling) => Some(sibling),
            None => self.inner_mut().next_of_kin_of(pos),
        };

        self.inner_mut().set_collapsed(pos, collapsed);

        self.invalidate_node(pos);
        self.invalidate_next(pos);
        if let Some(follower) = &follower {
            self.invalidate_prev(follower);
        }
    }
}
