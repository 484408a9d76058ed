// Copyright 2026 the Treeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Collapse toggle icons.

use alloc::vec::Vec;

use treeline_collapse::Collapse;
use treeline_core::TreeProvider;

use crate::{Line, Segment, SegmentKind};

/// Glyph configuration for [`CollapseIcons`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct IconStyle {
    /// Icon for positions whose subtree is visible.
    pub expanded: Option<char>,
    /// Icon for positions whose subtree is hidden.
    pub collapsed: Option<char>,
    /// Optional frame before the icon.
    pub frame_open: Option<char>,
    /// Optional frame after the icon.
    pub frame_close: Option<char>,
    /// Blank columns emitted for leaf positions instead of an icon.
    pub leaf_offset: usize,
    /// Whether the icon is an activation target: the segment is marked
    /// interactive so a host can map a press on it to
    /// [`Collapse::toggle_collapsed`].
    pub selectable: bool,
}

impl Default for IconStyle {
    fn default() -> Self {
        Self {
            expanded: Some('-'),
            collapsed: Some('+'),
            frame_open: Some('['),
            frame_close: Some(']'),
            leaf_offset: 0,
            selectable: false,
        }
    }
}

/// Prepends a collapse toggle icon to every line whose position can be
/// collapsed: a collapsed position, or an expanded one with at least one
/// child.
///
/// A collapsed position reports no children through the provider contract,
/// so collapsibility is judged from the collapse state first and the child
/// relation second. Leaves get [`IconStyle::leaf_offset`] blank columns and
/// nothing else. All relation queries delegate verbatim.
#[derive(Clone, Debug)]
pub struct CollapseIcons<T> {
    inner: T,
    style: IconStyle,
}

impl<T> CollapseIcons<T> {
    /// Wraps `inner` with the default `[-]`/`[+]` icons.
    pub fn new(inner: T) -> Self {
        Self {
            inner,
            style: IconStyle::default(),
        }
    }

    /// Replaces the icon configuration.
    #[must_use]
    pub fn with_style(mut self, style: IconStyle) -> Self {
        self.style = style;
        self
    }

    /// The active configuration.
    #[must_use]
    pub fn style(&self) -> &IconStyle {
        &self.style
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

impl<T> TreeProvider for CollapseIcons<T>
where
    T: Collapse,
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

        let collapsed = self.inner.is_collapsed(pos);
        let collapsible = collapsed || self.inner.first_child_of(pos).is_some();
        let glyph = if collapsed {
            self.style.collapsed
        } else {
            self.style.expanded
        };

        if collapsible && let Some(glyph) = glyph {
            let mut prefix = Vec::new();
            if let Some(open) = self.style.frame_open {
                prefix.push(Segment::glyph(SegmentKind::Icon, open));
            }
            let mut icon = Segment::glyph(SegmentKind::Icon, glyph);
            if self.style.selectable {
                icon = icon.interactive();
            }
            prefix.push(icon);
            if let Some(close) = self.style.frame_close {
                prefix.push(Segment::glyph(SegmentKind::Icon, close));
            }
            line.prepend(prefix);
        } else if self.style.leaf_offset > 0 {
            line.prepend([Segment::spacer(self.style.leaf_offset)]);
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
