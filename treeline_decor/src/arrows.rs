// Copyright 2026 the Treeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ancestry-line decoration: bars, sibling connectors, and arrow tips.

use alloc::vec::Vec;

use treeline_core::TreeProvider;

use crate::{DecorError, Line, Segment, SegmentKind};

/// Glyph configuration for [`Arrows`].
///
/// `indent` is the number of columns per depth level. Within it, the position's
/// own level renders a sibling connector (1 column), a horizontal filler
/// (`indent - 2` columns), and an arrow tip (1 column); each ancestor level
/// renders a continuation bar (1 column) and blank space (`indent - 1`
/// columns).
///
/// Every glyph is optional: `None` removes that element's columns entirely —
/// the line gets narrower by exactly the element's width — rather than
/// rendering blank space in its place.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ArrowStyle {
    /// Columns per depth level.
    pub indent: usize,
    /// Vertical continuation bar for ancestors with further siblings.
    pub bar: Option<char>,
    /// Connector for positions with a following sibling.
    pub branch: Option<char>,
    /// Connector for last children.
    pub corner: Option<char>,
    /// Horizontal filler between connector and tip.
    pub hbar: Option<char>,
    /// Arrow tip directly before the content.
    pub tip: Option<char>,
}

impl Default for ArrowStyle {
    fn default() -> Self {
        Self {
            indent: 2,
            bar: Some('\u{2502}'),    // │
            branch: Some('\u{251C}'), // ├
            corner: Some('\u{2514}'), // └
            hbar: Some('\u{2500}'),   // ─
            tip: Some('\u{27A4}'),    // ➤
        }
    }
}

impl ArrowStyle {
    /// `true` if the connector column is rendered at all.
    fn has_connector(&self) -> bool {
        self.branch.is_some() || self.corner.is_some()
    }

    /// Columns the enabled mandatory glyphs need within one indent level.
    fn required(&self) -> usize {
        usize::from(self.has_connector()) + usize::from(self.tip.is_some())
    }

    /// Checks that `indent` can fit the enabled mandatory glyphs.
    pub fn validate(&self) -> Result<(), DecorError> {
        let required = self.required();
        if self.indent < required {
            return Err(DecorError::InsufficientIndent {
                indent: self.indent,
                required,
            });
        }
        Ok(())
    }
}

/// Decorates every non-root line with its ancestry: one cell per ancestor
/// level (continuation bar or blank), then the position's own connector,
/// filler, and arrow tip.
///
/// Construction validates the configuration (see [`ArrowStyle::validate`]);
/// line construction itself cannot fail. All relation queries delegate
/// verbatim to the wrapped provider.
#[derive(Clone, Debug)]
pub struct Arrows<T> {
    inner: T,
    style: ArrowStyle,
}

impl<T> Arrows<T> {
    /// Wraps `inner`, failing if `style` cannot fit its mandatory glyphs.
    pub fn new(inner: T, style: ArrowStyle) -> Result<Self, DecorError> {
        style.validate()?;
        Ok(Self { inner, style })
    }

    /// Wraps `inner` with the default Unicode glyph set.
    pub fn with_defaults(inner: T) -> Self {
        Self {
            inner,
            style: ArrowStyle::default(),
        }
    }

    /// The active configuration.
    #[must_use]
    pub fn style(&self) -> &ArrowStyle {
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

impl<T: TreeProvider> Arrows<T> {
    /// Decoration segments for `pos`, empty for top-level positions.
    fn prefix_for(&mut self, pos: &T::Position) -> Vec<Segment> {
        let mut prefix = Vec::new();
        let Some(parent) = self.inner.parent_of(pos) else {
            return prefix;
        };
        let style = self.style;

        // One cell per ancestor level below the top, outermost first: a bar
        // where the ancestor has a further sibling, blank space where the
        // subtree is already closed.
        let mut continuation = Vec::new();
        let mut cursor = parent;
        while let Some(grandparent) = self.inner.parent_of(&cursor) {
            continuation.push(self.inner.next_sibling_of(&cursor).is_some());
            cursor = grandparent;
        }
        for &has_more in continuation.iter().rev() {
            if let Some(bar) = style.bar {
                prefix.push(if has_more {
                    Segment::glyph(SegmentKind::Bar, bar)
                } else {
                    Segment::spacer(1)
                });
            }
            if style.indent > 1 {
                prefix.push(Segment::spacer(style.indent - 1));
            }
        }

        // The position's own cell: connector, filler, tip.
        if style.has_connector() {
            let glyph = if self.inner.next_sibling_of(pos).is_some() {
                style.branch
            } else {
                style.corner
            };
            prefix.push(match glyph {
                Some(glyph) => Segment::glyph(SegmentKind::Connector, glyph),
                None => Segment::spacer(1),
            });
        }
        if let Some(hbar) = style.hbar {
            let width = style.indent.saturating_sub(2);
            if width > 0 {
                prefix.push(Segment::repeated(SegmentKind::Filler, hbar, width));
            }
        }
        if let Some(tip) = style.tip {
            prefix.push(Segment::glyph(SegmentKind::Tip, tip));
        }
        prefix
    }
}

impl<T> TreeProvider for Arrows<T>
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
        line.prepend(self.prefix_for(pos));
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
    use alloc::string::String;
    use alloc::vec::Vec;

    use treeline_core::{SimpleNode, SimpleTree, TreeProvider};

    use super::{ArrowStyle, Arrows};
    use crate::DecorError;

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

    fn rendered<T>(view: &mut T) -> Vec<String>
    where
        T: TreeProvider<Node = crate::Line>,
    {
        let mut lines = Vec::new();
        let mut cursor = view.root();
        while let Some(pos) = cursor {
            lines.push(view.node_at(&pos).unwrap().text());
            cursor = view.next_depth_first(&pos);
        }
        lines
    }

    #[test]
    fn default_glyphs_draw_bars_connectors_and_tips() {
        let mut view = Arrows::with_defaults(sample());
        assert_eq!(
            rendered(&mut view),
            ["root", "├➤A", "│ ├➤A1", "│ └➤A2", "└➤B"],
        );
    }

    #[test]
    fn closed_subtrees_leave_blank_ancestor_cells() {
        // A single chain: every ancestor is a last child, so ancestor cells
        // render as blanks instead of bars.
        let tree = SimpleTree::new(alloc::vec![SimpleNode::new("root").child(
            SimpleNode::new("A").child(SimpleNode::new("A1").child(SimpleNode::new("deep"))),
        )]);
        let mut view = Arrows::with_defaults(tree);
        assert_eq!(rendered(&mut view), ["root", "└➤A", "  └➤A1", "    └➤deep"]);
    }

    #[test]
    fn wider_indent_grows_fillers_and_spacing() {
        let style = ArrowStyle {
            indent: 4,
            ..ArrowStyle::default()
        };
        let mut view = Arrows::new(sample(), style).unwrap();
        assert_eq!(
            rendered(&mut view),
            ["root", "├──➤A", "│   ├──➤A1", "│   └──➤A2", "└──➤B"],
        );
    }

    #[test]
    fn disabling_the_tip_narrows_lines_by_its_width() {
        let mut with_tip = Arrows::with_defaults(sample());
        let with_tip_lines: Vec<_> = {
            let mut out = Vec::new();
            let mut cursor = with_tip.root();
            while let Some(pos) = cursor {
                out.push(with_tip.node_at(&pos).unwrap());
                cursor = with_tip.next_depth_first(&pos);
            }
            out
        };

        let style = ArrowStyle {
            tip: None,
            ..ArrowStyle::default()
        };
        let mut without_tip = Arrows::new(sample(), style).unwrap();
        let mut cursor = without_tip.root();
        let mut index = 0;
        while let Some(pos) = cursor {
            let narrow = without_tip.node_at(&pos).unwrap();
            let wide = &with_tip_lines[index];
            if index == 0 {
                // The root carries no decoration either way.
                assert_eq!(narrow.width(), wide.width());
            } else {
                assert_eq!(narrow.width() + 1, wide.width());
            }
            cursor = without_tip.next_depth_first(&pos);
            index += 1;
        }
        assert_eq!(index, 5, "every line was compared");
    }

    #[test]
    fn ascii_glyph_set() {
        let style = ArrowStyle {
            indent: 4,
            bar: Some('|'),
            branch: Some('+'),
            corner: Some('`'),
            hbar: Some('-'),
            tip: Some('>'),
        };
        let mut view = Arrows::new(sample(), style).unwrap();
        assert_eq!(
            rendered(&mut view),
            ["root", "+-->A", "|   +-->A1", "|   `-->A2", "`-->B"],
        );
    }

    #[test]
    fn insufficient_indent_is_a_construction_error() {
        let style = ArrowStyle {
            indent: 1,
            ..ArrowStyle::default()
        };
        assert_eq!(
            Arrows::new(sample(), style).err(),
            Some(DecorError::InsufficientIndent {
                indent: 1,
                required: 2,
            }),
        );
    }

    #[test]
    fn connector_only_fits_a_single_column_indent() {
        let style = ArrowStyle {
            indent: 1,
            bar: None,
            hbar: None,
            tip: None,
            ..ArrowStyle::default()
        };
        let mut view = Arrows::new(sample(), style).unwrap();
        assert_eq!(rendered(&mut view), ["root", "├A", "├A1", "└A2", "└B"]);
    }
}
