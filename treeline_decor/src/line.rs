// Copyright 2026 the Treeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The renderer-agnostic line model decorators produce.

use alloc::string::String;
use core::iter;

use smallvec::SmallVec;

/// What a segment of a line represents.
///
/// The tag lets a host style or hit-test columns without re-parsing the
/// text: paint bars dim, map a pointer press on an [`SegmentKind::Icon`]
/// segment to a collapse toggle, and so on.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    /// The node's own content.
    Content,
    /// Blank indentation or alignment space.
    Spacer,
    /// Vertical continuation bar of an ancestor with further siblings.
    Bar,
    /// Sibling connector: branch-shaped or corner-shaped.
    Connector,
    /// Horizontal filler between connector and arrow tip.
    Filler,
    /// Arrow tip directly before the content.
    Tip,
    /// Collapse toggle icon (including its frame).
    Icon,
}

/// One column run of a line: text, its width in columns, and a kind tag.
///
/// Widths are plain column counts in whatever unit the host measures in;
/// decorator-generated segments are one column per glyph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segment {
    /// What this segment represents.
    pub kind: SegmentKind,
    /// The segment's text.
    pub text: String,
    /// Width in columns.
    pub width: usize,
    /// Whether an activation on this segment is meaningful to the host
    /// (used by selectable collapse icons).
    pub interactive: bool,
}

impl Segment {
    /// A content segment; width is the character count.
    pub fn content(text: impl Into<String>) -> Self {
        let text = text.into();
        let width = text.chars().count();
        Self {
            kind: SegmentKind::Content,
            text,
            width,
            interactive: false,
        }
    }

    /// A single-glyph segment of the given kind.
    pub fn glyph(kind: SegmentKind, glyph: char) -> Self {
        let mut text = String::new();
        text.push(glyph);
        Self {
            kind,
            text,
            width: 1,
            interactive: false,
        }
    }

    /// A glyph repeated `width` times, as used by horizontal fillers.
    pub fn repeated(kind: SegmentKind, glyph: char, width: usize) -> Self {
        Self {
            kind,
            text: iter::repeat_n(glyph, width).collect(),
            width,
            interactive: false,
        }
    }

    /// A blank segment of the given width.
    pub fn spacer(width: usize) -> Self {
        Self::repeated(SegmentKind::Spacer, ' ', width)
    }

    /// Marks the segment as an activation target.
    #[must_use]
    pub fn interactive(mut self) -> Self {
        self.interactive = true;
        self
    }
}

/// A constructed display line: the node content preceded by decoration
/// segments, left to right.
///
/// `width` is the total required columns, which is the only sizing the core
/// reports; everything else about presentation is the host's business.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Line {
    segments: SmallVec<[Segment; 8]>,
}

impl Line {
    /// A line holding only a content segment.
    pub fn solo(text: impl Into<String>) -> Self {
        let mut segments = SmallVec::new();
        segments.push(Segment::content(text));
        Self { segments }
    }

    /// The segments, left to right.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Total required columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.segments.iter().map(|s| s.width).sum()
    }

    /// Appends a segment.
    pub fn push(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    /// Inserts segments before everything already present, keeping their
    /// order. Decorators use this to stack their prefix outside the inner
    /// layer's output.
    pub fn prepend(&mut self, prefix: impl IntoIterator<Item = Segment>) {
        self.segments.insert_many(0, prefix);
    }

    /// The text of the first content segment, if any.
    pub fn content(&self) -> Option<&str> {
        self.segments
            .iter()
            .find(|s| s.kind == SegmentKind::Content)
            .map(|s| s.text.as_str())
    }

    /// The full line as one string, decoration included.
    pub fn text(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            out.push_str(&segment.text);
        }
        out
    }
}

impl From<String> for Line {
    fn from(text: String) -> Self {
        Self::solo(text)
    }
}

impl From<&str> for Line {
    fn from(text: &str) -> Self {
        Self::solo(text)
    }
}
