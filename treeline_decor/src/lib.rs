// Copyright 2026 the Treeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=treeline_decor --heading-base-level=0

//! Treeline Decor: the line decoration pipeline.
//!
//! Decorators turn the nodes of a [`TreeProvider`] into display [`Line`]s —
//! sequences of tagged, width-carrying [`Segment`]s a host can paint, style,
//! and hit-test however it likes. Each decorator wraps an inner provider,
//! delegates every relation query verbatim (decoration never changes tree
//! shape), and overrides only node construction:
//!
//! - [`Indented`] prepends a blank spacer proportional to depth.
//! - [`Arrows`] draws ancestry: continuation bars for ancestors with further
//!   siblings, a branch- or corner-shaped sibling connector, a horizontal
//!   filler, and an arrow tip. Every glyph is individually optional; `None`
//!   removes that column entirely. Configurations that cannot fit their
//!   mandatory glyphs fail at construction with [`DecorError`].
//! - [`CollapseIcons`] prepends an expanded/collapsed toggle icon for
//!   collapsible positions, optionally framed and optionally marked
//!   interactive for hosts that map presses on it to collapse toggles.
//!
//! Decorators stack by value, and each layer prepends its segments outside
//! the inner layer's output. A typical browser stack, inside out: a data
//! provider, a [`Collapsible`](treeline_collapse::Collapsible) controller,
//! `CollapseIcons` (so the icon lands directly before the node text),
//! `Arrows` or `Indented`, and a [`Cached`](treeline_core::Cached) wrapper
//! memoizing the constructed lines. The [`Collapse`](treeline_collapse::Collapse) capability forwards
//! through every decorator, so toggles issued on the outermost layer reach
//! the controller (and invalidate the memoized lines on the way).
//!
//! ```rust
//! use treeline_collapse::Collapsible;
//! use treeline_core::{SimpleNode, SimpleTree, TreeProvider};
//! use treeline_decor::{Arrows, CollapseIcons};
//!
//! let tree = SimpleTree::new(vec![
//!     SimpleNode::new("root")
//!         .child(SimpleNode::new("a").child(SimpleNode::new("a1")))
//!         .child(SimpleNode::new("b")),
//! ]);
//! let mut view = Arrows::with_defaults(CollapseIcons::new(Collapsible::all_expanded(tree)));
//!
//! let mut lines = Vec::new();
//! let mut cursor = view.root();
//! while let Some(pos) = cursor {
//!     lines.push(view.node_at(&pos).unwrap().text());
//!     cursor = view.next_depth_first(&pos);
//! }
//! assert_eq!(lines, ["[-]root", "├➤[-]a", "│ └➤a1", "└➤b"]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.
//!
//! [`TreeProvider`]: treeline_core::TreeProvider

#![no_std]

extern crate alloc;

mod arrows;
mod error;
mod forward;
mod icons;
mod indent;
mod line;

pub use arrows::{ArrowStyle, Arrows};
pub use error::DecorError;
pub use icons::{CollapseIcons, IconStyle};
pub use indent::Indented;
pub use line::{Line, Segment, SegmentKind};
