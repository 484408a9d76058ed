// Copyright 2026 the Treeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=treeline_core --heading-base-level=0

//! Treeline Core: tree providers and the depth-first position algebra.
//!
//! Treeline turns arbitrary tree-shaped data into a single linear sequence —
//! the foundation for a terminal-style tree browser. This crate holds the
//! pieces everything else builds on:
//!
//! - [`TreeProvider`]: the contract a data source implements — five local
//!   relation primitives (`parent_of`, `first_child_of`, `last_child_of`,
//!   `next_sibling_of`, `prev_sibling_of`) plus a node lookup, all keyed by
//!   an opaque, provider-chosen position type.
//! - The depth-first position algebra: [`TreeProvider::next_depth_first`] and
//!   [`TreeProvider::prev_depth_first`] derive a total pre-order over the
//!   tree from the relation primitives alone, without ever materializing it.
//!   The ancestor walks are iterative, so pathologically deep trees cannot
//!   overflow the stack.
//! - [`TreePath`] and [`SimpleTree`]: index-path positions and a fixed
//!   in-memory provider for static content and tests.
//! - [`Memo`] and [`Cached`]: position-keyed memoization and a provider
//!   wrapper that remembers constructed nodes and depth-first neighbors,
//!   with targeted invalidation.
//! - [`Revision`]: a monotonic change counter consumers poll to schedule
//!   redraws, instead of a callback registry.
//!
//! Higher layers (collapse state, line decoration, nested composition, the
//! flat list adapter) live in their own crates and compose by wrapping a
//! provider and delegating the relation primitives verbatim.
//!
//! ## Minimal example
//!
//! ```rust
//! use treeline_core::{SimpleNode, SimpleTree, TreeProvider};
//!
//! let mut tree = SimpleTree::new(vec![
//!     SimpleNode::new("root")
//!         .child(SimpleNode::new("a").child(SimpleNode::new("a1")))
//!         .child(SimpleNode::new("b")),
//! ]);
//!
//! // Walk the derived depth-first order.
//! let mut names = Vec::new();
//! let mut cursor = tree.root();
//! while let Some(pos) = cursor {
//!     names.push(tree.node_at(&pos).unwrap());
//!     cursor = tree.next_depth_first(&pos);
//! }
//! assert_eq!(names, ["root", "a", "a1", "b"]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod cached;
mod memo;
mod path;
mod provider;
mod revision;
mod simple;

pub use cached::Cached;
pub use memo::Memo;
pub use path::TreePath;
pub use provider::TreeProvider;
pub use revision::Revision;
pub use simple::{SimpleNode, SimpleTree};
