// Copyright 2026 the Treeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Splicing embedded sub-trees and sub-lists into one browsable sequence.
//!
//! An outer tree carries three kinds of nodes: plain text, a whole embedded
//! sub-tree, and a flat list. `NestedTree` merges them into a single
//! position space, and an `Indented` decorator shows the combined depth.
//!
//! Run:
//! - `cargo run -p treeline_demos --example nested_compose`

use treeline_core::{SimpleNode, SimpleTree, TreeProvider};
use treeline_decor::{Indented, Line};
use treeline_nested::{Embed, Embedded, NestedTree};

/// A node that may carry embedded content.
#[derive(Clone, Debug)]
enum Entry {
    Text(String),
    Tree(SimpleTree<Entry>),
    List(Vec<Entry>),
}

impl Entry {
    fn text(label: &str) -> Self {
        Self::Text(label.to_string())
    }
}

impl Embed for Entry {
    type Tree = SimpleTree<Entry>;
    type List = Vec<Entry>;

    fn embedded_mut(&mut self) -> Embedded<'_, SimpleTree<Entry>, Vec<Entry>> {
        match self {
            Self::Tree(tree) => Embedded::Tree(tree),
            Self::List(items) => Embedded::List(items),
            Self::Text(_) => Embedded::None,
        }
    }
}

impl From<Entry> for Line {
    fn from(entry: Entry) -> Self {
        match entry {
            Entry::Text(text) => Self::solo(text),
            Entry::Tree(_) => Self::solo("(embedded tree)"),
            Entry::List(items) => Self::solo(format!("({} attachments)", items.len())),
        }
    }
}

fn main() {
    // A mail-thread-like structure: one message embeds a quoted sub-thread,
    // another carries a flat attachment list.
    let quoted = SimpleTree::new(vec![
        SimpleNode::new(Entry::text("quoted: release plan"))
            .child(SimpleNode::new(Entry::text("quoted: ship friday?")))
            .child(SimpleNode::new(Entry::text("quoted: needs the cache fix"))),
    ]);
    let outer = SimpleTree::new(vec![
        SimpleNode::new(Entry::text("inbox"))
            .child(SimpleNode::new(Entry::Tree(quoted)))
            .child(SimpleNode::new(Entry::List(vec![
                Entry::text("notes.txt"),
                Entry::text("sizes.csv"),
            ])))
            .child(SimpleNode::new(Entry::text("see you monday"))),
    ]);

    let mut view = Indented::new(NestedTree::new(outer)).with_indent(4);

    println!("== composed sequence ==");
    let mut cursor = view.root();
    while let Some(pos) = cursor {
        if let Some(line) = view.node_at(&pos) {
            let depth = view.depth_of(&pos);
            let outer_depth = view.inner_mut().outer_depth_of(&pos);
            println!("{}  (depth {depth}, outer {outer_depth})", line.text());
        }
        cursor = view.next_depth_first(&pos);
    }
}
