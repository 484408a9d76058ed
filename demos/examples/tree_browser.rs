// Copyright 2026 the Treeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A full browser stack over a static tree, printed to stdout.
//!
//! This example shows how to combine:
//! - `treeline_core` for the data source and line memoization,
//! - `treeline_collapse` for hiding subtrees,
//! - `treeline_decor` for arrows and collapse icons,
//! - `treeline_list` for focus and sequential navigation.
//!
//! Run:
//! - `cargo run -p treeline_demos --example tree_browser`

use treeline_collapse::Collapsible;
use treeline_core::{Cached, SimpleNode, SimpleTree, TreePath};
use treeline_decor::{ArrowStyle, Arrows, CollapseIcons, IconStyle};
use treeline_list::TreeList;

fn sample() -> SimpleTree<String> {
    SimpleTree::new(vec![
        SimpleNode::new("projects".to_string())
            .child(
                SimpleNode::new("treeline".to_string())
                    .child(SimpleNode::new("Cargo.toml".to_string()))
                    .child(
                        SimpleNode::new("src".to_string())
                            .child(SimpleNode::new("lib.rs".to_string()))
                            .child(SimpleNode::new("provider.rs".to_string())),
                    ),
            )
            .child(
                SimpleNode::new("notes".to_string())
                    .child(SimpleNode::new("todo.txt".to_string())),
            ),
    ])
}

fn render<M>(list: &mut TreeList<M>, heading: &str)
where
    M: treeline_core::TreeProvider<Node = treeline_decor::Line>,
{
    println!("\n== {heading} ==");
    let focus = list.focus().cloned();
    let Some(mut pos) = list.model_mut().root() else {
        println!("(empty)");
        return;
    };
    loop {
        let line = list
            .model_mut()
            .node_at(&pos)
            .map(|l| l.text())
            .unwrap_or_default();
        let marker = if Some(&pos) == focus.as_ref() { ">" } else { " " };
        println!("{marker} {line}");
        match list.model_mut().next_depth_first(&pos) {
            Some(next) => pos = next,
            None => break,
        }
    }
}

fn main() {
    // Build the stack inside out: data, collapse state, decoration, cache.
    let style = ArrowStyle {
        indent: 3,
        ..ArrowStyle::default()
    };
    let icons = IconStyle {
        leaf_offset: 0,
        selectable: true,
        ..IconStyle::default()
    };
    let stack = Cached::new(
        Arrows::new(
            CollapseIcons::new(Collapsible::all_expanded(sample())).with_style(icons),
            style,
        )
        .expect("default-sized indent fits the default glyphs"),
    );
    let mut list = TreeList::new(stack);

    render(&mut list, "everything expanded");

    // Collapse the src directory and watch the subtree disappear.
    let src = TreePath::from_indices(&[0, 0, 1]);
    list.set_focus(src);
    list.toggle_focused();
    render(&mut list, "src collapsed, focus on it");

    // Step the focus around with the semantic browser actions.
    list.focus_parent();
    list.focus_next_sibling();
    render(&mut list, "focus moved to the parent's next sibling");

    // Expand everything again through the adapter.
    list.set_focus(TreePath::from_indices(&[0, 0, 1]));
    list.expand_focused();
    render(&mut list, "src expanded again");

    println!("\nrevision after the session: {:?}", list.revision());
}
