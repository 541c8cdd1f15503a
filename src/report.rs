//! Read-only reporting over a built node sequence
//!
//! Diagnostic summaries only, nothing here feeds back into the build.

use std::collections::HashMap;

use itertools::Itertools;
use termtree::Tree;

use crate::domain::node::Node;
use crate::domain::taxonomy::{Level, LEVELS};

/// Number of nodes per level, in rank order.
pub fn level_counts(nodes: &[Node]) -> Vec<(Level, usize)> {
    LEVELS
        .iter()
        .map(|&level| {
            let count = nodes.iter().filter(|n| n.level() == Some(level)).count();
            (level, count)
        })
        .collect()
}

/// Titles occurring on more than one node, with occurrence counts.
///
/// A repeated title means the same name was reached via different parents or
/// at different levels; within one path it would have been deduplicated.
pub fn duplicate_titles(nodes: &[Node]) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for node in nodes {
        *counts.entry(node.title.as_str()).or_default() += 1;
    }
    counts
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(title, count)| (title.to_string(), count))
        .sorted_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)))
        .collect()
}

/// Render the hierarchy as display trees, one per root node.
///
/// Children appear in their stored first-encounter order.
pub fn render_trees(nodes: &[Node]) -> Vec<Tree<String>> {
    let by_id: HashMap<&str, &Node> = nodes.iter().map(|n| (n.id.as_str(), n)).collect();
    nodes
        .iter()
        .filter(|n| n.is_root())
        .map(|root| subtree(root, &by_id))
        .collect()
}

fn subtree(node: &Node, by_id: &HashMap<&str, &Node>) -> Tree<String> {
    let leaves: Vec<Tree<String>> = node
        .children
        .iter()
        .filter_map(|id| by_id.get(id.as_str()))
        .map(|child| subtree(child, by_id))
        .collect();
    Tree::new(node.title.clone()).with_leaves(leaves)
}
