//! Deterministic reverse-topological ordering of the commit graph.
//!
//! The traversal is a depth-first walk in the children direction, driven by
//! an explicit stack so arbitrarily deep histories cannot exhaust the call
//! stack. A node is emitted once all of its children have been emitted
//! (post-order), which yields child-before-parent positions throughout.
//!
//! Determinism comes from two lexicographic choices: the root set seeds the
//! stack so the smallest root is processed first, and at every node the
//! smallest unvisited child is descended into next.

use std::collections::BTreeSet;

use crate::graph::CommitGraph;

/// Linearize `graph` so that every commit precedes all of its parents.
///
/// Covers every node exactly once: under the builder's invariant each node
/// either is a root or transitively reaches one, so seeding from the root
/// set reaches the whole graph.
pub fn topo_order(graph: &CommitGraph) -> Vec<String> {
    let mut order = Vec::with_capacity(graph.len());
    let mut visited = BTreeSet::new();

    // Reversed so the lexicographically smallest root sits on top.
    let mut stack: Vec<&str> = graph.roots();
    stack.reverse();

    while let Some(&top) = stack.last() {
        visited.insert(top);
        let next_child = graph.node(top).and_then(|node| {
            node.children()
                .iter()
                .map(String::as_str)
                .find(|child| !visited.contains(child))
        });
        match next_child {
            Some(child) => stack.push(child),
            None => {
                order.push(top.to_owned());
                stack.pop();
            }
        }
    }

    tracing::debug!(commits = order.len(), "linearized commit graph");
    order
}
