//! In-memory commit ancestry graph.
//!
//! Edges are adjacency sets keyed by hash, never object links, so the graph
//! is cycle-free at the structural level and trivially serializable. The
//! parent/child relation is kept symmetric at all times: inserting a record
//! updates both endpoints in the same call.

use std::collections::{BTreeMap, BTreeSet};

use crate::odb::ParsedCommit;

/// One commit in the ancestry graph.
///
/// Created on first reference, either as the subject of a parsed object or as
/// a parent referenced by another. Sets only ever grow.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitNode {
    parents: BTreeSet<String>,
    children: BTreeSet<String>,
}

impl CommitNode {
    /// Hashes of the commits this one directly descends from.
    pub fn parents(&self) -> &BTreeSet<String> {
        &self.parents
    }

    /// Hashes of the commits directly descending from this one.
    pub fn children(&self) -> &BTreeSet<String> {
        &self.children
    }

    /// A root commit has no parents.
    pub fn is_root(&self) -> bool {
        self.parents.is_empty()
    }
}

/// The full ancestry graph, owning every node for the run's duration.
#[derive(Debug, Default)]
pub struct CommitGraph {
    nodes: BTreeMap<String, CommitNode>,
}

impl CommitGraph {
    /// Build a graph from parsed commit records, in any order.
    pub fn from_records(records: impl IntoIterator<Item = ParsedCommit>) -> Self {
        let mut graph = Self::default();
        for record in records {
            graph.insert(record);
        }
        graph
    }

    /// Insert one commit record.
    ///
    /// A node is created for the commit and for each of its parents unless
    /// one already exists; a parent referenced before (or without) its own
    /// object being seen is a valid node with an empty parent set.
    pub fn insert(&mut self, record: ParsedCommit) {
        let ParsedCommit { id, parents } = record;
        for parent in &parents {
            self.nodes
                .entry(parent.clone())
                .or_default()
                .children
                .insert(id.clone());
        }
        self.nodes.entry(id).or_default().parents.extend(parents);
    }

    /// Look up a node by hash.
    pub fn node(&self, hash: &str) -> Option<&CommitNode> {
        self.nodes.get(hash)
    }

    /// All hashes with an empty parent set, in ascending lexicographic order.
    pub fn roots(&self) -> Vec<&str> {
        self.nodes
            .iter()
            .filter(|(_, node)| node.is_root())
            .map(|(hash, _)| hash.as_str())
            .collect()
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the graph has no nodes at all.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
