//! Graph construction and bookkeeping
//!
//! The graph owns its nodes in a label-keyed map. Map iteration order is
//! unordered; every operation that needs determinism (dump output, start-node
//! selection, component sweeps) goes through `sorted_labels`.

use std::collections::HashMap;
use std::fmt;

use crate::error::{Result, TrellisError};
use crate::graph::types::{Edge, MstSummary, PathResult, Weight};

/// A labeled vertex and its adjacency list.
///
/// The list holds only records where this node is the local `from`; the
/// mirrored record lives on the other endpoint. Insertion order is preserved.
#[derive(Debug, Clone)]
pub struct Node {
    label: String,
    edges: Vec<Edge>,
}

impl Node {
    fn new(label: &str) -> Self {
        Node {
            label: label.to_string(),
            edges: Vec::new(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }
}

/// Weighted undirected graph keyed by node label
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: HashMap<String, Node>,
}

impl Graph {
    pub fn new() -> Self {
        Graph::default()
    }

    /// Insert a node if absent. Re-adding an existing label is a no-op.
    pub fn add_node(&mut self, label: &str) {
        self.nodes
            .entry(label.to_string())
            .or_insert_with(|| Node::new(label));
    }

    /// Connect two existing nodes with an undirected edge.
    ///
    /// Appends the two mirrored records described in [`Edge`]. Re-connecting
    /// an already connected pair accumulates a parallel edge; the algorithms
    /// prefer the cheaper record on their own.
    pub fn add_edge(&mut self, from: &str, to: &str, weight: Weight) -> Result<()> {
        self.require(from)?;
        self.require(to)?;

        self.push_record(from, to, weight);
        self.push_record(to, from, weight);
        Ok(())
    }

    fn push_record(&mut self, from: &str, to: &str, weight: Weight) {
        if let Some(node) = self.nodes.get_mut(from) {
            node.edges.push(Edge::new(from, to, weight));
        }
    }

    /// Remove every record connecting the pair, in both directions.
    /// Parallel edges between the two labels are all removed at once.
    pub fn remove_edge(&mut self, from: &str, to: &str) -> Result<()> {
        self.require(from)?;
        self.require(to)?;

        let removed = self.drop_records(from, to) + self.drop_records(to, from);
        if removed == 0 {
            return Err(TrellisError::EdgeNotFound {
                from: from.to_string(),
                to: to.to_string(),
            });
        }
        Ok(())
    }

    fn drop_records(&mut self, at: &str, other: &str) -> usize {
        match self.nodes.get_mut(at) {
            Some(node) => {
                let before = node.edges.len();
                node.edges.retain(|edge| edge.to != other);
                before - node.edges.len()
            }
            None => 0,
        }
    }

    /// Remove a node and every record referencing it from its neighbors.
    pub fn remove_node(&mut self, label: &str) -> Result<()> {
        if self.nodes.remove(label).is_none() {
            return Err(TrellisError::unknown_node(label));
        }
        for node in self.nodes.values_mut() {
            node.edges.retain(|edge| edge.to != label);
        }
        Ok(())
    }

    pub fn contains(&self, label: &str) -> bool {
        self.nodes.contains_key(label)
    }

    pub fn node(&self, label: &str) -> Option<&Node> {
        self.nodes.get(label)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of logical connections (each is stored as two mirrored records)
    pub fn edge_count(&self) -> usize {
        let records: usize = self.nodes.values().map(|node| node.edges.len()).sum();
        records / 2
    }

    /// Sum of logical edge weights
    pub fn total_weight(&self) -> Weight {
        let doubled: Weight = self
            .nodes
            .values()
            .flat_map(|node| node.edges.iter())
            .map(|edge| edge.weight)
            .sum();
        doubled / 2
    }

    /// Node labels in sorted order
    pub fn sorted_labels(&self) -> Vec<&str> {
        let mut labels: Vec<&str> = self.nodes.keys().map(String::as_str).collect();
        labels.sort_unstable();
        labels
    }

    fn require(&self, label: &str) -> Result<()> {
        if self.nodes.contains_key(label) {
            Ok(())
        } else {
            Err(TrellisError::unknown_node(label))
        }
    }

    /// Single-source shortest path between two labels
    pub fn shortest_path(&self, from: &str, to: &str) -> Result<PathResult> {
        crate::graph::algos::shortest_path(self, from, to)
    }

    /// Extract a minimum spanning tree as a freshly built graph
    pub fn minimum_spanning_tree(&self) -> Result<Graph> {
        crate::graph::algos::minimum_spanning_tree(self)
    }

    /// True when any connected component contains a cycle
    pub fn has_cycle(&self) -> bool {
        crate::graph::algos::has_cycle(self)
    }

    /// Size and weight summary, used for spanning-tree output
    pub fn summary(&self) -> MstSummary {
        MstSummary {
            nodes: self.node_count(),
            edges: self.edge_count(),
            total_weight: self.total_weight(),
        }
    }

    /// Textual dump of the adjacency structure: one line per node with at
    /// least one edge, `<label> is connected to [<from>-><to>, ...]`.
    pub fn connection_dump(&self) -> String {
        let mut lines = Vec::new();
        for label in self.sorted_labels() {
            let Some(node) = self.nodes.get(label) else {
                continue;
            };
            if node.edges.is_empty() {
                continue;
            }
            let rendered: Vec<String> = node.edges.iter().map(Edge::to_string).collect();
            lines.push(format!("{} is connected to [{}]", label, rendered.join(", ")));
        }
        lines.join("\n")
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.connection_dump())
    }
}
