//! Shared helpers for command output

use serde_json::json;

use trellis_core::graph::Graph;

/// Adjacency structure of a graph as a JSON value
pub fn graph_json(graph: &Graph) -> serde_json::Value {
    let nodes: Vec<serde_json::Value> = graph
        .sorted_labels()
        .into_iter()
        .filter_map(|label| graph.node(label))
        .map(|node| {
            json!({
                "label": node.label(),
                "edges": node.edges(),
            })
        })
        .collect();

    json!({ "nodes": nodes })
}
