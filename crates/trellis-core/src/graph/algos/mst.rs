use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::error::{Result, TrellisError};
use crate::graph::model::Graph;
use crate::graph::types::Weight;

/// Frontier entry ordered by weight, then endpoints so equal-weight pops are
/// deterministic within a run.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct EdgeEntry {
    weight: Weight,
    from: String,
    to: String,
}

/// Extract a minimum spanning tree with Prim's algorithm.
///
/// Grows the tree from the lexicographically smallest label, one cheapest
/// frontier edge at a time. A popped edge whose target already joined the
/// tree is stale and discarded. Fails with `DisconnectedGraph` when the
/// frontier drains before every node is covered.
#[tracing::instrument(skip(graph), fields(nodes = graph.node_count()))]
pub fn minimum_spanning_tree(graph: &Graph) -> Result<Graph> {
    let mut tree = Graph::new();

    let labels = graph.sorted_labels();
    let Some(&start) = labels.first() else {
        return Ok(tree);
    };

    let mut frontier: BinaryHeap<Reverse<EdgeEntry>> = BinaryHeap::new();
    tree.add_node(start);
    push_frontier_edges(graph, &tree, start, &mut frontier);

    while tree.node_count() < graph.node_count() {
        let Some(Reverse(entry)) = frontier.pop() else {
            return Err(TrellisError::DisconnectedGraph {
                covered: tree.node_count(),
                total: graph.node_count(),
            });
        };

        if tree.contains(&entry.to) {
            // Stale entry: the target joined the tree through a cheaper edge
            continue;
        }

        tree.add_node(&entry.to);
        tree.add_edge(&entry.from, &entry.to, entry.weight)?;
        push_frontier_edges(graph, &tree, &entry.to, &mut frontier);
    }

    Ok(tree)
}

/// Push every edge of `label` whose far endpoint is still outside the tree
fn push_frontier_edges(
    graph: &Graph,
    tree: &Graph,
    label: &str,
    frontier: &mut BinaryHeap<Reverse<EdgeEntry>>,
) {
    let Some(node) = graph.node(label) else {
        return;
    };
    for edge in node.edges() {
        if !tree.contains(&edge.to) {
            frontier.push(Reverse(EdgeEntry {
                weight: edge.weight,
                from: edge.from.clone(),
                to: edge.to.clone(),
            }));
        }
    }
}

#[cfg(test)]
mod tests;
