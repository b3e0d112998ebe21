use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

use crate::error::{Result, TrellisError};
use crate::graph::model::Graph;
use crate::graph::types::{PathResult, Weight};

/// Frontier entry ordered by tentative distance, then label so equal-cost
/// pops are deterministic within a run.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct HeapEntry {
    pub distance: Weight,
    pub label: String,
}

/// Single-source shortest path between two labels.
///
/// Lazy-deletion Dijkstra: the frontier may hold several entries for one
/// node over time; an entry popped after its node was finalized is skipped
/// instead of being removed eagerly. An absent distance entry stands for
/// infinity.
#[tracing::instrument(skip(graph), fields(from = %from, to = %to))]
pub fn shortest_path(graph: &Graph, from: &str, to: &str) -> Result<PathResult> {
    for label in [from, to] {
        if !graph.contains(label) {
            return Err(TrellisError::unknown_node(label));
        }
    }

    let mut distances: HashMap<String, Weight> = HashMap::new();
    let mut predecessors: HashMap<String, String> = HashMap::new();
    let mut visited: HashSet<String> = HashSet::new();
    let mut frontier: BinaryHeap<Reverse<HeapEntry>> = BinaryHeap::new();

    distances.insert(from.to_string(), 0);
    frontier.push(Reverse(HeapEntry {
        distance: 0,
        label: from.to_string(),
    }));

    while let Some(Reverse(HeapEntry { distance, label })) = frontier.pop() {
        if !visited.insert(label.clone()) {
            // Stale entry: the node was already finalized by a cheaper pop
            continue;
        }

        let Some(node) = graph.node(&label) else {
            continue;
        };
        for edge in node.edges() {
            if visited.contains(&edge.to) {
                continue;
            }
            let candidate = distance + edge.weight;
            if distances
                .get(&edge.to)
                .is_none_or(|&best| candidate < best)
            {
                distances.insert(edge.to.clone(), candidate);
                predecessors.insert(edge.to.clone(), label.clone());
                frontier.push(Reverse(HeapEntry {
                    distance: candidate,
                    label: edge.to.clone(),
                }));
            }
        }
    }

    build_path(from, to, &distances, &predecessors)
}

/// Walk the predecessor map back from the target and reverse; reaching the
/// source yields the path in order, anything else means no path exists.
fn build_path(
    from: &str,
    to: &str,
    distances: &HashMap<String, Weight>,
    predecessors: &HashMap<String, String>,
) -> Result<PathResult> {
    let Some(&distance) = distances.get(to) else {
        return Err(TrellisError::Unreachable {
            from: from.to_string(),
            to: to.to_string(),
        });
    };

    let mut labels = vec![to.to_string()];
    let mut current = to;
    while current != from {
        let Some(pred) = predecessors.get(current) else {
            return Err(TrellisError::Unreachable {
                from: from.to_string(),
                to: to.to_string(),
            });
        };
        labels.push(pred.clone());
        current = pred;
    }
    labels.reverse();

    Ok(PathResult {
        from: from.to_string(),
        to: to.to_string(),
        distance,
        labels,
    })
}
