use std::collections::HashSet;

use crate::graph::model::Graph;

/// True when any connected component contains a cycle.
///
/// Depth-first walk carrying the label each node was entered from. Records
/// leading straight back to that parent are skipped (the mirrored record
/// would otherwise read as a 2-cycle); any other touch of an already-visited
/// node closes a cycle. The exclusion is by parent label, so a second
/// parallel record between the same pair does count as a cycle.
pub fn has_cycle(graph: &Graph) -> bool {
    let mut visited: HashSet<&str> = HashSet::new();

    for root in graph.sorted_labels() {
        if visited.contains(root) {
            continue;
        }
        if component_has_cycle(graph, root, &mut visited) {
            return true;
        }
    }

    false
}

fn component_has_cycle<'graph>(
    graph: &'graph Graph,
    root: &'graph str,
    visited: &mut HashSet<&'graph str>,
) -> bool {
    let mut stack: Vec<(&str, Option<&str>)> = vec![(root, None)];

    while let Some((label, parent)) = stack.pop() {
        if !visited.insert(label) {
            // Two frontier entries for one node means two distinct ways in
            return true;
        }
        let Some(node) = graph.node(label) else {
            continue;
        };
        for edge in node.edges() {
            if Some(edge.to.as_str()) == parent {
                continue;
            }
            if visited.contains(edge.to.as_str()) {
                return true;
            }
            stack.push((edge.to.as_str(), Some(label)));
        }
    }

    false
}

#[cfg(test)]
mod tests;
