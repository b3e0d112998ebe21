use super::*;
use crate::graph::algos::has_cycle;
use std::collections::HashSet;

/// Four nodes with a cheaper parallel B-C edge added after the first
fn diamond() -> Graph {
    let mut graph = Graph::new();
    for label in ["A", "B", "C", "D"] {
        graph.add_node(label);
    }
    graph.add_edge("A", "B", 3).unwrap();
    graph.add_edge("B", "C", 4).unwrap();
    graph.add_edge("C", "D", 5).unwrap();
    graph.add_edge("A", "C", 1).unwrap();
    graph.add_edge("B", "C", 2).unwrap();
    graph
}

/// Logical edges, one entry per connection (parallel records stay distinct)
fn logical_edges(graph: &Graph) -> Vec<(String, String, Weight)> {
    let mut edges = Vec::new();
    for label in graph.sorted_labels() {
        for edge in graph.node(label).unwrap().edges() {
            if edge.from.as_str() < edge.to.as_str() {
                edges.push((edge.from.clone(), edge.to.clone(), edge.weight));
            }
        }
    }
    edges
}

/// True when every node is reachable from the first label
fn spans(graph: &Graph) -> bool {
    let labels = graph.sorted_labels();
    let Some(&start) = labels.first() else {
        return true;
    };
    let mut seen: HashSet<&str> = HashSet::new();
    let mut stack = vec![start];
    while let Some(label) = stack.pop() {
        if !seen.insert(label) {
            continue;
        }
        for edge in graph.node(label).unwrap().edges() {
            stack.push(edge.to.as_str());
        }
    }
    seen.len() == labels.len()
}

/// Cheapest spanning subset over all edge subsets of size V-1
fn brute_force_minimum(graph: &Graph) -> Weight {
    let edges = logical_edges(graph);
    let labels = graph.sorted_labels();
    let mut best: Option<Weight> = None;

    for mask in 0u32..(1 << edges.len()) {
        if mask.count_ones() as usize != labels.len() - 1 {
            continue;
        }
        let mut candidate = Graph::new();
        for label in &labels {
            candidate.add_node(label);
        }
        let mut total: Weight = 0;
        for (bit, (from, to, weight)) in edges.iter().enumerate() {
            if mask & (1 << bit) != 0 {
                candidate.add_edge(from, to, *weight).unwrap();
                total += *weight;
            }
        }
        if spans(&candidate) && best.is_none_or(|b| total < b) {
            best = Some(total);
        }
    }

    best.expect("graph is connected")
}

#[test]
fn test_diamond_tree_weight() {
    let tree = minimum_spanning_tree(&diamond()).unwrap();
    assert_eq!(tree.node_count(), 4);
    assert_eq!(tree.edge_count(), 3);
    // A-C(1) + the cheaper parallel B-C(2) + C-D(5)
    assert_eq!(tree.total_weight(), 8);
}

#[test]
fn test_diamond_tree_shape() {
    let tree = minimum_spanning_tree(&diamond()).unwrap();
    let expected = "\
A is connected to [A->C]
B is connected to [B->C]
C is connected to [C->A, C->B, C->D]
D is connected to [D->C]";
    assert_eq!(tree.connection_dump(), expected);
}

#[test]
fn test_tree_is_acyclic_and_spanning() {
    let graph = diamond();
    let tree = minimum_spanning_tree(&graph).unwrap();
    assert!(!has_cycle(&tree));
    assert!(spans(&tree));
    assert_eq!(tree.sorted_labels(), graph.sorted_labels());
}

#[test]
fn test_matches_brute_force() {
    let graph = diamond();
    let tree = minimum_spanning_tree(&graph).unwrap();
    assert_eq!(tree.total_weight(), brute_force_minimum(&graph));
}

#[test]
fn test_matches_brute_force_dense() {
    let mut graph = Graph::new();
    for label in ["A", "B", "C", "D", "E"] {
        graph.add_node(label);
    }
    graph.add_edge("A", "B", 4).unwrap();
    graph.add_edge("A", "C", 9).unwrap();
    graph.add_edge("B", "C", 3).unwrap();
    graph.add_edge("B", "D", 7).unwrap();
    graph.add_edge("C", "D", 2).unwrap();
    graph.add_edge("C", "E", 8).unwrap();
    graph.add_edge("D", "E", 6).unwrap();

    let tree = minimum_spanning_tree(&graph).unwrap();
    assert_eq!(tree.edge_count(), 4);
    assert_eq!(tree.total_weight(), brute_force_minimum(&graph));
}

#[test]
fn test_input_tree_is_returned_whole() {
    let mut graph = Graph::new();
    for label in ["A", "B", "C"] {
        graph.add_node(label);
    }
    graph.add_edge("A", "B", 2).unwrap();
    graph.add_edge("B", "C", 5).unwrap();

    let tree = minimum_spanning_tree(&graph).unwrap();
    assert_eq!(tree.total_weight(), 7);
    assert_eq!(tree.edge_count(), 2);
}

#[test]
fn test_disconnected_graph_fails() {
    let mut graph = Graph::new();
    for label in ["A", "B", "C", "D"] {
        graph.add_node(label);
    }
    graph.add_edge("A", "B", 1).unwrap();
    graph.add_edge("C", "D", 1).unwrap();

    let err = minimum_spanning_tree(&graph).unwrap_err();
    assert!(matches!(
        err,
        TrellisError::DisconnectedGraph {
            covered: 2,
            total: 4
        }
    ));
}

#[test]
fn test_empty_graph() {
    let tree = minimum_spanning_tree(&Graph::new()).unwrap();
    assert_eq!(tree.node_count(), 0);
}

#[test]
fn test_single_node() {
    let mut graph = Graph::new();
    graph.add_node("A");
    let tree = minimum_spanning_tree(&graph).unwrap();
    assert_eq!(tree.node_count(), 1);
    assert_eq!(tree.edge_count(), 0);
}

#[test]
fn test_receiver_is_not_mutated() {
    let graph = diamond();
    let before = graph.connection_dump();
    minimum_spanning_tree(&graph).unwrap();
    assert_eq!(graph.connection_dump(), before);
}
