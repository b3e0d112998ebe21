use super::*;

fn tree() -> Graph {
    let mut graph = Graph::new();
    for label in ["A", "B", "C", "D"] {
        graph.add_node(label);
    }
    graph.add_edge("A", "B", 1).unwrap();
    graph.add_edge("A", "C", 2).unwrap();
    graph.add_edge("C", "D", 3).unwrap();
    graph
}

#[test]
fn test_empty_graph_has_no_cycle() {
    assert!(!has_cycle(&Graph::new()));
}

#[test]
fn test_single_node_has_no_cycle() {
    let mut graph = Graph::new();
    graph.add_node("A");
    assert!(!has_cycle(&graph));
}

#[test]
fn test_tree_has_no_cycle() {
    assert!(!has_cycle(&tree()));
}

#[test]
fn test_extra_edge_closes_cycle() {
    let mut graph = tree();
    assert!(!has_cycle(&graph));

    // B and D are already connected through A and C
    graph.add_edge("B", "D", 9).unwrap();
    assert!(has_cycle(&graph));
}

#[test]
fn test_triangle() {
    let mut graph = Graph::new();
    for label in ["A", "B", "C"] {
        graph.add_node(label);
    }
    graph.add_edge("A", "B", 1).unwrap();
    graph.add_edge("B", "C", 1).unwrap();
    graph.add_edge("C", "A", 1).unwrap();
    assert!(has_cycle(&graph));
}

#[test]
fn test_single_edge_is_not_a_cycle() {
    let mut graph = Graph::new();
    graph.add_node("A");
    graph.add_node("B");
    graph.add_edge("A", "B", 1).unwrap();
    assert!(!has_cycle(&graph));
}

#[test]
fn test_parallel_pair_is_a_cycle() {
    let mut graph = Graph::new();
    graph.add_node("A");
    graph.add_node("B");
    graph.add_edge("A", "B", 1).unwrap();
    graph.add_edge("A", "B", 5).unwrap();
    assert!(has_cycle(&graph));
}

#[test]
fn test_self_loop_is_a_cycle() {
    let mut graph = Graph::new();
    graph.add_node("A");
    graph.add_edge("A", "A", 1).unwrap();
    assert!(has_cycle(&graph));
}

#[test]
fn test_cycle_found_across_components() {
    let mut graph = tree();
    for label in ["X", "Y", "Z"] {
        graph.add_node(label);
    }
    graph.add_edge("X", "Y", 1).unwrap();
    graph.add_edge("Y", "Z", 1).unwrap();
    graph.add_edge("Z", "X", 1).unwrap();
    assert!(has_cycle(&graph));
}

#[test]
fn test_two_acyclic_components() {
    let mut graph = tree();
    graph.add_node("X");
    graph.add_node("Y");
    graph.add_edge("X", "Y", 1).unwrap();
    assert!(!has_cycle(&graph));
}

#[test]
fn test_removing_node_can_break_cycle() {
    let mut graph = tree();
    graph.add_edge("B", "D", 9).unwrap();
    assert!(has_cycle(&graph));

    graph.remove_node("A").unwrap();
    assert!(!has_cycle(&graph));
}
