#![cfg(feature = "petgraph")]

use flow_dag::{ancestors, reachable, topological_order};
use petgraph::graph::{DiGraph, NodeIndex};

fn pos(order: &[NodeIndex], node: NodeIndex) -> usize {
    order.iter().position(|&x| x == node).unwrap()
}

#[test]
fn test_walks_over_petgraph_diamond() {
    // Shape: A -> B, A -> C, B -> D, C -> D, plus isolated Z
    let mut g: DiGraph<&str, ()> = DiGraph::new();
    let a = g.add_node("A");
    let b = g.add_node("B");
    let c = g.add_node("C");
    let d = g.add_node("D");
    let z = g.add_node("Z");
    g.extend_with_edges([(a, b), (a, c), (b, d), (c, d)]);

    let down = reachable(&g, [a]);
    assert_eq!(down.len(), 4);
    assert!(!down.contains(&z));

    let up = ancestors(&g, d);
    assert_eq!(up.len(), 4);
    assert_eq!(up[&d], None);
    assert_eq!(up[&b], Some(d));

    let order = topological_order(&g, [d]);
    assert_eq!(order.len(), 4);
    assert!(pos(&order, b) < pos(&order, a));
    assert!(pos(&order, c) < pos(&order, a));
    assert!(!order.contains(&z));
}

#[test]
fn test_parallel_edges_keep_counts_balanced() {
    let mut g: DiGraph<(), ()> = DiGraph::new();
    let a = g.add_node(());
    let b = g.add_node(());
    g.add_edge(a, b, ());
    g.add_edge(a, b, ());

    assert_eq!(topological_order(&g, [b]), vec![b, a]);
}
