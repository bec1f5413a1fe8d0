//! Dependency-ordered walk (Kahn's algorithm without mutating the graph).

use super::frontier::Frontier;
use super::visited::NodeSet;
use crate::graph::EdgeSource;
use std::collections::HashMap;
use std::convert::Infallible;

/// Walks `graph` so that a node is visited only after every node it points to
/// has been visited.
///
/// `start` should hold dependency-free nodes: start nodes are visited as they
/// are popped, without checking their own outgoing edges. From there, each
/// visited node releases the nodes that point to it, and a dependant is queued
/// once its last dependency has been visited.
///
/// Nodes are silently skipped when they are unreachable from `start` or when
/// one of their dependencies never becomes visitable. Members of a cycle are
/// skipped only when no start node sits on the cycle: a start node on it is
/// visited unconditionally, which can release the rest of the cycle. No
/// error is raised for skipped nodes; compare the visited nodes against the
/// graph (see [`Graph::unvisited`](crate::graph::Graph::unvisited)) to detect
/// them.
///
/// The first error returned by `visit` stops the walk and is returned
/// unchanged.
pub fn walk_topological<G, I, F, E>(graph: &G, start: I, mut visit: F) -> Result<(), E>
where
    G: EdgeSource + ?Sized,
    I: IntoIterator<Item = G::Node>,
    F: FnMut(&G::Node) -> Result<(), E>,
{
    let mut visited = NodeSet::new();
    let mut unchecked: Frontier<G::Node> = start.into_iter().collect();

    // Outgoing edges of each discovered dependant whose target is not yet visited.
    let mut remaining_deps: HashMap<G::Node, usize> = HashMap::new();

    while let Some(check) = unchecked.pop() {
        if !visited.insert(check.clone()) {
            continue;
        }

        if let Err(err) = visit(&check) {
            log::trace!("topological walk halted by visitor after {} nodes", visited.len());
            return Err(err);
        }

        for dependant in graph.in_edges(&check) {
            let remaining = remaining_deps
                .entry(dependant.clone())
                .or_insert_with(|| graph.out_degree(&dependant));

            // Already released; only reachable through an inconsistent graph.
            if *remaining == 0 {
                continue;
            }
            *remaining -= 1;

            if *remaining == 0 {
                unchecked.push(dependant);
            }
        }
    }

    if log::log_enabled!(log::Level::Debug) {
        let unresolved = remaining_deps.values().filter(|&&n| n > 0).count();
        log::debug!(
            "topological walk visited {} nodes, {} discovered dependants left unresolved",
            visited.len(),
            unresolved
        );
    }
    Ok(())
}

/// Collects the topological walk from `start` into visitation order.
pub fn topological_order<G, I>(graph: &G, start: I) -> Vec<G::Node>
where
    G: EdgeSource + ?Sized,
    I: IntoIterator<Item = G::Node>,
{
    let mut order = Vec::new();
    walk_topological(graph, start, |node| {
        order.push(node.clone());
        Ok::<(), Infallible>(())
    })
    .unwrap_or_else(|never| match never {});
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;
    use rstest::rstest;

    fn pos(order: &[&str], node: &str) -> usize {
        order.iter().position(|&x| x == node).unwrap()
    }

    fn diamond() -> Graph<&'static str> {
        // Shape: A -> B, A -> C, B -> D, C -> D
        Graph::from_edges([("A", "B"), ("A", "C"), ("B", "D"), ("C", "D")])
    }

    #[test]
    fn test_diamond_dependencies_come_first() {
        let order = topological_order(&diamond(), ["D"]);

        assert_eq!(order.len(), 4);
        assert_eq!(order[0], "D");
        assert!(pos(&order, "D") < pos(&order, "B"));
        assert!(pos(&order, "D") < pos(&order, "C"));
        assert!(pos(&order, "B") < pos(&order, "A"));
        assert!(pos(&order, "C") < pos(&order, "A"));
    }

    #[test]
    fn test_start_nodes_are_visited_without_checking_dependencies() {
        // A still has unvisited dependencies, but start nodes are emitted as-is
        // and nothing points to A.
        assert_eq!(topological_order(&diamond(), ["A"]), vec!["A"]);
    }

    #[rstest]
    #[case(vec!["D"], vec!["B", "D"])] // C waits on E forever, so A waits on C
    #[case(vec!["E"], vec!["E"])]
    #[case(vec!["D", "E"], vec!["A", "B", "C", "D", "E"])]
    fn test_partially_resolvable_dependants_are_skipped(
        #[case] start: Vec<&'static str>,
        #[case] expected: Vec<&'static str>,
    ) {
        // Shape: diamond plus C -> E. C needs both D and E.
        let mut g = diamond();
        g.add("E");
        g.add_edge("C", "E").unwrap();

        let mut visited = topological_order(&g, start);
        visited.sort();
        assert_eq!(visited, expected);
    }

    #[test]
    fn test_cycle_outside_start_is_never_visited() {
        // Shape: X -> Y -> X, Y -> L
        let g = Graph::from_edges([("X", "Y"), ("Y", "X"), ("Y", "L")]);
        let order = topological_order(&g, ["L"]);

        assert_eq!(order, vec!["L"]);
        let mut missing: Vec<_> = g.unvisited(order.iter()).into_iter().copied().collect();
        missing.sort();
        assert_eq!(missing, vec!["X", "Y"]);
    }

    #[test]
    fn test_start_node_on_cycle_releases_the_cycle() {
        // Shape: X -> Y -> X
        let g = Graph::from_edges([("X", "Y"), ("Y", "X")]);

        assert_eq!(topological_order(&g, ["X"]), vec!["X", "Y"]);
        assert!(g.unvisited(["X", "Y"].iter()).is_empty());
    }

    #[test]
    fn test_empty_start_visits_nothing() {
        let mut calls = 0;
        let result = walk_topological(&diamond(), Vec::new(), |_| {
            calls += 1;
            Ok::<(), ()>(())
        });

        assert_eq!(result, Ok(()));
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_disconnected_node_is_never_visited() {
        let mut g = diamond();
        g.add("Z");
        let order = topological_order(&g, g.leaves().copied().filter(|n| *n != "Z").collect::<Vec<_>>());

        assert!(!order.contains(&"Z"));
        assert_eq!(order.len(), 4);
    }

    #[test]
    fn test_self_loop_start_node_terminates() {
        let g = Graph::from_edges([("S", "S")]);
        assert_eq!(topological_order(&g, ["S"]), vec!["S"]);
    }

    #[test]
    fn test_visitor_error_halts_walk() {
        let g = diamond();
        let mut seen = Vec::new();

        let result = walk_topological(&g, ["D"], |n| {
            seen.push(*n);
            if seen.len() == 2 { Err(seen.len()) } else { Ok(()) }
        });

        assert_eq!(result, Err(2));
        assert_eq!(seen.len(), 2);
        assert!(!seen.contains(&"A"));
    }
}
