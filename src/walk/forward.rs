//! Depth-first walk along outgoing edges.

use super::frontier::Frontier;
use super::visited::NodeSet;
use crate::graph::EdgeSource;
use std::convert::Infallible;

/// Walks `graph` depth-first along outgoing edges from every node in `start`,
/// calling `visit` once for each node reached.
///
/// Start nodes are always visited. Nodes unreachable from `start` are never
/// passed to `visit`. The first error returned by `visit` stops the walk and
/// is returned unchanged.
///
/// Sibling order follows the graph's edge iteration order and is not
/// guaranteed.
pub fn walk<G, I, F, E>(graph: &G, start: I, mut visit: F) -> Result<(), E>
where
    G: EdgeSource + ?Sized,
    I: IntoIterator<Item = G::Node>,
    F: FnMut(&G::Node) -> Result<(), E>,
{
    let mut visited = NodeSet::new();
    let mut unchecked: Frontier<G::Node> = start.into_iter().collect();

    while let Some(check) = unchecked.pop() {
        if !visited.insert(check.clone()) {
            continue;
        }

        if let Err(err) = visit(&check) {
            log::trace!("forward walk halted by visitor after {} nodes", visited.len());
            return Err(err);
        }

        unchecked.extend(graph.out_edges(&check));
    }

    log::debug!("forward walk visited {} nodes", visited.len());
    Ok(())
}

/// Collects every node reachable from `start` along outgoing edges.
pub fn reachable<G, I>(graph: &G, start: I) -> NodeSet<G::Node>
where
    G: EdgeSource + ?Sized,
    I: IntoIterator<Item = G::Node>,
{
    let mut seen = NodeSet::new();
    walk(graph, start, |node| {
        seen.insert(node.clone());
        Ok::<(), Infallible>(())
    })
    .unwrap_or_else(|never| match never {});
    seen
}
