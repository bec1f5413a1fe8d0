//! Depth-first walk along incoming edges, reporting how each node was reached.

use super::frontier::Frontier;
use super::visited::NodeSet;
use crate::graph::EdgeSource;
use std::collections::HashMap;
use std::convert::Infallible;

/// Walks `graph` depth-first along incoming edges from `start`, calling
/// `visit` with each node and the node it was discovered from.
///
/// `start` is reported with no parent. Every other node is reported with the
/// dependency that first led to it; when several paths exist, which one wins
/// depends on edge iteration order and is neither unique nor shortest.
///
/// The first error returned by `visit` stops the walk and is returned
/// unchanged.
pub fn walk_reverse<G, F, E>(graph: &G, start: G::Node, mut visit: F) -> Result<(), E>
where
    G: EdgeSource + ?Sized,
    F: FnMut(&G::Node, Option<&G::Node>) -> Result<(), E>,
{
    let mut visited = NodeSet::new();
    let mut unchecked: Frontier<(G::Node, Option<G::Node>)> = Frontier::new();
    unchecked.push((start, None));

    while let Some((check, parent)) = unchecked.pop() {
        if !visited.insert(check.clone()) {
            continue;
        }

        if let Err(err) = visit(&check, parent.as_ref()) {
            log::trace!("reverse walk halted by visitor after {} nodes", visited.len());
            return Err(err);
        }

        unchecked.extend(
            graph
                .in_edges(&check)
                .map(|dependant| (dependant, Some(check.clone()))),
        );
    }

    log::debug!("reverse walk visited {} nodes", visited.len());
    Ok(())
}

/// Collects every transitive dependant of `start`, mapped to the node it was
/// discovered from. `start` itself maps to `None`.
pub fn ancestors<G>(graph: &G, start: G::Node) -> HashMap<G::Node, Option<G::Node>>
where
    G: EdgeSource + ?Sized,
{
    let mut parents = HashMap::new();
    walk_reverse(graph, start, |node, parent| {
        parents.insert(node.clone(), parent.cloned());
        Ok::<(), Infallible>(())
    })
    .unwrap_or_else(|never| match never {});
    parents
}
