//! The read-only view of a graph that the walks consume.

use super::dag::Graph;
use std::collections::HashSet;
use std::hash::Hash;
use std::iter::{Cloned, Flatten};
use std::option;

/// Read access to a directed graph's adjacency.
///
/// Implementations must keep both directions consistent: `b` is yielded by
/// `out_edges(a)` exactly as many times as `a` is yielded by `in_edges(b)`.
/// Unknown nodes yield nothing. The walks rely on this to count remaining
/// dependencies correctly.
pub trait EdgeSource {
    type Node: Clone + Eq + Hash;
    type Edges<'a>: Iterator<Item = Self::Node>
    where
        Self: 'a;

    /// Targets of `node`'s outgoing edges (what it depends on).
    fn out_edges<'a>(&'a self, node: &Self::Node) -> Self::Edges<'a>;

    /// Sources of `node`'s incoming edges (what depends on it).
    fn in_edges<'a>(&'a self, node: &Self::Node) -> Self::Edges<'a>;

    fn out_degree(&self, node: &Self::Node) -> usize {
        self.out_edges(node).count()
    }
}

impl<N: Clone + Eq + Hash> EdgeSource for Graph<N> {
    type Node = N;
    type Edges<'a> = Cloned<Flatten<option::IntoIter<&'a HashSet<N>>>>
    where
        Self: 'a;

    fn out_edges<'a>(&'a self, node: &N) -> Self::Edges<'a> {
        self.out_set(node).into_iter().flatten().cloned()
    }

    fn in_edges<'a>(&'a self, node: &N) -> Self::Edges<'a> {
        self.in_set(node).into_iter().flatten().cloned()
    }

    fn out_degree(&self, node: &N) -> usize {
        self.out_set(node).map_or(0, HashSet::len)
    }
}

#[cfg(feature = "petgraph")]
mod petgraph_impl {
    use super::EdgeSource;
    use petgraph::graph::{DiGraph, IndexType, Neighbors, NodeIndex};
    use petgraph::Direction;

    /// petgraph records every edge in both endpoint lists, so the mirrored
    /// view comes for free. Parallel edges are reported once per edge in both
    /// directions, which keeps dependency counts balanced.
    impl<W, E, Ix: IndexType> EdgeSource for DiGraph<W, E, Ix> {
        type Node = NodeIndex<Ix>;
        type Edges<'a> = Neighbors<'a, E, Ix>
        where
            Self: 'a;

        fn out_edges<'a>(&'a self, node: &NodeIndex<Ix>) -> Self::Edges<'a> {
            self.neighbors_directed(*node, Direction::Outgoing)
        }

        fn in_edges<'a>(&'a self, node: &NodeIndex<Ix>) -> Self::Edges<'a> {
            self.neighbors_directed(*node, Direction::Incoming)
        }
    }
}
