//! dag.rs
//! Edge-set graph with mirrored outgoing/incoming adjacency.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

pub use self::error::GraphError;
mod error {
    use thiserror::Error;

    #[derive(Error, Debug, Clone, PartialEq, Eq)]
    pub enum GraphError<N> {
        #[error("Node {node:?} is not registered in the graph")]
        UnknownNode { node: N },
    }
}

/// A directed graph of opaque node identities.
///
/// Each edge `a -> b` reads as "`a` depends on `b`". The graph stores both
/// directions: `out_edges[a]` holds `b` exactly when `in_edges[b]` holds `a`.
/// Every registered node owns an entry, possibly empty, in both maps.
#[derive(Debug, Clone)]
pub struct Graph<N> {
    nodes: HashSet<N>,
    out_edges: HashMap<N, HashSet<N>>,
    in_edges: HashMap<N, HashSet<N>>,
}

impl<N> Default for Graph<N> {
    fn default() -> Self {
        Self {
            nodes: HashSet::new(),
            out_edges: HashMap::new(),
            in_edges: HashMap::new(),
        }
    }
}

impl<N: Clone + Eq + Hash> Graph<N> {
    pub fn new() -> Self { Self::default() }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: HashSet::with_capacity(capacity),
            out_edges: HashMap::with_capacity(capacity),
            in_edges: HashMap::with_capacity(capacity),
        }
    }

    /// Builds a graph from `(from, to)` pairs, registering endpoints as needed.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (N, N)>,
    {
        let mut graph = Self::new();
        for (from, to) in edges {
            graph.add(from.clone());
            graph.add(to.clone());
            graph.link(from, to);
        }
        graph
    }

    pub fn len(&self) -> usize { self.nodes.len() }
    pub fn is_empty(&self) -> bool { self.nodes.is_empty() }
    pub fn contains(&self, node: &N) -> bool { self.nodes.contains(node) }

    pub fn edge_count(&self) -> usize {
        self.out_edges.values().map(HashSet::len).sum()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &N> + '_ {
        self.nodes.iter()
    }

    /// Registers `node`. Returns `false` if it was already present.
    pub fn add(&mut self, node: N) -> bool {
        if !self.nodes.insert(node.clone()) {
            return false;
        }
        self.out_edges.insert(node.clone(), HashSet::new());
        self.in_edges.insert(node, HashSet::new());
        true
    }

    /// Adds the edge `from -> to`. Both endpoints must already be registered.
    /// Adding an edge that already exists is a no-op.
    pub fn add_edge(&mut self, from: N, to: N) -> Result<(), GraphError<N>> {
        if !self.contains(&from) {
            return Err(GraphError::UnknownNode { node: from });
        }
        if !self.contains(&to) {
            return Err(GraphError::UnknownNode { node: to });
        }
        self.link(from, to);
        Ok(())
    }

    pub fn remove_edge(&mut self, from: &N, to: &N) -> bool {
        let removed = self.out_edges.get_mut(from).is_some_and(|targets| targets.remove(to));
        if removed {
            if let Some(sources) = self.in_edges.get_mut(to) {
                sources.remove(from);
            }
        }
        removed
    }

    /// Removes `node` together with every edge touching it.
    pub fn remove(&mut self, node: &N) -> bool {
        if !self.nodes.remove(node) {
            return false;
        }
        for target in self.out_edges.remove(node).unwrap_or_default() {
            if let Some(sources) = self.in_edges.get_mut(&target) {
                sources.remove(node);
            }
        }
        for source in self.in_edges.remove(node).unwrap_or_default() {
            if let Some(targets) = self.out_edges.get_mut(&source) {
                targets.remove(node);
            }
        }
        true
    }

    /// Nodes `node` points to. Empty for unknown nodes.
    pub fn dependencies(&self, node: &N) -> impl Iterator<Item = &N> + '_ {
        self.out_edges.get(node).into_iter().flatten()
    }

    /// Nodes pointing to `node`. Empty for unknown nodes.
    pub fn dependants(&self, node: &N) -> impl Iterator<Item = &N> + '_ {
        self.in_edges.get(node).into_iter().flatten()
    }

    /// Nodes nothing points to.
    pub fn roots(&self) -> impl Iterator<Item = &N> + '_ {
        self.nodes.iter().filter(|n| self.in_edges.get(*n).is_none_or(HashSet::is_empty))
    }

    /// Nodes that point to nothing. These are the natural start set for a
    /// topological walk.
    pub fn leaves(&self) -> impl Iterator<Item = &N> + '_ {
        self.nodes.iter().filter(|n| self.out_edges.get(*n).is_none_or(HashSet::is_empty))
    }

    /// Every registered node missing from `visited`.
    ///
    /// A topological walk drops nodes whose dependencies never resolve from
    /// its start set without reporting them. Comparing its visited nodes
    /// against the graph with this is the only way to tell a complete walk
    /// from a partial one.
    pub fn unvisited<'v, V>(&self, visited: V) -> Vec<&N>
    where
        N: 'v,
        V: IntoIterator<Item = &'v N>,
    {
        let seen: HashSet<&N> = visited.into_iter().collect();
        self.nodes.iter().filter(|n| !seen.contains(*n)).collect()
    }

    pub(crate) fn out_set(&self, node: &N) -> Option<&HashSet<N>> {
        self.out_edges.get(node)
    }

    pub(crate) fn in_set(&self, node: &N) -> Option<&HashSet<N>> {
        self.in_edges.get(node)
    }

    // Both maps are updated together; callers guarantee the endpoints exist.
    fn link(&mut self, from: N, to: N) {
        self.in_edges.entry(to.clone()).or_default().insert(from.clone());
        self.out_edges.entry(from).or_default().insert(to);
    }
}
