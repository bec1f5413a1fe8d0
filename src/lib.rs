//! Traversal core for directed dependency graphs.
//!
//! An edge `a -> b` means `a` depends on `b`. Three walks are provided:
//! - [`walk()`]: depth-first along outgoing edges (everything a start set needs).
//! - [`walk_reverse`]: depth-first along incoming edges (everything that needs
//!   a node), reporting the node each one was reached from.
//! - [`walk_topological`]: dependencies before dependants, starting from
//!   dependency-free nodes.
//!
//! Walks read any [`EdgeSource`]; [`Graph`] is the bundled implementation.

pub mod graph;
pub mod walk;

pub use graph::{EdgeSource, Graph, GraphError};
pub use walk::{
    ancestors, reachable, topological_order, walk, walk_reverse, walk_topological, NodeSet,
};
