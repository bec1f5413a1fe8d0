//! Traversal algorithms over an [`EdgeSource`](crate::graph::EdgeSource).
//!
//! Every walk owns its frontier and visited set for the duration of one call,
//! so concurrent walks over the same unchanging graph do not interfere.
pub mod forward;
pub mod reverse;
pub mod topological;
pub mod visited;

mod frontier;

pub use forward::{reachable, walk};
pub use reverse::{ancestors, walk_reverse};
pub use topological::{topological_order, walk_topological};
pub use visited::NodeSet;
