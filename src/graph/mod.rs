//! Defines the graph the walks traverse and the read contract they consume.
pub mod dag;
pub mod read;

// Re-export key types for convenient access
pub use dag::{Graph, GraphError};
pub use read::EdgeSource;
