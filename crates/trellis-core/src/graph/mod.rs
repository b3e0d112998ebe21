//! Weighted undirected graph model and algorithms
//!
//! Provides the graph structure and the queries that run over it:
//! - Incremental construction with mirrored edge records
//! - Dijkstra shortest paths
//! - Prim minimum spanning trees
//! - Undirected cycle detection

pub mod algos;
pub mod model;
pub mod types;

pub use algos::{has_cycle, minimum_spanning_tree, shortest_path};
pub use model::{Graph, Node};
pub use types::{Edge, MstSummary, PathResult, Weight};
