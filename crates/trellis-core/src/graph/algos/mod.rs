//! Graph algorithms
//!
//! Every entry point takes `&Graph` and leaves the receiver untouched;
//! `minimum_spanning_tree` returns a freshly built graph.

pub mod cycle;
pub mod dijkstra;
pub mod mst;

pub use cycle::has_cycle;
pub use dijkstra::shortest_path;
pub use mst::minimum_spanning_tree;
