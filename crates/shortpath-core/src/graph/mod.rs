//! Weighted directed graphs and shortest-path operations
//!
//! - `traversal`: the adjacency-list graph model and its provider trait
//! - `algos`: the Dijkstra relaxation engine
//! - `path`: path reconstruction from predecessor links
//! - `loader`: edge-list file parsing

pub mod algos;
pub mod loader;
pub mod path;
pub mod traversal;
pub mod types;

pub use algos::{compute_shortest_paths, ShortestPaths};
pub use loader::{load_graph, parse_graph};
pub use path::reconstruct_path;
pub use traversal::{Graph, GraphProvider};
pub use types::{Cost, Edge, PathResult, Vertex, Weight};
