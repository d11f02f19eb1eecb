//! matgraph-core: dense weight-matrix graph with classical search.
//!
//! A [`Graph`] is built once from matrix rows (0 = no edge), derives one
//! ascending adjacency list per vertex, and then serves any number of
//! read-only queries: lazy [`bfs`] / [`dfs`] walks and O(V^2) [`dijkstra`].
//! Vertex ids are 0-based throughout. No I/O beyond the optional
//! [`loader`] for the whitespace-separated matrix text format.

mod adjacency;
mod config;
mod error;
mod graph;
pub mod loader;
mod shortest_path;
mod traversal;

pub use config::{GraphConfig, DEFAULT_MAX_VERTICES};
pub use error::{CapacityLimit, GraphError, Result};
pub use graph::{Graph, VertexId, Weight};
pub use loader::{load_graph, parse_matrix, read_matrix};
pub use shortest_path::{dijkstra, ShortestPaths};
pub use traversal::{bfs, bfs_levels, dfs, Bfs, Dfs, VisitState};
