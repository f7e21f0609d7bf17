//! Directory graph and the algorithms over it
//!
//! - `store`: the adjacency-list graph keyed by path
//! - `builder`: populate a graph from a filesystem backend
//! - `bfs`: unweighted shortest path
//! - `algos`: spanning tree and forest
//! - `traversal`: read-only provider trait the algorithms run against

pub mod algos;
pub mod bfs;
pub mod builder;
pub mod store;
pub mod traversal;
pub mod types;

pub use algos::{min_spanning_forest, min_spanning_tree, spanning_tree_from};
pub use bfs::{bfs_distances, shortest_path};
pub use builder::{build_from_filesystem, build_from_filesystem_with, build_graph};
pub use store::DirGraph;
pub use traversal::GraphProvider;
pub use types::{BuildOptions, BuildReport};
