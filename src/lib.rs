//! dirgraph
//!
//! Model a directory tree as a directed graph and run classical graph
//! queries over it: build the graph by walking a filesystem backend, find
//! the shortest path between two paths, and extract a spanning tree.
//!
//! ```
//! use dirgraph::fs::MemoryFs;
//! use dirgraph::{build_from_filesystem, shortest_path, DirGraph, NodePath};
//!
//! let fs = MemoryFs::new()
//!     .with_dir("/r", ["/r/a", "/r/b"])
//!     .with_dir("/r/a", ["/r/a/x"]);
//! let mut graph = DirGraph::new();
//! let mut diagnostics = Vec::new();
//! build_from_filesystem(&mut graph, &NodePath::from("/r"), &fs, &mut |d: &str| {
//!     diagnostics.push(d.to_string())
//! });
//!
//! let path = shortest_path(&graph, &NodePath::from("/r"), &NodePath::from("/r/a/x"));
//! assert_eq!(path.len(), 3);
//! assert!(diagnostics.is_empty());
//! ```

pub mod config;
pub mod error;
pub mod format;
pub mod fs;
pub mod graph;
pub mod logging;
pub mod path;
pub mod sink;

pub use error::{DirGraphError, EnumerationError, ErrorCause, Result};
pub use format::{print, render, OutputFormat};
pub use graph::{
    build_from_filesystem, build_from_filesystem_with, build_graph, min_spanning_forest,
    min_spanning_tree, shortest_path, BuildOptions, BuildReport, DirGraph, GraphProvider,
};
pub use path::NodePath;
pub use sink::{CollectingSink, ErrorSink, StderrSink};
