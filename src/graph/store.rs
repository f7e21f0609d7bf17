//! Adjacency-list graph keyed by path
//!
//! `DirGraph` owns every vertex and edge. Vertices iterate in canonical path
//! order (the map is a `BTreeMap`), out-neighbors in insertion order.
//! Nothing is ever removed and nothing here can fail.

use std::collections::BTreeMap;

use crate::path::NodePath;

/// Directed graph whose vertices are filesystem paths
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirGraph {
    adjacency: BTreeMap<NodePath, Vec<NodePath>>,
}

impl DirGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `path` with no out-neighbors if it is not already present.
    /// The empty path is never stored.
    pub fn add_vertex(&mut self, path: NodePath) {
        if path.is_empty() {
            return;
        }
        self.adjacency.entry(path).or_default();
    }

    /// Add `source -> destination`, creating either endpoint as needed.
    /// Repeated calls add parallel edges; self-loops are kept.
    pub fn add_edge(&mut self, source: NodePath, destination: NodePath) {
        if source.is_empty() || destination.is_empty() {
            tracing::debug!(source = %source, destination = %destination, "Ignoring edge with empty endpoint");
            return;
        }
        self.add_vertex(destination.clone());
        self.adjacency.entry(source).or_default().push(destination);
    }

    /// Vertices in canonical path order
    pub fn vertices(&self) -> impl Iterator<Item = &NodePath> + '_ {
        self.adjacency.keys()
    }

    /// Out-neighbors of `path` in insertion order; empty when absent
    pub fn neighbors(&self, path: &NodePath) -> &[NodePath] {
        self.adjacency.get(path).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, path: &NodePath) -> bool {
        self.adjacency.contains_key(path)
    }

    /// All edges as `(source, destination)`, sources in canonical order
    pub fn edges(&self) -> impl Iterator<Item = (&NodePath, &NodePath)> + '_ {
        self.adjacency
            .iter()
            .flat_map(|(source, targets)| targets.iter().map(move |target| (source, target)))
    }

    pub fn has_edge(&self, source: &NodePath, destination: &NodePath) -> bool {
        self.neighbors(source).contains(destination)
    }

    /// Number of edges ending at `path`, counting parallel edges
    pub fn in_degree(&self, path: &NodePath) -> usize {
        self.edges().filter(|(_, target)| *target == path).count()
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}
