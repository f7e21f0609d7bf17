//! Path reconstruction utilities for graph traversal

use crate::path::NodePath;
use std::collections::HashMap;

/// Walk the predecessor map back from `to` until `from` is reached.
///
/// Returns `None` if the chain breaks before reaching `from`.
pub fn reconstruct_path(
    from: &NodePath,
    to: &NodePath,
    predecessors: &HashMap<NodePath, NodePath>,
) -> Option<Vec<NodePath>> {
    let mut path_nodes = vec![to.clone()];
    let mut current = to;

    while current != from {
        let pred = predecessors.get(current)?;
        path_nodes.push(pred.clone());
        current = pred;
    }

    path_nodes.reverse();
    Some(path_nodes)
}
