mod path;

use crate::graph::GraphProvider;
use crate::path::NodePath;
use std::collections::{HashMap, HashSet, VecDeque};

pub use path::reconstruct_path;

/// Breadth-first search from `from` until `to` is dequeued.
/// Returns whether `to` was reached and the predecessor of every node
/// discovered on the way.
fn bfs_search<G: GraphProvider + ?Sized>(
    provider: &G,
    from: &NodePath,
    to: &NodePath,
) -> (bool, HashMap<NodePath, NodePath>) {
    let mut visited: HashSet<&NodePath> = HashSet::new();
    let mut predecessors: HashMap<NodePath, NodePath> = HashMap::new();
    let mut queue: VecDeque<&NodePath> = VecDeque::new();

    queue.push_back(from);
    visited.insert(from);

    while let Some(current) = queue.pop_front() {
        if current == to {
            return (true, predecessors);
        }

        for neighbor in provider.get_outbound(current) {
            // First discovery wins, which also makes self-loops inert
            if !visited.insert(neighbor) {
                continue;
            }
            predecessors.insert(neighbor.clone(), current.clone());
            queue.push_back(neighbor);
        }
    }

    (false, predecessors)
}

/// Unit-weight shortest path from `source` to `destination`, both inclusive.
///
/// Returns an empty vector if either endpoint is missing from the graph or no
/// directed path exists. Among equally short paths, the one found first when
/// neighbors are explored in insertion order wins.
#[tracing::instrument(skip(provider), fields(source = %source, destination = %destination))]
pub fn shortest_path<G: GraphProvider + ?Sized>(
    provider: &G,
    source: &NodePath,
    destination: &NodePath,
) -> Vec<NodePath> {
    if !provider.contains(source) || !provider.contains(destination) {
        tracing::debug!("Endpoint missing from graph");
        return Vec::new();
    }

    let (found, predecessors) = bfs_search(provider, source, destination);
    if !found {
        return Vec::new();
    }

    let path = reconstruct_path(source, destination, &predecessors).unwrap_or_default();
    tracing::debug!(hops = path.len().saturating_sub(1), "Path found");
    path
}

/// Hop distance of every node reachable from `source`, source included at 0
pub fn bfs_distances<G: GraphProvider + ?Sized>(
    provider: &G,
    source: &NodePath,
) -> HashMap<NodePath, usize> {
    let mut distances: HashMap<NodePath, usize> = HashMap::new();
    if !provider.contains(source) {
        return distances;
    }

    let mut queue: VecDeque<(&NodePath, usize)> = VecDeque::new();
    distances.insert(source.clone(), 0);
    queue.push_back((source, 0));

    while let Some((current, hops)) = queue.pop_front() {
        for neighbor in provider.get_outbound(current) {
            if distances.contains_key(neighbor) {
                continue;
            }
            distances.insert(neighbor.clone(), hops + 1);
            queue.push_back((neighbor, hops + 1));
        }
    }

    distances
}

#[cfg(test)]
mod tests;
