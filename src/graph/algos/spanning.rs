use crate::graph::store::DirGraph;
use crate::graph::GraphProvider;
use crate::path::NodePath;
use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashSet};

/// Every edge weighs the same; kept explicit so the heap reads as Prim's
pub const UNIT_WEIGHT: u32 = 1;

/// Candidate edge waiting in the frontier heap
///
/// Ordered by weight, then by discovery sequence (which encodes the order the
/// source was expanded and the neighbor-insertion order), then by target path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct HeapEntry<'a> {
    weight: u32,
    seq: u64,
    from: &'a NodePath,
    to: &'a NodePath,
}

impl PartialOrd for HeapEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .cmp(&other.weight)
            .then_with(|| self.seq.cmp(&other.seq))
            .then_with(|| self.to.cmp(other.to))
            .then_with(|| self.from.cmp(other.from))
    }
}

/// State tracked while growing one or more trees
struct PrimState<'a, G: ?Sized> {
    provider: &'a G,
    visited: HashSet<&'a NodePath>,
    heap: BinaryHeap<Reverse<HeapEntry<'a>>>,
    next_seq: u64,
    result: DirGraph,
}

impl<'a, G: GraphProvider + ?Sized> PrimState<'a, G> {
    fn new(provider: &'a G) -> Self {
        Self {
            provider,
            visited: HashSet::new(),
            heap: BinaryHeap::new(),
            next_seq: 0,
            result: DirGraph::new(),
        }
    }

    fn push_frontier(&mut self, from: &'a NodePath) {
        for to in self.provider.get_outbound(from) {
            if self.visited.contains(to) {
                continue;
            }
            self.heap.push(Reverse(HeapEntry {
                weight: UNIT_WEIGHT,
                seq: self.next_seq,
                from,
                to,
            }));
            self.next_seq += 1;
        }
    }

    /// Grow a tree from `start` over out-edges until the frontier is empty
    fn grow(&mut self, start: &'a NodePath) {
        if !self.visited.insert(start) {
            return;
        }
        self.result.add_vertex(start.clone());
        self.push_frontier(start);

        while let Some(Reverse(entry)) = self.heap.pop() {
            if !self.visited.insert(entry.to) {
                continue;
            }
            self.result.add_edge(entry.from.clone(), entry.to.clone());
            self.push_frontier(entry.to);
        }
    }
}

/// Spanning tree of everything reachable from the first vertex in canonical order.
///
/// Each reached vertex other than the start gets exactly one incoming edge:
/// the edge it was first reached through. Vertices not reachable from the
/// start by following edges forward are left out. An empty graph yields an
/// empty graph.
#[tracing::instrument(skip(provider))]
pub fn min_spanning_tree<G: GraphProvider + ?Sized>(provider: &G) -> DirGraph {
    let Some(start) = provider.vertex_ids().next() else {
        return DirGraph::new();
    };
    spanning_tree_from(provider, start)
}

/// Spanning tree of everything reachable from `start`; empty if `start` is absent
pub fn spanning_tree_from<G: GraphProvider + ?Sized>(provider: &G, start: &NodePath) -> DirGraph {
    let Some(start) = provider.vertex_ids().find(|v| *v == start) else {
        return DirGraph::new();
    };
    let mut state = PrimState::new(provider);
    state.grow(start);
    tracing::debug!(
        start = %start,
        vertices = state.result.vertex_count(),
        edges = state.result.edge_count(),
        "Spanning tree built"
    );
    state.result
}

/// Spanning forest covering every vertex.
///
/// Grows a tree from the first vertex in canonical order, then from each
/// vertex still unvisited, in canonical order.
#[tracing::instrument(skip(provider))]
pub fn min_spanning_forest<G: GraphProvider + ?Sized>(provider: &G) -> DirGraph {
    let mut state = PrimState::new(provider);
    let mut trees = 0usize;
    for vertex in provider.vertex_ids() {
        if state.visited.contains(vertex) {
            continue;
        }
        state.grow(vertex);
        trees += 1;
    }
    tracing::debug!(trees, vertices = state.result.vertex_count(), "Spanning forest built");
    state.result
}
