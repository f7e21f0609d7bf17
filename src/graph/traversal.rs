use crate::graph::store::DirGraph;
use crate::path::NodePath;

/// Trait for providing read-only graph adjacency to the algorithms
pub trait GraphProvider {
    fn contains(&self, id: &NodePath) -> bool;
    /// Out-neighbors in insertion order
    fn get_outbound(&self, id: &NodePath) -> &[NodePath];
    /// Vertices in canonical order
    fn vertex_ids(&self) -> Box<dyn Iterator<Item = &NodePath> + '_>;
}

impl GraphProvider for DirGraph {
    fn contains(&self, id: &NodePath) -> bool {
        DirGraph::contains(self, id)
    }

    fn get_outbound(&self, id: &NodePath) -> &[NodePath] {
        self.neighbors(id)
    }

    fn vertex_ids(&self) -> Box<dyn Iterator<Item = &NodePath> + '_> {
        Box::new(self.vertices())
    }
}
