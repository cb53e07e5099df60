use crate::graph::store::CampusGraph;
use crate::graph::types::{Adjacent, EdgeStatus, NodeId};

/// Trait for providing graph adjacency to the routing algorithms
pub trait GraphProvider {
    /// Every node known to the graph
    fn node_ids(&self) -> Vec<NodeId>;
    /// Structurally present incident edges, open or closed
    fn neighbors_of(&self, id: NodeId) -> Vec<Adjacent>;
    fn edge_status(&self, a: NodeId, b: NodeId) -> EdgeStatus;
}

impl GraphProvider for CampusGraph {
    fn node_ids(&self) -> Vec<NodeId> {
        self.node_ids()
    }

    fn neighbors_of(&self, id: NodeId) -> Vec<Adjacent> {
        self.neighbors_of(id)
    }

    fn edge_status(&self, a: NodeId, b: NodeId) -> EdgeStatus {
        self.status(a, b)
    }
}
