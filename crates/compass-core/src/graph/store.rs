//! Mutable campus graph with open/closed edges
//!
//! Edge state lives only in the canonical-key table; adjacency lists hold
//! neighbor ids, so a toggle is a single map update and both orientations
//! observe it immediately.

use std::collections::HashMap;

use crate::graph::types::{Adjacent, EdgeKey, EdgeRecord, EdgeStatus, NodeId, Weight};

#[derive(Debug, Clone, Default)]
pub struct CampusGraph {
    adjacency: HashMap<NodeId, Vec<NodeId>>,
    edges: HashMap<EdgeKey, EdgeRecord>,
    names: HashMap<NodeId, String>,
}

impl CampusGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a node without any edges (e.g. a class location)
    pub fn ensure_node(&mut self, id: NodeId) {
        self.adjacency.entry(id).or_default();
    }

    pub fn set_name(&mut self, id: NodeId, name: impl Into<String>) {
        self.ensure_node(id);
        self.names.insert(id, name.into());
    }

    pub fn name(&self, id: NodeId) -> Option<&str> {
        self.names.get(&id).map(String::as_str)
    }

    /// Create or overwrite the edge between `a` and `b`; the edge starts open.
    ///
    /// Returns `true` if an existing edge was overwritten.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId, weight: Weight) -> bool {
        let key = EdgeKey::new(a, b);
        let replaced = self
            .edges
            .insert(key, EdgeRecord { weight, open: true })
            .is_some();

        if !replaced {
            self.adjacency.entry(a).or_default().push(b);
            if a != b {
                self.adjacency.entry(b).or_default().push(a);
            }
        }

        replaced
    }

    /// Set an existing edge's state
    ///
    /// Returns the new status, or `EdgeStatus::Absent` without changing
    /// anything if the pair is not connected.
    pub fn set_open(&mut self, a: NodeId, b: NodeId, open: bool) -> EdgeStatus {
        match self.edges.get_mut(&EdgeKey::new(a, b)) {
            Some(record) => {
                record.open = open;
                EdgeStatus::from_open(open)
            }
            None => EdgeStatus::Absent,
        }
    }

    /// Flip an existing edge's state
    pub fn toggle(&mut self, a: NodeId, b: NodeId) -> EdgeStatus {
        match self.edges.get_mut(&EdgeKey::new(a, b)) {
            Some(record) => {
                record.open = !record.open;
                EdgeStatus::from_open(record.open)
            }
            None => EdgeStatus::Absent,
        }
    }

    pub fn status(&self, a: NodeId, b: NodeId) -> EdgeStatus {
        self.edges
            .get(&EdgeKey::new(a, b))
            .map_or(EdgeStatus::Absent, |record| EdgeStatus::from_open(record.open))
    }

    pub fn is_open(&self, a: NodeId, b: NodeId) -> bool {
        self.status(a, b).is_open()
    }

    /// All structurally present incident edges, open or closed, in insertion order
    pub fn neighbors_of(&self, id: NodeId) -> Vec<Adjacent> {
        let Some(neighbors) = self.adjacency.get(&id) else {
            return Vec::new();
        };

        neighbors
            .iter()
            .filter_map(|&to| {
                self.edges.get(&EdgeKey::new(id, to)).map(|record| Adjacent {
                    to,
                    weight: record.weight,
                    open: record.open,
                })
            })
            .collect()
    }

    /// Node ids in ascending order
    pub fn node_ids(&self) -> Vec<NodeId> {
        let mut ids: Vec<NodeId> = self.adjacency.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn open_edge_count(&self) -> usize {
        self.edges.values().filter(|record| record.open).count()
    }
}
