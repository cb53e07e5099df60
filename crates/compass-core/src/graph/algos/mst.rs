//! Minimum spanning tree over an induced subgraph (Kruskal)

use crate::graph::types::{Cost, EdgeKey, NodeId, WeightedEdge};
use crate::graph::GraphProvider;
use serde::Serialize;
use std::collections::{BTreeSet, HashMap};

/// Disjoint-set forest over node ids with path compression
#[derive(Debug, Default)]
pub struct UnionFind {
    parent: HashMap<NodeId, NodeId>,
}

impl UnionFind {
    pub fn new() -> Self {
        Self::default()
    }

    /// Representative of `node`'s set; unseen nodes start as singletons
    pub fn find(&mut self, node: NodeId) -> NodeId {
        let mut root = node;
        while let Some(&parent) = self.parent.get(&root) {
            if parent == root {
                break;
            }
            root = parent;
        }
        self.parent.entry(root).or_insert(root);

        // Point every node on the walked chain straight at the root
        let mut current = node;
        while current != root {
            let next = self.parent.insert(current, root).unwrap_or(root);
            current = next;
        }

        root
    }

    /// Merge the sets of `a` and `b`; returns `false` if already joined
    pub fn union(&mut self, a: NodeId, b: NodeId) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return false;
        }
        self.parent.insert(root_a, root_b);
        true
    }
}

/// Spanning forest of an induced subgraph
#[derive(Debug, Clone, Default, Serialize)]
pub struct SpanningTree {
    pub edges: Vec<WeightedEdge>,
    pub cost: Cost,
}

/// Open edges with both endpoints in `nodes`, each listed once
pub fn induced_edges(provider: &dyn GraphProvider, nodes: &BTreeSet<NodeId>) -> Vec<WeightedEdge> {
    let mut edges = Vec::new();
    for &node in nodes {
        for adj in provider.neighbors_of(node) {
            if adj.open && node < adj.to && nodes.contains(&adj.to) {
                edges.push(WeightedEdge {
                    weight: adj.weight,
                    key: EdgeKey::new(node, adj.to),
                });
            }
        }
    }
    edges
}

/// Kruskal over the open-edge subgraph induced by `nodes`
///
/// A disconnected induced subgraph yields a spanning forest; nodes with no
/// induced edges contribute nothing.
#[tracing::instrument(skip(provider, nodes), fields(node_count = nodes.len()))]
pub fn minimum_spanning_tree(
    provider: &dyn GraphProvider,
    nodes: &BTreeSet<NodeId>,
) -> SpanningTree {
    let mut candidates = induced_edges(provider, nodes);
    candidates.sort();

    let mut components = UnionFind::new();
    let mut tree = SpanningTree::default();
    for edge in candidates {
        if components.union(edge.key.low, edge.key.high) {
            tree.cost += Cost::from(edge.weight);
            tree.edges.push(edge);
        }
    }

    tracing::debug!(edges = tree.edges.len(), cost = tree.cost, "spanning tree built");
    tree
}
