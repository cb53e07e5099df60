use crate::graph::types::{Cost, NodeId};
use crate::graph::GraphProvider;
use serde::Serialize;
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

/// Wrapper for BinaryHeap to use as min-heap (ordered by accumulated cost)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeapEntry {
    pub node_id: NodeId,
    pub accumulated_cost: Cost,
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.accumulated_cost
            .cmp(&other.accumulated_cost)
            .then_with(|| self.node_id.cmp(&other.node_id))
    }
}

/// Result of a single-source shortest path run
///
/// Every node known to the graph has an entry in `distances`; `None` marks a
/// node that cannot be reached through open edges. When several paths share
/// the minimum cost, which predecessor is recorded depends on heap order and
/// is not part of the contract.
#[derive(Debug, Clone, Serialize)]
pub struct ShortestPaths {
    pub source: NodeId,
    distances: HashMap<NodeId, Option<Cost>>,
    predecessors: HashMap<NodeId, NodeId>,
}

impl ShortestPaths {
    /// Minimum travel time from the source, or `None` if unreachable or unknown
    pub fn distance(&self, target: NodeId) -> Option<Cost> {
        self.distances.get(&target).copied().flatten()
    }

    pub fn predecessor(&self, target: NodeId) -> Option<NodeId> {
        self.predecessors.get(&target).copied()
    }

    /// Walk predecessor links from `target` back to the source
    ///
    /// Returns the node sequence source→target, or `None` when the target is
    /// unreachable or the chain breaks before reaching the source.
    pub fn path_to(&self, target: NodeId) -> Option<Vec<NodeId>> {
        self.distance(target)?;

        let mut path = vec![target];
        let mut current = target;
        while current != self.source {
            current = self.predecessor(current)?;
            path.push(current);
            if path.len() > self.distances.len() + 1 {
                return None;
            }
        }

        path.reverse();
        Some(path)
    }
}

/// Dijkstra from `source` over open edges only
///
/// Closed edges are skipped during relaxation. Stale heap entries (whose cost
/// no longer matches the best known distance) are discarded when popped.
#[tracing::instrument(skip(provider), fields(nodes = tracing::field::Empty))]
pub fn shortest_paths(provider: &dyn GraphProvider, source: NodeId) -> ShortestPaths {
    let mut distances: HashMap<NodeId, Option<Cost>> = provider
        .node_ids()
        .into_iter()
        .map(|id| (id, None))
        .collect();
    tracing::Span::current().record("nodes", distances.len());

    let mut predecessors = HashMap::new();
    let mut heap = BinaryHeap::new();

    distances.insert(source, Some(0));
    heap.push(Reverse(HeapEntry {
        node_id: source,
        accumulated_cost: 0,
    }));

    while let Some(Reverse(HeapEntry {
        node_id: current,
        accumulated_cost,
    })) = heap.pop()
    {
        if distances.get(&current).copied().flatten() != Some(accumulated_cost) {
            continue;
        }

        for edge in provider.neighbors_of(current) {
            if !edge.open {
                continue;
            }

            let candidate = accumulated_cost + Cost::from(edge.weight);
            let best = distances.entry(edge.to).or_insert(None);
            if best.is_none_or(|known| candidate < known) {
                *best = Some(candidate);
                predecessors.insert(edge.to, current);
                heap.push(Reverse(HeapEntry {
                    node_id: edge.to,
                    accumulated_cost: candidate,
                }));
            }
        }
    }

    ShortestPaths {
        source,
        distances,
        predecessors,
    }
}
