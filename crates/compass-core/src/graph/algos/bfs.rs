use crate::graph::types::NodeId;
use crate::graph::GraphProvider;
use std::collections::{HashSet, VecDeque};

/// Breadth-first reachability over open edges
///
/// Weights are ignored; the search stops as soon as `to` is dequeued.
/// A node always reaches itself, even if unknown to the graph.
#[tracing::instrument(skip(provider))]
pub fn is_reachable(provider: &dyn GraphProvider, from: NodeId, to: NodeId) -> bool {
    let mut visited = HashSet::from([from]);
    let mut queue = VecDeque::from([from]);

    while let Some(current) = queue.pop_front() {
        if current == to {
            return true;
        }

        for edge in provider.neighbors_of(current) {
            if edge.open && visited.insert(edge.to) {
                queue.push_back(edge.to);
            }
        }
    }

    tracing::debug!(visited = visited.len(), "target not reached");
    false
}
