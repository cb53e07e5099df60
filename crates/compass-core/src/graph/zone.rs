//! Student zone: the cheapest sub-network keeping a residence and its class
//! locations connected, restricted to nodes on shortest paths between them.

use crate::graph::algos::{minimum_spanning_tree, shortest_paths, ShortestPaths};
use crate::graph::types::{Cost, NodeId, WeightedEdge};
use crate::graph::GraphProvider;
use serde::Serialize;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Serialize)]
pub struct Zone {
    pub residence: NodeId,
    /// Nodes on some shortest path from the residence to a reachable destination
    pub nodes: BTreeSet<NodeId>,
    pub tree: Vec<WeightedEdge>,
    pub cost: Cost,
    /// Destinations with no open route from the residence
    pub unreachable: Vec<NodeId>,
}

/// Collect every node on the predecessor chains of the reachable destinations
///
/// Returns the node set and the destinations that were skipped.
pub fn collect_path_nodes(
    paths: &ShortestPaths,
    destinations: &[NodeId],
) -> (BTreeSet<NodeId>, Vec<NodeId>) {
    let mut nodes = BTreeSet::new();
    let mut unreachable = Vec::new();

    for &destination in destinations {
        match paths.path_to(destination) {
            Some(path) => nodes.extend(path),
            None => unreachable.push(destination),
        }
    }

    (nodes, unreachable)
}

/// Build the zone for `residence` and its class `destinations`
#[tracing::instrument(skip(provider, destinations), fields(destinations = destinations.len()))]
pub fn build_zone(provider: &dyn GraphProvider, residence: NodeId, destinations: &[NodeId]) -> Zone {
    let paths = shortest_paths(provider, residence);
    let (nodes, unreachable) = collect_path_nodes(&paths, destinations);
    if !unreachable.is_empty() {
        tracing::debug!(?unreachable, "skipping unreachable destinations");
    }

    let tree = minimum_spanning_tree(provider, &nodes);
    Zone {
        residence,
        nodes,
        tree: tree.edges,
        cost: tree.cost,
        unreachable,
    }
}
