//! Campus graph and routing operations
//!
//! Provides the graph engine behind every routing query:
//! - Graph store with open/closed edges and canonical pair lookup
//! - Dijkstra shortest paths restricted to open edges
//! - BFS reachability
//! - Student zone (induced subgraph MST)
//! - Graph provider trait for pluggable data sources

pub mod algos;
pub mod store;
pub mod traversal;
pub mod types;
pub mod zone;

pub use algos::{is_reachable, minimum_spanning_tree, shortest_paths, ShortestPaths};
pub use store::CampusGraph;
pub use traversal::GraphProvider;
pub use types::{Adjacent, Cost, EdgeKey, EdgeStatus, NodeId, Weight, WeightedEdge};
pub use zone::{build_zone, Zone};
