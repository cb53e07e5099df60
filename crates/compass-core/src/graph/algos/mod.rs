//! Graph algorithm implementations
//!
//! Contains concrete implementations of graph algorithms:
//! - `bfs`: Breadth-first reachability over open edges
//! - `dijkstra`: Weighted shortest paths with predecessor reconstruction
//! - `mst`: Kruskal minimum spanning tree with union-find

pub mod bfs;
pub mod dijkstra;
pub mod mst;

pub use bfs::is_reachable;
pub use dijkstra::{shortest_paths, ShortestPaths};
pub use mst::{induced_edges, minimum_spanning_tree, SpanningTree, UnionFind};
