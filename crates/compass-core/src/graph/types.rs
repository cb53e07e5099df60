use serde::Serialize;
use std::fmt;

/// Identifier of a campus location
pub type NodeId = u32;

/// Travel time along a single edge, in minutes
pub type Weight = u32;

/// Accumulated travel time along a path, in minutes
pub type Cost = u64;

/// Canonical key for an undirected edge: smaller endpoint first
///
/// `EdgeKey::new(a, b)` and `EdgeKey::new(b, a)` are equal, so either
/// orientation finds the same record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct EdgeKey {
    pub low: NodeId,
    pub high: NodeId,
}

impl EdgeKey {
    pub fn new(a: NodeId, b: NodeId) -> Self {
        if a <= b {
            EdgeKey { low: a, high: b }
        } else {
            EdgeKey { low: b, high: a }
        }
    }
}

impl fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.low, self.high)
    }
}

/// Current state of a connection between two locations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeStatus {
    Open,
    Closed,
    /// The pair is not a modeled connection
    Absent,
}

impl EdgeStatus {
    pub fn from_open(open: bool) -> Self {
        if open {
            EdgeStatus::Open
        } else {
            EdgeStatus::Closed
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, EdgeStatus::Open)
    }
}

/// Stored edge attributes, keyed by `EdgeKey`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeRecord {
    pub weight: Weight,
    pub open: bool,
}

/// An incident edge as seen from one endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Adjacent {
    pub to: NodeId,
    pub weight: Weight,
    pub open: bool,
}

/// A weighted undirected edge in a result set (spanning tree, induced subgraph)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct WeightedEdge {
    pub weight: Weight,
    pub key: EdgeKey,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_key_is_orientation_free() {
        assert_eq!(EdgeKey::new(23, 13), EdgeKey::new(13, 23));
        assert_eq!(EdgeKey::new(23, 13).low, 13);
        assert_eq!(EdgeKey::new(23, 13).high, 23);
    }

    #[test]
    fn test_edge_key_display() {
        assert_eq!(EdgeKey::new(24, 23).to_string(), "23-24");
    }

    #[test]
    fn test_edge_status_from_open() {
        assert_eq!(EdgeStatus::from_open(true), EdgeStatus::Open);
        assert_eq!(EdgeStatus::from_open(false), EdgeStatus::Closed);
        assert!(!EdgeStatus::Absent.is_open());
    }

    #[test]
    fn test_weighted_edges_sort_by_weight_first() {
        let mut edges = vec![
            WeightedEdge {
                weight: 5,
                key: EdgeKey::new(1, 2),
            },
            WeightedEdge {
                weight: 3,
                key: EdgeKey::new(7, 9),
            },
        ];
        edges.sort();
        assert_eq!(edges[0].weight, 3);
    }
}
