//! Compass Core Library
//!
//! Campus routing domain: the walkway graph, shortest-path and zone queries,
//! class schedules, the student roster, and CSV/TOML loading.

pub mod campus;
pub mod config;
pub mod error;
pub mod graph;
pub mod load;
pub mod logging;
pub mod roster;
pub mod schedule;
