//! CSV loading for campus edges and class sessions

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Instant;

use csv::{ByteRecord, ReaderBuilder, StringRecord, Trim};
use serde::Serialize;

use crate::campus::Campus;
use crate::error::{CompassError, Result};
use crate::graph::{CampusGraph, NodeId, Weight};
use crate::schedule::{ClassCode, ClassInfo, ClassTable, ClockTime};
use crate::trace_time;

/// Row counts from one CSV file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadStats {
    /// Rows applied
    pub rows: usize,
    /// Rows that could not be decoded or parsed
    pub skipped: usize,
}

/// Campus plus the row counts of both files it was built from
#[derive(Debug, Clone)]
pub struct LoadedCampus {
    pub campus: Campus,
    pub edges: LoadStats,
    pub classes: LoadStats,
}

fn reader<R: Read>(source: R) -> csv::Reader<R> {
    ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(source)
}

/// Decode one row; rows that are not valid UTF-8 are counted as skipped
fn decode(
    record: ByteRecord,
    row: usize,
    kind: &str,
    stats: &mut LoadStats,
) -> Option<StringRecord> {
    match StringRecord::from_byte_record(record) {
        Ok(record) => Some(record),
        Err(e) => {
            tracing::warn!(row, kind, error = %e, "skipping row that is not valid UTF-8");
            stats.skipped += 1;
            None
        }
    }
}

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| CompassError::data_file(path, e))
}

/// Load both data files into a fresh campus
pub fn load_campus(edges: &Path, classes: &Path, max_classes: usize) -> Result<LoadedCampus> {
    let start = Instant::now();
    let mut graph = CampusGraph::new();
    let mut table = ClassTable::new();
    let edge_stats = load_edges(edges, &mut graph)?;
    let class_stats = load_classes(classes, &mut table, &mut graph)?;

    tracing::info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        classes = table.len(),
        "campus loaded"
    );
    trace_time!(start, "load_campus");

    Ok(LoadedCampus {
        campus: Campus::new(graph, table, max_classes),
        edges: edge_stats,
        classes: class_stats,
    })
}

pub fn load_edges(path: &Path, graph: &mut CampusGraph) -> Result<LoadStats> {
    let stats = read_edges(open(path)?, graph)?;
    tracing::debug!(path = %path.display(), rows = stats.rows, skipped = stats.skipped, "edges read");
    Ok(stats)
}

pub fn load_classes(
    path: &Path,
    classes: &mut ClassTable,
    graph: &mut CampusGraph,
) -> Result<LoadStats> {
    let stats = read_classes(open(path)?, classes, graph)?;
    tracing::debug!(path = %path.display(), rows = stats.rows, skipped = stats.skipped, "classes read");
    Ok(stats)
}

/// Read `LocationID_1,LocationID_2,Name_1,Name_2,Time` rows
///
/// Every row adds an open edge; a repeated pair overwrites the earlier weight.
pub fn read_edges<R: Read>(source: R, graph: &mut CampusGraph) -> Result<LoadStats> {
    let mut stats = LoadStats::default();

    for (index, record) in reader(source).byte_records().enumerate() {
        let Some(record) = decode(record?, index + 2, "edge", &mut stats) else {
            continue;
        };
        match parse_edge(&record) {
            Some((a, b, name_a, name_b, weight)) => {
                graph.set_name(a, name_a);
                graph.set_name(b, name_b);
                if graph.add_edge(a, b, weight) {
                    tracing::warn!(a, b, "duplicate edge row replaces earlier weight");
                }
                stats.rows += 1;
            }
            None => {
                tracing::warn!(row = index + 2, record = ?record, "skipping malformed edge row");
                stats.skipped += 1;
            }
        }
    }

    Ok(stats)
}

fn parse_edge(record: &StringRecord) -> Option<(NodeId, NodeId, &str, &str, Weight)> {
    if record.len() < 5 {
        return None;
    }
    let a = record.get(0)?.parse().ok()?;
    let b = record.get(1)?.parse().ok()?;
    let weight = record.get(4)?.parse().ok()?;
    Some((a, b, record.get(2)?, record.get(3)?, weight))
}

/// Read `ClassCode,LocationID,StartTime,EndTime` rows
///
/// Class locations become graph nodes even when no edge touches them.
pub fn read_classes<R: Read>(
    source: R,
    classes: &mut ClassTable,
    graph: &mut CampusGraph,
) -> Result<LoadStats> {
    let mut stats = LoadStats::default();

    for (index, record) in reader(source).byte_records().enumerate() {
        let Some(record) = decode(record?, index + 2, "class", &mut stats) else {
            continue;
        };
        match parse_class(&record) {
            Some(class) => {
                graph.ensure_node(class.location);
                if let Some(previous) = classes.insert(class) {
                    tracing::warn!(code = %previous.code, "duplicate class row replaces earlier entry");
                }
                stats.rows += 1;
            }
            None => {
                tracing::warn!(row = index + 2, record = ?record, "skipping malformed class row");
                stats.skipped += 1;
            }
        }
    }

    Ok(stats)
}

fn parse_class(record: &StringRecord) -> Option<ClassInfo> {
    if record.len() < 4 {
        return None;
    }
    let code: ClassCode = record.get(0)?.parse().ok()?;
    let location = record.get(1)?.parse().ok()?;
    let start: ClockTime = record.get(2)?.parse().ok()?;
    let end: ClockTime = record.get(3)?.parse().ok()?;
    Some(ClassInfo {
        code,
        location,
        start,
        end,
    })
}
