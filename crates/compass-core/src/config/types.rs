//! Configuration type definitions

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::roster::DEFAULT_MAX_CLASSES;

/// Default config file name looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "compass.toml";

/// Top-level compass configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompassConfig {
    /// Campus data file locations
    #[serde(default)]
    pub data: DataConfig,

    /// Roster limits
    #[serde(default)]
    pub limits: LimitsConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataConfig {
    /// Edges CSV (`LocationID_1,LocationID_2,Name_1,Name_2,Time`)
    #[serde(default = "default_edges_path")]
    pub edges: PathBuf,

    /// Classes CSV (`ClassCode,LocationID,StartTime,EndTime`)
    #[serde(default = "default_classes_path")]
    pub classes: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            edges: default_edges_path(),
            classes: default_classes_path(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LimitsConfig {
    /// Upper bound on classes given to `insert`
    #[serde(default = "default_max_classes")]
    pub max_classes_per_student: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_classes_per_student: default_max_classes(),
        }
    }
}

fn default_edges_path() -> PathBuf {
    PathBuf::from("data/edges.csv")
}

fn default_classes_path() -> PathBuf {
    PathBuf::from("data/classes.csv")
}

fn default_max_classes() -> usize {
    DEFAULT_MAX_CLASSES
}
