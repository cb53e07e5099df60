//! Compass configuration
//!
//! Configuration lives in an optional `compass.toml`. Every field has a
//! default, so a partial file (or none at all) is valid.

pub mod types;

use std::fs;
use std::path::Path;

use crate::bail_invalid;
use crate::error::{CompassError, Result};

pub use types::{CompassConfig, DataConfig, LimitsConfig, CONFIG_FILE_NAME};

impl CompassConfig {
    /// Load configuration from a file
    ///
    /// Relative data paths are resolved against the directory holding the file.
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|e| CompassError::data_file(path, e))?;
        let mut config: CompassConfig = toml::from_str(&content)?;

        if let Some(base) = path.parent() {
            config.data.edges = base.join(&config.data.edges);
            config.data.classes = base.join(&config.data.classes);
        }

        if config.limits.max_classes_per_student == 0 {
            bail_invalid!("limits.max_classes_per_student", 0);
        }

        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Load `path` if given, else `compass.toml` in `dir` when present, else defaults
    pub fn discover(path: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }

        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| CompassError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = CompassConfig::default();
        assert_eq!(config.data.edges, PathBuf::from("data/edges.csv"));
        assert_eq!(config.data.classes, PathBuf::from("data/classes.csv"));
        assert_eq!(config.limits.max_classes_per_student, 6);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("compass.toml");
        fs::write(&path, "[limits]\nmax_classes_per_student = 4\n").unwrap();

        let config = CompassConfig::load(&path).unwrap();
        assert_eq!(config.limits.max_classes_per_student, 4);
        assert_eq!(config.data.edges, dir.path().join("data/edges.csv"));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("compass.toml");

        let mut config = CompassConfig::default();
        config.data.edges = PathBuf::from("campus/edges.csv");
        config.limits.max_classes_per_student = 3;
        config.save(&path).unwrap();

        let loaded = CompassConfig::load(&path).unwrap();
        assert_eq!(loaded.data.edges, dir.path().join("campus/edges.csv"));
        assert_eq!(loaded.data.classes, dir.path().join("data/classes.csv"));
        assert_eq!(loaded.limits.max_classes_per_student, 3);
    }

    #[test]
    fn test_absolute_paths_are_kept() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("compass.toml");
        let edges = dir.path().join("elsewhere").join("edges.csv");
        fs::write(
            &path,
            format!("[data]\nedges = {:?}\n", edges.display().to_string()),
        )
        .unwrap();

        let config = CompassConfig::load(&path).unwrap();
        assert_eq!(config.data.edges, edges);
    }

    #[test]
    fn test_zero_class_limit_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("compass.toml");
        fs::write(&path, "[limits]\nmax_classes_per_student = 0\n").unwrap();
        assert!(matches!(
            CompassConfig::load(&path),
            Err(CompassError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_discover_without_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let config = CompassConfig::discover(None, dir.path()).unwrap();
        assert_eq!(config, CompassConfig::default());
    }

    #[test]
    fn test_missing_explicit_file_is_data_error() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let err = CompassConfig::discover(Some(missing.as_path()), dir.path()).unwrap_err();
        assert!(matches!(err, CompassError::DataFile { .. }));
    }

    #[test]
    fn test_malformed_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("compass.toml");
        fs::write(&path, "[limits\n").unwrap();
        assert!(matches!(
            CompassConfig::load(&path),
            Err(CompassError::Toml(_))
        ));
    }
}
