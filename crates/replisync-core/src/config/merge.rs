//! Configuration merging with precedence rules
//!
//! Every key is a plain override: a value set in a higher-precedence layer
//! replaces the lower one, and unset keys fall through.

use std::fs;
use std::path::Path;

use super::discovery::ConfigFiles;
use super::types::ConfigLayer;
use crate::error::{Result, SyncError};

/// Configuration merger
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge discovered config files
    ///
    /// Precedence order (highest to lowest):
    /// 1. CLI config
    /// 2. .replisync.toml
    /// 3. Global config
    ///
    /// # Errors
    ///
    /// Returns an error if a config file cannot be read or parsed.
    pub fn merge(files: &ConfigFiles) -> Result<ConfigLayer> {
        files
            .in_merge_order()
            .try_fold(ConfigLayer::default(), |merged, path| {
                Ok(merged.overlay(Self::load_file(path)?))
            })
    }

    /// Load one config file, anchoring relative paths at its directory
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::ConfigParse`] if the file cannot be read or parsed.
    pub fn load_file(path: &Path) -> Result<ConfigLayer> {
        let parse_error = |reason: String| SyncError::ConfigParse {
            path: path.to_path_buf(),
            reason,
        };

        let content = fs::read_to_string(path).map_err(|e| parse_error(e.to_string()))?;
        let layer: ConfigLayer =
            toml::from_str(&content).map_err(|e| parse_error(e.to_string()))?;

        Ok(match path.parent() {
            Some(base) => layer.relative_to(base),
            None => layer,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_merge_cli_overrides_global() {
        let tmp = TempDir::new().unwrap();
        let global = tmp.path().join("global.toml");
        let cli = tmp.path().join("cli.toml");
        fs::write(&global, "interval_secs = 60\nsource_path = \"/g/src\"\n").unwrap();
        fs::write(&cli, "interval_secs = 5\n").unwrap();

        let files = ConfigFiles {
            cli: Some(cli),
            project: None,
            global: Some(global),
        };
        let merged = ConfigMerger::merge(&files).unwrap();

        assert_eq!(merged.interval_secs, Some(5));
        assert_eq!(merged.source_path, Some(PathBuf::from("/g/src")));
    }

    #[test]
    fn test_load_file_anchors_relative_paths() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("replisync.toml");
        fs::write(&file, "replica_path = \"mirror\"\n").unwrap();

        let layer = ConfigMerger::load_file(&file).unwrap();

        assert_eq!(layer.replica_path, Some(tmp.path().join("mirror")));
    }

    #[test]
    fn test_load_missing_file_fails() {
        let tmp = TempDir::new().unwrap();
        let result = ConfigMerger::load_file(&tmp.path().join("absent.toml"));
        assert!(matches!(result, Err(SyncError::ConfigParse { .. })));
    }

    #[test]
    fn test_load_invalid_toml_fails() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("bad.toml");
        fs::write(&file, "interval_secs = \"soon\"\n").unwrap();

        let err = ConfigMerger::load_file(&file).unwrap_err();
        assert!(err.to_string().contains("bad.toml"));
    }

    #[test]
    fn test_merge_no_files() {
        let merged = ConfigMerger::merge(&ConfigFiles::default()).unwrap();
        assert_eq!(merged, ConfigLayer::default());
    }
}
