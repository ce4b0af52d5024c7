//! Configuration types and structures

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default interval between cycles, in seconds
pub const DEFAULT_INTERVAL_SECS: u64 = 10;

/// One layer of partially specified settings
///
/// Config files and command-line flags each produce a layer; layers are
/// overlaid in precedence order and then resolved into a [`SyncConfig`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigLayer {
    /// Authoritative source directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_path: Option<PathBuf>,

    /// Replica directory kept in sync
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replica_path: Option<PathBuf>,

    /// Seconds between cycles
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval_secs: Option<u64>,

    /// Directory for log files
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_path: Option<PathBuf>,

    /// Log actions without touching the replica
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
}

impl ConfigLayer {
    /// Overlay `higher` on top of `self`; values set in `higher` win
    #[must_use]
    pub fn overlay(self, higher: Self) -> Self {
        Self {
            source_path: higher.source_path.or(self.source_path),
            replica_path: higher.replica_path.or(self.replica_path),
            interval_secs: higher.interval_secs.or(self.interval_secs),
            log_path: higher.log_path.or(self.log_path),
            dry_run: higher.dry_run.or(self.dry_run),
        }
    }

    /// Resolve relative paths against `base` (the directory of a config file)
    #[must_use]
    pub fn relative_to(self, base: &Path) -> Self {
        let anchor = |path: Option<PathBuf>| {
            path.map(|p| if p.is_relative() { base.join(p) } else { p })
        };

        Self {
            source_path: anchor(self.source_path),
            replica_path: anchor(self.replica_path),
            log_path: anchor(self.log_path),
            ..self
        }
    }
}

/// Fully resolved settings for the engine and the scheduler
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncConfig {
    /// Authoritative source directory
    pub source_path: PathBuf,
    /// Replica directory kept in sync
    pub replica_path: PathBuf,
    /// Time between cycles
    pub interval: Duration,
    /// Directory for log files, if file logging is wanted
    pub log_path: Option<PathBuf>,
    /// Log actions without touching the replica
    pub dry_run: bool,
}

impl SyncConfig {
    /// Settings for a pair of roots with default interval and no log file
    #[must_use]
    pub fn new(source_path: impl Into<PathBuf>, replica_path: impl Into<PathBuf>) -> Self {
        Self {
            source_path: source_path.into(),
            replica_path: replica_path.into(),
            interval: Duration::from_secs(DEFAULT_INTERVAL_SECS),
            log_path: None,
            dry_run: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_default_is_empty() {
        let layer = ConfigLayer::default();
        assert!(layer.source_path.is_none());
        assert!(layer.interval_secs.is_none());
        assert!(layer.dry_run.is_none());
    }

    #[test]
    fn test_overlay_higher_wins() {
        let lower = ConfigLayer {
            source_path: Some(PathBuf::from("/low/src")),
            interval_secs: Some(30),
            dry_run: Some(true),
            ..ConfigLayer::default()
        };
        let higher = ConfigLayer {
            source_path: Some(PathBuf::from("/high/src")),
            dry_run: Some(false),
            ..ConfigLayer::default()
        };

        let merged = lower.overlay(higher);

        assert_eq!(merged.source_path, Some(PathBuf::from("/high/src")));
        assert_eq!(merged.interval_secs, Some(30));
        assert_eq!(merged.dry_run, Some(false));
    }

    #[test]
    fn test_relative_to_anchors_only_relative_paths() {
        let layer = ConfigLayer {
            source_path: Some(PathBuf::from("data")),
            replica_path: Some(PathBuf::from("/abs/replica")),
            ..ConfigLayer::default()
        };

        let anchored = layer.relative_to(Path::new("/etc/replisync"));

        assert_eq!(anchored.source_path, Some(PathBuf::from("/etc/replisync/data")));
        assert_eq!(anchored.replica_path, Some(PathBuf::from("/abs/replica")));
    }

    #[test]
    fn test_layer_toml_roundtrip_keys() {
        let layer: ConfigLayer = toml::from_str(
            r#"
source_path = "/data/source"
interval_secs = 5
dry_run = true
"#,
        )
        .unwrap();

        assert_eq!(layer.source_path, Some(PathBuf::from("/data/source")));
        assert_eq!(layer.interval_secs, Some(5));
        assert_eq!(layer.dry_run, Some(true));
    }

    #[test]
    fn test_layer_rejects_unknown_keys() {
        let result: Result<ConfigLayer, _> = toml::from_str("sourcepath = \"/typo\"");
        assert!(result.is_err());
    }
}
