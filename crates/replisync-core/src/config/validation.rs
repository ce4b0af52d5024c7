//! Configuration validation and startup checks

use std::path::{Path, PathBuf};
use std::time::Duration;

use super::types::{ConfigLayer, DEFAULT_INTERVAL_SECS, SyncConfig};
use crate::error::{PathRole, Result, SyncError};

/// Configuration validator
pub struct ConfigValidator;

impl ConfigValidator {
    /// Resolve a merged layer into validated settings
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::Config`] if a root is missing, the roots are the
    /// same path, or the interval is zero.
    pub fn resolve(layer: ConfigLayer) -> Result<SyncConfig> {
        let source_path = layer
            .source_path
            .ok_or_else(|| SyncError::Config("source path is required".to_string()))?;
        let replica_path = layer
            .replica_path
            .ok_or_else(|| SyncError::Config("replica path is required".to_string()))?;

        let config = SyncConfig {
            source_path,
            replica_path,
            interval: Duration::from_secs(layer.interval_secs.unwrap_or(DEFAULT_INTERVAL_SECS)),
            log_path: layer.log_path,
            dry_run: layer.dry_run.unwrap_or(false),
        };
        Self::validate(&config)?;

        Ok(config)
    }

    /// Validate resolved settings
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::Config`] describing the first problem found.
    pub fn validate(config: &SyncConfig) -> Result<()> {
        if config.source_path.as_os_str().is_empty() {
            return Err(SyncError::Config("source path cannot be empty".to_string()));
        }

        if config.replica_path.as_os_str().is_empty() {
            return Err(SyncError::Config("replica path cannot be empty".to_string()));
        }

        if config.source_path == config.replica_path {
            return Err(SyncError::Config(format!(
                "source and replica must differ: {}",
                config.source_path.display()
            )));
        }

        if config.interval.is_zero() {
            return Err(SyncError::Config(
                "interval must be at least 1 second".to_string(),
            ));
        }

        Ok(())
    }

    /// Check that both roots exist, are directories and do not overlap
    ///
    /// Called once before the first cycle; cycles do not re-check. Overlap is
    /// judged on canonical paths, so `./data` and `data` are the same root.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::PathNotFound`] or [`SyncError::NotADirectory`]
    /// for the first offending root, source first, and [`SyncError::Config`]
    /// when the roots are the same directory or one contains the other.
    pub fn verify_roots(source: &Path, replica: &Path) -> Result<()> {
        Self::verify_root(PathRole::Source, source)?;
        Self::verify_root(PathRole::Replica, replica)?;

        let source = Self::canonical(source)?;
        let replica = Self::canonical(replica)?;

        if source == replica {
            return Err(SyncError::Config(format!(
                "source and replica must differ: {}",
                source.display()
            )));
        }

        if replica.starts_with(&source) {
            return Err(SyncError::Config(format!(
                "replica {} is inside source {}",
                replica.display(),
                source.display()
            )));
        }

        if source.starts_with(&replica) {
            return Err(SyncError::Config(format!(
                "source {} is inside replica {}",
                source.display(),
                replica.display()
            )));
        }

        Ok(())
    }

    fn canonical(path: &Path) -> Result<PathBuf> {
        path.canonicalize().map_err(|source| SyncError::Metadata {
            path: path.to_path_buf(),
            source,
        })
    }

    fn verify_root(role: PathRole, path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(SyncError::PathNotFound {
                role,
                path: path.to_path_buf(),
            });
        }

        if !path.is_dir() {
            return Err(SyncError::NotADirectory {
                role,
                path: path.to_path_buf(),
            });
        }

        Ok(())
    }
}
