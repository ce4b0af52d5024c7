//! Configuration file parsing, merging and validation
//!
//! This module handles:
//! - Config file discovery from multiple locations
//! - TOML parsing with serde
//! - Layer merging with precedence rules (CLI flags on top)
//! - Validation and startup root checks

mod discovery;
mod merge;
mod types;
mod validation;


use std::path::Path;

pub use discovery::{ConfigDiscovery, ConfigFiles, PROJECT_CONFIG_NAME};
pub use merge::ConfigMerger;
pub use types::{ConfigLayer, DEFAULT_INTERVAL_SECS, SyncConfig};
pub use validation::ConfigValidator;

use crate::error::Result;

/// Configuration manager that coordinates discovery, parsing, merging, and validation
pub struct ConfigManager;

impl ConfigManager {
    /// Load configuration from all sources, with `overrides` taking precedence
    ///
    /// With `no_config` set, no files are read and only `overrides` count.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file is invalid or the merged settings
    /// fail validation.
    pub fn load(
        cli_config_path: Option<&Path>,
        no_config: bool,
        overrides: ConfigLayer,
    ) -> Result<SyncConfig> {
        let files = if no_config {
            ConfigFiles::default()
        } else {
            ConfigDiscovery::discover(cli_config_path)
        };

        Self::load_files(&files, overrides)
    }

    /// Load configuration from an explicit set of files, skipping discovery
    ///
    /// # Errors
    ///
    /// Returns an error if a config file is invalid or the merged settings
    /// fail validation.
    pub fn load_files(files: &ConfigFiles, overrides: ConfigLayer) -> Result<SyncConfig> {
        for path in files.in_merge_order() {
            tracing::debug!(path = %path.display(), "loading config file");
        }

        let merged = ConfigMerger::merge(files)?.overlay(overrides);
        ConfigValidator::resolve(merged)
    }
}
