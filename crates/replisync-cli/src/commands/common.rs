//! Common types and utilities for command execution

use std::path::PathBuf;

use anyhow::Context;
use replisync_core::config::{ConfigLayer, ConfigManager, ConfigValidator, SyncConfig};

use crate::cli::Cli;

/// Execution options shared by all commands
pub struct SyncOptions {
    /// Enable verbose output
    pub verbose: bool,
    /// Path to custom config file
    pub config_path: Option<PathBuf>,
    /// Skip loading all config files
    pub no_config: bool,
    /// Values given on the command line, applied over config files
    pub overrides: ConfigLayer,
}

impl SyncOptions {
    /// Collect options from parsed arguments
    #[must_use]
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            verbose: cli.verbose,
            config_path: cli.config.clone(),
            no_config: cli.no_config,
            overrides: ConfigLayer {
                source_path: cli.source_path.clone(),
                replica_path: cli.replica_path.clone(),
                interval_secs: cli.interval,
                log_path: cli.log_path.clone(),
                // An absent flag must not switch off dry_run set in a config file
                dry_run: cli.dry_run.then_some(true),
            },
        }
    }

    /// Resolve the final configuration
    pub fn load_config(&self) -> anyhow::Result<SyncConfig> {
        ConfigManager::load(
            self.config_path.as_deref(),
            self.no_config,
            self.overrides.clone(),
        )
        .context("Failed to load configuration")
    }
}

/// Check that both roots exist before any cycle runs
pub fn verify_roots(config: &SyncConfig) -> anyhow::Result<()> {
    if let Err(e) = ConfigValidator::verify_roots(&config.source_path, &config.replica_path) {
        tracing::error!("{e}. Please check the path.");
        return Err(e).context("Cannot start synchronization");
    }
    Ok(())
}
