use anyhow::Context;
use replisync_core::config::SyncConfig;
use replisync_core::sync::{SyncEngine, SyncReporter};

use super::SyncOptions;
use super::common::verify_roots;

pub struct Once;

impl Once {
    pub fn execute(config: &SyncConfig, options: &SyncOptions) -> anyhow::Result<()> {
        if options.verbose {
            println!("Executing once command");
            println!("Dry run: {}", config.dry_run);
        }

        verify_roots(config)?;

        let engine = SyncEngine::from_config(config);
        let report = engine
            .apply_cycle(&config.source_path, &config.replica_path)
            .context("Sync cycle failed")?;

        let summary = SyncReporter::generate_summary(&report);
        println!("{summary}");

        Ok(())
    }
}
