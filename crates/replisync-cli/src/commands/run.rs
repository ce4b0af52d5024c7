use std::sync::mpsc;

use anyhow::Context;
use replisync_core::config::SyncConfig;
use replisync_core::schedule::CycleScheduler;

use super::SyncOptions;
use super::common::verify_roots;

pub struct Run;

impl Run {
    pub fn execute(
        config: &SyncConfig,
        max_cycles: Option<u64>,
        options: &SyncOptions,
    ) -> anyhow::Result<()> {
        if options.verbose {
            println!("Executing run command");
            println!("Interval: {}s", config.interval.as_secs());
            println!("Max cycles: {max_cycles:?}");
        }

        verify_roots(config)?;

        // Ctrl+C ends the current wait instead of killing a cycle halfway
        let (shutdown_tx, shutdown_rx) = mpsc::channel();
        ctrlc::set_handler(move || {
            let _ = shutdown_tx.send(());
        })
        .context("Failed to set Ctrl+C handler")?;

        let summary = CycleScheduler::from_config(config)
            .with_max_cycles(max_cycles)
            .run(&config.source_path, &config.replica_path, &shutdown_rx);

        println!(
            "Stopped after {} cycle(s), {} failed",
            summary.cycles_run, summary.cycles_failed
        );

        Ok(())
    }
}
