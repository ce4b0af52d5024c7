//! Fixed-interval driver for repeated sync cycles
//!
//! Runs a cycle immediately, then waits for the interval. The wait is a
//! `recv_timeout` on a shutdown channel, so a stop request ends it at once.

use std::path::Path;
use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::time::Duration;

use crate::config::SyncConfig;
use crate::sync::SyncEngine;

/// Counters for a finished scheduler run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SchedulerSummary {
    /// Cycles attempted
    pub cycles_run: u64,
    /// Cycles that ended in an error
    pub cycles_failed: u64,
}

/// Repeats sync cycles at a fixed interval
pub struct CycleScheduler {
    engine: SyncEngine,
    interval: Duration,
    max_cycles: Option<u64>,
}

impl CycleScheduler {
    /// Create a scheduler with no cycle limit
    #[must_use]
    pub const fn new(engine: SyncEngine, interval: Duration) -> Self {
        Self {
            engine,
            interval,
            max_cycles: None,
        }
    }

    /// Create a scheduler from resolved configuration
    #[must_use]
    pub const fn from_config(config: &SyncConfig) -> Self {
        Self::new(SyncEngine::from_config(config), config.interval)
    }

    /// Stop after `max_cycles` cycles
    #[must_use]
    pub fn with_max_cycles(mut self, max_cycles: Option<u64>) -> Self {
        self.max_cycles = max_cycles;
        self
    }

    /// Run cycles until shutdown is requested or the cycle limit is reached
    ///
    /// A message on `shutdown`, or the sender being dropped, stops the loop.
    /// A failed cycle is logged and counted; the next cycle still runs.
    pub fn run(&self, source: &Path, replica: &Path, shutdown: &Receiver<()>) -> SchedulerSummary {
        let mut summary = SchedulerSummary::default();

        tracing::info!(
            source = %source.display(),
            replica = %replica.display(),
            interval_secs = self.interval.as_secs(),
            dry_run = self.engine.is_dry_run(),
            "sync scheduler started"
        );

        loop {
            summary.cycles_run += 1;
            match self.engine.apply_cycle(source, replica) {
                Ok(report) => {
                    tracing::debug!(
                        cycle = summary.cycles_run,
                        operations = report.total_operations(),
                        "cycle finished"
                    );
                }
                Err(e) => {
                    summary.cycles_failed += 1;
                    tracing::error!(cycle = summary.cycles_run, "sync cycle failed: {e}");
                }
            }

            if self.max_cycles.is_some_and(|max| summary.cycles_run >= max) {
                tracing::info!(cycles = summary.cycles_run, "cycle limit reached");
                break;
            }

            match shutdown.recv_timeout(self.interval) {
                Err(RecvTimeoutError::Timeout) => {}
                Ok(()) | Err(RecvTimeoutError::Disconnected) => {
                    tracing::info!("shutdown requested");
                    break;
                }
            }
        }

        tracing::info!(
            cycles_run = summary.cycles_run,
            cycles_failed = summary.cycles_failed,
            "sync scheduler stopped"
        );
        summary
    }
}
