//! Sync orchestration - coordinates one cycle

use std::path::Path;

use super::CycleReport;
use super::actions::{SyncAction, SyncActionResolver};
use super::executor::FileOperationExecutor;
use crate::comparison::{DiffEngine, SyncPlan, display_names};
use crate::config::SyncConfig;
use crate::error::Result;
use crate::scanner::Scanner;

/// Main sync engine
#[derive(Debug, Clone, Copy, Default)]
pub struct SyncEngine {
    dry_run: bool,
}

impl SyncEngine {
    /// Create a new sync engine
    #[must_use]
    pub const fn new(dry_run: bool) -> Self {
        Self { dry_run }
    }

    /// Create a sync engine from resolved configuration
    #[must_use]
    pub const fn from_config(config: &SyncConfig) -> Self {
        Self::new(config.dry_run)
    }

    /// Whether the engine only logs what it would do
    #[must_use]
    pub const fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Run one sync cycle: removals first, then copies
    ///
    /// Both roots are listed once, the plan is derived from those listings,
    /// and the first failing entry aborts the rest of the cycle. Work already
    /// done is not rolled back.
    ///
    /// # Errors
    ///
    /// Returns an error if listing fails or any removal or copy fails.
    pub fn apply_cycle(&self, source_root: &Path, replica_root: &Path) -> Result<CycleReport> {
        let source = Scanner::list(source_root)?;
        let replica = Scanner::list(replica_root)?;
        let plan = DiffEngine::plan_from_listings(&source, &replica);

        let mut report = CycleReport {
            dry_run: self.dry_run,
            ..CycleReport::default()
        };

        if plan.is_empty() {
            tracing::debug!(
                source = %source_root.display(),
                replica = %replica_root.display(),
                "replica already in sync"
            );
            return Ok(report);
        }

        let executor = FileOperationExecutor::new(self.dry_run);

        if !plan.removals.is_empty() {
            tracing::info!(
                names = %display_names(&plan.removals),
                replica = %replica_root.display(),
                source = %source_root.display(),
                "removing entries absent from source"
            );
            for action in SyncActionResolver::resolve_removals(&plan, replica_root) {
                executor.execute(&action, &mut report)?;
            }
            tracing::info!(count = report.removed.len(), "removals complete");
        }

        if !plan.copies.is_empty() {
            tracing::info!(
                names = %display_names(&plan.copies),
                source = %source_root.display(),
                replica = %replica_root.display(),
                "copying entries from source"
            );
            for action in SyncActionResolver::resolve_copies(&plan, &source, replica_root) {
                executor.execute(&action, &mut report)?;
            }
            tracing::info!(count = report.copied.len(), "copies complete");
        }

        Ok(report)
    }

    /// Compute the plan and the actions a cycle would run, without applying
    ///
    /// # Errors
    ///
    /// Returns an error if either root cannot be listed.
    pub fn preview(source_root: &Path, replica_root: &Path) -> Result<(SyncPlan, Vec<SyncAction>)> {
        let source = Scanner::list(source_root)?;
        let replica = Scanner::list(replica_root)?;
        let plan = DiffEngine::plan_from_listings(&source, &replica);

        let mut actions = SyncActionResolver::resolve_removals(&plan, replica_root);
        actions.extend(SyncActionResolver::resolve_copies(&plan, &source, replica_root));

        Ok((plan, actions))
    }
}
