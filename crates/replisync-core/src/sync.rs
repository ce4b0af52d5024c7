//! One-directional synchronization engine
//!
//! A cycle lists both roots, plans, then removes stale replica entries before
//! copying source entries in. The source is never written to.

mod actions;
mod executor;
mod orchestrator;
mod reporting;

use std::ffi::OsString;

pub use actions::{SyncAction, SyncActionResolver};
pub use executor::FileOperationExecutor;
pub use orchestrator::SyncEngine;
pub use reporting::SyncReporter;

/// Outcome of a completed sync cycle
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CycleReport {
    /// Entries removed from the replica
    pub removed: Vec<OsString>,
    /// Entries copied from the source
    pub copied: Vec<OsString>,
    /// Whether the cycle only logged its actions
    pub dry_run: bool,
}

impl CycleReport {
    /// Total operations performed
    #[must_use]
    pub fn total_operations(&self) -> usize {
        self.removed.len() + self.copied.len()
    }

    /// Whether the cycle found nothing to do
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.removed.is_empty() && self.copied.is_empty()
    }
}
