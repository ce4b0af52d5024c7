//! Diff engine: decides which replica entries to remove and which source
//! entries to copy
//!
//! Only the top level of each root is compared. Entries are matched by exact,
//! case-sensitive name; shared entries are compared by modification time.

mod diff;
mod timestamp;


use std::collections::BTreeSet;
use std::ffi::OsString;

pub use diff::DiffEngine;
pub use timestamp::TimestampComparator;

/// Names scheduled for one sync cycle
///
/// Computed fresh each cycle from one listing per side and discarded once
/// the cycle finishes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncPlan {
    /// Replica entries absent from the source
    pub removals: BTreeSet<OsString>,
    /// Source entries missing from the replica or with a differing mtime
    pub copies: BTreeSet<OsString>,
}

impl SyncPlan {
    /// Whether the replica is already in sync
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.removals.is_empty() && self.copies.is_empty()
    }

    /// Total number of scheduled entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.removals.len() + self.copies.len()
    }
}

/// Render a name set for log fields and reports
#[must_use]
pub fn display_names(names: &BTreeSet<OsString>) -> String {
    let rendered: Vec<_> = names.iter().map(|name| name.to_string_lossy()).collect();
    format!("[{}]", rendered.join(", "))
}
