//! Modification time comparison for staleness detection

use std::cmp::Ordering;
use std::fs;
use std::path::Path;
use std::time::SystemTime;

use crate::error::{Result, SyncError};
use crate::scanner::DirectoryEntry;

/// Timestamp comparator
pub struct TimestampComparator;

impl TimestampComparator {
    /// Whether a replica entry is stale relative to its source entry
    ///
    /// Any difference counts, in either direction. There is no tolerance
    /// window, so coarse-resolution filesystems may re-copy every cycle.
    #[must_use]
    pub fn is_stale(source: &DirectoryEntry, replica: &DirectoryEntry) -> bool {
        source.modified != replica.modified
    }

    /// Get the modification time of a path, following symlinks
    ///
    /// # Errors
    ///
    /// Returns an error if metadata cannot be read.
    pub fn get_modified_time(path: &Path) -> Result<SystemTime> {
        let metadata_error = |source| SyncError::Metadata {
            path: path.to_path_buf(),
            source,
        };

        fs::metadata(path)
            .and_then(|metadata| metadata.modified())
            .map_err(metadata_error)
    }

    /// Compare modification times and return ordering of source relative to replica
    ///
    /// # Errors
    ///
    /// Returns an error if metadata cannot be read.
    pub fn compare_times(source: &Path, replica: &Path) -> Result<Ordering> {
        let source_time = Self::get_modified_time(source)?;
        let replica_time = Self::get_modified_time(replica)?;

        Ok(source_time.cmp(&replica_time))
    }
}
