//! Sync action determination logic

use std::ffi::OsStr;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::comparison::SyncPlan;
use crate::scanner::DirectoryListing;

/// Filesystem operation scheduled for a cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncAction {
    /// Remove a replica entry (directories only when empty)
    Remove {
        /// Replica entry path
        path: PathBuf,
    },
    /// Copy a single file into the replica, overwriting
    CopyFile {
        /// Source file path
        source: PathBuf,
        /// Destination file path
        dest: PathBuf,
    },
    /// Copy a directory subtree into the replica
    CopyDirectory {
        /// Source directory path
        source: PathBuf,
        /// Destination directory path
        dest: PathBuf,
    },
}

impl SyncAction {
    /// Replica path this action touches
    #[must_use]
    pub fn target(&self) -> &Path {
        match self {
            Self::Remove { path } => path,
            Self::CopyFile { dest, .. } | Self::CopyDirectory { dest, .. } => dest,
        }
    }

    /// Top-level entry name this action is about
    #[must_use]
    pub fn name(&self) -> &OsStr {
        self.target().file_name().unwrap_or_default()
    }
}

impl fmt::Display for SyncAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Remove { path } => write!(f, "remove {}", path.display()),
            Self::CopyFile { source, dest } => {
                write!(f, "copy file {} -> {}", source.display(), dest.display())
            }
            Self::CopyDirectory { source, dest } => {
                write!(f, "copy directory {} -> {}", source.display(), dest.display())
            }
        }
    }
}

/// Resolves a plan into concrete actions
pub struct SyncActionResolver;

impl SyncActionResolver {
    /// Removal actions, one per planned removal name
    #[must_use]
    pub fn resolve_removals(plan: &SyncPlan, replica_root: &Path) -> Vec<SyncAction> {
        plan.removals
            .iter()
            .map(|name| SyncAction::Remove {
                path: replica_root.join(name),
            })
            .collect()
    }

    /// Copy actions, one per planned copy name
    ///
    /// The source listing decides between a file and a directory copy. A
    /// name missing from the listing is treated as a file so the copy
    /// surfaces the real filesystem error.
    #[must_use]
    pub fn resolve_copies(
        plan: &SyncPlan,
        source: &DirectoryListing,
        replica_root: &Path,
    ) -> Vec<SyncAction> {
        plan.copies
            .iter()
            .map(|name| {
                let from = source.root().join(name);
                let dest = replica_root.join(name);
                if source.get(name).is_some_and(|entry| entry.is_dir()) {
                    SyncAction::CopyDirectory { source: from, dest }
                } else {
                    SyncAction::CopyFile { source: from, dest }
                }
            })
            .collect()
    }
}
