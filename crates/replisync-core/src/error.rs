use std::fmt;
use std::io;
use std::path::PathBuf;

/// Result type alias using [`SyncError`]
pub type Result<T> = std::result::Result<T, SyncError>;

/// Which root a path error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathRole {
    /// The authoritative source directory
    Source,
    /// The replica directory kept in sync
    Replica,
}

impl fmt::Display for PathRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Source => f.write_str("source"),
            Self::Replica => f.write_str("replica"),
        }
    }
}

/// Errors raised while verifying roots, planning or applying a cycle
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    /// A root directory does not exist.
    #[error("{role} path not found: {}", path.display())]
    PathNotFound {
        /// Which root is missing.
        role: PathRole,
        /// The missing path.
        path: PathBuf,
    },

    /// A root exists but is not a directory.
    #[error("{role} path is not a directory: {}", path.display())]
    NotADirectory {
        /// Which root is wrong.
        role: PathRole,
        /// The offending path.
        path: PathBuf,
    },

    /// Reading a directory level failed.
    #[error("failed to list directory {}: {source}", path.display())]
    Listing {
        /// Directory being listed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Reading entry metadata failed.
    #[error("failed to read metadata for {}: {source}", path.display())]
    Metadata {
        /// Entry path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Removing a replica entry failed.
    #[error("failed to remove {}: {source}", path.display())]
    EntryRemoval {
        /// Replica entry path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Copying a source entry into the replica failed.
    #[error("failed to copy {} to {}: {source}", from.display(), to.display())]
    EntryCopy {
        /// Source path.
        from: PathBuf,
        /// Destination path.
        to: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Configuration values are invalid.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// A configuration file could not be read or parsed.
    #[error("failed to load config file {}: {reason}", path.display())]
    ConfigParse {
        /// Config file path.
        path: PathBuf,
        /// Read or parse failure description.
        reason: String,
    },
}

impl SyncError {
    /// The I/O cause of a filesystem failure, if any
    #[must_use]
    pub fn io_source(&self) -> Option<&io::Error> {
        match self {
            Self::Listing { source, .. }
            | Self::Metadata { source, .. }
            | Self::EntryRemoval { source, .. }
            | Self::EntryCopy { source, .. } => Some(source),
            _ => None,
        }
    }

    /// Whether the failure happened while removing a replica entry
    #[must_use]
    pub const fn is_removal_failure(&self) -> bool {
        matches!(self, Self::EntryRemoval { .. })
    }

    /// Whether the failure happened while copying into the replica
    #[must_use]
    pub const fn is_copy_failure(&self) -> bool {
        matches!(self, Self::EntryCopy { .. })
    }
}
