//! Single-level directory listing
//!
//! Only the immediate entries of a root are read. Kind and modification
//! time follow symbolic links, so a link to a directory lists as a
//! directory and carries its target's timestamp. A dangling link lists as
//! a file with the link's own timestamp.

use std::collections::BTreeMap;
use std::collections::btree_map;
use std::ffi::{OsStr, OsString};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::error::{Result, SyncError};

/// Kind of a directory entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Regular file (or anything that is not a directory)
    File,
    /// Directory
    Directory,
}

/// One immediate child of a listed directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    /// File name within the parent directory
    pub name: OsString,
    /// File or directory
    pub kind: EntryKind,
    /// Last modification time
    pub modified: SystemTime,
}

impl DirectoryEntry {
    /// Whether the entry is a directory
    #[must_use]
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

/// Entries of one directory level, keyed by name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryListing {
    root: PathBuf,
    entries: BTreeMap<OsString, DirectoryEntry>,
}

impl DirectoryListing {
    /// Build a listing from already-known entries
    #[must_use]
    pub fn from_entries(
        root: impl Into<PathBuf>,
        entries: impl IntoIterator<Item = DirectoryEntry>,
    ) -> Self {
        Self {
            root: root.into(),
            entries: entries
                .into_iter()
                .map(|entry| (entry.name.clone(), entry))
                .collect(),
        }
    }

    /// Directory this listing was read from
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Look up an entry by exact name
    #[must_use]
    pub fn get(&self, name: &OsStr) -> Option<&DirectoryEntry> {
        self.entries.get(name)
    }

    /// Whether an entry with this exact name exists
    #[must_use]
    pub fn contains(&self, name: &OsStr) -> bool {
        self.entries.contains_key(name)
    }

    /// Entry names in name order
    pub fn names(&self) -> btree_map::Keys<'_, OsString, DirectoryEntry> {
        self.entries.keys()
    }

    /// Entries in name order
    pub fn entries(&self) -> btree_map::Values<'_, OsString, DirectoryEntry> {
        self.entries.values()
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the directory has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Directory scanner
pub struct Scanner;

impl Scanner {
    /// Read the immediate entries of `root`
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::Listing`] if the directory cannot be read and
    /// [`SyncError::Metadata`] if an entry cannot be stat-ed.
    pub fn list(root: &Path) -> Result<DirectoryListing> {
        let listing_error = |source| SyncError::Listing {
            path: root.to_path_buf(),
            source,
        };

        let mut entries = Vec::new();
        for entry in fs::read_dir(root).map_err(listing_error)? {
            let entry = entry.map_err(listing_error)?;
            entries.push(Self::describe(&entry.path(), entry.file_name())?);
        }

        Ok(DirectoryListing::from_entries(root, entries))
    }

    /// Stat a single path, following symlinks
    ///
    /// A dangling symlink is described by the link itself: a file carrying
    /// the link's own mtime.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::Metadata`] if the path cannot be stat-ed.
    pub fn describe(path: &Path, name: OsString) -> Result<DirectoryEntry> {
        let metadata_error = |source| SyncError::Metadata {
            path: path.to_path_buf(),
            source,
        };

        let metadata = match fs::metadata(path) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                let link = fs::symlink_metadata(path).map_err(metadata_error)?;
                tracing::debug!(path = %path.display(), "dangling symlink");
                return Ok(DirectoryEntry {
                    name,
                    kind: EntryKind::File,
                    modified: link.modified().map_err(metadata_error)?,
                });
            }
            Err(e) => return Err(metadata_error(e)),
        };
        let modified = metadata.modified().map_err(metadata_error)?;
        let kind = if metadata.is_dir() {
            EntryKind::Directory
        } else {
            EntryKind::File
        };

        Ok(DirectoryEntry {
            name,
            kind,
            modified,
        })
    }
}
