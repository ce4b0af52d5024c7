//! Filesystem operations executor

use std::fs;
use std::io;
use std::path::Path;

use filetime::FileTime;
use walkdir::WalkDir;

use super::CycleReport;
use super::actions::SyncAction;
use crate::error::{Result, SyncError};

/// Executes sync actions against the replica
pub struct FileOperationExecutor {
    dry_run: bool,
}

impl FileOperationExecutor {
    /// Create a new executor
    #[must_use]
    pub const fn new(dry_run: bool) -> Self {
        Self { dry_run }
    }

    /// Execute a sync action and record it in the report
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::EntryRemoval`] or [`SyncError::EntryCopy`] when
    /// the filesystem operation fails.
    pub fn execute(&self, action: &SyncAction, report: &mut CycleReport) -> Result<()> {
        if self.dry_run {
            tracing::info!("[dry run] would {action}");
        } else {
            tracing::debug!("{action}");
            match action {
                SyncAction::Remove { path } => Self::remove_entry(path)?,
                SyncAction::CopyFile { source, dest } => Self::copy_file(source, dest)?,
                SyncAction::CopyDirectory { source, dest } => {
                    Self::replace_directory(source, dest)?;
                }
            }
        }

        let name = action.name().to_os_string();
        match action {
            SyncAction::Remove { .. } => report.removed.push(name),
            SyncAction::CopyFile { .. } | SyncAction::CopyDirectory { .. } => {
                report.copied.push(name);
            }
        }
        Ok(())
    }

    /// Remove a replica entry
    ///
    /// Directories are removed only when empty. Anything else, including a
    /// symlink to a directory, is unlinked. An entry that is already gone is
    /// left alone.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::EntryRemoval`] if the removal fails.
    pub fn remove_entry(path: &Path) -> Result<()> {
        let removal_error = |source| SyncError::EntryRemoval {
            path: path.to_path_buf(),
            source,
        };

        let metadata = match fs::symlink_metadata(path) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "entry already absent");
                return Ok(());
            }
            Err(e) => return Err(removal_error(e)),
        };

        if metadata.is_dir() {
            fs::remove_dir(path).map_err(removal_error)
        } else {
            fs::remove_file(path).map_err(removal_error)
        }
    }

    /// Copy a file into place, overwriting, with permissions and times preserved
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::EntryCopy`] if the destination is a directory or
    /// any step of the copy fails.
    pub fn copy_file(source: &Path, dest: &Path) -> Result<()> {
        let copy_error = |error| SyncError::EntryCopy {
            from: source.to_path_buf(),
            to: dest.to_path_buf(),
            source: error,
        };

        if fs::symlink_metadata(dest).is_ok_and(|metadata| metadata.is_dir()) {
            return Err(copy_error(io::Error::new(
                io::ErrorKind::IsADirectory,
                "destination is a directory",
            )));
        }

        // fs::copy carries the permission bits over
        fs::copy(source, dest).map_err(copy_error)?;
        Self::copy_times(source, dest).map_err(copy_error)
    }

    /// Replace a replica directory with a copy of the source subtree
    ///
    /// Whatever sits at `dest` is removed first with a non-recursive
    /// directory removal, so a non-empty directory or a plain file there
    /// fails the copy.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::EntryRemoval`] if the existing destination cannot
    /// be removed, or [`SyncError::EntryCopy`] if the subtree copy fails.
    pub fn replace_directory(source: &Path, dest: &Path) -> Result<()> {
        if fs::symlink_metadata(dest).is_ok() {
            fs::remove_dir(dest).map_err(|source| SyncError::EntryRemoval {
                path: dest.to_path_buf(),
                source,
            })?;
        }

        Self::copy_directory(source, dest)
    }

    /// Copy a directory recursively into a destination that must not exist
    ///
    /// Symlinks are followed. Directory permissions and times are applied
    /// after their contents, deepest first.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::EntryCopy`] if any entry cannot be copied.
    pub fn copy_directory(source: &Path, dest: &Path) -> Result<()> {
        for entry in WalkDir::new(source).follow_links(true).sort_by_file_name() {
            let entry = entry.map_err(|e| Self::walk_error(source, dest, e))?;
            let target = dest.join(Self::relative(source, entry.path(), dest)?);

            if entry.file_type().is_dir() {
                fs::create_dir(&target).map_err(|error| SyncError::EntryCopy {
                    from: entry.path().to_path_buf(),
                    to: target.clone(),
                    source: error,
                })?;
            } else {
                Self::copy_file(entry.path(), &target)?;
            }
        }

        for entry in WalkDir::new(source).follow_links(true).contents_first(true) {
            let entry = entry.map_err(|e| Self::walk_error(source, dest, e))?;
            if !entry.file_type().is_dir() {
                continue;
            }

            let target = dest.join(Self::relative(source, entry.path(), dest)?);
            Self::copy_directory_metadata(entry.path(), &target).map_err(|error| {
                SyncError::EntryCopy {
                    from: entry.path().to_path_buf(),
                    to: target.clone(),
                    source: error,
                }
            })?;
        }

        Ok(())
    }

    fn copy_directory_metadata(source: &Path, dest: &Path) -> io::Result<()> {
        let metadata = fs::metadata(source)?;
        fs::set_permissions(dest, metadata.permissions())?;
        Self::copy_times(source, dest)
    }

    fn copy_times(source: &Path, dest: &Path) -> io::Result<()> {
        let metadata = fs::metadata(source)?;
        let atime = FileTime::from_last_access_time(&metadata);
        let mtime = FileTime::from_last_modification_time(&metadata);
        filetime::set_file_times(dest, atime, mtime)
    }

    fn relative<'a>(source: &Path, path: &'a Path, dest: &Path) -> Result<&'a Path> {
        path.strip_prefix(source).map_err(|e| SyncError::EntryCopy {
            from: path.to_path_buf(),
            to: dest.to_path_buf(),
            source: io::Error::other(e),
        })
    }

    fn walk_error(source: &Path, dest: &Path, error: walkdir::Error) -> SyncError {
        SyncError::EntryCopy {
            from: error
                .path()
                .map_or_else(|| source.to_path_buf(), Path::to_path_buf),
            to: dest.to_path_buf(),
            source: error.into(),
        }
    }
}
