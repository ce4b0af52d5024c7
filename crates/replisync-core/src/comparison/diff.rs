//! Removal and copy set computation

use std::collections::BTreeSet;
use std::ffi::OsString;
use std::path::Path;

use super::SyncPlan;
use super::timestamp::TimestampComparator;
use crate::error::Result;
use crate::scanner::{DirectoryListing, Scanner};

/// Computes the per-cycle sync plan
pub struct DiffEngine;

impl DiffEngine {
    /// Names present in the replica but absent from the source
    #[must_use]
    pub fn compute_removals<'a, S, R>(source_names: S, replica_names: R) -> BTreeSet<OsString>
    where
        S: IntoIterator<Item = &'a OsString>,
        R: IntoIterator<Item = &'a OsString>,
    {
        let source: BTreeSet<&OsString> = source_names.into_iter().collect();
        replica_names
            .into_iter()
            .filter(|name| !source.contains(name))
            .cloned()
            .collect()
    }

    /// Names that must be copied from `source_path` into `replica_path`
    ///
    /// # Errors
    ///
    /// Returns an error if either directory cannot be listed or an entry
    /// cannot be stat-ed.
    pub fn compute_copies(source_path: &Path, replica_path: &Path) -> Result<BTreeSet<OsString>> {
        let source = Scanner::list(source_path)?;
        let replica = Scanner::list(replica_path)?;
        Ok(Self::compute_copies_from_listings(&source, &replica))
    }

    /// Copy decision over already-read listings
    ///
    /// Source-only names are copied unconditionally; shared names are copied
    /// when their modification times differ.
    #[must_use]
    pub fn compute_copies_from_listings(
        source: &DirectoryListing,
        replica: &DirectoryListing,
    ) -> BTreeSet<OsString> {
        source
            .entries()
            .filter(|entry| match replica.get(&entry.name) {
                None => true,
                Some(existing) => TimestampComparator::is_stale(entry, existing),
            })
            .map(|entry| entry.name.clone())
            .collect()
    }

    /// Plan a cycle from one fresh listing of each root
    ///
    /// # Errors
    ///
    /// Returns an error if either directory cannot be listed or an entry
    /// cannot be stat-ed.
    pub fn plan(source_path: &Path, replica_path: &Path) -> Result<SyncPlan> {
        let source = Scanner::list(source_path)?;
        let replica = Scanner::list(replica_path)?;
        Ok(Self::plan_from_listings(&source, &replica))
    }

    /// Plan a cycle from already-read listings
    #[must_use]
    pub fn plan_from_listings(source: &DirectoryListing, replica: &DirectoryListing) -> SyncPlan {
        SyncPlan {
            removals: Self::compute_removals(source.names(), replica.names()),
            copies: Self::compute_copies_from_listings(source, replica),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::{DirectoryEntry, EntryKind};
    use std::time::{Duration, SystemTime};

    fn names(items: &[&str]) -> Vec<OsString> {
        items.iter().map(OsString::from).collect()
    }

    fn file(name: &str, secs: u64) -> DirectoryEntry {
        DirectoryEntry {
            name: OsString::from(name),
            kind: EntryKind::File,
            modified: SystemTime::UNIX_EPOCH + Duration::from_secs(secs),
        }
    }

    #[test]
    fn test_removals_are_replica_minus_source() {
        let source = names(&["a.txt", "b.txt"]);
        let replica = names(&["b.txt", "c.txt", "d"]);

        let removals = DiffEngine::compute_removals(&source, &replica);

        assert_eq!(removals.into_iter().collect::<Vec<_>>(), names(&["c.txt", "d"]));
    }

    #[test]
    fn test_removals_case_sensitive() {
        let source = names(&["Notes.md"]);
        let replica = names(&["notes.md"]);

        let removals = DiffEngine::compute_removals(&source, &replica);

        assert!(removals.contains(&OsString::from("notes.md")));
    }

    #[test]
    fn test_removals_empty_when_replica_empty() {
        let source = names(&["a.txt"]);
        let removals = DiffEngine::compute_removals(&source, &Vec::<OsString>::new());
        assert!(removals.is_empty());
    }

    #[test]
    fn test_copies_from_listings() {
        let source = DirectoryListing::from_entries(
            "src",
            [file("new.txt", 100), file("same.txt", 100), file("older.txt", 100)],
        );
        let replica = DirectoryListing::from_entries(
            "dst",
            [file("same.txt", 100), file("older.txt", 300), file("extra.txt", 1)],
        );

        let copies = DiffEngine::compute_copies_from_listings(&source, &replica);

        assert_eq!(
            copies.into_iter().collect::<Vec<_>>(),
            names(&["new.txt", "older.txt"])
        );
    }

    #[test]
    fn test_plan_from_listings() {
        let source = DirectoryListing::from_entries("src", [file("report.txt", 200)]);
        let replica =
            DirectoryListing::from_entries("dst", [file("report.txt", 100), file("old.txt", 5)]);

        let plan = DiffEngine::plan_from_listings(&source, &replica);

        assert!(plan.removals.contains(&OsString::from("old.txt")));
        assert!(plan.copies.contains(&OsString::from("report.txt")));
        assert_eq!(plan.len(), 2);
    }
}
