use std::cmp::Ordering;

use anyhow::Context;
use replisync_core::comparison::TimestampComparator;
use replisync_core::config::SyncConfig;
use replisync_core::sync::{SyncAction, SyncEngine, SyncReporter};

use super::SyncOptions;
use super::common::verify_roots;

pub struct Status;

impl Status {
    pub fn execute(config: &SyncConfig, options: &SyncOptions) -> anyhow::Result<()> {
        if options.verbose {
            println!("Executing status command");
        }

        verify_roots(config)?;

        let (plan, actions) = SyncEngine::preview(&config.source_path, &config.replica_path)
            .context("Failed to compute pending changes")?;

        println!("Source:  {}", config.source_path.display());
        println!("Replica: {}", config.replica_path.display());
        println!(
            "Removals: {}, copies: {}\n",
            plan.removals.len(),
            plan.copies.len()
        );
        print!("{}", SyncReporter::generate_pending(&actions));

        if options.verbose {
            for action in &actions {
                if let Some(note) = Self::staleness_note(action) {
                    println!("  {}: {note}", action.name().to_string_lossy());
                }
            }
        }

        Ok(())
    }

    /// Which side is newer for a copy that overwrites an existing entry
    fn staleness_note(action: &SyncAction) -> Option<&'static str> {
        let (SyncAction::CopyFile { source, dest } | SyncAction::CopyDirectory { source, dest }) =
            action
        else {
            return None;
        };

        match TimestampComparator::compare_times(source, dest).ok()? {
            Ordering::Greater => Some("source newer"),
            Ordering::Less => Some("replica newer, will be overwritten"),
            Ordering::Equal => None,
        }
    }
}
