use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Replica Directory Synchronization Tool
///
/// Keeps a replica directory in sync with a source directory: entries missing
/// from the source are removed from the replica, new or changed entries are
/// copied over. Runs periodically until interrupted.
#[derive(Parser, Debug)]
#[command(name = "replisync")]
#[command(about, long_about = None, version)]
pub struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log what would change without touching the replica
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Source directory (authoritative content)
    #[arg(long, global = true, value_name = "PATH", env = "REPLISYNC_SOURCE_PATH")]
    pub source_path: Option<PathBuf>,

    /// Replica directory kept in sync with the source
    #[arg(long, global = true, value_name = "PATH", env = "REPLISYNC_REPLICA_PATH")]
    pub replica_path: Option<PathBuf>,

    /// Directory for log files (created if missing)
    #[arg(long, global = true, value_name = "DIR")]
    pub log_path: Option<PathBuf>,

    /// Seconds between sync cycles [default: 10]
    #[arg(long, global = true, value_name = "SECS")]
    pub interval: Option<u64>,

    /// Use specific config file
    #[arg(long, global = true, value_name = "PATH", conflicts_with = "no_config")]
    pub config: Option<PathBuf>,

    /// Ignore all config files
    #[arg(long, global = true, conflicts_with = "config")]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Sync periodically until interrupted (default)
    Run {
        /// Stop after this many cycles
        #[arg(long, value_name = "N")]
        max_cycles: Option<u64>,
    },

    /// Run a single sync cycle and print a summary
    Once,

    /// Show pending removals and copies without applying them
    Status,

    /// Show the resolved configuration
    Config,
}

impl Default for Commands {
    fn default() -> Self {
        Self::Run { max_cycles: None }
    }
}
