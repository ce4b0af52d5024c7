//! # replisync-core
//!
//! Core library for one-directional replica synchronization.
//!
//! A sync cycle reads the top-level entries of a source and a replica
//! directory, works out which replica entries must go and which source
//! entries must be (re)copied, then applies removals followed by copies.
//! The source is authoritative and is never written to.

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Error types for the replisync library
pub mod error;

/// Single-level directory listing
pub mod scanner;

/// Diff engine: removal and copy set computation
pub mod comparison;

/// Configuration file parsing, merging and validation
pub mod config;

/// Sync applier: executes a cycle against the filesystem
pub mod sync;

/// Fixed-interval driver for repeated sync cycles
pub mod schedule;

pub use comparison::{DiffEngine, SyncPlan};
pub use config::SyncConfig;
pub use error::{PathRole, Result, SyncError};
pub use schedule::{CycleScheduler, SchedulerSummary};
pub use sync::{CycleReport, SyncEngine};
