use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::Context;
use chrono::{DateTime, Local};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Log file name for a run started at `started`
pub fn log_file_name(started: DateTime<Local>) -> String {
    format!("logfiles_{}.log", started.format("%Y-%m-%d_%H.%M"))
}

/// Initialize the tracing subscriber.
///
/// Logs go to stdout and, when `log_dir` is given, to a timestamped file in
/// that directory as well. `RUST_LOG` overrides the level, which otherwise
/// defaults to "info" ("debug" when verbose). Returns the log file path.
pub fn init(verbose: bool, log_dir: Option<&Path>) -> anyhow::Result<Option<PathBuf>> {
    let default_level = if verbose { "debug" } else { "info" };
    let filter_layer =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_level))?;

    let stdout_layer = fmt::layer().with_target(false).compact();

    let (file_layer, log_file) = match log_dir {
        Some(dir) => {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory: {}", dir.display()))?;
            let path = dir.join(log_file_name(Local::now()));
            let file = File::options()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("Failed to open log file: {}", path.display()))?;
            let layer = fmt::layer()
                .with_ansi(false)
                .with_target(false)
                .with_writer(Mutex::new(file));
            (Some(layer), Some(path))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(log_file)
}
