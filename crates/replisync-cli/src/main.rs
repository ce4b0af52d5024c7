mod cli;
mod commands;
mod logging;

use anyhow::Context;
use clap::Parser;
use cli::{Cli, Commands};
use commands::SyncOptions;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let options = SyncOptions::from_cli(&cli);

    let config = options.load_config()?;

    let log_file = logging::init(cli.verbose, config.log_path.as_deref())
        .context("Failed to initialize logging")?;
    if let Some(path) = &log_file {
        tracing::debug!(path = %path.display(), "writing log file");
    }

    match cli.command.clone().unwrap_or_default() {
        Commands::Run { max_cycles } => {
            commands::Run::execute(&config, max_cycles, &options)
                .context("Failed to execute run command")?;
        }
        Commands::Once => {
            commands::Once::execute(&config, &options).context("Failed to execute once command")?;
        }
        Commands::Status => {
            commands::Status::execute(&config, &options)
                .context("Failed to execute status command")?;
        }
        Commands::Config => {
            commands::Config::execute(&config, &options)
                .context("Failed to execute config command")?;
        }
    }

    Ok(())
}
