use replisync_core::config::{ConfigDiscovery, SyncConfig};

use super::SyncOptions;

pub struct Config;

impl Config {
    #[allow(clippy::unnecessary_wraps)]
    pub fn execute(config: &SyncConfig, options: &SyncOptions) -> anyhow::Result<()> {
        if options.verbose {
            println!("Executing config command");
        }

        println!("Source path:  {}", config.source_path.display());
        println!("Replica path: {}", config.replica_path.display());
        println!("Interval:     {}s", config.interval.as_secs());
        match &config.log_path {
            Some(path) => println!("Log path:     {}", path.display()),
            None => println!("Log path:     (stdout only)"),
        }
        println!("Dry run:      {}", config.dry_run);

        if options.no_config {
            println!("\nConfig files: ignored (--no-config)");
        } else {
            let files = ConfigDiscovery::discover(options.config_path.as_deref());
            let loaded: Vec<_> = files.in_merge_order().collect();
            if loaded.is_empty() {
                println!("\nConfig files: none");
            } else {
                println!("\nConfig files (lowest precedence first):");
                for path in loaded {
                    println!("  {}", path.display());
                }
            }
        }

        Ok(())
    }
}
