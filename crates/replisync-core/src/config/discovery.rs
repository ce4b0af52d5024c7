//! Configuration file discovery from multiple locations

use std::path::{Path, PathBuf};

/// Project config file name, searched from the current directory upwards
pub const PROJECT_CONFIG_NAME: &str = ".replisync.toml";

/// Configuration file locations in order of precedence
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigFiles {
    /// Config from CLI flag (highest precedence)
    pub cli: Option<PathBuf>,
    /// Project config (.replisync.toml)
    pub project: Option<PathBuf>,
    /// Global XDG config
    pub global: Option<PathBuf>,
}

impl ConfigFiles {
    /// Discovered files, lowest precedence first
    pub fn in_merge_order(&self) -> impl Iterator<Item = &Path> {
        [&self.global, &self.project, &self.cli]
            .into_iter()
            .filter_map(|path| path.as_deref())
    }
}

/// Config file discovery
pub struct ConfigDiscovery;

impl ConfigDiscovery {
    /// Discover all available configuration files
    ///
    /// An explicit CLI path is returned even when it does not exist, so that
    /// loading it reports the problem instead of silently ignoring it.
    #[must_use]
    pub fn discover(cli_path: Option<&Path>) -> ConfigFiles {
        ConfigFiles {
            cli: cli_path.map(Path::to_path_buf),
            project: Self::find_file(PROJECT_CONFIG_NAME),
            global: Self::find_global_config(),
        }
    }

    /// Find a config file in the current directory or parent directories
    fn find_file(name: &str) -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;

        loop {
            let candidate = current.join(name);
            if candidate.is_file() {
                return Some(candidate);
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Find global config in XDG config directory
    fn find_global_config() -> Option<PathBuf> {
        let global_config = dirs::config_dir()?.join("replisync").join("config.toml");
        global_config.is_file().then_some(global_config)
    }
}
