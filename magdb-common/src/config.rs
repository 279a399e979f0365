//! Configuration loading and database path resolution

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable naming the catalogue database file
pub const DATABASE_ENV_VAR: &str = "MAGDB_DATABASE";

/// File name used under the platform data directory
pub const DEFAULT_DATABASE_FILE: &str = "magazines.db";

/// Contents of `config.toml`
///
/// Every key is optional; a missing file is equivalent to an empty one.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TomlConfig {
    /// Catalogue database file
    #[serde(default)]
    pub database_path: Option<PathBuf>,

    /// Default tracing filter directive when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TomlConfig {
    fn default() -> Self {
        Self {
            database_path: None,
            log_level: default_log_level(),
        }
    }
}

impl TomlConfig {
    /// Read and parse a config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
    }

    /// Load `explicit` if given, else the platform config file if one exists
    ///
    /// No file at all is not an error: defaults are returned. Callers decide
    /// whether a broken file aborts startup.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => match find_config_file() {
                Some(path) => path,
                None => {
                    debug!("No config file found, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        let config = Self::load(&path)?;
        debug!("Loaded config file {}", path.display());
        Ok(config)
    }
}

/// Resolve the database path, highest priority first:
/// 1. Command-line argument
/// 2. Environment variable
/// 3. `database_path` from the TOML config
/// 4. OS-dependent default
pub fn resolve_database_path(
    cli_arg: Option<&Path>,
    env_var_name: &str,
    config: &TomlConfig,
) -> PathBuf {
    if let Some(path) = cli_arg {
        return path.to_path_buf();
    }

    if let Ok(path) = std::env::var(env_var_name) {
        if !path.is_empty() {
            return PathBuf::from(path);
        }
    }

    if let Some(path) = &config.database_path {
        return path.clone();
    }

    default_database_path()
}

/// Locate the platform config file, if one exists
fn find_config_file() -> Option<PathBuf> {
    let user_config = dirs::config_dir().map(|d| d.join("magdb").join("config.toml"));
    if let Some(path) = user_config {
        if path.exists() {
            return Some(path);
        }
    }

    if cfg!(target_os = "linux") {
        let system_config = PathBuf::from("/etc/magdb/config.toml");
        if system_config.exists() {
            return Some(system_config);
        }
    }

    None
}

/// OS-dependent default database location
pub fn default_database_path() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join("magdb"))
        .unwrap_or_else(|| PathBuf::from("./magdb_data"))
        .join(DEFAULT_DATABASE_FILE)
}
