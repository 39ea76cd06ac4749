//! Configuration for bookshelf.
//!
//! Configuration sources (highest priority first):
//! 1. `--config <PATH>` on the command line
//! 2. Environment variable (BOOKSHELF_CONFIG)
//! 3. Config file (.bookshelf/config.yaml) in the current directory or a parent
//! 4. Config file in the home directory (~/.bookshelf/config.yaml)
//! 5. Defaults
//!
//! Only the front end is configurable. The catalog itself takes no settings;
//! seed records are handed to it through the regular `add` path.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::library::Record;

/// Environment variable naming an explicit config file
pub const CONFIG_ENV: &str = "BOOKSHELF_CONFIG";

pub const DEFAULT_BANNER: &str = "Library Management System";
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Raw config file schema (matches YAML structure)
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default)]
    pub shell: ShellConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Records added to the catalog at startup
    #[serde(default)]
    pub seed: Vec<Record>,
}

fn default_version() -> String {
    "1.0".to_string()
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShellConfig {
    /// Heading printed above the menu
    pub banner: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive when RUST_LOG is unset
    pub level: Option<String>,
}

/// Resolved configuration with defaults applied
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Path to config file (if found)
    pub config_file: Option<PathBuf>,
    /// Config format version
    pub version: String,
    pub banner: String,
    pub log_level: String,
    pub seed: Vec<Record>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            config_file: None,
            version: default_version(),
            banner: DEFAULT_BANNER.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            seed: Vec::new(),
        }
    }
}

impl ResolvedConfig {
    fn from_file(config: ConfigFile, path: PathBuf) -> Self {
        Self {
            config_file: Some(path),
            version: config.version,
            banner: config
                .shell
                .banner
                .unwrap_or_else(|| DEFAULT_BANNER.to_string()),
            log_level: config
                .logging
                .level
                .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            seed: config.seed,
        }
    }
}

/// Find config file by searching `start` and its parents
fn find_config_file_from(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        let config_path = current.join(".bookshelf").join("config.yaml");
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            break;
        }
    }

    None
}

/// Search the working tree first, then the home directory
fn discover_config_file(cwd: Option<&Path>, home: Option<&Path>) -> Option<PathBuf> {
    cwd.and_then(find_config_file_from).or_else(|| {
        let path = home?.join(".bookshelf").join("config.yaml");
        path.exists().then_some(path)
    })
}

fn find_config_file() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok();
    let home = dirs::home_dir();
    discover_config_file(cwd.as_deref(), home.as_deref())
}

/// Load and parse config file
pub fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Load configuration from all sources
pub fn load_config(explicit: Option<&Path>) -> Result<ResolvedConfig> {
    let config_file = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .or_else(find_config_file),
    };

    match config_file {
        Some(path) => {
            let config = load_config_file(&path)?;
            Ok(ResolvedConfig::from_file(config, path))
        }
        None => Ok(ResolvedConfig::default()),
    }
}
