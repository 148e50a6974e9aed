// src/config/loader.rs
use crate::config::Config;
use anyhow::{Context as _, Result};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const CONFIG_FILE_NAME: &str = "tidydoc.toml";

/// Reads and parses one config file.
///
/// # Errors
///
/// This function may return an error if:
/// * The file cannot be read
/// * The file is not valid TOML or contains unknown settings
/// * `depth` is zero or `marker` is whitespace
#[inline]
pub fn load_config_file(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
    config
        .validate()
        .with_context(|| format!("Invalid config file: {}", path.display()))?;
    Ok(config)
}

/// Loads settings from the first `tidydoc.toml` found in `dir` or one of its
/// parents. Returns the default config when there is none.
///
/// # Arguments
///
/// * `dir` - The directory to start searching from
///
/// # Errors
///
/// This function may return an error if:
/// * A `tidydoc.toml` exists but cannot be read
/// * The file is not valid TOML, contains unknown settings or invalid values
#[inline]
pub fn load_config(dir: &Path) -> Result<Config> {
    let mut current_dir: PathBuf = dir.to_path_buf();
    let mut visited = HashSet::new();

    while visited.insert(current_dir.clone()) {
        let config_file = current_dir.join(CONFIG_FILE_NAME);
        if config_file.is_file() {
            debug!("Using config file {}", config_file.display());
            return load_config_file(&config_file);
        }

        if let Some(parent) = current_dir.parent() {
            current_dir = parent.to_path_buf();
        } else {
            break;
        }
    }

    Ok(Config::default())
}
