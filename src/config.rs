use crate::error::{Result, SemverBumpError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name looked up in the working directory and the home directory
pub const CONFIG_FILE_NAME: &str = ".semver.toml";

/// Represents the complete configuration for semver-bump.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub git: GitConfig,
}

fn default_remote() -> String {
    "origin".to_string()
}

/// Settings for git mode.
///
/// Only consulted when the version is taken from the latest tag.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct GitConfig {
    /// Remote used for fetching and pushing tags
    #[serde(default = "default_remote")]
    pub remote: String,

    /// Prepended to the new version when creating a tag, stripped from the
    /// latest tag before parsing it
    #[serde(default)]
    pub tag_prefix: String,

    /// Fetch tags from `remote` before looking up the latest tag
    #[serde(default)]
    pub fetch_tags: bool,
}

impl Default for GitConfig {
    fn default() -> Self {
        GitConfig {
            remote: default_remote(),
            tag_prefix: String::new(),
            fetch_tags: false,
        }
    }
}

/// Candidate config files, in lookup order, when no explicit path is given
fn default_locations() -> Vec<PathBuf> {
    let mut locations = vec![PathBuf::from(".").join(CONFIG_FILE_NAME)];
    if let Some(home) = dirs::home_dir() {
        locations.push(home.join(CONFIG_FILE_NAME));
    }
    if let Some(config_dir) = dirs::config_dir() {
        locations.push(config_dir.join("semver.toml"));
    }
    locations
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter (must exist)
/// 2. `.semver.toml` in the current directory
/// 3. `.semver.toml` in the home directory
/// 4. `semver.toml` in the user config directory
/// 5. Default configuration if no file found
///
/// # Errors
/// Returns [`SemverBumpError::Config`] if a file exists but cannot be read or
/// parsed, or if an explicit path does not exist.
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let path = match config_path {
        Some(path) => path.to_path_buf(),
        None => match default_locations().into_iter().find(|p| p.is_file()) {
            Some(path) => path,
            None => {
                debug!("no config file found, using defaults");
                return Ok(Config::default());
            }
        },
    };

    let contents = fs::read_to_string(&path).map_err(|e| {
        SemverBumpError::config(format!("Cannot read '{}': {}", path.display(), e))
    })?;

    let config = parse_config(&contents)
        .map_err(|e| SemverBumpError::config(format!("{}: {}", path.display(), e)))?;

    debug!(path = %path.display(), "loaded config file");
    Ok(config)
}

/// Parse configuration from TOML text
pub fn parse_config(contents: &str) -> std::result::Result<Config, toml::de::Error> {
    toml::from_str(contents)
}
