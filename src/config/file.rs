//! Configuration file loading and discovery.
//!
//! Supports loading a [`GradingConfig`] from YAML files with automatic discovery.

use super::types::GradingConfig;
use std::path::{Path, PathBuf};

// ============================================================================
// Configuration File Discovery
// ============================================================================

/// Standard config file names to search for.
const CONFIG_FILE_NAMES: &[&str] = &[
    ".unit-grading.yaml",
    ".unit-grading.yml",
    "unit-grading.yaml",
    "unit-grading.yml",
];

/// Discover a config file by searching standard locations.
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Current directory
/// 3. User config directory (~/.config/unit-grading/)
/// 4. Home directory
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path.filter(|p| p.exists()) {
        return Some(path.to_path_buf());
    }

    search_dirs().find_map(|dir| find_config_in_dir(&dir))
}

/// Directories searched for a config file, in priority order.
fn search_dirs() -> impl Iterator<Item = PathBuf> {
    let cwd = std::env::current_dir().ok();
    let user = dirs::config_dir().map(|dir| dir.join("unit-grading"));
    cwd.into_iter().chain(user).chain(dirs::home_dir())
}

/// Find a config file in a specific directory.
fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

// ============================================================================
// Configuration File Loading
// ============================================================================

/// Error type for config file operations.
#[derive(Debug)]
pub enum ConfigFileError {
    /// File not found
    NotFound(PathBuf),
    /// IO error reading file
    Io(std::io::Error),
    /// YAML parsing error
    Parse(serde_yaml::Error),
}

impl std::fmt::Display for ConfigFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(path) => {
                write!(f, "Config file not found: {}", path.display())
            }
            Self::Io(e) => write!(f, "Failed to read config file: {e}"),
            Self::Parse(e) => write!(f, "Failed to parse config file: {e}"),
        }
    }
}

impl std::error::Error for ConfigFileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotFound(_) => None,
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConfigFileError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_yaml::Error> for ConfigFileError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Parse(err)
    }
}

/// Load a `GradingConfig` from a YAML file.
///
/// The file is only parsed here; validation happens when the engine loads it.
pub fn load_config_file(path: &Path) -> Result<GradingConfig, ConfigFileError> {
    if !path.exists() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let config: GradingConfig = serde_yaml::from_str(&content)?;
    Ok(config)
}

/// Load the config file, or return the reference catalog when there is none.
///
/// An explicit path must exist. A discovered file that fails to read or
/// parse is an error; the reference catalog is only used when no file is
/// found at all.
pub fn load_or_default(
    explicit_path: Option<&Path>,
) -> Result<(GradingConfig, Option<PathBuf>), ConfigFileError> {
    let path = match explicit_path {
        Some(path) => path.to_path_buf(),
        None => match discover_config_file(None) {
            Some(path) => path,
            None => {
                tracing::debug!("No grading config found, using the reference catalog");
                return Ok((GradingConfig::default(), None));
            }
        },
    };

    let config = load_config_file(&path)?;
    tracing::debug!("Loaded grading config from {}", path.display());
    Ok((config, Some(path)))
}

// ============================================================================
// Example Config Generation
// ============================================================================

/// Generate an example config file content (the reference catalog).
#[must_use]
pub fn generate_example_config() -> String {
    let example = GradingConfig::default();
    format!(
        r"# Unit Grading Configuration
# Place this file at .unit-grading.yaml in your working directory or ~/.config/unit-grading/
#
# Tiers are inclusive on both ends. Omit `max` on the top tier to make it open-ended.
# Thresholds are listed best grade first; the last one must have min_score <= 0.

{}",
        serde_yaml::to_string(&example).unwrap_or_default()
    )
}

// ============================================================================
// Tests
// ============================================================================
