//! Configuration loading and discovery for `hqscale.toml`
//!
//! Provides functions to find, load, and merge configuration.

use super::schema::HqConfig;
use crate::classify::Metric;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// File name searched for during discovery.
pub const CONFIG_FILE: &str = "hqscale.toml";

/// Configuration loading error
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// File I/O error
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error
    #[error("Failed to parse hqscale.toml: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error
    #[error("Config validation failed:\n{}", .0.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n"))]
    Validation(Vec<String>),
}

/// CLI arguments that can override config values
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    /// Override scale factor
    pub factor: Option<u32>,
    /// Override difference metric
    pub metric: Option<Metric>,
    /// Force sequential or parallel processing
    pub parallel: Option<bool>,
    /// Override worker thread count
    pub threads: Option<usize>,
    /// Override BMP output bit depth
    pub bit_depth: Option<u16>,
    /// Override output directory
    pub dir: Option<PathBuf>,
}

/// Find hqscale.toml by walking up from the current working directory.
///
/// Search order:
/// 1. Walk up from current directory looking for hqscale.toml
/// 2. Check XDG_CONFIG_HOME/hqscale/hqscale.toml (or ~/.config/hqscale/hqscale.toml)
pub fn find_config() -> Option<PathBuf> {
    if let Ok(cwd) = env::current_dir() {
        if let Some(path) = find_config_from(cwd) {
            return Some(path);
        }
    }

    find_xdg_config()
}

/// Find hqscale.toml in the XDG config directory.
pub fn find_xdg_config() -> Option<PathBuf> {
    let xdg_config = env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| env::var("HOME").map(|h| PathBuf::from(h).join(".config")))
        .ok()?;

    let config_path = xdg_config.join("hqscale").join(CONFIG_FILE);
    if config_path.exists() {
        Some(config_path)
    } else {
        None
    }
}

/// Find hqscale.toml by walking up from a specific directory.
pub fn find_config_from(start: PathBuf) -> Option<PathBuf> {
    let mut current = start;

    loop {
        let config_path = current.join(CONFIG_FILE);
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load configuration from an hqscale.toml file.
///
/// If a path is provided, loads from that file. Otherwise, uses `find_config()`
/// to locate the config file. If no config file is found, returns the
/// defaults.
///
/// # Example
/// ```ignore
/// let config = load_config(None)?;
/// let config = load_config(Some(Path::new("art/hqscale.toml")))?;
/// ```
pub fn load_config(path: Option<&Path>) -> Result<HqConfig, ConfigError> {
    let config_path = match path {
        Some(p) => Some(p.to_path_buf()),
        None => find_config(),
    };

    match config_path {
        Some(p) => {
            debug!(path = %p.display(), "loading config");
            load_config_file(&p)
        }
        None => Ok(default_config()),
    }
}

/// Load configuration from a specific file path.
fn load_config_file(path: &Path) -> Result<HqConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let config: HqConfig = toml::from_str(&contents)?;
    check(&config)?;
    Ok(config)
}

/// Turn validation failures into a [`ConfigError::Validation`].
pub fn check(config: &HqConfig) -> Result<(), ConfigError> {
    let errors = config.validate();
    if !errors.is_empty() {
        return Err(ConfigError::Validation(
            errors.into_iter().map(|e| e.to_string()).collect(),
        ));
    }
    Ok(())
}

/// Configuration used when no hqscale.toml is found.
pub fn default_config() -> HqConfig {
    HqConfig::default()
}

/// Merge CLI overrides into a configuration.
///
/// CLI arguments take precedence over config file values.
pub fn merge_cli_overrides(config: &mut HqConfig, overrides: &CliOverrides) {
    if let Some(factor) = overrides.factor {
        config.scale.factor = factor;
    }

    if let Some(metric) = overrides.metric {
        config.scale.metric = metric;
    }

    if let Some(parallel) = overrides.parallel {
        config.scale.parallel = parallel;
    }

    if let Some(threads) = overrides.threads {
        config.scale.threads = threads;
    }

    if let Some(bit_depth) = overrides.bit_depth {
        config.output.bit_depth = bit_depth;
    }

    if let Some(ref dir) = overrides.dir {
        config.output.dir = Some(dir.clone());
    }
}
