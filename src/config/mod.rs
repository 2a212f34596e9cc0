//! Configuration module for hqscale
//!
//! Provides types, discovery, and parsing for `hqscale.toml`.

pub mod loader;
pub mod schema;

pub use loader::{
    check, default_config, find_config, find_config_from, load_config, merge_cli_overrides,
    CliOverrides, ConfigError, CONFIG_FILE,
};
pub use schema::*;
