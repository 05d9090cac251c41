//! Configuration module for the coven tool
//!
//! Provides types, discovery, and loading for `coven.toml`.

pub mod loader;
pub mod schema;

pub use loader::{
    find_config, find_config_from, load_config, merge_cli_overrides, CliOverrides, ConfigError,
};
pub use schema::*;
