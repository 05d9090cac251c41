//! Configuration loading and discovery for `coven.toml`
//!
//! Provides functions to find, load, and merge configuration.

use super::schema::CovenConfig;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the configuration file
pub const CONFIG_FILE: &str = "coven.toml";

/// Configuration loading error
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// File I/O error
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error
    #[error("Failed to parse coven.toml: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error
    #[error("Config validation failed:\n{}", .0.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n"))]
    Validation(Vec<String>),
}

/// CLI arguments that can override config values
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    /// Override avatar output
    pub avatars: Option<bool>,
    /// Override strict casting
    pub strict: Option<bool>,
    /// Replace the log filter
    pub log_filter: Option<String>,
}

/// Find coven.toml by walking up from the current working directory.
///
/// Search order:
/// 1. Walk up from current directory looking for coven.toml
/// 2. Check XDG_CONFIG_HOME/coven/coven.toml (or ~/.config/coven/coven.toml)
pub fn find_config() -> Option<PathBuf> {
    if let Ok(cwd) = env::current_dir() {
        if let Some(path) = find_config_from(cwd) {
            return Some(path);
        }
    }

    find_xdg_config()
}

/// Find coven.toml in the XDG config directory.
pub fn find_xdg_config() -> Option<PathBuf> {
    let xdg_config = env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| env::var("HOME").map(|h| PathBuf::from(h).join(".config")))
        .ok()?;

    let config_path = xdg_config.join("coven").join(CONFIG_FILE);
    if config_path.exists() {
        Some(config_path)
    } else {
        None
    }
}

/// Find coven.toml by walking up from a specific directory.
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

/// Load configuration from a coven.toml file.
///
/// If a path is provided, loads from that file. Otherwise, uses `find_config()`
/// to locate the config file. If no config file is found, returns the default
/// configuration.
///
/// # Example
/// ```ignore
/// let config = load_config(None)?;
/// let config = load_config(Some(Path::new("spellbook/coven.toml")))?;
/// ```
pub fn load_config(path: Option<&Path>) -> Result<CovenConfig, ConfigError> {
    let config_path = match path {
        Some(p) => Some(p.to_path_buf()),
        None => find_config(),
    };

    match config_path {
        Some(p) => {
            tracing::debug!(path = %p.display(), "loading config");
            load_config_file(&p)
        }
        None => Ok(CovenConfig::default()),
    }
}

fn load_config_file(path: &Path) -> Result<CovenConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let config: CovenConfig = toml::from_str(&contents)?;

    let errors = config.validate();
    if !errors.is_empty() {
        return Err(ConfigError::Validation(errors.into_iter().map(|e| e.to_string()).collect()));
    }

    Ok(config)
}

/// Merge CLI overrides into a configuration.
///
/// CLI arguments take precedence over config file values.
pub fn merge_cli_overrides(config: &mut CovenConfig, overrides: &CliOverrides) {
    if let Some(avatars) = overrides.avatars {
        config.display.avatars = avatars;
    }

    if let Some(strict) = overrides.strict {
        config.cast.strict = strict;
    }

    if let Some(ref filter) = overrides.log_filter {
        config.log.filter = filter.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::fs::File;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_config(dir: &Path, contents: &[u8]) -> PathBuf {
        let config_path = dir.join(CONFIG_FILE);
        File::create(&config_path)
            .expect("should create config file")
            .write_all(contents)
            .expect("should write config content");
        config_path
    }

    #[test]
    fn test_find_config_in_current_dir() {
        let temp = TempDir::new().expect("should create temp dir");
        let config_path = write_config(temp.path(), b"[cast]\nstrict = true");

        let found = find_config_from(temp.path().to_path_buf());
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_find_config_in_parent_dir() {
        let temp = TempDir::new().expect("should create temp dir");
        let config_path = write_config(temp.path(), b"");

        let subdir = temp.path().join("witches").join("spellman");
        fs::create_dir_all(&subdir).expect("should create subdirectories");

        let found = find_config_from(subdir);
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_find_config_not_found() {
        let temp = TempDir::new().expect("should create temp dir");
        let found = find_config_from(temp.path().to_path_buf());
        assert_eq!(found, None);
    }

    #[test]
    #[serial]
    fn test_find_xdg_config() {
        let temp = TempDir::new().expect("should create temp dir");
        let coven_dir = temp.path().join("coven");
        fs::create_dir_all(&coven_dir).expect("should create xdg dir");
        let config_path = write_config(&coven_dir, b"");

        let previous = env::var_os("XDG_CONFIG_HOME");
        env::set_var("XDG_CONFIG_HOME", temp.path());
        let found = find_xdg_config();
        match previous {
            Some(value) => env::set_var("XDG_CONFIG_HOME", value),
            None => env::remove_var("XDG_CONFIG_HOME"),
        }

        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_load_config_from_file() {
        let temp = TempDir::new().expect("should create temp dir");
        let config_path = write_config(
            temp.path(),
            br#"
[display]
avatars = false

[log]
filter = "coven=info"
"#,
        );

        let config = load_config(Some(&config_path)).expect("should load valid config");
        assert!(!config.display.avatars);
        assert!(!config.cast.strict);
        assert_eq!(config.log.filter, "coven=info");
    }

    #[test]
    fn test_load_config_missing_file_errors() {
        let temp = TempDir::new().expect("should create temp dir");
        let result = load_config(Some(&temp.path().join("nonexistent.toml")));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_load_config_invalid_toml() {
        let temp = TempDir::new().expect("should create temp dir");
        let config_path = write_config(temp.path(), b"this is not valid toml {{{");

        let result = load_config(Some(&config_path));
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_config_validation_error() {
        let temp = TempDir::new().expect("should create temp dir");
        let config_path = write_config(temp.path(), b"[log]\nfilter = \"\"\n");

        let result = load_config(Some(&config_path));
        match result {
            Err(ConfigError::Validation(errors)) => {
                assert_eq!(errors.len(), 1);
                assert!(errors[0].contains("log.filter"));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_merge_cli_overrides_avatars() {
        let mut config = CovenConfig::default();
        let overrides = CliOverrides { avatars: Some(false), ..Default::default() };

        merge_cli_overrides(&mut config, &overrides);
        assert!(!config.display.avatars);
    }

    #[test]
    fn test_merge_cli_overrides_none_keeps_file_values() {
        let mut config = CovenConfig::default();
        config.cast.strict = true;

        merge_cli_overrides(&mut config, &CliOverrides::default());
        assert!(config.cast.strict);
        assert!(config.display.avatars);
    }

    #[test]
    fn test_merge_cli_overrides_multiple() {
        let mut config = CovenConfig::default();
        let overrides = CliOverrides {
            avatars: Some(false),
            strict: Some(true),
            log_filter: Some("coven=debug".to_string()),
        };

        merge_cli_overrides(&mut config, &overrides);
        assert!(!config.display.avatars);
        assert!(config.cast.strict);
        assert_eq!(config.log.filter, "coven=debug");
    }
}
