// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration discovery and loading.

use crate::error::{ConfigError, HookError, Result};
use std::path::{Path, PathBuf};

use super::schema::HookConfig;

/// Configuration file names to search for, in order of priority.
const CONFIG_FILES: &[&str] = &["hookcheck.toml", ".hookcheck.toml", ".config/hookcheck.toml"];

/// Find the configuration file in the current directory or parent directories.
pub fn find_config_file() -> Option<PathBuf> {
    let current_dir = std::env::current_dir().ok()?;
    find_config_file_from(&current_dir)
}

/// Find the configuration file starting from a specific directory.
pub fn find_config_file_from(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        if let Some(path) = find_in_dir(&current) {
            return Some(path);
        }

        if !current.pop() {
            break;
        }
    }

    if let Some(home) = dirs::home_dir() {
        if let Some(path) = find_in_dir(&home) {
            return Some(path);
        }
    }

    // XDG config directory
    let config = dirs::config_dir()?.join("hookcheck").join("config.toml");
    config.is_file().then_some(config)
}

fn find_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
}

/// Load configuration from the default locations.
pub fn load_config() -> Result<HookConfig> {
    match find_config_file() {
        Some(path) => load_config_from(&path),
        None => {
            tracing::debug!("No configuration file found, using defaults");
            Ok(HookConfig::default())
        }
    }
}

/// Load configuration from a specific path.
pub fn load_config_from(path: &Path) -> Result<HookConfig> {
    tracing::debug!("Loading configuration from: {:?}", path);

    if !path.exists() {
        return Err(HookError::Config(ConfigError::NotFound {
            path: path.to_path_buf(),
        }));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        HookError::Config(ConfigError::ReadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    })?;

    parse_config(&content)
}

/// Parse configuration from a TOML string.
pub fn parse_config(content: &str) -> Result<HookConfig> {
    toml::from_str(content).map_err(|e| {
        HookError::Config(ConfigError::ParseError {
            message: format!("Failed to parse TOML: {}", e),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_parse_empty_config() {
        let config = parse_config("").unwrap();
        assert_eq!(config, HookConfig::default());
    }

    #[test]
    fn test_parse_pattern_config() {
        let toml = r#"
[commit_msg]
accept = ["^(feat|fix): .+", "^docs: .+"]
reject = ["^WIP"]

[branch_name]
reject = ["^main$", "^master$"]
"#;
        let config = parse_config(toml).unwrap();
        assert_eq!(config.commit_msg.accept.len(), 2);
        assert_eq!(config.commit_msg.reject, vec!["^WIP"]);
        assert!(config.branch_name.accept.is_empty());
        assert_eq!(config.branch_name.reject, vec!["^main$", "^master$"]);
    }

    #[test]
    fn test_parse_invalid_toml() {
        let err = parse_config("[commit_msg\naccept = 1").unwrap_err();
        assert!(matches!(
            err,
            HookError::Config(ConfigError::ParseError { .. })
        ));
    }

    #[test]
    fn test_parse_wrong_type() {
        let err = parse_config("[commit_msg]\naccept = \"^feat\"").unwrap_err();
        assert!(err.to_string().contains("Failed to parse TOML"));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = load_config_from(&dir.path().join("hookcheck.toml")).unwrap_err();
        assert!(matches!(err, HookError::Config(ConfigError::NotFound { .. })));
    }

    #[test]
    fn test_find_config_in_parent_dir() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join(".hookcheck.toml"), "").unwrap();

        let found = find_config_file_from(&nested).unwrap();
        assert_eq!(found, dir.path().join(".hookcheck.toml"));
    }

    #[test]
    fn test_find_config_priority() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("hookcheck.toml"), "").unwrap();
        fs::write(dir.path().join(".hookcheck.toml"), "").unwrap();

        let found = find_config_file_from(dir.path()).unwrap();
        assert_eq!(found, dir.path().join("hookcheck.toml"));
    }
}
