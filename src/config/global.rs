//! # Global Configuration
//!
//! Loads prompt settings from `~/.config/editprompt/config`.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{
    cell::RefCell,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use super::PromptConfig;
use crate::constants::{GLOBAL_CONFIG_DIR, GLOBAL_CONFIG_FILENAME};

/// Valid top-level field names in the config file.
/// Used for validation to detect unknown/invalid fields.
const VALID_FIELDS: &[&str] = &["help_input", "color", "icons"];

/// Result of validating a config file.
#[derive(Debug, Default)]
pub struct ConfigValidation {
    /// Fields that were not recognized and are ignored
    pub invalid: Vec<String>,
}

impl ConfigValidation {
    /// Returns one warning line per problem found.
    pub fn warnings(&self) -> Vec<String> {
        self.invalid
            .iter()
            .map(|field| format!("Unknown config field '{field}' ignored"))
            .collect()
    }
}

thread_local! {
    /// Thread-local override for the home directory path.
    /// Used by tests to redirect config to a temp directory
    /// without modifying environment variables.
    static HOME_OVERRIDE: RefCell<Option<PathBuf>> = const { RefCell::new(None) };
}

/// Sets a thread-local override for the home directory.
pub fn set_home_override(path: Option<PathBuf>) {
    HOME_OVERRIDE.with(|cell| {
        *cell.borrow_mut() = path;
    });
}

fn get_home_override() -> Option<PathBuf> {
    HOME_OVERRIDE.with(|cell| cell.borrow().clone())
}

impl PromptConfig {
    /// Returns the path to the global config file (~/.config/editprompt/config)
    ///
    /// Checks for a thread-local home override first (used by tests),
    /// then falls back to $HOME/.config (XDG Base Directory).
    pub fn path() -> Option<PathBuf> {
        get_home_override()
            .or_else(dirs::home_dir)
            .map(|home| {
                home.join(".config")
                    .join(GLOBAL_CONFIG_DIR)
                    .join(GLOBAL_CONFIG_FILENAME)
            })
    }

    /// Loads the global config, falling back to defaults when the file
    /// does not exist.
    pub fn load() -> Result<(Self, ConfigValidation)> {
        match Self::path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok((Self::default(), ConfigValidation::default())),
        }
    }

    /// Loads a config file from an explicit path.
    pub fn load_from(path: &Path) -> Result<(Self, ConfigValidation)> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        let table: toml::Table = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;

        let validation = ConfigValidation {
            invalid: table
                .keys()
                .filter(|key| !VALID_FIELDS.contains(&key.as_str()))
                .cloned()
                .collect(),
        };

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Invalid config: {}", path.display()))?;

        Ok((config, validation))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_home_override() {
        let temp = tempdir().unwrap();
        let expected_path = temp
            .path()
            .join(".config")
            .join("editprompt")
            .join("config");

        set_home_override(Some(temp.path().to_path_buf()));
        let path = PromptConfig::path().unwrap();
        assert_eq!(path, expected_path);

        set_home_override(None);
        let path = PromptConfig::path();
        assert_ne!(path, Some(expected_path));
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let temp = tempdir().unwrap();
        set_home_override(Some(temp.path().to_path_buf()));

        let (config, validation) = PromptConfig::load().unwrap();
        assert_eq!(config, PromptConfig::default());
        assert!(validation.invalid.is_empty());

        set_home_override(None);
    }

    #[test]
    fn test_load_reports_unknown_fields() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config");
        fs::write(&path, "color = false\neditor = \"vim\"\n").unwrap();

        let (config, validation) = PromptConfig::load_from(&path).unwrap();
        assert!(!config.color);
        assert_eq!(validation.invalid, vec!["editor".to_string()]);
        assert_eq!(
            validation.warnings(),
            vec!["Unknown config field 'editor' ignored".to_string()]
        );
    }

    #[test]
    fn test_load_invalid_toml() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config");
        fs::write(&path, "color = [").unwrap();

        let err = PromptConfig::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }
}
