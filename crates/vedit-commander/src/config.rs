#![forbid(unsafe_code)]

//! Configuration for a [`Commander`](crate::Commander).
//!
//! A [`CommanderConfig`] can be built in code or loaded from TOML or JSON at
//! session setup:
//!
//! ```toml
//! # vedit-commander.toml
//! max_depth = 200
//! undo_keyboard = ["ctrl+z"]
//! redo_keyboard = ["ctrl+y", "ctrl+shift+z"]
//! ```
//!
//! ```rust,ignore
//! let config = CommanderConfig::from_toml_file("vedit-commander.toml")?.validated()?;
//! let commander = Commander::<()>::with_config(config);
//! ```
//!
//! # Defaults
//!
//! History is unbounded and the built-in `undo`/`redo` commands carry the
//! usual editor shortcuts. Shortcut strings are metadata only; binding them
//! to real input is the host's job.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default shortcut metadata for the built-in `undo` command.
pub const DEFAULT_UNDO_KEYBOARD: &[&str] = &["ctrl+z"];
/// Default shortcut metadata for the built-in `redo` command.
pub const DEFAULT_REDO_KEYBOARD: &[&str] = &["ctrl+y", "ctrl+shift+z"];

/// Tunables for one command queue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommanderConfig {
    /// Maximum number of history entries. `None` keeps every entry.
    ///
    /// When the bound is exceeded the oldest entry is evicted and the
    /// cursor shifts down with it.
    pub max_depth: Option<usize>,
    /// Shortcut metadata attached to the built-in `undo` command.
    pub undo_keyboard: Vec<String>,
    /// Shortcut metadata attached to the built-in `redo` command.
    pub redo_keyboard: Vec<String>,
}

impl Default for CommanderConfig {
    fn default() -> Self {
        Self {
            max_depth: None,
            undo_keyboard: to_owned_keys(DEFAULT_UNDO_KEYBOARD),
            redo_keyboard: to_owned_keys(DEFAULT_REDO_KEYBOARD),
        }
    }
}

fn to_owned_keys(keys: &[&str]) -> Vec<String> {
    keys.iter().map(|k| (*k).to_owned()).collect()
}

impl CommanderConfig {
    /// Bound the history to `max_depth` entries.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// Replace the built-in `undo` shortcut metadata.
    #[must_use]
    pub fn with_undo_keyboard<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.undo_keyboard = keys.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the built-in `redo` shortcut metadata.
    #[must_use]
    pub fn with_redo_keyboard<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.redo_keyboard = keys.into_iter().map(Into::into).collect();
        self
    }

    /// Load from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Load from a TOML file on disk.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Load from a JSON string.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }

    /// Load from a JSON file on disk.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }

    /// Check every field is usable.
    ///
    /// Returns a list of problems; an empty list means the config is valid.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.max_depth == Some(0) {
            errors.push("max_depth must be > 0 when set".into());
        }

        for (field, keys) in [
            ("undo_keyboard", &self.undo_keyboard),
            ("redo_keyboard", &self.redo_keyboard),
        ] {
            if keys.iter().any(|k| k.trim().is_empty()) {
                errors.push(format!("{field} must not contain empty shortcuts"));
            }
        }

        errors
    }

    /// Return `self` if [`validate`](Self::validate) finds nothing wrong.
    pub fn validated(self) -> Result<Self, ConfigError> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(self)
        } else {
            Err(ConfigError::Validation(errors))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unbounded_with_editor_shortcuts() {
        let config = CommanderConfig::default();
        assert_eq!(config.max_depth, None);
        assert_eq!(config.undo_keyboard, vec!["ctrl+z"]);
        assert_eq!(config.redo_keyboard, vec!["ctrl+y", "ctrl+shift+z"]);
        assert!(config.validate().is_empty());
    }

    #[test]
    fn toml_fills_missing_fields_from_defaults() {
        let config = CommanderConfig::from_toml_str("max_depth = 50").unwrap();
        assert_eq!(config.max_depth, Some(50));
        assert_eq!(config.undo_keyboard, vec!["ctrl+z"]);
    }

    #[test]
    fn json_overrides_shortcuts() {
        let config =
            CommanderConfig::from_json_str(r#"{"undo_keyboard": ["cmd+z"]}"#).unwrap();
        assert_eq!(config.undo_keyboard, vec!["cmd+z"]);
        assert_eq!(config.max_depth, None);
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = CommanderConfig::from_toml_str("max_depth = \"lots\"").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = CommanderConfig::from_json_str("{").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn zero_depth_and_blank_shortcuts_are_rejected() {
        let config = CommanderConfig::default()
            .with_max_depth(0)
            .with_redo_keyboard(["ctrl+y", " "]);
        let errors = config.validate();
        assert_eq!(errors.len(), 2);
        assert!(errors[0].contains("max_depth"));
        assert!(errors[1].contains("redo_keyboard"));

        let err = config.validated().unwrap_err();
        assert!(matches!(err, ConfigError::Validation(ref e) if e.len() == 2));
    }

    #[test]
    fn file_loaders_read_from_disk() {
        let dir = tempfile::tempdir().unwrap();

        let toml_path = dir.path().join("commander.toml");
        std::fs::write(&toml_path, "max_depth = 7\nredo_keyboard = [\"f4\"]\n").unwrap();
        let from_toml = CommanderConfig::from_toml_file(&toml_path).unwrap();
        assert_eq!(from_toml.max_depth, Some(7));
        assert_eq!(from_toml.redo_keyboard, vec!["f4"]);

        let json_path = dir.path().join("commander.json");
        std::fs::write(&json_path, r#"{"max_depth": 3}"#).unwrap();
        let from_json = CommanderConfig::from_json_file(&json_path).unwrap();
        assert_eq!(from_json.max_depth, Some(3));

        let missing = CommanderConfig::from_toml_file(dir.path().join("nope.toml"));
        assert!(matches!(missing, Err(ConfigError::Io(_))));
    }

    #[test]
    fn serialized_default_round_trips_through_toml() {
        let config = CommanderConfig::default().with_max_depth(12);
        let text = toml::to_string(&config).unwrap();
        assert_eq!(CommanderConfig::from_toml_str(&text).unwrap(), config);
    }
}
