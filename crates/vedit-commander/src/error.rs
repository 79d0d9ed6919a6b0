#![forbid(unsafe_code)]

//! Error types for command registration, invocation and config loading.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CommanderError>;

/// Caller misuse of the command registry.
///
/// Boundary conditions (undo on an empty history, redo at the end of it)
/// are not errors and never surface here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommanderError {
    #[error("unknown command: {name}")]
    UnknownCommand { name: String },

    #[error("command name must not be empty")]
    EmptyName,
}

impl CommanderError {
    #[must_use]
    pub fn unknown(name: impl Into<String>) -> Self {
        Self::UnknownCommand { name: name.into() }
    }
}

/// Errors raised while loading a [`CommanderConfig`](crate::CommanderConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid commander config: {}", .0.join("; "))]
    Validation(Vec<String>),
}
