//! Error types for the acceptance test harness
//!
//! Step hooks return these errors. The engine never lets one escape
//! `Scenario::run`; they are folded into the report instead.

use std::io;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the harness
#[derive(Error, Debug)]
pub enum Error {
    // === Test Procedure Errors ===
    #[error("Action failed: {0}")]
    Action(String),

    #[error("{hook} of '{owner}' failed: {message}")]
    Hook {
        hook: &'static str,
        owner: String,
        message: String,
    },

    #[error("Panicked: {0}")]
    Panicked(String),

    // === Configuration Errors ===
    #[error("Invalid configuration file: {0}")]
    ConfigParse(String),

    // === IO Errors ===
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to read file '{path}': {error}")]
    FileRead { path: String, error: String },

    // === Serialization Errors ===
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // === Internal Errors ===
    #[error("Internal error: {0}")]
    Internal(String),

    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
    /// Create an action error, the usual way for `Step::act` to "throw"
    pub fn action(message: impl Into<String>) -> Self {
        Self::Action(message.into())
    }

    /// Create a hook failure error
    pub fn hook(hook: &'static str, owner: &str, message: impl Into<String>) -> Self {
        Self::Hook {
            hook,
            owner: owner.to_string(),
            message: message.into(),
        }
    }

    /// Wrap any foreign error
    pub fn other<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Other(Box::new(err))
    }

    /// Whether this error came from a caught panic
    pub fn is_panic(&self) -> bool {
        matches!(self, Self::Panicked(_))
    }
}
