//! Core error types for respira-core.
//!
//! Every error in the library is recoverable by the caller: a rejected quiz
//! operation leaves the session untouched, a missing content id is a plain
//! `None`, and config problems fall back to defaults at the call site.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for respira-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Quiz session errors
    #[error("Quiz error: {0}")]
    Quiz(#[from] QuizError),

    /// Breathing simulation errors
    #[error("Breathing error: {0}")]
    Breathing(#[from] BreathingError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Quiz-specific errors.
///
/// These are rejected operations, not failures: the session that produced
/// them is left exactly as it was.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum QuizError {
    /// The requested draw matched nothing in the bank
    #[error("No questions available{}", filter_suffix(.difficulty))]
    NoQuestionsAvailable { difficulty: Option<String> },

    /// An answer was submitted to a session that already finished
    #[error("Session is already complete; start a new attempt instead")]
    SessionComplete,

    /// A report was requested before the last question was answered
    #[error("Session is not complete yet ({answered} of {total} answered)")]
    SessionNotComplete { answered: usize, total: usize },

    /// The selected option index does not exist on the current question
    #[error("Option index {index} out of range for question with {len} options")]
    OptionOutOfRange { index: usize, len: usize },

    /// A question failed construction-time validation
    #[error("Invalid question {id}: {message}")]
    InvalidQuestion { id: u32, message: String },
}

fn filter_suffix(difficulty: &Option<String>) -> String {
    match difficulty {
        Some(d) => format!(" for difficulty '{d}'"),
        None => String::new(),
    }
}

/// Breathing simulation errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum BreathingError {
    /// A profile name that is not one of the built-in conditions
    #[error("Unknown breathing condition '{0}'")]
    UnknownCondition(String),

    /// A profile with unusable timings or bounds
    #[error("Invalid profile value for '{field}': {message}")]
    InvalidProfile { field: String, message: String },
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// A dot-path key that does not exist in the config tree
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
