//! Error types for calprint

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for calprint
#[derive(Debug, Error)]
pub enum CalprintError {
    #[error("Input file not found: {0}")]
    InputNotFound(PathBuf),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Unrecognized entry key: {0}")]
    UnrecognizedKey(String),

    #[error("Output container not found: {0}")]
    ContainerMissing(String),

    #[error("Element not found: {0}")]
    ElementMissing(String),

    #[error("Unsupported calendar file version: {0}")]
    UnsupportedVersion(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Template error: {0}")]
    Template(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),
}

impl CalprintError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CalprintError::InputNotFound(_) => 2,
            CalprintError::InvalidDate(_) => 3,
            CalprintError::UnrecognizedKey(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            CalprintError::InputNotFound(path) => {
                format!(
                    "Input file not found: {}\n\n\
                    Suggestions:\n\
                    • Pass the calendar file explicitly: calprint path/to/calendar.json\n\
                    • Run calprint from the directory containing calendar.json",
                    path.display()
                )
            }
            CalprintError::InvalidDate(input) => {
                format!(
                    "Invalid date: '{}'\n\n\
                    Expected format: YYYY-MM-DD\n\
                    Example: calprint --today 2024-01-10",
                    input
                )
            }
            CalprintError::UnrecognizedKey(key) => {
                format!(
                    "Unrecognized entry key: '{}'\n\n\
                    Keys must be a date (e.g., 2024-01-10) or one of:\n\
                    Sun, Mon, Tue, Wed, Thu, Fri, Sat\n\n\
                    Suggestions:\n\
                    • Fix or remove the key in the input file\n\
                    • Drop --strict to skip such keys with a warning",
                    key
                )
            }
            CalprintError::ContainerMissing(id) => {
                format!(
                    "Output container not found: {}\n\n\
                    Suggestions:\n\
                    • Custom page templates must contain the {{CONTENT}} placeholder\n\
                    • Check container_id in calprint.toml",
                    id
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using CalprintError
pub type Result<T> = std::result::Result<T, CalprintError>;
