//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for Routine Master
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum RoutineError {
    /// Missing credential or unreadable configuration. Fatal at startup.
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(String),

    /// A single model attempt failed.
    #[error("Generation error: {0}")]
    Generation(String),

    /// Both the primary and the fallback model attempts failed.
    #[error("Request error: {0}")]
    Request(String),

    /// Model reply is not a JSON array of schedule items.
    #[error("Decode error: {0}")]
    Decode(String),

    /// A schedule item could not be turned into a calendar event.
    #[error("Export error: {0}")]
    Export(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl RoutineError {
    /// Stable label suitable for structured logging.
    pub fn kind_label(&self) -> &'static str {
        match self {
            Self::Config(_) => "config",
            Self::Network(_) => "network",
            Self::Generation(_) => "generation",
            Self::Request(_) => "request",
            Self::Decode(_) => "decode",
            Self::Export(_) => "export",
            Self::InvalidInput(_) => "invalid_input",
            Self::Internal(_) => "internal",
        }
    }
}

/// Result type alias for Routine Master operations
pub type Result<T> = std::result::Result<T, RoutineError>;
