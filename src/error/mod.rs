//! Error handling module for StreamGrab

use thiserror::Error;

/// Main error type for StreamGrab operations
#[derive(Error, Debug)]
pub enum GrabError {
    /// Spawn failure, read failure or non-zero exit of an external tool
    #[error("{tool} failed: {message}")]
    ExternalTool { tool: String, message: String },

    /// Probe output is not a single parseable JSON record
    #[error("Malformed metadata from extractor: {message}")]
    MalformedMetadata { message: String },

    /// Link resolution produced nothing usable
    #[error("Cannot parse links")]
    NoLinks,

    /// Mux synthesis attempted without any input stream
    #[error("Cannot build a mux command without input streams")]
    SynthesisPrecondition,

    /// Trim timestamp is not HH:MM:SS
    #[error("Invalid timestamp: {value}. Expected HH:MM:SS")]
    InvalidTimestamp { value: String },

    /// Operator left the source URL blank
    #[error("Source URL is required")]
    MissingSource,

    /// Configuration file error
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Console I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl GrabError {
    /// Shorthand for an external tool failure
    pub fn external(tool: impl Into<String>, message: impl Into<String>) -> Self {
        GrabError::ExternalTool {
            tool: tool.into(),
            message: message.into(),
        }
    }
}

/// Result type alias for StreamGrab operations
pub type GrabResult<T> = std::result::Result<T, GrabError>;
