//! Error types for the metalint library.
//!
//! Quality defects in the inspected metadata are never errors; they are
//! reported as [`Finding`](crate::Finding)s. Errors only arise from host
//! input (documents, override trees) that cannot be interpreted at all.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for metalint operations.
#[derive(Debug, Error)]
pub enum MetalintError {
    /// Error reading or writing a file on behalf of the host.
    #[error("IO error for '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The document is not well-formed XML.
    #[error("XML error: {0}")]
    Xml(#[from] roxmltree::Error),

    /// Error from the CSV writer.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// An override tree does not have the shape of a configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A configuration value cannot be coerced to the type of its leaf.
    #[error("Invalid value for setting '{key}': {value}")]
    InvalidSetting { key: String, value: String },

    /// A configured pattern is not a valid regular expression.
    #[error("Invalid pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// No metadata standard with this name is known.
    #[error("Unknown metadata standard: {0}")]
    UnknownStandard(String),
}

/// Result type alias for metalint operations.
pub type Result<T> = std::result::Result<T, MetalintError>;
