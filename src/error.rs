//! Error types for configuration handling.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors raised while loading, saving or overriding a numbering configuration.
///
/// Renumbering itself never fails; only the configuration boundary does.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read configuration {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The configuration file could not be written.
    #[error("failed to write configuration {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The configuration file is not valid JSON for the expected shape.
    #[error("malformed configuration {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// In-memory JSON (de)serialisation failed.
    #[error("configuration JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A `N=STYLE[:SEP]` level override could not be parsed.
    #[error("invalid level override `{input}`: {reason}")]
    InvalidOverride { input: String, reason: String },
}

/// Result alias for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
