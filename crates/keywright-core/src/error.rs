//! Error types for Keywright Core

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using PropertiesError
pub type Result<T> = std::result::Result<T, PropertiesError>;

/// Errors from loading a properties file
#[derive(Debug, Error)]
pub enum PropertiesError {
    /// Properties file not found
    #[error("Properties file not found at {0}")]
    NotFound(PathBuf),

    /// Failed to read the properties file
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
