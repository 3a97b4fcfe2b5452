//! Error types for signing resolution

use thiserror::Error;

/// Result type alias for signing resolution
pub type Result<T> = std::result::Result<T, SigningError>;

/// Signing resolution errors. Both are fatal: a release build without a
/// valid signing configuration must never silently succeed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SigningError {
    /// A release build was requested but no properties source exists
    #[error("Missing keystore.properties for release signing")]
    MissingPropertiesFile,

    /// The properties source exists but required values are missing or blank
    #[error(
        "keystore.properties is missing required values: \
         storeFile, storePassword, keyAlias, keyPassword"
    )]
    IncompleteProperties,
}
