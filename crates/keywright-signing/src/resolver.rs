//! The signing-configuration resolver
//!
//! Pure function from (optional keystore properties, build invocation) to
//! a resolution: either no signing, or a fully-populated release signing
//! configuration. There is no partial outcome; some-but-not-all credentials
//! is a hard failure regardless of build type.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::Serialize;
use tracing::debug;

use keywright_core::BuildInvocation;

use crate::error::{Result, SigningError};
use crate::keystore::KeystoreProperties;

/// A fully-populated release signing configuration.
///
/// All four fields are non-blank by construction; the only way to obtain
/// one is through [`resolve`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SigningConfig {
    /// Path to the key store file
    pub store_file: PathBuf,
    /// Key store password
    pub store_password: String,
    /// Alias of the signing key within the store
    pub key_alias: String,
    /// Password for the signing key
    pub key_password: String,
}

/// Outcome of signing resolution
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "resolution", rename_all = "snake_case")]
pub enum SigningResolution {
    /// No signing configuration is applied; downstream uses default signing
    NoSigning,
    /// Signing configuration to apply to the release build type
    Signing(SigningConfig),
}

impl SigningResolution {
    /// The signing configuration, if one was produced
    pub fn signing_config(&self) -> Option<&SigningConfig> {
        match self {
            Self::Signing(config) => Some(config),
            Self::NoSigning => None,
        }
    }

    /// The configuration to apply to a given build type.
    ///
    /// Signing applies to the release build type only; every other build
    /// type is unaffected regardless of the resolution outcome.
    pub fn signing_for(&self, build_type: BuildType) -> Option<&SigningConfig> {
        match build_type {
            BuildType::Release => self.signing_config(),
            BuildType::Debug => None,
        }
    }
}

/// Build type a configuration can apply to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildType {
    Debug,
    Release,
}

impl BuildType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Release => "release",
        }
    }
}

impl fmt::Display for BuildType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BuildType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debug" => Ok(Self::Debug),
            "release" => Ok(Self::Release),
            other => Err(format!("unknown build type: {other}")),
        }
    }
}

/// Resolve the signing configuration for one build invocation.
///
/// - Properties present: all four required values must be non-blank, and
///   the result is a [`SigningResolution::Signing`] echoing them unchanged;
///   anything less fails with [`SigningError::IncompleteProperties`].
/// - Properties absent: fails with [`SigningError::MissingPropertiesFile`]
///   when a release build was requested, otherwise resolves to
///   [`SigningResolution::NoSigning`].
pub fn resolve(
    properties: Option<&KeystoreProperties>,
    invocation: &BuildInvocation,
) -> Result<SigningResolution> {
    match properties {
        Some(props) => {
            let missing = props.missing_or_blank();
            if !missing.is_empty() {
                debug!(?missing, "keystore properties incomplete");
                return Err(SigningError::IncompleteProperties);
            }

            // missing_or_blank() was empty, so all four are Some
            let (Some(store_file), Some(store_password), Some(key_alias), Some(key_password)) = (
                props.store_file.clone(),
                props.store_password.clone(),
                props.key_alias.clone(),
                props.key_password.clone(),
            ) else {
                return Err(SigningError::IncompleteProperties);
            };

            let config = SigningConfig {
                store_file: PathBuf::from(store_file),
                store_password,
                key_alias,
                key_password,
            };

            debug!(
                store_file = %config.store_file.display(),
                key_alias = %config.key_alias,
                "resolved release signing configuration"
            );
            Ok(SigningResolution::Signing(config))
        }
        None if invocation.is_release_build() => {
            debug!("release build requested with no properties source");
            Err(SigningError::MissingPropertiesFile)
        }
        None => Ok(SigningResolution::NoSigning),
    }
}
