//! Keywright Signing - Release signing-configuration resolution
//!
//! Given the optional `keystore.properties` contents and the build
//! invocation, decides whether the release build gets a signing
//! configuration, failing fast on missing or incomplete credentials.
//! The resolver is a pure function; loading the properties file is the
//! caller's job (see `keywright-core`).

pub mod error;
pub mod keystore;
pub mod resolver;

pub use error::{Result, SigningError};
pub use keystore::{KeystoreProperties, REQUIRED_KEYS};
pub use resolver::{resolve, BuildType, SigningConfig, SigningResolution};
