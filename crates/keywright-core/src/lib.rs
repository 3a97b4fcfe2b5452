//! Keywright Core - Build-configuration primitives
//!
//! This crate provides the low-level pieces the signing resolver is built on:
//! a parser for Java-style `.properties` files (the `keystore.properties`
//! convention) and the build-invocation context that tells the resolver
//! whether a release build was requested.

pub mod error;
pub mod invocation;
pub mod properties;

pub use error::{PropertiesError, Result};
pub use invocation::BuildInvocation;
pub use properties::{PropertiesFile, KEYSTORE_PROPERTIES};
