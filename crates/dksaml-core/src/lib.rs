//! # dksaml-core
//!
//! Configuration and shared error types for the DK-SAML 2.0 profile crates.
//!
//! The profile validators take a [`ProfileConfig`] at construction time. It
//! carries the list of audiences the relying party accepts, the legacy issuer
//! switch for deployments that still emit non-entity issuers, and the
//! statement cardinality policy.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod config;
pub mod error;

pub use config::{ProfileConfig, StatementPolicy};
pub use error::{ConfigError, ConfigResult};
