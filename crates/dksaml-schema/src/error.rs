//! SAML error types.
//!
//! Errors raised by the generic SAML 2.0 structural validator. Profile
//! validators wrap these unchanged.

use thiserror::Error;

/// Result type for generic SAML validation.
pub type SamlResult<T> = Result<T, SamlError>;

/// Generic SAML 2.0 validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SamlError {
    /// The assertion declares a SAML version other than 2.0.
    #[error("unsupported SAML version: {0}")]
    UnsupportedVersion(String),

    /// Missing required element or attribute.
    #[error("missing required element: {0}")]
    MissingElement(String),

    /// Invalid issuer element.
    #[error("invalid issuer: {0}")]
    InvalidIssuer(String),

    /// Assertion conditions are inconsistent.
    #[error("invalid conditions: {0}")]
    InvalidConditions(String),

    /// None of the audiences in a restriction is accepted.
    #[error("invalid audience: expected one of [{expected}], got [{actual}]")]
    InvalidAudience {
        /// The accepted audience URIs.
        expected: String,
        /// The audiences found in the restriction.
        actual: String,
    },
}
