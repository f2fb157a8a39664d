//! SAML 2.0 assertion object model.
//!
//! This crate holds the in-memory representation of a parsed SAML 2.0
//! assertion and the generic (profile-independent) structural checks that
//! every assertion must pass before a profile looks at it.
//!
//! - [`types`] - Assertion, statements, subject, conditions and attributes
//! - [`validation`] - Generic SAML 2.0 assertion validator
//! - [`error`] - Error types for generic SAML validation
//!
//! Deserialization from XML and signature verification happen before an
//! [`Assertion`] reaches this crate.
//!
//! # Example
//!
//! ```rust
//! use dksaml_schema::{Assertion, NameId, Saml20AssertionValidator};
//!
//! let assertion = Assertion::new(NameId::entity("https://idp.example.dk"));
//! let validator = Saml20AssertionValidator::new(Vec::new(), false);
//! assert!(validator.validate(&assertion).is_ok());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod types;
pub mod validation;

pub use error::{SamlError, SamlResult};
pub use types::*;
pub use validation::Saml20AssertionValidator;
