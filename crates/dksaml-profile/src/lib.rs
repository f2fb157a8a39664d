//! DK-SAML 2.0 profile validation.
//!
//! The Danish DK-SAML 2.0 profile narrows SAML 2.0 Web Browser SSO: an
//! assertion must carry exactly one `AuthnStatement` and one
//! `AttributeStatement`, a bearer subject confirmation with strict timing
//! fields, a non-empty audience restriction, and only plain, URI-named,
//! string-valued attributes.
//!
//! - [`validation`] - The validator cascade, rooted at [`AssertionValidator`]
//! - [`attributes`] - Well-known DK-SAML attribute names
//! - [`error`] - [`FormatViolation`] and [`ProfileError`]
//!
//! # Example
//!
//! ```rust,ignore
//! use dksaml_core::ProfileConfig;
//! use dksaml_profile::AssertionValidator;
//!
//! let validator = AssertionValidator::new(ProfileConfig::new(["https://sp.example.dk"]));
//! validator.validate(&assertion)?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod attributes;
pub mod error;
pub mod validation;

pub use error::{FormatViolation, ProfileError, ProfileResult};
pub use validation::{
    AssertionValidator, AttributeValidator, StatementValidator, SubjectConfirmationValidator,
    SubjectValidator,
};
