//! DK-SAML 2.0 validator cascade.
//!
//! [`AssertionValidator`] is the entry point. It owns one instance of each
//! child validator, built eagerly at construction:
//!
//! ```text
//! AssertionValidator
//! ├── Saml20AssertionValidator (generic SAML 2.0 rules, run first)
//! ├── StatementValidator
//! │   └── AttributeValidator
//! └── SubjectValidator
//!     └── SubjectConfirmationValidator
//! ```
//!
//! Every validator is stateless, `Send + Sync`, and stops at the first
//! violation it finds.

mod assertion;
mod attribute;
mod statement;
mod subject;
mod subject_confirmation;

pub use assertion::AssertionValidator;
pub use attribute::AttributeValidator;
pub use statement::StatementValidator;
pub use subject::SubjectValidator;
pub use subject_confirmation::SubjectConfirmationValidator;
