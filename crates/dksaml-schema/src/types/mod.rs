//! SAML 2.0 types and data structures.
//!
//! The in-memory assertion graph handed to validators after parsing and
//! signature verification.

mod assertion;
mod attribute;
mod constants;
mod encrypted;
mod name_id;
mod statement;
mod subject;

pub use assertion::*;
pub use attribute::*;
pub use constants::*;
pub use encrypted::*;
pub use name_id::*;
pub use statement::*;
pub use subject::*;
