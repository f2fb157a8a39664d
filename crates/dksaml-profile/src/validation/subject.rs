//! Subject validation.

use dksaml_schema::{Subject, SubjectItem};

use super::SubjectConfirmationValidator;
use crate::error::FormatViolation;

/// Validates a `<Subject>` and its confirmations.
#[derive(Debug, Clone, Default)]
pub struct SubjectValidator {
    confirmation_validator: SubjectConfirmationValidator,
}

impl SubjectValidator {
    /// Creates a validator.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            confirmation_validator: SubjectConfirmationValidator::new(),
        }
    }

    /// Validates a subject.
    ///
    /// Every `<SubjectConfirmation>` is validated in document order, even
    /// after a bearer confirmation has been seen; the first violation is
    /// returned. At least one confirmation must use the bearer method.
    pub fn validate(&self, subject: &Subject) -> Result<(), FormatViolation> {
        if subject.items.is_empty() {
            return Err(FormatViolation::EmptySubject);
        }

        let mut bearer_present = false;
        for item in &subject.items {
            match item {
                SubjectItem::SubjectConfirmation(confirmation) => {
                    bearer_present |= confirmation.is_bearer();
                    self.confirmation_validator.validate(confirmation)?;
                }
                SubjectItem::NameId(_) | SubjectItem::BaseId(_) | SubjectItem::EncryptedId(_) => {}
            }
        }

        if !bearer_present {
            return Err(FormatViolation::MissingBearerConfirmation);
        }

        Ok(())
    }
}
