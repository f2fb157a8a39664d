//! Subject confirmation validation.

use dksaml_schema::SubjectConfirmation;

use crate::error::FormatViolation;

/// Validates one `<SubjectConfirmation>`.
///
/// Only bearer confirmations are constrained by the profile. Other methods
/// pass unchecked.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubjectConfirmationValidator;

impl SubjectConfirmationValidator {
    /// Creates a validator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Validates a subject confirmation.
    ///
    /// For bearer confirmations the data must be present, name a
    /// `Recipient`, carry `NotOnOrAfter` and omit `NotBefore`, checked in that
    /// order.
    pub fn validate(&self, confirmation: &SubjectConfirmation) -> Result<(), FormatViolation> {
        if !confirmation.is_bearer() {
            return Ok(());
        }

        let data = confirmation
            .subject_confirmation_data
            .as_ref()
            .ok_or(FormatViolation::MissingConfirmationData)?;

        if !is_required_string_present(data.recipient.as_deref()) {
            return Err(FormatViolation::MissingRecipient);
        }

        if data.not_on_or_after.is_none() {
            return Err(FormatViolation::MissingNotOnOrAfter);
        }

        if data.not_before.is_some() {
            return Err(FormatViolation::DisallowedNotBefore);
        }

        Ok(())
    }
}

/// Returns true if a required string attribute has non-blank content.
pub(crate) fn is_required_string_present(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}
