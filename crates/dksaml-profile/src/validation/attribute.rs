//! Attribute validation.

use dksaml_schema::{AttributeValue, EncryptedElement, SamlAttribute};
use iri_string::types::UriStr;

use crate::error::FormatViolation;

/// Validates a single `<Attribute>` against the DK-SAML 2.0 profile.
///
/// Names must be absolute URIs and every value must be `xs:string`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AttributeValidator;

impl AttributeValidator {
    /// Creates a validator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Validates a plain attribute.
    pub fn validate(&self, attribute: &SamlAttribute) -> Result<(), FormatViolation> {
        if !is_absolute_uri(&attribute.name) {
            return Err(FormatViolation::AttributeNameNotUri {
                name: attribute.name.clone(),
            });
        }

        let Some(ref values) = attribute.values else {
            return Ok(());
        };

        match values
            .iter()
            .enumerate()
            .find(|(_, value)| !matches!(value, AttributeValue::String(_)))
        {
            Some((index, value)) => Err(FormatViolation::AttributeValueNotString {
                name: attribute.name.clone(),
                index,
                xsi_type: value.xsi_type().to_string(),
            }),
            None => Ok(()),
        }
    }

    /// Rejects an encrypted attribute.
    ///
    /// The profile has no rules for encrypted attributes, so none can pass.
    pub fn validate_encrypted(&self, _encrypted: &EncryptedElement) -> Result<(), FormatViolation> {
        Err(FormatViolation::EncryptedAttributeUnsupported)
    }
}

/// Returns true if `candidate` is a well-formed absolute URI (RFC 3986).
pub(crate) fn is_absolute_uri(candidate: &str) -> bool {
    UriStr::new(candidate).is_ok()
}
