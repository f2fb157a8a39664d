//! Generic SAML 2.0 assertion validation.
//!
//! Structural rules every SAML 2.0 assertion must satisfy regardless of the
//! profile in use. Profile validators run this first and add their own
//! constraints on top.

use crate::error::{SamlError, SamlResult};
use crate::types::{Assertion, Conditions, NameId, NameIdFormat, SAML_VERSION};

/// Generic SAML 2.0 assertion validator.
#[derive(Debug, Clone, Default)]
pub struct Saml20AssertionValidator {
    /// Audiences accepted by the relying party. Empty disables the check.
    allowed_audience_uris: Vec<String>,
    /// Accept issuers with non-entity formats and qualifiers.
    quirks_mode: bool,
}

impl Saml20AssertionValidator {
    /// Creates a validator.
    #[must_use]
    pub const fn new(allowed_audience_uris: Vec<String>, quirks_mode: bool) -> Self {
        Self {
            allowed_audience_uris,
            quirks_mode,
        }
    }

    /// Returns true if issuer shape checks are relaxed.
    #[must_use]
    pub const fn quirks_mode(&self) -> bool {
        self.quirks_mode
    }

    /// Validates an assertion against the generic SAML 2.0 rules.
    pub fn validate(&self, assertion: &Assertion) -> SamlResult<()> {
        if assertion.version != SAML_VERSION {
            return Err(SamlError::UnsupportedVersion(assertion.version.clone()));
        }

        if assertion.id.trim().is_empty() {
            return Err(SamlError::MissingElement("Assertion/@ID".to_string()));
        }

        // Presence is a profile decision; only the shape is checked here.
        if let Some(ref issuer) = assertion.issuer {
            self.validate_issuer(issuer)?;
        }

        if let Some(ref conditions) = assertion.conditions {
            self.validate_conditions(conditions)?;
        }

        Ok(())
    }

    fn validate_issuer(&self, issuer: &NameId) -> SamlResult<()> {
        if issuer.value.trim().is_empty() {
            return Err(SamlError::InvalidIssuer("issuer value is empty".to_string()));
        }

        if self.quirks_mode {
            return Ok(());
        }

        if let Some(ref format) = issuer.format {
            if NameIdFormat::from_uri(format) != Some(NameIdFormat::Entity) {
                return Err(SamlError::InvalidIssuer(format!(
                    "issuer format must be {}, got {format}",
                    NameIdFormat::Entity.uri()
                )));
            }

            // Entity identifiers must not be qualified (SAML core 8.3.6).
            if issuer.name_qualifier.is_some()
                || issuer.sp_name_qualifier.is_some()
                || issuer.sp_provided_id.is_some()
            {
                return Err(SamlError::InvalidIssuer(
                    "entity issuer must not carry name qualifiers".to_string(),
                ));
            }
        }

        Ok(())
    }

    fn validate_conditions(&self, conditions: &Conditions) -> SamlResult<()> {
        if let (Some(not_before), Some(not_on_or_after)) =
            (conditions.not_before, conditions.not_on_or_after)
        {
            if not_before >= not_on_or_after {
                return Err(SamlError::InvalidConditions(
                    "NotBefore must be earlier than NotOnOrAfter".to_string(),
                ));
            }
        }

        if self.allowed_audience_uris.is_empty() {
            return Ok(());
        }

        for restriction in conditions.audience_restrictions() {
            // Empty restrictions are left for the profile to report.
            if restriction.audiences.is_empty() {
                continue;
            }

            let accepted = restriction
                .audiences
                .iter()
                .any(|a| self.allowed_audience_uris.iter().any(|allowed| allowed == a));
            if !accepted {
                tracing::debug!(
                    audiences = ?restriction.audiences,
                    "audience restriction names no accepted audience"
                );
                return Err(SamlError::InvalidAudience {
                    expected: self.allowed_audience_uris.join(", "),
                    actual: restriction.audiences.join(", "),
                });
            }
        }

        Ok(())
    }
}
