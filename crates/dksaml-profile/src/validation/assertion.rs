//! Assertion validation.

use dksaml_core::{ProfileConfig, StatementPolicy};
use dksaml_schema::{Assertion, Condition, Saml20AssertionValidator, Statement};

use super::{StatementValidator, SubjectValidator};
use crate::error::{FormatViolation, ProfileResult};

/// DK-SAML 2.0 assertion validator.
///
/// Runs the generic SAML 2.0 checks, then the profile checks in a fixed
/// order: issuer, statements, subject, conditions. The first failure is
/// returned and nothing after it runs.
#[derive(Debug, Clone)]
pub struct AssertionValidator {
    base: Saml20AssertionValidator,
    statement_policy: StatementPolicy,
    statement_validator: StatementValidator,
    subject_validator: SubjectValidator,
}

impl AssertionValidator {
    /// Creates a validator from a profile configuration.
    #[must_use]
    pub fn new(config: ProfileConfig) -> Self {
        Self {
            base: Saml20AssertionValidator::new(
                config.allowed_audience_uris,
                config.legacy_issuer_mode,
            ),
            statement_policy: config.statement_policy,
            statement_validator: StatementValidator::new(),
            subject_validator: SubjectValidator::new(),
        }
    }

    /// Validates an assertion against the DK-SAML 2.0 profile.
    pub fn validate(&self, assertion: &Assertion) -> ProfileResult<()> {
        self.base.validate(assertion)?;

        let result = Self::validate_issuer(assertion)
            .and_then(|()| self.validate_statements(assertion))
            .and_then(|()| self.validate_subject(assertion))
            .and_then(|()| Self::validate_conditions(assertion));

        match result {
            Ok(()) => {
                tracing::trace!(assertion_id = %assertion.id, "assertion conforms to DK-SAML 2.0");
                Ok(())
            }
            Err(violation) => {
                tracing::debug!(
                    assertion_id = %assertion.id,
                    code = violation.code(),
                    element = violation.element(),
                    "DK-SAML 2.0 profile violation: {violation}"
                );
                Err(violation.into())
            }
        }
    }

    // Issuer shape is checked by the base validator, relaxed in legacy mode.
    fn validate_issuer(assertion: &Assertion) -> Result<(), FormatViolation> {
        if assertion.issuer.is_none() {
            return Err(FormatViolation::MissingIssuer);
        }
        Ok(())
    }

    fn validate_statements(&self, assertion: &Assertion) -> Result<(), FormatViolation> {
        let total = assertion.statements.len();
        let (authn, attribute) =
            assertion
                .statements
                .iter()
                .fold((0, 0), |(authn, attribute), statement| match statement {
                    Statement::Authn(_) => (authn + 1, attribute),
                    Statement::Attribute(_) => (authn, attribute + 1),
                    Statement::AuthzDecision(_) | Statement::Extension(_) => (authn, attribute),
                });

        if !self.statement_policy.permits(authn, attribute, total) {
            return Err(FormatViolation::InvalidStatementSet {
                authn,
                attribute,
                total,
            });
        }

        assertion
            .statements
            .iter()
            .try_for_each(|statement| self.statement_validator.validate(statement))
    }

    fn validate_subject(&self, assertion: &Assertion) -> Result<(), FormatViolation> {
        let subject = assertion
            .subject
            .as_ref()
            .ok_or(FormatViolation::MissingSubject)?;
        self.subject_validator.validate(subject)
    }

    fn validate_conditions(assertion: &Assertion) -> Result<(), FormatViolation> {
        let mut audience_restriction_present = false;

        for condition in assertion.conditions.iter().flat_map(|c| &c.items) {
            match condition {
                Condition::AudienceRestriction(restriction) => {
                    audience_restriction_present = true;
                    if restriction.audiences.is_empty() {
                        return Err(FormatViolation::EmptyAudienceRestriction);
                    }
                }
                Condition::OneTimeUse
                | Condition::ProxyRestriction(_)
                | Condition::Extension { .. } => {}
            }
        }

        if !audience_restriction_present {
            return Err(FormatViolation::MissingAudienceRestriction);
        }

        Ok(())
    }
}
