//! Statement validation.

use dksaml_schema::{AttributeStatement, AttributeStatementItem, AuthnStatement, Statement};

use super::subject_confirmation::is_required_string_present;
use super::AttributeValidator;
use crate::error::FormatViolation;

/// Validates individual statements.
///
/// Statement cardinality is an assertion-level rule and is checked by
/// [`super::AssertionValidator`].
#[derive(Debug, Clone, Default)]
pub struct StatementValidator {
    attribute_validator: AttributeValidator,
}

impl StatementValidator {
    /// Creates a validator.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            attribute_validator: AttributeValidator::new(),
        }
    }

    /// Validates one statement according to its kind.
    pub fn validate(&self, statement: &Statement) -> Result<(), FormatViolation> {
        match statement {
            Statement::AuthzDecision(_) => Err(FormatViolation::DisallowedAuthzDecisionStatement),
            Statement::Attribute(stmt) => self.validate_attribute_statement(stmt),
            Statement::Authn(stmt) => Self::validate_authn_statement(stmt),
            Statement::Extension(ext) => Err(FormatViolation::UnknownStatementType {
                type_name: ext.xsi_type.clone(),
            }),
        }
    }

    fn validate_authn_statement(statement: &AuthnStatement) -> Result<(), FormatViolation> {
        if !is_required_string_present(statement.session_index.as_deref()) {
            return Err(FormatViolation::MissingSessionIndex);
        }
        Ok(())
    }

    fn validate_attribute_statement(
        &self,
        statement: &AttributeStatement,
    ) -> Result<(), FormatViolation> {
        for item in &statement.items {
            match item {
                AttributeStatementItem::EncryptedAttribute(_) => {
                    return Err(FormatViolation::EncryptedAttributeDisallowed);
                }
                AttributeStatementItem::Unrecognized { element } => {
                    return Err(FormatViolation::UnsupportedAttributeRepresentation {
                        element: element.clone(),
                    });
                }
                AttributeStatementItem::Attribute(attribute) => {
                    self.attribute_validator.validate(attribute)?;
                }
            }
        }
        Ok(())
    }
}
