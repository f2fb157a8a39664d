//! SAML Assertion types.
//!
//! Assertions contain statements about a subject made by an issuer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{AttributeStatement, AuthnStatement, NameId, Statement, Subject, SAML_VERSION};

/// SAML Assertion.
///
/// A package of information that supplies one or more statements made
/// by a SAML authority (the issuer).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assertion {
    /// Unique identifier for this assertion.
    pub id: String,

    /// Version of the SAML protocol (always "2.0").
    #[serde(default = "default_version")]
    pub version: String,

    /// Timestamp when this assertion was issued.
    pub issue_instant: DateTime<Utc>,

    /// The identity provider that issued this assertion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuer: Option<NameId>,

    /// The subject of this assertion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<Subject>,

    /// Conditions that must be evaluated for the assertion to be valid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditions: Option<Conditions>,

    /// Statements in document order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub statements: Vec<Statement>,
}

fn default_version() -> String {
    SAML_VERSION.to_string()
}

impl Assertion {
    /// Creates a new assertion with a generated ID.
    #[must_use]
    pub fn new(issuer: NameId) -> Self {
        Self {
            id: format!("_id{}", uuid::Uuid::new_v4()),
            version: default_version(),
            issue_instant: Utc::now(),
            issuer: Some(issuer),
            subject: None,
            conditions: None,
            statements: Vec::new(),
        }
    }

    /// Creates a new assertion with a custom ID.
    #[must_use]
    pub fn with_id(id: impl Into<String>, issuer: NameId) -> Self {
        Self {
            id: id.into(),
            ..Self::new(issuer)
        }
    }

    /// Sets the subject.
    #[must_use]
    pub fn with_subject(mut self, subject: Subject) -> Self {
        self.subject = Some(subject);
        self
    }

    /// Sets the conditions.
    #[must_use]
    pub fn with_conditions(mut self, conditions: Conditions) -> Self {
        self.conditions = Some(conditions);
        self
    }

    /// Appends a statement.
    #[must_use]
    pub fn with_statement(mut self, statement: impl Into<Statement>) -> Self {
        self.statements.push(statement.into());
        self
    }

    /// Iterates over the authentication statements.
    pub fn authn_statements(&self) -> impl Iterator<Item = &AuthnStatement> {
        self.statements.iter().filter_map(|s| match s {
            Statement::Authn(stmt) => Some(stmt),
            _ => None,
        })
    }

    /// Iterates over the attribute statements.
    pub fn attribute_statements(&self) -> impl Iterator<Item = &AttributeStatement> {
        self.statements.iter().filter_map(|s| match s {
            Statement::Attribute(stmt) => Some(stmt),
            _ => None,
        })
    }
}

/// Conditions for assertion validity.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Conditions {
    /// Time before which the assertion is not valid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not_before: Option<DateTime<Utc>>,

    /// Time at or after which the assertion is not valid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not_on_or_after: Option<DateTime<Utc>>,

    /// Condition elements in document order.
    #[serde(default)]
    pub items: Vec<Condition>,
}

impl Conditions {
    /// Creates conditions valid from now for the given number of minutes.
    #[must_use]
    pub fn with_validity(validity_minutes: i64) -> Self {
        let now = Utc::now();
        Self {
            not_before: Some(now),
            not_on_or_after: Some(now + chrono::Duration::minutes(validity_minutes)),
            items: Vec::new(),
        }
    }

    /// Adds an audience restriction with a single audience.
    #[must_use]
    pub fn with_audience(self, audience: impl Into<String>) -> Self {
        self.with_condition(Condition::AudienceRestriction(AudienceRestriction {
            audiences: vec![audience.into()],
        }))
    }

    /// Appends a condition.
    #[must_use]
    pub fn with_condition(mut self, condition: Condition) -> Self {
        self.items.push(condition);
        self
    }

    /// Iterates over the audience restrictions.
    pub fn audience_restrictions(&self) -> impl Iterator<Item = &AudienceRestriction> {
        self.items.iter().filter_map(|c| match c {
            Condition::AudienceRestriction(ar) => Some(ar),
            _ => None,
        })
    }
}

/// A single condition element.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Condition {
    /// `<AudienceRestriction>`.
    AudienceRestriction(AudienceRestriction),
    /// `<OneTimeUse>`.
    OneTimeUse,
    /// `<ProxyRestriction>`.
    ProxyRestriction(ProxyRestriction),
    /// `<Condition xsi:type="...">` extension.
    Extension {
        /// The extension's `xsi:type`.
        xsi_type: String,
    },
}

/// Audience restriction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AudienceRestriction {
    /// List of valid audiences.
    #[serde(default)]
    pub audiences: Vec<String>,
}

impl AudienceRestriction {
    /// Creates a restriction for the given audiences.
    #[must_use]
    pub fn new<I, S>(audiences: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            audiences: audiences.into_iter().map(Into::into).collect(),
        }
    }
}

/// Proxy restriction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProxyRestriction {
    /// Maximum number of proxies allowed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,

    /// List of allowed proxy audiences.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub audiences: Vec<String>,
}
