//! Statement types.
//!
//! SAML defines three statement kinds plus an extension point. The set is
//! closed here: extension statements are kept as [`ExtensionStatement`] with
//! their `xsi:type` so that consumers can report them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::AttributeStatement;

/// A statement carried by an assertion.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Statement {
    /// `<AuthnStatement>`.
    Authn(AuthnStatement),
    /// `<AttributeStatement>`.
    Attribute(AttributeStatement),
    /// `<AuthzDecisionStatement>`.
    AuthzDecision(AuthzDecisionStatement),
    /// `<Statement xsi:type="...">` extension.
    Extension(ExtensionStatement),
}

impl Statement {
    /// Returns the element or `xsi:type` name of this statement.
    #[must_use]
    pub fn type_name(&self) -> &str {
        match self {
            Self::Authn(_) => "AuthnStatement",
            Self::Attribute(_) => "AttributeStatement",
            Self::AuthzDecision(_) => "AuthzDecisionStatement",
            Self::Extension(ext) => &ext.xsi_type,
        }
    }
}

impl From<AuthnStatement> for Statement {
    fn from(stmt: AuthnStatement) -> Self {
        Self::Authn(stmt)
    }
}

impl From<AttributeStatement> for Statement {
    fn from(stmt: AttributeStatement) -> Self {
        Self::Attribute(stmt)
    }
}

impl From<AuthzDecisionStatement> for Statement {
    fn from(stmt: AuthzDecisionStatement) -> Self {
        Self::AuthzDecision(stmt)
    }
}

impl From<ExtensionStatement> for Statement {
    fn from(stmt: ExtensionStatement) -> Self {
        Self::Extension(stmt)
    }
}

/// SAML authentication context class references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AuthnContextClass {
    /// Unspecified authentication context.
    #[default]
    Unspecified,
    /// Password-based authentication.
    Password,
    /// Password protected transport (TLS + password).
    PasswordProtectedTransport,
    /// X.509 certificate authentication.
    X509,
    /// Previous session (SSO).
    PreviousSession,
}

impl AuthnContextClass {
    /// Returns the URI for this authentication context class.
    #[must_use]
    pub const fn uri(&self) -> &'static str {
        match self {
            Self::Unspecified => "urn:oasis:names:tc:SAML:2.0:ac:classes:unspecified",
            Self::Password => "urn:oasis:names:tc:SAML:2.0:ac:classes:Password",
            Self::PasswordProtectedTransport => {
                "urn:oasis:names:tc:SAML:2.0:ac:classes:PasswordProtectedTransport"
            }
            Self::X509 => "urn:oasis:names:tc:SAML:2.0:ac:classes:X509",
            Self::PreviousSession => "urn:oasis:names:tc:SAML:2.0:ac:classes:PreviousSession",
        }
    }
}

/// Authentication statement.
///
/// Describes the act of authentication performed by the subject.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthnStatement {
    /// The time of authentication.
    pub authn_instant: DateTime<Utc>,

    /// The session index (for session management).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_index: Option<String>,

    /// Time at which the session ends.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_not_on_or_after: Option<DateTime<Utc>>,

    /// The authentication context.
    pub authn_context: AuthnContext,

    /// The subject locality information.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject_locality: Option<SubjectLocality>,
}

impl AuthnStatement {
    /// Creates a new authentication statement with a generated session index.
    #[must_use]
    pub fn new(context_class: AuthnContextClass) -> Self {
        Self {
            authn_instant: Utc::now(),
            session_index: Some(format!("_session{}", uuid::Uuid::new_v4())),
            session_not_on_or_after: None,
            authn_context: AuthnContext::class_ref(context_class),
            subject_locality: None,
        }
    }

    /// Sets the session index.
    #[must_use]
    pub fn with_session_index(mut self, session_index: Option<String>) -> Self {
        self.session_index = session_index;
        self
    }
}

/// Authentication context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthnContext {
    /// Authentication context class reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authn_context_class_ref: Option<String>,

    /// Authentication context declaration reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authn_context_decl_ref: Option<String>,

    /// Authenticating authorities.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub authenticating_authorities: Vec<String>,
}

impl AuthnContext {
    /// Creates an authentication context with a class reference.
    #[must_use]
    pub fn class_ref(class: AuthnContextClass) -> Self {
        Self {
            authn_context_class_ref: Some(class.uri().to_string()),
            authn_context_decl_ref: None,
            authenticating_authorities: Vec::new(),
        }
    }
}

/// Subject locality information.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubjectLocality {
    /// IP address of the subject.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// DNS name of the system from which the subject authenticated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dns_name: Option<String>,
}

/// Authorization decision statement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthzDecisionStatement {
    /// The resource the decision applies to.
    pub resource: String,

    /// The decision.
    pub decision: Decision,

    /// Actions the decision covers.
    #[serde(default)]
    pub actions: Vec<Action>,
}

/// Authorization decision outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum Decision {
    /// Access permitted.
    Permit,
    /// Access denied.
    Deny,
    /// No decision could be made.
    Indeterminate,
}

/// An action inside an authorization decision.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Action {
    /// Namespace qualifying the action.
    pub namespace: String,

    /// The action value.
    pub value: String,
}

/// A statement extension with an `xsi:type` this model does not know.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtensionStatement {
    /// The extension's `xsi:type`.
    pub xsi_type: String,
}
