//! DK-SAML profile error types.
//!
//! A [`FormatViolation`] means the assertion is well-formed SAML 2.0 but does
//! not follow the DK-SAML 2.0 profile. Failures of the generic SAML 2.0
//! checks arrive unchanged as [`ProfileError::Base`].

use dksaml_schema::SamlError;
use thiserror::Error;

/// Result type for profile validation.
pub type ProfileResult<T> = Result<T, ProfileError>;

/// Errors returned by [`crate::AssertionValidator`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileError {
    /// The generic SAML 2.0 validator rejected the assertion.
    #[error(transparent)]
    Base(#[from] SamlError),

    /// The assertion does not conform to the DK-SAML 2.0 profile.
    #[error(transparent)]
    Format(#[from] FormatViolation),
}

impl ProfileError {
    /// Returns the profile violation, if this is one.
    #[must_use]
    pub const fn violation(&self) -> Option<&FormatViolation> {
        match self {
            Self::Format(v) => Some(v),
            Self::Base(_) => None,
        }
    }
}

/// A DK-SAML 2.0 profile violation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatViolation {
    /// The assertion has no `<Issuer>`.
    #[error("Assertion MUST contain an issuer in the DK-SAML 2.0 profile.")]
    MissingIssuer,

    /// Wrong number or mix of statements.
    #[error(
        "The DK-SAML 2.0 profile requires exactly one \"AuthnStatement\" element and one \
         \"AttributeStatement\" element (found {authn} AuthnStatement, {attribute} \
         AttributeStatement, {total} in total)."
    )]
    InvalidStatementSet {
        /// Number of `AuthnStatement` elements.
        authn: usize,
        /// Number of `AttributeStatement` elements.
        attribute: usize,
        /// Number of statements of any kind.
        total: usize,
    },

    /// The assertion has no `<Subject>`.
    #[error("The DK-SAML 2.0 profile requires that a \"Subject\" element is present in the assertion.")]
    MissingSubject,

    /// An `<AudienceRestriction>` lists no audience.
    #[error(
        "The DK-SAML 2.0 profile requires that an \"AudienceRestriction\" element contains the \
         service provider's unique identifier in an \"Audience\" element."
    )]
    EmptyAudienceRestriction,

    /// The conditions contain no `<AudienceRestriction>`.
    #[error("The DK-SAML 2.0 profile requires that an \"AudienceRestriction\" element is present on the assertion.")]
    MissingAudienceRestriction,

    /// The `<Subject>` element has no children.
    #[error(
        "The DK-SAML 2.0 Profile requires at least one \"SubjectConfirmation\" element within \
         the \"Subject\" element."
    )]
    EmptySubject,

    /// No bearer `<SubjectConfirmation>` is present.
    #[error("The DK-SAML 2.0 Profile requires that a bearer \"SubjectConfirmation\" element is present.")]
    MissingBearerConfirmation,

    /// A bearer confirmation has no `<SubjectConfirmationData>`.
    #[error(
        "The DK-SAML 2.0 Profile requires that the bearer \"SubjectConfirmation\" element \
         contains a \"SubjectConfirmationData\" element."
    )]
    MissingConfirmationData,

    /// Bearer confirmation data lacks `Recipient`.
    #[error(
        "The DK-SAML 2.0 Profile requires that the \"SubjectConfirmationData\" element contains \
         the \"Recipient\" attribute."
    )]
    MissingRecipient,

    /// Bearer confirmation data lacks `NotOnOrAfter`.
    #[error(
        "The DK-SAML 2.0 Profile requires that the \"SubjectConfirmationData\" element contains \
         the \"NotOnOrAfter\" attribute."
    )]
    MissingNotOnOrAfter,

    /// Bearer confirmation data carries `NotBefore`.
    #[error(
        "The DK-SAML 2.0 Profile disallows the use of the \"NotBefore\" attribute of the \
         \"SubjectConfirmationData\" element."
    )]
    DisallowedNotBefore,

    /// An `<AuthzDecisionStatement>` is present.
    #[error("The DK-SAML 2.0 profile does not allow the \"AuthzDecisionStatement\" element.")]
    DisallowedAuthzDecisionStatement,

    /// An `<EncryptedAttribute>` appears in an attribute statement.
    #[error("The DK-SAML 2.0 profile does not allow encrypted attributes.")]
    EncryptedAttributeDisallowed,

    /// An attribute statement item is neither plain nor encrypted.
    #[error("Unable to handle attribute of type \"{element}\".")]
    UnsupportedAttributeRepresentation {
        /// Qualified name of the element.
        element: String,
    },

    /// The `<AuthnStatement>` has no usable `SessionIndex`.
    #[error(
        "The DK-SAML 2.0 profile requires that the \"AuthnStatement\" element contains the \
         \"SessionIndex\" attribute."
    )]
    MissingSessionIndex,

    /// A statement extension type the profile does not know.
    #[error("The DK-SAML 2.0 profile does not allow unknown Statement type: \"{type_name}\"")]
    UnknownStatementType {
        /// The statement's `xsi:type`.
        type_name: String,
    },

    /// An attribute name is not an absolute URI.
    #[error("The DK-SAML 2.0 profile requires that an attribute's \"Name\" is an URI (got \"{name}\").")]
    AttributeNameNotUri {
        /// The offending attribute name.
        name: String,
    },

    /// An attribute value is not `xs:string`.
    #[error(
        "The DK-SAML 2.0 profile requires that all attribute values are of type \"xs:string\" \
         (attribute \"{name}\", value {index} is \"{xsi_type}\")."
    )]
    AttributeValueNotString {
        /// Name of the attribute.
        name: String,
        /// Zero-based position of the value.
        index: usize,
        /// The value's declared type.
        xsi_type: String,
    },

    /// Encrypted attributes cannot be validated under this profile.
    #[error("The DK-SAML 2.0 profile does not support the EncryptedAttribute element")]
    EncryptedAttributeUnsupported,
}

impl FormatViolation {
    /// Returns a stable machine-readable code for this violation.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::MissingIssuer => "DKSAML-MISSING-ISSUER",
            Self::InvalidStatementSet { .. } => "DKSAML-INVALID-STATEMENT-SET",
            Self::MissingSubject => "DKSAML-MISSING-SUBJECT",
            Self::EmptyAudienceRestriction => "DKSAML-EMPTY-AUDIENCE-RESTRICTION",
            Self::MissingAudienceRestriction => "DKSAML-MISSING-AUDIENCE-RESTRICTION",
            Self::EmptySubject => "DKSAML-EMPTY-SUBJECT",
            Self::MissingBearerConfirmation => "DKSAML-MISSING-BEARER-CONFIRMATION",
            Self::MissingConfirmationData => "DKSAML-MISSING-CONFIRMATION-DATA",
            Self::MissingRecipient => "DKSAML-MISSING-RECIPIENT",
            Self::MissingNotOnOrAfter => "DKSAML-MISSING-NOT-ON-OR-AFTER",
            Self::DisallowedNotBefore => "DKSAML-DISALLOWED-NOT-BEFORE",
            Self::DisallowedAuthzDecisionStatement => "DKSAML-DISALLOWED-AUTHZ-DECISION-STATEMENT",
            Self::EncryptedAttributeDisallowed => "DKSAML-ENCRYPTED-ATTRIBUTE-DISALLOWED",
            Self::UnsupportedAttributeRepresentation { .. } => {
                "DKSAML-UNSUPPORTED-ATTRIBUTE-REPRESENTATION"
            }
            Self::MissingSessionIndex => "DKSAML-MISSING-SESSION-INDEX",
            Self::UnknownStatementType { .. } => "DKSAML-UNKNOWN-STATEMENT-TYPE",
            Self::AttributeNameNotUri { .. } => "DKSAML-ATTRIBUTE-NAME-NOT-URI",
            Self::AttributeValueNotString { .. } => "DKSAML-ATTRIBUTE-VALUE-NOT-STRING",
            Self::EncryptedAttributeUnsupported => "DKSAML-ENCRYPTED-ATTRIBUTE-UNSUPPORTED",
        }
    }

    /// Returns the SAML element the violation is about.
    #[must_use]
    pub const fn element(&self) -> &'static str {
        match self {
            Self::MissingIssuer => "Issuer",
            Self::InvalidStatementSet { .. } | Self::UnknownStatementType { .. } => "Statement",
            Self::MissingSubject | Self::EmptySubject => "Subject",
            Self::EmptyAudienceRestriction | Self::MissingAudienceRestriction => {
                "AudienceRestriction"
            }
            Self::MissingBearerConfirmation | Self::MissingConfirmationData => {
                "SubjectConfirmation"
            }
            Self::MissingRecipient | Self::MissingNotOnOrAfter | Self::DisallowedNotBefore => {
                "SubjectConfirmationData"
            }
            Self::DisallowedAuthzDecisionStatement => "AuthzDecisionStatement",
            Self::EncryptedAttributeDisallowed | Self::EncryptedAttributeUnsupported => {
                "EncryptedAttribute"
            }
            Self::UnsupportedAttributeRepresentation { .. } => "AttributeStatement",
            Self::MissingSessionIndex => "AuthnStatement",
            Self::AttributeNameNotUri { .. } | Self::AttributeValueNotString { .. } => "Attribute",
        }
    }
}
