//! SAML Name ID types.
//!
//! Name identifiers name both the issuer of an assertion and its subject.

use serde::{Deserialize, Serialize};

use super::NameIdFormat;

/// SAML Name ID.
///
/// Used for the `<Issuer>` of an assertion and for `<NameID>` inside a
/// subject or subject confirmation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameId {
    /// The actual identifier value.
    pub value: String,

    /// The format of the name identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// The security or administrative domain that qualifies the name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_qualifier: Option<String>,

    /// The service provider's entity ID that qualifies the name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sp_name_qualifier: Option<String>,

    /// A provider identifier for the SP that was used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sp_provided_id: Option<String>,
}

impl NameId {
    /// Creates a new name ID with no format.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            format: None,
            name_qualifier: None,
            sp_name_qualifier: None,
            sp_provided_id: None,
        }
    }

    /// Creates an entity name ID, the usual shape of an `<Issuer>`.
    #[must_use]
    pub fn entity(value: impl Into<String>) -> Self {
        Self::new(value).with_format(NameIdFormat::Entity)
    }

    /// Creates a persistent name ID.
    #[must_use]
    pub fn persistent(value: impl Into<String>) -> Self {
        Self::new(value).with_format(NameIdFormat::Persistent)
    }

    /// Creates an X.509 subject name ID.
    #[must_use]
    pub fn x509_subject(value: impl Into<String>) -> Self {
        Self::new(value).with_format(NameIdFormat::X509SubjectName)
    }

    /// Sets the format for this name ID.
    #[must_use]
    pub fn with_format(mut self, format: NameIdFormat) -> Self {
        self.format = Some(format.uri().to_string());
        self
    }

    /// Sets a format URI that may not be a known [`NameIdFormat`].
    #[must_use]
    pub fn with_format_uri(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// Sets the name qualifier.
    #[must_use]
    pub fn with_name_qualifier(mut self, qualifier: impl Into<String>) -> Self {
        self.name_qualifier = Some(qualifier.into());
        self
    }

    /// Returns the parsed name ID format, or `None` for unknown format URIs.
    ///
    /// An absent format is reported as [`NameIdFormat::Unspecified`].
    #[must_use]
    pub fn parsed_format(&self) -> Option<NameIdFormat> {
        match self.format.as_deref() {
            None => Some(NameIdFormat::Unspecified),
            Some(uri) => NameIdFormat::from_uri(uri),
        }
    }
}

/// Abstract `<BaseID>` identifier, carried through without interpretation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseId {
    /// The concrete `xsi:type` of the identifier.
    pub xsi_type: String,

    /// The security or administrative domain that qualifies the name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_qualifier: Option<String>,

    /// The service provider's entity ID that qualifies the name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sp_name_qualifier: Option<String>,
}
