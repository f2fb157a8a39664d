//! SAML 2.0 constants and URIs.
//!
//! The XML Encryption namespace, name identifier formats, subject
//! confirmation methods and attribute name formats used by the assertion
//! model.

/// XML Encryption namespace URI.
pub const XMLENC_NS: &str = "http://www.w3.org/2001/04/xmlenc#";

/// SAML protocol version handled by this crate.
pub const SAML_VERSION: &str = "2.0";

// ============================================================================
// Name ID Formats
// ============================================================================

/// SAML Name ID formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NameIdFormat {
    /// Unspecified name ID format.
    #[default]
    Unspecified,
    /// Email address format.
    Email,
    /// X.509 subject name format.
    X509SubjectName,
    /// Entity identifier format.
    Entity,
    /// Persistent identifier format.
    Persistent,
    /// Transient identifier format.
    Transient,
}

impl NameIdFormat {
    /// Returns the URI for this name ID format.
    #[must_use]
    pub const fn uri(&self) -> &'static str {
        match self {
            Self::Unspecified => "urn:oasis:names:tc:SAML:1.1:nameid-format:unspecified",
            Self::Email => "urn:oasis:names:tc:SAML:1.1:nameid-format:emailAddress",
            Self::X509SubjectName => "urn:oasis:names:tc:SAML:1.1:nameid-format:X509SubjectName",
            Self::Entity => "urn:oasis:names:tc:SAML:2.0:nameid-format:entity",
            Self::Persistent => "urn:oasis:names:tc:SAML:2.0:nameid-format:persistent",
            Self::Transient => "urn:oasis:names:tc:SAML:2.0:nameid-format:transient",
        }
    }

    /// Parses a name ID format from its URI.
    #[must_use]
    pub fn from_uri(uri: &str) -> Option<Self> {
        match uri {
            "urn:oasis:names:tc:SAML:1.1:nameid-format:unspecified" => Some(Self::Unspecified),
            "urn:oasis:names:tc:SAML:1.1:nameid-format:emailAddress" => Some(Self::Email),
            "urn:oasis:names:tc:SAML:1.1:nameid-format:X509SubjectName" => {
                Some(Self::X509SubjectName)
            }
            "urn:oasis:names:tc:SAML:2.0:nameid-format:entity" => Some(Self::Entity),
            "urn:oasis:names:tc:SAML:2.0:nameid-format:persistent" => Some(Self::Persistent),
            "urn:oasis:names:tc:SAML:2.0:nameid-format:transient" => Some(Self::Transient),
            _ => None,
        }
    }
}

// ============================================================================
// Subject Confirmation Methods
// ============================================================================

/// Subject confirmation methods.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ConfirmationMethod {
    /// Whoever presents the assertion is the subject.
    Bearer,
    /// The presenter proves possession of a key.
    HolderOfKey,
    /// An intermediary vouches for the subject.
    SenderVouches,
    /// Any other method URI.
    Other(String),
}

impl ConfirmationMethod {
    /// Bearer confirmation method URI.
    pub const BEARER_URI: &'static str = "urn:oasis:names:tc:SAML:2.0:cm:bearer";

    /// Holder of key confirmation method URI.
    pub const HOLDER_OF_KEY_URI: &'static str = "urn:oasis:names:tc:SAML:2.0:cm:holder-of-key";

    /// Sender vouches confirmation method URI.
    pub const SENDER_VOUCHES_URI: &'static str = "urn:oasis:names:tc:SAML:2.0:cm:sender-vouches";

    /// Returns the URI for this confirmation method.
    #[must_use]
    pub fn uri(&self) -> &str {
        match self {
            Self::Bearer => Self::BEARER_URI,
            Self::HolderOfKey => Self::HOLDER_OF_KEY_URI,
            Self::SenderVouches => Self::SENDER_VOUCHES_URI,
            Self::Other(uri) => uri,
        }
    }

    /// Parses a confirmation method from its URI.
    #[must_use]
    pub fn from_uri(uri: &str) -> Self {
        match uri {
            Self::BEARER_URI => Self::Bearer,
            Self::HOLDER_OF_KEY_URI => Self::HolderOfKey,
            Self::SENDER_VOUCHES_URI => Self::SenderVouches,
            other => Self::Other(other.to_string()),
        }
    }

    /// Returns true for the bearer method.
    #[must_use]
    pub const fn is_bearer(&self) -> bool {
        matches!(self, Self::Bearer)
    }
}

// ============================================================================
// Attribute Name Formats
// ============================================================================

/// Attribute name formats.
pub mod attribute_name_formats {
    /// URI name format.
    pub const URI: &str = "urn:oasis:names:tc:SAML:2.0:attrname-format:uri";

    /// Basic name format.
    pub const BASIC: &str = "urn:oasis:names:tc:SAML:2.0:attrname-format:basic";

    /// Unspecified name format.
    pub const UNSPECIFIED: &str = "urn:oasis:names:tc:SAML:2.0:attrname-format:unspecified";
}
