//! Well-known DK-SAML 2.0 attributes.
//!
//! Names and friendly names of the attributes defined by the DK-SAML 2.0
//! profile, with helpers to build conformant [`SamlAttribute`] values.

use dksaml_schema::SamlAttribute;

/// Attributes defined by the DK-SAML 2.0 profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DkSamlAttribute {
    /// NSIS/OCES assurance level.
    AssuranceLevel,
    /// Common name (`cn`).
    CommonName,
    /// CPR number of the subject.
    CprNumberIdentifier,
    /// Email address.
    Email,
    /// OCES pseudonym.
    OcesPseudonym,
    /// Organizational unit.
    OrganizationUnit,
    /// Postal address.
    PostalAddress,
    /// RID number of an employee certificate.
    RidNumberIdentifier,
    /// Certificate serial number.
    SerialNumber,
    /// DK-SAML specification version.
    SpecVer,
    /// Surname.
    Surname,
    /// Title.
    Title,
    /// User ID.
    Uid,
    /// Base64 encoded user certificate.
    UserCertificate,
}

impl DkSamlAttribute {
    /// All attributes in the catalog.
    pub const ALL: [Self; 14] = [
        Self::AssuranceLevel,
        Self::CommonName,
        Self::CprNumberIdentifier,
        Self::Email,
        Self::OcesPseudonym,
        Self::OrganizationUnit,
        Self::PostalAddress,
        Self::RidNumberIdentifier,
        Self::SerialNumber,
        Self::SpecVer,
        Self::Surname,
        Self::Title,
        Self::Uid,
        Self::UserCertificate,
    ];

    /// Returns the attribute name URI.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::AssuranceLevel => "dk:gov:saml:attribute:AssuranceLevel",
            Self::CommonName => "urn:oid:2.5.4.3",
            Self::CprNumberIdentifier => "dk:gov:saml:attribute:CprNumberIdentifier",
            Self::Email => "urn:oid:0.9.2342.19200300.100.1.3",
            Self::OcesPseudonym => "urn:oid:2.5.4.65",
            Self::OrganizationUnit => "urn:oid:2.5.4.11",
            Self::PostalAddress => "urn:oid:2.5.4.16",
            Self::RidNumberIdentifier => "dk:gov:saml:attribute:RidNumberIdentifier",
            Self::SerialNumber => "urn:oid:2.5.4.5",
            Self::SpecVer => "dk:gov:saml:attribute:SpecVer",
            Self::Surname => "urn:oid:2.5.4.4",
            Self::Title => "urn:oid:2.5.4.12",
            Self::Uid => "urn:oid:0.9.2342.19200300.100.1.1",
            Self::UserCertificate => "urn:oid:1.3.6.1.4.1.1466.115.121.1.8",
        }
    }

    /// Returns the friendly name, if the profile defines one.
    #[must_use]
    pub const fn friendly_name(&self) -> Option<&'static str> {
        match self {
            Self::CommonName => Some("CommonName"),
            Self::Email => Some("email"),
            Self::OcesPseudonym => Some("pseudonym"),
            Self::OrganizationUnit => Some("organizationUnit"),
            Self::PostalAddress => Some("postalAddress"),
            Self::SerialNumber => Some("serialNumber"),
            Self::Surname => Some("surName"),
            Self::Title => Some("title"),
            Self::UserCertificate => Some("userCertificate"),
            Self::AssuranceLevel
            | Self::CprNumberIdentifier
            | Self::RidNumberIdentifier
            | Self::SpecVer
            | Self::Uid => None,
        }
    }

    /// Looks up an attribute by its name URI.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|attr| attr.name() == name)
    }

    /// Creates a URI-named attribute carrying a single string value.
    #[must_use]
    pub fn create(&self, value: impl Into<String>) -> SamlAttribute {
        let attr = SamlAttribute::single(self.name(), value);
        match self.friendly_name() {
            Some(friendly) => attr.with_friendly_name(friendly),
            None => attr,
        }
    }
}
