//! Encrypted element types.
//!
//! Encrypted content is opaque to this model; only the declared type and the
//! ciphertext are kept.

use serde::{Deserialize, Serialize};

use super::XMLENC_NS;

/// An `<EncryptedAttribute>`, `<EncryptedID>` or `<EncryptedAssertion>`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncryptedElement {
    /// The encrypted payload.
    pub encrypted_data: EncryptedData,

    /// Wrapped keys for the payload.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub encrypted_keys: Vec<EncryptedKey>,
}

impl EncryptedElement {
    /// Wraps encrypted data with no separate key.
    #[must_use]
    pub const fn new(encrypted_data: EncryptedData) -> Self {
        Self {
            encrypted_data,
            encrypted_keys: Vec::new(),
        }
    }
}

/// `<xenc:EncryptedData>`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EncryptedData {
    /// The `Type` attribute, e.g. `http://www.w3.org/2001/04/xmlenc#Element`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_uri: Option<String>,

    /// Base64 cipher value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cipher_value: Option<String>,
}

impl EncryptedData {
    /// Creates encrypted data declared as an encrypted XML element.
    #[must_use]
    pub fn element() -> Self {
        Self {
            type_uri: Some(format!("{XMLENC_NS}Element")),
            cipher_value: None,
        }
    }
}

/// `<xenc:EncryptedKey>`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EncryptedKey {
    /// Recipient the key is wrapped for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient: Option<String>,

    /// Base64 cipher value of the wrapped key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cipher_value: Option<String>,
}
