//! Attribute statement types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{attribute_name_formats, EncryptedElement};

/// Attribute statement.
///
/// Contains attributes about the subject, in plain or encrypted form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AttributeStatement {
    /// Attribute elements in document order.
    #[serde(default)]
    pub items: Vec<AttributeStatementItem>,
}

impl AttributeStatement {
    /// Creates a new empty attribute statement.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Adds a plain attribute.
    #[must_use]
    pub fn with_attribute(self, attr: SamlAttribute) -> Self {
        self.with_item(AttributeStatementItem::Attribute(attr))
    }

    /// Adds an item of any kind.
    #[must_use]
    pub fn with_item(mut self, item: AttributeStatementItem) -> Self {
        self.items.push(item);
        self
    }

    /// Iterates over the plain attributes, skipping encrypted ones.
    pub fn attributes(&self) -> impl Iterator<Item = &SamlAttribute> {
        self.items.iter().filter_map(|item| match item {
            AttributeStatementItem::Attribute(attr) => Some(attr),
            _ => None,
        })
    }

    /// Finds a plain attribute by name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&SamlAttribute> {
        self.attributes().find(|attr| attr.name == name)
    }
}

/// An element inside `<AttributeStatement>`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AttributeStatementItem {
    /// `<Attribute>`.
    Attribute(SamlAttribute),
    /// `<EncryptedAttribute>`.
    EncryptedAttribute(EncryptedElement),
    /// An element the deserializer could not map to either form.
    Unrecognized {
        /// Qualified name of the element.
        element: String,
    },
}

impl From<SamlAttribute> for AttributeStatementItem {
    fn from(attr: SamlAttribute) -> Self {
        Self::Attribute(attr)
    }
}

/// SAML Attribute.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SamlAttribute {
    /// The attribute name (typically a URI).
    pub name: String,

    /// The format of the attribute name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_format: Option<String>,

    /// A human-readable name for the attribute.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub friendly_name: Option<String>,

    /// The attribute values, or `None` when the element had no
    /// `<AttributeValue>` children.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<AttributeValue>>,
}

impl SamlAttribute {
    /// Creates an attribute with no values.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            name_format: None,
            friendly_name: None,
            values: None,
        }
    }

    /// Creates a URI-named attribute with a single string value.
    #[must_use]
    pub fn single(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(name)
            .with_format(attribute_name_formats::URI)
            .with_values(vec![AttributeValue::String(value.into())])
    }

    /// Sets the friendly name.
    #[must_use]
    pub fn with_friendly_name(mut self, name: impl Into<String>) -> Self {
        self.friendly_name = Some(name.into());
        self
    }

    /// Sets the name format.
    #[must_use]
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.name_format = Some(format.into());
        self
    }

    /// Sets the values.
    #[must_use]
    pub fn with_values(mut self, values: Vec<AttributeValue>) -> Self {
        self.values = Some(values);
        self
    }

    /// Returns the string values, skipping values of other types.
    pub fn string_values(&self) -> impl Iterator<Item = &str> {
        self.values
            .iter()
            .flatten()
            .filter_map(AttributeValue::as_str)
    }
}

/// A typed `<AttributeValue>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "xsi_type", content = "value", rename_all = "snake_case")]
pub enum AttributeValue {
    /// `xs:string`.
    String(String),
    /// `xs:integer`.
    Integer(i64),
    /// `xs:boolean`.
    Boolean(bool),
    /// `xs:dateTime`.
    DateTime(DateTime<Utc>),
    /// `xs:base64Binary`, decoded.
    Base64Binary(Vec<u8>),
    /// Any other `xsi:type`, with its raw text content.
    Other {
        /// The declared `xsi:type`.
        xsi_type: String,
        /// Raw text content.
        content: String,
    },
}

impl AttributeValue {
    /// Returns the `xsi:type` this value was declared with.
    #[must_use]
    pub fn xsi_type(&self) -> &str {
        match self {
            Self::String(_) => "xs:string",
            Self::Integer(_) => "xs:integer",
            Self::Boolean(_) => "xs:boolean",
            Self::DateTime(_) => "xs:dateTime",
            Self::Base64Binary(_) => "xs:base64Binary",
            Self::Other { xsi_type, .. } => xsi_type,
        }
    }

    /// Returns the string content if this is an `xs:string` value.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}
