//! Subject and subject confirmation types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{BaseId, ConfirmationMethod, EncryptedElement, NameId};

/// Subject of an assertion.
///
/// Identifies the principal that is the subject of all statements in the
/// assertion, and how a relying party may confirm it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Subject {
    /// Identifier and confirmation elements in document order.
    #[serde(default)]
    pub items: Vec<SubjectItem>,
}

impl Subject {
    /// Creates a subject identified by a name ID.
    #[must_use]
    pub fn new(name_id: NameId) -> Self {
        Self {
            items: vec![SubjectItem::NameId(name_id)],
        }
    }

    /// Appends an item.
    #[must_use]
    pub fn with_item(mut self, item: SubjectItem) -> Self {
        self.items.push(item);
        self
    }

    /// Appends a subject confirmation.
    #[must_use]
    pub fn with_confirmation(self, confirmation: SubjectConfirmation) -> Self {
        self.with_item(SubjectItem::SubjectConfirmation(confirmation))
    }

    /// Iterates over the subject confirmations.
    pub fn confirmations(&self) -> impl Iterator<Item = &SubjectConfirmation> {
        self.items.iter().filter_map(|item| match item {
            SubjectItem::SubjectConfirmation(sc) => Some(sc),
            _ => None,
        })
    }
}

/// An element inside `<Subject>`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SubjectItem {
    /// `<NameID>`.
    NameId(NameId),
    /// `<BaseID>`.
    BaseId(BaseId),
    /// `<EncryptedID>`.
    EncryptedId(EncryptedElement),
    /// `<SubjectConfirmation>`.
    SubjectConfirmation(SubjectConfirmation),
}

impl From<SubjectConfirmation> for SubjectItem {
    fn from(confirmation: SubjectConfirmation) -> Self {
        Self::SubjectConfirmation(confirmation)
    }
}

impl From<NameId> for SubjectItem {
    fn from(name_id: NameId) -> Self {
        Self::NameId(name_id)
    }
}

/// Subject confirmation.
///
/// Information that allows the assertion consumer to confirm the subject.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubjectConfirmation {
    /// The confirmation method URI.
    pub method: String,

    /// Identifier of the expected presenter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_id: Option<NameId>,

    /// Additional confirmation data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject_confirmation_data: Option<SubjectConfirmationData>,
}

impl SubjectConfirmation {
    /// Creates a confirmation with the given method URI and no data.
    #[must_use]
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            name_id: None,
            subject_confirmation_data: None,
        }
    }

    /// Creates a bearer confirmation.
    #[must_use]
    pub fn bearer() -> Self {
        Self::new(ConfirmationMethod::BEARER_URI)
    }

    /// Sets the confirmation data.
    #[must_use]
    pub fn with_data(mut self, data: SubjectConfirmationData) -> Self {
        self.subject_confirmation_data = Some(data);
        self
    }

    /// Returns the parsed confirmation method.
    #[must_use]
    pub fn confirmation_method(&self) -> ConfirmationMethod {
        ConfirmationMethod::from_uri(&self.method)
    }

    /// Returns true if this confirmation uses the bearer method.
    #[must_use]
    pub fn is_bearer(&self) -> bool {
        self.method == ConfirmationMethod::BEARER_URI
    }
}

/// Subject confirmation data.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubjectConfirmationData {
    /// The request ID that this assertion responds to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_response_to: Option<String>,

    /// Time at or after which the subject can no longer be confirmed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not_on_or_after: Option<DateTime<Utc>>,

    /// Time before which the subject cannot be confirmed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not_before: Option<DateTime<Utc>>,

    /// The location to which the assertion can be presented.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient: Option<String>,

    /// IP address of the subject.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl SubjectConfirmationData {
    /// Creates confirmation data for a response to the given request.
    ///
    /// The data expires five minutes from now and has no `NotBefore`.
    #[must_use]
    pub fn for_request(request_id: impl Into<String>, recipient: impl Into<String>) -> Self {
        Self {
            in_response_to: Some(request_id.into()),
            recipient: Some(recipient.into()),
            not_on_or_after: Some(Utc::now() + chrono::Duration::minutes(5)),
            not_before: None,
            address: None,
        }
    }
}
