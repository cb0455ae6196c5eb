//! API request types for contact operations.
//!
//! These types are shared between the server and client for type-safe API communication.
//! Following the Functional Core pattern, these are pure data types with no I/O.

use serde::{Deserialize, Serialize};

use super::error::ContactError;
use super::types::{ContactUpdate, NewContact};

/// Request payload for creating a new contact.
///
/// Every field is optional on the wire so that a missing field can be
/// reported as a validation error instead of a deserialization failure.
/// Only presence is checked: the values are stored exactly as sent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateContactRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl CreateContactRequest {
    /// Create a request with all three fields set.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
            phone: Some(phone.into()),
        }
    }

    /// Validate presence of every field.
    ///
    /// A field is missing when it is absent, `null` or the empty string.
    /// Whitespace-only values count as present.
    pub fn into_new_contact(self) -> Result<NewContact, ContactError> {
        match (present(self.name), present(self.email), present(self.phone)) {
            (Some(name), Some(email), Some(phone)) => Ok(NewContact { name, email, phone }),
            _ => Err(ContactError::MissingFields),
        }
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl From<NewContact> for CreateContactRequest {
    fn from(contact: NewContact) -> Self {
        Self::new(contact.name, contact.email, contact.phone)
    }
}

/// Request payload for updating a contact. Any subset of fields may be sent;
/// every string that is sent is written, including the empty string.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateContactRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl UpdateContactRequest {
    /// Create an empty update request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the contact name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the contact email.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Set the contact phone.
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn into_update(self) -> ContactUpdate {
        ContactUpdate {
            name: self.name,
            email: self.email,
            phone: self.phone,
        }
    }
}

/// Query string for `GET /api/contatos/search`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub term: Option<String>,
}

impl SearchQuery {
    pub fn new(term: impl Into<String>) -> Self {
        Self {
            term: Some(term.into()),
        }
    }

    /// The search term, rejecting an absent or empty one.
    pub fn into_term(self) -> Result<String, ContactError> {
        self.term
            .filter(|term| !term.is_empty())
            .ok_or(ContactError::MissingSearchTerm)
    }
}
