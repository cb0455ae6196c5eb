use async_trait::async_trait;

use crate::contact::{Contact, ContactUpdate, NewContact};

use super::Result;

/// Repository for contact operations.
///
/// Missing ids are never errors: lookups return `None` and deletes return `false`.
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Lists every contact ordered by name.
    async fn list_contacts(&self) -> Result<Vec<Contact>>;

    /// Gets a contact by its ID.
    async fn get_contact(&self, id: i64) -> Result<Option<Contact>>;

    /// Finds contacts whose name, email or phone contains `term`, ordered by name.
    async fn search_contacts(&self, term: &str) -> Result<Vec<Contact>>;

    /// Inserts a contact and returns the stored row.
    async fn create_contact(&self, contact: &NewContact) -> Result<Contact>;

    /// Applies a partial update and returns the stored row.
    ///
    /// An empty update performs no write and returns the current row.
    async fn update_contact(&self, id: i64, update: &ContactUpdate) -> Result<Option<Contact>>;

    /// Deletes a contact, returning whether a row was removed.
    async fn delete_contact(&self, id: i64) -> Result<bool>;

    /// Checks that the underlying store is reachable.
    async fn ping(&self) -> Result<()>;
}
