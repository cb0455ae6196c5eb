//! SQLite repository implementation.
//!
//! Implements `ContactRepository` from `agenda_core::storage` on top of a
//! [`StorageHandle`]. Every operation is an independent statement; there are
//! no transactions, so create/update re-reads are not atomic with their writes.

use std::sync::Arc;

use async_trait::async_trait;
use rusqlite::types::Value;

use agenda_core::contact::{like_pattern, Contact, ContactUpdate, NewContact};
use agenda_core::storage::{ContactRepository, RepositoryError, Result};

use super::conversions::row_to_contact;
use super::handle::StorageHandle;
use super::schema;

/// SQLite-based contact repository.
pub struct SqliteContactRepository {
    storage: Arc<StorageHandle>,
}

impl SqliteContactRepository {
    /// Creates a repository over an already-initialized storage handle.
    pub fn new(storage: Arc<StorageHandle>) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl ContactRepository for SqliteContactRepository {
    async fn list_contacts(&self) -> Result<Vec<Contact>> {
        self.storage
            .query_many(schema::SELECT_ALL_CONTACTS, Vec::new(), row_to_contact)
            .await
    }

    async fn get_contact(&self, id: i64) -> Result<Option<Contact>> {
        self.storage
            .query_one(
                schema::SELECT_CONTACT_BY_ID,
                vec![Value::Integer(id)],
                row_to_contact,
            )
            .await
    }

    async fn search_contacts(&self, term: &str) -> Result<Vec<Contact>> {
        self.storage
            .query_many(
                schema::SEARCH_CONTACTS,
                vec![Value::Text(like_pattern(term))],
                row_to_contact,
            )
            .await
    }

    async fn create_contact(&self, contact: &NewContact) -> Result<Contact> {
        let outcome = self
            .storage
            .execute(
                schema::INSERT_CONTACT,
                vec![
                    Value::Text(contact.name.clone()),
                    Value::Text(contact.email.clone()),
                    Value::Text(contact.phone.clone()),
                ],
            )
            .await?;

        // The row can vanish between insert and re-read if a concurrent delete wins.
        self.get_contact(outcome.generated_id)
            .await?
            .ok_or_else(|| RepositoryError::NotFound {
                entity_type: "Contact",
                id: outcome.generated_id.to_string(),
            })
    }

    async fn update_contact(&self, id: i64, update: &ContactUpdate) -> Result<Option<Contact>> {
        let Some((sql, params)) = schema::build_update(id, update) else {
            return self.get_contact(id).await;
        };

        let outcome = self.storage.execute(sql, params).await?;
        if outcome.rows_affected == 0 {
            return Ok(None);
        }

        self.get_contact(id).await
    }

    async fn delete_contact(&self, id: i64) -> Result<bool> {
        let outcome = self
            .storage
            .execute(schema::DELETE_CONTACT, vec![Value::Integer(id)])
            .await?;

        Ok(outcome.rows_affected > 0)
    }

    async fn ping(&self) -> Result<()> {
        self.storage.ping().await
    }
}
