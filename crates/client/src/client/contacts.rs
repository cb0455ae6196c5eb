//! Contact API operations.

use agenda_core::contact::{Contact, CreateContactRequest, UpdateContactRequest};

use super::AgendaClient;
use crate::error::Result;

impl AgendaClient {
    /// List all contacts, ordered by name.
    pub async fn list_contacts(&self) -> Result<Vec<Contact>> {
        let response = self.client.get(self.url("/api/contatos")).send().await?;
        self.handle_response(response).await
    }

    /// Search contacts by name, email or phone.
    pub async fn search_contacts(&self, term: &str) -> Result<Vec<Contact>> {
        let response = self
            .client
            .get(self.url("/api/contatos/search"))
            .query(&[("term", term)])
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Get contact by ID.
    pub async fn get_contact(&self, id: i64) -> Result<Contact> {
        let response = self
            .client
            .get(self.url(&format!("/api/contatos/{id}")))
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Create a new contact.
    pub async fn create_contact(&self, req: &CreateContactRequest) -> Result<Contact> {
        let response = self
            .client
            .post(self.url("/api/contatos"))
            .json(req)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Update any subset of a contact's fields.
    pub async fn update_contact(&self, id: i64, req: &UpdateContactRequest) -> Result<Contact> {
        let response = self
            .client
            .put(self.url(&format!("/api/contatos/{id}")))
            .json(req)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Delete contact by ID.
    pub async fn delete_contact(&self, id: i64) -> Result<()> {
        let response = self
            .client
            .delete(self.url(&format!("/api/contatos/{id}")))
            .send()
            .await?;
        self.handle_delete_response(response).await
    }
}
