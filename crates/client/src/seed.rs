//! Demo data seeding through the HTTP API.

use agenda_core::contact::{demo_contacts, Contact, CreateContactRequest};

use crate::client::AgendaClient;
use crate::error::Result;

/// Create every demo contact, calling `progress` after each one.
///
/// Stops at the first failure; contacts created before it are kept.
pub async fn seed_contacts(
    client: &AgendaClient,
    mut progress: impl FnMut(usize, usize, &Contact),
) -> Result<Vec<Contact>> {
    let contacts = demo_contacts();
    let total = contacts.len();
    let mut created = Vec::with_capacity(total);

    for (i, contact) in contacts.into_iter().enumerate() {
        let contact = client
            .create_contact(&CreateContactRequest::from(contact))
            .await?;
        progress(i + 1, total, &contact);
        created.push(contact);
    }

    Ok(created)
}
