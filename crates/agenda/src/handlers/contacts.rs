//! Contact CRUD handlers.
//!
//! These handlers use the repository trait object from `AppState` for
//! database access. Request validation lives in `agenda_core::contact`.

use axum::{
    body::Bytes,
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    Json,
};

use agenda_core::contact::{Contact, CreateContactRequest, SearchQuery, UpdateContactRequest};

use crate::{handlers::ApiError, state::AppState};

/// Parses the `{id}` path segment. A non-numeric id cannot name a contact.
fn parse_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse().map_err(|_| ApiError::NotFound)
}

/// Parses a PUT body. An empty body is an empty update, whatever the
/// `Content-Type`.
fn parse_update(body: &[u8]) -> Result<UpdateContactRequest, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(UpdateContactRequest::default());
    }
    serde_json::from_slice(body).map_err(|e| ApiError::InvalidBody(e.to_string()))
}

/// List all contacts ordered by name (GET /api/contatos).
pub async fn list_contacts(State(state): State<AppState>) -> Result<Json<Vec<Contact>>, ApiError> {
    let contacts = state
        .contacts
        .list_contacts()
        .await
        .map_err(ApiError::repository("Failed to list contacts"))?;

    Ok(Json(contacts))
}

/// Search contacts by name, email or phone (GET /api/contatos/search?term=).
pub async fn search_contacts(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<Contact>>, ApiError> {
    let term = query.into_term()?;

    let contacts = state
        .contacts
        .search_contacts(&term)
        .await
        .map_err(ApiError::repository("Failed to search contacts"))?;

    tracing::debug!(term = %term, results = contacts.len(), "Searched contacts");

    Ok(Json(contacts))
}

/// Get a single contact (GET /api/contatos/{id}).
pub async fn get_contact(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Contact>, ApiError> {
    let id = parse_id(&id)?;

    state
        .contacts
        .get_contact(id)
        .await
        .map_err(ApiError::repository("Failed to fetch contact"))?
        .map(Json)
        .ok_or(ApiError::NotFound)
}

/// Create a new contact (POST /api/contatos).
pub async fn create_contact(
    State(state): State<AppState>,
    payload: Result<Json<CreateContactRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Contact>), ApiError> {
    let Json(request) = payload?;
    let new_contact = request.into_new_contact()?;

    let contact = state
        .contacts
        .create_contact(&new_contact)
        .await
        .map_err(ApiError::repository("Failed to create contact"))?;

    tracing::info!(contact_id = %contact.id, name = %contact.name, "Created contact");

    Ok((StatusCode::CREATED, Json(contact)))
}

/// Update any subset of a contact's fields (PUT /api/contatos/{id}).
pub async fn update_contact(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<Contact>, ApiError> {
    let id = parse_id(&id)?;
    let update = parse_update(&body)?.into_update();

    let contact = state
        .contacts
        .update_contact(id, &update)
        .await
        .map_err(ApiError::repository("Failed to update contact"))?
        .ok_or(ApiError::NotFound)?;

    tracing::info!(contact_id = %id, "Updated contact");

    Ok(Json(contact))
}

/// Delete a contact (DELETE /api/contatos/{id}).
pub async fn delete_contact(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;

    let deleted = state
        .contacts
        .delete_contact(id)
        .await
        .map_err(ApiError::repository("Failed to delete contact"))?;

    if !deleted {
        return Err(ApiError::NotFound);
    }

    tracing::info!(contact_id = %id, "Deleted contact");

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("42").unwrap(), 42);
        assert!(matches!(parse_id("abc"), Err(ApiError::NotFound)));
        assert!(matches!(parse_id("1.5"), Err(ApiError::NotFound)));
        assert!(matches!(parse_id(""), Err(ApiError::NotFound)));
    }

    #[test]
    fn test_parse_update_empty_body() {
        for body in ["", "  \n"] {
            let request = parse_update(body.as_bytes()).unwrap();
            assert!(request.into_update().is_empty());
        }
    }

    #[test]
    fn test_parse_update_fields() {
        let request = parse_update(br#"{"name":""}"#).unwrap();

        assert_eq!(request.name.as_deref(), Some(""));
        assert_eq!(request.email, None);
    }

    #[test]
    fn test_parse_update_malformed() {
        assert!(matches!(
            parse_update(b"{name"),
            Err(ApiError::InvalidBody(_))
        ));
        assert!(matches!(
            parse_update(br#"{"name": 5}"#),
            Err(ApiError::InvalidBody(_))
        ));
    }
}
