//! HTTP client for the agenda API.

pub mod contacts;
pub mod health;

use serde::de::DeserializeOwned;

use crate::error::{ClientError, Result};

/// Default server URL when neither `--base-url` nor `AGENDA_URL` is set.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3001";

/// HTTP client for the agenda API.
#[derive(Debug, Clone)]
pub struct AgendaClient {
    client: reqwest::Client,
    base_url: String,
}

impl AgendaClient {
    /// Create a new client with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a URL for an endpoint.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Decode a success body or turn the response into an error.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        if response.status().is_success() {
            response.json().await.map_err(ClientError::from)
        } else {
            Err(error_from_response(response).await)
        }
    }

    /// Handle delete responses (no body expected).
    async fn handle_delete_response(&self, response: reqwest::Response) -> Result<()> {
        if response.status().is_success() {
            Ok(())
        } else {
            Err(error_from_response(response).await)
        }
    }
}

/// Build a `ClientError` from a non-success response.
async fn error_from_response(response: reqwest::Response) -> ClientError {
    let status = response.status().as_u16();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    let message = error_message(&body);

    if status == 404 {
        ClientError::NotFound { resource: message }
    } else {
        ClientError::ServerError { status, message }
    }
}

/// Extract the `error` field of a JSON error body, falling back to the raw text.
fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| value.get("error")?.as_str().map(str::to_string))
        .unwrap_or_else(|| body.to_string())
}
