//! Health check operations.

use serde::{Deserialize, Serialize};

use super::AgendaClient;
use crate::error::Result;

/// Body of `/health` and `/readyz`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

impl AgendaClient {
    /// Liveness check.
    pub async fn health(&self) -> Result<HealthStatus> {
        let response = self.client.get(self.url("/health")).send().await?;
        self.handle_response(response).await
    }

    /// Readiness check; fails with a 503 server error when the database is unreachable.
    pub async fn ready(&self) -> Result<HealthStatus> {
        let response = self.client.get(self.url("/readyz")).send().await?;
        self.handle_response(response).await
    }
}
