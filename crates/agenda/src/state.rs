//! Shared application state.
//!
//! Handlers receive the repository as a trait object so tests can swap the
//! SQLite backend for an in-memory one.

use std::sync::Arc;

use agenda_core::storage::ContactRepository;

use crate::storage::{SqliteContactRepository, StorageHandle};

/// Application state passed to every request handler.
#[derive(Clone)]
pub struct AppState {
    pub contacts: Arc<dyn ContactRepository>,
}

impl AppState {
    /// Creates state over any repository implementation.
    pub fn new(contacts: Arc<dyn ContactRepository>) -> Self {
        Self { contacts }
    }

    /// Creates state backed by the SQLite repository on `storage`.
    pub fn with_sqlite(storage: Arc<StorageHandle>) -> Self {
        Self::new(Arc::new(SqliteContactRepository::new(storage)))
    }
}
