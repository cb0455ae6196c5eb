//! Storage handle over a single SQLite connection.
//!
//! Exposes three parameterized primitives (`execute`, `query_one`,
//! `query_many`). Values are always bound positionally; SQL text is never
//! built from user input. `tokio-rusqlite` runs every call on one background
//! thread, so statements are serialized.

use std::path::Path;

use rusqlite::{params_from_iter, types::Value, OptionalExtension, Row};
use tokio_rusqlite::Connection;

use agenda_core::storage::{RepositoryError, Result};

use super::error::map_tokio_rusqlite_error;
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// Maps a result row to a value.
pub type RowMapper<T> = fn(&Row<'_>) -> rusqlite::Result<T>;

/// Result of a mutating statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecOutcome {
    /// Rowid of the last inserted row on this connection.
    pub generated_id: i64,
    pub rows_affected: usize,
}

/// Owns the connection to the embedded database.
pub struct StorageHandle {
    conn: Connection,
}

impl StorageHandle {
    /// Opens a file-based database, creating the file and its parent
    /// directory if they don't exist.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                RepositoryError::ConnectionFailed(format!(
                    "Cannot create directory {}: {e}",
                    parent.display()
                ))
            })?;
        }

        let conn = Connection::open(&path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        tracing::debug!(path = %path.display(), "Opened SQLite database");

        Ok(Self { conn })
    }

    /// Opens a transient in-memory database.
    ///
    /// Data is lost when the handle is dropped.
    pub async fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Ok(Self { conn })
    }

    /// Creates the contacts table if it does not exist. Safe to run on every startup.
    pub async fn init_schema(&self) -> Result<()> {
        self.conn
            .call(|conn| conn.execute_batch(schema::CREATE_TABLES).map_err(wrap_err))
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    /// Runs a mutating statement.
    pub async fn execute(&self, sql: impl Into<String>, params: Vec<Value>) -> Result<ExecOutcome> {
        let sql = sql.into();

        self.conn
            .call(move |conn| {
                let rows_affected = conn
                    .execute(&sql, params_from_iter(params.iter()))
                    .map_err(wrap_err)?;
                Ok(ExecOutcome {
                    generated_id: conn.last_insert_rowid(),
                    rows_affected,
                })
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    /// Fetches at most one row.
    pub async fn query_one<T>(
        &self,
        sql: impl Into<String>,
        params: Vec<Value>,
        map_row: RowMapper<T>,
    ) -> Result<Option<T>>
    where
        T: Send + 'static,
    {
        let sql = sql.into();

        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(&sql).map_err(wrap_err)?;
                let row = stmt
                    .query_row(params_from_iter(params.iter()), map_row)
                    .optional()
                    .map_err(wrap_err)?;
                Ok(row)
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    /// Fetches every matching row.
    pub async fn query_many<T>(
        &self,
        sql: impl Into<String>,
        params: Vec<Value>,
        map_row: RowMapper<T>,
    ) -> Result<Vec<T>>
    where
        T: Send + 'static,
    {
        let sql = sql.into();

        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(&sql).map_err(wrap_err)?;
                let rows = stmt
                    .query_map(params_from_iter(params.iter()), map_row)
                    .map_err(wrap_err)?;

                let mut items = Vec::new();
                for row_result in rows {
                    items.push(row_result.map_err(wrap_err)?);
                }
                Ok(items)
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    /// Round-trips a trivial query to check the connection.
    pub async fn ping(&self) -> Result<()> {
        self.query_one(schema::PING, Vec::new(), |row| row.get::<_, i64>(0))
            .await
            .map(|_| ())
    }
}
