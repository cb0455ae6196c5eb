//! Storage backend implementations.
//!
//! Concrete implementations of the `ContactRepository` trait defined in
//! `agenda_core::storage`.

pub mod sqlite;

pub use sqlite::{SqliteContactRepository, StorageHandle};
