//! agenda_client - HTTP client and CLI for the agenda contacts API.

pub mod cli;
pub mod client;
pub mod error;
pub mod output;
pub mod seed;

pub use client::AgendaClient;
pub use error::{ClientError, Result};
