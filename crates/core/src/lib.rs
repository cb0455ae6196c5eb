//! agenda_core - functional core for the agenda contact manager.
//!
//! Pure data types, validation and statement helpers shared by the server
//! and the client. Nothing in this crate performs I/O.

pub mod contact;
pub mod storage;
