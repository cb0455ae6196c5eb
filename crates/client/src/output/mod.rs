//! Output formatting for the `agenda-client` binary.

pub mod json;
pub mod pretty;

pub use json::format_json;
