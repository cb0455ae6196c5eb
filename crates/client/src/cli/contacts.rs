//! Contact CLI commands.

use clap::{Parser, Subcommand};

/// Contact management commands.
#[derive(Debug, Parser)]
pub struct ContactsCommand {
    #[command(subcommand)]
    pub action: ContactsAction,
}

/// Available contact actions.
#[derive(Debug, Subcommand)]
pub enum ContactsAction {
    /// List all contacts.
    List,
    /// Get contact by ID.
    Get {
        /// Contact ID.
        id: i64,
    },
    /// Search contacts by name, email or phone.
    Search {
        /// Text to look for.
        term: String,
    },
    /// Create a new contact.
    Create {
        /// Contact name.
        #[arg(long)]
        name: String,
        /// Contact email.
        #[arg(long)]
        email: String,
        /// Contact phone.
        #[arg(long)]
        phone: String,
    },
    /// Update a contact.
    Update {
        /// Contact ID.
        id: i64,
        /// New name.
        #[arg(long)]
        name: Option<String>,
        /// New email.
        #[arg(long)]
        email: Option<String>,
        /// New phone.
        #[arg(long)]
        phone: Option<String>,
    },
    /// Delete contact by ID.
    Delete {
        /// Contact ID.
        id: i64,
    },
}
