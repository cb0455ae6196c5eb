//! CLI command definitions.

pub mod contacts;
pub mod health;

use clap::{Parser, Subcommand, ValueEnum};

use crate::client::DEFAULT_BASE_URL;

/// CLI client for the agenda contacts API.
#[derive(Debug, Parser)]
#[command(name = "agenda-client")]
#[command(about = "CLI client for the agenda contacts API", long_about = None)]
pub struct Cli {
    /// Server base URL.
    #[arg(long, env = "AGENDA_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Contact management.
    Contacts(contacts::ContactsCommand),
    /// Server health checks.
    Health(health::HealthCommand),
    /// Create a fixed set of demo contacts.
    Seed,
}

#[cfg(test)]
mod tests {
    use super::*;
    use contacts::ContactsAction;

    #[test]
    fn test_parse_search() {
        let cli = Cli::try_parse_from([
            "agenda-client",
            "--base-url",
            "http://example.test",
            "--format",
            "json",
            "contacts",
            "search",
            "João",
        ])
        .unwrap();

        assert_eq!(cli.base_url, "http://example.test");
        assert_eq!(cli.format, OutputFormat::Json);
        match cli.command {
            Commands::Contacts(cmd) => {
                assert!(matches!(cmd.action, ContactsAction::Search { term } if term == "João"))
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_update_subset() {
        let cli = Cli::try_parse_from([
            "agenda-client",
            "contacts",
            "update",
            "7",
            "--phone",
            "555",
        ])
        .unwrap();

        match cli.command {
            Commands::Contacts(cmd) => match cmd.action {
                ContactsAction::Update {
                    id,
                    name,
                    email,
                    phone,
                } => {
                    assert_eq!(id, 7);
                    assert_eq!(name, None);
                    assert_eq!(email, None);
                    assert_eq!(phone.as_deref(), Some("555"));
                }
                other => panic!("unexpected action: {other:?}"),
            },
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_create_requires_all_fields() {
        let result = Cli::try_parse_from([
            "agenda-client",
            "contacts",
            "create",
            "--name",
            "Ana",
        ]);

        assert!(result.is_err());
    }

    #[test]
    fn test_parse_seed() {
        let cli = Cli::try_parse_from(["agenda-client", "--quiet", "seed"]).unwrap();

        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Seed));
    }
}
