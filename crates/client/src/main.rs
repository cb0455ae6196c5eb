//! agenda-client CLI entry point.

use agenda_client::cli::{Cli, Commands, OutputFormat};
use agenda_client::client::AgendaClient;
use agenda_client::output::{format_json, pretty};
use agenda_client::seed::seed_contacts;
use agenda_client::ClientError;
use agenda_core::contact::{CreateContactRequest, UpdateContactRequest};
use clap::Parser;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = AgendaClient::new(&cli.base_url);

    match cli.command {
        Commands::Contacts(contacts_cmd) => {
            use agenda_client::cli::contacts::ContactsAction;
            match contacts_cmd.action {
                ContactsAction::List => {
                    let contacts = client.list_contacts().await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_json(&contacts)),
                        OutputFormat::Pretty => println!("{}", pretty::format_contacts(&contacts)),
                    }
                }
                ContactsAction::Get { id } => {
                    let contact = client.get_contact(id).await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_json(&contact)),
                        OutputFormat::Pretty => println!("{}", pretty::format_contact(&contact)),
                    }
                }
                ContactsAction::Search { term } => {
                    let contacts = client.search_contacts(&term).await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_json(&contacts)),
                        OutputFormat::Pretty => println!("{}", pretty::format_contacts(&contacts)),
                    }
                }
                ContactsAction::Create { name, email, phone } => {
                    let contact = client
                        .create_contact(&CreateContactRequest::new(name, email, phone))
                        .await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_json(&contact)),
                        OutputFormat::Pretty => {
                            println!("Created:\n{}", pretty::format_contact(&contact))
                        }
                    }
                }
                ContactsAction::Update {
                    id,
                    name,
                    email,
                    phone,
                } => {
                    if name.is_none() && email.is_none() && phone.is_none() {
                        return Err(ClientError::InvalidInput(
                            "pass at least one of --name, --email or --phone".to_string(),
                        )
                        .into());
                    }
                    let request = UpdateContactRequest { name, email, phone };
                    let contact = client.update_contact(id, &request).await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_json(&contact)),
                        OutputFormat::Pretty => {
                            println!("Updated:\n{}", pretty::format_contact(&contact))
                        }
                    }
                }
                ContactsAction::Delete { id } => {
                    client.delete_contact(id).await?;
                    if !cli.quiet {
                        println!("Deleted contact {}", id);
                    }
                }
            }
        }
        Commands::Health(health_cmd) => {
            use agenda_client::cli::health::HealthAction;
            let health = match health_cmd.action {
                HealthAction::Live => client.health().await?,
                HealthAction::Ready => client.ready().await?,
            };
            match cli.format {
                OutputFormat::Json => println!("{}", format_json(&health)),
                OutputFormat::Pretty => println!("Status: {}", health.status),
            }
        }
        Commands::Seed => {
            if !cli.quiet {
                println!("Seeding demo contacts into {}...", client.base_url());
            }

            let quiet = cli.quiet;
            let created = seed_contacts(&client, |i, total, contact| {
                if !quiet {
                    println!("  [{i}/{total}] Created: {} (ID {})", contact.name, contact.id);
                }
            })
            .await?;

            match cli.format {
                OutputFormat::Json => println!("{}", format_json(&created)),
                OutputFormat::Pretty => {
                    if !cli.quiet {
                        println!("Created {} contacts", created.len());
                    }
                }
            }
        }
    }

    Ok(())
}
