//! Pretty output formatting.

use agenda_core::contact::Contact;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// Format a contact for display.
pub fn format_contact(contact: &Contact) -> String {
    format!(
        "{}\n  ID: {}\n  Email: {}\n  Phone: {}\n  Created: {}\n  Updated: {}",
        contact.name,
        contact.id,
        contact.email,
        contact.phone,
        contact.created_at.format(TIMESTAMP_FORMAT),
        contact.updated_at.format(TIMESTAMP_FORMAT),
    )
}

/// Format contacts for display.
pub fn format_contacts(contacts: &[Contact]) -> String {
    if contacts.is_empty() {
        return "No contacts found.".to_string();
    }
    let mut output = format!("CONTACTS ({})\n", contacts.len());
    output.push_str(&"-".repeat(40));
    for contact in contacts {
        output.push_str(&format!("\n{}", format_contact(contact)));
        output.push('\n');
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn contact(id: i64, name: &str) -> Contact {
        let at = Utc.with_ymd_and_hms(2024, 6, 15, 10, 30, 0).unwrap();
        Contact {
            id,
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            phone: "11999999999".to_string(),
            created_at: at,
            updated_at: at,
        }
    }

    #[test]
    fn test_format_contact() {
        let output = format_contact(&contact(3, "Ana"));

        assert_eq!(
            output,
            "Ana\n  ID: 3\n  Email: ana@example.com\n  Phone: 11999999999\n  \
             Created: 2024-06-15 10:30:00 UTC\n  Updated: 2024-06-15 10:30:00 UTC"
        );
    }

    #[test]
    fn test_format_contacts_empty() {
        assert_eq!(format_contacts(&[]), "No contacts found.");
    }

    #[test]
    fn test_format_contacts_header_and_order() {
        let output = format_contacts(&[contact(1, "Ana"), contact(2, "Bia")]);

        assert!(output.starts_with("CONTACTS (2)\n----------"));
        let ana = output.find("Ana").unwrap();
        let bia = output.find("Bia").unwrap();
        assert!(ana < bia);
    }
}
