//! SQLite row conversion functions.
//!
//! Pure functions for converting SQLite rows into domain types.

use agenda_core::contact::Contact;
use chrono::{DateTime, NaiveDateTime, Utc};
use rusqlite::Row;

/// Convert a SQLite row to a Contact.
///
/// Expected columns: id, name, email, phone, created_at, updated_at
pub fn row_to_contact(row: &Row) -> rusqlite::Result<Contact> {
    let created_at: String = row.get(4)?;
    let updated_at: String = row.get(5)?;

    Ok(Contact {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
        phone: row.get(3)?,
        created_at: parse_datetime(4, &created_at)?,
        updated_at: parse_datetime(5, &updated_at)?,
    })
}

/// Parse a stored timestamp.
///
/// Accepts RFC 3339 (the column default) and SQLite's `CURRENT_TIMESTAMP`
/// layout (`YYYY-MM-DD HH:MM:SS`, UTC) for rows written by other tools.
fn parse_datetime(column: usize, s: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").map(|dt| dt.and_utc()))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(column, rusqlite::types::Type::Text, Box::new(e))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_parse_datetime_rfc3339_with_millis() {
        let dt = parse_datetime(4, "2024-06-15T10:30:45.123Z").unwrap();

        assert_eq!(dt.year(), 2024);
        assert_eq!(dt.hour(), 10);
        assert_eq!(dt.timestamp_subsec_millis(), 123);
    }

    #[test]
    fn test_parse_datetime_current_timestamp_layout() {
        let dt = parse_datetime(4, "2024-06-15 10:30:45").unwrap();

        assert_eq!(dt.month(), 6);
        assert_eq!(dt.second(), 45);
    }

    #[test]
    fn test_parse_datetime_invalid() {
        let err = parse_datetime(5, "yesterday").unwrap_err();

        assert!(matches!(
            err,
            rusqlite::Error::FromSqlConversionFailure(5, rusqlite::types::Type::Text, _)
        ));
    }

    #[test]
    fn test_row_to_contact() {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        let contact = conn
            .query_row(
                "SELECT 9, 'Ana', 'ana@example.com', '123', '2024-01-01T00:00:00.000Z', '2024-01-02T00:00:00.000Z'",
                [],
                row_to_contact,
            )
            .unwrap();

        assert_eq!(contact.id, 9);
        assert_eq!(contact.name, "Ana");
        assert_eq!(contact.email, "ana@example.com");
        assert_eq!(contact.phone, "123");
        assert!(contact.updated_at > contact.created_at);
    }
}
