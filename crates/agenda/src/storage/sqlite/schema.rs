//! SQLite schema definitions and SQL statements.
//!
//! This module contains all SQL used by the SQLite repository, following the
//! Functional Core pattern - pure data and pure statement builders, no I/O.

use rusqlite::types::Value;

use agenda_core::contact::ContactUpdate;

/// SQL statement to create the contacts table.
///
/// `AUTOINCREMENT` keeps ids from being reused after deletes. Timestamps are
/// produced by the store as RFC 3339 UTC strings with millisecond precision.
pub const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS contacts (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    email TEXT NOT NULL,
    phone TEXT NOT NULL,
    created_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now')),
    updated_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
);

CREATE INDEX IF NOT EXISTS idx_contacts_name ON contacts(name);
"#;

/// Store-side expression for the current time, matching the column defaults.
const NOW_UTC: &str = "strftime('%Y-%m-%dT%H:%M:%fZ', 'now')";

pub const SELECT_ALL_CONTACTS: &str = r#"
SELECT id, name, email, phone, created_at, updated_at
FROM contacts
ORDER BY name ASC
"#;

pub const SELECT_CONTACT_BY_ID: &str = r#"
SELECT id, name, email, phone, created_at, updated_at
FROM contacts
WHERE id = ?1
"#;

pub const SEARCH_CONTACTS: &str = r#"
SELECT id, name, email, phone, created_at, updated_at
FROM contacts
WHERE name LIKE ?1
   OR email LIKE ?1
   OR phone LIKE ?1
ORDER BY name ASC
"#;

pub const INSERT_CONTACT: &str = r#"
INSERT INTO contacts (name, email, phone)
VALUES (?1, ?2, ?3)
"#;

pub const DELETE_CONTACT: &str = r#"
DELETE FROM contacts
WHERE id = ?1
"#;

pub const PING: &str = "SELECT 1";

/// Builds the `UPDATE` statement for a partial contact update.
///
/// Returns `None` when the update supplies no fields. Each assignment clause
/// is produced together with its value and the pairs are unzipped once, so
/// clause order and parameter order cannot drift apart. The `updated_at`
/// clause binds no value; the row id is always the last parameter.
pub fn build_update(id: i64, update: &ContactUpdate) -> Option<(String, Vec<Value>)> {
    let assignments = update.assignments();
    if assignments.is_empty() {
        return None;
    }

    let (mut clauses, mut params): (Vec<String>, Vec<Value>) = assignments
        .into_iter()
        .map(|(field, value)| {
            (
                format!("{} = ?", field.column()),
                Value::Text(value.to_string()),
            )
        })
        .unzip();

    clauses.push(format!("updated_at = {NOW_UTC}"));
    params.push(Value::Integer(id));

    let sql = format!("UPDATE contacts SET {} WHERE id = ?", clauses.join(", "));
    Some((sql, params))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_tables_is_valid_sql() {
        assert!(CREATE_TABLES.contains("CREATE TABLE IF NOT EXISTS contacts"));
        assert!(CREATE_TABLES.contains("AUTOINCREMENT"));
        assert!(CREATE_TABLES.contains("name TEXT NOT NULL"));
        assert!(CREATE_TABLES.contains("email TEXT NOT NULL"));
        assert!(CREATE_TABLES.contains("phone TEXT NOT NULL"));
    }

    #[test]
    fn test_queries_contain_expected_keywords() {
        assert!(SELECT_ALL_CONTACTS.contains("ORDER BY name ASC"));
        assert!(SELECT_CONTACT_BY_ID.contains("WHERE id = ?1"));
        assert!(SEARCH_CONTACTS.contains("name LIKE ?1"));
        assert!(SEARCH_CONTACTS.contains("email LIKE ?1"));
        assert!(SEARCH_CONTACTS.contains("phone LIKE ?1"));
        assert!(INSERT_CONTACT.contains("INSERT"));
        assert!(DELETE_CONTACT.contains("DELETE"));
    }

    #[test]
    fn test_build_update_empty_is_none() {
        assert!(build_update(1, &ContactUpdate::new()).is_none());
    }

    #[test]
    fn test_build_update_single_field() {
        let (sql, params) = build_update(7, &ContactUpdate::new().with_name("X")).unwrap();

        assert_eq!(
            sql,
            "UPDATE contacts SET name = ?, updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now') WHERE id = ?"
        );
        assert_eq!(
            params,
            vec![Value::Text("X".to_string()), Value::Integer(7)]
        );
    }

    #[test]
    fn test_build_update_keeps_clauses_and_params_aligned() {
        let update = ContactUpdate::new()
            .with_phone("555")
            .with_email("e@example.com");

        let (sql, params) = build_update(3, &update).unwrap();

        assert!(sql.starts_with("UPDATE contacts SET email = ?, phone = ?, updated_at = "));
        assert!(sql.ends_with("WHERE id = ?"));
        assert_eq!(
            params,
            vec![
                Value::Text("e@example.com".to_string()),
                Value::Text("555".to_string()),
                Value::Integer(3),
            ]
        );
    }

    #[test]
    fn test_build_update_placeholder_count_matches_params() {
        let update = ContactUpdate::new()
            .with_name("A")
            .with_email("B")
            .with_phone("C");

        let (sql, params) = build_update(1, &update).unwrap();

        assert_eq!(sql.matches('?').count(), params.len());
        assert_eq!(params.last(), Some(&Value::Integer(1)));
    }
}
