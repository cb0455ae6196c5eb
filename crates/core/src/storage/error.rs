use thiserror::Error;

/// Errors that can occur during repository operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_error_not_found_display() {
        let error = RepositoryError::NotFound {
            entity_type: "Contact",
            id: "42".to_string(),
        };
        assert_eq!(error.to_string(), "Contact not found: 42");
    }

    #[test]
    fn test_repository_error_connection_failed_display() {
        let error = RepositoryError::ConnectionFailed("unable to open database file".to_string());
        assert_eq!(
            error.to_string(),
            "Connection failed: unable to open database file"
        );
    }

    #[test]
    fn test_repository_error_query_failed_display() {
        let error = RepositoryError::QueryFailed("no such table: contacts".to_string());
        assert_eq!(error.to_string(), "Query failed: no such table: contacts");
    }

    #[test]
    fn test_repository_error_constraint_violation_display() {
        let error = RepositoryError::ConstraintViolation(
            "NOT NULL constraint failed: contacts.phone".to_string(),
        );
        assert_eq!(
            error.to_string(),
            "Constraint violation: NOT NULL constraint failed: contacts.phone"
        );
    }

    #[test]
    fn test_repository_error_serialization_display() {
        let error = RepositoryError::Serialization("invalid timestamp".to_string());
        assert_eq!(error.to_string(), "Serialization error: invalid timestamp");
    }
}
