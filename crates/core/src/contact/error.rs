use thiserror::Error;

/// Validation errors raised before a request reaches storage.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("Name, email and phone are required")]
    MissingFields,
    #[error("Search term is required")]
    MissingSearchTerm,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_error_display() {
        assert_eq!(
            ContactError::MissingFields.to_string(),
            "Name, email and phone are required"
        );
        assert_eq!(
            ContactError::MissingSearchTerm.to_string(),
            "Search term is required"
        );
    }
}
