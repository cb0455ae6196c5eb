//! JSON output formatting.

/// Format a value as JSON.
pub fn format_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use agenda_core::contact::CreateContactRequest;

    #[test]
    fn test_format_json_is_compact() {
        let request = CreateContactRequest::new("Ana", "ana@example.com", "1");

        assert_eq!(
            format_json(&request),
            r#"{"name":"Ana","email":"ana@example.com","phone":"1"}"#
        );
    }
}
