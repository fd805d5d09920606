use thiserror::Error;

/// Errors caught locally, before any request reaches the service.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Endpoint cannot be empty")]
    EmptyEndpoint,
    #[error("Table name cannot be empty")]
    EmptyTableName,
    #[error("A partition key is required")]
    MissingPartitionKey,
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),
    #[error("Item must be a JSON object")]
    NotAnObject,
    #[error("Item is missing key attribute '{0}'")]
    MissingKeyAttribute(String),
    #[error("TTL attribute name cannot be empty")]
    EmptyTtlAttribute,
    #[error("Invalid {kind}: {value}")]
    InvalidEnumValue { kind: &'static str, value: String },
}

/// Result type for local input validation.
pub type Result<T> = std::result::Result<T, InputError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_error_display() {
        assert_eq!(
            InputError::EmptyEndpoint.to_string(),
            "Endpoint cannot be empty"
        );
        assert_eq!(
            InputError::MissingKeyAttribute("id".to_string()).to_string(),
            "Item is missing key attribute 'id'"
        );
        assert_eq!(
            InputError::InvalidEnumValue {
                kind: "key type",
                value: "PRIMARY".to_string(),
            }
            .to_string(),
            "Invalid key type: PRIMARY"
        );
    }
}
