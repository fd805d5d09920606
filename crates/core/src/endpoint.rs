//! Connection constants and endpoint validation.
//!
//! The target is a local, unauthenticated DynamoDB-compatible service, so the
//! region and credentials are fixed placeholders the protocol envelope still
//! requires.

use crate::error::{InputError, Result};

/// Endpoint used when nothing has been persisted yet.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000";

/// Key under which the endpoint is persisted in the settings store.
pub const ENDPOINT_STORAGE_KEY: &str = "dynamo_endpoint";

/// Region sent with every request. Ignored by local targets.
pub const REGION: &str = "us-east-1";

/// Placeholder access key id.
pub const ACCESS_KEY_ID: &str = "fake";

/// Placeholder secret access key.
pub const SECRET_ACCESS_KEY: &str = "fake";

/// Validates an endpoint entered by the user and returns it trimmed.
pub fn validate_endpoint(endpoint: &str) -> Result<String> {
    let trimmed = endpoint.trim();
    if trimmed.is_empty() {
        return Err(InputError::EmptyEndpoint);
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_endpoint_trims() {
        assert_eq!(
            validate_endpoint("  http://localhost:8001 ").unwrap(),
            "http://localhost:8001"
        );
    }

    #[test]
    fn test_validate_endpoint_rejects_blank() {
        assert_eq!(validate_endpoint(""), Err(InputError::EmptyEndpoint));
        assert_eq!(validate_endpoint("   "), Err(InputError::EmptyEndpoint));
    }
}
