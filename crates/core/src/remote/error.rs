use thiserror::Error;

/// Service error code for a missing table or index.
pub const RESOURCE_NOT_FOUND: &str = "ResourceNotFoundException";
/// Service error code for a table that already exists or is busy.
pub const RESOURCE_IN_USE: &str = "ResourceInUseException";
/// Service error code for a rejected request shape or schema violation.
pub const VALIDATION: &str = "ValidationException";
/// Service error code older local targets return for operations they lack.
pub const UNKNOWN_OPERATION: &str = "UnknownOperationException";

/// Errors returned by a remote call.
///
/// Service messages are kept verbatim; the variant only records which
/// well-known error code the service sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RemoteError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    InUse(String),
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    UnsupportedOperation(String),
    #[error("Connection failed: {0}")]
    Connection(String),
    #[error("{message}")]
    Service { code: String, message: String },
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
    #[error("Conversion error: {0}")]
    Conversion(String),
}

impl RemoteError {
    /// Classifies a service error by its error code.
    pub fn from_service(code: Option<&str>, message: Option<&str>) -> Self {
        let message = message.unwrap_or_default().to_string();
        match code {
            Some(RESOURCE_NOT_FOUND) => RemoteError::NotFound(message),
            Some(RESOURCE_IN_USE) => RemoteError::InUse(message),
            Some(VALIDATION) => RemoteError::Validation(message),
            Some(UNKNOWN_OPERATION) => RemoteError::UnsupportedOperation(message),
            code => RemoteError::Service {
                code: code.unwrap_or("Unknown").to_string(),
                message,
            },
        }
    }

    /// Whether the target rejected the operation as unrecognized.
    pub fn is_unsupported_operation(&self) -> bool {
        matches!(self, RemoteError::UnsupportedOperation(_))
    }
}

/// Result type for remote calls.
pub type Result<T> = std::result::Result<T, RemoteError>;
