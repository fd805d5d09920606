//! Pure functions for mapping console errors to HTTP status codes.

use crate::error::InputError;

use super::RemoteError;

/// Maps a [`RemoteError`] to an HTTP status code.
///
/// - `NotFound` -> 404 (Not Found)
/// - `InUse` -> 409 (Conflict)
/// - `Validation` / `InvalidRequest` -> 400 (Bad Request)
/// - `UnsupportedOperation` -> 501 (Not Implemented)
/// - `Connection` -> 502 (Bad Gateway)
/// - `Service` / `Conversion` -> 500 (Internal Server Error)
///
/// # Examples
///
/// ```
/// use dynadmin_core::remote::{remote_error_to_status_code, RemoteError};
///
/// let error = RemoteError::NotFound("Users".to_string());
/// assert_eq!(remote_error_to_status_code(&error), 404);
/// ```
pub fn remote_error_to_status_code(error: &RemoteError) -> u16 {
    match error {
        RemoteError::NotFound(_) => 404,
        RemoteError::InUse(_) => 409,
        RemoteError::Validation(_) => 400,
        RemoteError::InvalidRequest(_) => 400,
        RemoteError::UnsupportedOperation(_) => 501,
        RemoteError::Connection(_) => 502,
        RemoteError::Service { .. } => 500,
        RemoteError::Conversion(_) => 500,
    }
}

/// Local input problems are always the caller's to fix.
pub fn input_error_to_status_code(_error: &InputError) -> u16 {
    400
}
