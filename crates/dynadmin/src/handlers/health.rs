//! Health check endpoint.

use axum::http::StatusCode;

/// GET /livez - Basic liveness probe.
///
/// Returns 200 immediately. Does not contact the DynamoDB endpoint.
#[axum::debug_handler]
pub async fn livez() -> StatusCode {
    StatusCode::OK
}
