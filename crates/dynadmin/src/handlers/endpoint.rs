use axum::{extract::State, Json};
use dynadmin_core::endpoint::validate_endpoint;

use crate::{
    handlers::AppError,
    models::{EndpointResponse, SetEndpoint},
    state::AppState,
};

/// Get the active endpoint (GET /api/endpoint).
pub async fn get_endpoint(State(state): State<AppState>) -> Json<EndpointResponse> {
    Json(EndpointResponse {
        endpoint: state.endpoint().await,
    })
}

/// Switch endpoints (PUT /api/endpoint).
///
/// A blank endpoint is rejected before anything is rebuilt.
pub async fn set_endpoint(
    State(state): State<AppState>,
    Json(payload): Json<SetEndpoint>,
) -> Result<Json<EndpointResponse>, AppError> {
    let endpoint = validate_endpoint(&payload.endpoint)?;
    let dispatcher = state.set_endpoint(&endpoint).await;

    Ok(Json(EndpointResponse {
        endpoint: dispatcher.endpoint().to_string(),
    }))
}
