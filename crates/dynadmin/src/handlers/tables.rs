use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use dynadmin_core::schema::{CreateTableRequest, StreamSpec, TableForm};

use crate::{
    handlers::AppError,
    models::{
        TableDescriptionResponse, TableNamesResponse, TableResponse, TtlDescriptionResponse,
        TtlSpecificationResponse, UpdateTtl,
    },
    state::AppState,
};

/// List table names (GET /api/tables).
pub async fn list_tables(State(state): State<AppState>) -> Result<Json<TableNamesResponse>, AppError> {
    let table_names = state.dispatcher().await.list_tables().await?;
    Ok(Json(TableNamesResponse { table_names }))
}

/// Create a table (POST /api/tables).
pub async fn create_table(
    State(state): State<AppState>,
    Json(payload): Json<CreateTableRequest>,
) -> Result<impl IntoResponse, AppError> {
    let table_description = state.dispatcher().await.create_table(&payload).await?;

    tracing::info!(table = %table_description.table_name, "Created table");

    Ok((
        StatusCode::CREATED,
        Json(TableDescriptionResponse { table_description }),
    ))
}

/// Create a table from the console form (POST /api/tables/form).
pub async fn create_table_from_form(
    State(state): State<AppState>,
    Json(form): Json<TableForm>,
) -> Result<impl IntoResponse, AppError> {
    let table_description = state.dispatcher().await.create_table_from_form(form).await?;

    tracing::info!(table = %table_description.table_name, "Created table from form");

    Ok((
        StatusCode::CREATED,
        Json(TableDescriptionResponse { table_description }),
    ))
}

/// Describe a table (GET /api/tables/{name}).
pub async fn describe_table(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<TableResponse>, AppError> {
    let table = state.dispatcher().await.describe_table(&name).await?;
    Ok(Json(TableResponse { table }))
}

/// Delete a table (DELETE /api/tables/{name}).
pub async fn delete_table(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<TableDescriptionResponse>, AppError> {
    let table_description = state.dispatcher().await.delete_table(&name).await?;

    tracing::info!(table = %name, "Deleted table");

    Ok(Json(TableDescriptionResponse { table_description }))
}

/// Describe time-to-live (GET /api/tables/{name}/ttl).
pub async fn describe_ttl(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<TtlDescriptionResponse>, AppError> {
    let time_to_live_description = state.dispatcher().await.describe_time_to_live(&name).await?;
    Ok(Json(TtlDescriptionResponse {
        time_to_live_description,
    }))
}

/// Update time-to-live (PUT /api/tables/{name}/ttl).
pub async fn update_ttl(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(payload): Json<UpdateTtl>,
) -> Result<Json<TtlSpecificationResponse>, AppError> {
    let dispatcher = state.dispatcher().await;

    let time_to_live_specification = match payload.into_spec()? {
        Some(spec) => dispatcher.update_time_to_live(&name, &spec).await?,
        None => dispatcher.disable_time_to_live(&name).await?,
    };

    Ok(Json(TtlSpecificationResponse {
        time_to_live_specification,
    }))
}

/// Disable time-to-live on the last-known attribute (DELETE /api/tables/{name}/ttl).
pub async fn disable_ttl(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<TtlSpecificationResponse>, AppError> {
    let time_to_live_specification = state.dispatcher().await.disable_time_to_live(&name).await?;
    Ok(Json(TtlSpecificationResponse {
        time_to_live_specification,
    }))
}

/// Update the stream specification (PUT /api/tables/{name}/stream).
pub async fn update_stream(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(spec): Json<StreamSpec>,
) -> Result<Json<TableDescriptionResponse>, AppError> {
    let table_description = state.dispatcher().await.update_stream(&name, &spec).await?;
    Ok(Json(TableDescriptionResponse { table_description }))
}

/// Toggle the stream (POST /api/tables/{name}/stream/toggle).
pub async fn toggle_stream(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<TableDescriptionResponse>, AppError> {
    let table_description = state.dispatcher().await.toggle_stream(&name).await?;

    tracing::info!(
        table = %name,
        enabled = table_description.stream_enabled(),
        "Toggled stream"
    );

    Ok(Json(TableDescriptionResponse { table_description }))
}
