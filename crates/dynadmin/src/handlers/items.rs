use axum::{
    extract::{Path, Query, State},
    Json,
};
use dynadmin_core::item::{item_template, parse_item_json};

use crate::{
    handlers::AppError,
    models::{ItemResponse, ItemsResponse, KeyResponse, QueryItems, ScanParams},
    state::AppState,
};

/// Scan up to the item cap (GET /api/tables/{name}/items?index=).
pub async fn scan_items(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(params): Query<ScanParams>,
) -> Result<Json<ItemsResponse>, AppError> {
    let page = state
        .dispatcher()
        .await
        .scan(&name, params.index_name())
        .await?;
    Ok(Json(page.into()))
}

/// Put an item from a raw JSON object body (POST /api/tables/{name}/items).
pub async fn put_item(
    State(state): State<AppState>,
    Path(name): Path<String>,
    body: String,
) -> Result<Json<ItemResponse>, AppError> {
    let item = parse_item_json(&body)?;
    state.dispatcher().await.put_item(&name, &item).await?;

    tracing::debug!(table = %name, "Put item");

    Ok(Json(ItemResponse { item }))
}

/// Delete the item identified by the base key of the posted item
/// (POST /api/tables/{name}/items/delete).
pub async fn delete_item(
    State(state): State<AppState>,
    Path(name): Path<String>,
    body: String,
) -> Result<Json<KeyResponse>, AppError> {
    let item = parse_item_json(&body)?;
    let key = state
        .dispatcher()
        .await
        .delete_item_by_base_key(&name, &item)
        .await?;

    tracing::debug!(table = %name, "Deleted item");

    Ok(Json(KeyResponse { key }))
}

/// New-item skeleton with the base key attributes (GET /api/tables/{name}/items/template).
pub async fn item_template_for(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<ItemResponse>, AppError> {
    let table = state.dispatcher().await.describe_table(&name).await?;
    Ok(Json(ItemResponse {
        item: item_template(&table.key_schema),
    }))
}

/// Query from per-attribute inputs (POST /api/tables/{name}/query).
pub async fn query_items(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(payload): Json<QueryItems>,
) -> Result<Json<ItemsResponse>, AppError> {
    let items = state
        .dispatcher()
        .await
        .query_from_inputs(&name, payload.index_name(), &payload.keys)
        .await?;
    Ok(Json(items.into()))
}
