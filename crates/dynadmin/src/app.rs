use axum::{
    http::{header, Method},
    routing::{get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    handlers::{
        endpoint::{get_endpoint, set_endpoint},
        health::livez,
        items::{delete_item, item_template_for, put_item, query_items, scan_items},
        tables::{
            create_table, create_table_from_form, delete_table, describe_table, describe_ttl,
            disable_ttl, list_tables, toggle_stream, update_stream, update_ttl,
        },
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    // CORS configuration for API endpoints
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    let api_routes = Router::new()
        .route("/endpoint", get(get_endpoint).put(set_endpoint))
        // Table routes
        .route("/tables", get(list_tables).post(create_table))
        .route("/tables/form", post(create_table_from_form))
        .route("/tables/{name}", get(describe_table).delete(delete_table))
        .route(
            "/tables/{name}/ttl",
            get(describe_ttl).put(update_ttl).delete(disable_ttl),
        )
        .route("/tables/{name}/stream", put(update_stream))
        .route("/tables/{name}/stream/toggle", post(toggle_stream))
        // Item routes
        .route("/tables/{name}/items", get(scan_items).post(put_item))
        .route("/tables/{name}/items/delete", post(delete_item))
        .route("/tables/{name}/items/template", get(item_template_for))
        .route("/tables/{name}/query", post(query_items))
        .layer(cors);

    Router::new()
        .route("/livez", get(livez))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
