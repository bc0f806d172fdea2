//! Router assembly

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
    Router,
};
use common::{admin_api, AppError};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::api::{handlers, swagger};
use crate::app_state::AppState;

/// Build the calcsrv router with its middleware stack
pub fn create_router(state: Arc<AppState>) -> Router {
    let api = &state.config.api;
    let body_limit = api.body_limit_bytes;
    let cors = api.cors;

    let router = Router::new()
        .route("/binary/operation", post(handlers::binary_operation))
        .route("/convert", post(handlers::convert_number))
        .route("/health", get(handlers::health_check))
        .route(
            "/api/admin/logs/level",
            get(admin_api::get_log_level).post(admin_api::set_log_level),
        )
        .route("/api-docs/openapi.json", get(swagger::openapi_json))
        .fallback(route_not_found)
        .layer(middleware::from_fn(common::logging::http_request_logger))
        // Enforced by the Json extractor so oversized bodies get the error envelope
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http());

    let router = if cors {
        router.layer(CorsLayer::permissive())
    } else {
        router
    };

    router.with_state(state)
}

async fn route_not_found(uri: axum::http::Uri) -> AppError {
    AppError::not_found(format!("No route for {}", uri.path()))
}
