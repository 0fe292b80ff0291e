//! API handlers for the Alkes tracker REST endpoints

pub mod assets;
pub mod health;
pub mod openapi;
pub mod reports;
pub mod staff;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::AppState;

/// Multipart framing on top of the raw file size
const MULTIPART_OVERHEAD: usize = 64 * 1024;

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let upload_limit = state.config.import.max_upload_bytes + MULTIPART_OVERHEAD;

    // API v1 routes
    let api_v1 = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Assets
        .route("/assets", get(assets::list_assets))
        .route(
            "/assets/import",
            post(assets::import_assets).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route("/assets/:id", get(assets::get_asset))
        .route("/assets/:id/condition", put(assets::update_condition))
        .route("/assets/:id/label", get(assets::get_label))
        // Staff directory
        .route("/staff", get(staff::list_staff))
        // Damage reports
        .route("/reports", get(reports::list_reports))
        .route("/reports", post(reports::create_report))
        .route("/reports/:id", get(reports::get_report))
        .with_state(state);

    // OpenAPI documentation
    let openapi = openapi::create_openapi_router();

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
