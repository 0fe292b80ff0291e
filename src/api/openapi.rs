//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{assets, health, reports, staff};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Alkes Tracker API",
        version = "1.0.0",
        description = "Hospital equipment maintenance REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Assets
        assets::list_assets,
        assets::get_asset,
        assets::update_condition,
        assets::get_label,
        assets::import_assets,
        // Staff
        staff::list_staff,
        // Reports
        reports::create_report,
        reports::list_reports,
        reports::get_report,
    ),
    components(
        schemas(
            // Assets
            crate::models::asset::AssetRecord,
            crate::models::asset::AssetQuery,
            crate::models::asset::UpdateCondition,
            crate::models::import_report::ImportReport,
            assets::ImportUpload,
            // Staff
            crate::models::staff::StaffEntry,
            crate::models::staff::StaffView,
            // Reports
            crate::models::ticket::Ticket,
            crate::models::ticket::CreateReport,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "assets", description = "Equipment inventory, import and QR labels"),
        (name = "staff", description = "Staff directory"),
        (name = "reports", description = "Damage reports")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
