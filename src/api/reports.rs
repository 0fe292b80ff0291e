//! Damage report endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{CreateReport, Ticket},
};

/// Submit a damage report
#[utoipa::path(
    post,
    path = "/reports",
    tag = "reports",
    request_body = CreateReport,
    responses(
        (status = 201, description = "Report recorded", body = Ticket),
        (status = 400, description = "Invalid report", body = crate::error::ErrorResponse),
        (status = 404, description = "Unknown asset or reporter", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_report(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateReport>,
) -> AppResult<(StatusCode, Json<Ticket>)> {
    let ticket = state.services.reports.submit(&data).await?;
    Ok((StatusCode::CREATED, Json(ticket)))
}

/// List submitted reports, most recent first
#[utoipa::path(
    get,
    path = "/reports",
    tag = "reports",
    responses(
        (status = 200, description = "Reports, newest first", body = Vec<Ticket>)
    )
)]
pub async fn list_reports(State(state): State<crate::AppState>) -> Json<Vec<Ticket>> {
    Json(state.services.reports.list_recent().await)
}

/// Get a single report
#[utoipa::path(
    get,
    path = "/reports/{id}",
    tag = "reports",
    params(("id" = Uuid, Path, description = "Ticket ID")),
    responses(
        (status = 200, description = "Report details", body = Ticket),
        (status = 404, description = "Report not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_report(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Ticket>> {
    let ticket = state.services.reports.get(id).await?;
    Ok(Json(ticket))
}
