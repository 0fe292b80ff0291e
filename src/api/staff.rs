//! Staff directory endpoint

use axum::{extract::State, Json};

use crate::models::StaffView;

/// List the staff directory with auto-filled WhatsApp numbers
#[utoipa::path(
    get,
    path = "/staff",
    tag = "staff",
    responses(
        (status = 200, description = "Staff directory", body = Vec<StaffView>)
    )
)]
pub async fn list_staff(State(state): State<crate::AppState>) -> Json<Vec<StaffView>> {
    Json(state.services.directory.list())
}
