//! Asset inventory endpoints

use axum::{
    extract::{Path, Query, State},
    http::header,
    response::IntoResponse,
    Json,
};
use axum_extra::extract::Multipart;
use utoipa::ToSchema;

use crate::{
    error::{AppError, AppResult},
    models::{AssetQuery, AssetRecord, ImportReport, UpdateCondition},
};

/// Multipart field carrying the uploaded table
const UPLOAD_FIELD: &str = "file";

/// Import form, documentation only
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct ImportUpload {
    /// Spreadsheet (xlsx, xls, ods) or CSV with a kode_aset, nama_alat, merk, ruangan, kondisi header row
    #[schema(value_type = String, format = Binary)]
    file: Vec<u8>,
}

/// List assets, optionally filtered by a substring search
#[utoipa::path(
    get,
    path = "/assets",
    tag = "assets",
    params(AssetQuery),
    responses(
        (status = 200, description = "Asset list", body = Vec<AssetRecord>)
    )
)]
pub async fn list_assets(
    State(state): State<crate::AppState>,
    Query(query): Query<AssetQuery>,
) -> AppResult<Json<Vec<AssetRecord>>> {
    let assets = state.services.inventory.list(&query).await?;
    Ok(Json(assets))
}

/// Get asset by code
#[utoipa::path(
    get,
    path = "/assets/{id}",
    tag = "assets",
    params(("id" = String, Path, description = "Asset code (kode_aset)")),
    responses(
        (status = 200, description = "Asset details", body = AssetRecord),
        (status = 404, description = "Asset not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_asset(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<AssetRecord>> {
    let asset = state.services.inventory.get(&id).await?;
    Ok(Json(asset))
}

/// Set the condition of an asset
#[utoipa::path(
    put,
    path = "/assets/{id}/condition",
    tag = "assets",
    params(("id" = String, Path, description = "Asset code (kode_aset)")),
    request_body = UpdateCondition,
    responses(
        (status = 200, description = "Asset updated", body = AssetRecord),
        (status = 404, description = "Asset not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_condition(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
    Json(data): Json<UpdateCondition>,
) -> AppResult<Json<AssetRecord>> {
    let asset = state
        .services
        .inventory
        .update_condition(&id, &data.condition)
        .await?;
    Ok(Json(asset))
}

/// QR label for an asset, as a PNG image
#[utoipa::path(
    get,
    path = "/assets/{id}/label",
    tag = "assets",
    params(("id" = String, Path, description = "Asset code (kode_aset)")),
    responses(
        (status = 200, description = "QR label", body = Vec<u8>, content_type = "image/png"),
        (status = 404, description = "Asset not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_label(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let asset = state.services.inventory.get(&id).await?;
    let png = state.services.labels.render_png(&asset.id)?;
    Ok(([(header::CONTENT_TYPE, "image/png")], png))
}

/// Replace the whole inventory from an uploaded spreadsheet (xlsx, xls, ods or csv)
#[utoipa::path(
    post,
    path = "/assets/import",
    tag = "assets",
    request_body(content = ImportUpload, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Inventory replaced", body = ImportReport),
        (status = 400, description = "Unreadable upload", body = crate::error::ErrorResponse),
        (status = 422, description = "Required columns missing", body = crate::error::ErrorResponse)
    )
)]
pub async fn import_assets(
    State(state): State<crate::AppState>,
    mut multipart: Multipart,
) -> AppResult<Json<ImportReport>> {
    let mut upload = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Invalid multipart body: {}", e)))?
    {
        if field.name() == Some(UPLOAD_FIELD) {
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(format!("Failed to read upload: {}", e)))?;
            upload = Some(data);
            break;
        }
    }

    let data = upload
        .ok_or_else(|| AppError::BadRequest(format!("Missing '{}' field", UPLOAD_FIELD)))?;

    let report = state.services.inventory.import(&data).await?;
    Ok(Json(report))
}
