//! Inventory service: queries, condition updates and bulk import

use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    import::{ImportNormalizer, RawTable},
    models::{AssetQuery, AssetRecord, Condition, ImportReport},
    repository::InventoryStore,
};

#[derive(Clone)]
pub struct InventoryService {
    store: Arc<dyn InventoryStore>,
    max_upload_bytes: usize,
}

impl InventoryService {
    pub fn new(store: Arc<dyn InventoryStore>, max_upload_bytes: usize) -> Self {
        Self {
            store,
            max_upload_bytes,
        }
    }

    /// All assets, or only those matching `q` when it is not blank
    pub async fn list(&self, query: &AssetQuery) -> AppResult<Vec<AssetRecord>> {
        match query.q.as_deref().map(str::trim) {
            Some(needle) if !needle.is_empty() => self.store.search(needle).await,
            _ => self.store.find_all().await,
        }
    }

    pub async fn get(&self, id: &str) -> AppResult<AssetRecord> {
        self.store.find_by_id(id).await
    }

    /// Number of stored assets, also used by the readiness check
    pub async fn count(&self) -> AppResult<i64> {
        self.store.count().await
    }

    /// Surrounding whitespace is dropped before the value is checked and
    /// stored, as the import path does for every cell.
    pub async fn update_condition(&self, id: &str, condition: &Condition) -> AppResult<AssetRecord> {
        let condition = Condition::from(condition.as_str().trim());
        if condition.as_str().is_empty() {
            return Err(AppError::Validation("Condition cannot be empty".to_string()));
        }
        let asset = self.store.update_condition(id, &condition).await?;
        tracing::info!("Asset {} condition set to {}", asset.id, asset.condition);
        Ok(asset)
    }

    /// Replace the whole inventory from an uploaded spreadsheet or CSV.
    ///
    /// Parsing and validation finish before the store is touched, so a bad
    /// upload leaves the previous table in place.
    pub async fn import(&self, data: &[u8]) -> AppResult<ImportReport> {
        if data.len() > self.max_upload_bytes {
            return Err(AppError::BadRequest(format!(
                "Upload of {} bytes exceeds the {} byte limit",
                data.len(),
                self.max_upload_bytes
            )));
        }

        let table = RawTable::from_bytes(data)?;
        let normalized = ImportNormalizer::new().normalize(&table)?;

        self.store.replace_all(normalized.records).await?;

        let report = normalized.report;
        tracing::info!(
            "Asset import: {} records stored, {} blank ids skipped, {} duplicates overwritten",
            report.imported,
            report.skipped_blank_id,
            report.duplicates_overwritten
        );
        for warning in &report.warnings {
            tracing::warn!("Asset import: {}", warning);
        }
        Ok(report)
    }
}
