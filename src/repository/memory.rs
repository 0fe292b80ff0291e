//! In-memory inventory store

use std::collections::HashSet;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::InventoryStore;
use crate::{
    error::{AppError, AppResult},
    models::{AssetRecord, Condition},
};

/// Inventory held in process memory, in insertion order.
/// All writes go through the one write guard.
pub struct MemoryInventoryStore {
    rows: RwLock<Vec<AssetRecord>>,
}

impl MemoryInventoryStore {
    pub fn new(rows: Vec<AssetRecord>) -> Self {
        Self {
            rows: RwLock::new(rows),
        }
    }

    /// Store preloaded with the equipment the wards started with
    pub fn seeded() -> Self {
        Self::new(seed_assets())
    }
}

impl Default for MemoryInventoryStore {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[async_trait]
impl InventoryStore for MemoryInventoryStore {
    async fn replace_all(&self, records: Vec<AssetRecord>) -> AppResult<()> {
        if let Some(dup) = first_duplicate(&records) {
            return Err(AppError::Storage(format!("duplicate kode_aset {}", dup)));
        }

        *self.rows.write().await = records;
        Ok(())
    }

    async fn update_condition(&self, id: &str, condition: &Condition) -> AppResult<AssetRecord> {
        let mut rows = self.rows.write().await;
        let row = rows
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Asset {} not found", id)))?;
        row.condition = condition.clone();
        Ok(row.clone())
    }

    async fn find_by_id(&self, id: &str) -> AppResult<AssetRecord> {
        self.rows
            .read()
            .await
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Asset {} not found", id)))
    }

    async fn find_all(&self) -> AppResult<Vec<AssetRecord>> {
        Ok(self.rows.read().await.clone())
    }

    async fn search(&self, needle: &str) -> AppResult<Vec<AssetRecord>> {
        Ok(self
            .rows
            .read()
            .await
            .iter()
            .filter(|r| r.matches(needle))
            .cloned()
            .collect())
    }

    async fn count(&self) -> AppResult<i64> {
        Ok(self.rows.read().await.len() as i64)
    }
}

fn first_duplicate(records: &[AssetRecord]) -> Option<&str> {
    let mut seen = HashSet::with_capacity(records.len());
    records
        .iter()
        .map(|r| r.id.as_str())
        .find(|id| !seen.insert(*id))
}

fn seed_assets() -> Vec<AssetRecord> {
    let asset = |id: &str, name: &str, room: &str, condition: Condition| AssetRecord {
        id: id.to_string(),
        name: name.to_string(),
        brand: "-".to_string(),
        room: room.to_string(),
        condition,
        acquisition_year: "-".to_string(),
    };

    vec![
        asset("ELECT-001", "Patient Monitor", "IGD", Condition::Good),
        asset("ELECT-002", "Syringe Pump", "ICU", Condition::Good),
        asset("ELECT-003", "X-Ray Mobile", "Radiologi", Condition::NeedsCalibration),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, room: &str) -> AssetRecord {
        AssetRecord {
            id: id.to_string(),
            name: "Patient Monitor".to_string(),
            brand: "Philips".to_string(),
            room: room.to_string(),
            condition: Condition::Good,
            acquisition_year: "2019".to_string(),
        }
    }

    #[tokio::test]
    async fn test_seeded() {
        let store = MemoryInventoryStore::seeded();
        assert_eq!(store.count().await.unwrap(), 3);
        let monitor = store.find_by_id("ELECT-001").await.unwrap();
        assert_eq!(monitor.room, "IGD");
    }

    #[tokio::test]
    async fn test_find_by_id_not_found() {
        let store = MemoryInventoryStore::seeded();
        let err = store.find_by_id("NOPE-404").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_update_condition_touches_one_field_of_one_row() {
        let store = MemoryInventoryStore::new(vec![record("A-1", "IGD"), record("A-2", "ICU")]);
        let before = store.find_all().await.unwrap();

        let updated = store
            .update_condition("A-1", &Condition::DamagedReported)
            .await
            .unwrap();
        assert_eq!(updated.condition, Condition::DamagedReported);

        let after = store.find_all().await.unwrap();
        assert_eq!(after[1], before[1]);
        assert_eq!(
            after[0],
            AssetRecord {
                condition: Condition::DamagedReported,
                ..before[0].clone()
            }
        );
    }

    #[tokio::test]
    async fn test_update_condition_unknown_id_changes_nothing() {
        let store = MemoryInventoryStore::seeded();
        let before = store.find_all().await.unwrap();

        let err = store
            .update_condition("NOPE-404", &Condition::DamagedReported)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(store.find_all().await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_replace_all_discards_previous_rows() {
        let store = MemoryInventoryStore::seeded();
        store
            .replace_all(vec![record("NEW-1", "IGD")])
            .await
            .unwrap();

        let rows = store.find_all().await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, "NEW-1");
        assert!(store.find_by_id("ELECT-001").await.is_err());
    }

    #[tokio::test]
    async fn test_replace_all_rejects_duplicate_ids_without_touching_table() {
        let store = MemoryInventoryStore::seeded();
        let before = store.find_all().await.unwrap();

        let err = store
            .replace_all(vec![record("X-1", "IGD"), record("X-1", "ICU")])
            .await
            .unwrap_err();
        assert!(err.is_storage());
        assert_eq!(store.find_all().await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_search_is_case_insensitive_or_across_fields() {
        let store = MemoryInventoryStore::new(vec![
            record("A-1", "IGD"),
            record("A-2", "ICU"),
            record("A-3", "igd lantai 2"),
        ]);

        let hits = store.search("igd").await.unwrap();
        let ids: Vec<&str> = hits.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["A-1", "A-3"]);

        assert_eq!(store.search("PHILIPS").await.unwrap().len(), 3);
        assert!(store.search("ventilator").await.unwrap().is_empty());
    }
}
