//! Repository layer for asset and ticket storage

pub mod assets;
pub mod memory;
pub mod tickets;

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::{AssetRecord, Condition},
};

pub use assets::AssetsRepository;
pub use memory::MemoryInventoryStore;
pub use tickets::TicketLog;

/// Persistence of the asset inventory.
///
/// Implementations serialize writes: a `replace_all` is never observable
/// half-applied, and an `update_condition` never interleaves with one.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InventoryStore: Send + Sync {
    /// Discard every asset and store `records` in their place
    async fn replace_all(&self, records: Vec<AssetRecord>) -> AppResult<()>;

    /// Set the condition of one asset, returning the updated row
    async fn update_condition(&self, id: &str, condition: &Condition) -> AppResult<AssetRecord>;

    async fn find_by_id(&self, id: &str) -> AppResult<AssetRecord>;

    async fn find_all(&self) -> AppResult<Vec<AssetRecord>>;

    /// Rows where any text field contains `needle`, ignoring case
    async fn search(&self, needle: &str) -> AppResult<Vec<AssetRecord>>;

    async fn count(&self) -> AppResult<i64>;
}

/// Main repository struct holding the process-wide stores
#[derive(Clone)]
pub struct Repository {
    pub assets: Arc<dyn InventoryStore>,
    pub tickets: TicketLog,
}

impl Repository {
    /// Create a repository backed by the `alat_kesehatan` table
    pub fn postgres(pool: Pool<Postgres>) -> Self {
        Self::with_store(Arc::new(AssetsRepository::new(pool)))
    }

    /// Create a repository holding the inventory in memory, seeded with the
    /// default ward equipment
    pub fn in_memory() -> Self {
        Self::with_store(Arc::new(MemoryInventoryStore::seeded()))
    }

    pub fn with_store(assets: Arc<dyn InventoryStore>) -> Self {
        Self {
            assets,
            tickets: TicketLog::new(),
        }
    }
}
