//! Import report returned after a bulk asset upload.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Outcome of replacing the inventory from an uploaded table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ImportReport {
    /// Number of records now in the inventory
    pub imported: usize,
    /// Rows dropped because `kode_aset` was blank
    pub skipped_blank_id: usize,
    /// Rows that overwrote an earlier row with the same `kode_aset`
    pub duplicates_overwritten: usize,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}
