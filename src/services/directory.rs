//! Static staff directory

use std::sync::Arc;

use super::messaging::normalize_phone;
use crate::{
    error::{AppError, AppResult},
    models::{StaffEntry, StaffView},
};

/// Read-only lookup of staff by display name, loaded once at startup
#[derive(Clone, Default)]
pub struct StaffDirectory {
    entries: Arc<Vec<StaffEntry>>,
}

impl StaffDirectory {
    pub fn new(entries: Vec<StaffEntry>) -> Self {
        Self {
            entries: Arc::new(entries),
        }
    }

    /// Find a staff member by exact display name
    pub fn lookup(&self, name: &str) -> AppResult<&StaffEntry> {
        self.entries
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| AppError::NotFound(format!("Staff member '{}' not found", name)))
    }

    /// Every entry with its WhatsApp number filled in
    pub fn list(&self) -> Vec<StaffView> {
        self.entries
            .iter()
            .map(|s| StaffView {
                name: s.name.clone(),
                room: s.room.clone(),
                phone: s.phone.clone(),
                whatsapp: normalize_phone(&s.phone),
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
