//! Business logic services

pub mod directory;
pub mod inventory;
pub mod labels;
pub mod messaging;
pub mod reports;

use crate::{config::AppConfig, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub inventory: inventory::InventoryService,
    pub reports: reports::ReportService,
    pub directory: directory::StaffDirectory,
    pub labels: labels::LabelService,
}

impl Services {
    /// Create all services over the given repository
    pub fn new(repository: Repository, config: &AppConfig) -> Self {
        let directory = directory::StaffDirectory::new(config.staff.clone());
        Self {
            inventory: inventory::InventoryService::new(
                repository.assets.clone(),
                config.import.max_upload_bytes,
            ),
            reports: reports::ReportService::new(
                repository.assets.clone(),
                repository.tickets.clone(),
                directory.clone(),
            ),
            directory,
            labels: labels::LabelService::new(config.labels.size),
        }
    }
}
