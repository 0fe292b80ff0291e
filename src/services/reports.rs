//! Damage report submission

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use super::{
    directory::StaffDirectory,
    messaging::{message_link, normalize_phone, report_message},
};
use crate::{
    error::{AppError, AppResult},
    models::{Condition, CreateReport, Ticket},
    repository::{InventoryStore, TicketLog},
};

#[derive(Clone)]
pub struct ReportService {
    store: Arc<dyn InventoryStore>,
    tickets: TicketLog,
    directory: StaffDirectory,
}

impl ReportService {
    pub fn new(store: Arc<dyn InventoryStore>, tickets: TicketLog, directory: StaffDirectory) -> Self {
        Self {
            store,
            tickets,
            directory,
        }
    }

    /// Record a damage report: mark the asset damaged and log a ticket whose
    /// WhatsApp link reaches the reporter.
    ///
    /// Reporter, asset and link are all resolved before anything is written.
    pub async fn submit(&self, data: &CreateReport) -> AppResult<Ticket> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let complaint = data.complaint.trim();
        if complaint.is_empty() {
            return Err(AppError::Validation("Complaint cannot be empty".to_string()));
        }

        let reporter = self.directory.lookup(&data.reporter_name)?;
        let asset = self.store.find_by_id(&data.asset_id).await?;

        let text = report_message(&reporter.name, &asset.name, &asset.room, complaint);
        let link = message_link(&normalize_phone(&reporter.phone), &text)?;

        let asset = self
            .store
            .update_condition(&asset.id, &Condition::DamagedReported)
            .await?;

        let ticket = Ticket {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            asset_id: asset.id.clone(),
            asset_description: asset.description(),
            reporter_name: reporter.name.clone(),
            complaint: complaint.to_string(),
            message_link: link,
        };
        self.tickets.append(ticket.clone()).await;

        tracing::info!(
            "Damage report {} for asset {} by {}",
            ticket.id,
            ticket.asset_id,
            ticket.reporter_name
        );
        Ok(ticket)
    }

    pub async fn list_recent(&self) -> Vec<Ticket> {
        self.tickets.list_recent().await
    }

    pub async fn get(&self, id: Uuid) -> AppResult<Ticket> {
        self.tickets.get(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::StaffEntry,
        repository::{MemoryInventoryStore, MockInventoryStore},
    };

    fn directory() -> StaffDirectory {
        StaffDirectory::new(vec![
            StaffEntry {
                name: "Dr. Rahmat".into(),
                room: "Radiologi".into(),
                phone: "0811-9999-8888".into(),
            },
            StaffEntry {
                name: "Tamu".into(),
                room: "Lobby".into(),
                phone: "ext. 12".into(),
            },
        ])
    }

    fn report(asset_id: &str, reporter: &str, complaint: &str) -> CreateReport {
        CreateReport {
            asset_id: asset_id.into(),
            reporter_name: reporter.into(),
            complaint: complaint.into(),
        }
    }

    #[tokio::test]
    async fn test_submit_end_to_end() {
        let store = Arc::new(MemoryInventoryStore::seeded());
        let tickets = TicketLog::new();
        let svc = ReportService::new(store.clone(), tickets.clone(), directory());

        let ticket = svc
            .submit(&report("ELECT-001", "Dr. Rahmat", "screen blank"))
            .await
            .unwrap();

        let asset = store.find_by_id("ELECT-001").await.unwrap();
        assert_eq!(asset.condition, Condition::DamagedReported);
        assert_eq!(asset.condition.as_str(), "Damaged/Reported");

        assert!(ticket.message_link.starts_with("https://wa.me/62811"));
        let (_, text) = ticket.message_link.split_once("?text=").unwrap();
        assert!(urlencoding::decode(text).unwrap().contains("screen blank"));

        assert_eq!(ticket.asset_description, "ELECT-001 - Patient Monitor (IGD)");
        assert_eq!(tickets.list_recent().await, vec![ticket]);
    }

    #[tokio::test]
    async fn test_submit_unknown_asset_writes_nothing() {
        let store = Arc::new(MemoryInventoryStore::seeded());
        let tickets = TicketLog::new();
        let svc = ReportService::new(store.clone(), tickets.clone(), directory());
        let before = store.find_all().await.unwrap();

        let err = svc
            .submit(&report("NOPE-404", "Dr. Rahmat", "smoke"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(store.find_all().await.unwrap(), before);
        assert!(tickets.is_empty().await);
    }

    #[tokio::test]
    async fn test_submit_unknown_reporter() {
        let mut mock = MockInventoryStore::new();
        mock.expect_find_by_id().never();
        mock.expect_update_condition().never();

        let svc = ReportService::new(Arc::new(mock), TicketLog::new(), directory());
        let err = svc
            .submit(&report("ELECT-001", "Nobody", "smoke"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_submit_blank_complaint() {
        let svc = ReportService::new(
            Arc::new(MemoryInventoryStore::seeded()),
            TicketLog::new(),
            directory(),
        );
        let err = svc
            .submit(&report("ELECT-001", "Dr. Rahmat", "   "))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_submit_unusable_phone_leaves_asset_alone() {
        let store = Arc::new(MemoryInventoryStore::seeded());
        let svc = ReportService::new(store.clone(), TicketLog::new(), directory());

        let err = svc
            .submit(&report("ELECT-002", "Tamu", "alarm"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(
            store.find_by_id("ELECT-002").await.unwrap().condition,
            Condition::Good
        );
    }

    #[tokio::test]
    async fn test_link_is_fixed_at_creation() {
        let store = Arc::new(MemoryInventoryStore::seeded());
        let tickets = TicketLog::new();
        let svc = ReportService::new(store.clone(), tickets.clone(), directory());

        let ticket = svc
            .submit(&report("ELECT-003", "Dr. Rahmat", "tube error"))
            .await
            .unwrap();

        store.replace_all(Vec::new()).await.unwrap();
        assert_eq!(svc.get(ticket.id).await.unwrap().message_link, ticket.message_link);
    }
}
