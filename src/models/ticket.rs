//! Damage report (ticket) model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// A submitted damage report. Immutable once appended to the log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Ticket {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub asset_id: String,
    /// e.g. `ELECT-001 - Patient Monitor (IGD)`
    pub asset_description: String,
    pub reporter_name: String,
    pub complaint: String,
    /// wa.me deep-link, computed once at submission
    pub message_link: String,
}

/// Damage report submission
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateReport {
    #[validate(length(min = 1, message = "Asset id is required"))]
    pub asset_id: String,
    #[validate(length(min = 1, message = "Reporter name is required"))]
    pub reporter_name: String,
    #[validate(length(min = 1, max = 2000, message = "Complaint must be 1 to 2000 characters"))]
    pub complaint: String,
}
