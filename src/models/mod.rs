//! Data models for the Alkes tracker

pub mod asset;
pub mod import_report;
pub mod staff;
pub mod ticket;

// Re-export commonly used types
pub use asset::{AssetQuery, AssetRecord, Condition, UpdateCondition};
pub use import_report::ImportReport;
pub use staff::{StaffEntry, StaffView};
pub use ticket::{CreateReport, Ticket};
