//! Staff directory entries

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One person in the static staff directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StaffEntry {
    /// Display name, also the lookup key
    pub name: String,
    pub room: String,
    /// Phone number as written locally (e.g. `0812-3333-4444`)
    pub phone: String,
}

/// Staff entry as returned by the API, with the auto-filled WhatsApp number
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct StaffView {
    pub name: String,
    pub room: String,
    pub phone: String,
    /// International form used in wa.me links
    pub whatsapp: String,
}
