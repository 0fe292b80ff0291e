//! Asset (medical equipment) model

use std::fmt;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};

/// Condition of a piece of equipment.
///
/// Canonical states have fixed spellings; anything else read from an import
/// or a manual update is kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Condition {
    Good,
    NeedsCalibration,
    DamagedReported,
    Other(String),
}

impl Condition {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Good => "Good",
            Self::NeedsCalibration => "NeedsCalibration",
            Self::DamagedReported => "Damaged/Reported",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for Condition {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Good" => Self::Good,
            "NeedsCalibration" => Self::NeedsCalibration,
            "Damaged/Reported" => Self::DamagedReported,
            _ => Self::Other(s),
        }
    }
}

impl From<&str> for Condition {
    fn from(s: &str) -> Self {
        Self::from(s.to_string())
    }
}

impl From<Condition> for String {
    fn from(c: Condition) -> Self {
        match c {
            Condition::Other(s) => s,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the `alat_kesehatan` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct AssetRecord {
    /// Asset code (kode_aset), primary key
    pub id: String,
    /// Equipment name (nama_alat)
    pub name: String,
    /// Manufacturer (merk)
    pub brand: String,
    /// Room the equipment lives in (ruangan)
    pub room: String,
    /// Current condition (kondisi)
    #[sqlx(try_from = "String")]
    #[schema(value_type = String, example = "Good")]
    pub condition: Condition,
    /// Year of acquisition (tahun_pengadaan), kept as text
    pub acquisition_year: String,
}

impl AssetRecord {
    /// Case-insensitive substring match across every textual field
    pub fn matches(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        [
            self.id.as_str(),
            self.name.as_str(),
            self.brand.as_str(),
            self.room.as_str(),
            self.condition.as_str(),
            self.acquisition_year.as_str(),
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
    }

    /// Label shown next to the asset in pick lists
    pub fn description(&self) -> String {
        format!("{} - {} ({})", self.id, self.name, self.room)
    }
}

/// Query parameters for listing assets
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct AssetQuery {
    /// Case-insensitive substring searched in every field
    pub q: Option<String>,
}

/// Update condition request
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateCondition {
    #[schema(value_type = String, example = "NeedsCalibration")]
    pub condition: Condition,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn monitor() -> AssetRecord {
        AssetRecord {
            id: "ELECT-001".into(),
            name: "Patient Monitor".into(),
            brand: "Philips".into(),
            room: "IGD".into(),
            condition: Condition::Good,
            acquisition_year: "2019".into(),
        }
    }

    #[test]
    fn test_condition_round_trips_through_text() {
        assert_eq!(Condition::from("Damaged/Reported"), Condition::DamagedReported);
        assert_eq!(Condition::from("Baik"), Condition::Other("Baik".into()));
        assert_eq!(String::from(Condition::NeedsCalibration), "NeedsCalibration");
        assert_eq!(
            serde_json::to_value(Condition::DamagedReported).unwrap(),
            serde_json::json!("Damaged/Reported")
        );
    }

    #[test]
    fn test_matches_any_field_case_insensitively() {
        let asset = monitor();
        assert!(asset.matches("igd"));
        assert!(asset.matches("PHILIPS"));
        assert!(asset.matches("elect"));
        assert!(asset.matches("2019"));
        assert!(!asset.matches("icu"));
    }

    #[test]
    fn test_description() {
        assert_eq!(monitor().description(), "ELECT-001 - Patient Monitor (IGD)");
    }
}
