//! Normalization of an uploaded asset table into validated records

use indexmap::IndexMap;

use super::parser::RawTable;
use crate::{
    error::{AppError, AppResult},
    models::{AssetRecord, Condition, ImportReport},
};

/// Columns every upload must carry, after header normalization
pub const REQUIRED_COLUMNS: [&str; 5] = ["kode_aset", "nama_alat", "merk", "ruangan", "kondisi"];

/// Optional acquisition-year column
pub const YEAR_COLUMN: &str = "tahun_pengadaan";

/// Stored in place of any empty or absent cell
pub const MISSING_VALUE: &str = "-";

/// Validated records ready for a full-table replace
#[derive(Debug, Clone)]
pub struct NormalizedImport {
    pub records: Vec<AssetRecord>,
    pub report: ImportReport,
}

/// Column positions resolved from the header row
struct Columns {
    id: usize,
    name: usize,
    brand: usize,
    room: usize,
    condition: usize,
    year: Option<usize>,
}

/// Maps a raw upload table onto `AssetRecord`s
pub struct ImportNormalizer;

impl ImportNormalizer {
    pub fn new() -> Self {
        Self
    }

    /// Validate headers, clean every cell and key the rows by `kode_aset`.
    ///
    /// Duplicate codes keep the position of their first row and the values
    /// of their last one.
    ///
    /// A row whose `kode_aset` is blank is skipped and counted in
    /// `skipped_blank_id` with a warning. It is never stored under the `"-"`
    /// sentinel, which would let unrelated blank-id rows overwrite each other.
    pub fn normalize(&self, table: &RawTable) -> AppResult<NormalizedImport> {
        let columns = Self::resolve_columns(&table.headers)?;

        let mut report = ImportReport::default();
        let mut by_id: IndexMap<String, AssetRecord> = IndexMap::new();

        for (idx, row) in table.rows.iter().enumerate() {
            // Spreadsheet row number, header being row 1
            let line = idx + 2;
            let cell = move |col: usize| row.get(col).map(|c| c.trim()).unwrap_or("");

            if row.iter().all(|c| c.trim().is_empty()) {
                continue;
            }

            let id = cell(columns.id);
            if id.is_empty() {
                report.skipped_blank_id += 1;
                report
                    .warnings
                    .push(format!("Row {}: kode_aset is empty, row skipped", line));
                continue;
            }

            let record = AssetRecord {
                id: id.to_string(),
                name: or_missing(title_case(cell(columns.name))),
                brand: or_missing(cell(columns.brand).to_string()),
                room: or_missing(cell(columns.room).to_uppercase()),
                condition: Condition::from(or_missing(cell(columns.condition).to_string())),
                acquisition_year: or_missing(
                    columns.year.map(|col| cell(col).to_string()).unwrap_or_default(),
                ),
            };

            if by_id.insert(record.id.clone(), record).is_some() {
                report.duplicates_overwritten += 1;
                report.warnings.push(format!(
                    "Row {}: kode_aset {} repeats an earlier row, earlier values replaced",
                    line, id
                ));
            }
        }

        let records: Vec<AssetRecord> = by_id.into_values().collect();
        report.imported = records.len();

        Ok(NormalizedImport { records, report })
    }

    fn resolve_columns(headers: &[String]) -> AppResult<Columns> {
        let normalized: Vec<String> = headers.iter().map(|h| normalize_header(h)).collect();
        let position = |name: &str| normalized.iter().position(|h| h == name);

        let mut found = [0usize; REQUIRED_COLUMNS.len()];
        let mut missing = Vec::new();
        for (slot, name) in found.iter_mut().zip(REQUIRED_COLUMNS) {
            match position(name) {
                Some(col) => *slot = col,
                None => missing.push(name.to_string()),
            }
        }
        if !missing.is_empty() {
            return Err(AppError::Schema { missing });
        }

        let [id, name, brand, room, condition] = found;
        Ok(Columns {
            id,
            name,
            brand,
            room,
            condition,
            year: position(YEAR_COLUMN),
        })
    }
}

impl Default for ImportNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

/// `" Nama Alat "` -> `"nama_alat"`
pub fn normalize_header(header: &str) -> String {
    header.trim().to_lowercase().replace(' ', "_")
}

/// Upper-case a letter at the start of the value or after any non-letter,
/// lower-case every other letter: `"x-ray MOBILE"` -> `"X-Ray Mobile"`.
pub fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut prev_is_letter = false;
    for ch in value.chars() {
        if ch.is_alphabetic() {
            if prev_is_letter {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(ch);
            prev_is_letter = false;
        }
    }
    out
}

fn or_missing(value: String) -> String {
    if value.is_empty() {
        MISSING_VALUE.to_string()
    } else {
        value
    }
}
