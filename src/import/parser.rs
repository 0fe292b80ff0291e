//! Tabular upload parser
//!
//! Turns raw upload bytes into a header row plus data rows of text cells.
//! No numeric or date coercion is applied: every value comes out as text.

use std::io::Cursor;

use calamine::{open_workbook_auto_from_rs, Data, Reader};

use crate::error::{AppError, AppResult};

const ZIP_MAGIC: &[u8] = b"PK\x03\x04";
const OLE_MAGIC: &[u8] = &[0xD0, 0xCF, 0x11, 0xE0];
const UTF8_BOM: &str = "\u{feff}";

/// Header row and data rows, all cells as text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Parse uploaded bytes. Workbooks (xlsx, xls, ods) are recognized by
    /// their container magic and read from the first worksheet; anything
    /// else must be UTF-8 CSV.
    pub fn from_bytes(data: &[u8]) -> AppResult<Self> {
        if data.is_empty() {
            return Err(AppError::Parse("Upload is empty".to_string()));
        }

        let mut lines = if data.starts_with(ZIP_MAGIC) || data.starts_with(OLE_MAGIC) {
            Self::read_workbook(data)?
        } else {
            Self::read_csv(data)?
        };

        if lines.is_empty() {
            return Err(AppError::Parse("Upload contains no header row".to_string()));
        }

        let headers = lines.remove(0);
        Ok(Self::new(headers, lines))
    }

    fn read_workbook(data: &[u8]) -> AppResult<Vec<Vec<String>>> {
        let mut workbook = open_workbook_auto_from_rs(Cursor::new(data.to_vec()))
            .map_err(|e| AppError::Parse(format!("Unreadable spreadsheet: {}", e)))?;

        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| AppError::Parse("Spreadsheet has no worksheet".to_string()))?
            .map_err(|e| AppError::Parse(format!("Unreadable worksheet: {}", e)))?;

        Ok(range
            .rows()
            .map(|row| row.iter().map(cell_text).collect())
            .collect())
    }

    fn read_csv(data: &[u8]) -> AppResult<Vec<Vec<String>>> {
        let text = std::str::from_utf8(data)
            .map_err(|_| AppError::Parse("Upload is neither a spreadsheet nor UTF-8 CSV".to_string()))?;
        let text = text.strip_prefix(UTF8_BOM).unwrap_or(text);

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(text.as_bytes());

        let mut lines = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|e| AppError::Parse(format!("Malformed CSV: {}", e)))?;
            lines.push(record.iter().map(str::to_string).collect());
        }
        Ok(lines)
    }
}

/// Render a spreadsheet cell as the text a user typed
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        // Integral floats (years, counts) print without the trailing ".0"
        Data::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", *f as i64),
        Data::Float(f) => f.to_string(),
        Data::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}
