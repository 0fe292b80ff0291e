//! Asset table import
//!
//! Reads uploaded spreadsheets (or CSV) into a raw string table and
//! normalizes it into validated asset records.

pub mod normalizer;
pub mod parser;

pub use normalizer::{ImportNormalizer, NormalizedImport};
pub use parser::RawTable;
