//! JSON rendering for the pipeline stages.
//!
//! Each stage has its own envelope: `{"blocks": [...]}` for the structure,
//! `{"tables": [...]}` for normalized grids and `{"entries": [...]}` for
//! cleaned records.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::{Block, CleanedRecord, Document, NormalizedTable};

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

#[derive(Serialize)]
struct BlocksDump<'a> {
    blocks: &'a [Block],
}

#[derive(Serialize, Deserialize)]
struct TablesDump<T> {
    tables: T,
}

#[derive(Serialize)]
struct EntriesDump<'a, T> {
    entries: &'a [T],
}

/// Serialize any value to JSON.
pub fn to_json<T: Serialize + ?Sized>(value: &T, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(value),
        JsonFormat::Compact => serde_json::to_string(value),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

/// Structure dump of a document.
pub fn structure_to_json(doc: &Document, format: JsonFormat) -> Result<String> {
    to_json(&BlocksDump { blocks: &doc.blocks }, format)
}

/// Dump of normalized tables.
pub fn tables_to_json(tables: &[NormalizedTable], format: JsonFormat) -> Result<String> {
    to_json(&TablesDump { tables }, format)
}

/// Dump of records or batch rows.
pub fn entries_to_json<T: Serialize>(entries: &[T], format: JsonFormat) -> Result<String> {
    to_json(&EntriesDump { entries }, format)
}

/// Read a tables dump back, e.g. to clean tables produced by another run.
pub fn tables_from_json(json: &str) -> Result<Vec<NormalizedTable>> {
    let dump: TablesDump<Vec<NormalizedTable>> = serde_json::from_str(json)
        .map_err(|e| Error::Other(format!("Invalid tables JSON: {}", e)))?;
    Ok(dump.tables)
}

/// Read an entries dump of records back.
pub fn records_from_json(json: &str) -> Result<Vec<CleanedRecord>> {
    #[derive(Deserialize)]
    struct Entries {
        entries: Vec<CleanedRecord>,
    }

    let dump: Entries = serde_json::from_str(json)
        .map_err(|e| Error::Other(format!("Invalid entries JSON: {}", e)))?;
    Ok(dump.entries)
}
