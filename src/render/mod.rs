//! Rendering of extraction results: JSON dumps, debug text and CSV.

pub mod csv;
mod json;
mod text;

pub use self::csv::RecordWriter;
pub use json::{
    entries_to_json, records_from_json, structure_to_json, tables_from_json, tables_to_json,
    to_json, JsonFormat,
};
pub use text::{render_records, render_table_grid, render_tables};
