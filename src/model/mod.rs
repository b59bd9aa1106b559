//! Document model types for form extraction.
//!
//! This module defines the intermediate representation shared by the three
//! pipeline stages: the structural blocks produced by the reader, the
//! normalized grids produced by the table normalizer, and the flat records
//! produced by the field cleaner.

mod block;
mod document;
mod field;
mod paragraph;
mod record;
mod table;

pub use block::Block;
pub use document::Document;
pub use field::Field;
pub use paragraph::Paragraph;
pub use record::{CleanedRecord, ExtractedRow, FILE_NAME_COLUMN};
pub use table::{NormalizedTable, Table, TableCell};
