//! # unform
//!
//! Field extraction from application-form tables in Word documents.
//!
//! Registration forms are usually laid out as a single Word table where a
//! label cell ("姓名", "学号", ...) sits next to the value cell. This library
//! reads the document body, normalizes every table into a grid of strings
//! and resolves a fixed set of canonical fields from each grid.
//!
//! ## Quick Start
//!
//! ```no_run
//! use unform::{extract_record, Field};
//!
//! fn main() -> unform::Result<()> {
//!     let record = extract_record("张三.docx")?;
//!     println!("{}: {}", Field::Name, record.get(Field::Name));
//!     Ok(())
//! }
//! ```
//!
//! ## Pipeline
//!
//! - **Reader** ([`parser`]): `word/document.xml` to an ordered list of
//!   paragraph and table blocks
//! - **Normalizer** ([`extract::normalize_table`]): tables to string grids
//! - **Cleaner** ([`extract::clean_table`]): grids to [`CleanedRecord`]s
//! - **Batch** ([`batch`]): a folder of forms to one row per document,
//!   processed in parallel with Rayon
//! - **Output** ([`render`]): JSON dumps of each stage, debug text and CSV

pub mod batch;
pub mod config;
pub mod detect;
pub mod error;
pub mod extract;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use batch::{BatchOptions, DocumentSource};
pub use config::Config;
pub use detect::{detect_source_from_bytes, detect_source_from_path, is_docx, SourceKind};
pub use error::{Error, Result};
pub use extract::{clean_table, clean_tables, extract_tables, normalize_table, CheckState};
pub use model::{
    Block, CleanedRecord, Document, ExtractedRow, Field, NormalizedTable, Paragraph, Table,
    TableCell,
};
pub use parser::{DocxParser, ParseOptions};
pub use render::{JsonFormat, RecordWriter};

use std::path::Path;

const BYTES_SOURCE: &str = "<bytes>";
const XML_SOURCE: &str = "<xml>";

/// Parse a docx file (or extracted docx folder) into a structured document.
///
/// # Example
///
/// ```no_run
/// use unform::parse_file;
///
/// let doc = parse_file("form.docx").unwrap();
/// println!("Tables: {}", doc.table_count());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    DocxParser::open(path)?.parse()
}

/// Parse a docx file with custom options.
///
/// # Example
///
/// ```no_run
/// use unform::{parse_file_with_options, ParseOptions};
///
/// let options = ParseOptions::new().visible_text_only();
/// let doc = parse_file_with_options("form.docx", options).unwrap();
/// ```
pub fn parse_file_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Document> {
    DocxParser::open_with_options(path, options)?.parse()
}

/// Parse a docx archive (or raw markup) held in memory.
pub fn parse_bytes(data: &[u8]) -> Result<Document> {
    DocxParser::from_bytes(data, BYTES_SOURCE)?.parse()
}

/// Parse `word/document.xml` markup directly.
pub fn parse_xml(xml: &str) -> Result<Document> {
    DocxParser::from_xml(xml, XML_SOURCE).parse()
}

/// Parse a document and clean every table, one record per table.
pub fn extract_records<P: AsRef<Path>>(path: P) -> Result<Vec<CleanedRecord>> {
    let doc = parse_file(path)?;
    Ok(clean_tables(&extract_tables(&doc)))
}

/// Parse a document and clean its first table.
///
/// A document without tables is an error.
pub fn extract_record<P: AsRef<Path>>(path: P) -> Result<CleanedRecord> {
    let source = DocumentSource::from_path(path.as_ref());
    batch::process_source(&source, &ParseOptions::default())
}

/// Builder for one-document extraction.
///
/// # Example
///
/// ```no_run
/// use unform::{Field, Unform};
///
/// let result = Unform::new()
///     .visible_text_only()
///     .compact_json()
///     .parse("form.docx")
///     .unwrap();
///
/// println!("{}", result.records_json().unwrap());
/// if let Some(record) = result.first_record() {
///     println!("{}", record.get(Field::StudentId));
/// }
/// ```
pub struct Unform {
    parse_options: ParseOptions,
    json_format: JsonFormat,
}

impl Unform {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self {
            parse_options: ParseOptions::default(),
            json_format: JsonFormat::Pretty,
        }
    }

    /// Ignore tracked deletions and field codes.
    pub fn visible_text_only(mut self) -> Self {
        self.parse_options = self.parse_options.visible_text_only();
        self
    }

    /// Set the parse options.
    pub fn with_parse_options(mut self, options: ParseOptions) -> Self {
        self.parse_options = options;
        self
    }

    /// Emit compact JSON.
    pub fn compact_json(mut self) -> Self {
        self.json_format = JsonFormat::Compact;
        self
    }

    /// Parse a file and run every stage.
    pub fn parse<P: AsRef<Path>>(self, path: P) -> Result<UnformResult> {
        let document = parse_file_with_options(path, self.parse_options.clone())?;
        Ok(self.finish(document))
    }

    /// Parse bytes and run every stage.
    pub fn parse_bytes(self, data: &[u8]) -> Result<UnformResult> {
        let document =
            DocxParser::from_bytes_with_options(data, BYTES_SOURCE, self.parse_options.clone())?
                .parse()?;
        Ok(self.finish(document))
    }

    /// Parse markup and run every stage.
    pub fn parse_xml(self, xml: &str) -> Result<UnformResult> {
        let document = DocxParser::from_xml(xml, XML_SOURCE)
            .with_options(self.parse_options.clone())
            .parse()?;
        Ok(self.finish(document))
    }

    fn finish(self, document: Document) -> UnformResult {
        let tables = extract_tables(&document);
        let records = clean_tables(&tables);
        UnformResult {
            document,
            tables,
            records,
            json_format: self.json_format,
        }
    }
}

impl Default for Unform {
    fn default() -> Self {
        Self::new()
    }
}

/// Output of every pipeline stage for one document.
pub struct UnformResult {
    /// Structural blocks
    pub document: Document,
    /// Normalized tables, in document order
    pub tables: Vec<NormalizedTable>,
    /// One record per table
    pub records: Vec<CleanedRecord>,
    json_format: JsonFormat,
}

impl UnformResult {
    /// Record of the first table, if the document has one.
    pub fn first_record(&self) -> Option<&CleanedRecord> {
        self.records.first()
    }

    /// `{"blocks": [...]}` dump.
    pub fn structure_json(&self) -> Result<String> {
        render::structure_to_json(&self.document, self.json_format)
    }

    /// `{"tables": [...]}` dump.
    pub fn tables_json(&self) -> Result<String> {
        render::tables_to_json(&self.tables, self.json_format)
    }

    /// `{"entries": [...]}` dump.
    pub fn records_json(&self) -> Result<String> {
        render::entries_to_json(&self.records, self.json_format)
    }

    /// Get the document.
    pub fn document(&self) -> &Document {
        &self.document
    }
}
