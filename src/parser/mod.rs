//! Docx reading module.

mod docx_parser;
mod options;
mod reader;

pub use docx_parser::{DocxParser, DOCUMENT_PART};
pub use options::ParseOptions;
pub use reader::{read_document_xml, StructureReader, WML_NS};
