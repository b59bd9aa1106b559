//! Error types for unform library.

use std::io;
use thiserror::Error;

/// Result type alias for unform operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while reading and extracting documents.
///
/// Every variant is scoped to a single document. Field-level ambiguity is
/// never reported here: unresolved fields are empty strings.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input is neither a docx archive, an extracted docx folder nor XML.
    #[error("Unknown file format: not a docx archive or WordprocessingML markup")]
    UnknownFormat,

    /// The docx container could not be read.
    #[error("Archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// The document markup is not well-formed XML.
    #[error("XML parsing error: {0}")]
    Xml(#[from] roxmltree::Error),

    /// A required part of the docx package is missing.
    #[error("Missing document part: {0}")]
    MissingPart(String),

    /// The markup has no recognizable body element.
    #[error("Could not find body in document: {0}")]
    Structure(String),

    /// Error during rendering (JSON, CSV, debug text).
    #[error("Rendering error: {0}")]
    Render(String),

    /// Error loading or saving the persisted configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::Render(format!("CSV error: {}", err))
    }
}
