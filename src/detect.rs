//! Document source detection.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Kind of document source accepted by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// A `.docx` zip container
    Archive,
    /// An extracted docx folder containing `word/document.xml`
    Directory,
    /// Bare WordprocessingML markup
    Xml,
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceKind::Archive => write!(f, "docx archive"),
            SourceKind::Directory => write!(f, "extracted docx folder"),
            SourceKind::Xml => write!(f, "document markup"),
        }
    }
}

/// Zip local file header magic: PK\x03\x04
const ZIP_MAGIC: &[u8] = b"PK\x03\x04";
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";
const SNIFF_LEN: usize = 64;

/// Detect the source kind of a path.
///
/// Directories are accepted as extracted docx folders when they contain
/// `word/document.xml`.
///
/// # Example
/// ```no_run
/// use unform::detect::{detect_source_from_path, SourceKind};
///
/// let kind = detect_source_from_path("form.docx").unwrap();
/// assert_eq!(kind, SourceKind::Archive);
/// ```
pub fn detect_source_from_path<P: AsRef<Path>>(path: P) -> Result<SourceKind> {
    let path = path.as_ref();
    if path.is_dir() {
        if path.join("word").join("document.xml").is_file() {
            return Ok(SourceKind::Directory);
        }
        return Err(Error::MissingPart(format!(
            "{}: word/document.xml",
            path.display()
        )));
    }

    let file = File::open(path)?;
    let mut header = Vec::with_capacity(SNIFF_LEN);
    BufReader::new(file)
        .take(SNIFF_LEN as u64)
        .read_to_end(&mut header)?;
    detect_source_from_bytes(&header)
}

/// Detect the source kind from the leading bytes of a document.
///
/// # Returns
/// * `Ok(SourceKind::Archive)` for zip data
/// * `Ok(SourceKind::Xml)` for data starting with `<` (after an optional BOM
///   and whitespace)
/// * `Err(Error::UnknownFormat)` otherwise
pub fn detect_source_from_bytes(data: &[u8]) -> Result<SourceKind> {
    if data.starts_with(ZIP_MAGIC) {
        return Ok(SourceKind::Archive);
    }

    let data = data.strip_prefix(UTF8_BOM).unwrap_or(data);
    match data.iter().find(|b| !b.is_ascii_whitespace()) {
        Some(b'<') => Ok(SourceKind::Xml),
        _ => Err(Error::UnknownFormat),
    }
}

/// Check if a path is a readable docx source.
pub fn is_docx<P: AsRef<Path>>(path: P) -> bool {
    detect_source_from_path(path).is_ok()
}

/// Check if a file name carries the `.docx` extension (case-insensitive).
pub fn has_docx_extension(name: &str) -> bool {
    has_extension(name, "docx")
}

/// Check if a file name carries the `.zip` extension (case-insensitive).
pub fn has_zip_extension(name: &str) -> bool {
    has_extension(name, "zip")
}

fn has_extension(name: &str, ext: &str) -> bool {
    Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(ext))
}
