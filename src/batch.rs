//! Batch extraction over a folder of application forms.
//!
//! A folder is scanned (non-recursively) for `.docx` files and `.zip`
//! archives of `.docx` files. Every discovered document yields exactly one
//! [`ExtractedRow`]: the record of its first table, or an all-empty
//! placeholder when the document cannot be read or has no table.
//!
//! ```no_run
//! use unform::batch::{discover_sources, process_sources, BatchOptions};
//! use unform::render::RecordWriter;
//!
//! let options = BatchOptions::default();
//! let sources = discover_sources("./input", &options)?;
//! let rows = process_sources(&sources, &options);
//! RecordWriter::new().write_to_path(&rows, "output.csv")?;
//! # Ok::<(), unform::Error>(())
//! ```

use std::fs::{self, File};
use std::io::{self, Read, Seek};
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use zip::ZipArchive;

use crate::detect::{has_docx_extension, has_zip_extension};
use crate::error::{Error, Result};
use crate::extract::{clean_table, extract_tables};
use crate::model::{CleanedRecord, Document, ExtractedRow};
use crate::parser::{DocxParser, ParseOptions};

/// Upper bound on the buffer reserved up front for an archive entry.
/// Declared sizes are untrusted; larger entries grow the buffer as they read.
const MAX_ENTRY_PREALLOC: u64 = 16 * 1024 * 1024;

/// Options for a batch run.
#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// Process documents on the rayon thread pool
    pub parallel: bool,

    /// Read `.docx` entries out of `.zip` archives in the folder
    pub include_archives: bool,

    /// Options passed to the structural reader
    pub parse_options: ParseOptions,
}

impl BatchOptions {
    /// Create new batch options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Process documents one at a time.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Include or skip `.zip` archives.
    pub fn with_archives(mut self, include: bool) -> Self {
        self.include_archives = include;
        self
    }

    /// Set the parse options.
    pub fn with_parse_options(mut self, options: ParseOptions) -> Self {
        self.parse_options = options;
        self
    }
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            parallel: true,
            include_archives: true,
            parse_options: ParseOptions::default(),
        }
    }
}

/// Where a document's bytes come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceOrigin {
    /// A `.docx` file on disk, read when processed
    File(PathBuf),
    /// A `.docx` entry of a zip archive, already read into memory
    ArchiveEntry {
        /// Path of the containing archive
        archive: PathBuf,
        /// Entry contents
        data: Vec<u8>,
    },
}

/// One document found by [`discover_sources`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentSource {
    /// Base file name, used as the row key in the output
    pub file_name: String,

    /// Location of the document contents
    pub origin: SourceOrigin,
}

impl DocumentSource {
    /// A document file on disk.
    pub fn from_path<P: Into<PathBuf>>(path: P) -> Self {
        let path = path.into();
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self {
            file_name,
            origin: SourceOrigin::File(path),
        }
    }

    /// A document held in memory, taken from `archive`.
    pub fn from_archive_entry(
        file_name: impl Into<String>,
        archive: impl Into<PathBuf>,
        data: Vec<u8>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            origin: SourceOrigin::ArchiveEntry {
                archive: archive.into(),
                data,
            },
        }
    }

    /// Read and parse the document.
    pub fn parse(&self, options: &ParseOptions) -> Result<Document> {
        let parser = match &self.origin {
            SourceOrigin::File(path) => DocxParser::open_with_options(path, options.clone())?,
            SourceOrigin::ArchiveEntry { data, .. } => {
                DocxParser::from_bytes_with_options(data, self.file_name.as_str(), options.clone())?
            }
        };
        parser.parse()
    }
}

/// Scan a folder for documents, sorted by file name.
///
/// Archives that cannot be opened are logged and skipped; a missing folder
/// is an error.
pub fn discover_sources<P: AsRef<Path>>(
    folder: P,
    options: &BatchOptions,
) -> Result<Vec<DocumentSource>> {
    let folder = folder.as_ref();
    if !folder.is_dir() {
        return Err(Error::Io(io::Error::new(
            io::ErrorKind::NotFound,
            format!("input folder not found: {}", folder.display()),
        )));
    }

    let mut paths: Vec<PathBuf> = fs::read_dir(folder)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .collect();
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    let mut sources = Vec::new();
    for path in paths {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        if has_docx_extension(&name) {
            sources.push(DocumentSource::from_path(path));
        } else if options.include_archives && has_zip_extension(&name) {
            match File::open(&path)
                .map_err(Error::from)
                .and_then(|file| read_archive_sources(file, &path))
            {
                Ok(entries) => sources.extend(entries),
                Err(e) => log::warn!("Skipping archive {}: {}", path.display(), e),
            }
        }
    }

    log::debug!(
        "Discovered {} documents in {}",
        sources.len(),
        folder.display()
    );
    Ok(sources)
}

/// Read every `.docx` entry of a zip archive into memory.
pub fn read_archive_sources<R: Read + Seek>(
    reader: R,
    archive_path: &Path,
) -> Result<Vec<DocumentSource>> {
    let mut archive = ZipArchive::new(reader)?;
    let mut sources = Vec::new();

    for i in 0..archive.len() {
        let mut entry = archive.by_index(i)?;
        if entry.is_dir() {
            continue;
        }
        let Some(base_name) = Path::new(entry.name())
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
        else {
            continue;
        };
        if !has_docx_extension(&base_name) {
            continue;
        }

        let mut data = Vec::with_capacity(entry.size().min(MAX_ENTRY_PREALLOC) as usize);
        entry.read_to_end(&mut data)?;
        sources.push(DocumentSource::from_archive_entry(
            base_name,
            archive_path,
            data,
        ));
    }

    Ok(sources)
}

/// Record of a document's first table.
pub fn process_source(source: &DocumentSource, options: &ParseOptions) -> Result<CleanedRecord> {
    let document = source.parse(options)?;
    let tables = extract_tables(&document);
    let first = tables
        .first()
        .ok_or_else(|| Error::Other(format!("No table found in {}", source.file_name)))?;
    Ok(clean_table(first))
}

/// Process one source into a row, turning failures into placeholders.
pub fn extract_row(source: &DocumentSource, options: &ParseOptions) -> ExtractedRow {
    match process_source(source, options) {
        Ok(record) => {
            log::debug!(
                "{}: resolved {} fields",
                source.file_name,
                record.resolved_count()
            );
            ExtractedRow::new(source.file_name.clone(), record)
        }
        Err(e) => {
            log::warn!("Failed to process {}: {}", source.file_name, e);
            ExtractedRow::failed(source.file_name.clone(), e.to_string())
        }
    }
}

/// Process every source; rows keep the order of `sources`.
pub fn process_sources(sources: &[DocumentSource], options: &BatchOptions) -> Vec<ExtractedRow> {
    process_sources_with_progress(sources, options, |_| {})
}

/// Process every source, calling `on_row` as each document finishes.
///
/// `on_row` may be called from several threads and out of order; the
/// returned rows are still in source order.
pub fn process_sources_with_progress<F>(
    sources: &[DocumentSource],
    options: &BatchOptions,
    on_row: F,
) -> Vec<ExtractedRow>
where
    F: Fn(&ExtractedRow) + Sync + Send,
{
    let run = |source: &DocumentSource| {
        let row = extract_row(source, &options.parse_options);
        on_row(&row);
        row
    };

    if options.parallel {
        sources.par_iter().map(run).collect()
    } else {
        sources.iter().map(run).collect()
    }
}

/// Discover and process a folder in one call.
pub fn run_batch<P: AsRef<Path>>(folder: P, options: &BatchOptions) -> Result<Vec<ExtractedRow>> {
    let sources = discover_sources(folder, options)?;
    Ok(process_sources(&sources, options))
}
