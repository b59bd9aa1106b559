//! Docx loader: locates `word/document.xml` and hands it to the reader.

use std::fs;
use std::io::{self, Cursor, Read, Seek};
use std::path::Path;

use zip::ZipArchive;

use crate::detect::{detect_source_from_bytes, detect_source_from_path, SourceKind};
use crate::error::{Error, Result};
use crate::model::Document;

use super::options::ParseOptions;
use super::reader::StructureReader;

/// Path of the main document part inside a docx package.
pub const DOCUMENT_PART: &str = "word/document.xml";

/// Docx document parser.
///
/// Holds the body markup of one document; [`DocxParser::parse`] runs the
/// structural reader over it.
pub struct DocxParser {
    xml: String,
    source: String,
    options: ParseOptions,
}

impl DocxParser {
    /// Open a docx archive, an extracted docx folder, or a bare XML file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_options(path, ParseOptions::default())
    }

    /// Open a document source with custom options.
    pub fn open_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Self> {
        let path = path.as_ref();
        let source = source_name(path);

        let xml = match detect_source_from_path(path)? {
            SourceKind::Directory => fs::read_to_string(path.join("word").join("document.xml"))?,
            SourceKind::Archive => read_document_part(fs::File::open(path)?, &source)?,
            SourceKind::Xml => fs::read_to_string(path)?,
        };

        Ok(Self {
            xml,
            source,
            options,
        })
    }

    /// Load a document from bytes (docx archive or raw markup).
    pub fn from_bytes(data: &[u8], source: impl Into<String>) -> Result<Self> {
        Self::from_bytes_with_options(data, source, ParseOptions::default())
    }

    /// Load a document from bytes with custom options.
    pub fn from_bytes_with_options(
        data: &[u8],
        source: impl Into<String>,
        options: ParseOptions,
    ) -> Result<Self> {
        let source = source.into();
        let xml = match detect_source_from_bytes(data)? {
            SourceKind::Archive => read_document_part(Cursor::new(data), &source)?,
            _ => String::from_utf8(data.to_vec())
                .map_err(|e| Error::Io(io::Error::new(io::ErrorKind::InvalidData, e)))?,
        };
        Ok(Self {
            xml,
            source,
            options,
        })
    }

    /// Load a document from a reader.
    pub fn from_reader<R: Read>(mut reader: R, source: impl Into<String>) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes(&data, source)
    }

    /// Wrap markup that is already in memory.
    pub fn from_xml(xml: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            xml: xml.into(),
            source: source.into(),
            options: ParseOptions::default(),
        }
    }

    /// Replace the parse options.
    pub fn with_options(mut self, options: ParseOptions) -> Self {
        self.options = options;
        self
    }

    /// Name of the source this parser reads.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Raw body markup.
    pub fn xml(&self) -> &str {
        &self.xml
    }

    /// Parse the markup into a structured [`Document`].
    pub fn parse(&self) -> Result<Document> {
        StructureReader::with_options(self.options.clone()).read_xml(&self.xml, &self.source)
    }
}

fn read_document_part<R: Read + Seek>(reader: R, source: &str) -> Result<String> {
    let mut archive = ZipArchive::new(reader)?;
    let mut entry = archive
        .by_name(DOCUMENT_PART)
        .map_err(|_| Error::MissingPart(format!("{}: {}", source, DOCUMENT_PART)))?;
    let mut xml = String::new();
    entry.read_to_string(&mut xml)?;
    Ok(xml)
}

fn source_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::reader::WML_NS;
    use std::io::Write;
    use zip::write::SimpleFileOptions;

    fn document_xml(cell: &str) -> String {
        format!(
            r#"<w:document xmlns:w="{}"><w:body><w:tbl><w:tr><w:tc><w:p><w:r><w:t>{}</w:t></w:r></w:p></w:tc></w:tr></w:tbl></w:body></w:document>"#,
            WML_NS, cell
        )
    }

    fn docx_bytes(entries: &[(&str, &str)]) -> Vec<u8> {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);
        for (name, content) in entries {
            writer.start_file(*name, options).unwrap();
            writer.write_all(content.as_bytes()).unwrap();
        }
        writer.finish().unwrap().into_inner()
    }

    #[test]
    fn test_from_archive_bytes() {
        let data = docx_bytes(&[(DOCUMENT_PART, &document_xml("学号：1"))]);
        let parser = DocxParser::from_bytes(&data, "a.docx").unwrap();
        let doc = parser.parse().unwrap();
        assert_eq!(doc.source, "a.docx");
        assert_eq!(doc.tables().next().unwrap().rows[0][0].text, "学号：1");
    }

    #[test]
    fn test_archive_without_document_part() {
        let data = docx_bytes(&[("word/styles.xml", "<w:styles/>")]);
        let result = DocxParser::from_bytes(&data, "b.docx");
        assert!(matches!(result, Err(Error::MissingPart(_))));
    }

    #[test]
    fn test_from_raw_xml_bytes() {
        let xml = document_xml("姓名");
        let parser = DocxParser::from_bytes(xml.as_bytes(), "document.xml").unwrap();
        assert_eq!(parser.parse().unwrap().table_count(), 1);
    }

    #[test]
    fn test_open_extracted_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("word")).unwrap();
        fs::write(dir.path().join("word/document.xml"), document_xml("性别")).unwrap();

        let doc = DocxParser::open(dir.path()).unwrap().parse().unwrap();
        assert_eq!(doc.tables().next().unwrap().rows[0][0].text, "性别");
    }

    #[test]
    fn test_invalid_utf8_markup_is_io_error() {
        let mut data = document_xml("姓名").into_bytes();
        data.extend_from_slice(&[0xFF, 0xFE]);

        let result = DocxParser::from_bytes(&data, "document.xml");
        assert!(matches!(result, Err(Error::Io(ref e)) if e.kind() == io::ErrorKind::InvalidData));
    }

    #[test]
    fn test_unknown_bytes() {
        let result = DocxParser::from_bytes(b"plain text", "x.txt");
        assert!(matches!(result, Err(Error::UnknownFormat)));
    }
}
