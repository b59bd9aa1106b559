//! CSV rendering of batch rows.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::model::ExtractedRow;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Writes one CSV row per processed document.
///
/// The header is `文件名` followed by every field name in table order.
#[derive(Debug, Clone, Copy)]
pub struct RecordWriter {
    include_bom: bool,
}

impl RecordWriter {
    /// Create a writer that prefixes the output with a UTF-8 BOM, which
    /// spreadsheet applications need to detect the encoding.
    pub fn new() -> Self {
        Self { include_bom: true }
    }

    /// Enable or disable the UTF-8 BOM.
    pub fn with_bom(mut self, include: bool) -> Self {
        self.include_bom = include;
        self
    }

    /// Header row.
    pub fn header() -> Vec<&'static str> {
        ExtractedRow::columns().collect()
    }

    /// Write rows to any writer.
    pub fn write<W: Write>(&self, rows: &[ExtractedRow], mut writer: W) -> Result<()> {
        if self.include_bom {
            writer.write_all(UTF8_BOM)?;
        }

        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer.write_record(ExtractedRow::columns())?;
        for row in rows {
            csv_writer.write_record(row.values())?;
        }
        csv_writer.flush()?;

        log::debug!("Wrote {} CSV rows", rows.len());
        Ok(())
    }

    /// Write rows to a file, replacing it.
    pub fn write_to_path<P: AsRef<Path>>(&self, rows: &[ExtractedRow], path: P) -> Result<()> {
        let file = File::create(path.as_ref())?;
        self.write(rows, BufWriter::new(file))
    }

    /// Render rows to a string.
    pub fn to_string(&self, rows: &[ExtractedRow]) -> Result<String> {
        let mut buffer = Vec::new();
        self.write(rows, &mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}

impl Default for RecordWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CleanedRecord, Field};

    fn sample_rows() -> Vec<ExtractedRow> {
        let mut record = CleanedRecord::new();
        record.set(Field::Name, "张三");
        record.set(Field::Awards, "一等奖, 二等奖");
        vec![
            ExtractedRow::new("张三.docx", record),
            ExtractedRow::failed("坏.docx", "invalid archive"),
        ]
    }

    #[test]
    fn test_header() {
        let header = RecordWriter::header();
        assert_eq!(header.len(), Field::COUNT + 1);
        assert_eq!(header[0], "文件名");
        assert_eq!(header[1], "姓名");
        assert_eq!(header[Field::COUNT], "服从分配");
    }

    #[test]
    fn test_write_with_bom() {
        let csv = RecordWriter::new().to_string(&sample_rows()).unwrap();
        assert!(csv.starts_with('\u{FEFF}'));

        let lines: Vec<_> = csv.trim_start_matches('\u{FEFF}').lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("文件名,姓名,性别"));
        assert!(lines[1].starts_with("张三.docx,张三,"));
        assert!(lines[1].contains("\"一等奖, 二等奖\""));
        assert_eq!(lines[2], format!("坏.docx{}", ",".repeat(Field::COUNT)));
    }

    #[test]
    fn test_write_without_bom() {
        let csv = RecordWriter::new().with_bom(false).to_string(&[]).unwrap();
        assert!(csv.starts_with("文件名,"));
        assert_eq!(csv.lines().count(), 1);
    }

    #[test]
    fn test_write_to_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        RecordWriter::new().write_to_path(&sample_rows(), &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(UTF8_BOM));
    }
}
