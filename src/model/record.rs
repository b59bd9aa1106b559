//! Cleaned record type.

use super::Field;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;

/// One flat record of canonical fields, produced per table.
///
/// Every field is always present; an empty string means "unknown". A field
/// is written at most once: [`CleanedRecord::set`] ignores writes to a field
/// that already holds a value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanedRecord {
    values: [String; Field::COUNT],
}

impl CleanedRecord {
    /// Create a record with every field empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the value of a field.
    pub fn get(&self, field: Field) -> &str {
        &self.values[field.index()]
    }

    /// Check if a field holds a value.
    pub fn is_resolved(&self, field: Field) -> bool {
        !self.values[field.index()].is_empty()
    }

    /// Set a field if it is still unresolved.
    ///
    /// Returns `true` when the value was stored.
    pub fn set(&mut self, field: Field, value: impl Into<String>) -> bool {
        if self.is_resolved(field) {
            return false;
        }
        let value = value.into();
        if value.is_empty() {
            return false;
        }
        self.values[field.index()] = value;
        true
    }

    /// Iterate over `(field, value)` pairs in table order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        Field::ALL
            .iter()
            .map(move |&f| (f, self.values[f.index()].as_str()))
    }

    /// Number of resolved fields.
    pub fn resolved_count(&self) -> usize {
        self.values.iter().filter(|v| !v.is_empty()).count()
    }

    /// Check if no field is resolved.
    pub fn is_empty(&self) -> bool {
        self.resolved_count() == 0
    }
}

/// Column name of the source file in tabular output.
pub const FILE_NAME_COLUMN: &str = "文件名";

/// One output row of a batch run: the source file name and its record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedRow {
    /// Base name of the source document
    pub file_name: String,

    /// Record of the document's first table (all empty on failure)
    pub record: CleanedRecord,

    /// Why the document produced an empty placeholder, if it failed
    pub error: Option<String>,
}

impl ExtractedRow {
    /// Create a row for a successfully processed document.
    pub fn new(file_name: impl Into<String>, record: CleanedRecord) -> Self {
        Self {
            file_name: file_name.into(),
            record,
            error: None,
        }
    }

    /// Create an all-empty placeholder row for a failed document.
    pub fn failed(file_name: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            record: CleanedRecord::new(),
            error: Some(error.into()),
        }
    }

    /// Check if the document failed.
    pub fn is_failed(&self) -> bool {
        self.error.is_some()
    }

    /// Output columns: the file name, then every field in table order.
    pub fn columns() -> impl Iterator<Item = &'static str> {
        std::iter::once(FILE_NAME_COLUMN).chain(Field::ALL.iter().map(|f| f.name()))
    }

    /// Cell values in [`ExtractedRow::columns`] order.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.file_name.as_str()).chain(self.record.iter().map(|(_, v)| v))
    }
}

impl Serialize for ExtractedRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Field::COUNT + 1))?;
        for (column, value) in Self::columns().zip(self.values()) {
            map.serialize_entry(column, value)?;
        }
        map.end()
    }
}

impl Serialize for CleanedRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Field::COUNT))?;
        for (field, value) in self.iter() {
            map.serialize_entry(field.name(), value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for CleanedRecord {
    /// Unknown keys are ignored, missing keys stay empty.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<String, String>::deserialize(deserializer)?;
        let mut record = CleanedRecord::new();
        for (key, value) in raw {
            if let Some(field) = Field::from_name(&key) {
                record.set(field, value);
            }
        }
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_is_empty() {
        let record = CleanedRecord::new();
        assert!(record.is_empty());
        assert!(record.iter().all(|(_, v)| v.is_empty()));
    }

    #[test]
    fn test_first_write_wins() {
        let mut record = CleanedRecord::new();
        assert!(record.set(Field::Name, "张三"));
        assert!(!record.set(Field::Name, "李四"));
        assert_eq!(record.get(Field::Name), "张三");
        assert!(!record.set(Field::Gender, ""));
        assert!(!record.is_resolved(Field::Gender));
    }

    #[test]
    fn test_serialize_keeps_all_keys_in_order() {
        let mut record = CleanedRecord::new();
        record.set(Field::StudentId, "20230001");

        let value = serde_json::to_value(&record).unwrap();
        let map = value.as_object().unwrap();
        assert_eq!(map.len(), Field::COUNT);
        assert_eq!(map["学号"], "20230001");
        assert_eq!(map["姓名"], "");

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.starts_with("{\"姓名\""));
        assert!(json.ends_with("\"服从分配\":\"\"}"));
    }

    #[test]
    fn test_failed_row_is_placeholder() {
        let row = ExtractedRow::failed("坏文件.docx", "no body");
        assert!(row.is_failed());
        assert!(row.record.is_empty());

        let json = serde_json::to_string(&row).unwrap();
        assert!(json.starts_with("{\"文件名\":\"坏文件.docx\",\"姓名\":\"\""));
        assert!(!json.contains("no body"));
    }

    #[test]
    fn test_row_columns_align_with_values() {
        let mut record = CleanedRecord::new();
        record.set(Field::WeChat, "wx_1");
        let row = ExtractedRow::new("a.docx", record);

        let pairs: Vec<_> = ExtractedRow::columns().zip(row.values()).collect();
        assert_eq!(pairs.len(), Field::COUNT + 1);
        assert_eq!(pairs[0], ("文件名", "a.docx"));
        assert!(pairs.contains(&("微信", "wx_1")));
    }

    #[test]
    fn test_deserialize_ignores_unknown_keys() {
        let record: CleanedRecord =
            serde_json::from_str(r#"{"姓名":"张三","籍贯":"杭州"}"#).unwrap();
        assert_eq!(record.get(Field::Name), "张三");
        assert_eq!(record.resolved_count(), 1);
    }
}
