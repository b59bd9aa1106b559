//! Plain text rendering for debug output.

use crate::model::{CleanedRecord, NormalizedTable};

const EMPTY_CELL: &str = "(empty)";
const CELL_SEPARATOR: &str = " | ";
const RECORD_SEPARATOR: &str = "---";

/// Render a normalized table as a readable grid.
pub fn render_table_grid(table: &NormalizedTable) -> String {
    let mut output = format!("{} rows × {} cols\n", table.row_count, table.column_count);

    for row in &table.cells {
        let line = row
            .iter()
            .map(|cell| if cell.is_empty() { EMPTY_CELL } else { cell.as_str() })
            .collect::<Vec<_>>()
            .join(CELL_SEPARATOR);
        output.push_str(&line);
        output.push('\n');
    }

    output
}

/// Render every table, numbered from 1.
pub fn render_tables(tables: &[NormalizedTable]) -> String {
    tables
        .iter()
        .enumerate()
        .map(|(i, table)| format!("Table {}: {}", i + 1, render_table_grid(table)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render records as `Entry N` blocks of `field: value` lines.
pub fn render_records(records: &[CleanedRecord]) -> String {
    let mut output = String::new();

    for (i, record) in records.iter().enumerate() {
        output.push_str(&format!("Entry {}\n", i + 1));
        for (field, value) in record.iter() {
            output.push_str(&format!("  {}: {}\n", field, value));
        }
        output.push_str(RECORD_SEPARATOR);
        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Field;

    #[test]
    fn test_render_table_grid() {
        let table = NormalizedTable::from_rows(vec![
            vec!["姓名".into(), "".into(), "张三".into()],
            vec!["性别".into()],
        ]);
        let text = render_table_grid(&table);

        assert!(text.starts_with("2 rows × 3 cols\n"));
        assert!(text.contains("姓名 | (empty) | 张三\n"));
        assert!(text.ends_with("性别\n"));
    }

    #[test]
    fn test_render_tables_numbers_from_one() {
        let tables = vec![NormalizedTable::default(), NormalizedTable::default()];
        let text = render_tables(&tables);
        assert!(text.starts_with("Table 1: 0 rows × 0 cols"));
        assert!(text.contains("Table 2: 0 rows × 0 cols"));
    }

    #[test]
    fn test_render_records() {
        let mut record = CleanedRecord::new();
        record.set(Field::Gender, "女");

        let text = render_records(&[record]);
        assert!(text.starts_with("Entry 1\n  姓名: \n"));
        assert!(text.contains("  性别: 女\n"));
        assert!(text.ends_with("---\n"));
        assert_eq!(text.lines().count(), Field::COUNT + 2);
    }
}
