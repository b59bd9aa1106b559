//! Table normalizer: table blocks to grids of trimmed strings.

use regex::Regex;
use std::sync::OnceLock;

use crate::model::{Document, NormalizedTable, Table, TableCell};

fn whitespace_run() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("whitespace pattern is valid"))
}

/// Collapse every whitespace run (newlines, tabs, ideographic spaces
/// included) to a single space and trim both ends.
pub fn normalize_text(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }
    whitespace_run().replace_all(value, " ").trim().to_string()
}

/// Normalized text of one cell.
///
/// Falls back to the cell's paragraphs when the flattened text is empty.
pub fn normalized_cell_text(cell: &TableCell) -> String {
    if !cell.text.is_empty() {
        return normalize_text(&cell.text);
    }
    let joined = cell
        .paragraphs
        .iter()
        .filter(|p| !p.is_empty())
        .map(|p| p.text.as_str())
        .collect::<Vec<_>>()
        .join("\n");
    normalize_text(&joined)
}

/// Drop empty cells from the end of a row; interior empties stay.
pub fn trim_trailing_empty(mut cells: Vec<String>) -> Vec<String> {
    while cells.last().is_some_and(String::is_empty) {
        cells.pop();
    }
    cells
}

/// Normalize one table into a grid.
///
/// `column_count` is the widest row as read, before trimming.
pub fn normalize_table(table: &Table) -> NormalizedTable {
    let column_count = table.rows.iter().map(Vec::len).max().unwrap_or(0);
    let cells: Vec<Vec<String>> = table
        .rows
        .iter()
        .map(|row| trim_trailing_empty(row.iter().map(normalized_cell_text).collect()))
        .collect();

    NormalizedTable {
        row_count: cells.len(),
        column_count,
        cells,
    }
}

/// Normalize every table block of a document, in document order.
pub fn extract_tables(document: &Document) -> Vec<NormalizedTable> {
    let tables: Vec<NormalizedTable> = document.tables().map(normalize_table).collect();
    log::debug!("{}: normalized {} tables", document.source, tables.len());
    tables
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Block, Paragraph};

    #[test]
    fn test_normalize_text() {
        assert_eq!(normalize_text("  个人\n优势\t\t分析 "), "个人 优势 分析");
        assert_eq!(normalize_text("姓\u{3000}名"), "姓 名");
        assert_eq!(normalize_text(""), "");
        assert_eq!(normalize_text(" \n "), "");
    }

    #[test]
    fn test_trailing_empty_trimming() {
        let table = Table::from_strings(vec![vec!["姓名", "张三", "", ""]]);
        let grid = normalize_table(&table);
        assert_eq!(grid.cells, vec![vec!["姓名".to_string(), "张三".to_string()]]);
        assert_eq!(grid.column_count, 4);
    }

    #[test]
    fn test_interior_empty_cells_preserved() {
        let table = Table::from_strings(vec![vec!["姓名", "", "性别", "男"]]);
        let grid = normalize_table(&table);
        assert_eq!(grid.cells[0], vec!["姓名", "", "性别", "男"]);
    }

    #[test]
    fn test_empty_table() {
        let grid = normalize_table(&Table::new());
        assert_eq!(grid, NormalizedTable::default());
        assert_eq!(grid.row_count, 0);
        assert_eq!(grid.column_count, 0);
    }

    #[test]
    fn test_all_empty_row_becomes_empty() {
        let table = Table::from_strings(vec![vec!["", " "], vec!["学号"]]);
        let grid = normalize_table(&table);
        assert_eq!(grid.row_count, 2);
        assert!(grid.cells[0].is_empty());
        assert_eq!(grid.cells[1], vec!["学号"]);
    }

    #[test]
    fn test_cell_falls_back_to_paragraphs() {
        let cell = TableCell {
            paragraphs: vec![Paragraph::with_text("第一志愿"), Paragraph::with_text("宣传部")],
            text: String::new(),
        };
        assert_eq!(normalized_cell_text(&cell), "第一志愿 宣传部");
    }

    #[test]
    fn test_extract_tables_skips_paragraphs() {
        let mut doc = Document::new("form.docx");
        doc.add_block(Block::Paragraph(Paragraph::with_text("报名表")));
        doc.add_block(Block::Table(Table::from_strings(vec![vec!["姓名"]])));
        doc.add_block(Block::Table(Table::from_strings(vec![vec!["学号"]])));

        let tables = extract_tables(&doc);
        assert_eq!(tables.len(), 2);
        assert_eq!(tables[1].cells[0][0], "学号");
    }
}
