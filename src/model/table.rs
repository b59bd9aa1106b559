//! Table types.

use super::Paragraph;
use serde::{Deserialize, Serialize};

/// A table as read from the document, one entry per `w:tc` cell.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// Number of rows
    pub row_count: usize,

    /// Maximum number of cells in any row
    pub column_count: usize,

    /// Rows of cells
    pub rows: Vec<Vec<TableCell>>,
}

impl Table {
    /// Create a new empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table from rows, computing the row and column counts.
    pub fn from_rows(rows: Vec<Vec<TableCell>>) -> Self {
        let column_count = rows.iter().map(Vec::len).max().unwrap_or(0);
        Self {
            row_count: rows.len(),
            column_count,
            rows,
        }
    }

    /// Create a table from text values, one paragraph per cell.
    pub fn from_strings<R, S>(rows: impl IntoIterator<Item = R>) -> Self
    where
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_rows(
            rows.into_iter()
                .map(|row| row.into_iter().map(TableCell::text).collect())
                .collect(),
        )
    }

    /// Check if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get plain text representation of the table.
    pub fn plain_text(&self) -> String {
        self.rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|c| c.text.as_str())
                    .collect::<Vec<_>>()
                    .join("\t")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// A table cell.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableCell {
    /// Cell content (direct child paragraphs)
    pub paragraphs: Vec<Paragraph>,

    /// Newline-joined text of the non-empty paragraphs, trimmed
    pub text: String,
}

impl TableCell {
    /// Create a cell from its paragraphs.
    pub fn with_paragraphs(paragraphs: Vec<Paragraph>) -> Self {
        let text = paragraphs
            .iter()
            .filter(|p| !p.is_empty())
            .map(|p| p.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
            .trim()
            .to_string();
        Self { paragraphs, text }
    }

    /// Create a cell holding a single paragraph of text.
    pub fn text(text: impl Into<String>) -> Self {
        Self::with_paragraphs(vec![Paragraph::with_text(text)])
    }

    /// Create an empty cell.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Check if the cell has no text.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// A table reduced to a grid of normalized cell strings.
///
/// Rows keep interior empty cells but lose trailing ones, so rows may differ
/// in length. `column_count` is measured before trimming.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedTable {
    /// Number of rows
    pub row_count: usize,

    /// Maximum row length before trailing-empty trimming
    pub column_count: usize,

    /// Normalized cell text, row-major
    pub cells: Vec<Vec<String>>,
}

impl NormalizedTable {
    /// Create a grid from already normalized rows.
    pub fn from_rows(cells: Vec<Vec<String>>) -> Self {
        let column_count = cells.iter().map(Vec::len).max().unwrap_or(0);
        Self {
            row_count: cells.len(),
            column_count,
            cells,
        }
    }

    /// Check if the grid has no rows.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Get the cell at (row, column), if present.
    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.cells
            .get(row)
            .and_then(|r| r.get(column))
            .map(String::as_str)
    }
}
