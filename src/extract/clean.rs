//! Field cleaner: one normalized grid to one flat record.
//!
//! Cells are visited row-major. Each non-empty cell is tested against the
//! field keyword table in [`Field::ALL`] order; the first field the cell
//! resolves claims it. A field's value comes from, in order:
//!
//! 1. an inline `label：value` in the cell itself;
//! 2. the first non-label cell to the right, then below in the same column.
//!
//! The accept/decline field is read as a checkbox: glyphs in the matched
//! cell first, then the adjacent answer, then the inline value.

use regex::Regex;

use crate::model::{CleanedRecord, Field, NormalizedTable};

use super::checkbox::{interpret_checkbox, CHECKED_GLYPHS, UNCHECKED_GLYPHS};
use super::normalize::normalize_text;

/// Punctuation tolerated after a label keyword in a bare label cell.
pub const LABEL_SUFFIX_CHARS: &[char] = &[
    ':', '：', '-', '—', '_', '/', '.', ',', '(', ')', '[', ']', '（', '）', '·', '•',
];

fn is_label_prefix_char(ch: char) -> bool {
    CHECKED_GLYPHS.contains(&ch)
        || UNCHECKED_GLYPHS.contains(&ch)
        || LABEL_SUFFIX_CHARS.contains(&ch)
}

fn compact(text: &str) -> String {
    text.chars().filter(|c| *c != ' ').collect()
}

/// Find the first keyword (declared order) contained in the cell, ignoring
/// spaces on both sides.
pub fn match_field(text: &str, keywords: &[&'static str]) -> Option<&'static str> {
    let haystack = compact(text);
    keywords
        .iter()
        .copied()
        .find(|keyword| haystack.contains(compact(keyword).as_str()))
}

/// Extract `value` from `keyword：value` (half- or full-width colon).
pub fn extract_inline_value(text: &str, keyword: &str) -> Option<String> {
    let pattern = format!(r"{}\s*[:：]\s*(.+)", regex::escape(keyword));
    let re = Regex::new(&pattern).ok()?;
    let value = re.captures(text)?.get(1)?.as_str().trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Whether a cell reads as a bare label of some field.
///
/// After removing spaces and leading glyph/punctuation, the text must start
/// with a keyword and continue with nothing but [`LABEL_SUFFIX_CHARS`].
/// Keywords of `exempt` are not treated as labels.
pub fn is_bare_label(text: &str, exempt: Option<Field>) -> bool {
    let compacted = compact(text);
    let trimmed = compacted.trim_start_matches(is_label_prefix_char);
    if trimmed.is_empty() {
        return false;
    }

    Field::ALL
        .iter()
        .flat_map(|field| field.keywords().iter().copied())
        .filter(|keyword| !exempt.is_some_and(|f| f.keywords().contains(keyword)))
        .any(|keyword| {
            trimmed
                .strip_prefix(keyword)
                .is_some_and(|rest| rest.chars().all(|c| LABEL_SUFFIX_CHARS.contains(&c)))
        })
}

/// Normalized cells of one table during a cleaning pass.
struct Grid {
    rows: Vec<Vec<String>>,
}

impl Grid {
    fn new(table: &NormalizedTable) -> Self {
        let rows = table
            .cells
            .iter()
            .map(|row| row.iter().map(|cell| normalize_text(cell)).collect())
            .collect();
        Self { rows }
    }

    /// Right along the row, then down the column.
    fn infer_adjacent(&self, row: usize, col: usize, exempt: Option<Field>) -> Option<&str> {
        let accept = |candidate: &&str| !candidate.is_empty() && !is_bare_label(candidate, exempt);

        self.rows[row]
            .iter()
            .skip(col + 1)
            .map(String::as_str)
            .find(accept)
            .or_else(|| {
                self.rows
                    .iter()
                    .skip(row + 1)
                    .filter_map(|r| r.get(col))
                    .map(String::as_str)
                    .find(accept)
            })
    }

    /// The matched cell's own glyphs, then any adjacent non-label cell,
    /// then the inline value. Adjacent and inline answers without a
    /// recognizable state are kept verbatim.
    fn resolve_checkbox(
        &self,
        row: usize,
        col: usize,
        text: &str,
        inline: Option<String>,
    ) -> Option<String> {
        let own = interpret_checkbox(text);
        if !own.is_empty() {
            return Some(own.to_string());
        }

        if let Some(candidate) = self.infer_adjacent(row, col, None) {
            return Some(interpreted_or_raw(candidate));
        }

        inline.map(|value| interpreted_or_raw(&value))
    }

    fn resolve(&self, field: Field, keyword: &str, row: usize, col: usize) -> Option<String> {
        let text = &self.rows[row][col];
        let inline = extract_inline_value(text, keyword);

        if field.is_checkbox() {
            return self.resolve_checkbox(row, col, text, inline);
        }

        inline.or_else(|| self.infer_adjacent(row, col, Some(field)).map(str::to_string))
    }
}

fn interpreted_or_raw(text: &str) -> String {
    match interpret_checkbox(text) {
        "" => text.to_string(),
        state => state.to_string(),
    }
}

/// Clean one normalized table into a record.
///
/// Never fails: fields that cannot be resolved stay empty.
pub fn clean_table(table: &NormalizedTable) -> CleanedRecord {
    let grid = Grid::new(table);
    let mut record = CleanedRecord::new();

    for (r, row) in grid.rows.iter().enumerate() {
        for (c, text) in row.iter().enumerate() {
            if text.is_empty() {
                continue;
            }
            for field in Field::ALL {
                if record.is_resolved(field) {
                    continue;
                }
                let Some(keyword) = match_field(text, field.keywords()) else {
                    continue;
                };
                if let Some(value) = grid.resolve(field, keyword, r, c) {
                    log::trace!("cell ({}, {}) resolved {} = {:?}", r, c, field, value);
                    if record.set(field, value) {
                        break;
                    }
                }
            }
        }
    }

    record
}

/// Clean every table, one record per table.
pub fn clean_tables(tables: &[NormalizedTable]) -> Vec<CleanedRecord> {
    tables.iter().map(clean_table).collect()
}
