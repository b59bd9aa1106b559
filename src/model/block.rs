//! Block-level types.

use super::{Paragraph, Table};
use serde::{Deserialize, Serialize};

/// A content block in the document body, in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// A paragraph of text
    Paragraph(Paragraph),

    /// A table
    Table(Table),
}

impl Block {
    /// Check if this block is a paragraph.
    pub fn is_paragraph(&self) -> bool {
        matches!(self, Block::Paragraph(_))
    }

    /// Check if this block is a table.
    pub fn is_table(&self) -> bool {
        matches!(self, Block::Table(_))
    }

    /// Get the table, if this block is one.
    pub fn as_table(&self) -> Option<&Table> {
        match self {
            Block::Table(t) => Some(t),
            _ => None,
        }
    }

    /// Get plain text content of the block.
    pub fn plain_text(&self) -> String {
        match self {
            Block::Paragraph(p) => p.text.clone(),
            Block::Table(t) => t.plain_text(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_variants() {
        let para = Block::Paragraph(Paragraph::with_text("报名表"));
        assert!(para.is_paragraph());
        assert!(para.as_table().is_none());

        let table = Block::Table(Table::from_strings(vec![vec!["姓名"]]));
        assert!(table.is_table());
        assert_eq!(table.as_table().map(|t| t.row_count), Some(1));
    }

    #[test]
    fn test_block_serde_tag() {
        let block = Block::Paragraph(Paragraph::with_text("x"));
        let json = serde_json::to_string(&block).unwrap();
        assert!(json.contains("\"type\":\"paragraph\""));
    }
}
