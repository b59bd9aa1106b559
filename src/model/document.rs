//! Document-level types.

use super::{Block, Paragraph, Table};
use serde::{Deserialize, Serialize};

/// A document body read into blocks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Name of the source the document was read from
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub source: String,

    /// Direct children of the body, in document order
    pub blocks: Vec<Block>,
}

impl Document {
    /// Create a new empty document.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            blocks: Vec::new(),
        }
    }

    /// Add a block to the document.
    pub fn add_block(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Iterate over the table blocks in document order.
    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.blocks.iter().filter_map(Block::as_table)
    }

    /// Iterate over the top-level paragraphs in document order.
    pub fn paragraphs(&self) -> impl Iterator<Item = &Paragraph> {
        self.blocks.iter().filter_map(|b| match b {
            Block::Paragraph(p) => Some(p),
            _ => None,
        })
    }

    /// Get the number of tables.
    pub fn table_count(&self) -> usize {
        self.tables().count()
    }

    /// Check if the document has no blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Get plain text content of the entire document.
    pub fn plain_text(&self) -> String {
        self.blocks
            .iter()
            .map(Block::plain_text)
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_new() {
        let doc = Document::new("form.docx");
        assert!(doc.is_empty());
        assert_eq!(doc.table_count(), 0);
    }

    #[test]
    fn test_tables_keep_order() {
        let mut doc = Document::new("form.docx");
        doc.add_block(Block::Table(Table::from_strings(vec![vec!["A"]])));
        doc.add_block(Block::Paragraph(Paragraph::with_text("中间")));
        doc.add_block(Block::Table(Table::from_strings(vec![vec!["B"]])));

        let texts: Vec<_> = doc.tables().map(Table::plain_text).collect();
        assert_eq!(texts, vec!["A", "B"]);
        assert_eq!(doc.paragraphs().count(), 1);
        assert_eq!(doc.plain_text(), "A\n\n中间\n\nB");
    }
}
