//! Paragraph type.

use serde::{Deserialize, Serialize};

/// A paragraph of text content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Paragraph style id (`w:pStyle`), if any
    pub style: Option<String>,

    /// Concatenated text of the paragraph
    pub text: String,

    /// Text of each text-bearing run, in source order
    pub runs: Vec<String>,
}

impl Paragraph {
    /// Create a new empty paragraph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a paragraph with plain text held in a single run.
    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let runs = if text.is_empty() {
            Vec::new()
        } else {
            vec![text.clone()]
        };
        Self {
            style: None,
            text,
            runs,
        }
    }

    /// Build a paragraph from run texts; empty runs are dropped.
    pub fn from_runs<S: Into<String>>(runs: impl IntoIterator<Item = S>) -> Self {
        let runs: Vec<String> = runs
            .into_iter()
            .map(Into::into)
            .filter(|r| !r.is_empty())
            .collect();
        Self {
            style: None,
            text: runs.concat(),
            runs,
        }
    }

    /// Set the style and return self.
    pub fn styled(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    /// Check if the paragraph carries no text.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_runs() {
        let p = Paragraph::from_runs(["姓名", "", "：张三"]);
        assert_eq!(p.text, "姓名：张三");
        assert_eq!(p.runs.len(), 2);
    }

    #[test]
    fn test_with_text_empty() {
        let p = Paragraph::with_text("");
        assert!(p.is_empty());
        assert!(p.runs.is_empty());
    }

    #[test]
    fn test_styled() {
        let p = Paragraph::with_text("报名表").styled("Title");
        assert_eq!(p.style.as_deref(), Some("Title"));
    }
}
