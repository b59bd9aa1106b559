//! Parsing options and configuration.

/// Options for reading document markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Whether tracked-deletion text (`w:delText`) contributes to run text
    pub include_deleted_text: bool,

    /// Whether field instruction text (`w:instrText`) contributes to run text
    pub include_field_codes: bool,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Include or exclude tracked-deletion text.
    pub fn with_deleted_text(mut self, include: bool) -> Self {
        self.include_deleted_text = include;
        self
    }

    /// Include or exclude field instruction text.
    pub fn with_field_codes(mut self, include: bool) -> Self {
        self.include_field_codes = include;
        self
    }

    /// Keep only visible text (`w:t`, tabs and breaks).
    pub fn visible_text_only(self) -> Self {
        self.with_deleted_text(false).with_field_codes(false)
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            include_deleted_text: true,
            include_field_codes: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_options_builder() {
        let options = ParseOptions::new().with_deleted_text(false);
        assert!(!options.include_deleted_text);
        assert!(options.include_field_codes);
    }

    #[test]
    fn test_default_options() {
        let options = ParseOptions::default();
        assert!(options.include_deleted_text);
        assert!(options.include_field_codes);
        assert_eq!(
            ParseOptions::new().visible_text_only(),
            ParseOptions {
                include_deleted_text: false,
                include_field_codes: false,
            }
        );
    }
}
