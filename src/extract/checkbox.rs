//! Checkbox interpretation for accept/decline fields.
//!
//! All predicates are plain set membership over characters. The glyph sets
//! are pairwise disjoint.

use serde::{Deserialize, Serialize};

/// Glyphs rendered for a ticked box.
pub const CHECKED_GLYPHS: &[char] = &['☑', '☒', '✓', '✔', '√', '■', '●', '▣', '◆', '▲'];

/// Glyphs rendered for an empty box.
pub const UNCHECKED_GLYPHS: &[char] = &['☐', '□', '▢', '◻'];

/// Secondary tier: filled markers that only count inside short answers
/// written with CJK punctuation, e.g. `（◉）`.
pub const FILLED_MARKERS: &[char] = &['◼', '⬛', '◉', '⦿', '◙'];

/// Short literal answers meaning "yes".
pub const ACCEPT_LITERALS: &[&str] = &["是", "同意", "接受"];

/// Short literal answers meaning "no".
pub const DECLINE_LITERALS: &[&str] = &["否", "不同意", "不接受"];

/// Label words of the accept/decline question itself.
pub const CHECKBOX_LABEL_KEYWORDS: &[&str] = &["服从调剂", "服从分配", "调剂", "分配"];

const LITERAL_MAX_CHARS: usize = 3;
const FILLED_MARKER_MAX_CHARS: usize = 4;

/// Output value for a ticked accept/decline field.
pub const ACCEPTED: &str = "是";

/// Output value for an unticked accept/decline field.
pub const DECLINED: &str = "否";

/// Interpreted state of a checkbox answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckState {
    /// A checked glyph or an affirmative literal
    Checked,
    /// An unchecked glyph or a negative literal
    Unchecked,
    /// Nothing recognizable
    #[default]
    Unknown,
}

impl CheckState {
    /// Record value for this state (`是`, `否` or empty).
    pub fn as_value(self) -> &'static str {
        match self {
            CheckState::Checked => ACCEPTED,
            CheckState::Unchecked => DECLINED,
            CheckState::Unknown => "",
        }
    }
}

/// Classify a checkbox answer.
///
/// Tiers, first hit wins:
/// 1. the first checked or unchecked glyph in scan order;
/// 2. short literals (`是`/`同意`/`接受`, `否`/`不同意`/`不接受`);
/// 3. the question's own label text is never an answer;
/// 4. a filled marker in a short answer containing CJK punctuation.
pub fn check_state(text: &str) -> CheckState {
    let t = text.trim();
    if t.is_empty() {
        return CheckState::Unknown;
    }

    for ch in t.chars() {
        if CHECKED_GLYPHS.contains(&ch) {
            return CheckState::Checked;
        }
        if UNCHECKED_GLYPHS.contains(&ch) {
            return CheckState::Unchecked;
        }
    }

    let len = t.chars().count();
    if len <= LITERAL_MAX_CHARS {
        if ACCEPT_LITERALS.contains(&t) {
            return CheckState::Checked;
        }
        if DECLINE_LITERALS.contains(&t) {
            return CheckState::Unchecked;
        }
    }

    if CHECKBOX_LABEL_KEYWORDS.iter().any(|k| t.contains(k)) {
        return CheckState::Unknown;
    }

    if len <= FILLED_MARKER_MAX_CHARS
        && t.chars().any(is_cjk_punctuation)
        && t.chars().any(|ch| FILLED_MARKERS.contains(&ch))
    {
        return CheckState::Checked;
    }

    CheckState::Unknown
}

/// Whether the text reads as a ticked answer.
pub fn is_checked_text(text: &str) -> bool {
    check_state(text) == CheckState::Checked
}

/// Map a checkbox answer to `是`, `否`, or empty when unrecognized.
pub fn interpret_checkbox(text: &str) -> &'static str {
    check_state(text).as_value()
}

fn is_cjk_punctuation(ch: char) -> bool {
    !ch.is_alphanumeric()
        && !ch.is_whitespace()
        && matches!(ch, '\u{3000}'..='\u{303F}' | '\u{FF00}'..='\u{FFEF}')
}
