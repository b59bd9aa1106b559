//! Table normalization and field cleaning.
//!
//! ```
//! use unform::extract::{clean_table, normalize_table};
//! use unform::model::{Field, Table};
//!
//! let table = Table::from_strings(vec![vec!["姓名", "张三", "性别", "男", ""]]);
//! let grid = normalize_table(&table);
//! let record = clean_table(&grid);
//!
//! assert_eq!(record.get(Field::Name), "张三");
//! assert_eq!(record.get(Field::Gender), "男");
//! ```

mod checkbox;
mod clean;
mod normalize;

pub use checkbox::{
    check_state, interpret_checkbox, is_checked_text, CheckState, ACCEPTED, ACCEPT_LITERALS,
    CHECKBOX_LABEL_KEYWORDS, CHECKED_GLYPHS, DECLINED, DECLINE_LITERALS, FILLED_MARKERS,
    UNCHECKED_GLYPHS,
};
pub use clean::{
    clean_table, clean_tables, extract_inline_value, is_bare_label, match_field,
    LABEL_SUFFIX_CHARS,
};
pub use normalize::{
    extract_tables, normalize_table, normalize_text, normalized_cell_text, trim_trailing_empty,
};
