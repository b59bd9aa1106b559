//! Canonical form fields and their keyword variants.

use serde::{Serialize, Serializer};

/// A canonical output field.
///
/// [`Field::ALL`] is the field keyword table: its order is the per-cell
/// iteration order of the cleaner and the key order of every record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    /// 姓名
    Name,
    /// 性别
    Gender,
    /// 出生年月
    BirthDate,
    /// 政治面貌
    PoliticalStatus,
    /// 所在分院
    College,
    /// 班级
    Class,
    /// 学号
    StudentId,
    /// 现（曾） 任职务
    CurrentPosition,
    /// 第一志愿
    FirstChoice,
    /// 第二志愿
    SecondChoice,
    /// 联系方式
    Contact,
    /// 微信
    WeChat,
    /// 何时何地曾担任何职务
    PastPositions,
    /// 曾获奖项及获奖时间
    Awards,
    /// 个人优势分析及简要工作设想
    StrengthsAndPlans,
    /// 服从分配
    AcceptsReassignment,
}

impl Field {
    /// Number of canonical fields.
    pub const COUNT: usize = 16;

    /// All fields in table order.
    pub const ALL: [Field; Field::COUNT] = [
        Field::Name,
        Field::Gender,
        Field::BirthDate,
        Field::PoliticalStatus,
        Field::College,
        Field::Class,
        Field::StudentId,
        Field::CurrentPosition,
        Field::FirstChoice,
        Field::SecondChoice,
        Field::Contact,
        Field::WeChat,
        Field::PastPositions,
        Field::Awards,
        Field::StrengthsAndPlans,
        Field::AcceptsReassignment,
    ];

    /// Position of the field in [`Field::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Canonical output name.
    pub fn name(self) -> &'static str {
        match self {
            Field::Name => "姓名",
            Field::Gender => "性别",
            Field::BirthDate => "出生年月",
            Field::PoliticalStatus => "政治面貌",
            Field::College => "所在分院",
            Field::Class => "班级",
            Field::StudentId => "学号",
            Field::CurrentPosition => "现（曾） 任职务",
            Field::FirstChoice => "第一志愿",
            Field::SecondChoice => "第二志愿",
            Field::Contact => "联系方式",
            Field::WeChat => "微信",
            Field::PastPositions => "何时何地曾担任何职务",
            Field::Awards => "曾获奖项及获奖时间",
            Field::StrengthsAndPlans => "个人优势分析及简要工作设想",
            Field::AcceptsReassignment => "服从分配",
        }
    }

    /// Keyword variants in declared order. The first one found in a cell is
    /// the matched keyword.
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Field::Name => &["姓名"],
            Field::Gender => &["性别"],
            Field::BirthDate => &["出生年月", "出生"],
            Field::PoliticalStatus => &["政治面貌"],
            Field::College => &["所在分院", "分院"],
            Field::Class => &["班级"],
            Field::StudentId => &["学号"],
            Field::CurrentPosition => &["现任职务", "曾任职", "任职", "现任", "曾任"],
            Field::FirstChoice => &["第一志愿"],
            Field::SecondChoice => &["第二志愿"],
            Field::Contact => &["联系方式", "联系电话", "手机", "电话", "手机号"],
            Field::WeChat => &["微信"],
            Field::PastPositions => &["何时何地曾担任何职务", "何时何地"],
            Field::Awards => &["曾获奖项", "曾获", "奖项", "获奖"],
            Field::StrengthsAndPlans => &["个人优势", "工作设想", "优势分析"],
            Field::AcceptsReassignment => &["服从分配", "服从调剂"],
        }
    }

    /// Whether the field is answered with a checkbox.
    pub fn is_checkbox(self) -> bool {
        matches!(self, Field::AcceptsReassignment)
    }

    /// Look up a field by its canonical name.
    pub fn from_name(name: &str) -> Option<Field> {
        Field::ALL.iter().copied().find(|f| f.name() == name)
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Field {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_indices_match_order() {
        for (i, field) in Field::ALL.iter().enumerate() {
            assert_eq!(field.index(), i);
        }
    }

    #[test]
    fn test_names_unique_and_round_trip() {
        for field in Field::ALL {
            assert_eq!(Field::from_name(field.name()), Some(field));
        }
        assert_eq!(Field::from_name("籍贯"), None);
    }

    #[test]
    fn test_every_field_has_keywords() {
        assert!(Field::ALL.iter().all(|f| !f.keywords().is_empty()));
        assert_eq!(Field::BirthDate.keywords()[0], "出生年月");
    }

    #[test]
    fn test_only_reassignment_is_checkbox() {
        let checkboxes: Vec<_> = Field::ALL.iter().filter(|f| f.is_checkbox()).collect();
        assert_eq!(checkboxes, vec![&Field::AcceptsReassignment]);
    }
}
