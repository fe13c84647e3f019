use std::fmt::{Display, Formatter};

/// Style category. Fixed at four; the wire codes below are persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StyleCategory {
    Paint,
    Grid,
    Effect,
    Text,
}

impl StyleCategory {
    pub const ALL: [StyleCategory; 4] = [
        StyleCategory::Paint,
        StyleCategory::Grid,
        StyleCategory::Effect,
        StyleCategory::Text,
    ];

    pub fn code(self) -> u8 {
        match self {
            StyleCategory::Paint => 0,
            StyleCategory::Grid => 1,
            StyleCategory::Effect => 2,
            StyleCategory::Text => 3,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(StyleCategory::Paint),
            1 => Some(StyleCategory::Grid),
            2 => Some(StyleCategory::Effect),
            3 => Some(StyleCategory::Text),
            _ => None,
        }
    }

    /// Field name of this category inside a persisted library entry.
    pub fn field_name(self) -> &'static str {
        match self {
            StyleCategory::Paint => "paint",
            StyleCategory::Grid => "grid",
            StyleCategory::Effect => "effect",
            StyleCategory::Text => "text",
        }
    }
}

impl Display for StyleCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.field_name())
    }
}
