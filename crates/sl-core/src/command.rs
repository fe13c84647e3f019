//! Plugin command enumeration as declared in the host menu.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::style::StyleCategory;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Fill,
    Stroke,
    Text,
    Effect,
    Grid,
    /// Flip a library's membership in the file's active set.
    Toggle,
    /// Publish this file's styles as a library. Takes no parameter.
    Publish,
    /// Remove a stored library.
    Delete,
}

/// Node field a style command assigns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleField {
    Fill,
    Stroke,
    Text,
    Effect,
    Grid,
}

#[derive(Debug, thiserror::Error)]
#[error("invalid command: {0:?}")]
pub struct InvalidCommand(pub String);

impl Command {
    pub const ALL: [Command; 8] = [
        Command::Fill,
        Command::Stroke,
        Command::Text,
        Command::Effect,
        Command::Grid,
        Command::Toggle,
        Command::Publish,
        Command::Delete,
    ];

    /// Command and parameter key used by the host.
    pub fn key(self) -> &'static str {
        match self {
            Command::Fill => "fill",
            Command::Stroke => "stroke",
            Command::Text => "text",
            Command::Effect => "effect",
            Command::Grid => "grid",
            Command::Toggle => "toggle",
            Command::Publish => "publish",
            Command::Delete => "delete",
        }
    }

    pub fn style_field(self) -> Option<StyleField> {
        match self {
            Command::Fill => Some(StyleField::Fill),
            Command::Stroke => Some(StyleField::Stroke),
            Command::Text => Some(StyleField::Text),
            Command::Effect => Some(StyleField::Effect),
            Command::Grid => Some(StyleField::Grid),
            Command::Toggle | Command::Publish | Command::Delete => None,
        }
    }

    /// Style category offered while the command's parameter is typed.
    pub fn category(self) -> Option<StyleCategory> {
        self.style_field().map(StyleField::category)
    }
}

impl StyleField {
    pub fn category(self) -> StyleCategory {
        match self {
            StyleField::Fill | StyleField::Stroke => StyleCategory::Paint,
            StyleField::Text => StyleCategory::Text,
            StyleField::Effect => StyleCategory::Effect,
            StyleField::Grid => StyleCategory::Grid,
        }
    }

    /// Host property holding the style binding.
    pub fn property(self) -> &'static str {
        match self {
            StyleField::Fill => "fillStyleId",
            StyleField::Stroke => "strokeStyleId",
            StyleField::Text => "textStyleId",
            StyleField::Effect => "effectStyleId",
            StyleField::Grid => "gridStyleId",
        }
    }
}

impl FromStr for Command {
    type Err = InvalidCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Command::ALL
            .into_iter()
            .find(|command| command.key() == s)
            .ok_or_else(|| InvalidCommand(s.to_string()))
    }
}

impl Display for Command {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}
