//! Category-specific payloads carried by a [`StyleRecord`](super::StyleRecord).

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::StyleCategory;

#[derive(Debug, Clone, PartialEq)]
pub enum StylePayload {
    /// Paint layers in host stack order.
    Paint(Vec<PaintLayer>),
    /// Head of the layout-grid stack.
    Grid(GridPattern),
    /// Head of the effect stack.
    Effect(EffectKind),
    Text(TextMetrics),
}

impl StylePayload {
    pub fn category(&self) -> StyleCategory {
        match self {
            StylePayload::Paint(_) => StyleCategory::Paint,
            StylePayload::Grid(_) => StyleCategory::Grid,
            StylePayload::Effect(_) => StyleCategory::Effect,
            StylePayload::Text(_) => StyleCategory::Text,
        }
    }
}

/// Paint layer kind. Codes are persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaintKind {
    Solid,
    Image,
    Video,
    Variable,
    GradientRadial,
    GradientDiamond,
    GradientLinear,
    GradientAngular,
}

impl PaintKind {
    pub fn code(self) -> u8 {
        match self {
            PaintKind::Solid => 0,
            PaintKind::Image => 1,
            PaintKind::Video => 2,
            PaintKind::Variable => 3,
            PaintKind::GradientRadial => 4,
            PaintKind::GradientDiamond => 5,
            PaintKind::GradientLinear => 6,
            PaintKind::GradientAngular => 7,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Some(match code {
            0 => PaintKind::Solid,
            1 => PaintKind::Image,
            2 => PaintKind::Video,
            3 => PaintKind::Variable,
            4 => PaintKind::GradientRadial,
            5 => PaintKind::GradientDiamond,
            6 => PaintKind::GradientLinear,
            7 => PaintKind::GradientAngular,
            _ => return None,
        })
    }

    pub fn gradient(self) -> Option<GradientKind> {
        match self {
            PaintKind::GradientRadial => Some(GradientKind::Radial),
            PaintKind::GradientDiamond => Some(GradientKind::Diamond),
            PaintKind::GradientLinear => Some(GradientKind::Linear),
            PaintKind::GradientAngular => Some(GradientKind::Angular),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GradientKind {
    Linear,
    Radial,
    Angular,
    Diamond,
}

impl GradientKind {
    pub fn paint_kind(self) -> PaintKind {
        match self {
            GradientKind::Linear => PaintKind::GradientLinear,
            GradientKind::Radial => PaintKind::GradientRadial,
            GradientKind::Angular => PaintKind::GradientAngular,
            GradientKind::Diamond => PaintKind::GradientDiamond,
        }
    }

    /// Radial and diamond gradients preview as radial; linear and angular as linear.
    pub fn is_radial(self) -> bool {
        matches!(self, GradientKind::Radial | GradientKind::Diamond)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GradientStop {
    pub color: String,
    pub offset: f64,
}

/// One compact paint layer.
#[derive(Debug, Clone, PartialEq)]
pub enum PaintLayer {
    Solid { color: String, opacity: f64 },
    /// Fill bound to a color variable; `color` is the resolved value.
    Variable { color: String, opacity: f64 },
    Image { opacity: f64 },
    Video { opacity: f64 },
    Gradient {
        kind: GradientKind,
        stops: Vec<GradientStop>,
        opacity: f64,
    },
}

impl PaintLayer {
    pub fn kind(&self) -> PaintKind {
        match self {
            PaintLayer::Solid { .. } => PaintKind::Solid,
            PaintLayer::Variable { .. } => PaintKind::Variable,
            PaintLayer::Image { .. } => PaintKind::Image,
            PaintLayer::Video { .. } => PaintKind::Video,
            PaintLayer::Gradient { kind, .. } => kind.paint_kind(),
        }
    }

    pub fn opacity(&self) -> f64 {
        match self {
            PaintLayer::Solid { opacity, .. }
            | PaintLayer::Variable { opacity, .. }
            | PaintLayer::Image { opacity }
            | PaintLayer::Video { opacity }
            | PaintLayer::Gradient { opacity, .. } => *opacity,
        }
    }
}

/// Layout-grid pattern. Codes are persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GridPattern {
    Grid,
    Rows,
    Columns,
}

impl GridPattern {
    pub fn code(self) -> u8 {
        match self {
            GridPattern::Grid => 0,
            GridPattern::Rows => 1,
            GridPattern::Columns => 2,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(GridPattern::Grid),
            1 => Some(GridPattern::Rows),
            2 => Some(GridPattern::Columns),
            _ => None,
        }
    }
}

/// Effect type. Codes are persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EffectKind {
    DropShadow,
    InnerShadow,
    LayerBlur,
    BackgroundBlur,
}

impl EffectKind {
    pub fn code(self) -> u8 {
        match self {
            EffectKind::DropShadow => 0,
            EffectKind::InnerShadow => 1,
            EffectKind::LayerBlur => 2,
            EffectKind::BackgroundBlur => 3,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(EffectKind::DropShadow),
            1 => Some(EffectKind::InnerShadow),
            2 => Some(EffectKind::LayerBlur),
            3 => Some(EffectKind::BackgroundBlur),
            _ => None,
        }
    }
}

/// Rounded font size and line height, written as `"16/24"` or `"16/Auto"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextMetrics {
    pub font_size: i64,
    /// `None` for automatic line height.
    pub line_height: Option<i64>,
}

impl Display for TextMetrics {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.line_height {
            Some(line_height) => write!(f, "{}/{}", self.font_size, line_height),
            None => write!(f, "{}/Auto", self.font_size),
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("invalid text metrics: {0:?}")]
pub struct InvalidTextMetrics(pub String);

impl FromStr for TextMetrics {
    type Err = InvalidTextMetrics;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidTextMetrics(s.to_string());
        let (size, line_height) = s.split_once('/').ok_or_else(invalid)?;
        let font_size = size.parse().map_err(|_| invalid())?;
        let line_height = match line_height {
            "Auto" => None,
            other => Some(other.parse().map_err(|_| invalid())?),
        };
        Ok(Self {
            font_size,
            line_height,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_metrics_display() {
        let fixed = TextMetrics {
            font_size: 16,
            line_height: Some(24),
        };
        let auto = TextMetrics {
            font_size: 12,
            line_height: None,
        };
        assert_eq!(fixed.to_string(), "16/24");
        assert_eq!(auto.to_string(), "12/Auto");
    }

    #[test]
    fn test_text_metrics_parse() {
        let parsed: TextMetrics = "12/Auto".parse().unwrap();
        assert_eq!(parsed.line_height, None);
        assert!("12".parse::<TextMetrics>().is_err());
        assert!("a/12".parse::<TextMetrics>().is_err());
    }

    #[test]
    fn test_paint_kind_gradient_mapping() {
        for kind in [
            GradientKind::Linear,
            GradientKind::Radial,
            GradientKind::Angular,
            GradientKind::Diamond,
        ] {
            assert_eq!(kind.paint_kind().gradient(), Some(kind));
        }
        assert_eq!(PaintKind::Solid.gradient(), None);
    }
}
