//! Live style objects as read from the host style catalog.
//!
//! These mirror what the host exposes for the open file and are never
//! persisted by the plugin. The serde shapes exist so catalog snapshots can be
//! loaded from JSON.

use serde::{Deserialize, Serialize};

use super::{EffectKind, GradientKind, GridPattern, Rgba};
use crate::ids::{LocalId, RemoteKey};

fn full_opacity() -> f64 {
    1.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaintStyle {
    pub id: LocalId,
    pub key: RemoteKey,
    pub name: String,
    #[serde(default)]
    pub paints: Vec<Paint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Paint {
    Solid {
        color: Rgba,
        #[serde(default = "full_opacity")]
        opacity: f64,
    },
    Image {
        #[serde(default = "full_opacity")]
        opacity: f64,
    },
    Video {
        #[serde(default = "full_opacity")]
        opacity: f64,
    },
    Gradient {
        kind: GradientKind,
        #[serde(default)]
        stops: Vec<ColorStop>,
        #[serde(default = "full_opacity")]
        opacity: f64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorStop {
    pub color: Rgba,
    pub position: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridStyle {
    pub id: LocalId,
    pub key: RemoteKey,
    pub name: String,
    /// Layout grids, top of the visual stack first.
    #[serde(default)]
    pub layout_grids: Vec<GridPattern>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EffectStyle {
    pub id: LocalId,
    pub key: RemoteKey,
    pub name: String,
    /// Effects, top of the visual stack first.
    #[serde(default)]
    pub effects: Vec<EffectKind>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub id: LocalId,
    pub key: RemoteKey,
    pub name: String,
    pub font_size: f64,
    pub line_height: LineHeight,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "unit", content = "value", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LineHeight {
    Auto,
    Pixels(f64),
    Percent(f64),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorVariable {
    pub id: LocalId,
    pub key: RemoteKey,
    pub name: String,
    pub resolved_type: VariableType,
    /// Values per mode, default mode first.
    #[serde(default)]
    pub values_by_mode: Vec<VariableValue>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VariableType {
    Color,
    Float,
    String,
    Boolean,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VariableValue {
    Color(Rgba),
    Alias(LocalId),
    Other,
}
