//! Compact Style Codec: live host styles to [`StyleRecord`]s.
//!
//! Encoded records carry the globally resolvable key so they can be published.
//! [`EncodeStyle::encode_local`] rewrites that to the session-local id for
//! suggestions built from the open file.

use std::collections::HashSet;

use super::live::{
    ColorVariable, EffectStyle, GridStyle, LineHeight, Paint, PaintStyle, TextStyle, VariableType,
    VariableValue,
};
use super::{round_opacity, GradientStop, PaintLayer, Rgba, StylePayload, StyleRecord, TextMetrics};
use crate::ids::{LocalId, StyleRef};

/// Encoding for one live style type.
pub trait EncodeStyle {
    fn local_id(&self) -> &LocalId;

    fn name(&self) -> &str;

    /// Encodes with the remote key. `None` when the style has nothing to show
    /// (an empty grid or effect stack).
    fn encode(&self) -> Option<StyleRecord>;

    /// Encodes with the session-local id, marking the record as local.
    fn encode_local(&self) -> Option<StyleRecord> {
        self.encode()
            .map(|record| record.localized(self.local_id().clone()))
    }
}

impl EncodeStyle for PaintStyle {
    fn local_id(&self) -> &LocalId {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn encode(&self) -> Option<StyleRecord> {
        let layers = self.paints.iter().map(encode_paint).collect();
        Some(StyleRecord::new(
            StyleRef::Remote(self.key.clone()),
            self.name.clone(),
            StylePayload::Paint(layers),
        ))
    }
}

fn encode_paint(paint: &Paint) -> PaintLayer {
    match paint {
        Paint::Solid { color, opacity } => PaintLayer::Solid {
            color: color.to_css_opaque(),
            opacity: round_opacity(*opacity),
        },
        Paint::Image { opacity } => PaintLayer::Image {
            opacity: round_opacity(*opacity),
        },
        Paint::Video { opacity } => PaintLayer::Video {
            opacity: round_opacity(*opacity),
        },
        Paint::Gradient {
            kind,
            stops,
            opacity,
        } => PaintLayer::Gradient {
            kind: *kind,
            stops: stops
                .iter()
                .map(|stop| GradientStop {
                    color: stop.color.to_css(),
                    offset: stop.position,
                })
                .collect(),
            opacity: round_opacity(*opacity),
        },
    }
}

impl EncodeStyle for GridStyle {
    fn local_id(&self) -> &LocalId {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    /// The head of the stack is what the host shows as the style icon.
    fn encode(&self) -> Option<StyleRecord> {
        let Some(pattern) = self.layout_grids.first() else {
            #[cfg(feature = "tracing")]
            tracing::debug!(style = %self.name, "grid style has no layout grids, skipping");
            return None;
        };
        Some(StyleRecord::new(
            StyleRef::Remote(self.key.clone()),
            self.name.clone(),
            StylePayload::Grid(*pattern),
        ))
    }
}

impl EncodeStyle for EffectStyle {
    fn local_id(&self) -> &LocalId {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    /// The head of the stack is what the host shows as the style icon.
    fn encode(&self) -> Option<StyleRecord> {
        let Some(kind) = self.effects.first() else {
            #[cfg(feature = "tracing")]
            tracing::debug!(style = %self.name, "effect style has no effects, skipping");
            return None;
        };
        Some(StyleRecord::new(
            StyleRef::Remote(self.key.clone()),
            self.name.clone(),
            StylePayload::Effect(*kind),
        ))
    }
}

impl EncodeStyle for TextStyle {
    fn local_id(&self) -> &LocalId {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn encode(&self) -> Option<StyleRecord> {
        let line_height = match self.line_height {
            LineHeight::Auto => None,
            LineHeight::Pixels(value) | LineHeight::Percent(value) => Some(value.round() as i64),
        };
        let metrics = TextMetrics {
            font_size: self.font_size.round() as i64,
            line_height,
        };
        Some(StyleRecord::new(
            StyleRef::Remote(self.key.clone()),
            self.name.clone(),
            StylePayload::Text(metrics),
        ))
    }
}

/// Encodes a color variable as a paint record with one variable-bound layer.
///
/// `lookup` resolves alias targets by id.
pub fn encode_color_variable<F>(variable: &ColorVariable, lookup: F) -> StyleRecord
where
    F: Fn(&LocalId) -> Option<ColorVariable>,
{
    let color = resolve_variable_color(variable, lookup).unwrap_or(Rgba::FALLBACK_GRAY);
    StyleRecord::new(
        StyleRef::Remote(variable.key.clone()),
        variable.name.clone(),
        StylePayload::Paint(vec![PaintLayer::Variable {
            color: color.to_css_opaque(),
            opacity: round_opacity(color.a),
        }]),
    )
}

/// [`encode_color_variable`] with the session-local id.
pub fn encode_local_color_variable<F>(variable: &ColorVariable, lookup: F) -> StyleRecord
where
    F: Fn(&LocalId) -> Option<ColorVariable>,
{
    encode_color_variable(variable, lookup).localized(variable.id.clone())
}

/// Follows aliases from the default mode until a color is found.
///
/// Returns `None` for non-color variables, dangling aliases and alias cycles.
pub fn resolve_variable_color<F>(variable: &ColorVariable, lookup: F) -> Option<Rgba>
where
    F: Fn(&LocalId) -> Option<ColorVariable>,
{
    if variable.resolved_type != VariableType::Color {
        return None;
    }

    let mut visited = HashSet::from([variable.id.clone()]);
    let mut value = variable.values_by_mode.first().cloned();
    loop {
        match value? {
            VariableValue::Color(color) => return Some(color),
            VariableValue::Other => return None,
            VariableValue::Alias(target) => {
                if !visited.insert(target.clone()) {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(variable = %variable.name, alias = %target, "variable alias cycle");
                    return None;
                }
                value = lookup(&target).and_then(|aliased| aliased.values_by_mode.first().cloned());
            }
        }
    }
}
