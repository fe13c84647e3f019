//! Fixed glyphs for categories whose payload is a single classification.

use crate::style::{EffectKind, GridPattern};

const INK: &str = "#333333";

pub(super) fn text_glyph() -> String {
    svg(&format!(
        r#"<text x="8" y="12" text-anchor="middle" font-family="sans-serif" font-size="10" fill="{INK}">Ag</text>"#
    ))
}

pub(super) fn effect_glyph(kind: EffectKind) -> String {
    let body = match kind {
        EffectKind::DropShadow => format!(
            r#"<rect x="4" y="4" width="9" height="9" rx="1" fill="{INK}" opacity="0.3" /><rect x="3" y="3" width="9" height="9" rx="1" fill="white" stroke="{INK}" />"#
        ),
        EffectKind::InnerShadow => format!(
            r#"<rect x="3" y="3" width="10" height="10" rx="1" fill="white" stroke="{INK}" /><path d="M4 4H12V6H6V12H4V4Z" fill="{INK}" opacity="0.3" />"#
        ),
        EffectKind::LayerBlur => format!(
            r#"<circle cx="8" cy="8" r="5" fill="{INK}" opacity="0.3" /><circle cx="8" cy="8" r="3" fill="{INK}" opacity="0.6" />"#
        ),
        EffectKind::BackgroundBlur => format!(
            r#"<rect x="3" y="3" width="10" height="10" rx="1" fill="{INK}" opacity="0.15" /><circle cx="8" cy="8" r="3" fill="{INK}" opacity="0.4" />"#
        ),
    };
    svg(&body)
}

pub(super) fn grid_glyph(pattern: GridPattern) -> String {
    let lines = match pattern {
        GridPattern::Grid => "M3 6H13M3 10H13M6 3V13M10 3V13",
        GridPattern::Rows => "M3 5H13M3 8H13M3 11H13",
        GridPattern::Columns => "M5 3V13M8 3V13M11 3V13",
    };
    svg(&format!(
        r#"<rect x="2.5" y="2.5" width="11" height="11" rx="1" stroke="{INK}" /><path d="{lines}" stroke="{INK}" opacity="0.6" />"#
    ))
}

pub(super) fn checkbox_glyph(checked: bool) -> String {
    if checked {
        svg(&format!(
            r#"<rect x="2" y="2" width="12" height="12" rx="2" fill="{INK}" /><path d="M5 8L7 10L11 6" stroke="white" stroke-width="1.5" />"#
        ))
    } else {
        svg(&format!(
            r#"<rect x="2.5" y="2.5" width="11" height="11" rx="2" stroke="{INK}" />"#
        ))
    }
}

fn svg(body: &str) -> String {
    format!(
        r#"<svg width="16" height="16" viewBox="0 0 16 16" fill="none" xmlns="http://www.w3.org/2000/svg">{body}</svg>"#
    )
}
