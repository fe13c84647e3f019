//! Preview Glyph Renderer.
//!
//! Pure functions from a [`StyleRecord`] to a 16x16 SVG string shown next to
//! each suggestion. Output is only ever held for the current input session.

mod glyphs;
mod paint;

use crate::style::{StylePayload, StyleRecord};

/// Renders the preview glyph for a record.
pub fn render(record: &StyleRecord) -> String {
    render_payload(&record.payload)
}

pub fn render_payload(payload: &StylePayload) -> String {
    match payload {
        StylePayload::Paint(layers) => paint::render_paint(layers),
        StylePayload::Grid(pattern) => glyphs::grid_glyph(*pattern),
        StylePayload::Effect(kind) => glyphs::effect_glyph(*kind),
        StylePayload::Text(_) => glyphs::text_glyph(),
    }
}

/// Checkbox shown next to a library in the toggle list.
pub fn checkbox(checked: bool) -> String {
    glyphs::checkbox_glyph(checked)
}
