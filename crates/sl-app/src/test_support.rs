//! Shared fixtures for use case tests.

use sl_core::ids::{LocalId, RemoteKey};
use sl_core::ports::ClockPort;
use sl_core::style::live::{LineHeight, Paint, PaintStyle, TextStyle};
use sl_core::style::Rgba;

pub struct FixedClock(pub i64);

impl ClockPort for FixedClock {
    fn now_ms(&self) -> i64 {
        self.0
    }
}

/// Solid red paint style whose key is `key-{id}`.
pub fn paint_style(id: &str, name: &str) -> PaintStyle {
    PaintStyle {
        id: LocalId::new(id),
        key: RemoteKey::new(format!("key-{id}")),
        name: name.to_string(),
        paints: vec![Paint::Solid {
            color: Rgba::rgb(1.0, 0.0, 0.0),
            opacity: 1.0,
        }],
    }
}

/// 16px text with 24px line height whose key is `key-{id}`.
pub fn text_style(id: &str, name: &str) -> TextStyle {
    TextStyle {
        id: LocalId::new(id),
        key: RemoteKey::new(format!("key-{id}")),
        name: name.to_string(),
        font_size: 16.0,
        line_height: LineHeight::Pixels(24.0),
    }
}
