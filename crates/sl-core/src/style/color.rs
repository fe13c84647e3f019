//! Color normalization into the compact CSS-like form stored in records.

use serde::{Deserialize, Serialize};

/// Host color with channels in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    #[serde(default = "opaque")]
    pub a: f64,
}

fn opaque() -> f64 {
    1.0
}

impl Rgba {
    /// Neutral gray used when a variable has no usable color value.
    pub const FALLBACK_GRAY: Rgba = Rgba::rgb(0.49, 0.49, 0.49);

    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// `rgb(r,g,b)` with 0-255 channels, plus a 2-decimal alpha when not opaque.
    pub fn to_css(&self) -> String {
        let (r, g, b) = (to_256(self.r), to_256(self.g), to_256(self.b));
        if self.a >= 1.0 {
            format!("rgb({r},{g},{b})")
        } else {
            format!("rgb({r},{g},{b},{})", round_opacity(self.a))
        }
    }

    /// Same as [`Rgba::to_css`] with alpha dropped; paint opacity is stored separately.
    pub fn to_css_opaque(&self) -> String {
        Rgba { a: 1.0, ..*self }.to_css()
    }
}

fn to_256(channel: f64) -> u8 {
    (channel.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Rounds an opacity to two decimals.
pub fn round_opacity(opacity: f64) -> f64 {
    (opacity * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opaque_color_omits_alpha() {
        assert_eq!(Rgba::rgb(1.0, 0.0, 0.0).to_css(), "rgb(255,0,0)");
    }

    #[test]
    fn test_translucent_color_rounds_alpha() {
        assert_eq!(
            Rgba::rgba(0.0, 0.5, 1.0, 0.333).to_css(),
            "rgb(0,128,255,0.33)"
        );
    }

    #[test]
    fn test_to_css_opaque_drops_alpha() {
        assert_eq!(Rgba::rgba(0.0, 0.0, 0.0, 0.2).to_css_opaque(), "rgb(0,0,0)");
    }

    #[test]
    fn test_fallback_gray() {
        assert_eq!(Rgba::FALLBACK_GRAY.to_css(), "rgb(125,125,125)");
    }

    #[test]
    fn test_out_of_range_channels_clamp() {
        assert_eq!(Rgba::rgb(1.4, -0.2, 0.0).to_css(), "rgb(255,0,0)");
    }
}
