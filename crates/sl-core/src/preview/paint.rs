//! Paint previews: stacked fill chips inside a 16x16 frame.

use std::fmt::Write;

use crate::style::{GradientKind, GradientStop, PaintLayer};

const OUTLINE_COLOR: &str = "gray";
const CHECKER_COLOR: &str = "#E1E1E1";

const IMAGE_ICON_PATH: &str = "M12 4H4V8.2929L6.00001 6.29289L11.7071 12H12V4ZM10.2929 12L6.00001 7.70711L4 9.70711V12H10.2929ZM4 3C3.44772 3 3 3.44772 3 4V12C3 12.5523 3.44772 13 4 13H12C12.5523 13 13 12.5523 13 12V4C13 3.44772 12.5523 3 12 3H4ZM9.5 7C9.77614 7 10 6.77614 10 6.5C10 6.22386 9.77614 6 9.5 6C9.22386 6 9 6.22386 9 6.5C9 6.77614 9.22386 7 9.5 7ZM9.5 8C10.3284 8 11 7.32843 11 6.5C11 5.67157 10.3284 5 9.5 5C8.67157 5 8 5.67157 8 6.5C8 7.32843 8.67157 8 9.5 8Z";
const VIDEO_ICON_PATH: &str = "M4 4H12V12H4V4ZM3 4C3 3.44772 3.44772 3 4 3H12C12.5523 3 13 3.44772 13 4V12C13 12.5523 12.5523 13 12 13H4C3.44772 13 3 12.5523 3 12V4ZM6 5.5L10 8L6 10.5V5.5Z";
const SEMICIRCLE_TOP_PATH: &str = "M13.6568 2.34315C16.781 5.46734 16.781 10.5327 13.6568 13.6569L2.34314 2.34315C5.46733 -0.781047 10.5327 -0.781047 13.6568 2.34315Z";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Frame {
    Circle,
    Square,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CheckerMask {
    /// Upper-right half of the circle, leaving the fill visible below.
    SemiCircle,
    /// Right half of the square.
    SemiSquare,
}

pub(super) fn render_paint(layers: &[PaintLayer]) -> String {
    if let Some(PaintLayer::Variable { color, opacity }) = layers.first() {
        return render_variable(color, *opacity);
    }

    let mut body = String::new();
    if let [PaintLayer::Solid { opacity, .. }] = layers {
        if *opacity < 1.0 {
            write_checker(&mut body, CheckerMask::SemiCircle, 1.0);
        }
    }
    for (index, layer) in layers.iter().enumerate() {
        write_layer(&mut body, index, layer);
    }
    write_outline(&mut body, Frame::Circle);
    frame(&body)
}

/// Square chip for fills bound to a color variable.
fn render_variable(color: &str, opacity: f64) -> String {
    let mut body = String::new();
    let _ = write!(
        body,
        r#"<rect id="main-fill-0" height="16" width="16" rx="1" fill="{color}" opacity="1" />"#
    );
    if opacity != 1.0 {
        write_checker(&mut body, CheckerMask::SemiSquare, 1.0 - opacity);
    }
    write_outline(&mut body, Frame::Square);
    frame(&body)
}

fn write_layer(body: &mut String, index: usize, layer: &PaintLayer) {
    match layer {
        PaintLayer::Solid { color, opacity } | PaintLayer::Variable { color, opacity } => {
            let _ = write!(
                body,
                r#"<circle id="main-fill-{index}" cx="8" cy="8" r="8" fill="{color}" opacity="{opacity}" />"#
            );
        }
        PaintLayer::Image { opacity } => {
            write_media_icon(body, "image", index, IMAGE_ICON_PATH, *opacity)
        }
        PaintLayer::Video { opacity } => {
            write_media_icon(body, "video", index, VIDEO_ICON_PATH, *opacity)
        }
        PaintLayer::Gradient {
            kind,
            stops,
            opacity,
        } => write_gradient(body, index, *kind, stops, *opacity),
    }
}

fn write_media_icon(body: &mut String, name: &str, index: usize, path: &str, opacity: f64) {
    let _ = write!(
        body,
        r##"<g id="{name}-icon-{index}" opacity="{opacity}"><circle cx="8" cy="8" r="8" fill="gray" /><path fill-rule="evenodd" clip-rule="evenodd" fill="#000000" d="{path}" /></g>"##
    );
}

fn write_gradient(
    body: &mut String,
    index: usize,
    kind: GradientKind,
    stops: &[GradientStop],
    opacity: f64,
) {
    let (element, id, geometry) = if kind.is_radial() {
        (
            "radialGradient",
            format!("radial-gradient-{index}"),
            r#"cx="0" cy="0" r="1" gradientUnits="userSpaceOnUse" gradientTransform="translate(8 8) rotate(90) scale(8)""#,
        )
    } else {
        (
            "linearGradient",
            format!("linear-gradient-{index}"),
            r#"x1="8" y1="0" x2="8" y2="16" gradientUnits="userSpaceOnUse""#,
        )
    };

    let _ = write!(
        body,
        r#"<circle cx="8" cy="8" r="8" fill="url(#{id})" opacity="{opacity}" /><defs><{element} id="{id}" {geometry}>"#
    );
    for stop in stops {
        let _ = write!(
            body,
            r#"<stop stop-color="{}" offset="{}" stop-opacity="1" />"#,
            stop.color, stop.offset
        );
    }
    let _ = write!(body, "</{element}></defs>");
}

fn write_checker(body: &mut String, mask: CheckerMask, opacity: f64) {
    let mask_shape = match mask {
        CheckerMask::SemiCircle => {
            format!(r#"<path id="checker-box-mask-semicircle" d="{SEMICIRCLE_TOP_PATH}" fill="black" />"#)
        }
        CheckerMask::SemiSquare => {
            r#"<rect id="checker-box-mask-square" height="16" width="8" x="8" fill="black" />"#
                .to_string()
        }
    };
    let _ = write!(
        body,
        r#"<mask id="checker-box-mask" style="mask-type:alpha" maskUnits="userSpaceOnUse" x="0" y="0" width="16" height="16">{mask_shape}</mask><g id="checker-box" mask="url(#checker-box-mask)" opacity="{opacity}"><rect width="16" height="16" fill="white" />"#
    );
    // 3px cells on a 6px pitch, second row offset by one cell.
    for (x0, y0) in [(0, 0), (3, 3)] {
        for x in (x0..18).step_by(6) {
            for y in (y0..18).step_by(6) {
                let _ = write!(
                    body,
                    r#"<path d="M{x} {y}H{}V{}H{x}V{y}Z" fill="{CHECKER_COLOR}" />"#,
                    x + 3,
                    y + 3
                );
            }
        }
    }
    body.push_str("</g>");
}

fn write_outline(body: &mut String, shape: Frame) {
    let _ = match shape {
        Frame::Circle => write!(
            body,
            r#"<circle id="outline" cx="8" cy="8" r="7.75" stroke="{OUTLINE_COLOR}" stroke-width="0.5" opacity="0.2" />"#
        ),
        Frame::Square => write!(
            body,
            r#"<rect id="outline" height="15.5" width="15.5" rx="1.5" x="0.25" y="0.25" stroke="{OUTLINE_COLOR}" stroke-width="0.5" opacity="0.2" />"#
        ),
    };
}

fn frame(body: &str) -> String {
    format!(
        r#"<svg width="16" height="16" viewBox="0 0 16 16" fill="none" xmlns="http://www.w3.org/2000/svg">{body}</svg>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(opacity: f64) -> PaintLayer {
        PaintLayer::Solid {
            color: "rgb(255,0,0)".into(),
            opacity,
        }
    }

    #[test]
    fn test_translucent_solid_gets_checkerboard() {
        let svg = render_paint(&[solid(0.5)]);
        assert!(svg.contains(r#"id="checker-box""#));
        assert!(svg.contains(r#"fill="rgb(255,0,0)" opacity="0.5""#));
    }

    #[test]
    fn test_opaque_solid_has_no_checkerboard() {
        let svg = render_paint(&[solid(1.0)]);
        assert!(!svg.contains("checker-box"));
        assert!(svg.contains(r#"id="outline""#));
    }

    #[test]
    fn test_stacked_translucent_layers_skip_checkerboard() {
        let svg = render_paint(&[solid(0.5), solid(0.5)]);
        assert!(!svg.contains("checker-box"));
        assert!(svg.contains("main-fill-1"));
    }

    #[test]
    fn test_checkerboard_has_eighteen_cells() {
        let svg = render_paint(&[solid(0.2)]);
        assert_eq!(svg.matches(CHECKER_COLOR).count(), 18);
    }

    #[test]
    fn test_variable_renders_square_chip() {
        let svg = render_paint(&[PaintLayer::Variable {
            color: "rgb(0,0,255)".into(),
            opacity: 1.0,
        }]);
        assert!(svg.contains(r#"<rect id="main-fill-0""#));
        assert!(svg.contains(r#"<rect id="outline""#));
        assert!(!svg.contains("checker-box"));
    }

    #[test]
    fn test_translucent_variable_checker_scales_with_transparency() {
        let svg = render_paint(&[PaintLayer::Variable {
            color: "rgb(0,0,255)".into(),
            opacity: 0.25,
        }]);
        assert!(svg.contains(r#"mask="url(#checker-box-mask)" opacity="0.75""#));
    }

    #[test]
    fn test_gradient_kinds_pick_element() {
        let stops = vec![
            GradientStop {
                color: "rgb(0,0,0)".into(),
                offset: 0.0,
            },
            GradientStop {
                color: "rgb(255,255,255)".into(),
                offset: 1.0,
            },
        ];
        let radial = render_paint(&[PaintLayer::Gradient {
            kind: GradientKind::Diamond,
            stops: stops.clone(),
            opacity: 1.0,
        }]);
        assert!(radial.contains("<radialGradient id=\"radial-gradient-0\""));
        assert_eq!(radial.matches("<stop ").count(), 2);

        let linear = render_paint(&[PaintLayer::Gradient {
            kind: GradientKind::Angular,
            stops,
            opacity: 1.0,
        }]);
        assert!(linear.contains("<linearGradient id=\"linear-gradient-0\""));
    }

    #[test]
    fn test_media_layers_use_placeholder_icon() {
        let svg = render_paint(&[PaintLayer::Image { opacity: 1.0 }, PaintLayer::Video { opacity: 0.4 }]);
        assert!(svg.contains(r#"id="image-icon-0""#));
        assert!(svg.contains(r#"id="video-icon-1" opacity="0.4""#));
    }

    #[test]
    fn test_empty_paint_renders_outline_only() {
        let svg = render_paint(&[]);
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(r#"id="outline""#));
        assert!(!svg.contains("main-fill"));
    }
}
