//! Declarative feature shapes and their markup rendering.
//!
//! Shapes are pure `const` data looked up from static catalogs; rendering
//! walks the primitive lists in a fixed order (paths, strokes, circles,
//! ellipses, rects) so output is reproducible byte for byte. Malformed
//! catalog entries are programming errors caught by tests, not runtime
//! conditions.

use std::fmt::Write as _;

/// A filled path primitive.
#[derive(Clone, Copy, Debug)]
pub struct PathSpec {
    /// SVG path data.
    pub d: &'static str,
    /// Fill override; defaults to the feature's fill color.
    pub fill: Option<&'static str>,
    /// Opacity, emitted only when present.
    pub opacity: Option<&'static str>,
}

/// A stroked path primitive.
#[derive(Clone, Copy, Debug)]
pub struct StrokeSpec {
    /// SVG path data.
    pub d: &'static str,
    /// Stroke width.
    pub stroke_width: &'static str,
    /// Line cap, emitted only when present.
    pub stroke_linecap: Option<&'static str>,
    /// Fill override; defaults to `none`.
    pub fill: Option<&'static str>,
}

/// A circle primitive.
#[derive(Clone, Copy, Debug)]
pub struct CircleSpec {
    /// Center x.
    pub cx: &'static str,
    /// Center y.
    pub cy: &'static str,
    /// Radius.
    pub r: &'static str,
    /// Fill override; defaults to the feature's fill color.
    pub fill: Option<&'static str>,
    /// Stroke color; a stroke is emitted when this or `stroke_width` is set.
    pub stroke: Option<&'static str>,
    /// Stroke width, emitted only when present.
    pub stroke_width: Option<&'static str>,
    /// Opacity, emitted only when present.
    pub opacity: Option<&'static str>,
}

/// An ellipse primitive.
#[derive(Clone, Copy, Debug)]
pub struct EllipseSpec {
    /// Center x.
    pub cx: &'static str,
    /// Center y.
    pub cy: &'static str,
    /// Radius x.
    pub rx: &'static str,
    /// Radius y.
    pub ry: &'static str,
    /// Stroke override; defaults to the feature's stroke color.
    pub stroke: Option<&'static str>,
    /// Stroke width, emitted only when present.
    pub stroke_width: Option<&'static str>,
    /// Fill override; defaults to `none`.
    pub fill: Option<&'static str>,
}

/// A rectangle primitive.
#[derive(Clone, Copy, Debug)]
pub struct RectSpec {
    /// Left edge.
    pub x: &'static str,
    /// Top edge.
    pub y: &'static str,
    /// Width.
    pub width: &'static str,
    /// Height.
    pub height: &'static str,
    /// Corner radius, emitted only when present.
    pub rx: Option<&'static str>,
    /// Fill override; defaults to the feature's fill color.
    pub fill: Option<&'static str>,
    /// Opacity, emitted only when present.
    pub opacity: Option<&'static str>,
}

/// An immutable drawing instruction for one facial feature.
#[derive(Clone, Copy, Debug)]
pub struct FeatureShape {
    /// The feature's own coordinate space.
    pub view_box: &'static str,
    /// Filled paths, drawn first.
    pub paths: &'static [PathSpec],
    /// Stroked paths.
    pub strokes: &'static [StrokeSpec],
    /// Circles.
    pub circles: &'static [CircleSpec],
    /// Ellipses.
    pub ellipses: &'static [EllipseSpec],
    /// Rectangles, drawn last.
    pub rects: &'static [RectSpec],
}

impl FeatureShape {
    /// Base for const catalog entries; fill in the lists a shape uses.
    pub const EMPTY: Self = Self {
        view_box: "0 0 1 1",
        paths: &[],
        strokes: &[],
        circles: &[],
        ellipses: &[],
        rects: &[],
    };

    /// Width and height of the view box (defaults to 1x1 when malformed).
    pub fn view_box_size(&self) -> (f64, f64) {
        let mut parts = self.view_box.split(' ').skip(2);
        let w = parts.next().and_then(|v| v.parse().ok()).unwrap_or(1.0);
        let h = parts.next().and_then(|v| v.parse().ok()).unwrap_or(1.0);
        (w, h)
    }
}

/// Render a shape's primitives as bare markup, without an `<svg>` wrapper.
pub fn render_shape_content(shape: &FeatureShape, fill: &str, stroke: &str) -> String {
    let mut out = String::new();

    for p in shape.paths {
        let _ = write!(out, "<path d=\"{}\" fill=\"{}\"", p.d, p.fill.unwrap_or(fill));
        if let Some(opacity) = p.opacity {
            let _ = write!(out, " opacity=\"{opacity}\"");
        }
        out.push_str("/>");
    }

    for s in shape.strokes {
        let _ = write!(
            out,
            "<path d=\"{}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"{}\"",
            s.d,
            s.fill.unwrap_or("none"),
            stroke,
            s.stroke_width
        );
        if let Some(linecap) = s.stroke_linecap {
            let _ = write!(out, " stroke-linecap=\"{linecap}\"");
        }
        out.push_str("/>");
    }

    for c in shape.circles {
        let _ = write!(
            out,
            "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\"",
            c.cx,
            c.cy,
            c.r,
            c.fill.unwrap_or(fill)
        );
        if let Some(opacity) = c.opacity {
            let _ = write!(out, " opacity=\"{opacity}\"");
        }
        if c.stroke.is_some() || c.stroke_width.is_some() {
            let _ = write!(out, " stroke=\"{}\"", c.stroke.unwrap_or(stroke));
            if let Some(width) = c.stroke_width {
                let _ = write!(out, " stroke-width=\"{width}\"");
            }
        }
        out.push_str("/>");
    }

    for e in shape.ellipses {
        let _ = write!(
            out,
            "<ellipse cx=\"{}\" cy=\"{}\" rx=\"{}\" ry=\"{}\" fill=\"{}\" stroke=\"{}\"",
            e.cx,
            e.cy,
            e.rx,
            e.ry,
            e.fill.unwrap_or("none"),
            e.stroke.unwrap_or(stroke)
        );
        if let Some(width) = e.stroke_width {
            let _ = write!(out, " stroke-width=\"{width}\"");
        }
        out.push_str("/>");
    }

    for r in shape.rects {
        let _ = write!(
            out,
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\"",
            r.x,
            r.y,
            r.width,
            r.height,
            r.fill.unwrap_or(fill)
        );
        if let Some(rx) = r.rx {
            let _ = write!(out, " rx=\"{rx}\"");
        }
        if let Some(opacity) = r.opacity {
            let _ = write!(out, " opacity=\"{opacity}\"");
        }
        out.push_str("/>");
    }

    out
}

/// Render a shape as a standalone `<svg>` fragment for HTML embedding.
///
/// The fragment sizes itself with CSS (`width:100%;height:auto` unless
/// `svg_style` overrides it), so flexbox layout controls its footprint.
/// `inner_group_style` wraps the content in a `<g>` carrying an inline
/// style, used to attach per-feature animation such as blink.
pub fn render_feature(
    shape: &FeatureShape,
    fill: &str,
    stroke: &str,
    inner_group_style: Option<&str>,
    svg_style: Option<&str>,
) -> String {
    let content = render_shape_content(shape, fill, stroke);
    let wrapped = match inner_group_style {
        Some(style) => format!("<g style=\"{style}\">{content}</g>"),
        None => content,
    };
    let style = svg_style.unwrap_or("width:100%;height:auto");
    format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" fill=\"none\" viewBox=\"{}\" style=\"overflow:visible;{}\">{}</svg>",
        shape.view_box, style, wrapped
    )
}

#[cfg(test)]
#[path = "../../tests/unit/render/feature.rs"]
mod tests;
