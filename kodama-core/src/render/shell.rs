//! Outer SVG document assembly.
//!
//! The shell wraps composed feature content with the clip shape, background
//! fill, shine overlay and optional keyframe stylesheet. Content is embedded
//! through a `<foreignObject>` XHTML region so the same flexbox layout works
//! identically in static SVG and live DOM renderings.

use crate::engine::options::Shape;
use crate::foundation::core::{GradientPair, to_base36};

/// Apple-style squircle with continuous curvature (no straight-to-curve
/// seams), based on the iOS icon superellipse algorithm with r1/r2 ratios:
/// r1 = 0.0586 (bezier control-point inset), r2 = 0.44 (curve onset).
/// Coordinates are for a 0-100 viewBox and must stay bit-for-bit stable.
pub const SQUIRCLE_D: &str = "M 0 44 C 0 5.86 5.86 0 44 0 L 56 0 C 94.14 0 100 5.86 100 44 L 100 56 C 100 94.14 94.14 100 56 100 L 44 100 C 5.86 100 0 94.14 0 56 Z";

/// Background fill style of the shell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundStyle {
    /// Radial gradient plus shine overlay (the default).
    #[default]
    Gradient,
    /// Flat fill using the gradient pair's `from` color.
    Solid,
}

impl BackgroundStyle {
    /// Canonical lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Gradient => "gradient",
            Self::Solid => "solid",
        }
    }
}

pub(crate) fn shape_clip(shape: Shape) -> String {
    match shape {
        Shape::Circle => "<circle cx=\"50\" cy=\"50\" r=\"50\"/>".to_string(),
        Shape::Squircle => format!("<path d=\"{SQUIRCLE_D}\"/>"),
        Shape::Square => "<rect x=\"0\" y=\"0\" width=\"100\" height=\"100\"/>".to_string(),
    }
}

pub(crate) fn shape_fill(shape: Shape, fill: &str) -> String {
    match shape {
        Shape::Circle => format!("<circle cx=\"50\" cy=\"50\" r=\"50\" fill=\"{fill}\"/>"),
        Shape::Squircle => format!("<path d=\"{SQUIRCLE_D}\" fill=\"{fill}\"/>"),
        Shape::Square => {
            format!("<rect x=\"0\" y=\"0\" width=\"100\" height=\"100\" fill=\"{fill}\"/>")
        }
    }
}

pub(crate) fn gradient_defs(background: BackgroundStyle, gid: &str, gradient: &GradientPair) -> String {
    match background {
        BackgroundStyle::Gradient => format!(
            "<radialGradient id=\"{gid}\" cx=\"40%\" cy=\"40%\" r=\"85%\"><stop offset=\"0%\" stop-color=\"{from}\"/><stop offset=\"100%\" stop-color=\"{to}\"/></radialGradient><radialGradient id=\"{gid}-s\" cx=\"50%\" cy=\"50%\" r=\"100%\"><stop offset=\"0%\" stop-color=\"rgba(255,255,255,0.15)\"/><stop offset=\"60%\" stop-color=\"rgba(255,255,255,0)\"/></radialGradient>",
            from = gradient.from,
            to = gradient.to,
        ),
        BackgroundStyle::Solid => String::new(),
    }
}

/// Inputs for [`render_svg_shell`].
#[derive(Clone, Debug)]
pub struct ShellOptions<'a> {
    /// Seed, used to derive stable element ids.
    pub seed: u32,
    /// Clip shape.
    pub shape: Shape,
    /// Background style.
    pub background: BackgroundStyle,
    /// Gradient pair (`from` doubles as the solid fill).
    pub gradient: &'a GradientPair,
    /// Composed XHTML content for the foreignObject region.
    pub content: &'a str,
    /// Keyframe stylesheet text, included only when animations are active.
    pub keyframes: Option<&'a str>,
    /// Inline style for the `<svg>` root (e.g. entrance animation).
    pub svg_style: Option<&'a str>,
    /// Extra style appended to the root XHTML div (e.g. perspective).
    pub root_style: Option<&'a str>,
}

/// Build the outer SVG document around composed feature content.
pub fn render_svg_shell(options: &ShellOptions<'_>) -> String {
    let id = to_base36(options.seed);
    let cid = format!("kodama-c-{id}");
    let gid = format!("kodama-g-{id}");

    let clip_def = format!("<clipPath id=\"{cid}\">{}</clipPath>", shape_clip(options.shape));
    let gradients = gradient_defs(options.background, &gid, options.gradient);

    let bg_fill = match options.background {
        BackgroundStyle::Gradient => format!("url(#{gid})"),
        BackgroundStyle::Solid => options.gradient.from.clone(),
    };
    let shine = match options.background {
        BackgroundStyle::Gradient => shape_fill(options.shape, &format!("url(#{gid}-s)")),
        BackgroundStyle::Solid => String::new(),
    };

    let base_root_style = "width:100%;height:100%;position:relative;overflow:hidden";
    let root_div_style = match options.root_style {
        Some(extra) => format!("{base_root_style};{extra}"),
        None => base_root_style.to_string(),
    };

    let svg_attr = match options.svg_style {
        Some(style) => format!(" style=\"{style}\""),
        None => String::new(),
    };
    let style_block = match options.keyframes {
        Some(keyframes) => format!("<style>{keyframes}</style>"),
        None => String::new(),
    };

    [
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 100 100\" width=\"100%\" height=\"100%\"{svg_attr}>"
        ),
        style_block,
        format!("<defs>{clip_def}{gradients}</defs>"),
        format!("<g clip-path=\"url(#{cid})\">"),
        shape_fill(options.shape, &bg_fill),
        shine,
        "<foreignObject x=\"0\" y=\"0\" width=\"100\" height=\"100\">".to_string(),
        format!("<div xmlns=\"http://www.w3.org/1999/xhtml\" style=\"{root_div_style}\">"),
        options.content.to_string(),
        "</div>".to_string(),
        "</foreignObject>".to_string(),
        "</g>".to_string(),
        "</svg>".to_string(),
    ]
    .join("")
}

#[cfg(test)]
#[path = "../../tests/unit/render/shell.rs"]
mod tests;
