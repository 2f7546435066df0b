//! Static export SVG.
//!
//! Produces a pure vector document from the shell parameters plus the
//! positioned [`FaceLayout`](crate::render::layout::FaceLayout): no
//! foreignObject, no CSS, no animation. This is the input handed to
//! external rasterizers, which cannot evaluate embedded HTML.

use std::fmt::Write as _;

use crate::engine::options::Shape;
use crate::foundation::core::{GradientPair, fmt3, to_base36};
use crate::render::layout::FaceLayout;
use crate::render::shell::{BackgroundStyle, gradient_defs, shape_clip, shape_fill};

/// Inputs for [`render_export_svg`].
#[derive(Clone, Debug)]
pub struct ExportOptions<'a> {
    /// Output pixel size (the document is square).
    pub size: u32,
    /// Clip shape.
    pub shape: Shape,
    /// Background style.
    pub background: BackgroundStyle,
    /// Gradient pair.
    pub gradient: &'a GradientPair,
    /// Seed, used to derive stable element ids.
    pub seed: u32,
    /// Positioned feature layout.
    pub layout: &'a FaceLayout,
}

/// Build a pure, animation-free SVG document at the requested pixel size.
pub fn render_export_svg(options: &ExportOptions<'_>) -> String {
    let id = to_base36(options.seed);
    let cid = format!("kodama-c-{id}");
    let gid = format!("kodama-g-{id}");

    let mut out = String::new();
    let _ = write!(
        out,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{size}\" height=\"{size}\" viewBox=\"0 0 100 100\">",
        size = options.size
    );

    let _ = write!(
        out,
        "<defs><clipPath id=\"{cid}\">{}</clipPath>{}</defs>",
        shape_clip(options.shape),
        gradient_defs(options.background, &gid, options.gradient)
    );

    let bg_fill = match options.background {
        BackgroundStyle::Gradient => format!("url(#{gid})"),
        BackgroundStyle::Solid => options.gradient.from.clone(),
    };
    let _ = write!(out, "<g clip-path=\"url(#{cid})\">");
    out.push_str(&shape_fill(options.shape, &bg_fill));
    if options.background == BackgroundStyle::Gradient {
        out.push_str(&shape_fill(options.shape, &format!("url(#{gid}-s)")));
    }

    for item in &options.layout.items {
        let _ = write!(
            out,
            "<svg x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" viewBox=\"{}\" overflow=\"visible\">{}</svg>",
            fmt3(item.x),
            fmt3(item.y),
            fmt3(item.width),
            fmt3(item.height),
            item.view_box,
            item.body
        );
    }

    out.push_str("</g></svg>");
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/export.rs"]
mod tests;
