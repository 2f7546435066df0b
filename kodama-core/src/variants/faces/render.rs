//! Faces variant resolution: turns normalized props into the final SVG and
//! the positioned layout IR.

use crate::engine::variant::VariantContext;
use crate::foundation::core::Rotation;
use crate::render::feature::{FeatureShape, render_feature, render_shape_content};
use crate::render::layout::{ColumnItem, FaceLayout, PlacedFeature, resolve_column_layout};
use crate::render::shell::{ShellOptions, render_svg_shell};

use super::anim::{AnimationFlags, FACES_KEYFRAMES, resolve_timings};
use super::features::{accessory_shape, cheek_shape, eye_shape, eyebrow_shape, mouth_shape};
use super::generate::{apply_mood, generate_faces, slot_visible};
use super::model::{Depth, FacesData, FacesProps, FacesResult, SlotKind};
use super::palette::{DEFAULT_GRADIENT_COUNT, pick_gradient};

struct DepthPreset {
    rotate_range: f64,
    translate_z: f64,
    perspective: &'static str,
    content_scale: f64,
}

const fn depth_preset(depth: Depth) -> DepthPreset {
    match depth {
        Depth::None => DepthPreset {
            rotate_range: 0.0,
            translate_z: 0.0,
            perspective: "none",
            content_scale: 1.0,
        },
        Depth::Subtle => DepthPreset {
            rotate_range: 5.0,
            translate_z: 4.0,
            perspective: "800px",
            content_scale: 0.97,
        },
        Depth::Medium => DepthPreset {
            rotate_range: 10.0,
            translate_z: 8.0,
            perspective: "500px",
            content_scale: 0.94,
        },
        Depth::Dramatic => DepthPreset {
            rotate_range: 15.0,
            translate_z: 12.0,
            perspective: "300px",
            content_scale: 0.9,
        },
    }
}

fn tilt_transform(preset: &DepthPreset, rotation: Rotation, facing: bool) -> String {
    let (rx, ry) = if facing {
        (0.0, 0.0)
    } else {
        (
            f64::from(rotation.x) * preset.rotate_range,
            f64::from(rotation.y) * preset.rotate_range,
        )
    };
    format!(
        "scale({}) rotateX({rx}deg) rotateY({ry}deg) translateZ({}px)",
        preset.content_scale, preset.translate_z
    )
}

// Layout widths in shell units, shared between the flex markup (as
// percentages) and the positioned export layout.
const EYEBROW_WIDTH: f64 = 55.0;
const EYE_WIDTH: f64 = 20.0;
const ACCESSORY_WIDTH: f64 = 60.0;
const MOUTH_WIDTH: f64 = 35.0;
const CHEEK_WIDTH: f64 = 90.0;

fn column_item(
    slot: &'static str,
    shape: &FeatureShape,
    width: f64,
    gap_after: f64,
    fill: &str,
) -> ColumnItem {
    let (vw, vh) = shape.view_box_size();
    ColumnItem {
        slot,
        view_box: shape.view_box.to_string(),
        body: render_shape_content(shape, fill, fill),
        width,
        height: width * (vh / vw),
        gap_after,
    }
}

/// Resolve the faces variant for a context and normalized props.
pub(crate) fn render_faces(ctx: &VariantContext, props: &FacesProps) -> FacesResult {
    let colors_length = props
        .gradients
        .as_ref()
        .map_or(DEFAULT_GRADIENT_COUNT, Vec::len);
    let data = generate_faces(&ctx.name, colors_length, ctx.seed);
    let gradient = pick_gradient(props.gradients.as_deref(), data.color_index);
    let slots = match props.mood {
        Some(mood) => apply_mood(data.slots, mood),
        None => data.slots,
    };
    let rotation = data.rotation;

    // Animations.
    let has = AnimationFlags::from_specs(&props.animations);
    let has_any_animation = !props.animations.is_empty();
    let t = resolve_timings(ctx.seed, &props.animations);

    let blink_style = format!(
        "animation:kodama-blink {}s ease-in-out {}s infinite;transform-origin:center center;",
        t.blink.duration, t.blink.delay
    );
    let glance_anim = format!(
        "kodama-glance {}s ease-in-out {}s infinite",
        t.glance.duration, t.glance.delay
    );

    // Depth.
    let preset = depth_preset(props.depth);
    let tilted = props.depth != Depth::None;
    let transform = tilted.then(|| tilt_transform(&preset, rotation, false));
    let facing_transform = tilted.then(|| tilt_transform(&preset, rotation, true));

    // Feature shapes.
    let eye = eye_shape(slots.eyes);
    let eyebrow = eyebrow_shape(slots.eyebrows);
    let mouth = mouth_shape(slots.mouth);
    let cheek = cheek_shape(slots.cheeks);
    let accessory = accessory_shape(slots.accessory);

    // Detail visibility.
    let show_eyebrows = slot_visible(SlotKind::Eyebrows, props.detail_level);
    let show_mouth = slot_visible(SlotKind::Mouth, props.detail_level);
    let show_cheeks = slot_visible(SlotKind::Cheeks, props.detail_level);
    let show_accessories = slot_visible(SlotKind::Accessory, props.detail_level);
    let glasses_active = show_accessories && slots.accessory.is_glasses();
    let show_eyes = !glasses_active;

    // Rendered feature fragments.
    let fill = "currentColor";
    let eye_html = render_feature(
        eye,
        fill,
        fill,
        if has.blink {
            Some(blink_style.as_str())
        } else {
            None
        },
        Some("width:100%;height:auto;max-width:90%;max-height:40%"),
    );
    let eyebrow_html = eyebrow.map(|shape| render_feature(shape, fill, fill, None, None));
    let mouth_html = render_feature(mouth, fill, fill, None, None);
    let cheek_html = cheek.map(|shape| render_feature(shape, "#FF9EBB", "#FF9EBB", None, None));
    let accessory_html =
        accessory.map(|shape| render_feature(shape, fill, fill, None, Some("width:110%;height:auto")));

    // Eyebrows.
    let eyebrows_block = match &eyebrow_html {
        Some(html) if show_eyebrows => {
            let margin = if glasses_active { "6%" } else { "2%" };
            let anim = if has.eyebrow_bounce {
                format!(
                    ";animation:kodama-eyebrow-bounce {}s ease-in-out {}s infinite",
                    t.eyebrow_bounce.duration, t.eyebrow_bounce.delay
                )
            } else {
                String::new()
            };
            format!("<div style=\"width:55%;margin-bottom:{margin}{anim}\">{html}</div>")
        }
        _ => String::new(),
    };

    // Eyes container (entrance-eyes is skipped while glasses cover them).
    let entrance_eyes = has.entrance && !glasses_active;
    let eyes_anim = if has.eye_wander && entrance_eyes {
        format!(
            ";animation:kodama-entrance-eyes {}s ease-out {}s both, kodama-eye-wander {}s ease-in-out 0.5s infinite",
            t.entrance_eyes.duration, t.entrance_eyes.delay, t.eye_wander.duration
        )
    } else if entrance_eyes {
        format!(
            ";animation:kodama-entrance-eyes {}s ease-out {}s both",
            t.entrance_eyes.duration, t.entrance_eyes.delay
        )
    } else if has.eye_wander {
        format!(
            ";animation:kodama-eye-wander {}s ease-in-out {}s infinite",
            t.eye_wander.duration, t.eye_wander.delay
        )
    } else {
        String::new()
    };

    let mut eyes_block = format!(
        "<div style=\"width:60%;position:relative;display:flex;align-items:center;justify-content:center{eyes_anim}\">"
    );
    if show_eyes {
        eyes_block.push_str("<div style=\"display:contents\">");
        eyes_block.push_str(&eye_html);
        eyes_block.push_str("</div>");
    }
    if show_accessories {
        if let Some(html) = &accessory_html {
            eyes_block.push_str(
                "<div style=\"position:absolute;inset:0;display:flex;align-items:center;justify-content:center;pointer-events:none\">",
            );
            eyes_block.push_str(html);
            eyes_block.push_str("</div>");
        }
    }
    eyes_block.push_str("</div>");

    // Mouth.
    let mouth_block = if show_mouth {
        let margin = if glasses_active { "8%" } else { "4%" };
        format!(
            "<div style=\"margin-top:{margin};width:35%;display:flex;align-items:center;justify-content:center\">{mouth_html}</div>"
        )
    } else {
        String::new()
    };

    // Cheeks.
    let cheeks_block = match &cheek_html {
        Some(html) if show_cheeks => format!(
            "<div style=\"position:absolute;bottom:18%;left:5%;right:5%;pointer-events:none\">{html}</div>"
        ),
        _ => String::new(),
    };

    // Face container: static tilt, float or glance.
    let mut face_styles: Vec<String> = [
        "position:absolute",
        "inset:0",
        "display:flex",
        "flex-direction:column",
        "align-items:center",
        "justify-content:center",
        "z-index:2",
    ]
    .iter()
    .map(|s| (*s).to_string())
    .collect();

    if has.float && !has.glance {
        face_styles.push(format!(
            "animation:kodama-float {}s ease-in-out {}s infinite",
            t.float.duration, t.float.delay
        ));
    } else if has.glance && tilted {
        if let (Some(rest), Some(facing)) = (&transform, &facing_transform) {
            face_styles.push(format!("--kodama-rest:{rest}"));
            face_styles.push(format!("--kodama-facing:{facing}"));
            face_styles.push(format!("transform:{rest}"));
            face_styles.push(format!("animation:{glance_anim}"));
        }
    } else if let Some(rest) = &transform {
        face_styles.push(format!("transform:{rest}"));
    }
    if tilted {
        face_styles.push("transform-style:preserve-3d".to_string());
    }

    let face_div = format!(
        "<div style=\"{}\">{eyebrows_block}{eyes_block}{mouth_block}{cheeks_block}</div>",
        face_styles.join(";")
    );

    // Sway wrapper.
    let sway_anim = if has.sway {
        format!(
            ";animation:kodama-sway {}s ease-in-out {}s infinite",
            t.sway.duration, t.sway.delay
        )
    } else {
        String::new()
    };
    let content = format!("<div style=\"position:absolute;inset:0{sway_anim}\">{face_div}</div>");

    // Root style (depth perspective).
    let mut root_parts = vec!["color:#000".to_string()];
    if tilted {
        root_parts.push(format!("perspective:{}", preset.perspective));
        root_parts.push("transform-style:preserve-3d".to_string());
    }
    let root_style = root_parts.join(";");

    let entrance_style = has.entrance.then(|| {
        format!(
            "animation:kodama-entrance-scale {}s ease-out {}s forwards",
            t.entrance_scale.duration, t.entrance_scale.delay
        )
    });

    let svg = render_svg_shell(&ShellOptions {
        seed: ctx.seed,
        shape: ctx.shape,
        background: props.background,
        gradient: &gradient,
        content: &content,
        keyframes: has_any_animation.then_some(FACES_KEYFRAMES),
        svg_style: entrance_style.as_deref(),
        root_style: Some(&root_style),
    });

    let layout = face_layout(
        eyebrow.filter(|_| show_eyebrows),
        eye,
        accessory,
        if show_mouth { Some(mouth) } else { None },
        cheek.filter(|_| show_cheeks),
        glasses_active,
    );

    FacesResult {
        variant: "faces".to_string(),
        svg,
        data: FacesData {
            slots,
            color_index: data.color_index,
            rotation: data.rotation,
            initial: data.initial,
        },
        slots,
        rotation,
        gradient,
        detail_level: props.detail_level,
        depth: props.depth,
        layout,
    }
}

/// Compute the positioned feature layout for the export path.
///
/// Same geometry as the flex markup: a vertically centered column (eyebrows,
/// eyes-or-accessory, mouth) plus absolutely positioned cheeks near the
/// bottom edge. Colors are concrete so the output has no CSS dependencies.
fn face_layout(
    eyebrow: Option<&'static FeatureShape>,
    eye: &'static FeatureShape,
    accessory: Option<&'static FeatureShape>,
    mouth: Option<&'static FeatureShape>,
    cheek: Option<&'static FeatureShape>,
    glasses_active: bool,
) -> FaceLayout {
    let ink = "#000";
    let gap_after_brow = if glasses_active { -2.0 } else { 4.0 };
    let gap_before_mouth = if glasses_active { 2.0 } else { 4.0 };

    let mut column = Vec::new();
    if let Some(shape) = eyebrow {
        column.push(column_item(
            "eyebrows",
            shape,
            EYEBROW_WIDTH,
            gap_after_brow,
            ink,
        ));
    }
    match (glasses_active, accessory) {
        (true, Some(shape)) => column.push(column_item(
            "accessory",
            shape,
            ACCESSORY_WIDTH,
            gap_before_mouth,
            ink,
        )),
        _ => column.push(column_item("eyes", eye, EYE_WIDTH, gap_before_mouth, ink)),
    }
    if let Some(shape) = mouth {
        column.push(column_item("mouth", shape, MOUTH_WIDTH, 0.0, ink));
    }

    let mut items = resolve_column_layout(column, 100.0);

    if let Some(shape) = cheek {
        let (vw, vh) = shape.view_box_size();
        let height = CHEEK_WIDTH * (vh / vw);
        items.push(PlacedFeature {
            slot: "cheeks".to_string(),
            x: 5.0,
            y: 100.0 - 18.0 - height,
            width: CHEEK_WIDTH,
            height,
            view_box: shape.view_box.to_string(),
            body: render_shape_content(shape, "#FF9EBB", "#FF9EBB"),
        });
    }

    FaceLayout { items }
}

#[cfg(test)]
#[path = "../../../tests/unit/variants/faces/render.rs"]
mod tests;
