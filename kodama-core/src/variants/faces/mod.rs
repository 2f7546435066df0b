//! The built-in "faces" visual style.
//!
//! A small cartoon face: five feature slots picked deterministically from
//! the seed, a gradient background, optional mood overrides and CSS
//! animations, rendered through the shared shell/feature renderers.

mod anim;
mod features;
mod generate;
mod model;
mod palette;
mod render;

pub use anim::{AnimationFlags, FACES_KEYFRAMES, ResolvedTimings, Timing, resolve_timings};
pub use features::{accessory_shape, cheek_shape, eye_shape, eyebrow_shape, mouth_shape};
pub use generate::{
    ACCESSORY_TYPES, CHEEK_TYPES, EYE_TYPES, EYEBROW_TYPES, MOUTH_TYPES, apply_mood,
    auto_detail_level, generate_faces, slot_min_detail, slot_visible,
};
pub use model::{
    AccessoryKind, AnimationKind, AnimationSpec, CheekKind, Depth, DetailLevel, EyeKind,
    EyebrowKind, FacesData, FacesProps, FacesResult, FacesSlots, Mood, MouthKind, SlotKind,
};
pub use palette::{DEFAULT_GRADIENT_COUNT, default_gradients, pick_gradient};

use serde_json::Value;

use crate::engine::options::PropMap;
use crate::engine::variant::{Variant, VariantCapabilities, VariantContext, VariantOutput};
use crate::foundation::core::GradientPair;
use crate::foundation::error::{KodamaError, KodamaResult};
use crate::render::shell::BackgroundStyle;

/// Prop keys the faces variant accepts, as callers spell them.
pub const FACES_PROP_KEYS: [&str; 6] = [
    "animations",
    "background",
    "depth",
    "detailLevel",
    "gradients",
    "mood",
];

const FACES_ID: &str = "faces";

const BACKGROUND_NAMES: [&str; 2] = ["gradient", "solid"];
const DETAIL_NAMES: [&str; 4] = ["minimal", "basic", "standard", "full"];
const DEPTH_NAMES: [&str; 4] = ["none", "subtle", "medium", "dramatic"];
const MOOD_NAMES: [&str; 5] = ["happy", "surprised", "sleepy", "cool", "cheeky"];
const ANIMATION_NAMES: [&str; 7] = [
    "blink",
    "float",
    "entrance",
    "sway",
    "eyeWander",
    "eyebrowBounce",
    "glance",
];

/// The faces variant module.
#[derive(Clone, Copy, Debug, Default)]
pub struct FacesVariant;

static FACES: FacesVariant = FacesVariant;

/// The process-wide faces module instance.
pub fn faces() -> &'static FacesVariant {
    &FACES
}

impl Variant for FacesVariant {
    fn id(&self) -> &'static str {
        FACES_ID
    }

    fn prop_keys(&self) -> &'static [&'static str] {
        &FACES_PROP_KEYS
    }

    fn capabilities(&self) -> VariantCapabilities {
        VariantCapabilities {
            backgrounds: &BACKGROUND_NAMES,
            animations: &ANIMATION_NAMES,
        }
    }

    fn normalize_props(&self, raw: &PropMap, ctx: &VariantContext) -> KodamaResult<Value> {
        let props = normalize_faces_props(raw, ctx.size)?;
        Ok(serde_json::to_value(props)?)
    }

    fn resolve(&self, ctx: &VariantContext, props: Value) -> KodamaResult<VariantOutput> {
        let props: FacesProps = serde_json::from_value(props)?;
        let result = render::render_faces(ctx, &props);
        Ok(VariantOutput {
            variant: FACES_ID,
            svg: result.svg.clone(),
            details: serde_json::to_value(result)?,
        })
    }
}

fn value_display(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn expect_str<'v>(value: &'v Value, prop: &str, allowed: &[&str]) -> KodamaResult<&'v str> {
    value
        .as_str()
        .ok_or_else(|| KodamaError::invalid_prop(FACES_ID, prop, value_display(value), allowed))
}

fn parse_enum<T: Copy>(
    value: &Value,
    prop: &str,
    names: &[&str],
    table: &[T],
) -> KodamaResult<T> {
    let s = expect_str(value, prop, names)?;
    names
        .iter()
        .position(|name| *name == s)
        .map(|index| table[index])
        .ok_or_else(|| KodamaError::invalid_prop(FACES_ID, prop, s, names))
}

fn parse_animation_entry(entry: &Value) -> KodamaResult<AnimationSpec> {
    const PROP: &str = "animations";
    match entry {
        Value::String(_) => Ok(AnimationSpec::new(parse_enum(
            entry,
            PROP,
            &ANIMATION_NAMES,
            &AnimationKind::ALL,
        )?)),
        Value::Object(record) => {
            let kind_value = record.get("type").ok_or_else(|| {
                KodamaError::invalid_prop(FACES_ID, PROP, value_display(entry), &ANIMATION_NAMES)
            })?;
            let kind = parse_enum(kind_value, PROP, &ANIMATION_NAMES, &AnimationKind::ALL)?;
            let number = |key: &str| -> KodamaResult<Option<f64>> {
                match record.get(key) {
                    None | Some(Value::Null) => Ok(None),
                    Some(value) => value.as_f64().map(Some).ok_or_else(|| {
                        KodamaError::invalid_prop(
                            FACES_ID,
                            PROP,
                            value_display(value),
                            &["a number of seconds"],
                        )
                    }),
                }
            };
            Ok(AnimationSpec {
                kind,
                delay: number("delay")?,
                duration: number("duration")?,
            })
        }
        other => Err(KodamaError::invalid_prop(
            FACES_ID,
            PROP,
            value_display(other),
            &ANIMATION_NAMES,
        )),
    }
}

fn parse_gradients(value: &Value) -> KodamaResult<Option<Vec<GradientPair>>> {
    let entries = value.as_array().ok_or_else(|| {
        KodamaError::invalid_prop(
            FACES_ID,
            "gradients",
            value_display(value),
            &["a list of {from, to} color pairs"],
        )
    })?;

    // Entries without both stops are dropped, not rejected; an empty result
    // means "use the default palette".
    let pairs: Vec<GradientPair> = entries
        .iter()
        .filter_map(|entry| {
            let record = entry.as_object()?;
            let from = record.get("from")?.as_str()?;
            let to = record.get("to")?.as_str()?;
            Some(GradientPair::new(from, to))
        })
        .collect();

    Ok(if pairs.is_empty() { None } else { Some(pairs) })
}

/// Validate and default the raw faces prop bag.
///
/// Fails fast on any invalid value; never silently defaults invalid input.
/// The effective detail level is taken from the props or derived from the
/// requested size.
pub fn normalize_faces_props(raw: &PropMap, size: u32) -> KodamaResult<FacesProps> {
    let background = match raw.get("background") {
        Some(value) => parse_enum(value, "background", &BACKGROUND_NAMES, &[
            BackgroundStyle::Gradient,
            BackgroundStyle::Solid,
        ])?,
        None => BackgroundStyle::Gradient,
    };

    let detail_level = match raw.get("detailLevel") {
        Some(value) => parse_enum(value, "detailLevel", &DETAIL_NAMES, &DetailLevel::ALL)?,
        None => auto_detail_level(size),
    };

    let mood = match raw.get("mood") {
        Some(value) => Some(parse_enum(value, "mood", &MOOD_NAMES, &Mood::ALL)?),
        None => None,
    };

    let animations = match raw.get("animations") {
        Some(Value::Array(entries)) => entries
            .iter()
            .map(parse_animation_entry)
            .collect::<KodamaResult<Vec<_>>>()?,
        Some(other) => {
            return Err(KodamaError::invalid_prop(
                FACES_ID,
                "animations",
                value_display(other),
                &ANIMATION_NAMES,
            ));
        }
        None => Vec::new(),
    };

    let gradients = match raw.get("gradients") {
        Some(value) => parse_gradients(value)?,
        None => None,
    };

    let depth = match raw.get("depth") {
        Some(value) => parse_enum(value, "depth", &DEPTH_NAMES, &Depth::ALL)?,
        None => Depth::Dramatic,
    };

    Ok(FacesProps {
        background,
        mood,
        detail_level,
        gradients,
        animations,
        depth,
    })
}

#[cfg(test)]
#[path = "../../../tests/unit/variants/faces/props.rs"]
mod tests;
