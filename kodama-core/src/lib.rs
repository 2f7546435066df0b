//! Kodama derives a small cartoon face avatar from any input string and
//! renders it as layered SVG.
//!
//! # Pipeline overview
//!
//! 1. **Hash**: `name -> seed` ([`hash`]), a fixed 32-bit polynomial hash
//! 2. **Generate**: seed -> slot selection, color index, tilt ([`generate_faces`])
//! 3. **Resolve**: variant module turns context + normalized props into markup
//! 4. **Shell**: clip shape, gradient background and content region become
//!    the final document ([`render_svg_shell`])
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: every output is a pure function of the call options;
//!   no clocks, no randomness, no I/O anywhere in the pipeline.
//! - **Pluggable styles**: the engine dispatches through the [`Variant`]
//!   trait only; the built-in faces style is one implementation of it.
//!
//! # Getting started
//!
//! ```
//! use kodama::{Options, create_faces};
//!
//! let result = create_faces(&Options::new("alice").size(64))?;
//! assert!(result.svg.starts_with("<svg"));
//! # Ok::<(), kodama::KodamaError>(())
//! ```
//!
//! Rasterization to pixels is deliberately out of scope: hand
//! [`render_export_svg`] output to any SVG rasterizer.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod engine;
mod foundation;
mod render;
mod variants;

pub use engine::create::{create_faces, create_kodama};
pub use engine::options::{BASE_OPTION_KEYS, DEFAULT_SIZE, Options, PropMap, Shape};
pub use engine::variant::{
    ConfiguredVariant, Variant, VariantCapabilities, VariantContext, VariantOutput,
    VariantSelection,
};
pub use foundation::core::{GradientPair, Rotation};
pub use foundation::error::{KodamaError, KodamaResult};
pub use foundation::hash::hash;
pub use render::export::{ExportOptions, render_export_svg};
pub use render::feature::{
    CircleSpec, EllipseSpec, FeatureShape, PathSpec, RectSpec, StrokeSpec, render_feature,
    render_shape_content,
};
pub use render::layout::{ColumnItem, FaceLayout, PlacedFeature, resolve_column_layout};
pub use render::shell::{BackgroundStyle, SQUIRCLE_D, ShellOptions, render_svg_shell};
pub use variants::faces::{
    ACCESSORY_TYPES, AccessoryKind, AnimationFlags, AnimationKind, AnimationSpec, CHEEK_TYPES,
    CheekKind, DEFAULT_GRADIENT_COUNT, Depth, DetailLevel, EYE_TYPES, EYEBROW_TYPES, EyeKind,
    EyebrowKind, FACES_KEYFRAMES, FACES_PROP_KEYS, FacesData, FacesProps, FacesResult, FacesSlots,
    FacesVariant, MOUTH_TYPES, Mood, MouthKind, ResolvedTimings, SlotKind, Timing, accessory_shape,
    apply_mood, auto_detail_level, cheek_shape, default_gradients, eye_shape, eyebrow_shape, faces,
    generate_faces, mouth_shape, normalize_faces_props, pick_gradient, resolve_timings,
    slot_min_detail, slot_visible,
};
