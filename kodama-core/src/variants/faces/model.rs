//! Data model of the faces variant.

use crate::foundation::core::{GradientPair, Rotation};
use crate::render::layout::FaceLayout;
use crate::render::shell::BackgroundStyle;

/// Eye styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EyeKind {
    /// Plain round pupils.
    Round,
    /// X-shaped eyes.
    Cross,
    /// Closed horizontal lines.
    Line,
    /// Happy upward arcs.
    Curved,
    /// One open, one winking.
    Wink,
    /// Heart-shaped eyes.
    Heart,
}

impl EyeKind {
    /// All styles, in selection-table order.
    pub const ALL: [Self; 6] = [
        Self::Round,
        Self::Cross,
        Self::Line,
        Self::Curved,
        Self::Wink,
        Self::Heart,
    ];

    /// Canonical lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Round => "round",
            Self::Cross => "cross",
            Self::Line => "line",
            Self::Curved => "curved",
            Self::Wink => "wink",
            Self::Heart => "heart",
        }
    }
}

/// Eyebrow styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EyebrowKind {
    /// Gentle arcs.
    Arched,
    /// Straight bars.
    Flat,
    /// Lifted arcs.
    Raised,
    /// No eyebrows drawn.
    None,
}

impl EyebrowKind {
    /// All styles, in selection-table order.
    pub const ALL: [Self; 4] = [Self::Arched, Self::Flat, Self::Raised, Self::None];

    /// Canonical lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Arched => "arched",
            Self::Flat => "flat",
            Self::Raised => "raised",
            Self::None => "none",
        }
    }
}

/// Mouth styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MouthKind {
    /// Open smile arc.
    Smile,
    /// Wide filled grin.
    Grin,
    /// Surprised round mouth.
    O,
    /// Cat-like double bump.
    Cat,
    /// Grin with tongue out.
    Tongue,
    /// Asymmetric half-smile.
    Smirk,
    /// Neutral line.
    Flat,
}

impl MouthKind {
    /// All styles, in selection-table order.
    pub const ALL: [Self; 7] = [
        Self::Smile,
        Self::Grin,
        Self::O,
        Self::Cat,
        Self::Tongue,
        Self::Smirk,
        Self::Flat,
    ];

    /// Canonical lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Smile => "smile",
            Self::Grin => "grin",
            Self::O => "o",
            Self::Cat => "cat",
            Self::Tongue => "tongue",
            Self::Smirk => "smirk",
            Self::Flat => "flat",
        }
    }
}

/// Cheek styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheekKind {
    /// Pink blush marks.
    Blush,
    /// No cheeks drawn.
    None,
}

impl CheekKind {
    /// All styles, in selection-table order.
    pub const ALL: [Self; 2] = [Self::Blush, Self::None];

    /// Canonical lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Blush => "blush",
            Self::None => "none",
        }
    }
}

/// Accessory styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessoryKind {
    /// No accessory.
    None,
    /// Round glasses.
    Glasses,
    /// Filled sunglasses.
    Sunglasses,
}

impl AccessoryKind {
    /// All styles, in selection-table order.
    pub const ALL: [Self; 3] = [Self::None, Self::Glasses, Self::Sunglasses];

    /// Canonical lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Glasses => "glasses",
            Self::Sunglasses => "sunglasses",
        }
    }

    /// Whether this accessory spatially replaces the eyes when visible.
    pub fn is_glasses(self) -> bool {
        matches!(self, Self::Glasses | Self::Sunglasses)
    }
}

/// Mood presets overriding a few generated slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    /// Curved eyes, grin, arched eyebrows.
    Happy,
    /// Round eyes, o mouth, raised eyebrows.
    Surprised,
    /// Line eyes, flat mouth, flat eyebrows.
    Sleepy,
    /// Sunglasses and a smirk.
    Cool,
    /// Wink, tongue out, blushing.
    Cheeky,
}

impl Mood {
    /// All moods.
    pub const ALL: [Self; 5] = [
        Self::Happy,
        Self::Surprised,
        Self::Sleepy,
        Self::Cool,
        Self::Cheeky,
    ];

    /// Canonical lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Happy => "happy",
            Self::Surprised => "surprised",
            Self::Sleepy => "sleepy",
            Self::Cool => "cool",
            Self::Cheeky => "cheeky",
        }
    }
}

/// Visibility tier gating which slots render. Ordered: each tier renders a
/// superset of the tiers below it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetailLevel {
    /// Eyes only.
    Minimal,
    /// Eyes and mouth.
    Basic,
    /// Eyes, mouth, eyebrows.
    Standard,
    /// Everything, including cheeks and accessories.
    Full,
}

impl DetailLevel {
    /// All tiers, lowest to highest.
    pub const ALL: [Self; 4] = [Self::Minimal, Self::Basic, Self::Standard, Self::Full];

    /// Canonical lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Minimal => "minimal",
            Self::Basic => "basic",
            Self::Standard => "standard",
            Self::Full => "full",
        }
    }
}

/// Pseudo-3D tilt magnitude preset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Depth {
    /// No tilt at all.
    None,
    /// 5 degree range.
    Subtle,
    /// 10 degree range.
    Medium,
    /// 15 degree range (the default).
    Dramatic,
}

impl Depth {
    /// All presets.
    pub const ALL: [Self; 4] = [Self::None, Self::Subtle, Self::Medium, Self::Dramatic];

    /// Canonical lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Subtle => "subtle",
            Self::Medium => "medium",
            Self::Dramatic => "dramatic",
        }
    }
}

/// Animation kinds the faces variant understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AnimationKind {
    /// Periodic eyelid close.
    Blink,
    /// Whole-face vertical bob.
    Float,
    /// One-shot scale-in on load.
    Entrance,
    /// Horizontal sway.
    Sway,
    /// Eyes drifting around.
    EyeWander,
    /// Occasional eyebrow hop.
    EyebrowBounce,
    /// Periodic turn toward the viewer (depth-aware).
    Glance,
}

impl AnimationKind {
    /// All kinds.
    pub const ALL: [Self; 7] = [
        Self::Blink,
        Self::Float,
        Self::Entrance,
        Self::Sway,
        Self::EyeWander,
        Self::EyebrowBounce,
        Self::Glance,
    ];

    /// Canonical camelCase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Blink => "blink",
            Self::Float => "float",
            Self::Entrance => "entrance",
            Self::Sway => "sway",
            Self::EyeWander => "eyeWander",
            Self::EyebrowBounce => "eyebrowBounce",
            Self::Glance => "glance",
        }
    }
}

/// One requested animation with optional explicit timing.
///
/// Timing left unset is resolved deterministically from the seed (blink,
/// glance) or from fixed per-kind defaults.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationSpec {
    /// Animation kind.
    #[serde(rename = "type")]
    pub kind: AnimationKind,
    /// Explicit delay in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay: Option<f64>,
    /// Explicit duration in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
}

impl AnimationSpec {
    /// A spec with timing left for the resolver.
    pub fn new(kind: AnimationKind) -> Self {
        Self {
            kind,
            delay: None,
            duration: None,
        }
    }
}

/// The five named feature slots of a face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotKind {
    /// Eye slot.
    Eyes,
    /// Eyebrow slot.
    Eyebrows,
    /// Mouth slot.
    Mouth,
    /// Cheek slot.
    Cheeks,
    /// Accessory slot.
    Accessory,
}

impl SlotKind {
    /// All slots.
    pub const ALL: [Self; 5] = [
        Self::Eyes,
        Self::Eyebrows,
        Self::Mouth,
        Self::Cheeks,
        Self::Accessory,
    ];

    /// Canonical lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Eyes => "eyes",
            Self::Eyebrows => "eyebrows",
            Self::Mouth => "mouth",
            Self::Cheeks => "cheeks",
            Self::Accessory => "accessory",
        }
    }
}

/// Selected style for each of the five slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FacesSlots {
    /// Eye style.
    pub eyes: EyeKind,
    /// Eyebrow style.
    pub eyebrows: EyebrowKind,
    /// Mouth style.
    pub mouth: MouthKind,
    /// Cheek style.
    pub cheeks: CheekKind,
    /// Accessory style.
    pub accessory: AccessoryKind,
}

/// Raw generator output before mood overrides.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacesData {
    /// Selected slots.
    pub slots: FacesSlots,
    /// Index into the active gradient palette.
    pub color_index: usize,
    /// Pseudo-3D tilt direction.
    pub rotation: Rotation,
    /// First character of the name, uppercased (empty name gives "").
    pub initial: String,
}

/// Normalized faces props, produced by prop normalization.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacesProps {
    /// Background style.
    pub background: BackgroundStyle,
    /// Optional mood override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<Mood>,
    /// Effective detail level (explicit or auto-derived from size).
    pub detail_level: DetailLevel,
    /// Custom gradient palette, already filtered for validity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gradients: Option<Vec<GradientPair>>,
    /// Requested animations.
    pub animations: Vec<AnimationSpec>,
    /// Tilt magnitude preset.
    pub depth: Depth,
}

/// Full result of resolving the faces variant.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacesResult {
    /// Always "faces".
    pub variant: String,
    /// The rendered SVG document.
    pub svg: String,
    /// Generator output with mood applied to its slots.
    pub data: FacesData,
    /// Effective slots (after mood).
    pub slots: FacesSlots,
    /// Tilt direction.
    pub rotation: Rotation,
    /// Selected gradient pair.
    pub gradient: GradientPair,
    /// Effective detail level.
    pub detail_level: DetailLevel,
    /// Effective depth preset.
    pub depth: Depth,
    /// Positioned feature layout for export/raster consumers.
    pub layout: FaceLayout,
}
