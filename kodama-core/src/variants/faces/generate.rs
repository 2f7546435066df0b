//! Deterministic slot selection.
//!
//! One scalar seed drives every choice. Each category uses a distinct fixed
//! multiplier so the choices decorrelate: without them, categories whose
//! sizes share factors would visibly co-vary (same eyes always paired with
//! the same mouth). The multipliers are compatibility constants; changing
//! any of them changes every existing avatar.

use crate::foundation::core::Rotation;

use super::model::{
    AccessoryKind, CheekKind, DetailLevel, EyeKind, EyebrowKind, FacesData, FacesSlots, Mood,
    MouthKind, SlotKind,
};

/// Eye selection table.
pub const EYE_TYPES: [EyeKind; 6] = EyeKind::ALL;
/// Eyebrow selection table.
pub const EYEBROW_TYPES: [EyebrowKind; 4] = EyebrowKind::ALL;
/// Mouth selection table.
pub const MOUTH_TYPES: [MouthKind; 7] = MouthKind::ALL;
/// Cheek selection table.
pub const CHEEK_TYPES: [CheekKind; 2] = CheekKind::ALL;
/// Accessory selection table.
pub const ACCESSORY_TYPES: [AccessoryKind; 3] = AccessoryKind::ALL;

const SPHERE_POSITIONS: [Rotation; 9] = [
    Rotation { x: -1, y: 1 },
    Rotation { x: 1, y: 1 },
    Rotation { x: 1, y: 0 },
    Rotation { x: 0, y: 1 },
    Rotation { x: -1, y: 0 },
    Rotation { x: 0, y: 0 },
    Rotation { x: 0, y: -1 },
    Rotation { x: -1, y: -1 },
    Rotation { x: 1, y: -1 },
];

/// Generate the raw face data for a name.
///
/// `colors_length` is the active palette length (custom palette length, or
/// the default 16). Selection is `(seed * K) % len` per category with the
/// fixed multipliers 1, 7, 13, 19, 31 (slots), 37 (color), 43 (rotation);
/// products are taken in 64-bit so the arithmetic is exact.
pub fn generate_faces(name: &str, colors_length: usize, seed: u32) -> FacesData {
    let s = u64::from(seed);
    // Filtered-out palettes never reach here; guard anyway.
    let colors = colors_length.max(1) as u64;

    let pick = |multiplier: u64, len: usize| ((s * multiplier) % len as u64) as usize;

    let slots = FacesSlots {
        eyes: EYE_TYPES
            .get(pick(1, EYE_TYPES.len()))
            .copied()
            .unwrap_or(EyeKind::Round),
        eyebrows: EYEBROW_TYPES
            .get(pick(7, EYEBROW_TYPES.len()))
            .copied()
            .unwrap_or(EyebrowKind::Arched),
        mouth: MOUTH_TYPES
            .get(pick(13, MOUTH_TYPES.len()))
            .copied()
            .unwrap_or(MouthKind::Smile),
        cheeks: CHEEK_TYPES
            .get(pick(19, CHEEK_TYPES.len()))
            .copied()
            .unwrap_or(CheekKind::None),
        accessory: ACCESSORY_TYPES
            .get(pick(31, ACCESSORY_TYPES.len()))
            .copied()
            .unwrap_or(AccessoryKind::None),
    };

    let rotation = SPHERE_POSITIONS
        .get(pick(43, SPHERE_POSITIONS.len()))
        .copied()
        .unwrap_or_default();

    let initial = name
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default();

    FacesData {
        slots,
        color_index: ((s * 37) % colors) as usize,
        rotation,
        initial,
    }
}

struct MoodOverride {
    eyes: Option<EyeKind>,
    eyebrows: Option<EyebrowKind>,
    mouth: Option<MouthKind>,
    cheeks: Option<CheekKind>,
    accessory: Option<AccessoryKind>,
}

const NO_OVERRIDE: MoodOverride = MoodOverride {
    eyes: None,
    eyebrows: None,
    mouth: None,
    cheeks: None,
    accessory: None,
};

fn mood_override(mood: Mood) -> MoodOverride {
    match mood {
        Mood::Happy => MoodOverride {
            eyes: Some(EyeKind::Curved),
            mouth: Some(MouthKind::Grin),
            eyebrows: Some(EyebrowKind::Arched),
            ..NO_OVERRIDE
        },
        Mood::Surprised => MoodOverride {
            eyes: Some(EyeKind::Round),
            mouth: Some(MouthKind::O),
            eyebrows: Some(EyebrowKind::Raised),
            ..NO_OVERRIDE
        },
        Mood::Sleepy => MoodOverride {
            eyes: Some(EyeKind::Line),
            mouth: Some(MouthKind::Flat),
            eyebrows: Some(EyebrowKind::Flat),
            ..NO_OVERRIDE
        },
        Mood::Cool => MoodOverride {
            eyes: Some(EyeKind::Round),
            accessory: Some(AccessoryKind::Sunglasses),
            mouth: Some(MouthKind::Smirk),
            ..NO_OVERRIDE
        },
        Mood::Cheeky => MoodOverride {
            eyes: Some(EyeKind::Wink),
            mouth: Some(MouthKind::Tongue),
            cheeks: Some(CheekKind::Blush),
            ..NO_OVERRIDE
        },
    }
}

/// Apply a mood's partial override to generated slots.
///
/// Shallow merge: slots a mood does not mention keep their generated value.
/// Idempotent by construction.
pub fn apply_mood(slots: FacesSlots, mood: Mood) -> FacesSlots {
    let or = mood_override(mood);
    FacesSlots {
        eyes: or.eyes.unwrap_or(slots.eyes),
        eyebrows: or.eyebrows.unwrap_or(slots.eyebrows),
        mouth: or.mouth.unwrap_or(slots.mouth),
        cheeks: or.cheeks.unwrap_or(slots.cheeks),
        accessory: or.accessory.unwrap_or(slots.accessory),
    }
}

/// Lowest detail level at which a slot renders.
pub fn slot_min_detail(slot: SlotKind) -> DetailLevel {
    match slot {
        SlotKind::Eyes => DetailLevel::Minimal,
        SlotKind::Mouth => DetailLevel::Basic,
        SlotKind::Eyebrows => DetailLevel::Standard,
        SlotKind::Cheeks | SlotKind::Accessory => DetailLevel::Full,
    }
}

/// Whether a slot renders at the requested detail level.
pub fn slot_visible(slot: SlotKind, detail_level: DetailLevel) -> bool {
    detail_level >= slot_min_detail(slot)
}

/// Detail level derived from the requested pixel size.
pub fn auto_detail_level(size: u32) -> DetailLevel {
    if size < 32 {
        DetailLevel::Minimal
    } else if size < 48 {
        DetailLevel::Basic
    } else if size < 64 {
        DetailLevel::Standard
    } else {
        DetailLevel::Full
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/variants/faces/generate.rs"]
mod tests;
