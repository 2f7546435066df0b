use super::*;
use crate::foundation::hash::hash;

#[test]
fn alice_slots_are_pinned() {
    let data = generate_faces("alice", 16, hash("alice"));
    assert_eq!(data.slots.eyes, EyeKind::Round);
    assert_eq!(data.slots.eyebrows, EyebrowKind::Arched);
    assert_eq!(data.slots.mouth, MouthKind::Grin);
    assert_eq!(data.slots.cheeks, CheekKind::Blush);
    assert_eq!(data.slots.accessory, AccessoryKind::None);
    assert_eq!(data.color_index, 0);
    assert_eq!(data.rotation, Rotation { x: -1, y: 1 });
    assert_eq!(data.initial, "A");
}

#[test]
fn bob_slots_are_pinned() {
    let data = generate_faces("bob", 16, hash("bob"));
    assert_eq!(data.slots.eyes, EyeKind::Cross);
    assert_eq!(data.slots.eyebrows, EyebrowKind::None);
    assert_eq!(data.slots.mouth, MouthKind::Cat);
    assert_eq!(data.slots.cheeks, CheekKind::None);
    assert_eq!(data.slots.accessory, AccessoryKind::Glasses);
    assert_eq!(data.color_index, 9);
    assert_eq!(data.rotation, Rotation { x: 1, y: 1 });
    assert_eq!(data.initial, "B");
}

#[test]
fn eyes_follow_the_modulo_formula() {
    for name in ["alice", "bob", "carol", "dave"] {
        let seed = hash(name);
        let data = generate_faces(name, 16, seed);
        assert_eq!(data.slots.eyes, EYE_TYPES[(seed % 6) as usize]);
    }
}

#[test]
fn empty_name_is_well_defined() {
    let data = generate_faces("", 16, hash(""));
    assert_eq!(data.slots.eyes, EyeKind::Round);
    assert_eq!(data.slots.mouth, MouthKind::Smile);
    assert_eq!(data.initial, "");
}

#[test]
fn color_index_respects_palette_length() {
    let seed = hash("alice");
    for len in [1usize, 2, 3, 5, 16, 100] {
        let data = generate_faces("alice", len, seed);
        assert!(data.color_index < len);
        assert_eq!(data.color_index, ((u64::from(seed) * 37) % len as u64) as usize);
    }
}

#[test]
fn slot_selection_differs_across_demo_names() {
    let a = generate_faces("alice", 16, hash("alice")).slots;
    let b = generate_faces("bob", 16, hash("bob")).slots;
    assert_ne!(a, b);
}

#[test]
fn mood_overrides_are_partial_merges() {
    let seed = hash("alice");
    let base = generate_faces("alice", 16, seed).slots;

    let happy = apply_mood(base, Mood::Happy);
    assert_eq!(happy.eyes, EyeKind::Curved);
    assert_eq!(happy.mouth, MouthKind::Grin);
    assert_eq!(happy.eyebrows, EyebrowKind::Arched);
    // Untouched slots keep their generated values.
    assert_eq!(happy.cheeks, base.cheeks);
    assert_eq!(happy.accessory, base.accessory);

    let cool = apply_mood(base, Mood::Cool);
    assert_eq!(cool.accessory, AccessoryKind::Sunglasses);
    assert_eq!(cool.mouth, MouthKind::Smirk);
    assert_eq!(cool.eyebrows, base.eyebrows);
}

#[test]
fn mood_application_is_idempotent() {
    let base = generate_faces("bob", 16, hash("bob")).slots;
    for mood in Mood::ALL {
        let once = apply_mood(base, mood);
        assert_eq!(apply_mood(once, mood), once);
    }
}

#[test]
fn auto_detail_level_breakpoints() {
    assert_eq!(auto_detail_level(16), DetailLevel::Minimal);
    assert_eq!(auto_detail_level(31), DetailLevel::Minimal);
    assert_eq!(auto_detail_level(32), DetailLevel::Basic);
    assert_eq!(auto_detail_level(47), DetailLevel::Basic);
    assert_eq!(auto_detail_level(48), DetailLevel::Standard);
    assert_eq!(auto_detail_level(63), DetailLevel::Standard);
    assert_eq!(auto_detail_level(64), DetailLevel::Full);
    assert_eq!(auto_detail_level(512), DetailLevel::Full);
}

#[test]
fn detail_levels_are_monotonic() {
    // A larger size never hides a slot a smaller size shows.
    let visible = |level: DetailLevel| -> Vec<SlotKind> {
        SlotKind::ALL
            .into_iter()
            .filter(|slot| slot_visible(*slot, level))
            .collect()
    };
    for pair in DetailLevel::ALL.windows(2) {
        let lower = visible(pair[0]);
        let upper = visible(pair[1]);
        for slot in &lower {
            assert!(upper.contains(slot));
        }
        assert!(upper.len() >= lower.len());
    }
}

#[test]
fn minimal_renders_only_eyes() {
    assert!(slot_visible(SlotKind::Eyes, DetailLevel::Minimal));
    assert!(!slot_visible(SlotKind::Mouth, DetailLevel::Minimal));
    assert!(!slot_visible(SlotKind::Eyebrows, DetailLevel::Basic));
    assert!(slot_visible(SlotKind::Eyebrows, DetailLevel::Standard));
    assert!(!slot_visible(SlotKind::Cheeks, DetailLevel::Standard));
    assert!(slot_visible(SlotKind::Accessory, DetailLevel::Full));
}
