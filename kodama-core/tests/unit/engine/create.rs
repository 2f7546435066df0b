use super::*;
use crate::engine::options::Shape;
use crate::engine::variant::ConfiguredVariant;
use crate::variants::faces::{DetailLevel, Mood};
use serde_json::json;

#[test]
fn default_variant_is_faces() {
    let out = create_kodama(&Options::new("alice")).unwrap();
    assert_eq!(out.variant, "faces");
    assert!(out.svg.starts_with("<svg"));
    assert!(out.svg.ends_with("</svg>"));
}

#[test]
fn identical_options_yield_byte_identical_svg() {
    let options = Options::new("alice")
        .size(64)
        .shape(Shape::Squircle)
        .prop("mood", "happy")
        .prop("animations", json!(["blink", "float"]));
    let a = create_kodama(&options).unwrap();
    let b = create_kodama(&options).unwrap();
    assert_eq!(a.svg, b.svg);
    assert_eq!(a.details, b.details);
}

#[test]
fn unknown_option_key_fails_before_any_rendering() {
    let err = create_kodama(&Options::new("x").prop("frobnicate", true)).unwrap_err();
    match err {
        KodamaError::UnknownOption { variant, key } => {
            assert_eq!(variant, "faces");
            assert_eq!(key, "frobnicate");
        }
        other => panic!("expected UnknownOption, got {other:?}"),
    }
}

#[test]
fn invalid_prop_value_surfaces_the_normalization_error() {
    let err = create_kodama(&Options::new("x").prop("detailLevel", "ultra")).unwrap_err();
    assert!(matches!(err, KodamaError::InvalidProp { .. }));
}

#[test]
fn bare_variant_accepts_top_level_props() {
    let out = create_kodama(
        &Options::new("alice")
            .variant(faces())
            .prop("mood", "sleepy"),
    )
    .unwrap();
    let result: FacesResult = out.decode().unwrap();
    assert_eq!(
        result.slots.eyes,
        crate::variants::faces::EyeKind::Line
    );
}

#[test]
fn configured_variant_carries_its_defaults() {
    let configured = ConfiguredVariant::new(faces())
        .with("mood", "happy")
        .unwrap()
        .with("detailLevel", "full")
        .unwrap();
    let out = create_kodama(&Options::new("alice").variant(configured)).unwrap();
    let result: FacesResult = out.decode().unwrap();
    assert_eq!(result.detail_level, DetailLevel::Full);
    assert_eq!(result.slots.mouth, crate::variants::faces::MouthKind::Grin);
}

#[test]
fn configured_variant_rejects_unsupported_defaults() {
    let err = ConfiguredVariant::new(faces()).with("frobnicate", 1).unwrap_err();
    assert!(matches!(err, KodamaError::UnknownOption { .. }));
}

#[test]
fn mixing_configured_variant_with_top_level_props_is_an_error() {
    let configured = ConfiguredVariant::new(faces()).with("mood", "happy").unwrap();
    let err = create_kodama(
        &Options::new("alice")
            .variant(configured)
            .prop("depth", "subtle"),
    )
    .unwrap_err();
    match err {
        KodamaError::ConfiguredVariantConflict { variant, keys } => {
            assert_eq!(variant, "faces");
            assert!(keys.contains("depth"));
        }
        other => panic!("expected ConfiguredVariantConflict, got {other:?}"),
    }
}

#[test]
fn unknown_keys_beat_the_conflict_check() {
    let configured = ConfiguredVariant::new(faces()).with("mood", "happy").unwrap();
    let err = create_kodama(
        &Options::new("alice")
            .variant(configured)
            .prop("frobnicate", 1),
    )
    .unwrap_err();
    assert!(matches!(err, KodamaError::UnknownOption { .. }));
}

#[test]
fn create_faces_returns_the_typed_result() {
    let result = create_faces(&Options::new("bob").size(64)).unwrap();
    assert_eq!(result.variant, "faces");
    assert_eq!(result.rotation, crate::foundation::core::Rotation { x: 1, y: 1 });
    assert!(result.svg.contains("<svg"));
    assert!(!result.layout.items.is_empty());
}

#[test]
fn moods_are_validated_not_applied_blindly() {
    for mood in Mood::ALL {
        let result =
            create_faces(&Options::new("alice").prop("mood", mood.as_str())).unwrap();
        assert_eq!(result.detail_level, DetailLevel::Basic);
    }
    assert!(create_kodama(&Options::new("alice").prop("mood", "angry")).is_err());
}
