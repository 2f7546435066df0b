use super::*;
use crate::foundation::hash::hash;

#[test]
fn flags_reflect_requested_kinds() {
    let specs = [
        AnimationSpec::new(AnimationKind::Blink),
        AnimationSpec::new(AnimationKind::Glance),
    ];
    let flags = AnimationFlags::from_specs(&specs);
    assert!(flags.blink);
    assert!(flags.glance);
    assert!(!flags.float);
    assert!(!flags.eye_wander);
}

#[test]
fn blink_rhythm_is_seed_derived() {
    // seed("bob") = 97717, so seed * 31 = 3029227 and 3029227 % 40 = 27.
    let t = resolve_timings(hash("bob"), &[AnimationSpec::new(AnimationKind::Blink)]);
    assert_eq!(t.blink.delay, 2.7);
    assert_eq!(t.blink.duration, 4.7);
}

#[test]
fn glance_rhythm_is_seed_derived() {
    // seed("bob") * 37 = 3615529; % 30 = 19, % 20 = 9.
    let t = resolve_timings(hash("bob"), &[AnimationSpec::new(AnimationKind::Glance)]);
    assert_eq!(t.glance.duration, 7.9);
    assert_eq!(t.glance.delay, 0.9);
}

#[test]
fn same_name_always_gets_the_same_rhythm() {
    let specs = [AnimationSpec::new(AnimationKind::Blink)];
    let a = resolve_timings(hash("carol"), &specs);
    let b = resolve_timings(hash("carol"), &specs);
    assert_eq!(a.blink, b.blink);
}

#[test]
fn explicit_timing_wins_over_derived() {
    let specs = [AnimationSpec {
        kind: AnimationKind::Blink,
        delay: Some(1.25),
        duration: Some(9.0),
    }];
    let t = resolve_timings(hash("bob"), &specs);
    assert_eq!(t.blink.delay, 1.25);
    assert_eq!(t.blink.duration, 9.0);
}

#[test]
fn fixed_defaults_for_the_remaining_kinds() {
    let t = resolve_timings(0, &[]);
    assert_eq!(t.eyebrow_bounce.duration, 4.0);
    assert_eq!(t.eye_wander.duration, 8.0);
    assert_eq!(t.entrance_eyes.duration, 0.3);
    assert_eq!(t.entrance_eyes.delay, 0.2);
    assert_eq!(t.entrance_scale.duration, 0.4);
    assert_eq!(t.entrance_scale.delay, 0.0);
    assert_eq!(t.float.duration, 3.0);
    assert_eq!(t.sway.duration, 5.0);
}

#[test]
fn keyframes_cover_every_animation() {
    for name in [
        "kodama-blink",
        "kodama-eyebrow-bounce",
        "kodama-float",
        "kodama-sway",
        "kodama-eye-wander",
        "kodama-entrance-scale",
        "kodama-entrance-eyes",
        "kodama-glance",
    ] {
        assert!(FACES_KEYFRAMES.contains(name), "missing {name}");
    }
}
