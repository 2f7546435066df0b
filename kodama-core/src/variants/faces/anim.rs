//! Animation timing.
//!
//! Blink and glance derive their rhythm from the seed so every name keeps a
//! personal cadence across renders; the remaining kinds use fixed defaults.
//! Explicit caller timing always wins. The seed multipliers (31, 37) are
//! compatibility constants shared with the interactive renderer.

use super::model::{AnimationKind, AnimationSpec};

/// Keyframe stylesheet embedded in the document whenever any animation is
/// requested. Shared verbatim with DOM renderings for visual parity.
pub const FACES_KEYFRAMES: &str = "
@keyframes kodama-blink {
  0%, 92%, 100% { transform: scaleY(1); }
  96% { transform: scaleY(0.05); }
}
@keyframes kodama-eyebrow-bounce {
  0%, 88%, 100% { transform: translateY(0); }
  94% { transform: translateY(-2px); }
}
@keyframes kodama-float {
  0%, 100% { transform: translateY(0); }
  50% { transform: translateY(-3px); }
}
@keyframes kodama-sway {
  0%, 100% { transform: translateX(0); }
  25% { transform: translateX(-2px); }
  75% { transform: translateX(2px); }
}
@keyframes kodama-eye-wander {
  0%, 100% { transform: translateX(0) translateY(0); }
  20% { transform: translateX(1.5px) translateY(-0.5px); }
  40% { transform: translateX(0.5px) translateY(0.5px); }
  60% { transform: translateX(-1.5px) translateY(0); }
  80% { transform: translateX(-0.5px) translateY(-0.5px); }
}
@keyframes kodama-entrance-scale {
  0% { transform: scale(0.8); opacity: 0; }
  100% { transform: scale(1); opacity: 1; }
}
@keyframes kodama-entrance-eyes {
  0% { transform: scaleY(0.05); }
  100% { transform: scaleY(1); }
}
@keyframes kodama-glance {
  0%, 82%, 100% { transform: var(--kodama-rest); }
  88%, 92% { transform: var(--kodama-facing); }
}
";

/// Which animation kinds were requested.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AnimationFlags {
    /// Blink requested.
    pub blink: bool,
    /// Float requested.
    pub float: bool,
    /// Entrance requested.
    pub entrance: bool,
    /// Sway requested.
    pub sway: bool,
    /// Eye wander requested.
    pub eye_wander: bool,
    /// Eyebrow bounce requested.
    pub eyebrow_bounce: bool,
    /// Glance requested.
    pub glance: bool,
}

impl AnimationFlags {
    /// Flags for a requested animation list.
    pub fn from_specs(specs: &[AnimationSpec]) -> Self {
        let mut flags = Self::default();
        for spec in specs {
            match spec.kind {
                AnimationKind::Blink => flags.blink = true,
                AnimationKind::Float => flags.float = true,
                AnimationKind::Entrance => flags.entrance = true,
                AnimationKind::Sway => flags.sway = true,
                AnimationKind::EyeWander => flags.eye_wander = true,
                AnimationKind::EyebrowBounce => flags.eyebrow_bounce = true,
                AnimationKind::Glance => flags.glance = true,
            }
        }
        flags
    }
}

/// Delay and duration in seconds for one animation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Timing {
    /// Start delay.
    pub delay: f64,
    /// Cycle duration.
    pub duration: f64,
}

/// Effective timing for every animation kind.
///
/// `entrance_eyes` and `entrance_scale` share the caller's entrance spec but
/// have different defaults (the eyelid reveal starts slightly after the
/// whole-face scale-in).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolvedTimings {
    /// Blink timing (seed-derived by default).
    pub blink: Timing,
    /// Glance timing (seed-derived by default).
    pub glance: Timing,
    /// Eyebrow bounce timing.
    pub eyebrow_bounce: Timing,
    /// Eye wander timing.
    pub eye_wander: Timing,
    /// Entrance timing applied to the eyes.
    pub entrance_eyes: Timing,
    /// Entrance timing applied to the document root.
    pub entrance_scale: Timing,
    /// Float timing.
    pub float: Timing,
    /// Sway timing.
    pub sway: Timing,
}

fn spec_for(specs: &[AnimationSpec], kind: AnimationKind) -> Option<&AnimationSpec> {
    specs.iter().find(|spec| spec.kind == kind)
}

fn timing(
    specs: &[AnimationSpec],
    kind: AnimationKind,
    default_delay: f64,
    default_duration: f64,
) -> Timing {
    let spec = spec_for(specs, kind);
    Timing {
        delay: spec.and_then(|s| s.delay).unwrap_or(default_delay),
        duration: spec.and_then(|s| s.duration).unwrap_or(default_duration),
    }
}

/// Resolve per-animation timing for a seed and requested animation list.
pub fn resolve_timings(seed: u32, specs: &[AnimationSpec]) -> ResolvedTimings {
    let blink_seed = u64::from(seed) * 31;
    let blink_frac = (blink_seed % 40) as f64 / 10.0;

    let glance_seed = u64::from(seed) * 37;
    let glance_duration = 6.0 + (glance_seed % 30) as f64 / 10.0;
    let glance_delay = (glance_seed % 20) as f64 / 10.0;

    ResolvedTimings {
        blink: timing(specs, AnimationKind::Blink, blink_frac, 2.0 + blink_frac),
        glance: timing(specs, AnimationKind::Glance, glance_delay, glance_duration),
        eyebrow_bounce: timing(specs, AnimationKind::EyebrowBounce, 0.0, 4.0),
        eye_wander: timing(specs, AnimationKind::EyeWander, 0.0, 8.0),
        entrance_eyes: timing(specs, AnimationKind::Entrance, 0.2, 0.3),
        entrance_scale: timing(specs, AnimationKind::Entrance, 0.0, 0.4),
        float: timing(specs, AnimationKind::Float, 0.0, 3.0),
        sway: timing(specs, AnimationKind::Sway, 0.0, 5.0),
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/variants/faces/anim.rs"]
mod tests;
