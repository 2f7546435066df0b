//! Shared value types used by generation and rendering.

/// A two-stop gradient (hex color strings).
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GradientPair {
    /// Inner/start color, e.g. `#E8D5F5`. Also the solid-background fill.
    pub from: String,
    /// Outer/end color.
    pub to: String,
}

impl GradientPair {
    /// Build a pair from two hex color strings.
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// Pseudo-3D tilt direction.
///
/// Each component is in `{-1, 0, 1}`; the pair is picked from a fixed
/// 9-entry position table, not computed continuously.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rotation {
    /// Tilt around the horizontal axis.
    pub x: i32,
    /// Tilt around the vertical axis.
    pub y: i32,
}

/// Format a number for markup attributes: up to three decimal places,
/// trailing zeros (and a trailing dot) trimmed.
pub(crate) fn fmt3(value: f64) -> String {
    let mut s = format!("{value:.3}");
    while s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }
    if s == "-0" {
        return "0".to_string();
    }
    s
}

/// Lowercase base-36 rendering of a seed, used for SVG element ids.
pub(crate) fn to_base36(mut value: u32) -> String {
    const DIGITS: [char; 36] = [
        '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h',
        'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
    ];
    if value == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while value > 0 {
        digits.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    digits.iter().rev().collect()
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
