//! Default gradient palette.

use crate::foundation::core::GradientPair;

/// Number of entries in the default palette.
pub const DEFAULT_GRADIENT_COUNT: usize = 16;

const DEFAULT_GRADIENTS: [(&str, &str); DEFAULT_GRADIENT_COUNT] = [
    ("#E8D5F5", "#C7A4E0"),
    ("#FFE0D0", "#FFB899"),
    ("#D5F5E3", "#A8E6CF"),
    ("#D6EEFF", "#9DD1F5"),
    ("#FFD4D4", "#FF9E9E"),
    ("#FFF5CC", "#FFE580"),
    ("#E0EFD9", "#B8D4A8"),
    ("#FFE4EE", "#FFB6D0"),
    ("#F5E6D0", "#E8C9A0"),
    ("#D0F0F5", "#A0DDE8"),
    ("#F0D5E8", "#E0A4CC"),
    ("#D5E8F5", "#A4C7E0"),
    ("#F5F0D5", "#E8DDA0"),
    ("#E0D5F0", "#BCA4E0"),
    ("#F5D5D0", "#E8A4A0"),
    ("#D0F5E0", "#A0E8BF"),
];

/// The default 16-entry palette as owned pairs.
pub fn default_gradients() -> Vec<GradientPair> {
    DEFAULT_GRADIENTS
        .iter()
        .map(|(from, to)| GradientPair::new(*from, *to))
        .collect()
}

/// Pick a gradient by index, taken modulo the palette length.
///
/// An absent (or empty) custom palette falls back to the default one.
pub fn pick_gradient(custom: Option<&[GradientPair]>, index: usize) -> GradientPair {
    match custom {
        Some(palette) if !palette.is_empty() => palette[index % palette.len()].clone(),
        _ => {
            let (from, to) = DEFAULT_GRADIENTS[index % DEFAULT_GRADIENT_COUNT];
            GradientPair::new(from, to)
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/variants/faces/palette.rs"]
mod tests;
