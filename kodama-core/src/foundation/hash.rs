//! Seed derivation.
//!
//! The hash is the compatibility anchor of the whole pipeline: every slot
//! selection, color index, rotation and animation rhythm is a function of
//! it, and existing avatar URLs depend on its exact values. Do not change.

/// Hash an input string to a non-negative 32-bit seed.
///
/// Polynomial 31-hash over UTF-16 code units with two's-complement 32-bit
/// wraparound, followed by an absolute value. Total function: the empty
/// string hashes to `0`.
///
/// ```
/// assert_eq!(kodama::hash("alice"), 92_903_040);
/// assert_eq!(kodama::hash(""), 0);
/// ```
pub fn hash(name: &str) -> u32 {
    let mut h: i32 = 0;
    for unit in name.encode_utf16() {
        // (h << 5) - h + c, wrapped to 32 bits.
        h = h
            .wrapping_shl(5)
            .wrapping_sub(h)
            .wrapping_add(i32::from(unit));
    }
    h.unsigned_abs()
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/hash.rs"]
mod tests;
