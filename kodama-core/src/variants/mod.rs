//! Built-in variant modules.
//!
//! Exactly one concrete visual style ships today; the engine only ever sees
//! the [`Variant`](crate::engine::variant::Variant) interface, so further
//! styles plug in without touching the composition path.

pub mod faces;
