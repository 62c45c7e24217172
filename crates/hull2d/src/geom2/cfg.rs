//! Supported coordinate ranges (internal).
//!
//! Policy
//! - Each coordinate kind accepts inputs whose cross products fit its
//!   accumulator without overflow. Inputs outside these bounds are rejected
//!   once at the hull entry point, so predicates never need checked arithmetic.

/// Largest `|x|`, `|y|` accepted for `i64` coordinates.
///
/// With `|c| <= 2^62 - 1`, differences stay below `2^63` and the cross product
/// `(bx-ax)(py-ay) - (by-ay)(px-ax)` stays below `2^127` in `i128`.
pub const I64_COORD_MAX: i64 = (1 << 62) - 1;

/// Largest `|x|`, `|y|` accepted for `f64` coordinates.
///
/// Differences stay below `2e150`, products below `4e300`, and the cross product
/// below `8e300`, which is finite.
pub const F64_COORD_MAX: f64 = 1e150;
