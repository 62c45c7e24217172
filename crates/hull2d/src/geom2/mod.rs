//! Planar geometry primitives for the hull engine.
//!
//! Purpose
//! - Fix one sign convention for "right of a directed line" and use it
//!   everywhere (`side_of`).
//! - Make numeric width explicit per coordinate type (`Coord`): integer inputs
//!   get exact predicates in a wider accumulator, float inputs are range-checked.
//!
//! Why exact-sign predicates
//! - The hull recursion only compares signs and magnitudes of cross products
//!   for a fixed edge; no division or epsilon is involved, so integer inputs
//!   are handled exactly and float inputs behave deterministically.
//!
//! Code cross-refs: `hull::HullEngine`, `hull::grow_hull`

pub mod cfg;
mod predicates;
pub mod rand;
mod types;

pub use predicates::{cross, lex_cmp, perpendicular_magnitude, side_of};
pub use types::{Coord, CoordFault, Side};
