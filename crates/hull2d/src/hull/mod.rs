//! QuickHull in the plane: divide-and-conquer convex hull.
//!
//! Purpose
//! - Compute the vertex set of the convex hull of a finite point set in
//!   O(N log N) expected time (O(N²) worst case, as with quicksort pivots).
//!
//! Structure
//! - `engine.rs`: `HullEngine` (validation, sort, initial split by the
//!   lexicographic extremes, concatenation of the two sides).
//! - `grow.rs`: extreme-point search between two hull vertices (recursive and
//!   explicit-stack forms with identical output).
//! - `types.rs`: `Hull` result and `HullError`.
//! - `order.rs`: boundary ordering around the centroid (presentation only).
//!
//! Output order
//! - Discovery order `A, lower side, B, upper side`; never geometric order.
//!   Callers that need a ring use `Hull::ordered` or `order::order_clockwise`.
//!
//! Code cross-refs: `geom2::{side_of, perpendicular_magnitude, Coord}`

mod engine;
mod grow;
pub mod order;
mod types;

pub use engine::{compute_hull, HullCfg, HullEngine, Strategy};
pub use grow::{farthest_from_line, grow_hull, grow_hull_stack, right_of};
pub use order::{order_around_centroid, order_clockwise, signed_area, Winding};
pub use types::{Hull, HullError};

#[cfg(test)]
mod tests;
