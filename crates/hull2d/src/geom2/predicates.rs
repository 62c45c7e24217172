//! Orientation predicates on directed lines.
//!
//! All side tests in the crate go through `side_of`, so "right of A→B" means
//! the same thing everywhere: `(b - a) × (p - a) < 0`.

use std::cmp::Ordering;

use nalgebra::Point2;

use super::types::{Coord, Side};

/// Signed cross product `(b - a) × (p - a)`.
///
/// Positive for a counterclockwise turn a→b→p, negative for clockwise, zero if
/// the three points are collinear. Magnitude is twice the triangle area.
#[inline]
pub fn cross<T: Coord>(a: &Point2<T>, b: &Point2<T>, p: &Point2<T>) -> T::Wide {
    T::cross(a, b, p)
}

/// Classify `p` against the directed line `a→b`.
#[inline]
pub fn side_of<T: Coord>(a: &Point2<T>, b: &Point2<T>, p: &Point2<T>) -> Side {
    let c = cross(a, b, p);
    if c < T::WIDE_ZERO {
        Side::Right
    } else if c > T::WIDE_ZERO {
        Side::Left
    } else {
        Side::OnLine
    }
}

/// `|(b - a) × (p - a)|`: distance from `p` to line `ab` scaled by `|ab|`.
///
/// Only meaningful for comparing candidates against the same `a`, `b`.
#[inline]
pub fn perpendicular_magnitude<T: Coord>(a: &Point2<T>, b: &Point2<T>, p: &Point2<T>) -> T::Wide {
    T::magnitude(cross(a, b, p))
}

/// Lexicographic (x, then y) order on points.
#[inline]
pub fn lex_cmp<T: Coord>(p: &Point2<T>, q: &Point2<T>) -> Ordering {
    p.x.key_cmp(&q.x).then_with(|| p.y.key_cmp(&q.y))
}
