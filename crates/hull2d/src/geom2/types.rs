//! Coordinate kinds and side classification.
//!
//! - `Coord`: per-type accumulator width, supported range, and total order.
//! - `Side`: result of the directed-line side test.
//!
//! Code cross-refs: `predicates::{cross, side_of, perpendicular_magnitude}`, `cfg`

use std::cmp::Ordering;
use std::fmt;

use nalgebra::{Point2, Scalar};

use super::cfg::{F64_COORD_MAX, I64_COORD_MAX};

/// Which side of a directed line `A→B` a point lies on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// Cross product `< 0` (clockwise turn).
    Right,
    /// Cross product `> 0` (counterclockwise turn).
    Left,
    /// Cross product exactly `0`.
    OnLine,
}

/// Why a coordinate was rejected by [`Coord::check`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CoordFault {
    NonFinite,
    OutOfRange,
}

/// A coordinate type the hull engine can work with.
///
/// Implementations fix the accumulator used for cross products (`Wide`) and the
/// input range for which that accumulator cannot overflow:
///
/// | `Self` | `Wide` | accepted `|c|`        |
/// |--------|--------|-----------------------|
/// | `i32`  | `i128` | all                   |
/// | `i64`  | `i128` | `<= I64_COORD_MAX`    |
/// | `f64`  | `f64`  | finite, `<= F64_COORD_MAX` |
pub trait Coord: Scalar + Copy + PartialOrd {
    /// Cross-product accumulator.
    type Wide: Copy + PartialOrd + fmt::Debug;

    /// Additive identity of `Wide`.
    const WIDE_ZERO: Self::Wide;

    /// Range/finiteness check applied once per input point.
    fn check(self) -> Result<(), CoordFault>;

    /// Total order used for the (x, y) sort key.
    fn key_cmp(&self, other: &Self) -> Ordering;

    /// `(b - a) × (p - a)` evaluated in `Wide`.
    fn cross(a: &Point2<Self>, b: &Point2<Self>, p: &Point2<Self>) -> Self::Wide;

    /// Absolute value in `Wide`.
    fn magnitude(w: Self::Wide) -> Self::Wide;

    /// Lossy conversion for presentation (angles, centroids, reports).
    fn to_f64(self) -> f64;
}

impl Coord for i32 {
    type Wide = i128;
    const WIDE_ZERO: i128 = 0;

    #[inline]
    fn check(self) -> Result<(), CoordFault> {
        Ok(())
    }
    #[inline]
    fn key_cmp(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
    #[inline]
    fn cross(a: &Point2<i32>, b: &Point2<i32>, p: &Point2<i32>) -> i128 {
        let (ax, ay) = (a.x as i128, a.y as i128);
        let (bx, by) = (b.x as i128, b.y as i128);
        let (px, py) = (p.x as i128, p.y as i128);
        (bx - ax) * (py - ay) - (by - ay) * (px - ax)
    }
    #[inline]
    fn magnitude(w: i128) -> i128 {
        w.abs()
    }
    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }
}

impl Coord for i64 {
    type Wide = i128;
    const WIDE_ZERO: i128 = 0;

    #[inline]
    fn check(self) -> Result<(), CoordFault> {
        if self.unsigned_abs() > I64_COORD_MAX as u64 {
            return Err(CoordFault::OutOfRange);
        }
        Ok(())
    }
    #[inline]
    fn key_cmp(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
    #[inline]
    fn cross(a: &Point2<i64>, b: &Point2<i64>, p: &Point2<i64>) -> i128 {
        let (ax, ay) = (a.x as i128, a.y as i128);
        let (bx, by) = (b.x as i128, b.y as i128);
        let (px, py) = (p.x as i128, p.y as i128);
        (bx - ax) * (py - ay) - (by - ay) * (px - ax)
    }
    #[inline]
    fn magnitude(w: i128) -> i128 {
        w.abs()
    }
    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }
}

impl Coord for f64 {
    type Wide = f64;
    const WIDE_ZERO: f64 = 0.0;

    #[inline]
    fn check(self) -> Result<(), CoordFault> {
        if !self.is_finite() {
            return Err(CoordFault::NonFinite);
        }
        if self.abs() > F64_COORD_MAX {
            return Err(CoordFault::OutOfRange);
        }
        Ok(())
    }
    #[inline]
    fn key_cmp(&self, other: &Self) -> Ordering {
        // -0.0 and 0.0 are the same coordinate.
        (*self + 0.0).total_cmp(&(*other + 0.0))
    }
    #[inline]
    fn cross(a: &Point2<f64>, b: &Point2<f64>, p: &Point2<f64>) -> f64 {
        (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x)
    }
    #[inline]
    fn magnitude(w: f64) -> f64 {
        w.abs()
    }
    #[inline]
    fn to_f64(self) -> f64 {
        self
    }
}
