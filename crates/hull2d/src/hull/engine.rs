//! Hull engine: validation, sort, initial split, and the two grow passes.

use nalgebra::Point2;

use super::grow::{grow_hull, grow_hull_stack, right_of};
use super::types::{Hull, HullError};
use crate::geom2::{lex_cmp, Coord, CoordFault};

/// How the extreme-point search is driven.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Strategy {
    /// Direct recursion; call depth grows with unbalanced partitions.
    Recursive,
    /// Explicit heap-allocated work stack; constant call depth.
    #[default]
    ExplicitStack,
}

/// Engine configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HullCfg {
    pub strategy: Strategy,
}

/// Divide-and-conquer (QuickHull) convex hull engine.
///
/// Stateless apart from its configuration; cheap to copy and share.
#[derive(Clone, Copy, Debug, Default)]
pub struct HullEngine {
    cfg: HullCfg,
}

impl HullEngine {
    pub fn new(cfg: HullCfg) -> Self {
        Self { cfg }
    }

    pub fn with_strategy(strategy: Strategy) -> Self {
        Self::new(HullCfg { strategy })
    }

    pub fn cfg(&self) -> HullCfg {
        self.cfg
    }

    /// Convex hull vertices of `points`, in discovery order.
    ///
    /// - Fewer than 3 points: returned unchanged (no coordinate checks).
    /// - Otherwise every coordinate is range-checked, a copy is sorted by
    ///   (x, y), and with `A`/`B` the first/last sorted points the output is
    ///   `A, grow(right of A→B), B, grow(right of B→A)`.
    /// - Points on the line `AB` are discarded, so collinear input yields
    ///   exactly `[A, B]`.
    pub fn compute_hull<T: Coord>(&self, points: &[Point2<T>]) -> Result<Hull<T>, HullError> {
        if points.len() < 3 {
            return Ok(Hull::from_vertices(points.to_vec()));
        }
        validate(points)?;

        let mut sorted = points.to_vec();
        sorted.sort_by(lex_cmp);
        let a = sorted[0];
        let b = sorted[sorted.len() - 1];

        let lower = right_of(&sorted, &a, &b);
        let upper = right_of(&sorted, &b, &a);
        tracing::trace!(
            n = points.len(),
            lower = lower.len(),
            upper = upper.len(),
            "hull_split"
        );

        let mut vertices = vec![a];
        vertices.extend(self.grow(lower, a, b));
        vertices.push(b);
        vertices.extend(self.grow(upper, b, a));
        tracing::debug!(
            n = points.len(),
            hull = vertices.len(),
            strategy = ?self.cfg.strategy,
            "hull_done"
        );
        Ok(Hull::from_vertices(vertices))
    }

    fn grow<T: Coord>(&self, candidates: Vec<Point2<T>>, a: Point2<T>, b: Point2<T>) -> Vec<Point2<T>> {
        match self.cfg.strategy {
            Strategy::Recursive => grow_hull(&candidates, a, b),
            Strategy::ExplicitStack => grow_hull_stack(candidates, a, b),
        }
    }
}

/// Convex hull with the default engine configuration.
pub fn compute_hull<T: Coord>(points: &[Point2<T>]) -> Result<Hull<T>, HullError> {
    HullEngine::default().compute_hull(points)
}

fn validate<T: Coord>(points: &[Point2<T>]) -> Result<(), HullError> {
    for (index, p) in points.iter().enumerate() {
        p.x.check()
            .and_then(|()| p.y.check())
            .map_err(|fault| match fault {
                CoordFault::NonFinite => HullError::NonFiniteCoordinate { index },
                CoordFault::OutOfRange => HullError::CoordinateRangeExceeded { index },
            })?;
    }
    Ok(())
}
