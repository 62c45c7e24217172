//! Curated internal API for the CLI and bindings (UNSTABLE).
//!
//! Important
//! - This is not a public API. It is a convenience surface for project-internal
//!   callers. Breaking changes are allowed and expected.

// Hull engine
pub use crate::hull::{
    compute_hull, order_around_centroid, order_clockwise, signed_area, Hull, HullCfg, HullEngine,
    HullError, Strategy, Winding,
};
// Predicates and coordinate kinds
pub use crate::geom2::{cross, perpendicular_magnitude, side_of, Coord, Side};
// Point samplers
pub use crate::geom2::rand::{circle_points, uniform_box_points, uniform_grid_points, ReplayToken};
// Scaling runs
pub use crate::scaling::{
    log_spaced_sizes, loglog_fit, measure_scaling, nlogn_reference, time_call, LogLogFit,
    ScalingSample,
};

use nalgebra::Point2;

/// `(x, y)` tuples to points.
pub fn to_points<T: Coord>(tuples: &[(T, T)]) -> Vec<Point2<T>> {
    tuples.iter().map(|&(x, y)| Point2::new(x, y)).collect()
}

/// Points to `(x, y)` tuples.
pub fn to_tuples<T: Coord>(points: &[Point2<T>]) -> Vec<(T, T)> {
    points.iter().map(|p| (p.x, p.y)).collect()
}

/// Hull of `(x, y)` tuples, as tuples.
///
/// `winding: None` keeps discovery order; `Some(w)` returns the boundary ring.
pub fn hull_of_tuples<T: Coord>(
    engine: &HullEngine,
    points: &[(T, T)],
    winding: Option<Winding>,
) -> Result<Vec<(T, T)>, HullError> {
    let hull = engine.compute_hull(&to_points(points))?;
    let vertices = match winding {
        None => hull.into_vertices(),
        Some(w) => hull.ordered(w),
    };
    Ok(to_tuples(&vertices))
}
