//! Planar convex hulls by divide and conquer (QuickHull).
//!
//! Layout
//! - `geom2`: coordinate kinds (`Coord`), orientation predicates, point samplers.
//! - `hull`: `HullEngine`, the extreme-point search, `Hull`, boundary ordering.
//! - `scaling`: timing harness and log-log fit for scaling runs.
//!
//! API Policy
//! - This crate is project-internal. There is no stable public API; the CLI and
//!   the Python bindings are the only consumers.

pub mod api;
pub mod geom2;
pub mod hull;
pub mod scaling;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom2::{Coord, Side};
pub use hull::{compute_hull, Hull, HullCfg, HullEngine, HullError, Strategy, Winding};
pub use nalgebra::Point2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::rand::{circle_points, uniform_box_points, uniform_grid_points, ReplayToken};
    pub use crate::geom2::{cross, side_of, Coord, Side};
    pub use crate::hull::{compute_hull, order_clockwise, Hull, HullCfg, HullEngine, HullError, Strategy, Winding};
    pub use nalgebra::Point2;
}
