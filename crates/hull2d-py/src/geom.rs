//! Predicate bindings (kept separate so `lib.rs` stays tiny).

use crate::common::checked_point;
use hull2d::geom2::{cross as cross2, side_of as side2};
use hull2d::Side;
use pyo3::prelude::*;

/// `(b - a) × (p - a)`; negative means `p` is right of `a→b`.
#[pyfunction]
pub fn cross(a: (f64, f64), b: (f64, f64), p: (f64, f64)) -> PyResult<f64> {
    Ok(cross2(
        &checked_point(a, "a")?,
        &checked_point(b, "b")?,
        &checked_point(p, "p")?,
    ))
}

/// `"right"`, `"left"` or `"on"` for `p` against the directed line `a→b`.
#[pyfunction]
pub fn side_of(a: (f64, f64), b: (f64, f64), p: (f64, f64)) -> PyResult<&'static str> {
    let side = side2(
        &checked_point(a, "a")?,
        &checked_point(b, "b")?,
        &checked_point(p, "p")?,
    );
    Ok(match side {
        Side::Right => "right",
        Side::Left => "left",
        Side::OnLine => "on",
    })
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(cross, m)?)?;
    m.add_function(wrap_pyfunction!(side_of, m)?)?;
    Ok(())
}
