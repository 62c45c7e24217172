//! Hull bindings: float and integer entry points plus boundary ordering.

use crate::common::{map_hull_err, winding_from_str};
use hull2d::api::{hull_of_tuples, to_points, to_tuples, Coord, HullEngine, Strategy};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

fn engine_for(strategy: &str) -> PyResult<HullEngine> {
    let strategy = match strategy {
        "stack" => Strategy::ExplicitStack,
        "recursive" => Strategy::Recursive,
        other => {
            return Err(PyValueError::new_err(format!(
                "strategy must be 'stack' or 'recursive', got {other}"
            )))
        }
    };
    Ok(HullEngine::with_strategy(strategy))
}

fn run<T: Coord>(pts: Vec<(T, T)>, order: &str, strategy: &str) -> PyResult<Vec<(T, T)>> {
    let winding = winding_from_str(order)?;
    let engine = engine_for(strategy)?;
    hull_of_tuples(&engine, &pts, winding).map_err(map_hull_err)
}

/// Hull vertices of float points; raises `ValueError` on NaN/inf or out-of-range input.
#[pyfunction]
#[pyo3(signature = (points, order = "discovery", strategy = "stack"))]
pub fn convex_hull(points: Vec<(f64, f64)>, order: &str, strategy: &str) -> PyResult<Vec<(f64, f64)>> {
    run(points, order, strategy)
}

/// Hull vertices of integer points (exact predicates, |c| <= 2^62 - 1).
#[pyfunction]
#[pyo3(signature = (points, order = "discovery", strategy = "stack"))]
pub fn convex_hull_int(points: Vec<(i64, i64)>, order: &str, strategy: &str) -> PyResult<Vec<(i64, i64)>> {
    run(points, order, strategy)
}

#[pyfunction]
pub fn order_clockwise(vertices: Vec<(f64, f64)>) -> Vec<(f64, f64)> {
    to_tuples(&hull2d::api::order_clockwise(&to_points(&vertices)))
}

/// Shoelace area; positive for counterclockwise rings.
#[pyfunction]
pub fn signed_area(ring: Vec<(f64, f64)>) -> f64 {
    hull2d::api::signed_area(&to_points(&ring))
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(convex_hull, m)?)?;
    m.add_function(wrap_pyfunction!(convex_hull_int, m)?)?;
    m.add_function(wrap_pyfunction!(order_clockwise, m)?)?;
    m.add_function(wrap_pyfunction!(signed_area, m)?)?;
    Ok(())
}
