use hull2d::api::{Coord, HullError, Winding};
use hull2d::Point2;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

pub fn map_hull_err(err: HullError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

pub fn winding_from_str(order: &str) -> PyResult<Option<Winding>> {
    match order {
        "discovery" => Ok(None),
        "cw" => Ok(Some(Winding::Clockwise)),
        "ccw" => Ok(Some(Winding::CounterClockwise)),
        other => Err(PyValueError::new_err(format!(
            "order must be 'discovery', 'cw' or 'ccw', got {other}"
        ))),
    }
}

/// Reject a single point the engine would reject.
pub fn checked_point(p: (f64, f64), label: &str) -> PyResult<Point2<f64>> {
    if p.0.check().is_err() || p.1.check().is_err() {
        return Err(PyValueError::new_err(format!(
            "{label} must have finite coordinates within the supported range"
        )));
    }
    Ok(Point2::new(p.0, p.1))
}
