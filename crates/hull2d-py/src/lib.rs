//! PyO3 bindings for selected `hull2d` functions.
//!
//! Notes
//! - Keep bindings thin and predictable: points cross the boundary as lists of
//!   `(x, y)` tuples; NumPy conversion belongs in the Python wrapper.
//! - Engine errors surface as `ValueError` with the offending point index.

use pyo3::prelude::*;

mod common;
mod geom;
mod hull;

#[pymodule]
fn hull2d_native(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add("__version__", hull2d::VERSION)?;
    hull::register(m)?;
    geom::register(m)?;
    Ok(())
}
