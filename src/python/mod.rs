//! Python bindings.
//!
//! # Quick Start
//!
//! ```python
//! import twisty_cube
//!
//! cube = twisty_cube.Cube(size=3, seed=42, scramble_moves=20)
//! scramble = cube.reset()
//!
//! obs, report, truncated = cube.step(0)
//! print(report.correct_counts, cube.is_solved())
//! ```

use pyo3::prelude::*;

mod py_cube;

pub use py_cube::*;

use crate::moves::ACTION_COUNT;

/// twisty_cube: N x N x N cube state machine for agent training.
#[pymodule]
fn twisty_cube(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyCube>()?;
    m.add_class::<PySolveReport>()?;
    m.add("ACTION_COUNT", ACTION_COUNT)?;
    Ok(())
}
