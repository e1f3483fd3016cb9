//! Cube bindings for Python.

use numpy::PyArray1;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{CubeConfig, CubeError};
use crate::detect::SolveReport;
use crate::encoding::{StateEncoder, StickerEncoder};
use crate::moves::{format_sequence, parse_sequence, MoveEngine};
use crate::session::{CubeSession, StepOutcome};

fn to_py_err(err: CubeError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Python wrapper for SolveReport.
#[pyclass(name = "SolveReport")]
#[derive(Clone, Debug)]
pub struct PySolveReport(pub SolveReport);

#[pymethods]
impl PySolveReport {
    /// Per-face solved flags in face order U, D, F, B, L, R.
    #[getter]
    fn face_solved(&self) -> Vec<bool> {
        self.0.face_solved.to_vec()
    }

    /// Per-face correct sticker counts.
    #[getter]
    fn correct_counts(&self) -> Vec<usize> {
        self.0.correct_counts.to_vec()
    }

    #[getter]
    fn cube_solved(&self) -> bool {
        self.0.cube_solved
    }

    fn __repr__(&self) -> String {
        format!(
            "SolveReport(cube_solved={}, correct_counts={:?})",
            self.0.cube_solved, self.0.correct_counts
        )
    }
}

/// A scrambled cube driven by discrete actions.
///
/// Actions `0..12`: `action % 6` picks U, D, L, R, F, B; below 6 is
/// clockwise.
#[pyclass(name = "Cube")]
pub struct PyCube {
    session: CubeSession,
    encoder: StickerEncoder,
}

impl PyCube {
    fn outcome<'py>(
        &self,
        py: Python<'py>,
        outcome: StepOutcome,
    ) -> (Bound<'py, PyArray1<f32>>, PySolveReport, bool) {
        (
            self.observation(py),
            PySolveReport(outcome.report),
            outcome.truncated,
        )
    }
}

#[pymethods]
impl PyCube {
    /// Create a solved cube. Call `reset()` to scramble it.
    ///
    /// # Arguments
    /// - size: Side length (at least 2)
    /// - seed: RNG seed for deterministic scrambles
    /// - scramble_moves: Moves applied by each reset
    /// - move_limit: Moves per episode before `truncated` is reported
    #[new]
    #[pyo3(signature = (size = 3, seed = 42, scramble_moves = 20, move_limit = None))]
    fn new(size: usize, seed: u64, scramble_moves: usize, move_limit: Option<usize>) -> PyResult<Self> {
        let mut config = CubeConfig::default()
            .with_size(size)
            .with_seed(seed)
            .with_scramble_moves(scramble_moves);
        config.move_limit = move_limit;

        let session = CubeSession::new(config).map_err(to_py_err)?;
        Ok(Self {
            session,
            encoder: StickerEncoder::new(size),
        })
    }

    /// Start a new episode. Returns the scramble in notation.
    fn reset(&mut self) -> String {
        let scramble = self.session.reset();
        format_sequence(&scramble)
    }

    /// Apply a discrete action.
    ///
    /// Returns `(observation, report, truncated)`.
    fn step<'py>(
        &mut self,
        py: Python<'py>,
        action: usize,
    ) -> PyResult<(Bound<'py, PyArray1<f32>>, PySolveReport, bool)> {
        let outcome = self.session.step(action).map_err(to_py_err)?;
        Ok(self.outcome(py, outcome))
    }

    /// Apply a move sequence in notation, e.g. `"R U R' U'"`.
    ///
    /// Nothing is applied if any token fails to parse.
    fn apply(&mut self, notation: &str) -> PyResult<PySolveReport> {
        let moves = parse_sequence(notation).map_err(to_py_err)?;
        let mut report = self.session.report();
        for mv in moves {
            report = self.session.apply(mv).report;
        }
        Ok(PySolveReport(report))
    }

    /// Undo the last move. Returns it in notation, or None.
    fn undo(&mut self) -> PyResult<Option<String>> {
        let turn = self.session.undo().map_err(to_py_err)?;
        Ok(turn.map(|t| t.to_string()))
    }

    fn is_solved(&self) -> bool {
        self.session.is_solved()
    }

    /// Current solve report.
    fn report(&self) -> PySolveReport {
        PySolveReport(self.session.report())
    }

    /// Sticker observation as a float32 array.
    fn observation<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f32>> {
        let encoded = self.encoder.encode(self.session.state());
        PyArray1::from_vec_bound(py, encoded.tensor)
    }

    /// Six row-major grids in face order U, D, F, B, L, R.
    fn faces(&self) -> Vec<Vec<Vec<u8>>> {
        self.session.state().to_grids()
    }

    /// Moves applied since the last reset.
    #[getter]
    fn moves_taken(&self) -> usize {
        self.session.moves_taken()
    }

    #[getter]
    fn size(&self) -> usize {
        self.session.state().size()
    }

    /// Observation length.
    #[getter]
    fn observation_size(&self) -> usize {
        self.encoder.output_shape().iter().product()
    }

    /// Check a move sequence would solve the current cube, without applying it.
    fn solves(&self, notation: &str) -> PyResult<bool> {
        let moves = parse_sequence(notation).map_err(to_py_err)?;
        let mut state = self.session.state().clone();
        MoveEngine::apply_all(&mut state, &moves);
        Ok(state.is_solved())
    }

    fn __repr__(&self) -> String {
        format!("Cube(size={}, solved={})", self.size(), self.is_solved())
    }

    fn __str__(&self) -> String {
        self.session.state().to_string()
    }
}
