//! Core types: faces, grids, cube state, errors, RNG, configuration.
//!
//! `CubeState` is the single source of truth for a cube. Everything else
//! in the crate either mutates it through the move engine or derives a
//! read-only view from it.

pub mod error;
pub mod face;
pub mod grid;
pub mod state;
pub mod rng;
pub mod config;

pub use error::{CubeError, Result};
pub use face::{color_letter, ColorIndex, Face, COLOR_COUNT};
pub use grid::{FaceGrid, Line, Strip};
pub use state::{CubeState, MIN_SIZE};
pub use rng::{CubeRng, CubeRngState};
pub use config::CubeConfig;
