//! Episode wrapper around a single cube.

pub mod cube_session;

pub use cube_session::{CubeSession, StepOutcome, Turn};
