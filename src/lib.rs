//! # twisty-cube
//!
//! Logical state machine for `n×n×n` twisty cubes, built for agents that
//! learn to solve them.
//!
//! ## Design Principles
//!
//! 1. **Pure state**: a cube is six sticker grids and nothing else. No
//!    geometry, no animation. Moves are permutations of stickers.
//!
//! 2. **Any size**: every operation takes `n` from the state. Face moves
//!    work for `n >= 2`, slice and layer turns wherever they address a
//!    real layer.
//!
//! 3. **Deterministic**: scrambles come from a seeded, forkable RNG, so
//!    the same config replays the same episodes.
//!
//! ## Modules
//!
//! - `core`: faces, grids, `CubeState`, errors, RNG, configuration
//! - `moves`: notation, strip wiring, `MoveEngine`, layer turns, actions
//! - `scramble`: random move sequences
//! - `detect`: solved detection on a state or an external scan
//! - `session`: scrambled episodes with history and undo
//! - `encoding`: observation tensors
//!
//! ```
//! use twisty_cube::{parse_sequence, CubeState, MoveEngine, SolvedDetector};
//!
//! let mut cube = CubeState::new(3).unwrap();
//! let moves = parse_sequence("R U R' U'").unwrap();
//! for _ in 0..6 {
//!     MoveEngine::apply_all(&mut cube, &moves);
//! }
//! assert!(SolvedDetector::inspect(&cube).cube_solved);
//! ```

pub mod core;
pub mod moves;
pub mod scramble;
pub mod detect;
pub mod session;
pub mod encoding;

#[cfg(feature = "python")]
mod python;

// Re-export commonly used types
pub use crate::core::{
    CubeError, Result,
    Face, ColorIndex, FaceGrid, Line,
    CubeState, CubeRng, CubeRngState, CubeConfig,
};

pub use crate::moves::{
    MoveKind, Direction, Move, Axis, LayerTurn, MoveEngine,
    parse_sequence, format_sequence, invert_sequence, ACTION_COUNT,
};

pub use crate::scramble::ScrambleGenerator;

pub use crate::detect::{SolveReport, SolvedDetector, ScanResult};

pub use crate::session::{CubeSession, StepOutcome, Turn};

pub use crate::encoding::{EncodedState, StateEncoder, StickerEncoder, OneHotEncoder};
