//! Moves: notation, strip wiring and the engine that applies them.
//!
//! - `notation`: `MoveKind`, `Direction`, `Move` and sequence parsing
//! - `wiring`: which strips each quarter turn cycles
//! - `engine`: `MoveEngine`, the only code that mutates a `CubeState`
//! - `layer`: turns of an arbitrary layer along an axis
//! - `action`: the 12-action discrete encoding

pub mod notation;
pub mod layer;
pub mod engine;
pub mod action;
mod wiring;

pub use notation::{format_sequence, invert_sequence, parse_sequence, Direction, Move, MoveKind};
pub use layer::{Axis, LayerTurn};
pub use engine::MoveEngine;
pub use action::ACTION_COUNT;
