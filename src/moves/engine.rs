//! Move application.
//!
//! Every move is realised as clockwise quarter turns: rotate the turned
//! face's own grid (outer moves only), then shift the four boundary strips
//! one step around their ring. Counter-clockwise is three clockwise
//! quarter turns, for every move kind.
//!
//! `apply` runs to completion and cannot be rolled back; undo by applying
//! [`Move::inverse`]. Callers must serialise applies to a given state.

use log::{debug, trace};

use crate::core::{CubeError, CubeState, Result, Strip};

use super::layer::LayerTurn;
use super::notation::{Move, MoveKind};
use super::wiring::{self, Ring};

/// Applies moves to a [`CubeState`].
#[derive(Clone, Copy, Debug, Default)]
pub struct MoveEngine;

impl MoveEngine {
    /// Apply one move in place.
    pub fn apply(state: &mut CubeState, mv: Move) {
        for _ in 0..mv.direction.quarter_turns() {
            Self::quarter_turn(state, mv.kind);
        }
        debug!("applied {mv}");
    }

    /// Apply moves in order.
    pub fn apply_all(state: &mut CubeState, moves: &[Move]) {
        for &mv in moves {
            Self::apply(state, mv);
        }
    }

    /// Apply a layer turn.
    ///
    /// Fails with `InvalidMove` if the layer index is outside `0..n`.
    /// Outer layers are the matching face moves.
    pub fn apply_layer(state: &mut CubeState, turn: LayerTurn) -> Result<()> {
        let n = state.size();
        if turn.layer >= n {
            return Err(CubeError::InvalidMove(format!(
                "layer {} out of range for a {n}x{n}x{n} cube",
                turn.layer
            )));
        }

        if let Some(mv) = turn.as_face_move(n) {
            Self::apply(state, mv);
            return Ok(());
        }

        let ring = wiring::layer_ring(turn.axis, turn.layer);
        for _ in 0..turn.direction.quarter_turns() {
            Self::cycle(state, &ring);
        }
        debug!("applied layer turn {turn}");
        Ok(())
    }

    fn quarter_turn(state: &mut CubeState, kind: MoveKind) {
        trace!("quarter turn {kind}");
        if let Some(face) = kind.face() {
            state.face_mut(face).rotate_clockwise();
        }
        Self::cycle(state, &wiring::ring(kind));
    }

    /// Move each strip of the ring onto its successor.
    ///
    /// All four strips are read before any is written.
    fn cycle(state: &mut CubeState, ring: &Ring) {
        let n = state.size();
        let strips: [Strip; 4] = std::array::from_fn(|i| {
            let from = ring[i].from;
            state.face(from.face).read_line(from.line(n))
        });

        for (handoff, strip) in ring.iter().zip(strips.iter()) {
            let to = handoff.to;
            state
                .face_mut(to.face)
                .write_line(to.line(n), strip, handoff.reversed);
        }
    }
}
