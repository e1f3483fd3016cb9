//! Scramble generation.
//!
//! A scramble is `count` moves, each an independent uniform draw of a
//! kind from the allowed set and a fair coin for the direction. Nothing
//! filters out a move that cancels its predecessor.

use log::debug;

use crate::core::{CubeConfig, CubeError, CubeRng, CubeState, Result};
use crate::moves::{format_sequence, Direction, Move, MoveEngine, MoveKind};

/// Draws random move sequences from a fixed set of move kinds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrambleGenerator {
    kinds: Vec<MoveKind>,
}

impl Default for ScrambleGenerator {
    /// All nine move kinds.
    fn default() -> Self {
        Self {
            kinds: MoveKind::ALL.to_vec(),
        }
    }
}

impl ScrambleGenerator {
    /// Generator over the given kinds. Fails on an empty set.
    pub fn new(kinds: &[MoveKind]) -> Result<Self> {
        if kinds.is_empty() {
            return Err(CubeError::InvalidConfiguration(
                "scramble move set is empty".into(),
            ));
        }
        Ok(Self {
            kinds: kinds.to_vec(),
        })
    }

    /// Generator over `config.scramble_kinds`.
    pub fn from_config(config: &CubeConfig) -> Result<Self> {
        Self::new(&config.scramble_kinds)
    }

    /// Allowed move kinds.
    #[must_use]
    pub fn kinds(&self) -> &[MoveKind] {
        &self.kinds
    }

    /// Draw `count` moves without applying them.
    pub fn generate(&self, count: usize, rng: &mut CubeRng) -> Vec<Move> {
        (0..count)
            .map(|_| {
                let kind = self.kinds[rng.gen_index(self.kinds.len())];
                let direction = if rng.gen_bool(0.5) {
                    Direction::Clockwise
                } else {
                    Direction::CounterClockwise
                };
                Move::new(kind, direction)
            })
            .collect()
    }

    /// Draw `count` moves, apply them to `state` in order and return them.
    pub fn scramble(&self, state: &mut CubeState, count: usize, rng: &mut CubeRng) -> Vec<Move> {
        let moves = self.generate(count, rng);
        MoveEngine::apply_all(state, &moves);
        debug!("scrambled with {count} moves: {}", format_sequence(&moves));
        moves
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::invert_sequence;

    #[test]
    fn test_empty_kinds_rejected() {
        assert!(matches!(
            ScrambleGenerator::new(&[]),
            Err(CubeError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_default_uses_all_kinds() {
        assert_eq!(ScrambleGenerator::default().kinds(), &MoveKind::ALL);
    }

    #[test]
    fn test_same_seed_same_scramble() {
        let generator = ScrambleGenerator::default();
        let a = generator.generate(30, &mut CubeRng::new(7));
        let b = generator.generate(30, &mut CubeRng::new(7));
        let c = generator.generate(30, &mut CubeRng::new(8));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_scramble_length_and_kinds() {
        let generator = ScrambleGenerator::new(&[MoveKind::R, MoveKind::U]).unwrap();
        let mut state = CubeState::new(3).unwrap();
        let moves = generator.scramble(&mut state, 25, &mut CubeRng::new(1));

        assert_eq!(moves.len(), 25);
        assert!(moves.iter().all(|m| matches!(m.kind, MoveKind::R | MoveKind::U)));
        state.check_invariants().unwrap();
    }

    #[test]
    fn test_zero_moves_leaves_cube_solved() {
        let mut state = CubeState::new(4).unwrap();
        let moves = ScrambleGenerator::default().scramble(&mut state, 0, &mut CubeRng::new(3));
        assert!(moves.is_empty());
        assert!(state.is_solved());
    }

    #[test]
    fn test_inverse_scramble_solves() {
        let mut state = CubeState::new(5).unwrap();
        let moves = ScrambleGenerator::default().scramble(&mut state, 40, &mut CubeRng::new(99));
        MoveEngine::apply_all(&mut state, &invert_sequence(&moves));
        assert!(state.is_solved());
    }

    #[test]
    fn test_both_directions_drawn() {
        let moves = ScrambleGenerator::default().generate(200, &mut CubeRng::new(5));
        assert!(moves.iter().any(|m| m.direction == Direction::Clockwise));
        assert!(moves.iter().any(|m| m.direction == Direction::CounterClockwise));
    }
}
