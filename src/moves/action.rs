//! Discrete action encoding for agents that drive the six outer faces.
//!
//! Indices `0..12`: `index % 6` picks the face in the order
//! `U D L R F B`, indices below 6 turn clockwise. Policies trained against
//! this layout depend on it, so the order must not change.

use crate::core::{CubeError, Result};

use super::notation::{Direction, Move, MoveKind};

/// Number of discrete actions.
pub const ACTION_COUNT: usize = 12;

const ACTION_KINDS: [MoveKind; 6] = [
    MoveKind::U,
    MoveKind::D,
    MoveKind::L,
    MoveKind::R,
    MoveKind::F,
    MoveKind::B,
];

impl Move {
    /// Decode a discrete action index.
    pub fn from_action(action: usize) -> Result<Move> {
        if action >= ACTION_COUNT {
            return Err(CubeError::InvalidMove(format!(
                "action {action} out of range 0..{ACTION_COUNT}"
            )));
        }
        let kind = ACTION_KINDS[action % ACTION_KINDS.len()];
        let direction = if action < ACTION_KINDS.len() {
            Direction::Clockwise
        } else {
            Direction::CounterClockwise
        };
        Ok(Move::new(kind, direction))
    }

    /// Discrete action index for this move, `None` for slice moves.
    #[must_use]
    pub fn to_action(self) -> Option<usize> {
        let slot = ACTION_KINDS.iter().position(|&k| k == self.kind)?;
        Some(match self.direction {
            Direction::Clockwise => slot,
            Direction::CounterClockwise => slot + ACTION_KINDS.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_table() {
        let expected = [
            "U", "D", "L", "R", "F", "B", "U'", "D'", "L'", "R'", "F'", "B'",
        ];
        for (action, text) in expected.iter().enumerate() {
            assert_eq!(Move::from_action(action).unwrap().to_string(), *text);
        }
    }

    #[test]
    fn test_action_round_trip() {
        for action in 0..ACTION_COUNT {
            let mv = Move::from_action(action).unwrap();
            assert_eq!(mv.to_action(), Some(action));
        }
    }

    #[test]
    fn test_action_out_of_range() {
        assert!(matches!(
            Move::from_action(12),
            Err(CubeError::InvalidMove(_))
        ));
    }

    #[test]
    fn test_slices_have_no_action() {
        for kind in MoveKind::SLICE_TURNS {
            assert_eq!(Move::cw(kind).to_action(), None);
            assert_eq!(Move::ccw(kind).to_action(), None);
        }
    }
}
