//! Layer turns addressed by axis and depth.
//!
//! Generalises face and slice moves to any layer of an `n×n×n` cube:
//!
//! | Axis | Layers counted from | Clockwise as seen from | Layer `n-1` |
//! |---|---|---|---|
//! | `X` | Left  | Left  | `R` reversed |
//! | `Y` | Up    | Up    | `D` reversed |
//! | `Z` | Front | Front | `B` reversed |

use serde::{Deserialize, Serialize};

use super::notation::{Direction, Move, MoveKind};

/// Turning axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// Left to Right.
    X,
    /// Up to Down.
    Y,
    /// Front to Back.
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Face move for layer 0.
    #[must_use]
    pub const fn near_kind(self) -> MoveKind {
        match self {
            Axis::X => MoveKind::L,
            Axis::Y => MoveKind::U,
            Axis::Z => MoveKind::F,
        }
    }

    /// Face move for layer `n-1` (turned the opposite way).
    #[must_use]
    pub const fn far_kind(self) -> MoveKind {
        match self {
            Axis::X => MoveKind::R,
            Axis::Y => MoveKind::D,
            Axis::Z => MoveKind::B,
        }
    }
}

/// A quarter turn of one layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LayerTurn {
    pub axis: Axis,
    pub layer: usize,
    pub direction: Direction,
}

impl LayerTurn {
    #[must_use]
    pub const fn new(axis: Axis, layer: usize, direction: Direction) -> Self {
        Self { axis, layer, direction }
    }

    /// Same layer, opposite direction.
    #[must_use]
    pub const fn inverse(self) -> Self {
        Self::new(self.axis, self.layer, self.direction.opposite())
    }

    /// Named face move this turn is equivalent to on an `n`-cube, if it
    /// addresses an outer layer.
    #[must_use]
    pub fn as_face_move(self, n: usize) -> Option<Move> {
        if self.layer == 0 {
            Some(Move::new(self.axis.near_kind(), self.direction))
        } else if self.layer + 1 == n {
            Some(Move::new(self.axis.far_kind(), self.direction.opposite()))
        } else {
            None
        }
    }
}

impl std::fmt::Display for LayerTurn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prime = match self.direction {
            Direction::Clockwise => "",
            Direction::CounterClockwise => "'",
        };
        write!(f, "{:?}[{}]{}", self.axis, self.layer, prime)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outer_layers_map_to_face_moves() {
        let turn = LayerTurn::new(Axis::X, 0, Direction::Clockwise);
        assert_eq!(turn.as_face_move(3), Some(Move::cw(MoveKind::L)));

        let turn = LayerTurn::new(Axis::Y, 3, Direction::Clockwise);
        assert_eq!(turn.as_face_move(4), Some(Move::ccw(MoveKind::D)));

        let turn = LayerTurn::new(Axis::Z, 1, Direction::Clockwise);
        assert_eq!(turn.as_face_move(4), None);
    }

    #[test]
    fn test_inverse() {
        let turn = LayerTurn::new(Axis::Z, 2, Direction::CounterClockwise);
        assert_eq!(turn.inverse().direction, Direction::Clockwise);
        assert_eq!(turn.inverse().inverse(), turn);
    }

    #[test]
    fn test_display() {
        let turn = LayerTurn::new(Axis::Y, 1, Direction::CounterClockwise);
        assert_eq!(turn.to_string(), "Y[1]'");
    }
}
