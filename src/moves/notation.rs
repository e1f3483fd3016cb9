//! Move vocabulary and standard notation.
//!
//! Nine move kinds (six outer faces, three middle slices) times two
//! directions. Notation follows the usual convention: `U` is a clockwise
//! quarter turn, `U'` counter-clockwise, and in sequences `U2` is two
//! clockwise quarter turns.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{CubeError, Face, Result};

/// What a move turns.
///
/// `U D F B L R` turn an outer face. `M E S` turn the middle slice
/// parallel to L/R, U/D and F/B respectively.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MoveKind {
    U,
    D,
    F,
    B,
    L,
    R,
    M,
    E,
    S,
}

impl MoveKind {
    /// All nine kinds.
    pub const ALL: [MoveKind; 9] = [
        MoveKind::U,
        MoveKind::D,
        MoveKind::F,
        MoveKind::B,
        MoveKind::L,
        MoveKind::R,
        MoveKind::M,
        MoveKind::E,
        MoveKind::S,
    ];

    /// The six outer-face kinds.
    pub const FACE_TURNS: [MoveKind; 6] = [
        MoveKind::U,
        MoveKind::D,
        MoveKind::F,
        MoveKind::B,
        MoveKind::L,
        MoveKind::R,
    ];

    /// The three middle-slice kinds.
    pub const SLICE_TURNS: [MoveKind; 3] = [MoveKind::M, MoveKind::E, MoveKind::S];

    /// Outer face turned by this kind, `None` for slice moves.
    #[must_use]
    pub const fn face(self) -> Option<Face> {
        match self {
            MoveKind::U => Some(Face::Up),
            MoveKind::D => Some(Face::Down),
            MoveKind::F => Some(Face::Front),
            MoveKind::B => Some(Face::Back),
            MoveKind::L => Some(Face::Left),
            MoveKind::R => Some(Face::Right),
            MoveKind::M | MoveKind::E | MoveKind::S => None,
        }
    }

    /// Face-turn kind for an outer face.
    #[must_use]
    pub const fn for_face(face: Face) -> MoveKind {
        match face {
            Face::Up => MoveKind::U,
            Face::Down => MoveKind::D,
            Face::Front => MoveKind::F,
            Face::Back => MoveKind::B,
            Face::Left => MoveKind::L,
            Face::Right => MoveKind::R,
        }
    }

    /// Whether this is a middle-slice move.
    #[must_use]
    pub const fn is_slice(self) -> bool {
        matches!(self, MoveKind::M | MoveKind::E | MoveKind::S)
    }

    /// Notation letter.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            MoveKind::U => 'U',
            MoveKind::D => 'D',
            MoveKind::F => 'F',
            MoveKind::B => 'B',
            MoveKind::L => 'L',
            MoveKind::R => 'R',
            MoveKind::M => 'M',
            MoveKind::E => 'E',
            MoveKind::S => 'S',
        }
    }

    /// Kind for a notation letter.
    #[must_use]
    pub fn from_letter(letter: char) -> Option<MoveKind> {
        MoveKind::ALL.into_iter().find(|kind| kind.letter() == letter)
    }
}

impl std::fmt::Display for MoveKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Turn direction, as seen looking at the turned face
/// (for slices: at the face whose direction they follow).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

impl Direction {
    /// Both directions.
    pub const ALL: [Direction; 2] = [Direction::Clockwise, Direction::CounterClockwise];

    /// The other direction.
    #[must_use]
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }

    /// Clockwise quarter turns needed to realise this direction.
    ///
    /// Counter-clockwise is always three clockwise quarter turns.
    #[must_use]
    pub const fn quarter_turns(self) -> usize {
        match self {
            Direction::Clockwise => 1,
            Direction::CounterClockwise => 3,
        }
    }
}

/// A single quarter-turn move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub kind: MoveKind,
    pub direction: Direction,
}

impl Move {
    /// Create a move.
    #[must_use]
    pub const fn new(kind: MoveKind, direction: Direction) -> Self {
        Self { kind, direction }
    }

    /// Clockwise move of `kind`.
    #[must_use]
    pub const fn cw(kind: MoveKind) -> Self {
        Self::new(kind, Direction::Clockwise)
    }

    /// Counter-clockwise move of `kind`.
    #[must_use]
    pub const fn ccw(kind: MoveKind) -> Self {
        Self::new(kind, Direction::CounterClockwise)
    }

    /// Same kind, opposite direction.
    #[must_use]
    pub const fn inverse(self) -> Self {
        Self::new(self.kind, self.direction.opposite())
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.direction {
            Direction::Clockwise => write!(f, "{}", self.kind),
            Direction::CounterClockwise => write!(f, "{}'", self.kind),
        }
    }
}

impl FromStr for Move {
    type Err = CubeError;

    /// Parse a single quarter turn: `X` or `X'`.
    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        let kind = chars
            .next()
            .and_then(MoveKind::from_letter)
            .ok_or_else(|| CubeError::InvalidMove(format!("unrecognized move {s:?}")))?;

        match chars.as_str() {
            "" => Ok(Move::cw(kind)),
            "'" => Ok(Move::ccw(kind)),
            _ => Err(CubeError::InvalidMove(format!(
                "unrecognized move {s:?}, expected {kind} or {kind}'"
            ))),
        }
    }
}

/// Parse a whitespace-separated move sequence.
///
/// Accepts `X`, `X'` and `X2`; `X2` expands to two clockwise quarter turns.
///
/// ```
/// use twisty_cube::moves::{parse_sequence, Move, MoveKind};
///
/// let moves = parse_sequence("R U2 M'").unwrap();
/// assert_eq!(moves, vec![
///     Move::cw(MoveKind::R),
///     Move::cw(MoveKind::U),
///     Move::cw(MoveKind::U),
///     Move::ccw(MoveKind::M),
/// ]);
/// ```
pub fn parse_sequence(text: &str) -> Result<Vec<Move>> {
    let mut moves = Vec::new();
    for token in text.split_whitespace() {
        match token.strip_suffix('2') {
            Some(base) if base.chars().count() == 1 => {
                let mv: Move = base.parse()?;
                moves.push(mv);
                moves.push(mv);
            }
            _ => moves.push(token.parse()?),
        }
    }
    Ok(moves)
}

/// Format a move sequence in notation, one token per quarter turn.
#[must_use]
pub fn format_sequence(moves: &[Move]) -> String {
    moves
        .iter()
        .map(Move::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// The sequence that undoes `moves`: inverses in reverse order.
#[must_use]
pub fn invert_sequence(moves: &[Move]) -> Vec<Move> {
    moves.iter().rev().map(|mv| mv.inverse()).collect()
}
