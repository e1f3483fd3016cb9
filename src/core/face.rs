//! Face identification and colour indices.
//!
//! ## Face
//!
//! The six outer faces in the fixed persisted order
//! `Up, Down, Front, Back, Left, Right`. A face's index doubles as its
//! home colour: a solved cube has face `f` filled with colour `f.index()`.
//!
//! ## ColorIndex
//!
//! Sticker colours are plain indices in `0..6`.

use serde::{Deserialize, Serialize};

/// Sticker colour index in `0..COLOR_COUNT`.
pub type ColorIndex = u8;

/// Number of distinct sticker colours.
pub const COLOR_COUNT: usize = 6;

/// One of the six outer faces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Face {
    Up,
    Down,
    Front,
    Back,
    Left,
    Right,
}

impl Face {
    /// All faces in persisted order.
    pub const ALL: [Face; 6] = [
        Face::Up,
        Face::Down,
        Face::Front,
        Face::Back,
        Face::Left,
        Face::Right,
    ];

    /// Position of this face in [`Face::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Face at the given persisted position.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Face> {
        Face::ALL.get(index).copied()
    }

    /// Colour the face carries when the cube is solved.
    #[must_use]
    pub const fn home_color(self) -> ColorIndex {
        self as ColorIndex
    }

    /// The face on the other side of the cube.
    #[must_use]
    pub const fn opposite(self) -> Face {
        match self {
            Face::Up => Face::Down,
            Face::Down => Face::Up,
            Face::Front => Face::Back,
            Face::Back => Face::Front,
            Face::Left => Face::Right,
            Face::Right => Face::Left,
        }
    }

    /// Single-letter name (`U`, `D`, `F`, `B`, `L`, `R`).
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Face::Up => 'U',
            Face::Down => 'D',
            Face::Front => 'F',
            Face::Back => 'B',
            Face::Left => 'L',
            Face::Right => 'R',
        }
    }
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Letter used when rendering a colour index
/// (white, yellow, blue, green, red, orange).
#[must_use]
pub fn color_letter(color: ColorIndex) -> char {
    match color {
        0 => 'W',
        1 => 'Y',
        2 => 'B',
        3 => 'G',
        4 => 'R',
        5 => 'O',
        _ => '?',
    }
}
