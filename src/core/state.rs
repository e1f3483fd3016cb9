//! Cube state: six `n×n` sticker grids.
//!
//! ## Invariants
//!
//! - Every colour `0..6` appears exactly `n²` times across the cube.
//!   Moves are permutations, so they never break this.
//! - Every cell holds a colour in `0..6`.
//!
//! `CubeState` has no public mutators. Stickers only move through
//! [`MoveEngine`](crate::moves::MoveEngine), which keeps both invariants.
//!
//! ## Persisted layout
//!
//! Serialises as `{ size, faces }` with `faces` holding six row-major
//! `n×n` grids in the order Up, Down, Front, Back, Left, Right.
//! Deserialising re-checks both invariants.

use serde::{Deserialize, Serialize};

use super::error::{CubeError, Result};
use super::face::{color_letter, ColorIndex, Face, COLOR_COUNT};
use super::grid::FaceGrid;

/// Smallest supported cube.
pub const MIN_SIZE: usize = 2;

/// Logical state of an `n×n×n` cube.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "CubeStateRepr", into = "CubeStateRepr")]
pub struct CubeState {
    size: usize,
    faces: [FaceGrid; 6],
}

impl CubeState {
    /// Create a solved cube: face `f` is filled with colour `f.index()`.
    ///
    /// Fails with `InvalidConfiguration` when `size < 2`.
    pub fn new(size: usize) -> Result<Self> {
        if size < MIN_SIZE {
            return Err(CubeError::InvalidConfiguration(format!(
                "cube size must be at least {MIN_SIZE}, got {size}"
            )));
        }
        Ok(Self {
            size,
            faces: Face::ALL.map(|face| FaceGrid::filled(size, face.home_color())),
        })
    }

    /// Side length `n`.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Grid of one face.
    #[must_use]
    pub fn face(&self, face: Face) -> &FaceGrid {
        &self.faces[face.index()]
    }

    pub(crate) fn face_mut(&mut self, face: Face) -> &mut FaceGrid {
        &mut self.faces[face.index()]
    }

    /// Iterate over faces in persisted order.
    pub fn faces(&self) -> impl Iterator<Item = (Face, &FaceGrid)> {
        Face::ALL.into_iter().zip(self.faces.iter())
    }

    /// Sticker at `(row, col)` of `face`.
    #[must_use]
    pub fn sticker(&self, face: Face, row: usize, col: usize) -> ColorIndex {
        self.faces[face.index()].get(row, col)
    }

    /// Whether every face is a single colour.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.faces.iter().all(FaceGrid::is_uniform)
    }

    // === Invariants ===

    /// Number of stickers of each colour.
    ///
    /// Out-of-range cells are not counted.
    #[must_use]
    pub fn color_counts(&self) -> [usize; COLOR_COUNT] {
        let mut counts = [0; COLOR_COUNT];
        for grid in &self.faces {
            for &cell in grid.cells() {
                if let Some(slot) = counts.get_mut(cell as usize) {
                    *slot += 1;
                }
            }
        }
        counts
    }

    /// Check the range and conservation invariants.
    pub fn check_invariants(&self) -> Result<()> {
        for (face, grid) in self.faces() {
            if grid.size() != self.size {
                return Err(CubeError::InvalidConfiguration(format!(
                    "face {face} is {}x{0}, expected {1}x{1}",
                    grid.size(),
                    self.size
                )));
            }
            if let Some(bad) = grid.cells().iter().find(|&&c| c as usize >= COLOR_COUNT) {
                return Err(CubeError::InvalidConfiguration(format!(
                    "face {face} holds colour {bad}, expected 0..{COLOR_COUNT}"
                )));
            }
        }

        let expected = self.size * self.size;
        for (color, &count) in self.color_counts().iter().enumerate() {
            if count != expected {
                return Err(CubeError::InvalidConfiguration(format!(
                    "colour {color} appears {count} times, expected {expected}"
                )));
            }
        }
        Ok(())
    }

    // === Layout conversions ===

    /// Build a state from six row-major grids in persisted face order.
    ///
    /// The result must satisfy both invariants.
    pub fn from_grids(size: usize, grids: Vec<Vec<Vec<ColorIndex>>>) -> Result<Self> {
        if size < MIN_SIZE {
            return Err(CubeError::InvalidConfiguration(format!(
                "cube size must be at least {MIN_SIZE}, got {size}"
            )));
        }
        if grids.len() != Face::ALL.len() {
            return Err(CubeError::InvalidConfiguration(format!(
                "expected 6 face grids, got {}",
                grids.len()
            )));
        }

        let mut faces = Vec::with_capacity(Face::ALL.len());
        for (face, rows) in Face::ALL.into_iter().zip(grids) {
            if rows.len() != size || rows.iter().any(|row| row.len() != size) {
                return Err(CubeError::InvalidConfiguration(format!(
                    "face {face} is not {size}x{size}"
                )));
            }
            let cells = rows.into_iter().flatten().collect();
            let grid = FaceGrid::from_cells(size, cells).ok_or_else(|| {
                CubeError::InvalidConfiguration(format!("face {face} is not {size}x{size}"))
            })?;
            faces.push(grid);
        }

        let faces: [FaceGrid; 6] = faces
            .try_into()
            .map_err(|_| CubeError::InvalidConfiguration("expected 6 face grids".into()))?;
        let state = Self { size, faces };
        state.check_invariants()?;
        Ok(state)
    }

    /// Six row-major grids in persisted face order.
    #[must_use]
    pub fn to_grids(&self) -> Vec<Vec<Vec<ColorIndex>>> {
        self.faces
            .iter()
            .map(|grid| grid.rows().map(<[ColorIndex]>::to_vec).collect())
            .collect()
    }

    /// All `6n²` stickers, face by face in persisted order, row-major.
    #[must_use]
    pub fn flatten(&self) -> Vec<ColorIndex> {
        self.faces
            .iter()
            .flat_map(|grid| grid.cells().iter().copied())
            .collect()
    }

    // === Snapshots ===

    /// Compact binary snapshot.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Restore from a binary snapshot, re-checking the invariants.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let repr: CubeStateRepr = bincode::deserialize(bytes)?;
        Self::try_from(repr)
    }
}

impl std::fmt::Display for CubeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, (face, grid)) in self.faces().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{face}:")?;
            for row in grid.rows() {
                let letters: String = row.iter().map(|&c| color_letter(c)).collect();
                write!(f, " {letters}")?;
            }
        }
        Ok(())
    }
}

/// Serialised form of [`CubeState`].
#[derive(Clone, Debug, Serialize, Deserialize)]
struct CubeStateRepr {
    size: usize,
    faces: Vec<Vec<Vec<ColorIndex>>>,
}

impl TryFrom<CubeStateRepr> for CubeState {
    type Error = CubeError;

    fn try_from(repr: CubeStateRepr) -> Result<Self> {
        CubeState::from_grids(repr.size, repr.faces)
    }
}

impl From<CubeState> for CubeStateRepr {
    fn from(state: CubeState) -> Self {
        Self {
            size: state.size,
            faces: state.to_grids(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_solved() {
        for size in 2..=7 {
            let state = CubeState::new(size).unwrap();
            assert_eq!(state.size(), size);
            assert!(state.is_solved());
            for (face, grid) in state.faces() {
                assert_eq!(grid.count(face.home_color()), size * size);
            }
            state.check_invariants().unwrap();
        }
    }

    #[test]
    fn test_new_rejects_small_sizes() {
        for size in [0, 1] {
            let err = CubeState::new(size).unwrap_err();
            assert!(matches!(err, CubeError::InvalidConfiguration(_)));
        }
    }

    #[test]
    fn test_color_counts_solved() {
        let state = CubeState::new(4).unwrap();
        assert_eq!(state.color_counts(), [16; 6]);
    }

    #[test]
    fn test_grids_round_trip() {
        let state = CubeState::new(3).unwrap();
        let grids = state.to_grids();
        assert_eq!(grids.len(), 6);
        assert_eq!(grids[2], vec![vec![2, 2, 2]; 3]);

        let rebuilt = CubeState::from_grids(3, grids).unwrap();
        assert_eq!(rebuilt, state);
    }

    #[test]
    fn test_from_grids_rejects_broken_conservation() {
        let mut grids = CubeState::new(2).unwrap().to_grids();
        grids[0][0][0] = 1;
        let err = CubeState::from_grids(2, grids).unwrap_err();
        assert!(matches!(err, CubeError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_from_grids_rejects_out_of_range() {
        let mut grids = CubeState::new(2).unwrap().to_grids();
        grids[5][1][1] = 6;
        assert!(CubeState::from_grids(2, grids).is_err());
    }

    #[test]
    fn test_from_grids_rejects_wrong_shape() {
        let mut grids = CubeState::new(3).unwrap().to_grids();
        grids[1].pop();
        assert!(CubeState::from_grids(3, grids).is_err());

        let grids = CubeState::new(3).unwrap().to_grids();
        assert!(CubeState::from_grids(3, grids[..5].to_vec()).is_err());
    }

    #[test]
    fn test_flatten_layout() {
        let state = CubeState::new(3).unwrap();
        let flat = state.flatten();
        assert_eq!(flat.len(), 54);
        for (i, &color) in flat.iter().enumerate() {
            assert_eq!(color as usize, i / 9);
        }
    }

    #[test]
    fn test_serde_layout() {
        let state = CubeState::new(2).unwrap();
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(
            json,
            "{\"size\":2,\"faces\":[[[0,0],[0,0]],[[1,1],[1,1]],[[2,2],[2,2]],\
             [[3,3],[3,3]],[[4,4],[4,4]],[[5,5],[5,5]]]}"
        );
        let back: CubeState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }

    #[test]
    fn test_serde_rejects_invalid_state() {
        let json = "{\"size\":2,\"faces\":[[[0,0],[0,0]],[[1,1],[1,1]],[[2,2],[2,2]],\
                    [[3,3],[3,3]],[[4,4],[4,4]],[[5,5],[5,0]]]}";
        assert!(serde_json::from_str::<CubeState>(json).is_err());
    }

    #[test]
    fn test_bytes_round_trip() {
        let state = CubeState::new(5).unwrap();
        let bytes = state.to_bytes().unwrap();
        assert_eq!(CubeState::from_bytes(&bytes).unwrap(), state);
    }

    #[test]
    fn test_from_bytes_rejects_garbage() {
        let err = CubeState::from_bytes(&[0xff, 0x01]).unwrap_err();
        assert!(matches!(err, CubeError::Decode(_)));
    }

    #[test]
    fn test_display() {
        let state = CubeState::new(2).unwrap();
        let text = state.to_string();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "U: WW WW");
        assert_eq!(lines[5], "R: OO OO");
    }
}
