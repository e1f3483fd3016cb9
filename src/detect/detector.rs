//! Solved detection.
//!
//! Two modes share one report:
//!
//! - **Direct**: read a [`CubeState`]. A face is solved when uniform; its
//!   correct count is the number of stickers matching the cell at
//!   `(n/2, n/2)`.
//! - **Scan**: read a [`ScanResult`]. Same checks per 9-sticker block,
//!   against the block's centre (entry 4). Scans are lossy, so this mode
//!   never fails: a missing or partly undetected block is reported as not
//!   solved, and a block with an undetected centre counts 0.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::core::{ColorIndex, CubeState, Face};

use super::scan::{ScanResult, SCAN_FACE_STICKERS, SCAN_LEN};

const SCAN_CENTRE: usize = 4;

/// Per-face and overall solved status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SolveReport {
    /// Whether each face is uniform, indexed by [`Face::index`].
    pub face_solved: [bool; 6],
    /// Stickers matching each face's reference colour.
    pub correct_counts: [usize; 6],
    /// Whether every face is solved.
    pub cube_solved: bool,
}

impl SolveReport {
    fn from_faces(face_solved: [bool; 6], correct_counts: [usize; 6]) -> Self {
        Self {
            face_solved,
            correct_counts,
            cube_solved: face_solved.iter().all(|&s| s),
        }
    }

    /// Whether `face` is solved.
    #[must_use]
    pub fn is_face_solved(&self, face: Face) -> bool {
        self.face_solved[face.index()]
    }

    /// Correct count of `face`.
    #[must_use]
    pub fn correct_count(&self, face: Face) -> usize {
        self.correct_counts[face.index()]
    }

    /// Number of solved faces.
    #[must_use]
    pub fn solved_faces(&self) -> usize {
        self.face_solved.iter().filter(|&&s| s).count()
    }

    /// Sum of correct counts over all faces.
    #[must_use]
    pub fn total_correct(&self) -> usize {
        self.correct_counts.iter().sum()
    }
}

/// Derives a [`SolveReport`]. Read-only.
#[derive(Clone, Copy, Debug, Default)]
pub struct SolvedDetector;

impl SolvedDetector {
    /// Inspect a cube state.
    #[must_use]
    pub fn inspect(state: &CubeState) -> SolveReport {
        let centre = state.size() / 2;
        let face_solved = Face::ALL.map(|face| state.face(face).is_uniform());
        let correct_counts = Face::ALL.map(|face| {
            let grid = state.face(face);
            grid.count(grid.get(centre, centre))
        });
        SolveReport::from_faces(face_solved, correct_counts)
    }

    /// Inspect an external scan. Never fails; see the module docs.
    #[must_use]
    pub fn inspect_scan(scan: &ScanResult) -> SolveReport {
        if scan.len() != SCAN_LEN {
            warn!(
                "scan has {} stickers, expected {SCAN_LEN}; missing faces report unsolved",
                scan.len()
            );
        }
        let undetected = scan.len() - scan.classified();
        if undetected > 0 {
            warn!("scan has {undetected} undetected stickers");
        }

        let blocks = Face::ALL.map(|face| scan.block(face));
        let face_solved = blocks.map(|block| block.is_some_and(block_solved));
        let correct_counts = blocks.map(|block| block.map_or(0, block_correct));
        SolveReport::from_faces(face_solved, correct_counts)
    }
}

fn block_solved(block: &[Option<ColorIndex>]) -> bool {
    match block.first() {
        Some(Some(first)) => block.iter().all(|&s| s == Some(*first)),
        _ => false,
    }
}

fn block_correct(block: &[Option<ColorIndex>]) -> usize {
    debug_assert_eq!(block.len(), SCAN_FACE_STICKERS);
    match block[SCAN_CENTRE] {
        Some(centre) => block.iter().filter(|&&s| s == Some(centre)).count(),
        None => 0,
    }
}
