//! Sticker scans from an external classifier.
//!
//! A scan is 54 entries: six consecutive 9-sticker blocks, one per face in
//! the order Up, Down, Front, Back, Left, Right, each row-major like a
//! 3×3 face grid. A classifier reports a sticker it could not read as
//! `-1`; here that becomes `None`.

use log::warn;

use crate::core::{ColorIndex, CubeError, CubeState, Face, Result, COLOR_COUNT};

/// Stickers per face in a scan.
pub const SCAN_FACE_STICKERS: usize = 9;

/// Stickers in a full scan.
pub const SCAN_LEN: usize = 6 * SCAN_FACE_STICKERS;

/// Flattened scan of a 3×3×3 cube, `None` where a sticker was not classified.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScanResult {
    stickers: Vec<Option<ColorIndex>>,
}

impl ScanResult {
    /// Wrap raw classifier output.
    ///
    /// Accepts any length. Values outside `0..6` count as undetected.
    #[must_use]
    pub fn from_raw(raw: &[i32]) -> Self {
        let stickers = raw
            .iter()
            .map(|&v| {
                if (0..COLOR_COUNT as i32).contains(&v) {
                    Some(v as ColorIndex)
                } else {
                    if v != -1 {
                        warn!("scan value {v} is not a colour, treating as undetected");
                    }
                    None
                }
            })
            .collect();
        Self { stickers }
    }

    /// Build from already-classified stickers.
    #[must_use]
    pub fn from_stickers(stickers: Vec<Option<ColorIndex>>) -> Self {
        Self { stickers }
    }

    /// The scan a perfect classifier would produce for `state`.
    ///
    /// Only 3×3×3 states can be scanned.
    pub fn from_state(state: &CubeState) -> Result<Self> {
        if state.size() != 3 {
            return Err(CubeError::InvalidConfiguration(format!(
                "scans cover 3x3x3 cubes, got {0}x{0}x{0}",
                state.size()
            )));
        }
        Ok(Self {
            stickers: state.flatten().into_iter().map(Some).collect(),
        })
    }

    /// All entries in scan order.
    #[must_use]
    pub fn stickers(&self) -> &[Option<ColorIndex>] {
        &self.stickers
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.stickers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stickers.is_empty()
    }

    /// Number of classified entries.
    #[must_use]
    pub fn classified(&self) -> usize {
        self.stickers.iter().filter(|s| s.is_some()).count()
    }

    /// The 9-sticker block of `face`, `None` if the scan is too short.
    #[must_use]
    pub fn block(&self, face: Face) -> Option<&[Option<ColorIndex>]> {
        let start = face.index() * SCAN_FACE_STICKERS;
        self.stickers.get(start..start + SCAN_FACE_STICKERS)
    }

    /// Colours of a full scan.
    ///
    /// Fails with `IncompleteScan` when the length is not 54 or any
    /// sticker is undetected.
    pub fn require_complete(&self) -> Result<Vec<ColorIndex>> {
        let classified = self.classified();
        if self.stickers.len() != SCAN_LEN || classified != SCAN_LEN {
            return Err(CubeError::IncompleteScan {
                classified,
                expected: SCAN_LEN,
            });
        }
        Ok(self.stickers.iter().flatten().copied().collect())
    }
}

impl CubeState {
    /// Rebuild a 3×3×3 state from a complete scan.
    ///
    /// The scanned colours must satisfy the usual state invariants.
    pub fn from_scan(scan: &ScanResult) -> Result<CubeState> {
        let colors = scan.require_complete()?;
        let grids: Vec<Vec<Vec<ColorIndex>>> = colors
            .chunks(SCAN_FACE_STICKERS)
            .map(|face| face.chunks(3).map(<[ColorIndex]>::to_vec).collect())
            .collect();
        CubeState::from_grids(3, grids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::{parse_sequence, MoveEngine};

    #[test]
    fn test_from_raw_maps_undetected() {
        let scan = ScanResult::from_raw(&[0, 5, -1, 6, 3]);
        assert_eq!(scan.stickers(), &[Some(0), Some(5), None, None, Some(3)]);
        assert_eq!(scan.classified(), 3);
        assert_eq!(scan.len(), 5);
    }

    #[test]
    fn test_blocks() {
        let raw: Vec<i32> = (0..54).map(|i| i / 9).collect();
        let scan = ScanResult::from_raw(&raw);
        for face in Face::ALL {
            let block = scan.block(face).unwrap();
            assert!(block.iter().all(|&s| s == Some(face.home_color())));
        }

        // 20 stickers cover Up (0..9) and Down (9..18) but not Front (18..27).
        let short = ScanResult::from_raw(&raw[..20]);
        assert!(short.block(Face::Up).is_some());
        assert!(short.block(Face::Down).is_some());
        assert!(short.block(Face::Front).is_none());
    }

    #[test]
    fn test_require_complete() {
        let mut raw = vec![1; SCAN_LEN];
        assert_eq!(ScanResult::from_raw(&raw).require_complete().unwrap().len(), SCAN_LEN);

        raw[7] = -1;
        let err = ScanResult::from_raw(&raw).require_complete().unwrap_err();
        assert_eq!(err, CubeError::IncompleteScan { classified: 53, expected: 54 });

        let err = ScanResult::from_raw(&[0; 10]).require_complete().unwrap_err();
        assert_eq!(err, CubeError::IncompleteScan { classified: 10, expected: 54 });
    }

    #[test]
    fn test_from_state_requires_size_three() {
        let state = CubeState::new(4).unwrap();
        assert!(matches!(
            ScanResult::from_state(&state),
            Err(CubeError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_state_scan_round_trip() {
        let mut state = CubeState::new(3).unwrap();
        MoveEngine::apply_all(&mut state, &parse_sequence("R U F' M S E'").unwrap());

        let scan = ScanResult::from_state(&state).unwrap();
        assert_eq!(scan.classified(), SCAN_LEN);
        assert_eq!(CubeState::from_scan(&scan).unwrap(), state);
    }

    #[test]
    fn test_from_scan_rejects_bad_colour_counts() {
        let scan = ScanResult::from_raw(&[2; SCAN_LEN]);
        assert!(matches!(
            CubeState::from_scan(&scan),
            Err(CubeError::InvalidConfiguration(_))
        ));
    }
}
