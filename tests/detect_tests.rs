//! Solved detection integration tests, direct and scan mode.

use twisty_cube::core::{CubeError, CubeState, Face};
use twisty_cube::detect::{ScanResult, SolvedDetector, SCAN_LEN};
use twisty_cube::moves::{parse_sequence, MoveEngine};

// =============================================================================
// Scan Mode
// =============================================================================

/// One undetected centre marks only its own face unsolved with count 0.
#[test_log::test]
fn test_scan_undetected_centre_only_affects_its_face() {
    let mut raw = vec![2; SCAN_LEN];
    raw[13] = -1;
    let report = SolvedDetector::inspect_scan(&ScanResult::from_raw(&raw));

    assert!(!report.is_face_solved(Face::Down));
    assert_eq!(report.correct_count(Face::Down), 0);
    assert_eq!(report.solved_faces(), 5);
    assert_eq!(report.total_correct(), 45);
    assert!(!report.cube_solved);
}

/// Out-of-range values are treated like -1.
#[test_log::test]
fn test_scan_out_of_range_values() {
    let mut raw: Vec<i32> = (0..SCAN_LEN as i32).map(|i| i / 9).collect();
    raw[0] = 17;
    raw[50] = -4;
    let report = SolvedDetector::inspect_scan(&ScanResult::from_raw(&raw));

    assert!(!report.is_face_solved(Face::Up));
    assert_eq!(report.correct_count(Face::Up), 8);
    assert!(!report.is_face_solved(Face::Right));
    assert_eq!(report.correct_count(Face::Right), 8);
    assert_eq!(report.solved_faces(), 4);
}

/// An empty scan is valid input: nothing solved, nothing counted.
#[test_log::test]
fn test_empty_scan() {
    let report = SolvedDetector::inspect_scan(&ScanResult::from_raw(&[]));
    assert_eq!(report.face_solved, [false; 6]);
    assert_eq!(report.correct_counts, [0; 6]);
}

/// Scanning a scrambled state and rebuilding it gives the same cube and report.
#[test]
fn test_scan_round_trip_scrambled() {
    let mut state = CubeState::new(3).unwrap();
    MoveEngine::apply_all(&mut state, &parse_sequence("F R' D2 B L' S M' E U2").unwrap());

    let scan = ScanResult::from_state(&state).unwrap();
    assert_eq!(SolvedDetector::inspect_scan(&scan), SolvedDetector::inspect(&state));
    assert_eq!(CubeState::from_scan(&scan).unwrap(), state);
}

/// Rebuilding a state needs every sticker.
#[test]
fn test_from_scan_incomplete() {
    let state = CubeState::new(3).unwrap();
    let mut stickers = ScanResult::from_state(&state).unwrap().stickers().to_vec();
    stickers[40] = None;

    let err = CubeState::from_scan(&ScanResult::from_stickers(stickers)).unwrap_err();
    assert_eq!(err, CubeError::IncompleteScan { classified: 53, expected: 54 });
}

// =============================================================================
// Direct Mode
// =============================================================================

/// Correct counts fall as a face gets mixed up and return on undo.
#[test]
fn test_direct_counts_track_scramble() {
    let mut state = CubeState::new(5).unwrap();
    let moves = parse_sequence("R U").unwrap();
    MoveEngine::apply_all(&mut state, &moves);

    let report = SolvedDetector::inspect(&state);
    assert!(!report.cube_solved);
    assert!(report.correct_counts.iter().all(|&c| c <= 25));
    assert!(report.total_correct() < 6 * 25);

    MoveEngine::apply_all(&mut state, &twisty_cube::invert_sequence(&moves));
    assert_eq!(SolvedDetector::inspect(&state).correct_counts, [25; 6]);
}
