//! Solved detection, directly on a `CubeState` or on an external sticker scan.

pub mod detector;
pub mod scan;

pub use detector::{SolveReport, SolvedDetector};
pub use scan::{ScanResult, SCAN_FACE_STICKERS, SCAN_LEN};
