//! Error taxonomy for the cube engine.
//!
//! - `InvalidConfiguration`: fatal at construction (bad size, bad persisted state)
//! - `InvalidMove`: caller programming error, surfaced immediately
//! - `IncompleteScan`: only raised when a caller demands a fully classified scan;
//!   scan-mode detection itself degrades instead of failing

use thiserror::Error;

/// Errors produced by the cube engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CubeError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("invalid move: {0}")]
    InvalidMove(String),

    #[error("incomplete scan: {classified} of {expected} stickers classified")]
    IncompleteScan { classified: usize, expected: usize },

    #[error("failed to decode cube snapshot: {0}")]
    Decode(String),
}

impl From<bincode::Error> for CubeError {
    fn from(err: bincode::Error) -> Self {
        CubeError::Decode(err.to_string())
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CubeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CubeError::InvalidConfiguration("cube size must be at least 2, got 1".into());
        assert_eq!(
            err.to_string(),
            "invalid configuration: cube size must be at least 2, got 1"
        );

        let err = CubeError::IncompleteScan { classified: 53, expected: 54 };
        assert_eq!(err.to_string(), "incomplete scan: 53 of 54 stickers classified");
    }

    #[test]
    fn test_from_bincode_error() {
        let result: std::result::Result<u64, bincode::Error> = bincode::deserialize(&[1, 2]);
        let err: CubeError = result.unwrap_err().into();
        assert!(matches!(err, CubeError::Decode(_)));
    }
}
