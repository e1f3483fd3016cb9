//! Session configuration.
//!
//! `CubeConfig` bundles what a session needs at startup: the cube size,
//! the scramble length and move set, the RNG seed and an optional
//! per-episode move limit.

use serde::{Deserialize, Serialize};

use super::error::{CubeError, Result};
use super::state::MIN_SIZE;
use crate::moves::MoveKind;

/// Configuration for a [`CubeSession`](crate::session::CubeSession).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CubeConfig {
    /// Side length `n` (at least 2).
    pub size: usize,

    /// Number of random moves applied on reset.
    pub scramble_moves: usize,

    /// Move kinds the scrambler draws from (uniformly).
    pub scramble_kinds: Vec<MoveKind>,

    /// Random seed. Same seed produces the same episodes.
    pub seed: u64,

    /// Moves allowed per episode before it is reported as truncated.
    /// `None` = unlimited.
    pub move_limit: Option<usize>,
}

impl Default for CubeConfig {
    fn default() -> Self {
        Self {
            size: 3,
            scramble_moves: 20,
            scramble_kinds: MoveKind::ALL.to_vec(),
            seed: 42,
            move_limit: None,
        }
    }
}

impl CubeConfig {
    /// Set the cube size.
    #[must_use]
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Set the scramble length.
    #[must_use]
    pub fn with_scramble_moves(mut self, moves: usize) -> Self {
        self.scramble_moves = moves;
        self
    }

    /// Restrict the scrambler to the given move kinds.
    #[must_use]
    pub fn with_scramble_kinds(mut self, kinds: &[MoveKind]) -> Self {
        self.scramble_kinds = kinds.to_vec();
        self
    }

    /// Set the random seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the per-episode move limit.
    #[must_use]
    pub fn with_move_limit(mut self, limit: usize) -> Self {
        self.move_limit = Some(limit);
        self
    }

    /// Check the configuration before a session is built from it.
    pub fn validate(&self) -> Result<()> {
        if self.size < MIN_SIZE {
            return Err(CubeError::InvalidConfiguration(format!(
                "cube size must be at least {MIN_SIZE}, got {}",
                self.size
            )));
        }
        if self.scramble_kinds.is_empty() && self.scramble_moves > 0 {
            return Err(CubeError::InvalidConfiguration(
                "scramble move set is empty".into(),
            ));
        }
        Ok(())
    }
}
