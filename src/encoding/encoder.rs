//! Cube state encoders.

use crate::core::{CubeState, COLOR_COUNT};
use crate::detect::SolvedDetector;

use super::traits::{EncodedState, StateEncoder};

/// Flat sticker encoding with solve progress appended.
///
/// Layout, for an `n`-cube:
/// - `6n²` sticker colours in persisted face order, row-major
/// - 6 per-face solved flags (0 or 1)
/// - 1 cube solved flag
/// - 6 per-face correct counts
///
/// Total features = `6n² + 13`. `encode` sizes its output from the state
/// it is given; `size` only fixes what `output_shape` reports.
#[derive(Clone, Debug)]
pub struct StickerEncoder {
    size: usize,
}

impl StickerEncoder {
    /// Encoder for `size`-cubes.
    pub fn new(size: usize) -> Self {
        Self { size }
    }

    fn features(size: usize) -> usize {
        6 * size * size + 6 + 1 + 6
    }
}

impl StateEncoder for StickerEncoder {
    fn encode(&self, state: &CubeState) -> EncodedState {
        let features = Self::features(state.size());
        let report = SolvedDetector::inspect(state);

        let mut tensor = Vec::with_capacity(features);
        tensor.extend(state.flatten().into_iter().map(f32::from));
        tensor.extend(report.face_solved.iter().map(|&s| if s { 1.0 } else { 0.0 }));
        tensor.push(if report.cube_solved { 1.0 } else { 0.0 });
        tensor.extend(report.correct_counts.iter().map(|&c| c as f32));

        EncodedState::new(tensor, vec![features])
    }

    fn output_shape(&self) -> Vec<usize> {
        vec![Self::features(self.size)]
    }
}

/// One-hot colour planes: shape `[6n², 6]`, with `n` taken from the
/// encoded state.
#[derive(Clone, Debug)]
pub struct OneHotEncoder {
    size: usize,
}

impl OneHotEncoder {
    /// Encoder for `size`-cubes.
    pub fn new(size: usize) -> Self {
        Self { size }
    }

    fn shape(size: usize) -> Vec<usize> {
        vec![6 * size * size, COLOR_COUNT]
    }
}

impl StateEncoder for OneHotEncoder {
    fn encode(&self, state: &CubeState) -> EncodedState {
        let stickers = state.flatten();
        let mut tensor = vec![0.0f32; stickers.len() * COLOR_COUNT];
        for (i, &color) in stickers.iter().enumerate() {
            tensor[i * COLOR_COUNT + color as usize] = 1.0;
        }
        EncodedState::new(tensor, Self::shape(state.size()))
    }

    fn output_shape(&self) -> Vec<usize> {
        Self::shape(self.size)
    }
}
