//! Encoder trait and tensor type.

use serde::{Deserialize, Serialize};

use crate::core::CubeState;
use crate::moves::ACTION_COUNT;

/// Encoded cube state as a flat tensor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EncodedState {
    /// Flattened tensor data (row-major order).
    pub tensor: Vec<f32>,

    /// Shape of the tensor.
    pub shape: Vec<usize>,
}

impl EncodedState {
    /// Create a new encoded state.
    pub fn new(tensor: Vec<f32>, shape: Vec<usize>) -> Self {
        debug_assert_eq!(
            tensor.len(),
            shape.iter().product::<usize>(),
            "Tensor length must match shape product"
        );
        Self { tensor, shape }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tensor.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tensor.is_empty()
    }
}

/// Encodes cube states into tensors.
pub trait StateEncoder: Send + Sync {
    /// Encode a state.
    fn encode(&self, state: &CubeState) -> EncodedState;

    /// Shape of encoded states.
    fn output_shape(&self) -> Vec<usize>;

    /// Size of the policy output: the discrete action count.
    fn action_space_size(&self) -> usize {
        ACTION_COUNT
    }
}
