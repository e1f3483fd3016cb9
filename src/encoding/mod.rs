//! Observation encoding.
//!
//! Turns a [`CubeState`](crate::core::CubeState) into a flat `f32` tensor
//! for a policy network.

pub mod traits;
pub mod encoder;

pub use traits::{EncodedState, StateEncoder};
pub use encoder::{OneHotEncoder, StickerEncoder};
