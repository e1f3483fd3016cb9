//! Random scrambles.

pub mod generator;

pub use generator::ScrambleGenerator;
