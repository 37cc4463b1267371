//! Spectral distortion shapes built on the derivative sequence.

pub mod shapes;

pub use shapes::*;
