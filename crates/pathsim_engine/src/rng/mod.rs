//! Random number generation for path simulation.

pub mod prng;

pub use prng::PathRng;
