//! Interpolation methods for gridded data.

pub mod bilinear;

pub use bilinear::BilinearInterpolator;
