//! Local-volatility surface implementations.
//!
//! A local-volatility surface maps a (time, asset level) coordinate to the
//! instantaneous volatility used by local-volatility dynamics. Two
//! implementations are provided:
//! - [`FlatLocalVol`]: constant volatility everywhere (testing, degenerate
//!   market setups)
//! - [`InterpolatedLocalVol`]: bilinear interpolation over a calibrated
//!   time x asset-level grid

pub mod flat;
pub mod interpolated;
pub mod traits;

pub use flat::FlatLocalVol;
pub use interpolated::InterpolatedLocalVol;
pub use traits::LocalVolSurface;
