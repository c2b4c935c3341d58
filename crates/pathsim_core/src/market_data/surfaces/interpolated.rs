//! Interpolated local-volatility surface over a calibrated grid.

use super::traits::{validate_query, LocalVolSurface};
use crate::market_data::error::MarketDataError;
use crate::math::interpolators::BilinearInterpolator;
use num_traits::Float;

/// Local-volatility surface backed by a time x asset-level grid.
///
/// Stores calibrated local volatilities on a rectangular grid and answers
/// lookups between grid nodes with bilinear interpolation. Calibrating the
/// grid itself (e.g. from an implied-volatility surface via Dupire's
/// formula) is an external concern; this type only consumes the result.
///
/// # Grid Layout
///
/// Volatilities are supplied flat in row-major order:
/// `vols[time_idx * levels.len() + level_idx]`.
///
/// # Extrapolation
///
/// With `allow_extrapolation`, queries beyond the grid are clamped to the
/// nearest boundary (flat extrapolation). Without it, they fail with
/// [`MarketDataError::OutOfBounds`] so that a simulation cannot silently
/// run on made-up volatility.
///
/// # Example
///
/// ```
/// use pathsim_core::market_data::surfaces::{InterpolatedLocalVol, LocalVolSurface};
///
/// let surface = InterpolatedLocalVol::new(
///     vec![0.0, 0.5, 1.0],            // times
///     vec![80.0, 100.0, 120.0],       // asset levels
///     vec![
///         0.22, 0.20, 0.21,           // t = 0.0
///         0.23, 0.21, 0.22,           // t = 0.5
///         0.24, 0.22, 0.23,           // t = 1.0
///     ],
///     false,
/// )
/// .unwrap();
///
/// let sigma = surface.local_volatility(0.25, 95.0).unwrap();
/// assert!(sigma > 0.0 && sigma < 1.0);
/// ```
#[derive(Debug, Clone)]
pub struct InterpolatedLocalVol<T: Float> {
    /// Bilinear interpolator over (time, asset level)
    interp: BilinearInterpolator<T>,
    /// Whether to allow flat extrapolation beyond the grid
    allow_extrapolation: bool,
}

impl<T: Float> InterpolatedLocalVol<T> {
    /// Construct an interpolated surface from grid data.
    ///
    /// # Arguments
    ///
    /// * `times` - Strictly increasing time coordinates, first >= 0 (at least 2)
    /// * `levels` - Strictly increasing positive asset levels (at least 2)
    /// * `vols` - Flat row-major volatility grid, all positive and finite
    /// * `allow_extrapolation` - Whether to clamp queries beyond the grid
    ///
    /// # Returns
    ///
    /// * `Ok(InterpolatedLocalVol)` - Successfully constructed surface
    /// * `Err(MarketDataError::InsufficientData)` - Fewer than 2 nodes on an axis
    /// * `Err(MarketDataError::InvalidTime)` - Negative or non-finite time node
    /// * `Err(MarketDataError::InvalidAssetLevel)` - Non-positive level or volatility node
    /// * `Err(MarketDataError::Interpolation)` - Axis ordering or grid-shape defects
    pub fn new(
        times: Vec<T>,
        levels: Vec<T>,
        vols: Vec<T>,
        allow_extrapolation: bool,
    ) -> Result<Self, MarketDataError> {
        if times.len() < 2 {
            return Err(MarketDataError::InsufficientData {
                got: times.len(),
                need: 2,
            });
        }
        if levels.len() < 2 {
            return Err(MarketDataError::InsufficientData {
                got: levels.len(),
                need: 2,
            });
        }

        for &t in &times {
            if t < T::zero() || !t.is_finite() {
                return Err(MarketDataError::InvalidTime {
                    time: t.to_f64().unwrap_or(f64::NAN),
                });
            }
        }
        for &s in &levels {
            if s <= T::zero() || !s.is_finite() {
                return Err(MarketDataError::InvalidAssetLevel {
                    level: s.to_f64().unwrap_or(f64::NAN),
                });
            }
        }
        for &v in &vols {
            if v <= T::zero() || !v.is_finite() {
                return Err(MarketDataError::InvalidAssetLevel {
                    level: v.to_f64().unwrap_or(f64::NAN),
                });
            }
        }

        let interp = BilinearInterpolator::new(times, levels, vols)?;
        Ok(Self {
            interp,
            allow_extrapolation,
        })
    }

    /// Return whether flat extrapolation is enabled.
    #[inline]
    pub fn allow_extrapolation(&self) -> bool {
        self.allow_extrapolation
    }

    fn clamp_or_reject(&self, x: T, min: T, max: T) -> Result<T, MarketDataError> {
        if x < min || x > max {
            if self.allow_extrapolation {
                Ok(if x < min { min } else { max })
            } else {
                Err(MarketDataError::OutOfBounds {
                    x: x.to_f64().unwrap_or(f64::NAN),
                    min: min.to_f64().unwrap_or(f64::NAN),
                    max: max.to_f64().unwrap_or(f64::NAN),
                })
            }
        } else {
            Ok(x)
        }
    }
}

impl<T: Float + Send + Sync> LocalVolSurface<T> for InterpolatedLocalVol<T> {
    fn local_volatility(&self, time: T, asset_level: T) -> Result<T, MarketDataError> {
        validate_query(time, asset_level)?;

        let (t_min, t_max) = self.time_domain();
        let (s_min, s_max) = self.asset_domain();
        let t = self.clamp_or_reject(time, t_min, t_max)?;
        let s = self.clamp_or_reject(asset_level, s_min, s_max)?;

        let sigma = self.interp.interpolate(t, s)?;
        Ok(sigma)
    }

    #[inline]
    fn time_domain(&self) -> (T, T) {
        self.interp.domain_x()
    }

    #[inline]
    fn asset_domain(&self) -> (T, T) {
        self.interp.domain_y()
    }
}
