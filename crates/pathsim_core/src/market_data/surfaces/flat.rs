//! Flat (constant) local-volatility surface.

use super::traits::{validate_query, LocalVolSurface};
use crate::market_data::error::MarketDataError;
use num_traits::Float;

/// Constant local volatility at every (time, asset level).
///
/// Under a flat surface, local-volatility dynamics collapse to geometric
/// Brownian motion, which makes this surface the standard cross-check
/// against Black-Scholes results.
///
/// # Example
///
/// ```
/// use pathsim_core::market_data::surfaces::{FlatLocalVol, LocalVolSurface};
///
/// let surface = FlatLocalVol::new(0.20_f64).unwrap();
/// assert_eq!(surface.local_volatility(2.0, 150.0).unwrap(), 0.20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatLocalVol<T: Float> {
    sigma: T,
}

impl<T: Float> FlatLocalVol<T> {
    /// Construct a flat surface at the given volatility.
    ///
    /// # Returns
    ///
    /// * `Ok(FlatLocalVol)` - If `sigma` is positive and finite
    /// * `Err(MarketDataError::InvalidAssetLevel)` - Otherwise
    pub fn new(sigma: T) -> Result<Self, MarketDataError> {
        if sigma <= T::zero() || !sigma.is_finite() {
            return Err(MarketDataError::InvalidAssetLevel {
                level: sigma.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(Self { sigma })
    }

    /// The constant volatility level.
    #[inline]
    pub fn sigma(&self) -> T {
        self.sigma
    }
}

impl<T: Float + Send + Sync> LocalVolSurface<T> for FlatLocalVol<T> {
    fn local_volatility(&self, time: T, asset_level: T) -> Result<T, MarketDataError> {
        validate_query(time, asset_level)?;
        Ok(self.sigma)
    }

    fn time_domain(&self) -> (T, T) {
        (T::zero(), T::infinity())
    }

    fn asset_domain(&self) -> (T, T) {
        (T::zero(), T::infinity())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid() {
        let surface = FlatLocalVol::new(0.2_f64).unwrap();
        assert_eq!(surface.sigma(), 0.2);
    }

    #[test]
    fn test_new_rejects_non_positive() {
        assert!(FlatLocalVol::new(0.0_f64).is_err());
        assert!(FlatLocalVol::new(-0.2_f64).is_err());
    }

    #[test]
    fn test_new_rejects_non_finite() {
        assert!(FlatLocalVol::new(f64::NAN).is_err());
        assert!(FlatLocalVol::new(f64::INFINITY).is_err());
    }

    #[test]
    fn test_lookup_everywhere() {
        let surface = FlatLocalVol::new(0.3_f64).unwrap();
        for (t, s) in [(0.0, 1.0), (0.5, 100.0), (10.0, 1e6)] {
            assert_eq!(surface.local_volatility(t, s).unwrap(), 0.3);
        }
    }

    #[test]
    fn test_invalid_queries_still_rejected() {
        let surface = FlatLocalVol::new(0.3_f64).unwrap();
        assert!(surface.local_volatility(-1.0, 100.0).is_err());
        assert!(surface.local_volatility(1.0, -100.0).is_err());
    }
}
