//! Local-volatility surface trait definition.

use crate::market_data::error::MarketDataError;
use num_traits::Float;

/// Generic local-volatility surface for (time, asset level) lookup.
///
/// All implementations must be generic over `T: Float` and thread-safe for
/// concurrent read-only lookups: a single surface may back the model copies
/// of many simulators running on different threads, so implementations must
/// not mutate on lookup.
///
/// # Contract
///
/// - `local_volatility(time, asset_level)` returns sigma_loc(t, S)
/// - `time_domain()` returns the valid range of time coordinates
/// - `asset_domain()` returns the valid range of asset levels
///
/// # Invariants
///
/// - sigma_loc > 0 for all valid (time, asset level) pairs
/// - `time = 0` is a valid query (paths are sampled from simulation start)
///
/// # Example
///
/// ```
/// use pathsim_core::market_data::surfaces::{FlatLocalVol, LocalVolSurface};
///
/// let surface = FlatLocalVol::new(0.20_f64).unwrap();
/// let sigma = surface.local_volatility(0.5, 100.0).unwrap();
/// assert_eq!(sigma, 0.20);
/// ```
pub trait LocalVolSurface<T: Float>: Send + Sync {
    /// Return the local volatility at the given time and asset level.
    ///
    /// # Arguments
    ///
    /// * `time` - Time coordinate in years (must be >= 0)
    /// * `asset_level` - Asset level (must be > 0)
    ///
    /// # Returns
    ///
    /// * `Ok(sigma)` - Local volatility
    /// * `Err(MarketDataError::InvalidTime)` - If time < 0 or non-finite
    /// * `Err(MarketDataError::InvalidAssetLevel)` - If asset level <= 0 or non-finite
    /// * `Err(MarketDataError::OutOfBounds)` - If outside the surface domain
    fn local_volatility(&self, time: T, asset_level: T) -> Result<T, MarketDataError>;

    /// Return the valid time domain as (t_min, t_max).
    fn time_domain(&self) -> (T, T);

    /// Return the valid asset-level domain as (s_min, s_max).
    fn asset_domain(&self) -> (T, T);
}

/// Reject queries at invalid coordinates before any domain check.
pub(crate) fn validate_query<T: Float>(time: T, asset_level: T) -> Result<(), MarketDataError> {
    if time < T::zero() || !time.is_finite() {
        return Err(MarketDataError::InvalidTime {
            time: time.to_f64().unwrap_or(f64::NAN),
        });
    }
    if asset_level <= T::zero() || !asset_level.is_finite() {
        return Err(MarketDataError::InvalidAssetLevel {
            level: asset_level.to_f64().unwrap_or(f64::NAN),
        });
    }
    Ok(())
}
