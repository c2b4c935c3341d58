//! Market data error types.

use crate::types::InterpolationError;
use thiserror::Error;

/// Market data operation errors.
///
/// Provides structured error handling for volatility surface lookups with
/// descriptive context for each failure mode.
///
/// # Variants
///
/// - `InvalidAssetLevel`: Non-positive or non-finite asset level
/// - `InvalidTime`: Negative or non-finite time coordinate
/// - `OutOfBounds`: Query outside the surface domain
/// - `Interpolation`: Wrapped interpolation error
/// - `InsufficientData`: Not enough data points for construction
///
/// # Examples
///
/// ```
/// use pathsim_core::market_data::MarketDataError;
///
/// let err = MarketDataError::InvalidAssetLevel { level: -5.0 };
/// assert!(format!("{}", err).contains("-5"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MarketDataError {
    /// Invalid asset level (non-positive or non-finite).
    #[error("Invalid asset level: S = {level}")]
    InvalidAssetLevel {
        /// The invalid asset level
        level: f64,
    },

    /// Invalid time coordinate (negative or non-finite).
    #[error("Invalid time: t = {time}")]
    InvalidTime {
        /// The invalid time value
        time: f64,
    },

    /// Query point outside the surface domain.
    #[error("Out of bounds: {x} not in [{min}, {max}]")]
    OutOfBounds {
        /// The query point that was out of bounds
        x: f64,
        /// Minimum valid value
        min: f64,
        /// Maximum valid value
        max: f64,
    },

    /// Interpolation error.
    #[error("Interpolation error: {0}")]
    Interpolation(#[from] InterpolationError),

    /// Insufficient data for construction.
    #[error("Insufficient data: got {got}, need {need}")]
    InsufficientData {
        /// Number of points provided
        got: usize,
        /// Minimum number of points required
        need: usize,
    },
}
