//! Error types for the simulation layer.

use pathsim_models::models::ModelError;
use thiserror::Error;

/// Path simulation errors.
///
/// Grid variants surface at simulator construction; the remaining variants
/// surface from `path()` when a step cannot be completed. A failed step
/// aborts the in-progress path: the caller receives the error, never a
/// partial or zero-filled path.
///
/// # Variants
///
/// - `InsufficientTimePoints`: Grid shorter than two points
/// - `NonIncreasingTimePoints`: Grid not strictly increasing
/// - `NonFiniteTimePoint`: Grid contains NaN or an infinity
/// - `Model`: Wrapped coefficient-evaluation failure
/// - `NonFinitePrice`: A scheme produced NaN or an infinite price
///
/// # Examples
///
/// ```
/// use pathsim_engine::simulation::SimulationError;
///
/// let err = SimulationError::InsufficientTimePoints { got: 1, need: 2 };
/// assert!(format!("{}", err).contains("got 1"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// The time grid has fewer than two points.
    #[error("Insufficient time points: got {got}, need at least {need}")]
    InsufficientTimePoints {
        /// Number of points provided
        got: usize,
        /// Minimum number of points required
        need: usize,
    },

    /// The time grid is not strictly increasing.
    #[error("Time points are not strictly increasing at index {index}")]
    NonIncreasingTimePoints {
        /// Index of the first offending point
        index: usize,
    },

    /// The time grid contains a non-finite value.
    #[error("Non-finite time point at index {index}: {value}")]
    NonFiniteTimePoint {
        /// Index of the offending point
        index: usize,
        /// The offending value
        value: f64,
    },

    /// A model coefficient could not be evaluated.
    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    /// A discretisation step produced a non-finite asset price.
    #[error("Non-finite asset price at step {step}: {value}")]
    NonFinitePrice {
        /// Index of the grid point the step was producing
        step: usize,
        /// The offending value
        value: f64,
    },
}
