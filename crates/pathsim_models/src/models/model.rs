//! The `Model` trait: SDE coefficients with polymorphic cloning.

use pathsim_core::market_data::MarketDataError;
use thiserror::Error;

/// Relative bump used by the finite-difference diffusion derivative.
const FD_RELATIVE_BUMP: f64 = 1e-6;

/// Model errors.
///
/// Covers parameter validation at construction and coefficient evaluation
/// failures during simulation.
///
/// # Variants
///
/// - `InvalidInitialValue`: Non-positive initial asset value
/// - `InvalidVolatility`: Negative volatility parameter
/// - `NonFiniteParameter`: NaN or infinite constructor input
/// - `Surface`: Local-volatility surface lookup failed
///
/// # Examples
///
/// ```
/// use pathsim_models::models::ModelError;
///
/// let err = ModelError::InvalidInitialValue(-100.0);
/// assert!(format!("{}", err).contains("-100"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    /// Initial asset value must be positive.
    #[error("Invalid initial value: S0 = {0} (must be positive)")]
    InvalidInitialValue(f64),

    /// Volatility parameter must be non-negative.
    #[error("Invalid volatility: sigma = {0} (must be non-negative)")]
    InvalidVolatility(f64),

    /// A constructor input was NaN or infinite.
    #[error("Non-finite parameter '{name}': {value}")]
    NonFiniteParameter {
        /// Parameter name
        name: &'static str,
        /// The offending value
        value: f64,
    },

    /// A local-volatility surface lookup failed.
    #[error("Local-volatility lookup failed: {0}")]
    Surface(#[from] MarketDataError),
}

/// SDE coefficients plus an initial asset value.
///
/// A model describes the dynamics `dS = mu(t, S) dt + sigma(t, S) dW`
/// through its drift and diffusion coefficients. Coefficients must be pure
/// in `(time, asset_price)` and the model's own fixed parameters: no side
/// effects, no hidden state.
///
/// # Polymorphic cloning
///
/// Path simulators own an independent copy of their model so that its
/// lifetime is decoupled from the caller's original instance. Because
/// models are handled through `&dyn Model`, that copy is produced by the
/// virtual [`Model::clone_model`] rather than a copy constructor on the
/// abstract type; `Clone` for `Box<dyn Model>` delegates to it.
///
/// # Errors
///
/// Coefficient evaluation returns `Result` so a coefficient that cannot be
/// answered (e.g. a surface lookup outside its calibrated domain) fails
/// loudly instead of yielding a placeholder value.
///
/// # Example
///
/// ```
/// use pathsim_models::models::{BlackScholesModel, Model};
///
/// let model = BlackScholesModel::new(100.0, 0.05, 0.2).unwrap();
/// let boxed: Box<dyn Model> = Box::new(model);
/// let copy = boxed.clone();
///
/// assert_eq!(copy.initial_value(), 100.0);
/// assert_eq!(copy.drift_term(0.0, 100.0).unwrap(), 5.0);
/// ```
pub trait Model: Send + Sync {
    /// Instantaneous drift coefficient mu(t, S).
    fn drift_term(&self, time: f64, asset_price: f64) -> Result<f64, ModelError>;

    /// Instantaneous diffusion coefficient sigma(t, S).
    fn diffusion_term(&self, time: f64, asset_price: f64) -> Result<f64, ModelError>;

    /// Partial derivative of the diffusion coefficient in the asset price.
    ///
    /// Consumed by higher-order discretisation schemes (Milstein). The
    /// default implementation is a symmetric finite difference over
    /// [`Model::diffusion_term`]; models with a cheap analytic form should
    /// override it.
    fn diffusion_derivative(&self, time: f64, asset_price: f64) -> Result<f64, ModelError> {
        let bump = asset_price.abs().max(1.0) * FD_RELATIVE_BUMP;
        let up = self.diffusion_term(time, asset_price + bump)?;
        let down = self.diffusion_term(time, asset_price - bump)?;
        Ok((up - down) / (2.0 * bump))
    }

    /// The initial asset value S0.
    fn initial_value(&self) -> f64;

    /// Model name for diagnostics.
    fn model_name(&self) -> &'static str;

    /// Produce an independently owned copy of this model.
    ///
    /// The copy must share no mutable state with the original; a Dupire
    /// model may share its read-only volatility surface.
    fn clone_model(&self) -> Box<dyn Model>;
}

impl Clone for Box<dyn Model> {
    fn clone(&self) -> Self {
        self.clone_model()
    }
}

/// Reject a non-finite constructor parameter.
pub(crate) fn require_finite(name: &'static str, value: f64) -> Result<(), ModelError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ModelError::NonFiniteParameter { name, value })
    }
}
