//! Black-Scholes model implementation.
//!
//! Constant-parameter geometric dynamics:
//! ```text
//! dS = mu * S * dt + sigma * S * dW
//! ```
//! where:
//! - S = asset price
//! - mu = drift (annualised)
//! - sigma = volatility (annualised)
//! - dW = Wiener process increment

use super::model::{require_finite, Model, ModelError};

/// Black-Scholes model.
///
/// Drift and diffusion are proportional to the asset price:
/// `drift_term = mu * S`, `diffusion_term = sigma * S`. With `mu = 0` and
/// `sigma = 0` the dynamics degenerate to a constant path, which makes a
/// useful sanity check on any discretisation scheme.
///
/// # Examples
///
/// ```
/// use pathsim_models::models::{BlackScholesModel, Model};
///
/// let model = BlackScholesModel::new(100.0, 0.05, 0.2).unwrap();
///
/// assert_eq!(model.initial_value(), 100.0);
/// assert_eq!(model.drift_term(0.0, 100.0).unwrap(), 5.0);
/// assert_eq!(model.diffusion_term(0.0, 100.0).unwrap(), 20.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlackScholesModel {
    /// Initial asset value (S0)
    initial_value: f64,
    /// Drift (annualised)
    drift: f64,
    /// Volatility (annualised)
    volatility: f64,
}

impl BlackScholesModel {
    /// Create a new Black-Scholes model with validation.
    ///
    /// # Arguments
    ///
    /// * `initial_value` - Initial asset value (must be positive)
    /// * `drift` - Drift (annualised, any finite value)
    /// * `volatility` - Volatility (annualised, must be non-negative)
    ///
    /// # Returns
    ///
    /// `Ok(BlackScholesModel)` if the parameters are valid, a descriptive
    /// [`ModelError`] otherwise.
    pub fn new(initial_value: f64, drift: f64, volatility: f64) -> Result<Self, ModelError> {
        require_finite("initial_value", initial_value)?;
        require_finite("drift", drift)?;
        require_finite("volatility", volatility)?;

        if initial_value <= 0.0 {
            return Err(ModelError::InvalidInitialValue(initial_value));
        }
        if volatility < 0.0 {
            return Err(ModelError::InvalidVolatility(volatility));
        }

        Ok(Self {
            initial_value,
            drift,
            volatility,
        })
    }

    /// The drift parameter mu.
    #[inline]
    pub fn drift(&self) -> f64 {
        self.drift
    }

    /// The volatility parameter sigma.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }
}

impl Model for BlackScholesModel {
    fn drift_term(&self, _time: f64, asset_price: f64) -> Result<f64, ModelError> {
        Ok(self.drift * asset_price)
    }

    fn diffusion_term(&self, _time: f64, asset_price: f64) -> Result<f64, ModelError> {
        Ok(self.volatility * asset_price)
    }

    // d(sigma * S)/dS = sigma, exactly.
    fn diffusion_derivative(&self, _time: f64, _asset_price: f64) -> Result<f64, ModelError> {
        Ok(self.volatility)
    }

    fn initial_value(&self) -> f64 {
        self.initial_value
    }

    fn model_name(&self) -> &'static str {
        "BlackScholes"
    }

    fn clone_model(&self) -> Box<dyn Model> {
        Box::new(*self)
    }
}
