//! Dupire local-volatility model implementation.
//!
//! Local-volatility dynamics:
//! ```text
//! dS = (r - q) * S * dt + sigma_loc(t, S) * S * dW
//! ```
//! where:
//! - r = risk-free rate (annualised)
//! - q = dividend yield (annualised)
//! - sigma_loc = local volatility looked up on a calibrated surface
//!
//! The risk-neutral carry drift `(r - q) * S` must be supplied explicitly
//! at construction; there is no default. Surface lookups that cannot be
//! answered (outside the calibrated domain, invalid coordinates) propagate
//! as errors rather than degrading to a placeholder volatility.

use std::fmt;
use std::sync::Arc;

use pathsim_core::market_data::surfaces::LocalVolSurface;

use super::model::{require_finite, Model, ModelError};

/// Dupire local-volatility model.
///
/// Owns its scalar parameters and holds the calibrated surface behind an
/// `Arc`. Cloning the model value-copies the parameters and shares the
/// read-only surface, so many simulators can run off one calibration
/// concurrently without duplicating the grid.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use pathsim_core::market_data::surfaces::FlatLocalVol;
/// use pathsim_models::models::{DupireLocalVolatility, Model};
///
/// let surface = Arc::new(FlatLocalVol::new(0.2).unwrap());
/// let model = DupireLocalVolatility::new(100.0, 0.03, 0.01, surface).unwrap();
///
/// // Carry drift (r - q) * S
/// assert!((model.drift_term(0.0, 100.0).unwrap() - 2.0).abs() < 1e-12);
/// // Flat surface: diffusion collapses to sigma * S
/// assert!((model.diffusion_term(0.0, 100.0).unwrap() - 20.0).abs() < 1e-12);
/// ```
#[derive(Clone)]
pub struct DupireLocalVolatility {
    /// Initial asset value (S0)
    initial_value: f64,
    /// Risk-free rate (annualised)
    rate: f64,
    /// Continuous dividend yield (annualised)
    dividend_yield: f64,
    /// Calibrated local-volatility surface (shared, read-only)
    surface: Arc<dyn LocalVolSurface<f64>>,
}

impl DupireLocalVolatility {
    /// Create a new Dupire local-volatility model with validation.
    ///
    /// # Arguments
    ///
    /// * `initial_value` - Initial asset value (must be positive)
    /// * `rate` - Risk-free rate (annualised, any finite value)
    /// * `dividend_yield` - Continuous dividend yield (annualised, any finite value)
    /// * `surface` - Calibrated local-volatility surface
    ///
    /// # Returns
    ///
    /// `Ok(DupireLocalVolatility)` if the parameters are valid, a
    /// descriptive [`ModelError`] otherwise.
    pub fn new(
        initial_value: f64,
        rate: f64,
        dividend_yield: f64,
        surface: Arc<dyn LocalVolSurface<f64>>,
    ) -> Result<Self, ModelError> {
        require_finite("initial_value", initial_value)?;
        require_finite("rate", rate)?;
        require_finite("dividend_yield", dividend_yield)?;

        if initial_value <= 0.0 {
            return Err(ModelError::InvalidInitialValue(initial_value));
        }

        Ok(Self {
            initial_value,
            rate,
            dividend_yield,
            surface,
        })
    }

    /// The risk-free rate r.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// The continuous dividend yield q.
    #[inline]
    pub fn dividend_yield(&self) -> f64 {
        self.dividend_yield
    }

    /// The net carry r - q driving the risk-neutral drift.
    #[inline]
    pub fn carry(&self) -> f64 {
        self.rate - self.dividend_yield
    }

    /// Local volatility at (time, asset price), straight off the surface.
    #[inline]
    pub fn local_volatility(&self, time: f64, asset_price: f64) -> Result<f64, ModelError> {
        Ok(self.surface.local_volatility(time, asset_price)?)
    }
}

impl Model for DupireLocalVolatility {
    fn drift_term(&self, _time: f64, asset_price: f64) -> Result<f64, ModelError> {
        Ok(self.carry() * asset_price)
    }

    fn diffusion_term(&self, time: f64, asset_price: f64) -> Result<f64, ModelError> {
        let sigma = self.surface.local_volatility(time, asset_price)?;
        Ok(sigma * asset_price)
    }

    fn initial_value(&self) -> f64 {
        self.initial_value
    }

    fn model_name(&self) -> &'static str {
        "DupireLocalVolatility"
    }

    fn clone_model(&self) -> Box<dyn Model> {
        Box::new(self.clone())
    }
}

impl fmt::Debug for DupireLocalVolatility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DupireLocalVolatility")
            .field("initial_value", &self.initial_value)
            .field("rate", &self.rate)
            .field("dividend_yield", &self.dividend_yield)
            .field("surface", &"<dyn LocalVolSurface>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pathsim_core::market_data::surfaces::{FlatLocalVol, InterpolatedLocalVol};
    use pathsim_core::market_data::MarketDataError;

    fn flat_model(sigma: f64) -> DupireLocalVolatility {
        let surface = Arc::new(FlatLocalVol::new(sigma).unwrap());
        DupireLocalVolatility::new(100.0, 0.03, 0.01, surface).unwrap()
    }

    #[test]
    fn test_new_valid() {
        let model = flat_model(0.2);
        assert_eq!(model.initial_value(), 100.0);
        assert_eq!(model.rate(), 0.03);
        assert_eq!(model.dividend_yield(), 0.01);
        assert_relative_eq!(model.carry(), 0.02);
    }

    #[test]
    fn test_new_invalid_initial_value() {
        let surface = Arc::new(FlatLocalVol::new(0.2).unwrap());
        assert!(matches!(
            DupireLocalVolatility::new(0.0, 0.03, 0.01, surface),
            Err(ModelError::InvalidInitialValue(_))
        ));
    }

    #[test]
    fn test_new_non_finite_rate() {
        let surface = Arc::new(FlatLocalVol::new(0.2).unwrap());
        assert!(DupireLocalVolatility::new(100.0, f64::NAN, 0.01, surface).is_err());
    }

    #[test]
    fn test_carry_drift() {
        let model = flat_model(0.2);
        // (r - q) * S = 0.02 * 50
        assert_relative_eq!(model.drift_term(0.7, 50.0).unwrap(), 1.0);
    }

    #[test]
    fn test_flat_surface_matches_proportional_diffusion() {
        // Flat surface collapses to sigma * S, the Black-Scholes diffusion.
        let model = flat_model(0.2);
        for s in [10.0, 100.0, 400.0] {
            assert_relative_eq!(model.diffusion_term(0.5, s).unwrap(), 0.2 * s);
        }
    }

    #[test]
    fn test_smile_surface_diffusion() {
        let surface = Arc::new(
            InterpolatedLocalVol::new(
                vec![0.0, 1.0],
                vec![80.0, 100.0, 120.0],
                vec![0.25, 0.20, 0.22, 0.26, 0.21, 0.23],
                false,
            )
            .unwrap(),
        );
        let model = DupireLocalVolatility::new(100.0, 0.0, 0.0, surface).unwrap();

        // At the (0, 100) node the surface reads 0.20.
        assert_relative_eq!(model.local_volatility(0.0, 100.0).unwrap(), 0.20);
        assert_relative_eq!(model.diffusion_term(0.0, 100.0).unwrap(), 20.0);
        // Drift stays zero with zero carry.
        assert_eq!(model.drift_term(0.0, 100.0).unwrap(), 0.0);
    }

    #[test]
    fn test_out_of_domain_lookup_fails_loudly() {
        let surface = Arc::new(
            InterpolatedLocalVol::new(
                vec![0.0, 1.0],
                vec![90.0, 110.0],
                vec![0.2; 4],
                false,
            )
            .unwrap(),
        );
        let model = DupireLocalVolatility::new(100.0, 0.0, 0.0, surface).unwrap();

        let err = model.diffusion_term(0.5, 200.0).unwrap_err();
        assert!(matches!(
            err,
            ModelError::Surface(MarketDataError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_finite_difference_derivative_on_flat_surface() {
        // d(sigma * S)/dS = sigma via the default finite difference.
        let model = flat_model(0.25);
        let derivative = model.diffusion_derivative(0.5, 100.0).unwrap();
        assert_relative_eq!(derivative, 0.25, epsilon = 1e-6);
    }

    #[test]
    fn test_clone_shares_surface_copies_parameters() {
        let surface: Arc<dyn LocalVolSurface<f64>> = Arc::new(FlatLocalVol::new(0.2).unwrap());
        let model = DupireLocalVolatility::new(100.0, 0.03, 0.01, Arc::clone(&surface)).unwrap();

        let copy = model.clone_model();
        drop(model);

        // Surface is still alive through the copy; parameters survived.
        assert_eq!(copy.initial_value(), 100.0);
        assert_relative_eq!(copy.diffusion_term(0.0, 100.0).unwrap(), 20.0);
        assert_eq!(Arc::strong_count(&surface), 2);
    }

    #[test]
    fn test_debug_omits_surface_contents() {
        let model = flat_model(0.2);
        let rendered = format!("{:?}", model);
        assert!(rendered.contains("DupireLocalVolatility"));
        assert!(rendered.contains("initial_value"));
    }
}
