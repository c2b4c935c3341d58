//! Discretisation schemes: single-step advancement rules.
//!
//! A scheme converts the continuous dynamics `dS = mu dt + sigma dW` into
//! one discrete update `S_t -> S_{t+dt}`, drawing its own standard-normal
//! variates from the simulator's random source. Schemes are stateless;
//! everything they need arrives through the step arguments.

use pathsim_models::models::Model;

use super::error::SimulationError;
use crate::rng::PathRng;

/// Single-step advancement rule for a discretised SDE.
///
/// This is the only extension point for adding discretisation methods: the
/// orchestrating simulator calls `next_step` once per grid interval and
/// does not otherwise depend on which scheme is installed.
///
/// Each call consumes a scheme-defined fixed number of draws from `rng`
/// (one for both shipped schemes), which keeps the draw count per path
/// deterministic for a given grid.
pub trait DiscretisationScheme: Send + Sync {
    /// Advance the asset price over one grid interval.
    ///
    /// # Arguments
    ///
    /// * `model` - The dynamics supplying drift and diffusion coefficients
    /// * `time` - Interval start time `t`
    /// * `dt` - Interval width (positive for a validated grid)
    /// * `asset_price` - Price at the interval start
    /// * `rng` - The owning simulator's random source
    ///
    /// # Returns
    ///
    /// The price at `t + dt`, or the coefficient-evaluation error that
    /// prevented the step.
    fn next_step(
        &self,
        model: &dyn Model,
        time: f64,
        dt: f64,
        asset_price: f64,
        rng: &mut PathRng,
    ) -> Result<f64, SimulationError>;

    /// Scheme name for diagnostics.
    fn scheme_name(&self) -> &'static str;
}

/// Euler-Maruyama scheme (strong order 0.5).
///
/// ```text
/// S_{t+dt} = S_t + mu(t, S_t) * dt + sigma(t, S_t) * sqrt(dt) * Z
/// ```
///
/// The minimum viable scheme: one coefficient evaluation each for drift
/// and diffusion and one normal draw per interval.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EulerScheme;

impl DiscretisationScheme for EulerScheme {
    fn next_step(
        &self,
        model: &dyn Model,
        time: f64,
        dt: f64,
        asset_price: f64,
        rng: &mut PathRng,
    ) -> Result<f64, SimulationError> {
        let drift = model.drift_term(time, asset_price)?;
        let diffusion = model.diffusion_term(time, asset_price)?;
        let z = rng.gen_normal();

        Ok(asset_price + drift * dt + diffusion * dt.sqrt() * z)
    }

    fn scheme_name(&self) -> &'static str {
        "EulerMaruyama"
    }
}

/// Milstein scheme (strong order 1.0).
///
/// Euler-Maruyama plus the Ito correction term:
/// ```text
/// S_{t+dt} = S_t + mu * dt + sigma * dW + 0.5 * sigma * sigma' * (dW^2 - dt)
/// ```
/// where `sigma' = d(sigma)/dS` comes from
/// [`Model::diffusion_derivative`]. Worth the extra coefficient evaluation
/// when the step size cannot be made small or the diffusion is strongly
/// level-dependent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MilsteinScheme;

impl DiscretisationScheme for MilsteinScheme {
    fn next_step(
        &self,
        model: &dyn Model,
        time: f64,
        dt: f64,
        asset_price: f64,
        rng: &mut PathRng,
    ) -> Result<f64, SimulationError> {
        let drift = model.drift_term(time, asset_price)?;
        let diffusion = model.diffusion_term(time, asset_price)?;
        let diffusion_derivative = model.diffusion_derivative(time, asset_price)?;

        let dw = dt.sqrt() * rng.gen_normal();

        Ok(asset_price
            + drift * dt
            + diffusion * dw
            + 0.5 * diffusion * diffusion_derivative * (dw * dw - dt))
    }

    fn scheme_name(&self) -> &'static str {
        "Milstein"
    }
}
