//! The path simulator: orchestrates full-path generation.

use pathsim_models::models::Model;

use super::error::SimulationError;
use super::grid::TimeGrid;
use super::scheme::{DiscretisationScheme, EulerScheme, MilsteinScheme};
use crate::rng::PathRng;

/// Path simulator using the Euler-Maruyama scheme.
pub type EulerPathSimulator = PathSimulator<EulerScheme>;

/// Path simulator using the Milstein scheme.
pub type MilsteinPathSimulator = PathSimulator<MilsteinScheme>;

/// Simulates sample paths of an asset price process over a fixed time grid.
///
/// A simulator exclusively owns three things:
/// - a clone of the model it was constructed with, so its dynamics are
///   lifetime-decoupled from the caller's original instance,
/// - the validated [`TimeGrid`],
/// - a [`PathRng`] whose state advances with every draw and is never
///   shared with another simulator.
///
/// Each [`PathSimulator::path`] call produces one fresh, independently
/// randomised path over the same model and grid. Apart from the random
/// source, the simulator is stateless across calls.
///
/// # Examples
///
/// ```rust
/// use pathsim_engine::simulation::{EulerScheme, PathSimulator};
/// use pathsim_models::models::BlackScholesModel;
///
/// let model = BlackScholesModel::new(100.0, 0.05, 0.2).unwrap();
/// let mut simulator =
///     PathSimulator::with_seed(&[0.0, 0.5, 1.0], &model, EulerScheme, 42).unwrap();
///
/// let path = simulator.path().unwrap();
/// assert_eq!(path.len(), 3);
/// assert_eq!(path[0], 100.0);
/// ```
pub struct PathSimulator<S: DiscretisationScheme> {
    /// Exclusively owned clone of the caller's model
    model: Box<dyn Model>,
    /// Simulation time points, immutable after construction
    grid: TimeGrid,
    /// Per-simulator random source
    rng: PathRng,
    /// The installed step-advancement rule
    scheme: S,
}

impl<S: DiscretisationScheme> PathSimulator<S> {
    /// Construct a simulator seeded from ambient entropy.
    ///
    /// The grid is validated immediately and the model cloned, so the
    /// caller's instance may be dropped afterwards.
    ///
    /// # Errors
    ///
    /// Any of the malformed-grid variants of [`SimulationError`]; no
    /// simulator is constructed in that case.
    pub fn new(time_points: &[f64], model: &dyn Model, scheme: S) -> Result<Self, SimulationError> {
        Self::with_rng(time_points, model, scheme, PathRng::from_entropy())
    }

    /// Construct a simulator with a fixed seed.
    ///
    /// Two simulators built with identical parameters and identical seeds
    /// produce bit-identical sequences of paths.
    pub fn with_seed(
        time_points: &[f64],
        model: &dyn Model,
        scheme: S,
        seed: u64,
    ) -> Result<Self, SimulationError> {
        Self::with_rng(time_points, model, scheme, PathRng::from_seed(seed))
    }

    fn with_rng(
        time_points: &[f64],
        model: &dyn Model,
        scheme: S,
        rng: PathRng,
    ) -> Result<Self, SimulationError> {
        let grid = TimeGrid::new(time_points.to_vec())?;
        Ok(Self {
            model: model.clone_model(),
            grid,
            rng,
            scheme,
        })
    }

    /// Produce one full sample path.
    ///
    /// The returned sequence has one price per grid point; element 0 is the
    /// owned model's initial value and element `i + 1` is the scheme's
    /// advancement of element `i` over interval `i`. Ownership of the path
    /// transfers to the caller; the simulator retains nothing.
    ///
    /// # Errors
    ///
    /// A coefficient-evaluation failure or a non-finite step output aborts
    /// the path and is returned as-is; no partial path escapes.
    pub fn path(&mut self) -> Result<Vec<f64>, SimulationError> {
        let mut path = Vec::with_capacity(self.grid.len());
        path.push(self.model.initial_value());

        for index in 0..self.grid.num_intervals() {
            let next = self.scheme.next_step(
                self.model.as_ref(),
                self.grid.point(index),
                self.grid.dt(index),
                path[index],
                &mut self.rng,
            )?;
            if !next.is_finite() {
                return Err(SimulationError::NonFinitePrice {
                    step: index + 1,
                    value: next,
                });
            }
            path.push(next);
        }

        Ok(path)
    }

    /// Reset the random source to a fixed state.
    ///
    /// The next `path()` call restarts the draw sequence exactly as if the
    /// simulator had been constructed with that seed.
    #[inline]
    pub fn reseed(&mut self, seed: u64) {
        self.rng.reseed(seed);
    }

    /// The seed the random source was last initialised with.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// The simulation time grid.
    #[inline]
    pub fn grid(&self) -> &TimeGrid {
        &self.grid
    }

    /// The simulator's own model copy.
    #[inline]
    pub fn model(&self) -> &dyn Model {
        self.model.as_ref()
    }

    /// Name of the installed discretisation scheme.
    #[inline]
    pub fn scheme_name(&self) -> &'static str {
        self.scheme.scheme_name()
    }
}
