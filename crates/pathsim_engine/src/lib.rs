//! # Pathsim Engine (simulation layer)
//!
//! Turns continuous dynamics from `pathsim_models` into discrete sample
//! paths:
//! - [`simulation::TimeGrid`]: validated, immutable simulation time points
//! - [`simulation::DiscretisationScheme`]: pluggable step-advancement rules
//!   (Euler-Maruyama, Milstein)
//! - [`simulation::PathSimulator`]: the orchestrator owning one cloned
//!   model, one grid, and one seeded random source
//! - [`rng::PathRng`]: reproducible per-simulator standard-normal draws
//!
//! ## Usage Example
//!
//! ```rust
//! use pathsim_engine::simulation::{EulerScheme, PathSimulator};
//! use pathsim_models::models::BlackScholesModel;
//!
//! let model = BlackScholesModel::new(100.0, 0.05, 0.2).unwrap();
//! let mut simulator =
//!     PathSimulator::with_seed(&[0.0, 0.25, 0.5, 0.75, 1.0], &model, EulerScheme, 42).unwrap();
//!
//! let path = simulator.path().unwrap();
//! assert_eq!(path.len(), 5);
//! assert_eq!(path[0], 100.0);
//! ```
//!
//! ## Concurrency
//!
//! A simulator is single-threaded and synchronous; `path()` runs to
//! completion. Simulators share no state with one another (each owns its
//! model copy and random source), so independent instances can run on
//! separate threads without coordination.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod rng;
pub mod simulation;

// Re-export commonly used items for convenience
pub use rng::PathRng;
pub use simulation::{
    DiscretisationScheme, EulerPathSimulator, EulerScheme, MilsteinPathSimulator, MilsteinScheme,
    PathSimulator, SimulationError, TimeGrid,
};
