//! Path simulation: time grids, discretisation schemes, orchestration.
//!
//! The pieces fit together as follows: a [`PathSimulator`] owns a cloned
//! model, a validated [`TimeGrid`], and a seeded random source; its
//! `path()` method walks the grid, delegating every single-step advance to
//! the installed [`DiscretisationScheme`]. Adding a scheme means
//! implementing one trait; the orchestration never changes.

pub mod error;
pub mod grid;
pub mod scheme;
pub mod simulator;

pub use error::SimulationError;
pub use grid::TimeGrid;
pub use scheme::{DiscretisationScheme, EulerScheme, MilsteinScheme};
pub use simulator::{EulerPathSimulator, MilsteinPathSimulator, PathSimulator};
