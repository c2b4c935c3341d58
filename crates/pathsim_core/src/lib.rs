//! # Pathsim Core (foundation layer)
//!
//! Numeric foundations shared by the model and simulation layers:
//! - Structured error types for interpolation and market data lookups
//! - Bilinear 2D interpolation for gridded surfaces
//! - Local-volatility surface abstraction with flat and interpolated
//!   implementations
//!
//! ## Design Principles
//!
//! - **Generic `Float` type**: all numeric code is generic over
//!   `num_traits::Float` so it works with `f64` and `f32` alike
//! - **Construction-time validation**: malformed grids and surfaces are
//!   rejected when built, not when queried
//! - **Structured errors**: every failure mode is a distinct, catchable
//!   variant carrying its offending values

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod market_data;
pub mod math;
pub mod types;
