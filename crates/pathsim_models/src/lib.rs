//! # Pathsim Models (model layer)
//!
//! Stochastic models describing asset-price dynamics through their SDE
//! coefficients:
//!
//! ```text
//! dS = mu(t, S) dt + sigma(t, S) dW
//! ```
//!
//! This crate provides:
//! - The [`models::Model`] trait: drift and diffusion coefficients, initial
//!   value, and polymorphic cloning for heap-owned model objects
//! - [`models::BlackScholesModel`]: constant-parameter geometric dynamics
//! - [`models::DupireLocalVolatility`]: diffusion driven by a calibrated
//!   local-volatility surface
//!
//! ## Design Principles
//!
//! - **Dynamic dispatch at the model seam**: simulators hold
//!   `Box<dyn Model>` and clone through the trait, so new dynamics plug in
//!   without touching orchestration code
//! - **Loud coefficient failures**: coefficient evaluation returns
//!   `Result`; a surface lookup that cannot be answered is an error, never
//!   a placeholder number

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod models;

pub use models::{BlackScholesModel, DupireLocalVolatility, Model, ModelError};
