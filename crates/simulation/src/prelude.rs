//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types from the crate.
//!
//! # Example
//!
//! ```rust
//! use eqsim_simulation::prelude::*;
//! ```

// Estimator
pub use crate::estimator::estimate_parameters;

// Orchestration
pub use crate::monte_carlo::{SimulationRequest, assemble, run_simulation};

// Path generators
pub use crate::price_path::{DeterministicPaths, GeometricBrownianMotion, PathGenerator};

// Risk analysis
pub use crate::risk::analyze;
