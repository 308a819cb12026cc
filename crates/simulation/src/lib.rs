//! Monte Carlo simulation core for single-equity risk.
//!
//! This crate turns a historical price series into a simulated terminal
//! price distribution and its tail-risk metrics:
//! - Parameter estimation from daily returns
//! - Batch path generation under discretized geometric Brownian motion
//! - VaR/ES analysis over terminal returns and position PnL
//! - Assembly of the final report record
//!
//! The whole pipeline is pure and stateless: every run owns its
//! intermediate data and nothing survives the returned report, so
//! concurrent runs need no coordination.

/// Prelude module for convenient imports.
pub mod prelude;

/// Drift/volatility estimation from historical returns.
pub mod estimator;
/// Pipeline orchestration and report assembly.
pub mod monte_carlo;
/// Path generation under geometric Brownian motion.
pub mod price_path;
/// Distributional risk statistics.
pub mod risk;
