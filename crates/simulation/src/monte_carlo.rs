//! Pipeline orchestration: estimate, simulate, analyze, assemble.

use eqsim_domain::entities::price_series::PriceSeries;
use eqsim_domain::error::SimulationError;
use eqsim_domain::value_objects::estimate::DriftVolEstimate;
use eqsim_domain::value_objects::path_matrix::PathMatrix;
use eqsim_domain::value_objects::simulation_report::SimulationReport;
use tracing::info;

use crate::estimator::estimate_parameters;
use crate::price_path::{GeometricBrownianMotion, PathGenerator};
use crate::risk;

/// Tunables for one simulation run.
///
/// Defaults mirror the usual one-year setup: 252 daily steps, 10,000
/// paths, a 200-share position, seed 123.
#[derive(Debug, Clone)]
pub struct SimulationRequest {
    /// Simulation horizon in years.
    pub horizon_years: f64,
    /// Equal time steps across the horizon.
    pub steps: usize,
    /// Number of simulated paths.
    pub n_paths: usize,
    /// Position size in shares; fractional and negative sizes are allowed.
    pub position_size: f64,
    /// RNG seed; identical seeds reproduce identical reports.
    pub seed: u64,
}

impl SimulationRequest {
    /// Creates a request with the default setup.
    #[must_use]
    pub fn new() -> Self {
        Self {
            horizon_years: 1.0,
            steps: 252,
            n_paths: 10_000,
            position_size: 200.0,
            seed: 123,
        }
    }

    /// Sets the horizon in years.
    #[must_use]
    pub fn with_horizon_years(mut self, horizon_years: f64) -> Self {
        self.horizon_years = horizon_years;
        self
    }

    /// Sets the step count.
    #[must_use]
    pub fn with_steps(mut self, steps: usize) -> Self {
        self.steps = steps;
        self
    }

    /// Sets the path count.
    #[must_use]
    pub fn with_n_paths(mut self, n_paths: usize) -> Self {
        self.n_paths = n_paths;
        self
    }

    /// Sets the position size.
    #[must_use]
    pub fn with_position_size(mut self, position_size: f64) -> Self {
        self.position_size = position_size;
        self
    }

    /// Sets the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Validates the request.
    ///
    /// # Errors
    /// Returns [`SimulationError::InvalidParameter`] for a non-positive or
    /// non-finite horizon, zero steps or paths, or a non-finite position
    /// size.
    pub fn validate(&self) -> Result<(), SimulationError> {
        if !self.horizon_years.is_finite() || self.horizon_years <= 0.0 {
            return Err(SimulationError::InvalidParameter {
                name: "horizon_years",
                reason: format!("must be positive and finite, got {}", self.horizon_years),
            });
        }
        if self.steps == 0 {
            return Err(SimulationError::InvalidParameter {
                name: "steps",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.n_paths == 0 {
            return Err(SimulationError::InvalidParameter {
                name: "n_paths",
                reason: "must be at least 1".to_string(),
            });
        }
        if !self.position_size.is_finite() {
            return Err(SimulationError::InvalidParameter {
                name: "position_size",
                reason: format!("must be finite, got {}", self.position_size),
            });
        }
        Ok(())
    }
}

impl Default for SimulationRequest {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs the full pipeline for one instrument.
///
/// Estimates drift/volatility from `series`, simulates the terminal price
/// distribution under GBM, and assembles the risk report. The series must
/// already be cleaned (the [`PriceSeries`] constructor does this).
///
/// # Errors
/// - [`SimulationError::DataUnavailable`] when the cleaned series is empty
/// - [`SimulationError::InsufficientData`] below two valid prices
/// - [`SimulationError::InvalidParameter`] for out-of-domain request values
pub fn run_simulation(
    symbol: &str,
    series: &PriceSeries,
    request: &SimulationRequest,
) -> Result<SimulationReport, SimulationError> {
    request.validate()?;
    if series.is_empty() {
        return Err(SimulationError::DataUnavailable {
            symbol: symbol.to_string(),
        });
    }

    let estimate = estimate_parameters(series)?;
    let gbm = GeometricBrownianMotion::new(
        estimate.spot_price,
        estimate.mu_annual,
        estimate.sigma_annual,
        request.horizon_years,
    )?;

    info!(
        symbol,
        n_paths = request.n_paths,
        steps = request.steps,
        seed = request.seed,
        "running monte carlo simulation"
    );
    let paths = gbm.generate(request.steps, request.n_paths, request.seed)?;

    assemble(symbol, &estimate, paths, request)
}

/// Analyzes a ready-made path matrix and assembles the final report.
///
/// Split out from [`run_simulation`] so replayed or hand-built matrices
/// flow through the same analyzer and assembly as fresh simulations.
///
/// # Errors
/// Returns [`SimulationError::DegenerateTail`] when the matrix is empty.
pub fn assemble(
    symbol: &str,
    estimate: &DriftVolEstimate,
    paths: PathMatrix,
    request: &SimulationRequest,
) -> Result<SimulationReport, SimulationError> {
    let metrics = risk::analyze(&paths, estimate.spot_price, request.position_size)?;
    let terminal_prices = paths.terminal_prices();

    Ok(SimulationReport {
        symbol: symbol.to_string(),
        spot_price: estimate.spot_price,
        mu_daily: estimate.mu_daily,
        sigma_daily: estimate.sigma_daily,
        mu_annual: estimate.mu_annual,
        sigma_annual: estimate.sigma_annual,
        mean_return: metrics.returns.mean,
        std_return: metrics.returns.std_dev,
        var_95_return: metrics.returns.var_95,
        es_95_return: metrics.returns.es_95,
        mean_pnl: metrics.pnl.mean,
        std_pnl: metrics.pnl.std_dev,
        var_95_pnl: metrics.pnl.var_95,
        es_95_pnl: metrics.pnl.es_95,
        terminal_prices,
        paths,
    })
}
