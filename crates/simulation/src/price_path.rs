//! Price path generation under geometric Brownian motion.

use eqsim_domain::error::SimulationError;
use eqsim_domain::value_objects::path_matrix::PathMatrix;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::{Distribution, StandardNormal};

/// Generates a batch of simulated price trajectories.
pub trait PathGenerator {
    /// Generates `n_paths` trajectories of `steps` increments each.
    ///
    /// Column 0 of the result holds the starting price for every row.
    /// The same seed must reproduce the same matrix bit for bit.
    ///
    /// # Errors
    /// Returns [`SimulationError::InvalidParameter`] for out-of-domain
    /// step or path counts.
    fn generate(
        &self,
        steps: usize,
        n_paths: usize,
        seed: u64,
    ) -> Result<PathMatrix, SimulationError>;
}

/// Discretized geometric Brownian motion.
///
/// Each path accumulates `steps` log-increments
/// `(drift - sigma^2 / 2) * dt + sigma * sqrt(dt) * Z` with independent
/// standard-normal `Z`, then exponentiates and scales by the spot price.
/// Exponentiation keeps every simulated price strictly positive, and the
/// increments match continuous-time GBM in distribution at each step.
/// Paths are drawn sequentially from one seeded generator, so a seed pins
/// the entire matrix.
#[derive(Debug, Clone, Copy)]
pub struct GeometricBrownianMotion {
    spot_price: f64,
    drift: f64,      // annualized drift (mu)
    volatility: f64, // annualized volatility (sigma)
    horizon_years: f64,
}

impl GeometricBrownianMotion {
    /// Creates a validated GBM process.
    ///
    /// # Errors
    /// Returns [`SimulationError::InvalidParameter`] when the spot price
    /// or horizon is not positive and finite, the drift is not finite, or
    /// the volatility is negative or not finite.
    pub fn new(
        spot_price: f64,
        drift: f64,
        volatility: f64,
        horizon_years: f64,
    ) -> Result<Self, SimulationError> {
        if !spot_price.is_finite() || spot_price <= 0.0 {
            return Err(invalid(
                "spot_price",
                format!("must be positive and finite, got {spot_price}"),
            ));
        }
        if !drift.is_finite() {
            return Err(invalid("drift", format!("must be finite, got {drift}")));
        }
        if !volatility.is_finite() || volatility < 0.0 {
            return Err(invalid(
                "volatility",
                format!("must be non-negative and finite, got {volatility}"),
            ));
        }
        if !horizon_years.is_finite() || horizon_years <= 0.0 {
            return Err(invalid(
                "horizon_years",
                format!("must be positive and finite, got {horizon_years}"),
            ));
        }
        Ok(Self {
            spot_price,
            drift,
            volatility,
            horizon_years,
        })
    }

    /// Starting price shared by every generated path.
    #[must_use]
    pub fn spot_price(&self) -> f64 {
        self.spot_price
    }
}

impl PathGenerator for GeometricBrownianMotion {
    fn generate(
        &self,
        steps: usize,
        n_paths: usize,
        seed: u64,
    ) -> Result<PathMatrix, SimulationError> {
        if steps == 0 {
            return Err(invalid("steps", "must be at least 1".to_string()));
        }
        if n_paths == 0 {
            return Err(invalid("n_paths", "must be at least 1".to_string()));
        }

        let dt = self.horizon_years / steps as f64;
        let drift_term = (self.drift - 0.5 * self.volatility.powi(2)) * dt;
        let vol_term = self.volatility * dt.sqrt();

        let mut rng = StdRng::seed_from_u64(seed);
        let mut data = Vec::with_capacity(n_paths * (steps + 1));
        for _ in 0..n_paths {
            data.push(self.spot_price);
            let mut log_price = 0.0_f64;
            for _ in 0..steps {
                let z: f64 = StandardNormal.sample(&mut rng);
                log_price += drift_term + vol_term * z;
                data.push(self.spot_price * log_price.exp());
            }
        }

        Ok(PathMatrix::from_raw(n_paths, steps + 1, data))
    }
}

/// Fixed path source for tests and replays.
#[derive(Debug, Clone)]
pub struct DeterministicPaths {
    matrix: PathMatrix,
}

impl DeterministicPaths {
    /// Wraps a prebuilt matrix.
    #[must_use]
    pub fn new(matrix: PathMatrix) -> Self {
        Self { matrix }
    }
}

impl PathGenerator for DeterministicPaths {
    fn generate(
        &self,
        _steps: usize,
        _n_paths: usize,
        _seed: u64,
    ) -> Result<PathMatrix, SimulationError> {
        Ok(self.matrix.clone())
    }
}

fn invalid(name: &'static str, reason: String) -> SimulationError {
    SimulationError::InvalidParameter { name, reason }
}
