//! Simulated price trajectories in a dense row-major grid.

use serde::{Deserialize, Serialize};

/// Batch of simulated price paths.
///
/// Row-major storage: row `i` holds one trajectory of `n_points` prices,
/// where column 0 is the spot price the simulation started from and the
/// last column is the terminal price. Every entry of a log-normal process
/// is strictly positive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathMatrix {
    n_paths: usize,
    n_points: usize,
    data: Vec<f64>,
}

impl PathMatrix {
    /// Builds a matrix from row-major data.
    ///
    /// # Panics
    /// Panics if `data.len() != n_paths * n_points`.
    #[must_use]
    pub fn from_raw(n_paths: usize, n_points: usize, data: Vec<f64>) -> Self {
        assert_eq!(
            data.len(),
            n_paths * n_points,
            "path matrix shape mismatch"
        );
        Self {
            n_paths,
            n_points,
            data,
        }
    }

    /// Number of simulated trajectories.
    #[must_use]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Points per trajectory, including the spot at column 0.
    #[must_use]
    pub fn n_points(&self) -> usize {
        self.n_points
    }

    /// One trajectory as a price slice.
    ///
    /// # Panics
    /// Panics if `index >= n_paths`.
    #[must_use]
    pub fn path(&self, index: usize) -> &[f64] {
        let start = index * self.n_points;
        &self.data[start..start + self.n_points]
    }

    /// Iterates over all trajectories.
    pub fn paths(&self) -> impl Iterator<Item = &[f64]> {
        self.data.chunks_exact(self.n_points)
    }

    /// Terminal price of every trajectory (the last column).
    #[must_use]
    pub fn terminal_prices(&self) -> Vec<f64> {
        self.paths().filter_map(|p| p.last().copied()).collect()
    }
}
