//! Tail-risk metrics over a simulated terminal distribution.

use serde::{Deserialize, Serialize};

/// Summary statistics for one distribution.
///
/// `var_95` is the 5th percentile with linear interpolation between order
/// statistics; `es_95` averages the tail at or below `var_95`, so
/// `es_95 <= var_95` whenever the tail is non-empty.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistributionSummary {
    /// Arithmetic mean.
    pub mean: f64,
    /// Population standard deviation.
    pub std_dev: f64,
    /// 95% Value-at-Risk.
    pub var_95: f64,
    /// 95% Expected Shortfall.
    pub es_95: f64,
}

/// Risk metrics in return space and position PnL space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskMetrics {
    /// Metrics over terminal simple returns.
    pub returns: DistributionSummary,
    /// Metrics over position profit and loss.
    pub pnl: DistributionSummary,
}
