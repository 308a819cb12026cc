//! Drift and volatility estimates derived from historical returns.

use serde::{Deserialize, Serialize};

/// Trading days per year used for annualization.
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Daily and annualized drift/volatility for a single instrument.
///
/// The daily dispersion follows the sample convention (ddof = 1); with a
/// single observed return it is defined as zero. Annualization compounds
/// the mean daily return over 252 trading days and scales the daily
/// volatility by the square root of 252.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DriftVolEstimate {
    /// Last observed price.
    pub spot_price: f64,
    /// Arithmetic mean of simple daily returns.
    pub mu_daily: f64,
    /// Sample standard deviation of daily returns.
    pub sigma_daily: f64,
    /// Compounded annual drift: `(1 + mu_daily)^252 - 1`.
    pub mu_annual: f64,
    /// Annualized volatility: `sigma_daily * sqrt(252)`.
    pub sigma_annual: f64,
}
