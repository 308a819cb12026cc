//! Assembled output of one simulation run.

use serde::{Deserialize, Serialize};

use crate::value_objects::path_matrix::PathMatrix;
use crate::value_objects::rounding::{round_dp2, round_dp4};

/// Flat record merging estimation, risk metrics, and raw path data.
///
/// Scalar fields are rounded only when serialized: returns and ratios to 4
/// decimal places, prices and PnL amounts to 2. `terminal_prices` and
/// `paths` pass through at full precision for downstream visualization
/// collaborators. The record is assembled once per request and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Instrument symbol.
    pub symbol: String,
    /// Last observed price.
    #[serde(serialize_with = "round_dp2")]
    pub spot_price: f64,
    /// Mean simple daily return.
    #[serde(serialize_with = "round_dp4")]
    pub mu_daily: f64,
    /// Sample standard deviation of daily returns.
    #[serde(serialize_with = "round_dp4")]
    pub sigma_daily: f64,
    /// Compounded annual drift.
    #[serde(serialize_with = "round_dp4")]
    pub mu_annual: f64,
    /// Annualized volatility.
    #[serde(serialize_with = "round_dp4")]
    pub sigma_annual: f64,
    /// Mean terminal return.
    #[serde(serialize_with = "round_dp4")]
    pub mean_return: f64,
    /// Standard deviation of terminal returns.
    #[serde(serialize_with = "round_dp4")]
    pub std_return: f64,
    /// 95% Value-at-Risk on terminal returns.
    #[serde(serialize_with = "round_dp4")]
    pub var_95_return: f64,
    /// 95% Expected Shortfall on terminal returns.
    #[serde(serialize_with = "round_dp4")]
    pub es_95_return: f64,
    /// Mean position PnL.
    #[serde(serialize_with = "round_dp2")]
    pub mean_pnl: f64,
    /// Standard deviation of position PnL.
    #[serde(serialize_with = "round_dp2")]
    pub std_pnl: f64,
    /// 95% Value-at-Risk on position PnL.
    #[serde(serialize_with = "round_dp2")]
    pub var_95_pnl: f64,
    /// 95% Expected Shortfall on position PnL.
    #[serde(serialize_with = "round_dp2")]
    pub es_95_pnl: f64,
    /// Terminal price of every simulated path.
    pub terminal_prices: Vec<f64>,
    /// Full simulated price grid.
    pub paths: PathMatrix,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> SimulationReport {
        SimulationReport {
            symbol: "AAPL".to_string(),
            spot_price: 187.123_456,
            mu_daily: 0.000_512_34,
            sigma_daily: 0.012_345_6,
            mu_annual: 0.137_913_4,
            sigma_annual: 0.195_978_2,
            mean_return: 0.141_234_9,
            std_return: 0.213_456_1,
            var_95_return: -0.171_239_8,
            es_95_return: -0.221_871_3,
            mean_pnl: 5_284.193_7,
            std_pnl: 7_987.551_2,
            var_95_pnl: -6_408.129_4,
            es_95_pnl: -8_302.677_1,
            terminal_prices: vec![190.123_456_789, 201.5],
            paths: PathMatrix::from_raw(2, 2, vec![187.0, 190.123_456_789, 187.0, 201.5]),
        }
    }

    #[test]
    fn test_scalar_fields_round_on_serialize() {
        let json = serde_json::to_value(sample_report()).unwrap();

        assert_eq!(json["spot_price"], 187.12);
        assert_eq!(json["mu_daily"], 0.0005);
        assert_eq!(json["sigma_annual"], 0.196);
        assert_eq!(json["var_95_return"], -0.1712);
        assert_eq!(json["es_95_pnl"], -8302.68);
    }

    #[test]
    fn test_path_data_serializes_at_full_precision() {
        let json = serde_json::to_value(sample_report()).unwrap();
        assert_eq!(json["terminal_prices"][0], 190.123_456_789);
    }

    #[test]
    fn test_in_memory_values_stay_unrounded() {
        let report = sample_report();
        assert_eq!(report.spot_price, 187.123_456);
        assert_eq!(report.var_95_return, -0.171_239_8);
    }
}
