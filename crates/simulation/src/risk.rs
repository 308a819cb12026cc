//! Distributional risk statistics over simulated terminal prices.

use eqsim_domain::error::SimulationError;
use eqsim_domain::math::stats;
use eqsim_domain::value_objects::path_matrix::PathMatrix;
use eqsim_domain::value_objects::risk_metrics::{DistributionSummary, RiskMetrics};

/// Tail cut used for VaR/ES, as a percentile.
const TAIL_PERCENTILE: f64 = 5.0;

/// Computes return-space and PnL-space risk metrics for a position.
///
/// Terminal returns are `S_T / S0 - 1` and PnL is `(S_T - S0) * size`,
/// where the position size may be fractional or negative for shorts.
/// Summary dispersion uses the population convention (ddof = 0).
///
/// # Errors
/// Returns [`SimulationError::DegenerateTail`] when the matrix holds no
/// terminal prices to analyze.
pub fn analyze(
    paths: &PathMatrix,
    spot_price: f64,
    position_size: f64,
) -> Result<RiskMetrics, SimulationError> {
    let terminal_prices = paths.terminal_prices();
    let terminal_returns: Vec<f64> = terminal_prices
        .iter()
        .map(|p| p / spot_price - 1.0)
        .collect();
    let pnl: Vec<f64> = terminal_prices
        .iter()
        .map(|p| (p - spot_price) * position_size)
        .collect();

    Ok(RiskMetrics {
        returns: summarize(&terminal_returns)?,
        pnl: summarize(&pnl)?,
    })
}

/// Summarizes one distribution: mean, population std, VaR95, ES95.
///
/// The interpolated percentile can never undercut the sample minimum, so
/// the `<= var_95` tail is non-empty for any NaN-free input and ES is
/// always defined; the minimum itself is the fallback if the comparison
/// ever selects nothing.
fn summarize(values: &[f64]) -> Result<DistributionSummary, SimulationError> {
    let var_95 =
        stats::percentile(values, TAIL_PERCENTILE).ok_or(SimulationError::DegenerateTail)?;
    let tail: Vec<f64> = values.iter().copied().filter(|v| *v <= var_95).collect();
    let es_95 = if tail.is_empty() {
        values.iter().copied().fold(f64::INFINITY, f64::min)
    } else {
        stats::mean(&tail)
    };

    Ok(DistributionSummary {
        mean: stats::mean(values),
        std_dev: stats::std_dev(values, 0),
        var_95,
        es_95,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Matrix whose rows are [spot, terminal] pairs.
    fn matrix_with_terminals(spot: f64, terminals: &[f64]) -> PathMatrix {
        let data: Vec<f64> = terminals.iter().flat_map(|t| [spot, *t]).collect();
        PathMatrix::from_raw(terminals.len(), 2, data)
    }

    #[test]
    fn test_var_and_es_on_known_distribution() {
        // Terminals 101..=200: returns are 0.01..=1.00 against spot 100.
        let terminals: Vec<f64> = (101..=200).map(f64::from).collect();
        let paths = matrix_with_terminals(100.0, &terminals);

        let metrics = analyze(&paths, 100.0, 1.0).unwrap();

        // 5th percentile rank = 0.05 * 99 = 4.95 between 0.05 and 0.06.
        assert!((metrics.returns.var_95 - 0.0595).abs() < 1e-12);
        // Tail holds the five smallest returns: mean is 0.03.
        assert!((metrics.returns.es_95 - 0.03).abs() < 1e-12);
        assert!((metrics.returns.mean - 0.505).abs() < 1e-9);

        // PnL at size 1 mirrors the price moves.
        assert!((metrics.pnl.var_95 - 5.95).abs() < 1e-9);
        assert!((metrics.pnl.es_95 - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_es_is_deeper_than_var() {
        let terminals: Vec<f64> = (1..=500).map(|i| 60.0 + f64::from(i) * 0.2).collect();
        let paths = matrix_with_terminals(100.0, &terminals);

        let metrics = analyze(&paths, 100.0, 200.0).unwrap();

        assert!(metrics.returns.es_95 <= metrics.returns.var_95);
        assert!(metrics.pnl.es_95 <= metrics.pnl.var_95);
    }

    #[test]
    fn test_single_path_es_equals_the_single_value() {
        let paths = matrix_with_terminals(100.0, &[93.0]);
        let metrics = analyze(&paths, 100.0, 10.0).unwrap();

        assert!((metrics.returns.var_95 - -0.07).abs() < 1e-12);
        assert!((metrics.returns.es_95 - -0.07).abs() < 1e-12);
        assert!((metrics.pnl.var_95 - -70.0).abs() < 1e-9);
        assert!((metrics.pnl.es_95 - -70.0).abs() < 1e-9);
        assert_eq!(metrics.returns.std_dev, 0.0);
    }

    #[test]
    fn test_short_position_flips_the_pnl_tail() {
        let terminals: Vec<f64> = (90..=110).map(f64::from).collect();
        let paths = matrix_with_terminals(100.0, &terminals);

        let long = analyze(&paths, 100.0, 100.0).unwrap();
        let short = analyze(&paths, 100.0, -100.0).unwrap();

        // A short loses where the long gains: its tail sits at high prices.
        assert!(long.pnl.var_95 < 0.0);
        assert!(short.pnl.var_95 < 0.0);
        assert!((long.pnl.mean + short.pnl.mean).abs() < 1e-9);
        assert!(short.pnl.es_95 <= short.pnl.var_95);
    }

    #[test]
    fn test_fractional_position_scales_pnl() {
        let paths = matrix_with_terminals(100.0, &[110.0]);
        let metrics = analyze(&paths, 100.0, 0.5).unwrap();
        assert!((metrics.pnl.mean - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_distribution_is_degenerate() {
        let paths = PathMatrix::from_raw(0, 2, vec![]);
        let err = analyze(&paths, 100.0, 1.0).unwrap_err();
        assert!(matches!(err, SimulationError::DegenerateTail));
    }
}
