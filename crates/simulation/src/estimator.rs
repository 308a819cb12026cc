//! Drift and volatility estimation from historical returns.

use eqsim_domain::entities::price_series::PriceSeries;
use eqsim_domain::error::SimulationError;
use eqsim_domain::math::stats;
use eqsim_domain::value_objects::estimate::{DriftVolEstimate, TRADING_DAYS_PER_YEAR};
use tracing::debug;

/// Estimates daily and annualized drift/volatility from a cleaned series.
///
/// Simple daily returns `p_t / p_{t-1} - 1` are computed over consecutive
/// points. The dispersion uses the sample convention (ddof = 1); a single
/// return yields zero dispersion. The annual drift compounds the mean
/// daily return over 252 trading days instead of scaling it linearly,
/// which changes every downstream statistic and is kept deliberately.
///
/// # Errors
/// Returns [`SimulationError::InsufficientData`] when fewer than two valid
/// prices are available.
pub fn estimate_parameters(series: &PriceSeries) -> Result<DriftVolEstimate, SimulationError> {
    if series.len() < 2 {
        return Err(SimulationError::InsufficientData {
            valid_points: series.len(),
        });
    }

    let closes = series.closes();
    let daily_returns: Vec<f64> = closes.windows(2).map(|w| w[1] / w[0] - 1.0).collect();

    let mu_daily = stats::mean(&daily_returns);
    let sigma_daily = stats::std_dev(&daily_returns, 1);

    let mu_annual = (1.0 + mu_daily).powf(TRADING_DAYS_PER_YEAR) - 1.0;
    let sigma_annual = sigma_daily * TRADING_DAYS_PER_YEAR.sqrt();

    let spot_price = closes[closes.len() - 1];
    debug!(
        spot_price,
        mu_annual, sigma_annual, "estimated drift and volatility"
    );

    Ok(DriftVolEstimate {
        spot_price,
        mu_daily,
        sigma_daily,
        mu_annual,
        sigma_annual,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use eqsim_domain::entities::price_series::PricePoint;

    fn series_from_closes(closes: &[f64]) -> PriceSeries {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        PriceSeries::from_points(
            closes
                .iter()
                .enumerate()
                .map(|(i, c)| PricePoint::new(start + chrono::Days::new(i as u64), *c))
                .collect(),
        )
    }

    #[test]
    fn test_estimate_known_values() {
        // Returns are 0.10 and -0.10: zero mean, sample std sqrt(0.02).
        let series = series_from_closes(&[100.0, 110.0, 99.0]);
        let estimate = estimate_parameters(&series).unwrap();

        assert_eq!(estimate.spot_price, 99.0);
        assert!(estimate.mu_daily.abs() < 1e-12);
        assert!((estimate.sigma_daily - 0.02_f64.sqrt()).abs() < 1e-12);
        assert!(estimate.mu_annual.abs() < 1e-9);
        assert!((estimate.sigma_annual - 0.02_f64.sqrt() * 252.0_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_annualization_compounds_daily_drift() {
        // Constant +10% daily returns: mu_daily = 0.1, sigma_daily = 0.
        let series = series_from_closes(&[100.0, 110.0, 121.0]);
        let estimate = estimate_parameters(&series).unwrap();

        assert!((estimate.mu_daily - 0.1).abs() < 1e-12);
        assert_eq!(estimate.sigma_daily, 0.0);
        let expected = 1.1_f64.powf(252.0) - 1.0;
        assert!((estimate.mu_annual - expected).abs() / expected < 1e-12);
        assert_eq!(estimate.sigma_annual, 0.0);
    }

    #[test]
    fn test_single_return_has_zero_dispersion() {
        let series = series_from_closes(&[100.0, 105.0]);
        let estimate = estimate_parameters(&series).unwrap();

        assert!((estimate.mu_daily - 0.05).abs() < 1e-12);
        assert_eq!(estimate.sigma_daily, 0.0);
        assert_eq!(estimate.sigma_annual, 0.0);
    }

    #[test]
    fn test_insufficient_data() {
        let single = series_from_closes(&[100.0]);
        let err = estimate_parameters(&single).unwrap_err();
        assert!(matches!(
            err,
            SimulationError::InsufficientData { valid_points: 1 }
        ));

        let empty = PriceSeries::default();
        let err = estimate_parameters(&empty).unwrap_err();
        assert!(matches!(
            err,
            SimulationError::InsufficientData { valid_points: 0 }
        ));
    }
}
