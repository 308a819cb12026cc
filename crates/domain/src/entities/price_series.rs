//! Historical closing-price series for a single instrument.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// A single closing-price observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Observation date.
    pub date: NaiveDate,
    /// Closing price.
    pub close: f64,
}

impl PricePoint {
    /// Creates a new price point.
    #[must_use]
    pub fn new(date: NaiveDate, close: f64) -> Self {
        Self { date, close }
    }
}

/// Chronological series of closing prices.
///
/// Construction cleans the input: points with non-finite or non-positive
/// closes are dropped and the remainder is sorted by date. The estimator
/// requires the cleaned series to be non-empty; that is checked by the
/// pipeline, not by this type.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    /// Builds a cleaned, date-sorted series from raw points.
    #[must_use]
    pub fn from_points(mut points: Vec<PricePoint>) -> Self {
        points.retain(|p| p.close.is_finite() && p.close > 0.0);
        points.sort_by_key(|p| p.date);
        Self { points }
    }

    /// The cleaned observations in chronological order.
    #[must_use]
    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    /// Number of valid observations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the series holds no valid observations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Closing prices in chronological order.
    #[must_use]
    pub fn closes(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.close).collect()
    }

    /// Last observed price, if any.
    #[must_use]
    pub fn spot(&self) -> Option<f64> {
        self.points.last().map(|p| p.close)
    }

    /// Date of the most recent observation, if any.
    #[must_use]
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.points.last().map(|p| p.date)
    }

    /// Restricts the series to the last `days` calendar days of history.
    ///
    /// The window is anchored at the most recent observation rather than
    /// the wall clock, so the same input always yields the same window.
    #[must_use]
    pub fn window(&self, days: u32) -> PriceSeries {
        let Some(last) = self.last_date() else {
            return PriceSeries::default();
        };
        let cutoff = last
            .checked_sub_days(Days::new(u64::from(days)))
            .unwrap_or(NaiveDate::MIN);
        Self {
            points: self
                .points
                .iter()
                .copied()
                .filter(|p| p.date >= cutoff)
                .collect(),
        }
    }
}
