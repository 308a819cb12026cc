//! In-memory provider for tests and demos.

use std::collections::HashMap;

use async_trait::async_trait;
use eqsim_domain::entities::price_series::{PricePoint, PriceSeries};

use crate::error::ProviderError;
use crate::providers::MarketDataProvider;

/// Provider serving fixed series keyed by symbol.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProvider {
    series: HashMap<String, PriceSeries>,
}

impl InMemoryProvider {
    /// Creates an empty provider.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `points` under `symbol`, replacing any existing entry.
    pub fn insert(&mut self, symbol: impl Into<String>, points: Vec<PricePoint>) {
        self.series.insert(
            symbol.into().trim().to_uppercase(),
            PriceSeries::from_points(points),
        );
    }
}

#[async_trait]
impl MarketDataProvider for InMemoryProvider {
    async fn price_history(
        &self,
        symbol: &str,
        lookback_days: u32,
    ) -> Result<PriceSeries, ProviderError> {
        let key = symbol.trim().to_uppercase();
        let series = self
            .series
            .get(&key)
            .map(|s| s.window(lookback_days))
            .unwrap_or_default();
        if series.is_empty() {
            return Err(ProviderError::DataUnavailable { symbol: key });
        }
        Ok(series)
    }
}
