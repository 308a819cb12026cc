//! Price history providers.

use async_trait::async_trait;
use eqsim_domain::entities::price_series::PriceSeries;

use crate::error::ProviderError;

pub mod csv_file;
pub mod in_memory;

pub use csv_file::CsvDirectoryProvider;
pub use in_memory::InMemoryProvider;

/// Source of historical closing prices.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Returns the cleaned price series for `symbol`, restricted to the
    /// last `lookback_days` calendar days of available history.
    ///
    /// The window is anchored at the most recent observation in the
    /// source, not at the wall clock.
    ///
    /// # Errors
    /// Returns [`ProviderError::DataUnavailable`] when the symbol has no
    /// usable data in the window.
    async fn price_history(
        &self,
        symbol: &str,
        lookback_days: u32,
    ) -> Result<PriceSeries, ProviderError>;
}
