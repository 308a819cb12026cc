//! Provider-side failures when loading price history.

use thiserror::Error;

/// Errors raised by market data providers.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The provider has no usable data for the symbol.
    #[error("no price data found for {symbol}; check the symbol or data source")]
    DataUnavailable {
        /// Symbol the lookup was for.
        symbol: String,
    },

    /// The underlying source could not be read.
    #[error("failed to read price data for {symbol}")]
    Io {
        /// Symbol the lookup was for.
        symbol: String,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}
