//! Market data access for the risk simulator.
//!
//! Providers yield cleaned chronological price series for a symbol and
//! lookback window. Network plumbing and retry policies live outside this
//! crate; these providers read local sources only, so repeated calls over
//! the same data are fully reproducible.

/// Provider-side error type.
pub mod error;
/// Price history providers.
pub mod providers;

pub use error::ProviderError;
pub use providers::MarketDataProvider;
