//! Error taxonomy for the simulation pipeline.

use thiserror::Error;

/// Failures surfaced by the simulation core.
///
/// Every variant is unrecoverable within the core: the failure is reported
/// to the caller verbatim, never replaced with a default.
#[derive(Debug, Error)]
pub enum SimulationError {
    /// No usable price history for the requested symbol.
    #[error("no price data found for {symbol}; check if it is valid or delisted")]
    DataUnavailable {
        /// Symbol the lookup was for.
        symbol: String,
    },

    /// Too few valid prices remain after cleaning to compute returns.
    #[error("insufficient price history: {valid_points} valid point(s), need at least 2")]
    InsufficientData {
        /// Valid points left after cleaning.
        valid_points: usize,
    },

    /// A simulation parameter is non-finite or outside its domain.
    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// The VaR tail set is empty, so expected shortfall is undefined.
    #[error("expected shortfall is undefined for an empty distribution")]
    DegenerateTail,
}
