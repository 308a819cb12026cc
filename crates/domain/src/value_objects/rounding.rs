//! Fixed-precision rounding at the serialization boundary.
//!
//! Internal computation always runs at full `f64` precision; only the
//! serialized report is rounded. Returns and ratios carry 4 decimal
//! places, prices and PnL amounts 2.

use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use serde::Serializer;

/// Serializes a return- or ratio-valued field rounded to 4 decimal places.
///
/// # Errors
/// Propagates serializer failures.
pub fn round_dp4<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serialize_rounded(*value, 4, serializer)
}

/// Serializes a price- or PnL-valued field rounded to 2 decimal places.
///
/// # Errors
/// Propagates serializer failures.
pub fn round_dp2<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serialize_rounded(*value, 2, serializer)
}

fn serialize_rounded<S: Serializer>(
    value: f64,
    dp: u32,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    // Non-finite and out-of-range values have no Decimal form; pass them
    // through unrounded.
    let rounded = Decimal::from_f64(value)
        .map(|d| d.round_dp(dp).to_f64().unwrap_or(value))
        .unwrap_or(value);
    serializer.serialize_f64(rounded)
}
