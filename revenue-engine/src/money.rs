//! Money conversion at the float boundary
//!
//! Order records arrive with `f64` monetary fields; every calculation inside
//! the engine runs on `Decimal` so the telescoping invariants hold exactly.
//! Conversion back to floats happens in serde, not here.

use rust_decimal::prelude::*;

/// Rounding for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Convert an inbound f64 monetary field to Decimal.
///
/// Missing fields already default to 0.0 upstream. NaN/Infinity degrade to
/// zero here with an error log instead of poisoning a batch report.
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_else(|| {
        tracing::error!(value = ?value, "Non-finite monetary field, defaulting to zero");
        Decimal::ZERO
    })
}

/// Round a computed amount to monetary precision.
#[inline]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}
