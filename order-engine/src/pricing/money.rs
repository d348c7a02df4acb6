//! Money calculation utilities using rust_decimal for precision
//!
//! All calculations are done using `Decimal` internally, then converted to
//! `f64` for the records handed to order storage.

use rust_decimal::prelude::*;

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Smallest unit price accepted by order storage (0.01)
pub const MIN_STORED_PRICE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Convert f64 to Decimal for calculation
///
/// NaN and infinities become zero.
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert a stored price to Decimal, clamped to be non-negative
#[inline]
pub fn non_negative(value: f64) -> Decimal {
    to_decimal(value).max(Decimal::ZERO)
}

/// Round to 2 decimal places, half away from zero
#[inline]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Convert Decimal back to f64 for storage, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    round_money(value).to_f64().unwrap_or_default()
}

/// Convert integer minor units (cents) to major units
#[inline]
pub fn from_minor_units(cents: i64) -> Decimal {
    Decimal::new(cents, DECIMAL_PLACES)
}

/// Unit price as written to order storage (never below 0.01)
#[inline]
pub fn stored_unit_price(unit_price: Decimal) -> f64 {
    to_f64(unit_price.max(MIN_STORED_PRICE))
}
