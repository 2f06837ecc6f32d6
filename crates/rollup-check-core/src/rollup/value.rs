//! Lenient parsing of declared line-item values.
//!
//! Statement exports carry amounts as JSON numbers, numeric strings, or
//! garbage ("N/A", "", null). Anything that cannot be read as a number
//! counts as zero rather than rejecting the document.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde_json::Value;
use std::str::FromStr;

use crate::types::Money;

/// Decimal places every parsed amount is rounded to.
const CENT_DP: u32 = 2;

/// Parse a declared value, returning `None` when it is not numeric.
///
/// Numbers and numeric strings (plain or scientific notation, surrounding
/// whitespace ignored) are rounded half-to-even to the nearest cent.
/// Booleans count as 1 and 0.
pub fn try_parse_value(value: &Value) -> Option<Money> {
    let raw = match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Some(Decimal::from(i))
            } else if let Some(u) = n.as_u64() {
                Some(Decimal::from(u))
            } else {
                parse_numeric_str(&n.to_string())
            }
        }
        Value::String(s) => parse_numeric_str(s.trim()),
        Value::Bool(b) => Some(if *b { Decimal::ONE } else { Decimal::ZERO }),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }?;
    Some(raw.round_dp_with_strategy(CENT_DP, RoundingStrategy::MidpointNearestEven))
}

/// Parse a declared value, falling back to zero when it is not numeric.
pub fn parse_value(value: &Value) -> Money {
    try_parse_value(value).unwrap_or(Decimal::ZERO)
}

fn parse_numeric_str(s: &str) -> Option<Decimal> {
    if s.is_empty() {
        return None;
    }
    if s.contains(['e', 'E']) {
        // out-of-range exponents yield None
        s.parse::<f64>()
            .ok()
            .filter(|f| f.is_finite())
            .and_then(Decimal::from_f64)
    } else {
        Decimal::from_str(s).ok()
    }
}
