//! Numeric coercion and rounding conventions shared across the crate.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer};

/// Parse a decimal out of free-form input, degrading to zero instead of
/// failing. Backend payloads and form fields carry money as strings; an
/// empty, missing, or malformed value means "no amount" rather than an
/// error.
pub fn decimal_or_zero(raw: &str) -> Decimal {
    let trimmed = raw.trim();
    Decimal::from_str_exact(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .unwrap_or(Decimal::ZERO)
}

/// Round to two decimal places, ties away from zero.
///
/// Line-level tax amounts are rounded with this at the point of computation;
/// everything else stays unrounded until presentation.
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Deserialize a money field leniently: accepts a JSON number or numeric
/// string, and maps null or garbage to zero.
pub fn lenient_decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(coerce_value(&value))
}

/// Deserialize an optional money field: null or absent stays `None`, any
/// present value goes through the same lenient coercion.
pub fn lenient_decimal_opt<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    Ok(Some(coerce_value(&value)))
}

fn coerce_value(value: &serde_json::Value) -> Decimal {
    match value {
        serde_json::Value::Number(n) => decimal_or_zero(&n.to_string()),
        serde_json::Value::String(s) => decimal_or_zero(s),
        _ => Decimal::ZERO,
    }
}
