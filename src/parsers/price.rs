use crate::models::ShippingCost;
use serde_json::Value;

/// Parse a USD price from text, tolerating a leading currency symbol or
/// "USD" prefix and thousands separators.
pub fn parse_price(text: &str) -> Option<f64> {
    let cleaned = text
        .replace('$', "")
        .replace("USD", "")
        .replace(',', "")
        .trim()
        .to_string();

    cleaned
        .parse::<f64>()
        .ok()
        .filter(|p| p.is_finite() && *p >= 0.0)
}

/// Repair the upstream bug where a price arrives as a doubled concatenation
/// ("6.496.49"). A string longer than 6 characters containing two decimal
/// points is truncated to its first half before parsing.
pub fn repair_doubled_price(text: &str) -> &str {
    let trimmed = text.trim();
    if trimmed.len() > 6 && trimmed.matches('.').count() == 2 {
        trimmed.get(..trimmed.len() / 2).unwrap_or(trimmed)
    } else {
        trimmed
    }
}

pub fn dollars_to_cents(dollars: f64) -> i64 {
    (dollars * 100.0).round() as i64
}

/// Parse a price field that arrives as either a JSON number or a string.
pub fn parse_price_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|p| p.is_finite() && *p >= 0.0),
        Value::String(s) => parse_price(s),
        _ => None,
    }
}

/// Like [`parse_price_value`] but applies the doubled-price repair to string
/// values first. Used for the retail original-price field, the one path the
/// corrupted concatenations have been seen on.
pub fn parse_repaired_price_value(value: &Value) -> Option<f64> {
    match value {
        Value::String(s) => parse_price(repair_doubled_price(s)),
        other => parse_price_value(other),
    }
}

/// Normalize a shipping cost field. Zero in any of its spellings ("0",
/// "0.0", "0.00", numeric 0) means free shipping; other parseable values
/// pass through as a paid amount.
pub fn parse_shipping_cost(value: &Value) -> Option<ShippingCost> {
    let amount = parse_price_value(value)?;
    if amount == 0.0 {
        Some(ShippingCost::Free)
    } else {
        Some(ShippingCost::Paid(amount))
    }
}
