//! Quantity parsing
//!
//! Turns free-form quantity strings from recipes ("2", "2,5", "1/2", "200g")
//! into numbers.

use std::sync::LazyLock;

use regex::Regex;

/// Exactly "<int>/<int>"
static FRACTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)/(\d+)$").expect("fraction pattern is a valid regex"));

/// Longest numeric prefix, the way a lenient float parse reads "200g" as 200
static LEADING_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?")
        .expect("number pattern is a valid regex")
});

/// Parse a quantity string into a number.
///
/// Handles:
/// - Integers: "8" → 8.0
/// - Decimals with dot or comma: "2.5", "2,5" → 2.5
/// - Simple fractions: "1/2" → 0.5
/// - Single vulgar fraction characters: "½" → 0.5
/// - Numbers followed by text: "200g" → 200.0
///
/// Returns None for blank or non-numeric input, fractions with a zero
/// denominator, and anything that overflows to infinity.
pub fn parse_quantity(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let normalized = trimmed.replace(',', ".");

    if let Some(caps) = FRACTION.captures(&normalized) {
        let numerator: f64 = caps[1].parse().ok()?;
        let denominator: f64 = caps[2].parse().ok()?;
        if denominator == 0.0 {
            tracing::debug!("Rejecting fraction with zero denominator: '{}'", raw);
            return None;
        }
        return Some(numerator / denominator).filter(|v| v.is_finite());
    }

    if let Some(value) = vulgar_fraction(&normalized) {
        return Some(value);
    }

    let number = LEADING_NUMBER.find(&normalized)?;
    number.as_str().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Value of a lone Unicode fraction character
fn vulgar_fraction(s: &str) -> Option<f64> {
    let value = match s {
        "½" => 0.5,
        "⅓" => 1.0 / 3.0,
        "⅔" => 2.0 / 3.0,
        "¼" => 0.25,
        "¾" => 0.75,
        "⅛" => 0.125,
        _ => return None,
    };
    Some(value)
}
