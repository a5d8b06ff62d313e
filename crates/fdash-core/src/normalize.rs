//! Metric normalization.
//!
//! Money amounts are put on a single "thousands of currency units" scale,
//! confidence values on an integer 0-100 scale.

use crate::extract::rules::{MONEY_MILLIONS, MONEY_PLAIN, MONEY_THOUSANDS};

/// Read the first money-like amount in `text`, in thousands.
///
/// Patterns are tried in order and the first one that matches decides the
/// result: `<n>k` is taken as thousands, `<n>m` is multiplied by 1000 and a
/// plain `$<n>` is divided by 1000. Returns `None` when nothing matches or
/// the matched digits do not form a number (for example `1.2.3k`).
pub fn extract_first_money_number(text: &str) -> Option<f64> {
    if text.is_empty() {
        return None;
    }

    if let Some(caps) = MONEY_THOUSANDS.captures(text) {
        return parse_amount(&caps[1]);
    }

    if let Some(caps) = MONEY_MILLIONS.captures(text) {
        return parse_amount(&caps[1]).map(|value| value * 1000.0);
    }

    if let Some(caps) = MONEY_PLAIN.captures(text) {
        return parse_amount(&caps[1]).map(|value| value / 1000.0);
    }

    None
}

/// Parse digits with thousands separators. A bare separator reads as zero.
fn parse_amount(raw: &str) -> Option<f64> {
    let cleaned = raw.replace(',', "");
    if cleaned.is_empty() {
        return Some(0.0);
    }
    cleaned.parse::<f64>().ok()
}

/// Convert a fraction or a percentage to an integer percent in 0..=100.
///
/// Values up to 1 are read as fractions and scaled by 100; larger values are
/// taken as percentages already. Missing and NaN values give 0.
pub fn to_percent(value: Option<f64>) -> u32 {
    match value {
        Some(v) if !v.is_nan() => {
            let scaled = if v <= 1.0 { v * 100.0 } else { v };
            scaled.round().clamp(0.0, 100.0) as u32
        }
        _ => 0,
    }
}

/// Rough token count for text when no authoritative count is available.
pub fn estimate_tokens_from_text(text: &str) -> u64 {
    (text.chars().count() as f64 / 4.0).round() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_plain_dollars() {
        assert_eq!(extract_first_money_number("$500"), Some(0.5));
        assert_eq!(extract_first_money_number("Budget of $250,000 total"), Some(250.0));
    }

    #[test]
    fn test_money_thousands() {
        assert_eq!(extract_first_money_number("120k"), Some(120.0));
        assert_eq!(extract_first_money_number("about $1,500 K per year"), Some(1500.0));
    }

    #[test]
    fn test_money_millions() {
        assert_eq!(extract_first_money_number("2m"), Some(2000.0));
        assert_eq!(extract_first_money_number("Raise $3M seed"), Some(3000.0));
    }

    #[test]
    fn test_money_thousands_take_precedence() {
        // The k pattern is tried first even when an m amount appears earlier
        assert_eq!(extract_first_money_number("$2M market, $40k budget"), Some(40.0));
    }

    #[test]
    fn test_money_none() {
        assert_eq!(extract_first_money_number("no numbers"), None);
        assert_eq!(extract_first_money_number(""), None);
    }

    #[test]
    fn test_money_malformed_number() {
        assert_eq!(extract_first_money_number("1.2.3k"), None);
    }

    #[test]
    fn test_to_percent() {
        assert_eq!(to_percent(Some(0.85)), 85);
        assert_eq!(to_percent(Some(85.0)), 85);
        assert_eq!(to_percent(Some(1.0)), 100);
        assert_eq!(to_percent(Some(72.6)), 73);
        assert_eq!(to_percent(None), 0);
        assert_eq!(to_percent(Some(f64::NAN)), 0);
    }

    #[test]
    fn test_to_percent_clamps() {
        assert_eq!(to_percent(Some(250.0)), 100);
        assert_eq!(to_percent(Some(-0.4)), 0);
    }

    #[test]
    fn test_estimate_tokens() {
        assert_eq!(estimate_tokens_from_text(""), 0);
        assert_eq!(estimate_tokens_from_text("abcdefgh"), 2);
        assert_eq!(estimate_tokens_from_text("abcdefghij"), 3);
    }
}
