//! Phrases followed by a money-like amount.

use super::LineMatcher;
use super::patterns::MONEY;
use crate::models::signals::DataPoint;

/// Matches a short phrase, whitespace, then an amount such as `$1,200`,
/// `40k` or `2.5 M`. Label and value are trimmed but otherwise verbatim.
pub struct MoneyMatcher;

impl LineMatcher for MoneyMatcher {
    fn name(&self) -> &'static str {
        "money"
    }

    fn try_match(&self, line: &str) -> Option<DataPoint> {
        let caps = MONEY.captures(line)?;
        Some(DataPoint::new(caps[1].trim(), caps[2].trim()))
    }
}
