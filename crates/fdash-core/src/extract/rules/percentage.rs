//! Phrases followed by a percentage.

use super::LineMatcher;
use super::patterns::PERCENTAGE;
use crate::models::signals::DataPoint;

/// Matches a short descriptive phrase immediately followed by `N%` or `N.N%`.
///
/// The phrase may appear anywhere in the line; the leftmost match is used.
pub struct PercentageMatcher;

impl LineMatcher for PercentageMatcher {
    fn name(&self) -> &'static str {
        "percentage"
    }

    fn try_match(&self, line: &str) -> Option<DataPoint> {
        let caps = PERCENTAGE.captures(line)?;
        Some(DataPoint::new(caps[1].trim(), format!("{}%", &caps[2])))
    }
}
