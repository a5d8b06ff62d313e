//! "Label: value" lines.

use super::LineMatcher;
use super::patterns::KEY_VALUE;
use crate::models::signals::DataPoint;

/// Matches lines of the form `Label: value`.
///
/// The label is kept exactly as written before the colon (2-60 characters,
/// no colon). The value is everything after the colon and any whitespace.
pub struct KeyValueMatcher;

impl LineMatcher for KeyValueMatcher {
    fn name(&self) -> &'static str {
        "key_value"
    }

    fn try_match(&self, line: &str) -> Option<DataPoint> {
        let caps = KEY_VALUE.captures(line)?;
        Some(DataPoint::new(&caps[1], &caps[2]))
    }
}
