//! Label/value data point extraction.

use std::collections::HashSet;

use tracing::debug;

use super::bullets::clean_line;
use super::rules::MatcherChain;
use crate::models::signals::DataPoint;

/// Runs a matcher chain over every line of a text block.
pub struct DataPointExtractor {
    chain: MatcherChain,
}

impl DataPointExtractor {
    /// Create an extractor with the default key/value, percentage, money chain.
    pub fn new() -> Self {
        Self {
            chain: MatcherChain::default(),
        }
    }

    /// Use a custom matcher chain.
    pub fn with_chain(mut self, chain: MatcherChain) -> Self {
        self.chain = chain;
        self
    }

    /// Extract data points, deduplicated case-insensitively by label and
    /// value, in order of first occurrence. No cap is applied.
    pub fn extract(&self, text: &str) -> Vec<DataPoint> {
        let mut seen = HashSet::new();
        let mut points = Vec::new();
        let mut duplicates = 0usize;

        for line in text.split('\n').map(str::trim).filter(|l| !l.is_empty()) {
            let clean = clean_line(line);
            if clean.is_empty() {
                continue;
            }

            let Some(point) = self.chain.first_match(clean) else {
                continue;
            };

            if seen.insert(point.dedup_key()) {
                points.push(point);
            } else {
                duplicates += 1;
            }
        }

        debug!(points = points.len(), duplicates, "extracted data points");
        points
    }
}

impl Default for DataPointExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract data points with the default matcher chain.
pub fn extract_data_points(text: &str) -> Vec<DataPoint> {
    DataPointExtractor::new().extract(text)
}
