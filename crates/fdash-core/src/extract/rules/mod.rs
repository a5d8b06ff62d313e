//! Line-oriented matchers for report text.
//!
//! Each matcher maps one already-split line to at most one [`DataPoint`].
//! A [`MatcherChain`] evaluates matchers in order and keeps the first hit.

pub mod key_value;
pub mod percentage;
pub mod money;
pub mod risk;
pub mod patterns;

pub use key_value::KeyValueMatcher;
pub use percentage::PercentageMatcher;
pub use money::MoneyMatcher;
pub use risk::is_risk_line;
pub use patterns::*;

use crate::models::signals::DataPoint;

/// Trait for single-line data point matchers.
pub trait LineMatcher: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Try to derive a data point from one line.
    fn try_match(&self, line: &str) -> Option<DataPoint>;
}

/// Ordered list of matchers; the first one that matches wins.
pub struct MatcherChain {
    matchers: Vec<Box<dyn LineMatcher>>,
}

impl MatcherChain {
    /// Create an empty chain.
    pub fn empty() -> Self {
        Self {
            matchers: Vec::new(),
        }
    }

    /// Append a matcher with lower precedence than those already present.
    pub fn with(mut self, matcher: impl LineMatcher + 'static) -> Self {
        self.matchers.push(Box::new(matcher));
        self
    }

    /// Evaluate matchers in order against a line.
    pub fn first_match(&self, line: &str) -> Option<DataPoint> {
        self.matchers.iter().find_map(|m| {
            let hit = m.try_match(line);
            if hit.is_some() {
                tracing::trace!(matcher = m.name(), line, "line matched");
            }
            hit
        })
    }

    /// Names of the matchers in precedence order.
    pub fn names(&self) -> Vec<&'static str> {
        self.matchers.iter().map(|m| m.name()).collect()
    }
}

impl Default for MatcherChain {
    /// Key/value, then percentage, then money.
    fn default() -> Self {
        Self::empty()
            .with(KeyValueMatcher)
            .with(PercentageMatcher)
            .with(MoneyMatcher)
    }
}
