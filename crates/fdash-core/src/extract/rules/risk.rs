//! Risk vocabulary detection.

use super::patterns::RISK_TERMS;

/// Whether a line mentions risk, threats, costs or similar constraints.
///
/// Case-insensitive substring match, so "costly" and "competitions" count.
pub fn is_risk_line(line: &str) -> bool {
    RISK_TERMS.is_match(line)
}
