//! Common regex patterns for report text heuristics.
//!
//! Word and digit classes are spelled out as ASCII ranges so that matching
//! does not depend on Unicode word tables.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Leading bullet glyphs, list numbering and indentation
    pub static ref BULLET_MARKER: Regex = Regex::new(
        r"^[-*0-9.\s]+"
    ).unwrap();

    // "Label: value" with a 2-60 character label
    pub static ref KEY_VALUE: Regex = Regex::new(
        r"^([^:]{2,60}):\s*(.+)$"
    ).unwrap();

    // Short phrase followed by a percentage
    pub static ref PERCENTAGE: Regex = Regex::new(
        r"([A-Za-z0-9_\s]{3,50})\b([0-9]+(?:\.[0-9]+)?)%"
    ).unwrap();

    // Short phrase followed by an amount with optional $ and k/m/b suffix
    pub static ref MONEY: Regex = Regex::new(
        r"([A-Za-z0-9_\s]{3,50})\s(\$?[0-9,.]+\s?[kKmMbB]?)"
    ).unwrap();

    // Risk vocabulary
    pub static ref RISK_TERMS: Regex = Regex::new(
        r"(?i)(risk|threat|challenge|barrier|competition|cost|burn|uncertain|constraint|assumption)"
    ).unwrap();

    // Money scalars, tried in this order
    pub static ref MONEY_THOUSANDS: Regex = Regex::new(
        r"(?i)\$?([0-9,.]+)\s?k"
    ).unwrap();

    pub static ref MONEY_MILLIONS: Regex = Regex::new(
        r"(?i)\$?([0-9,.]+)\s?m"
    ).unwrap();

    pub static ref MONEY_PLAIN: Regex = Regex::new(
        r"\$([0-9,.]+)"
    ).unwrap();

    // Cost category keywords, matched against lower-cased text
    pub static ref OPERATIONS_TERMS: Regex = Regex::new(
        r"(infra|hosting|ops|operations|server|cloud)"
    ).unwrap();

    pub static ref TEAM_TERMS: Regex = Regex::new(
        r"(salary|team|engineering|staff|hiring|payroll)"
    ).unwrap();

    pub static ref MARKETING_TERMS: Regex = Regex::new(
        r"(marketing|acquisition|ads|growth|sales)"
    ).unwrap();

    pub static ref OTHER_TERMS: Regex = Regex::new(
        r"(legal|admin|compliance|misc)"
    ).unwrap();
}
