//! Signal extraction from narrative report sections.
//!
//! Every function here is pure and infallible: empty or unmatched text yields
//! empty collections or fixed defaults, never an error.

mod bullets;
mod builders;
mod data_points;
pub mod rules;

pub use bullets::{clean_line, extract_bullets, extract_risk_lines, MAX_BULLETS, MAX_RISK_LINES, MIN_BULLET_CHARS};
pub use builders::{
    build_cost_breakdown, build_revenue_cost_data, build_timeline, COST_FALLBACK,
    REVENUE_FALLBACK, TIMELINE_PHASES, TIMELINE_PLACEHOLDER,
};
pub use data_points::{extract_data_points, DataPointExtractor};
