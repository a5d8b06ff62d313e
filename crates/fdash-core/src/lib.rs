//! Core library for the startup feasibility dashboard.
//!
//! This crate provides:
//! - Line-oriented pattern matchers (key/value, percentage, money, risk keywords)
//! - Signal extraction from narrative report sections (bullets, data points,
//!   risk lines, cost breakdown, timeline, revenue vs cost)
//! - Metric normalization (money scalars, percentages, token estimates)
//! - Dashboard assembly and plain-text report export for analysis payloads

pub mod error;
pub mod models;
pub mod extract;
pub mod normalize;
pub mod dashboard;
pub mod session;

pub use error::{FdashError, Result};
pub use models::payload::{AnalysisRequest, AnalysisResponse, FeasibilityReport};
pub use models::signals::{CostSlice, DataPoint, RevenueCostPoint, TimelinePhase};
pub use extract::{
    build_cost_breakdown, build_revenue_cost_data, build_timeline, extract_bullets,
    extract_data_points, extract_risk_lines,
};
pub use normalize::{estimate_tokens_from_text, extract_first_money_number, to_percent};
pub use dashboard::{AssemblyResult, Dashboard, DashboardAssembler};
pub use session::AnalysisSession;
