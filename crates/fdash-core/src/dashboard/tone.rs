//! Tone and rating rules for headline metrics.

use super::model::{ProbabilityBand, Tone};
use crate::models::payload::AnalysisResponse;

/// Label used when the payload carries no hallucination rating.
pub const DEFAULT_RISK_LABEL: &str = "MEDIUM";

/// Confidence at or above this percent is shown as healthy.
pub const CONFIDENT_PERCENT: u32 = 70;

/// Rate a success probability (0-100).
pub fn probability_band(probability: f64) -> ProbabilityBand {
    if probability >= 70.0 {
        ProbabilityBand::Good
    } else if probability >= 45.0 {
        ProbabilityBand::Medium
    } else {
        ProbabilityBand::High
    }
}

/// Tone for a risk label such as `LOW`, `MEDIUM` or `HIGH`.
pub fn risk_tone(label: &str) -> Tone {
    let normalized = label.to_uppercase();
    if normalized.contains("LOW") {
        Tone::Success
    } else if normalized.contains("MED") {
        Tone::Warning
    } else {
        Tone::Danger
    }
}

/// Tone for a confidence percentage.
pub fn confidence_tone(percent: u32) -> Tone {
    if percent >= CONFIDENT_PERCENT {
        Tone::Success
    } else {
        Tone::Warning
    }
}

/// Upper-cased hallucination risk label from the first field that has one.
pub fn hallucination_risk_label(response: &AnalysisResponse) -> String {
    let report = response.hallucination_report.as_ref();
    let metrics = response.evaluation_metrics.as_ref();

    [
        report.and_then(|r| r.risk_level()),
        report.and_then(|r| r.overall_risk()),
        metrics.and_then(|m| m.hallucination_risk.clone()),
    ]
    .into_iter()
    .flatten()
    .find(|label| !label.is_empty())
    .unwrap_or_else(|| DEFAULT_RISK_LABEL.to_string())
    .to_uppercase()
}
