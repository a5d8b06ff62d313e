//! Plain-text report export.

use chrono::{DateTime, NaiveDate, Utc};

use crate::models::payload::AnalysisResponse;

/// Render the downloadable plain-text report.
pub fn render_report_text(response: &AnalysisResponse, generated: NaiveDate) -> String {
    let report = &response.report;
    let probability = match report.success_probability {
        Some(p) if p.is_finite() => p.to_string(),
        _ => String::new(),
    };

    let mut text = format!(
        "STARTUP FEASIBILITY REPORT\n\
         Generated: {}\n\
         \n\
         IDEA: {}\n\
         \n\
         SUCCESS PROBABILITY: {}%\n\
         BEST LOCATION: {}\n",
        generated.format("%-m/%-d/%Y"),
        response.idea,
        probability,
        report.best_location,
    );

    let sections = [
        ("MARKET ANALYSIS", &report.market_analysis),
        ("TARGET AUDIENCE", &report.target_audience),
        ("REVENUE MODEL", &report.revenue_model),
        ("COMPETITION ANALYSIS", &report.competition_analysis),
        ("COST STRUCTURE", &report.cost_structure),
        ("GO-TO-MARKET STRATEGY", &report.go_to_market),
    ];
    for (title, body) in sections {
        text.push_str(&format!("\n=== {} ===\n{}\n", title, body));
    }

    if let Some(critique) = response.critique.as_deref().filter(|c| !c.is_empty()) {
        text.push_str(&format!("\n=== EXPERT CRITIQUE ===\n{}", critique));
    }

    text.trim().to_string()
}

/// File name for a report exported at `at`.
pub fn report_file_name(at: DateTime<Utc>) -> String {
    format!("feasibility-report-{}.txt", at.timestamp_millis())
}
