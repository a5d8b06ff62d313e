//! Builds a [`Dashboard`] from an analysis response.

use std::time::Instant;

use tracing::{debug, info};

use super::format::{chart_bars, cost_segments, format_thousands, trim_idea};
use super::model::*;
use super::tone::{confidence_tone, hallucination_risk_label, probability_band, risk_tone};
use crate::extract::{
    build_cost_breakdown, build_revenue_cost_data, build_timeline, extract_bullets,
    extract_data_points, extract_risk_lines,
};
use crate::models::config::DisplayConfig;
use crate::models::payload::AnalysisResponse;
use crate::models::signals::DataPoint;
use crate::normalize::{estimate_tokens_from_text, to_percent};

const NO_CRITIQUE: &str = "No critique returned by backend.";
const NO_LOCATION: &str = "Not specified";
const NO_RAW_OUTPUT: &str = "No raw output available.";

/// Result of dashboard assembly.
#[derive(Debug, Clone)]
pub struct AssemblyResult {
    /// Assembled dashboard.
    pub dashboard: Dashboard,
    /// Assembly warnings, one per empty report section.
    pub warnings: Vec<String>,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Turns an analysis response into dashboard panels.
#[derive(Debug, Clone)]
pub struct DashboardAssembler {
    highlight_limit: usize,
    bullet_list_limit: usize,
    data_point_limit: usize,
    idea_title_limit: usize,
}

impl DashboardAssembler {
    /// Create an assembler with default display limits.
    pub fn new() -> Self {
        Self::from_config(&DisplayConfig::default())
    }

    /// Create an assembler from display configuration.
    pub fn from_config(config: &DisplayConfig) -> Self {
        Self {
            highlight_limit: config.highlight_limit,
            bullet_list_limit: config.bullet_list_limit,
            data_point_limit: config.data_point_limit,
            idea_title_limit: config.idea_title_limit,
        }
    }

    /// Set the number of overview highlights.
    pub fn with_highlight_limit(mut self, limit: usize) -> Self {
        self.highlight_limit = limit;
        self
    }

    /// Set the cap for other bullet lists.
    pub fn with_bullet_list_limit(mut self, limit: usize) -> Self {
        self.bullet_list_limit = limit;
        self
    }

    /// Set the cap for data point grids.
    pub fn with_data_point_limit(mut self, limit: usize) -> Self {
        self.data_point_limit = limit;
        self
    }

    /// Set the title length.
    pub fn with_idea_title_limit(mut self, limit: usize) -> Self {
        self.idea_title_limit = limit;
        self
    }

    /// Assemble every panel of the dashboard.
    pub fn assemble(&self, response: &AnalysisResponse) -> AssemblyResult {
        let start = Instant::now();
        let report = &response.report;

        let mut warnings = Vec::new();
        for (name, text) in report.sections() {
            debug!(section = name, chars = text.len(), "report section");
            if text.trim().is_empty() {
                warnings.push(format!("{} is empty", name));
            }
        }

        let probability = report.probability();
        let confidence = to_percent(
            response
                .evaluation_metrics
                .as_ref()
                .and_then(|m| m.overall_confidence),
        );
        let risk_label = hallucination_risk_label(response);
        let total_tokens = self.total_tokens(response);

        let header = DashboardHeader {
            title: trim_idea(&response.idea, self.idea_title_limit),
            success_probability: probability,
            band: probability_band(probability),
        };

        let kpis = vec![
            KpiCard {
                label: "Success Probability".to_string(),
                value: format!("{:.1}%", probability),
                hint: "Positive Outlook".to_string(),
                tone: Tone::Success,
            },
            KpiCard {
                label: "Hallucination Risk".to_string(),
                value: risk_label.clone(),
                hint: "Model Reliability".to_string(),
                tone: risk_tone(&risk_label),
            },
            KpiCard {
                label: "Confidence Score".to_string(),
                value: format!("{}%", confidence),
                hint: "Cross-agent confidence".to_string(),
                tone: confidence_tone(confidence),
            },
            KpiCard {
                label: "Token Usage".to_string(),
                value: format_thousands(total_tokens as i64),
                hint: "Total pipeline tokens".to_string(),
                tone: Tone::Neutral,
            },
        ];

        let tabs = TabKey::ALL
            .iter()
            .map(|&key| Tab {
                key,
                label: key.label().to_string(),
                active: key == TabKey::Overview,
            })
            .collect();

        let cost_breakdown = build_cost_breakdown(&report.cost_structure);
        let overview = OverviewPanel {
            gauge_value: probability.clamp(0.0, 100.0),
            best_location: non_empty_or(&report.best_location, NO_LOCATION),
            revenue_vs_cost: chart_bars(&build_revenue_cost_data(
                &report.revenue_model,
                &report.cost_structure,
            )),
            cost_segments: cost_segments(&cost_breakdown),
            cost_breakdown,
            highlights: extract_bullets(&join_lines(&[
                &report.market_analysis,
                &report.revenue_model,
                &report.go_to_market,
            ]))
            .into_iter()
            .take(self.highlight_limit)
            .collect(),
        };

        let market_text = join_lines(&[
            &report.market_analysis,
            &report.target_audience,
            &report.competition_analysis,
        ]);
        let market = MarketPanel {
            demand_snapshot: self.bullet_list(extract_bullets(&report.market_analysis)),
            data_points: self.grid(extract_data_points(&market_text)),
            audience: self.digest("Audience Profile", &report.target_audience, true),
            competition: self.digest("Competition Landscape", &report.competition_analysis, false),
            raw: raw_text(
                "Complete Market Intelligence Output",
                &join_paragraphs(&[
                    &report.market_analysis,
                    &report.target_audience,
                    &report.competition_analysis,
                ]),
            ),
        };

        let financial_text = join_lines(&[&report.revenue_model, &report.cost_structure]);
        let financial = FinancialPanel {
            revenue_summary: self.bullet_list(extract_bullets(&report.revenue_model)),
            cost_summary: self.bullet_list(extract_bullets(&report.cost_structure)),
            data_points: self.grid(extract_data_points(&financial_text)),
            risks: self.alert("Financial Risks", extract_risk_lines(&financial_text)),
            raw: raw_text(
                "Complete Financial Strategy Output",
                &join_paragraphs(&[&report.revenue_model, &report.cost_structure]),
            ),
        };

        let gtm = GtmPanel {
            timeline: build_timeline(&report.go_to_market),
            data_points: self.grid(extract_data_points(&report.go_to_market)),
            notes: self.bullet_list(extract_bullets(&report.go_to_market)),
            raw: raw_text("Complete GTM Output", &report.go_to_market),
        };

        let hallucination_json = response.hallucination_report_json();
        let critique = response
            .critique
            .as_deref()
            .filter(|c| !c.is_empty())
            .unwrap_or(NO_CRITIQUE);
        let risk = RiskPanel {
            critique: self.bullet_list(extract_bullets(critique)),
            risk_tone: risk_tone(&risk_label),
            hallucination_risk: risk_label,
            overall_confidence: confidence,
            total_tokens,
            sources_used_count: response.sources_used.len(),
            similar_ideas_count: response.similar_ideas.len(),
            validation_data_points: self.grid(extract_data_points(&join_lines(&[
                response.critique_text(),
                &hallucination_json,
            ]))),
            similar_ideas: self.bullet_list(numbered(&response.similar_ideas)),
            sources: self.bullet_list(numbered(&response.sources_used)),
            raw_hallucination_report: raw_text("Raw Hallucination Report", &hallucination_json),
        };

        let dashboard = Dashboard {
            header,
            kpis,
            tabs,
            overview,
            market,
            financial,
            gtm,
            risk,
        };

        let processing_time_ms = start.elapsed().as_millis() as u64;
        info!(
            data_points = dashboard.all_data_points().len(),
            warnings = warnings.len(),
            "dashboard assembled in {}ms",
            processing_time_ms
        );

        AssemblyResult {
            dashboard,
            warnings,
            processing_time_ms,
        }
    }

    /// Authoritative token count when present and non-zero, else an estimate.
    fn total_tokens(&self, response: &AnalysisResponse) -> u64 {
        let reported = response
            .evaluation_metrics
            .as_ref()
            .and_then(|m| m.total_tokens)
            .filter(|t| t.is_finite() && *t > 0.0);

        match reported {
            Some(tokens) => tokens.round() as u64,
            None => {
                let report = &response.report;
                estimate_tokens_from_text(&join_lines(&[
                    &report.market_analysis,
                    &report.target_audience,
                    &report.revenue_model,
                    &report.competition_analysis,
                    &report.cost_structure,
                    &report.go_to_market,
                    response.critique_text(),
                ]))
            }
        }
    }

    fn bullet_list(&self, lines: Vec<String>) -> Vec<String> {
        lines
            .into_iter()
            .filter(|line| !line.is_empty())
            .take(self.bullet_list_limit)
            .collect()
    }

    fn grid(&self, points: Vec<DataPoint>) -> Vec<DataPoint> {
        points.into_iter().take(self.data_point_limit).collect()
    }

    fn alert(&self, title: &str, lines: Vec<String>) -> AlertBox {
        let mut lines = self.bullet_list(lines);
        if lines.is_empty() {
            lines.push(NO_RISKS_MESSAGE.to_string());
        }
        AlertBox {
            title: title.to_string(),
            lines,
        }
    }

    fn digest(&self, title: &str, text: &str, open: bool) -> SectionDigest {
        SectionDigest {
            title: title.to_string(),
            open,
            bullets: self.bullet_list(extract_bullets(text)),
            signals: self.alert("Signals to Watch", extract_risk_lines(text)),
        }
    }
}

impl Default for DashboardAssembler {
    fn default() -> Self {
        Self::new()
    }
}

fn join_lines(parts: &[&str]) -> String {
    parts.join("\n")
}

fn join_paragraphs(parts: &[&str]) -> String {
    parts.join("\n\n")
}

fn non_empty_or(value: &str, fallback: &str) -> String {
    if value.is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}

fn raw_text(title: &str, text: &str) -> RawText {
    let text = if text.trim().is_empty() { NO_RAW_OUTPUT } else { text };
    RawText {
        title: title.to_string(),
        text: text.to_string(),
    }
}

fn numbered(items: &[String]) -> Vec<String> {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| format!("{}. {}", i + 1, item))
        .collect()
}
