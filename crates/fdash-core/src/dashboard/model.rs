//! Dashboard view model.
//!
//! Pure data handed to a presentation layer; nothing here knows about markup.

use serde::{Deserialize, Serialize};

use crate::models::signals::{BarKind, CostSlice, DataPoint, TimelinePhase};

/// Shown by renderers in place of an empty bullet list.
pub const EMPTY_LIST_MESSAGE: &str = "No structured output available.";

/// Shown by renderers in place of an empty data point grid.
pub const EMPTY_DATA_POINTS_MESSAGE: &str =
    "No explicit numeric or key-value data found. Run with more structured assumptions to extract richer signals.";

/// Line used by an alert box that has nothing else to show.
pub const NO_RISKS_MESSAGE: &str =
    "No explicit risks identified; validate assumptions with live market tests.";

/// A fully assembled dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dashboard {
    pub header: DashboardHeader,
    pub kpis: Vec<KpiCard>,
    pub tabs: Vec<Tab>,
    pub overview: OverviewPanel,
    pub market: MarketPanel,
    pub financial: FinancialPanel,
    pub gtm: GtmPanel,
    pub risk: RiskPanel,
}

/// Title area.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardHeader {
    pub title: String,
    pub success_probability: f64,
    pub band: ProbabilityBand,
}

/// Coarse rating of the success probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProbabilityBand {
    Good,
    Medium,
    High,
}

/// Visual tone of a card or indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Success,
    Warning,
    Danger,
    Neutral,
}

/// Headline metric card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KpiCard {
    pub label: String,
    pub value: String,
    pub hint: String,
    pub tone: Tone,
}

/// Panel identifiers in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TabKey {
    Overview,
    Market,
    Financial,
    Gtm,
    Risk,
}

impl TabKey {
    pub const ALL: [TabKey; 5] = [
        TabKey::Overview,
        TabKey::Market,
        TabKey::Financial,
        TabKey::Gtm,
        TabKey::Risk,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TabKey::Overview => "Overview",
            TabKey::Market => "Market Intelligence",
            TabKey::Financial => "Financial Strategy",
            TabKey::Gtm => "GTM Plan",
            TabKey::Risk => "Risk & Evaluation",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tab {
    pub key: TabKey,
    pub label: String,
    pub active: bool,
}

/// One bar of the revenue vs cost chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartBar {
    pub label: String,
    /// Amount in thousands.
    pub value: f64,
    #[serde(rename = "type")]
    pub kind: BarKind,
    /// Rendered height in pixels.
    pub height: f64,
    /// Amount formatted like `$1,200k`.
    pub display: String,
}

/// Cumulative range of one cost slice on a pie chart, in percent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieSegment {
    pub color: String,
    pub start: u32,
    pub end: u32,
}

/// Titled list of warning lines; never empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertBox {
    pub title: String,
    pub lines: Vec<String>,
}

/// Collapsible section with its bullets and risk signals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionDigest {
    pub title: String,
    pub open: bool,
    pub bullets: Vec<String>,
    pub signals: AlertBox,
}

/// Raw text shown verbatim in a details block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawText {
    pub title: String,
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverviewPanel {
    /// Success probability clamped to 0..=100.
    pub gauge_value: f64,
    pub best_location: String,
    pub revenue_vs_cost: Vec<ChartBar>,
    pub cost_breakdown: Vec<CostSlice>,
    pub cost_segments: Vec<PieSegment>,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketPanel {
    pub demand_snapshot: Vec<String>,
    pub data_points: Vec<DataPoint>,
    pub audience: SectionDigest,
    pub competition: SectionDigest,
    pub raw: RawText,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancialPanel {
    pub revenue_summary: Vec<String>,
    pub cost_summary: Vec<String>,
    pub data_points: Vec<DataPoint>,
    pub risks: AlertBox,
    pub raw: RawText,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GtmPanel {
    pub timeline: Vec<TimelinePhase>,
    pub data_points: Vec<DataPoint>,
    pub notes: Vec<String>,
    pub raw: RawText,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskPanel {
    pub critique: Vec<String>,
    pub hallucination_risk: String,
    pub risk_tone: Tone,
    pub overall_confidence: u32,
    pub total_tokens: u64,
    pub sources_used_count: usize,
    pub similar_ideas_count: usize,
    pub validation_data_points: Vec<DataPoint>,
    pub similar_ideas: Vec<String>,
    pub sources: Vec<String>,
    pub raw_hallucination_report: RawText,
}

impl Dashboard {
    /// Key of the tab that starts active.
    pub fn active_tab(&self) -> Option<TabKey> {
        self.tabs.iter().find(|t| t.active).map(|t| t.key)
    }

    /// Every data point on the dashboard, tagged with its panel.
    pub fn all_data_points(&self) -> Vec<(TabKey, &DataPoint)> {
        let panels: [(TabKey, &Vec<DataPoint>); 4] = [
            (TabKey::Market, &self.market.data_points),
            (TabKey::Financial, &self.financial.data_points),
            (TabKey::Gtm, &self.gtm.data_points),
            (TabKey::Risk, &self.risk.validation_data_points),
        ];
        panels
            .into_iter()
            .flat_map(|(key, points)| points.iter().map(move |p| (key, p)))
            .collect()
    }
}
