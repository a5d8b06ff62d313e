//! Display formatting helpers.

use super::model::{ChartBar, PieSegment};
use crate::models::signals::{CostSlice, RevenueCostPoint};

/// Title used when the payload has no idea text.
pub const UNTITLED_IDEA: &str = "Untitled Startup Idea";

/// Tallest bar in the revenue vs cost chart, in pixels.
const MAX_BAR_HEIGHT: f64 = 180.0;

/// Shortest bar, so tiny amounts stay visible.
const MIN_BAR_HEIGHT: f64 = 8.0;

/// Shorten an idea to `limit` characters, appending `...` when cut.
pub fn trim_idea(idea: &str, limit: usize) -> String {
    if idea.is_empty() {
        return UNTITLED_IDEA.to_string();
    }
    if idea.chars().count() > limit {
        let head: String = idea.chars().take(limit).collect();
        format!("{}...", head)
    } else {
        idea.to_string()
    }
}

/// Format an integer with comma thousands separators.
pub fn format_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let chars: Vec<char> = digits.chars().collect();
    let mut formatted = String::new();

    if value < 0 {
        formatted.push('-');
    }
    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(*c);
    }

    formatted
}

/// Size the revenue vs cost bars relative to the larger value.
pub fn chart_bars(points: &[RevenueCostPoint]) -> Vec<ChartBar> {
    let max_value = points.iter().map(|p| p.value).fold(1.0_f64, f64::max);

    points
        .iter()
        .map(|point| ChartBar {
            label: point.label.clone(),
            value: point.value,
            kind: point.kind,
            height: (point.value / max_value * MAX_BAR_HEIGHT).max(MIN_BAR_HEIGHT),
            display: format!("${}k", format_thousands(point.value.round() as i64)),
        })
        .collect()
}

/// Cumulative start/end percentages for a pie chart.
pub fn cost_segments(slices: &[CostSlice]) -> Vec<PieSegment> {
    let mut start = 0;
    slices
        .iter()
        .map(|slice| {
            let segment = PieSegment {
                color: slice.color.clone(),
                start,
                end: start + slice.percent,
            };
            start += slice.percent;
            segment
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::{build_cost_breakdown, build_revenue_cost_data};

    #[test]
    fn test_trim_idea() {
        assert_eq!(trim_idea("", 80), UNTITLED_IDEA);
        assert_eq!(trim_idea("Short idea", 80), "Short idea");
        assert_eq!(trim_idea("abcdefghij", 4), "abcd...");
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1200), "1,200");
        assert_eq!(format_thousands(12345678), "12,345,678");
        assert_eq!(format_thousands(-4500), "-4,500");
    }

    #[test]
    fn test_chart_bars() {
        let bars = chart_bars(&build_revenue_cost_data("", ""));
        assert_eq!(bars[0].height, 180.0);
        assert_eq!(bars[1].height, 120.0);
        assert_eq!(bars[0].display, "$180k");
    }

    #[test]
    fn test_chart_bars_minimum_height() {
        let bars = chart_bars(&build_revenue_cost_data("$5m revenue", "$200 in fees"));
        assert_eq!(bars[0].display, "$5,000k");
        assert_eq!(bars[1].height, 8.0);
    }

    #[test]
    fn test_cost_segments_cover_whole_pie() {
        let segments = cost_segments(&build_cost_breakdown("cloud"));
        assert_eq!(segments[0].start, 0);
        assert_eq!(segments.last().unwrap().end, 100);
        for pair in segments.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
    }
}
