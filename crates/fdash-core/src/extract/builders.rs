//! Chart data built from report sections: cost split, GTM timeline and
//! revenue vs cost bars.

use regex::Regex;

use super::bullets::extract_bullets;
use super::rules::{MARKETING_TERMS, OPERATIONS_TERMS, OTHER_TERMS, TEAM_TERMS};
use crate::models::signals::{BarKind, CostCategory, CostSlice, RevenueCostPoint, TimelinePhase};
use crate::normalize::extract_first_money_number;

/// Weight added to a category when its keywords appear in the text.
const KEYWORD_BONUS: u32 = 5;

/// Bullets assigned to each timeline phase.
const POINTS_PER_PHASE: usize = 3;

/// Timeline phase names in order.
pub const TIMELINE_PHASES: [&str; 3] = ["0-3 Months", "3-12 Months", "12-24 Months"];

/// Point used for a phase with no bullets of its own.
pub const TIMELINE_PLACEHOLDER: &str = "Define milestones and owner accountability for this phase.";

/// Projected revenue (thousands) when none can be read from the text.
pub const REVENUE_FALLBACK: f64 = 180.0;

/// Projected cost (thousands) when none can be read from the text.
pub const COST_FALLBACK: f64 = 120.0;

fn category_terms(category: CostCategory) -> &'static Regex {
    match category {
        CostCategory::Operations => &*OPERATIONS_TERMS,
        CostCategory::Team => &*TEAM_TERMS,
        CostCategory::Marketing => &*MARKETING_TERMS,
        CostCategory::Other => &*OTHER_TERMS,
    }
}

/// Estimate the share of each cost category from cost-structure prose.
///
/// Always returns the four categories in fixed order with percents summing
/// to exactly 100; the last category takes whatever the rounded shares of
/// the others leave.
pub fn build_cost_breakdown(cost_text: &str) -> Vec<CostSlice> {
    let text = cost_text.to_lowercase();

    let weights: Vec<(CostCategory, u32)> = CostCategory::ALL
        .iter()
        .map(|&category| {
            let bonus = if category_terms(category).is_match(&text) {
                KEYWORD_BONUS
            } else {
                0
            };
            (category, category.base_weight() + bonus)
        })
        .collect();

    let total: u32 = weights.iter().map(|(_, w)| w).sum();
    let last = weights.len() - 1;
    let mut assigned = 0u32;

    weights
        .iter()
        .enumerate()
        .map(|(index, &(category, weight))| {
            let percent = if index == last {
                100u32.saturating_sub(assigned)
            } else {
                let share = (f64::from(weight) / f64::from(total) * 100.0).round() as u32;
                assigned += share;
                share
            };
            CostSlice {
                category,
                label: category.label().to_string(),
                percent,
                color: category.color().to_string(),
            }
        })
        .collect()
}

/// Split go-to-market bullets into three fixed phases of up to three points.
///
/// Phases with no bullets get [`TIMELINE_PLACEHOLDER`] so none is empty.
pub fn build_timeline(gtm_text: &str) -> Vec<TimelinePhase> {
    let bullets = extract_bullets(gtm_text);

    TIMELINE_PHASES
        .iter()
        .enumerate()
        .map(|(index, phase)| {
            let mut points: Vec<String> = bullets
                .iter()
                .skip(index * POINTS_PER_PHASE)
                .take(POINTS_PER_PHASE)
                .cloned()
                .collect();
            if points.is_empty() {
                points.push(TIMELINE_PLACEHOLDER.to_string());
            }
            TimelinePhase {
                phase: phase.to_string(),
                points,
            }
        })
        .collect()
}

/// Projected revenue and cost in thousands, for a two-bar chart.
///
/// Missing or zero amounts fall back to fixed values so the chart never
/// collapses.
pub fn build_revenue_cost_data(revenue_text: &str, cost_text: &str) -> Vec<RevenueCostPoint> {
    let amount_or = |text: &str, fallback: f64| {
        extract_first_money_number(text)
            .filter(|value| *value != 0.0)
            .unwrap_or(fallback)
    };

    vec![
        RevenueCostPoint {
            label: "Revenue".to_string(),
            value: amount_or(revenue_text, REVENUE_FALLBACK),
            kind: BarKind::Revenue,
        },
        RevenueCostPoint {
            label: "Cost".to_string(),
            value: amount_or(cost_text, COST_FALLBACK),
            kind: BarKind::Cost,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn percents(slices: &[CostSlice]) -> Vec<u32> {
        slices.iter().map(|s| s.percent).collect()
    }

    #[test]
    fn test_cost_breakdown_without_keywords() {
        let slices = build_cost_breakdown("");
        assert_eq!(percents(&slices), vec![30, 35, 20, 15]);
        assert_eq!(
            slices.iter().map(|s| s.label.as_str()).collect::<Vec<_>>(),
            vec!["Operations", "Team", "Marketing", "Other"]
        );
        assert_eq!(slices[0].color, "#22c55e");
    }

    #[test]
    fn test_cost_breakdown_with_keywords() {
        // Team and Marketing get the bonus: 30/40/25/15 of 110
        let slices = build_cost_breakdown("Engineering SALARIES and paid ads dominate spend");
        assert_eq!(percents(&slices), vec![27, 36, 23, 14]);
    }

    #[test]
    fn test_cost_breakdown_last_slice_absorbs_rounding() {
        // All four bonuses: 35/40/25/20 of 120 -> 29.17, 33.33, 20.83
        let slices = build_cost_breakdown("cloud hosting, team payroll, marketing, legal");
        assert_eq!(percents(&slices), vec![29, 33, 21, 17]);
    }

    #[test]
    fn test_cost_breakdown_always_sums_to_hundred() {
        for text in ["", "Nothing relevant here at all", "ops staff growth admin"] {
            let slices = build_cost_breakdown(text);
            assert_eq!(slices.len(), 4, "{text}");
            assert_eq!(slices.iter().map(|s| s.percent).sum::<u32>(), 100, "{text}");
        }
    }

    #[test]
    fn test_cost_breakdown_every_bonus_combination() {
        let keywords = ["cloud", "payroll", "sales", "legal"];

        for mask in 0..16u32 {
            let text = keywords
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, k)| *k)
                .collect::<Vec<_>>()
                .join(" ");
            let slices = build_cost_breakdown(&text);

            let weights: Vec<u32> = CostCategory::ALL
                .iter()
                .enumerate()
                .map(|(i, c)| c.base_weight() + if mask & (1 << i) != 0 { 5 } else { 0 })
                .collect();
            let total: u32 = weights.iter().sum();
            let expected: Vec<u32> = weights[..3]
                .iter()
                .map(|w| (f64::from(*w) / f64::from(total) * 100.0).round() as u32)
                .collect();

            assert_eq!(slices.len(), 4, "{text}");
            assert_eq!(percents(&slices)[..3].to_vec(), expected, "{text}");
            assert_eq!(slices.iter().map(|s| s.percent).sum::<u32>(), 100, "{text}");
        }
    }

    #[test]
    fn test_timeline_distributes_bullets() {
        let text = (1..=10)
            .map(|i| format!("- Milestone {} for launch", i))
            .collect::<Vec<_>>()
            .join("\n");
        let timeline = build_timeline(&text);

        assert_eq!(timeline.len(), 3);
        assert_eq!(timeline[0].phase, "0-3 Months");
        assert_eq!(timeline[0].points[0], "Milestone 1 for launch");
        assert_eq!(timeline[1].points[0], "Milestone 4 for launch");
        assert_eq!(timeline[2].points.len(), 3);
        assert_eq!(timeline[2].points[2], "Milestone 9 for launch");
    }

    #[test]
    fn test_timeline_fills_empty_phases() {
        let timeline = build_timeline("- Launch beta with 20 design partners\n- Collect weekly feedback");
        assert_eq!(timeline[0].points.len(), 2);
        assert_eq!(timeline[1].points, vec![TIMELINE_PLACEHOLDER.to_string()]);
        assert_eq!(timeline[2].points, vec![TIMELINE_PLACEHOLDER.to_string()]);
    }

    #[test]
    fn test_timeline_empty_input() {
        let timeline = build_timeline("");
        assert_eq!(timeline.len(), 3);
        assert!(timeline.iter().all(|phase| phase.points.len() == 1));
        assert_eq!(timeline[2].phase, "12-24 Months");
    }

    #[test]
    fn test_revenue_cost_from_text() {
        let data = build_revenue_cost_data(
            "We project $250k ARR by year two",
            "Annual spend of roughly $1.2m",
        );
        assert_eq!(data[0].label, "Revenue");
        assert_eq!(data[0].value, 250.0);
        assert_eq!(data[0].kind, BarKind::Revenue);
        assert_eq!(data[1].value, 1200.0);
        assert_eq!(data[1].kind, BarKind::Cost);
    }

    #[test]
    fn test_revenue_cost_fallbacks() {
        let data = build_revenue_cost_data("", "Costs are mostly people");
        assert_eq!(data[0].value, REVENUE_FALLBACK);
        assert_eq!(data[1].value, COST_FALLBACK);
    }

    #[test]
    fn test_revenue_cost_zero_falls_back() {
        let data = build_revenue_cost_data("$0k upfront", "");
        assert_eq!(data[0].value, REVENUE_FALLBACK);
    }
}
