//! Structured signals derived from report text.
//!
//! All values here are transient view-model data, computed fresh for each
//! analysis response.

use serde::{Deserialize, Serialize};

/// A label/value pair extracted from a single line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataPoint {
    pub label: String,
    pub value: String,
}

impl DataPoint {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }

    /// Case-insensitive identity used for deduplication.
    pub fn dedup_key(&self) -> String {
        format!("{}|{}", self.label.to_lowercase(), self.value.to_lowercase())
    }
}

/// One of the four fixed budget categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostCategory {
    Operations,
    Team,
    Marketing,
    Other,
}

impl CostCategory {
    /// All categories in display order. The last one absorbs rounding error.
    pub const ALL: [CostCategory; 4] = [
        CostCategory::Operations,
        CostCategory::Team,
        CostCategory::Marketing,
        CostCategory::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CostCategory::Operations => "Operations",
            CostCategory::Team => "Team",
            CostCategory::Marketing => "Marketing",
            CostCategory::Other => "Other",
        }
    }

    /// Weight before keyword bonus.
    pub fn base_weight(&self) -> u32 {
        match self {
            CostCategory::Operations => 30,
            CostCategory::Team => 35,
            CostCategory::Marketing => 20,
            CostCategory::Other => 15,
        }
    }

    /// Chart color.
    pub fn color(&self) -> &'static str {
        match self {
            CostCategory::Operations => "#22c55e",
            CostCategory::Team => "#eab308",
            CostCategory::Marketing => "#ef4444",
            CostCategory::Other => "#6366f1",
        }
    }
}

/// Estimated share of total cost for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostSlice {
    pub category: CostCategory,
    pub label: String,
    pub percent: u32,
    pub color: String,
}

/// One of three fixed go-to-market windows with its milestones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelinePhase {
    pub phase: String,
    pub points: Vec<String>,
}

/// Kind of bar in the revenue vs cost chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BarKind {
    Revenue,
    Cost,
}

/// One projected amount in thousands of currency units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueCostPoint {
    pub label: String,
    pub value: f64,
    #[serde(rename = "type")]
    pub kind: BarKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dedup_key_ignores_case() {
        let a = DataPoint::new("Growth Rate", "12%");
        let b = DataPoint::new("growth rate", "12%");
        assert_eq!(a.dedup_key(), b.dedup_key());
    }

    #[test]
    fn test_base_weights_sum_to_hundred() {
        let total: u32 = CostCategory::ALL.iter().map(|c| c.base_weight()).sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn test_revenue_point_serializes_kind_as_type() {
        let point = RevenueCostPoint {
            label: "Revenue".to_string(),
            value: 180.0,
            kind: BarKind::Revenue,
        };
        let json = serde_json::to_value(&point).unwrap();
        assert_eq!(json["type"], "revenue");
    }
}
