//! Analysis service payloads.
//!
//! The upstream service returns narrative text, so every field is optional
//! and defaults to empty. Numeric fields tolerate numbers sent as strings.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::error::PayloadError;

/// Request sent to the analysis service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRequest {
    /// Free-text description of the startup idea.
    #[serde(deserialize_with = "null_as_default")]
    pub idea: String,

    /// Industry sector.
    pub industry: String,

    /// Target market or geography.
    pub target_market: String,
}

impl AnalysisRequest {
    /// Build a request, substituting defaults for blank industry and market.
    ///
    /// Fails when the idea is blank.
    pub fn new(
        idea: &str,
        industry: Option<&str>,
        target_market: Option<&str>,
        defaults: &crate::models::config::ApiConfig,
    ) -> Result<Self, PayloadError> {
        let idea = idea.trim();
        if idea.is_empty() {
            return Err(PayloadError::MissingIdea);
        }

        Ok(Self {
            idea: idea.to_string(),
            industry: or_default(industry, &defaults.default_industry),
            target_market: or_default(target_market, &defaults.default_target_market),
        })
    }
}

fn or_default(value: Option<&str>, fallback: &str) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => fallback.to_string(),
    }
}

/// Full response returned by the analysis service.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisResponse {
    /// The idea that was analyzed.
    #[serde(deserialize_with = "null_as_default")]
    pub idea: String,

    /// Generated report sections.
    #[serde(deserialize_with = "null_as_default")]
    pub report: FeasibilityReport,

    /// Critique from the evaluation stage.
    #[serde(deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub critique: Option<String>,

    /// Evaluation metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evaluation_metrics: Option<EvaluationMetrics>,

    /// Hallucination check output.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hallucination_report: Option<HallucinationReport>,

    /// Similar ideas retrieved from the vector store.
    #[serde(deserialize_with = "lenient_string_list")]
    pub similar_ideas: Vec<String>,

    /// Sources consulted during analysis.
    #[serde(deserialize_with = "lenient_string_list")]
    pub sources_used: Vec<String>,
}

impl AnalysisResponse {
    /// Parse a response from JSON text.
    pub fn from_json(json: &str) -> Result<Self, PayloadError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Raw hallucination report as pretty JSON (`{}` when absent).
    pub fn hallucination_report_json(&self) -> String {
        match &self.hallucination_report {
            Some(report) => {
                serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
            }
            None => "{}".to_string(),
        }
    }

    /// Critique text, empty when absent.
    pub fn critique_text(&self) -> &str {
        self.critique.as_deref().unwrap_or("")
    }
}

/// Narrative report sections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FeasibilityReport {
    /// Success probability score (0-100).
    #[serde(deserialize_with = "lenient_f64")]
    pub success_probability: Option<f64>,

    /// Recommended location for the startup.
    #[serde(deserialize_with = "null_as_default")]
    pub best_location: String,

    #[serde(deserialize_with = "null_as_default")]
    pub market_analysis: String,
    #[serde(deserialize_with = "null_as_default")]
    pub target_audience: String,
    #[serde(deserialize_with = "null_as_default")]
    pub revenue_model: String,
    #[serde(deserialize_with = "null_as_default")]
    pub competition_analysis: String,
    #[serde(deserialize_with = "null_as_default")]
    pub cost_structure: String,
    #[serde(deserialize_with = "null_as_default")]
    pub go_to_market: String,
}

impl FeasibilityReport {
    /// Section names paired with their text, in report order.
    pub fn sections(&self) -> [(&'static str, &str); 6] {
        [
            ("market_analysis", &self.market_analysis),
            ("target_audience", &self.target_audience),
            ("revenue_model", &self.revenue_model),
            ("competition_analysis", &self.competition_analysis),
            ("cost_structure", &self.cost_structure),
            ("go_to_market", &self.go_to_market),
        ]
    }

    /// Success probability with missing or non-numeric values read as zero.
    pub fn probability(&self) -> f64 {
        match self.success_probability {
            Some(p) if p.is_finite() => p,
            _ => 0.0,
        }
    }
}

/// Evaluation metadata attached to a response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluationMetrics {
    /// Cross-agent confidence, either a 0-1 fraction or a 0-100 percentage.
    #[serde(deserialize_with = "lenient_f64", skip_serializing_if = "Option::is_none")]
    pub overall_confidence: Option<f64>,

    /// Authoritative token count for the pipeline run.
    #[serde(deserialize_with = "lenient_f64", skip_serializing_if = "Option::is_none")]
    pub total_tokens: Option<f64>,

    #[serde(deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub hallucination_risk: Option<String>,
}

/// Hallucination check output, kept as the raw object in its original key
/// order so it can be echoed back verbatim.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HallucinationReport(pub Map<String, Value>);

impl HallucinationReport {
    pub fn risk_level(&self) -> Option<String> {
        self.0.get("risk_level").and_then(scalar_text)
    }

    pub fn overall_risk(&self) -> Option<String> {
        self.0.get("overall_risk").and_then(scalar_text)
    }
}

/// Text form of a scalar JSON value. Strings pass through, numbers and
/// booleans are stringified, anything else has no text form.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Read `null` as the type's default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accept a string or any scalar, stringified. `null` and containers read as `None`.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(scalar_text))
}

/// Accept a list of scalars, stringified. Null entries are skipped, other
/// entries are kept as JSON text, and a non-list reads as empty.
fn lenient_string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let items = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Array(items)) => items,
        _ => return Ok(Vec::new()),
    };
    Ok(items
        .iter()
        .filter(|item| !item.is_null())
        .map(|item| scalar_text(item).unwrap_or_else(|| item.to_string()))
        .collect())
}

/// Accept a number, a numeric string or null.
///
/// Strings that do not parse become NaN so they normalize to zero later.
fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => {
            let s = s.trim();
            if s.is_empty() {
                Some(0.0)
            } else {
                Some(s.parse::<f64>().unwrap_or(f64::NAN))
            }
        }
        Some(Value::Bool(b)) => Some(if b { 1.0 } else { 0.0 }),
        Some(_) => Some(f64::NAN),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::config::ApiConfig;

    #[test]
    fn test_partial_payload_deserializes() {
        let response = AnalysisResponse::from_json(r#"{"idea": "Pet food delivery"}"#).unwrap();

        assert_eq!(response.idea, "Pet food delivery");
        assert!(response.report.market_analysis.is_empty());
        assert!(response.critique.is_none());
        assert!(response.similar_ideas.is_empty());
        assert_eq!(response.report.probability(), 0.0);
    }

    #[test]
    fn test_numeric_strings_are_accepted() {
        let json = r#"{
            "idea": "x",
            "report": {"success_probability": "72.5"},
            "evaluation_metrics": {"overall_confidence": "0.8", "total_tokens": 1200}
        }"#;
        let response = AnalysisResponse::from_json(json).unwrap();

        assert_eq!(response.report.success_probability, Some(72.5));
        let metrics = response.evaluation_metrics.unwrap();
        assert_eq!(metrics.overall_confidence, Some(0.8));
        assert_eq!(metrics.total_tokens, Some(1200.0));
    }

    #[test]
    fn test_non_numeric_string_becomes_nan() {
        let json = r#"{"evaluation_metrics": {"overall_confidence": "high"}}"#;
        let response = AnalysisResponse::from_json(json).unwrap();

        let confidence = response.evaluation_metrics.unwrap().overall_confidence.unwrap();
        assert!(confidence.is_nan());
    }

    #[test]
    fn test_hallucination_report_keeps_unknown_fields() {
        let json = r#"{"hallucination_report": {"risk_level": "low", "flagged_claims": 2}}"#;
        let response = AnalysisResponse::from_json(json).unwrap();

        let raw = response.hallucination_report_json();
        assert!(raw.contains("\"risk_level\": \"low\""));
        assert!(raw.contains("\"flagged_claims\": 2"));
    }

    #[test]
    fn test_hallucination_report_keeps_key_order() {
        let json = r#"{"hallucination_report": {"verified": 4, "risk_level": "low", "claims": 2}}"#;
        let response = AnalysisResponse::from_json(json).unwrap();

        let raw = response.hallucination_report_json();
        let verified = raw.find("verified").unwrap();
        let risk = raw.find("risk_level").unwrap();
        let claims = raw.find("claims").unwrap();
        assert!(verified < risk && risk < claims);
    }

    #[test]
    fn test_non_string_risk_labels_are_stringified() {
        let json = r#"{
            "hallucination_report": {"risk_level": 3, "overall_risk": null},
            "evaluation_metrics": {"hallucination_risk": true}
        }"#;
        let response = AnalysisResponse::from_json(json).unwrap();

        let report = response.hallucination_report.unwrap();
        assert_eq!(report.risk_level(), Some("3".to_string()));
        assert_eq!(report.overall_risk(), None);
        let metrics = response.evaluation_metrics.unwrap();
        assert_eq!(metrics.hallucination_risk, Some("true".to_string()));
    }

    #[test]
    fn test_list_entries_are_lenient() {
        let json = r#"{"similar_ideas": ["a", null, 7], "sources_used": "not a list"}"#;
        let response = AnalysisResponse::from_json(json).unwrap();

        assert_eq!(response.similar_ideas, vec!["a".to_string(), "7".to_string()]);
        assert!(response.sources_used.is_empty());
    }

    #[test]
    fn test_null_idea_and_critique() {
        let response = AnalysisResponse::from_json(r#"{"idea": null, "critique": null}"#).unwrap();
        assert!(response.idea.is_empty());
        assert_eq!(response.critique_text(), "");
    }

    #[test]
    fn test_missing_hallucination_report_is_empty_object() {
        assert_eq!(AnalysisResponse::default().hallucination_report_json(), "{}");
    }

    #[test]
    fn test_null_sections_read_as_empty() {
        let json = r#"{"idea": null, "report": {"market_analysis": null}, "sources_used": null}"#;
        let response = AnalysisResponse::from_json(json).unwrap();

        assert!(response.idea.is_empty());
        assert!(response.report.market_analysis.is_empty());
        assert!(response.sources_used.is_empty());
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(matches!(
            AnalysisResponse::from_json("not json"),
            Err(PayloadError::Json(_))
        ));
    }

    #[test]
    fn test_request_defaults() {
        let defaults = ApiConfig::default();
        let request = AnalysisRequest::new("  AI bookkeeping for bakeries ", Some(" "), None, &defaults)
            .unwrap();

        assert_eq!(request.idea, "AI bookkeeping for bakeries");
        assert_eq!(request.industry, "general");
        assert_eq!(request.target_market, "global");
    }

    #[test]
    fn test_request_rejects_blank_idea() {
        let defaults = ApiConfig::default();
        assert!(matches!(
            AnalysisRequest::new("   ", None, None, &defaults),
            Err(PayloadError::MissingIdea)
        ));
    }
}
