//! WASM bindings for the feasibility dashboard.
//!
//! Exposes the report heuristics and dashboard assembly to browser front ends.
//! Structured values cross the boundary as plain JS objects.

use chrono::{DateTime, NaiveDate};
use serde::Serialize;
use wasm_bindgen::prelude::*;

use fdash_core::dashboard::{render_report_text as render_text, report_file_name};
use fdash_core::{AnalysisResponse, AnalysisSession, DashboardAssembler};

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Version information.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn parse_response(json: &str) -> Result<AnalysisResponse, JsValue> {
    AnalysisResponse::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Today's date in the browser's local time zone.
fn today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(now.get_full_year() as i32, now.get_month() + 1, now.get_date())
        .unwrap_or_default()
}

#[wasm_bindgen]
pub fn extract_bullets(text: &str) -> Result<JsValue, JsValue> {
    to_js(&fdash_core::extract_bullets(text))
}

/// Labelled values found in report text, as `{label, value}` objects.
#[wasm_bindgen]
pub fn extract_data_points(text: &str) -> Result<JsValue, JsValue> {
    to_js(&fdash_core::extract_data_points(text))
}

#[wasm_bindgen]
pub fn extract_risk_lines(text: &str) -> Result<JsValue, JsValue> {
    to_js(&fdash_core::extract_risk_lines(text))
}

/// Cost split across the four buckets. Percentages sum to 100.
#[wasm_bindgen]
pub fn build_cost_breakdown(cost_text: &str) -> Result<JsValue, JsValue> {
    to_js(&fdash_core::build_cost_breakdown(cost_text))
}

#[wasm_bindgen]
pub fn build_timeline(gtm_text: &str) -> Result<JsValue, JsValue> {
    to_js(&fdash_core::build_timeline(gtm_text))
}

#[wasm_bindgen]
pub fn build_revenue_cost_data(revenue_text: &str, cost_text: &str) -> Result<JsValue, JsValue> {
    to_js(&fdash_core::build_revenue_cost_data(revenue_text, cost_text))
}

/// First money amount in the text, in thousands.
#[wasm_bindgen]
pub fn extract_first_money_number(text: &str) -> Option<f64> {
    fdash_core::extract_first_money_number(text)
}

#[wasm_bindgen]
pub fn to_percent(value: Option<f64>) -> u32 {
    fdash_core::to_percent(value)
}

#[wasm_bindgen]
pub fn estimate_tokens_from_text(text: &str) -> f64 {
    fdash_core::estimate_tokens_from_text(text) as f64
}

/// Assemble the full dashboard view model from an analysis payload.
#[wasm_bindgen]
pub fn build_dashboard(json: &str) -> Result<JsValue, JsValue> {
    let response = parse_response(json)?;
    let result = DashboardAssembler::new().assemble(&response);
    for warning in &result.warnings {
        web_sys::console::debug_1(&JsValue::from_str(warning));
    }
    to_js(&result.dashboard)
}

/// Plain-text report for an analysis payload, dated today.
#[wasm_bindgen]
pub fn render_report_text(json: &str) -> Result<String, JsValue> {
    let response = parse_response(json)?;
    Ok(render_text(&response, today()))
}

/// Download file name for a report exported now.
#[wasm_bindgen]
pub fn report_download_name() -> String {
    let now = DateTime::from_timestamp_millis(js_sys::Date::now() as i64).unwrap_or_default();
    report_file_name(now)
}

/// Dashboard session for browser use.
///
/// Guards against double submission and keeps the last report for export.
#[wasm_bindgen]
pub struct DashboardSession {
    session: AnalysisSession,
    assembler: DashboardAssembler,
}

#[wasm_bindgen]
impl DashboardSession {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            session: AnalysisSession::new(),
            assembler: DashboardAssembler::new(),
        }
    }

    /// Mark a request as started. Throws if one is already in flight.
    #[wasm_bindgen]
    pub fn begin_request(&mut self) -> Result<(), JsValue> {
        self.session
            .begin_request()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen]
    pub fn is_pending(&self) -> bool {
        self.session.is_pending()
    }

    /// Load a response payload and return the rendered dashboard.
    #[wasm_bindgen]
    pub fn load(&mut self, json: &str) -> Result<JsValue, JsValue> {
        let response = match parse_response(json) {
            Ok(response) => response,
            Err(e) => {
                self.session.fail();
                return Err(e);
            }
        };
        let dashboard = self.session.complete(response, &self.assembler);
        to_js(dashboard)
    }

    /// Clear the pending flag after a failed request.
    #[wasm_bindgen]
    pub fn fail(&mut self) {
        self.session.fail();
        web_sys::console::error_1(&JsValue::from_str("Failed to analyze idea. Please try again."));
    }

    /// Tear down the current dashboard. Returns whether one was open.
    #[wasm_bindgen]
    pub fn close(&mut self) -> bool {
        self.session.close().is_some()
    }

    #[wasm_bindgen]
    pub fn has_dashboard(&self) -> bool {
        self.session.dashboard().is_some()
    }

    /// Plain-text export of the last loaded report.
    #[wasm_bindgen]
    pub fn export_report(&self) -> Result<String, JsValue> {
        self.session
            .export_report(today())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

impl Default for DashboardSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    const PAYLOAD: &str = r#"{
        "idea": "Bike repair subscriptions",
        "report": {"success_probability": 55, "cost_structure": "Mechanic salaries and shop rent"},
        "hallucination_report": {"overall_risk": "medium"}
    }"#;

    #[wasm_bindgen_test]
    fn test_money_and_percent() {
        assert_eq!(extract_first_money_number("about $250k"), Some(250.0));
        assert_eq!(extract_first_money_number("no numbers"), None);
        assert_eq!(to_percent(Some(0.42)), 42);
        assert_eq!(to_percent(None), 0);
    }

    #[wasm_bindgen_test]
    fn test_token_estimate() {
        assert_eq!(estimate_tokens_from_text("abcdefgh"), 2.0);
    }

    #[wasm_bindgen_test]
    fn test_build_dashboard() {
        assert!(build_dashboard(PAYLOAD).is_ok());
        assert!(build_dashboard("not json").is_err());
    }

    #[wasm_bindgen_test]
    fn test_session_lifecycle() {
        let mut session = DashboardSession::new();
        assert!(session.export_report().is_err());

        session.begin_request().unwrap();
        assert!(session.begin_request().is_err());

        session.load(PAYLOAD).unwrap();
        assert!(!session.is_pending());
        assert!(session.has_dashboard());

        assert!(session.close());
        assert!(!session.has_dashboard());
        let text = session.export_report().unwrap();
        assert!(text.contains("IDEA: Bike repair subscriptions"));
    }

    #[wasm_bindgen_test]
    fn test_download_name() {
        let name = report_download_name();
        assert!(name.starts_with("feasibility-report-"));
        assert!(name.ends_with(".txt"));
    }
}
