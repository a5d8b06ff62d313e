//! The current analysis session.
//!
//! Holds the last analysis response (for export) and the dashboard rendered
//! from it. At most one request may be pending, and a previous dashboard is
//! always torn down before a new one is stored.

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::dashboard::{render_report_text, Dashboard, DashboardAssembler};
use crate::error::SessionError;
use crate::models::payload::AnalysisResponse;

/// Scoped replacement for a global "current report".
#[derive(Debug, Default)]
pub struct AnalysisSession {
    report: Option<AnalysisResponse>,
    dashboard: Option<Dashboard>,
    pending: bool,
}

impl AnalysisSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a request as started. Fails if one is already pending.
    pub fn begin_request(&mut self) -> Result<(), SessionError> {
        if self.pending {
            warn!("ignoring submit while a request is in flight");
            return Err(SessionError::RequestInFlight);
        }
        self.pending = true;
        Ok(())
    }

    /// Whether a request is pending.
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Store a response and render it, replacing any previous dashboard.
    pub fn complete(
        &mut self,
        response: AnalysisResponse,
        assembler: &DashboardAssembler,
    ) -> &Dashboard {
        self.pending = false;
        self.close();

        let result = assembler.assemble(&response);
        for warning in &result.warnings {
            debug!("{}", warning);
        }
        self.report = Some(response);
        self.dashboard.insert(result.dashboard)
    }

    /// Clear the pending flag after a failed request.
    pub fn fail(&mut self) {
        self.pending = false;
    }

    /// Tear down the rendered dashboard. The report stays available for export.
    pub fn close(&mut self) -> Option<Dashboard> {
        let previous = self.dashboard.take();
        if previous.is_some() {
            debug!("tearing down previous dashboard");
        }
        previous
    }

    /// The currently rendered dashboard.
    pub fn dashboard(&self) -> Option<&Dashboard> {
        self.dashboard.as_ref()
    }

    /// The last loaded analysis response.
    pub fn report(&self) -> Option<&AnalysisResponse> {
        self.report.as_ref()
    }

    /// Plain-text export of the last loaded report.
    pub fn export_report(&self, generated: NaiveDate) -> Result<String, SessionError> {
        let report = self.report.as_ref().ok_or(SessionError::NoReport)?;
        Ok(render_report_text(report, generated))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(idea: &str) -> AnalysisResponse {
        AnalysisResponse {
            idea: idea.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_double_submit_is_rejected() {
        let mut session = AnalysisSession::new();
        session.begin_request().unwrap();
        assert_eq!(session.begin_request(), Err(SessionError::RequestInFlight));

        session.fail();
        assert!(!session.is_pending());
        assert!(session.begin_request().is_ok());
    }

    #[test]
    fn test_complete_replaces_previous_dashboard() {
        let mut session = AnalysisSession::new();
        let assembler = DashboardAssembler::new();

        session.begin_request().unwrap();
        session.complete(response("First idea"), &assembler);
        session.begin_request().unwrap();
        let title = session.complete(response("Second idea"), &assembler).header.title.clone();

        assert_eq!(title, "Second idea");
        assert_eq!(session.report().unwrap().idea, "Second idea");
        assert!(!session.is_pending());
    }

    #[test]
    fn test_close_keeps_report_for_export() {
        let mut session = AnalysisSession::new();
        session.complete(response("Idea to export"), &DashboardAssembler::new());

        assert!(session.close().is_some());
        assert!(session.dashboard().is_none());
        assert!(session.close().is_none());

        let date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let text = session.export_report(date).unwrap();
        assert!(text.contains("IDEA: Idea to export"));
    }

    #[test]
    fn test_export_without_report() {
        let session = AnalysisSession::new();
        let date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        assert_eq!(session.export_report(date), Err(SessionError::NoReport));
    }
}
