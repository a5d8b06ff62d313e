//! HTTP client for the analysis service.

use std::time::Duration;

use anyhow::Context;
use tracing::{debug, info};

use fdash_core::models::config::ApiConfig;
use fdash_core::{AnalysisRequest, AnalysisResponse};

/// Reachability of the analysis service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceStatus {
    Online,
    /// Reachable but answered with a non-success status.
    Degraded(u16),
    Offline(String),
}

/// Thin client over the analysis service endpoints.
pub struct AnalysisClient {
    http: reqwest::Client,
    base_url: String,
}

impl AnalysisClient {
    pub fn new(config: &ApiConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Submit an idea for analysis. Not retried.
    pub async fn analyze(&self, request: &AnalysisRequest) -> anyhow::Result<AnalysisResponse> {
        let url = format!("{}/api/analyze", self.base_url);
        info!("Submitting idea to {}", url);

        let response = self.http.post(&url).json(request).send().await?;
        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("HTTP error! status: {}", status.as_u16());
        }

        let body = response.text().await?;
        debug!("Received {} bytes", body.len());
        Ok(AnalysisResponse::from_json(&body)?)
    }

    /// Probe the health endpoint.
    pub async fn health(&self) -> ServiceStatus {
        let url = format!("{}/health", self.base_url);
        match self.http.get(&url).send().await {
            Ok(response) if response.status().is_success() => ServiceStatus::Online,
            Ok(response) => ServiceStatus::Degraded(response.status().as_u16()),
            Err(e) => ServiceStatus::Offline(e.to_string()),
        }
    }
}
