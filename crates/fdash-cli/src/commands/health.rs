//! Health command - check the analysis service.

use console::style;

use super::config;
use crate::client::{AnalysisClient, ServiceStatus};

pub async fn run(config_path: Option<&str>) -> anyhow::Result<()> {
    let config = config::load(config_path)?;
    let client = AnalysisClient::new(&config.api)?;

    match client.health().await {
        ServiceStatus::Online => {
            println!("{} API is online ({})", style("✓").green(), config.api.base_url);
            Ok(())
        }
        ServiceStatus::Degraded(status) => {
            println!(
                "{} API returned non-OK status {}",
                style("⚠").yellow(),
                status
            );
            anyhow::bail!("analysis service is unhealthy")
        }
        ServiceStatus::Offline(reason) => {
            println!(
                "{} API is offline. Make sure the backend is running at {}.",
                style("⚠").yellow(),
                config.api.base_url
            );
            anyhow::bail!("analysis service unreachable: {}", reason)
        }
    }
}
