//! Analyze command - submit an idea and render the returned report.

use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use chrono::Local;
use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use fdash_core::{AnalysisRequest, AnalysisSession, DashboardAssembler};

use super::config;
use super::render::{format_dashboard, write_output, OutputFormat};
use crate::client::AnalysisClient;

/// Pipeline stages shown while waiting for the service.
const STAGES: [&str; 4] = [
    "Retrieving similar ideas...",
    "Researching market...",
    "Drafting strategy...",
    "Evaluating report...",
];

/// Arguments for the analyze command.
#[derive(Args)]
pub struct AnalyzeArgs {
    /// Startup idea description
    #[arg(short, long)]
    idea: String,

    /// Industry sector
    #[arg(long)]
    industry: Option<String>,

    /// Target market or geography
    #[arg(short, long)]
    market: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Save the raw analysis payload as JSON
    #[arg(long)]
    save_payload: Option<PathBuf>,

    /// Also export the plain-text report
    #[arg(long)]
    export: Option<PathBuf>,
}

pub async fn run(args: AnalyzeArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = config::load(config_path)?;

    let request = AnalysisRequest::new(
        &args.idea,
        args.industry.as_deref(),
        args.market.as_deref(),
        &config.api,
    )?;

    let client = AnalysisClient::new(&config.api)?;
    let assembler = DashboardAssembler::from_config(&config.display);
    let mut session = AnalysisSession::new();

    session.begin_request()?;

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .unwrap(),
    );
    pb.enable_steady_tick(Duration::from_millis(120));
    pb.set_message(STAGES[0]);

    let request_future = client.analyze(&request);
    tokio::pin!(request_future);
    let mut stage = 0;
    let mut ticker = tokio::time::interval(Duration::from_secs(1));
    ticker.tick().await;

    let outcome = loop {
        tokio::select! {
            result = &mut request_future => break result,
            _ = ticker.tick() => {
                if stage + 1 < STAGES.len() {
                    stage += 1;
                    pb.set_message(STAGES[stage]);
                }
            }
        }
    };
    pb.finish_and_clear();

    let response = match outcome {
        Ok(response) => response,
        Err(e) => {
            session.fail();
            eprintln!(
                "{} Failed to analyze idea. Please try again.",
                style("✗").red()
            );
            return Err(e);
        }
    };

    if let Some(path) = &args.save_payload {
        fs::write(path, serde_json::to_string_pretty(&response)?)?;
        debug!("Saved payload to {}", path.display());
    }

    let dashboard = session.complete(response, &assembler);
    let output = format_dashboard(dashboard, args.format)?;
    write_output(args.output.as_deref(), &output)?;

    if let Some(path) = &args.export {
        let text = session.export_report(Local::now().date_naive())?;
        fs::write(path, text)?;
        println!(
            "{} Report downloaded to {}",
            style("✓").green(),
            path.display()
        );
    }

    debug!("Total time: {:?}", start.elapsed());

    Ok(())
}
