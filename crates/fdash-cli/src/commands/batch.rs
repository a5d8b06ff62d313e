//! Batch command - render many saved analysis payloads.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, error, warn};

use fdash_core::dashboard::{AssemblyResult, DashboardAssembler};

use super::config;
use super::render::{format_dashboard, read_payload, OutputFormat};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Payload files or glob pattern
    #[arg(required = true)]
    input: String,

    /// Output directory
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output format for each file
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Also generate a summary CSV
    #[arg(long)]
    summary: bool,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,
}

/// Outcome of rendering a single payload.
struct RenderOutcome {
    path: PathBuf,
    result: Option<AssemblyResult>,
    error: Option<String>,
}

pub fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = config::load(config_path)?;

    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| {
            let ext = p.extension().and_then(|e| e.to_str()).unwrap_or("");
            ext.eq_ignore_ascii_case("json")
        })
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} payloads to render",
        style("ℹ").blue(),
        files.len()
    );

    if let Some(ref output_dir) = args.output_dir {
        fs::create_dir_all(output_dir)?;
    }

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")
            .unwrap()
            .progress_chars("=>-"),
    );

    let assembler = DashboardAssembler::from_config(&config.display);
    let mut outcomes = Vec::with_capacity(files.len());

    for path in files {
        match read_payload(&path.to_string_lossy()) {
            Ok(response) => outcomes.push(RenderOutcome {
                path,
                result: Some(assembler.assemble(&response)),
                error: None,
            }),
            Err(e) => {
                let error_msg = e.to_string();
                if !args.continue_on_error {
                    error!("Failed to render {}: {}", path.display(), error_msg);
                    anyhow::bail!("Rendering failed: {}", error_msg);
                }
                warn!("Failed to render {}: {}", path.display(), error_msg);
                outcomes.push(RenderOutcome {
                    path,
                    result: None,
                    error: Some(error_msg),
                });
            }
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete");

    if let Some(ref output_dir) = args.output_dir {
        for outcome in &outcomes {
            let Some(result) = &outcome.result else {
                continue;
            };
            let stem = outcome
                .path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("dashboard");
            let output_path = output_dir.join(format!("{}.{}", stem, args.format.extension()));
            fs::write(&output_path, format_dashboard(&result.dashboard, args.format)?)?;
            debug!("Wrote {}", output_path.display());
        }

        if args.summary {
            write_summary(&output_dir.join("summary.csv"), &outcomes)?;
        }
    } else if args.summary {
        write_summary(Path::new("summary.csv"), &outcomes)?;
    }

    let failed = outcomes.iter().filter(|o| o.error.is_some()).count();
    let succeeded = outcomes.len() - failed;

    println!();
    println!(
        "{} Rendered {} payloads in {:.2}s",
        style("✓").green(),
        succeeded,
        start.elapsed().as_secs_f64()
    );
    if failed > 0 {
        println!("{} {} payloads failed", style("✗").red(), failed);
        for outcome in outcomes.iter().filter(|o| o.error.is_some()) {
            println!(
                "  {} {}",
                outcome.path.display(),
                outcome.error.as_deref().unwrap_or("")
            );
        }
    }

    Ok(())
}

fn write_summary(path: &Path, outcomes: &[RenderOutcome]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "file",
        "idea",
        "success_probability",
        "confidence",
        "hallucination_risk",
        "data_points",
        "status",
        "error",
    ])?;

    for outcome in outcomes {
        let filename = outcome
            .path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("");

        match &outcome.result {
            Some(result) => {
                let dashboard = &result.dashboard;
                let kpi = |i: usize| {
                    dashboard
                        .kpis
                        .get(i)
                        .map(|k| k.value.clone())
                        .unwrap_or_default()
                };
                wtr.write_record([
                    filename,
                    dashboard.header.title.as_str(),
                    kpi(0).as_str(),
                    kpi(2).as_str(),
                    kpi(1).as_str(),
                    dashboard.all_data_points().len().to_string().as_str(),
                    "success",
                    "",
                ])?;
            }
            None => {
                wtr.write_record([
                    filename,
                    "",
                    "",
                    "",
                    "",
                    "",
                    "error",
                    outcome.error.as_deref().unwrap_or(""),
                ])?;
            }
        }
    }

    wtr.flush()?;
    println!("{} Summary written to {}", style("✓").green(), path.display());
    Ok(())
}
