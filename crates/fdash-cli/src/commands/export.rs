//! Export command - write the plain-text report for a saved payload.

use std::fs;
use std::path::PathBuf;

use chrono::{Local, Utc};
use clap::Args;
use console::style;

use fdash_core::dashboard::{render_report_text, report_file_name};

use super::render::read_payload;

/// Arguments for the export command.
#[derive(Args)]
pub struct ExportArgs {
    /// Analysis payload JSON file ("-" for stdin)
    #[arg(required = true)]
    input: String,

    /// Output file (default: feasibility-report-<timestamp>.txt)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the report instead of writing a file
    #[arg(long)]
    stdout: bool,
}

pub fn run(args: ExportArgs) -> anyhow::Result<()> {
    let response = read_payload(&args.input)?;
    let text = render_report_text(&response, Local::now().date_naive());

    if args.stdout {
        println!("{}", text);
        return Ok(());
    }

    let path = args
        .output
        .unwrap_or_else(|| PathBuf::from(report_file_name(Utc::now())));
    fs::write(&path, text)?;

    println!(
        "{} Report downloaded successfully to {}",
        style("✓").green(),
        path.display()
    );

    Ok(())
}
