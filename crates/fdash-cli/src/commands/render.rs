//! Render command - build a dashboard from a saved analysis payload.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use clap::Args;
use console::style;
use tracing::{debug, info, warn};

use fdash_core::dashboard::{
    AlertBox, Dashboard, DashboardAssembler, EMPTY_DATA_POINTS_MESSAGE, EMPTY_LIST_MESSAGE,
};
use fdash_core::{AnalysisResponse, DataPoint};

use super::config;

/// Arguments for the render command.
#[derive(Args)]
pub struct RenderArgs {
    /// Analysis payload JSON file ("-" for stdin)
    #[arg(required = true)]
    input: String,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Print assembly warnings
    #[arg(long)]
    show_warnings: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// Dashboard view model as JSON
    Json,
    /// Extracted data points as CSV
    Csv,
    /// Plain text dashboard
    Text,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Text => "txt",
        }
    }
}

pub fn run(args: RenderArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = config::load(config_path)?;

    let response = read_payload(&args.input)?;
    info!("Rendering dashboard for: {}", response.idea);

    let assembler = DashboardAssembler::from_config(&config.display);
    let result = assembler.assemble(&response);
    debug!("Assembled in {}ms", result.processing_time_ms);

    if args.show_warnings && !result.warnings.is_empty() {
        eprintln!("{}", style("Warnings:").yellow());
        for warning in &result.warnings {
            eprintln!("  - {}", warning);
        }
    }

    let output = format_dashboard(&result.dashboard, args.format)?;
    write_output(args.output.as_deref(), &output)
}

/// Read an analysis payload from a file, or stdin for "-".
pub fn read_payload(input: &str) -> anyhow::Result<AnalysisResponse> {
    let json = if input == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        let path = Path::new(input);
        if !path.exists() {
            anyhow::bail!("Input file not found: {}", path.display());
        }
        fs::read_to_string(path)?
    };

    Ok(AnalysisResponse::from_json(&json)?)
}

/// Write to a file, or print to stdout.
pub fn write_output(output: Option<&Path>, content: &str) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            fs::write(path, content)?;
            println!(
                "{} Output written to {}",
                style("✓").green(),
                path.display()
            );
        }
        None => println!("{}", content),
    }
    Ok(())
}

pub fn format_dashboard(dashboard: &Dashboard, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(dashboard)?),
        OutputFormat::Csv => format_csv(dashboard),
        OutputFormat::Text => Ok(format_text(dashboard)),
    }
}

fn format_csv(dashboard: &Dashboard) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(["panel", "label", "value"])?;
    for (panel, point) in dashboard.all_data_points() {
        wtr.write_record([panel.label(), point.label.as_str(), point.value.as_str()])?;
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(dashboard: &Dashboard) -> String {
    let mut output = String::new();

    output.push_str("STARTUP FEASIBILITY DASHBOARD\n");
    output.push_str(&format!("{}\n\n", dashboard.header.title));

    for kpi in &dashboard.kpis {
        output.push_str(&format!("  {:<20} {:>10}  ({})\n", kpi.label, kpi.value, kpi.hint));
    }

    let overview = &dashboard.overview;
    section(&mut output, "Overview");
    output.push_str(&format!("Best location: {}\n", overview.best_location));
    output.push_str("Revenue vs cost (projected):\n");
    for bar in &overview.revenue_vs_cost {
        output.push_str(&format!("  {:<8} {}\n", bar.label, bar.display));
    }
    output.push_str("Cost breakdown:\n");
    for slice in &overview.cost_breakdown {
        output.push_str(&format!("  {:<12} {:>3}%\n", slice.label, slice.percent));
    }
    output.push_str("Key highlights:\n");
    bullets(&mut output, &overview.highlights);

    let market = &dashboard.market;
    section(&mut output, "Market Intelligence");
    bullets(&mut output, &market.demand_snapshot);
    data_points(&mut output, &market.data_points);
    for digest in [&market.audience, &market.competition] {
        output.push_str(&format!("{}:\n", digest.title));
        bullets(&mut output, &digest.bullets);
        alert(&mut output, &digest.signals);
    }

    let financial = &dashboard.financial;
    section(&mut output, "Financial Strategy");
    output.push_str("Revenue model:\n");
    bullets(&mut output, &financial.revenue_summary);
    output.push_str("Cost structure:\n");
    bullets(&mut output, &financial.cost_summary);
    data_points(&mut output, &financial.data_points);
    alert(&mut output, &financial.risks);

    let gtm = &dashboard.gtm;
    section(&mut output, "GTM Plan");
    for (i, phase) in gtm.timeline.iter().enumerate() {
        output.push_str(&format!("{}. {}\n", i + 1, phase.phase));
        bullets(&mut output, &phase.points);
    }
    data_points(&mut output, &gtm.data_points);

    let risk = &dashboard.risk;
    section(&mut output, "Risk & Evaluation");
    output.push_str(&format!("Risk indicator: {}\n", risk.hallucination_risk));
    output.push_str(&format!(
        "Sources used: {}  Similar ideas: {}\n",
        risk.sources_used_count, risk.similar_ideas_count
    ));
    output.push_str("Critique:\n");
    bullets(&mut output, &risk.critique);
    data_points(&mut output, &risk.validation_data_points);
    output.push_str("Similar ideas:\n");
    bullets(&mut output, &risk.similar_ideas);
    output.push_str("Sources:\n");
    bullets(&mut output, &risk.sources);

    output
}

fn section(output: &mut String, title: &str) {
    output.push_str(&format!("\n== {} ==\n", title));
}

fn bullets(output: &mut String, lines: &[String]) {
    if lines.is_empty() {
        output.push_str(&format!("  {}\n", EMPTY_LIST_MESSAGE));
        return;
    }
    for line in lines {
        output.push_str(&format!("  - {}\n", line));
    }
}

fn data_points(output: &mut String, points: &[DataPoint]) {
    output.push_str("Data points:\n");
    if points.is_empty() {
        output.push_str(&format!("  {}\n", EMPTY_DATA_POINTS_MESSAGE));
        return;
    }
    for point in points {
        output.push_str(&format!("  {}: {}\n", point.label, point.value));
    }
}

fn alert(output: &mut String, alert: &AlertBox) {
    output.push_str(&format!("{}:\n", alert.title));
    if alert.lines.is_empty() {
        warn!("alert box {} has no lines", alert.title);
    }
    for line in &alert.lines {
        output.push_str(&format!("  ! {}\n", line));
    }
}
