//! CLI for rendering startup feasibility dashboards.

mod client;
mod commands;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use commands::{analyze, batch, config, export, health, render};

/// Feasibility dashboard - turn AI-generated startup reports into structured dashboards
#[derive(Parser)]
#[command(name = "fdash")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a dashboard from a saved analysis payload
    Render(render::RenderArgs),

    /// Submit an idea to the analysis service and render the result
    Analyze(analyze::AnalyzeArgs),

    /// Export a saved analysis payload as a plain-text report
    Export(export::ExportArgs),

    /// Render many analysis payloads
    Batch(batch::BatchArgs),

    /// Check whether the analysis service is reachable
    Health,

    /// Manage configuration
    Config(config::ConfigArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let config_path = cli.config.as_deref();
    match cli.command {
        Commands::Render(args) => render::run(args, config_path),
        Commands::Analyze(args) => analyze::run(args, config_path).await,
        Commands::Export(args) => export::run(args),
        Commands::Batch(args) => batch::run(args, config_path),
        Commands::Health => health::run(config_path).await,
        Commands::Config(args) => config::run(args, config_path),
    }
}
