//! Cuenta CLI binary.
//!
//! Provides a command-line interface for the cuenta fundamentals dashboard.

mod cmd;
mod render;

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use cuenta::DisplayMode;
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cuenta")]
#[command(about = "Fundamentals dashboard for publicly traded companies", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Core financial ratios with prior-year deltas
    Ratios(ViewArgs),

    /// Year-over-year growth of revenue, net income, EPS and free cash flow
    Growth(ViewArgs),

    /// Valuation multiples
    Valuation(ViewArgs),

    /// Stock price performance statistics
    Performance(ViewArgs),

    /// Cash flow and efficiency tables for up to four companies
    Efficiency(ViewArgs),

    /// List display modes and their metrics
    Modes,
}

/// Arguments shared by every display mode.
#[derive(Args, Debug, Clone)]
pub(crate) struct ViewArgs {
    /// Ticker symbol to analyze
    pub(crate) ticker: String,

    /// Ticker symbol to compare against
    #[arg(short, long)]
    pub(crate) compare: Option<String>,

    /// Additional tickers (efficiency mode only)
    #[arg(short, long = "with", value_delimiter = ',')]
    pub(crate) with: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub(crate) format: OutputFormat,

    /// Annual risk-free rate for the Sharpe ratio
    #[arg(long)]
    pub(crate) risk_free_rate: Option<f64>,

    /// Calendar days of price history
    #[arg(long)]
    pub(crate) days: Option<u32>,
}

/// How a rendered view is printed.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OutputFormat {
    /// Human-readable tables
    Text,
    /// Pretty-printed JSON
    Json,
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Ratios(args) => cmd::view::show(DisplayMode::Ratios, &args).await?,
        Commands::Growth(args) => cmd::view::show(DisplayMode::Growth, &args).await?,
        Commands::Valuation(args) => cmd::view::show(DisplayMode::Valuation, &args).await?,
        Commands::Performance(args) => cmd::view::show(DisplayMode::Performance, &args).await?,
        Commands::Efficiency(args) => cmd::view::show(DisplayMode::Efficiency, &args).await?,
        Commands::Modes => cmd::modes::list_modes(),
    }

    Ok(())
}
