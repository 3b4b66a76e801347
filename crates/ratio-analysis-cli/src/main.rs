mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;
use tracing_subscriber::EnvFilter;

use commands::ratios::{DupontArgs, RatiosArgs, StatementsArgs, TrendArgs, TrendsArgs};
use commands::report::ReportArgs;
use commands::risk::{RiskMatrixArgs, RisksArgs};

/// Financial ratio, trend and risk analysis for a two-year case
#[derive(Parser)]
#[command(
    name = "ratios",
    version,
    about = "Financial ratio, trend and risk analysis for a two-year case",
    long_about = "A CLI over the ratio-analysis engine with decimal precision. \
                  Computes structure, liquidity, profitability and debt-service ratios, \
                  year-over-year trends, DuPont decomposition, comparative statements \
                  and the risk catalogue. Uses the built-in DIA 2016/2017 case unless \
                  a dataset file is given."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,

    /// Log at debug level (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the fifteen financial ratios for a year
    Ratios(RatiosArgs),
    /// Year-over-year change of a single ratio
    Trend(TrendArgs),
    /// Year-over-year change of every ratio
    Trends(TrendsArgs),
    /// DuPont decomposition of return on equity
    Dupont(DupontArgs),
    /// Comparative balance sheet and income statement
    Statements(StatementsArgs),
    /// Evaluate the risk catalogue
    Risks(RisksArgs),
    /// Impact x probability risk matrix grid
    RiskMatrix(RiskMatrixArgs),
    /// Full two-year analysis report
    Report(ReportArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Ratios(args) => commands::ratios::run_ratios(args),
        Commands::Trend(args) => commands::ratios::run_trend(args),
        Commands::Trends(args) => commands::ratios::run_trends(args),
        Commands::Dupont(args) => commands::ratios::run_dupont(args),
        Commands::Statements(args) => commands::ratios::run_statements(args),
        Commands::Risks(args) => commands::risk::run_risks(args),
        Commands::RiskMatrix(args) => commands::risk::run_risk_matrix(args),
        Commands::Report(args) => commands::report::run_report(args),
        Commands::Version => {
            println!("ratios {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
