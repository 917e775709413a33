//! CLI entry point for the stress-check group analysis.
//!
//! Reads one survey export, computes the cohort's subscale averages and
//! health-risk indices, and writes a single-row summary report.

use anyhow::Result;
use clap::Parser;
use stress_check::analyzers::analyzer::run;
use stress_check::config::{AnalysisConfig, ParsePolicy, ReportLayout};
use stress_check::output::{DEFAULT_REPORT_FILE, open_log_file, print_json, print_pretty};
use tracing::{error, info};
use tracing_subscriber::{
    EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "stress_check")]
#[command(about = "Group analysis of a stress-check survey export", long_about = None)]
struct Cli {
    /// Survey export to analyze
    #[arg(value_name = "INPUT")]
    input: String,

    /// Report file to write
    #[arg(short, long, default_value = DEFAULT_REPORT_FILE)]
    output: String,

    /// File that status lines are appended to
    #[arg(long, env = "LOG_FILE_PATH", default_value = "log.txt")]
    log_file: String,

    /// Text encoding of both input and report
    #[arg(long, env = "STRESS_CHECK_ENCODING", default_value = "Shift_JIS")]
    encoding: String,

    /// Handling of score cells that are not integers
    #[arg(long, value_enum, default_value_t = ParsePolicy::CoerceZero)]
    parse_policy: ParsePolicy,

    /// Which values the data row carries
    #[arg(long, value_enum, default_value_t = ReportLayout::Full)]
    layout: ReportLayout,

    /// JSON file overriding the risk model coefficients
    #[arg(long, env = "STRESS_CHECK_COEFFICIENTS")]
    coefficients: Option<String>,

    /// Also log the summary as JSON
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    let cli = Cli::parse();

    // Logging setup: colored stderr + appended plain-text log file
    let log_file = open_log_file(&cli.log_file)?;
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(log_file);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(
            EnvFilter::try_from_env("RUST_LOG").unwrap_or_else(|_| EnvFilter::new("info")),
        );

    let file_layer = fmt::layer()
        .with_ansi(false)
        .with_writer(non_blocking_file)
        .with_filter(
            EnvFilter::try_from_env("RUST_LOG_FILE").unwrap_or_else(|_| EnvFilter::new("debug")),
        );

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(file_layer)
        .init();

    info!(input = %cli.input, "集団分析 Start");

    let result = AnalysisConfig::new(
        Some(cli.encoding.as_str()),
        cli.parse_policy,
        cli.layout,
        cli.coefficients.as_deref(),
    )
    .and_then(|config| run(&cli.input, &cli.output, &config));

    match result {
        Ok(summary) => {
            print_pretty(&summary);
            if cli.json {
                print_json(&summary)?;
            }
            info!(output = %cli.output, "集団分析 Finish");
            Ok(())
        }
        Err(e) => {
            error!(error = %format!("{e:#}"), "集団分析 failed");
            Err(e)
        }
    }
}
