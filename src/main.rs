//! Personal Finance Engine CLI
//!
//! Runs calculator requests from JSON and prints results, report summaries
//! or the active assumption tables.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use personal_finance_engine::assumptions::loader::DEFAULT_ASSUMPTIONS_PATH;
use personal_finance_engine::{CalculationRequest, Chart, FinanceEngine, ReportFormat};
use serde_json::json;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "finplan", version, about = "Stateless personal finance calculators")]
struct Cli {
    /// Directory with currency_symbols.csv, tax_rates.csv and planning_constants.csv
    #[arg(long, global = true, default_value = DEFAULT_ASSUMPTIONS_PATH)]
    assumptions: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a single tagged JSON request
    Calc {
        /// Request file, or `-` for stdin
        #[arg(short, long, default_value = "-")]
        input: String,

        /// Print the report summary instead of the raw result
        #[arg(long)]
        report: bool,

        /// Report artifact format (pdf, jpg)
        #[arg(long, default_value = "pdf")]
        format: String,

        /// Write chart series to this CSV file
        #[arg(long)]
        series_csv: Option<PathBuf>,
    },
    /// Run a JSON array of tagged requests in parallel
    Batch {
        /// Requests file, or `-` for stdin
        #[arg(short, long, default_value = "-")]
        input: String,
    },
    /// Print the active assumption tables
    Tables,
}

fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("reading request from stdin")?;
        Ok(text)
    } else {
        fs::read_to_string(input).with_context(|| format!("reading {}", input))
    }
}

/// Missing assumptions directory means built-in tables only
fn load_engine(dir: &Path) -> Result<FinanceEngine> {
    if !dir.exists() {
        log::debug!("{} not found, using built-in assumptions", dir.display());
        return Ok(FinanceEngine::new());
    }
    FinanceEngine::from_csv_path(dir)
        .with_context(|| format!("loading assumptions from {}", dir.display()))
}

fn write_series_csv(chart: &Chart, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;
    writer.write_record(["series", "period", "value"])?;
    for series in &chart.series {
        for point in &series.points {
            writer.write_record([
                series.name.clone(),
                point.period.to_string(),
                format!("{:.2}", point.value),
            ])?;
        }
    }
    writer.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let engine = load_engine(&cli.assumptions)?;

    match cli.command {
        Command::Calc { input, report, format, series_csv } => {
            let text = read_input(&input)?;
            let request: CalculationRequest = serde_json::from_str(&text)
                .with_context(|| format!("parsing request from {}", input))?;

            let failed = || format!("{} calculation failed", request.calculator());
            let (result, report) = if report {
                let (result, report) = engine.run_with_report(&request).with_context(failed)?;
                (result, Some(report))
            } else {
                (engine.run(&request).with_context(failed)?, None)
            };

            if let Some(path) = &series_csv {
                write_series_csv(result.chart(), path)?;
                log::info!("wrote chart series to {}", path.display());
            }

            if let Some(report) = report {
                let format = ReportFormat::parse(&format);
                println!("{}", report.title);
                println!("{}", "=".repeat(report.title.chars().count()));
                println!("{}", report.summary_text());
                println!();
                println!("attachment: {} ({})", report.attachment_name(format), format.media_type());
            } else {
                println!("{}", serde_json::to_string_pretty(&result)?);
            }
        }
        Command::Batch { input } => {
            let text = read_input(&input)?;
            let requests: Vec<CalculationRequest> = serde_json::from_str(&text)
                .with_context(|| format!("parsing request array from {}", input))?;

            let outcomes: Vec<_> = engine
                .run_batch(&requests)
                .into_iter()
                .map(|outcome| match outcome {
                    Ok(result) => json!({ "ok": result }),
                    Err(err) => json!({ "error": err.to_string() }),
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&outcomes)?);
        }
        Command::Tables => {
            let assumptions = engine.assumptions();
            println!("Currency symbols (fallback {}):", assumptions.currencies.fallback());
            for (code, symbol) in assumptions.currencies.entries() {
                println!("  {:<6} {}", code, symbol);
            }
            println!("Tax rates (fallback {:.3}):", assumptions.tax_rates.fallback());
            for (country, rate) in assumptions.tax_rates.entries() {
                println!("  {:<12} {:.3}", country, rate);
            }
            println!("Planning constants:");
            for (name, value) in assumptions.planning.entries() {
                println!("  {:<22} {}", name, value);
            }
        }
    }

    Ok(())
}
