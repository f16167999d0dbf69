use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;

use anyhow::{Context, Result, anyhow};
use clap::{Args, Parser, Subcommand};
use tourism_tax_to_csv::{
    BatchReport, DocumentExtraction, ExtractOptions, ExtractWarning, YearSet,
    extract_directory_to_csv, extract_pdf_to_csv,
};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "tourism2csv",
    version,
    about = "Extract county tourism tax tables from annual sales tax PDFs into CSV"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Process a directory of annual report PDFs into one combined CSV.
    Batch(BatchArgs),
    /// Extract a single report PDF for one year.
    Extract(ExtractArgs),
}

#[derive(Debug, Args)]
struct BatchArgs {
    /// Directory containing annual report PDFs.
    #[arg(short, long, default_value = "data/raw")]
    input_dir: PathBuf,

    /// Output CSV path.
    #[arg(short, long, default_value = "data/processed/tourism_tax.csv")]
    output: PathBuf,

    /// County name to locate in report tables.
    #[arg(long, default_value = "St. Louis")]
    county: String,

    /// Recognized report years like 2019-2024 or 2019,2021.
    #[arg(long, default_value = "2019-2024")]
    years: String,

    /// Output delimiter character.
    #[arg(long, default_value = ",")]
    delimiter: char,

    /// Write a JSON run report to this path.
    #[arg(long)]
    report_json: Option<PathBuf>,

    /// Enable verbose warning output.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Args)]
struct ExtractArgs {
    /// Input PDF path.
    #[arg(short, long)]
    input: PathBuf,

    /// Report year recorded in the output row.
    #[arg(long)]
    year: i32,

    /// Output CSV path.
    #[arg(short, long)]
    output: PathBuf,

    /// County name to locate in report tables.
    #[arg(long, default_value = "St. Louis")]
    county: String,

    /// Output delimiter character.
    #[arg(long, default_value = ",")]
    delimiter: char,

    /// Enable verbose warning output.
    #[arg(short, long)]
    verbose: bool,
}

fn parse_options(county: &str, years: Option<&str>, delimiter: char) -> Result<ExtractOptions> {
    if !delimiter.is_ascii() {
        anyhow::bail!("delimiter must be a single ASCII character");
    }

    let years = years
        .map(YearSet::from_str)
        .transpose()
        .map_err(|error| anyhow!("invalid year set: {error}"))
        .context("failed to parse --years")?
        .unwrap_or_default();

    Ok(ExtractOptions {
        county: county.to_string(),
        years,
        delimiter: delimiter as u8,
    })
}

fn log_warnings(warnings: &[ExtractWarning], verbose: bool) {
    if warnings.is_empty() {
        return;
    }

    eprintln!("warning: {} issue(s) detected", warnings.len());
    if verbose {
        for warning in warnings {
            eprintln!(
                "  - {:?} file={:?} year={:?} page={:?}: {}",
                warning.code, warning.file, warning.year, warning.page, warning.message
            );
        }
    }
}

fn run_batch_command(args: &BatchArgs) -> Result<BatchReport> {
    let options = parse_options(&args.county, Some(&args.years), args.delimiter)?;
    let report = extract_directory_to_csv(&args.input_dir, &args.output, &options)
        .with_context(|| {
            format!(
                "failed to process reports in '{}'",
                args.input_dir.display()
            )
        })?;

    if let Some(path) = &args.report_json {
        let json =
            serde_json::to_string_pretty(&report).context("failed to serialize run report")?;
        std::fs::write(path, json)
            .with_context(|| format!("failed to write run report to '{}'", path.display()))?;
    }

    Ok(report)
}

fn run_extract_command(args: &ExtractArgs) -> Result<DocumentExtraction> {
    let options = parse_options(&args.county, None, args.delimiter)?;
    extract_pdf_to_csv(&args.input, &args.output, args.year, &options)
        .with_context(|| format!("failed to extract '{}'", args.input.display()))
}

fn main() -> ExitCode {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("tourism_tax_to_csv=info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Batch(args) => match run_batch_command(&args) {
            Ok(report) => {
                log_warnings(&report.warnings, args.verbose);
                if report.output_written {
                    ExitCode::SUCCESS
                } else {
                    ExitCode::from(2)
                }
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                ExitCode::from(1)
            }
        },
        Commands::Extract(args) => match run_extract_command(&args) {
            Ok(extraction) => {
                log_warnings(&extraction.warnings, args.verbose);
                if extraction.record.data_found {
                    ExitCode::SUCCESS
                } else {
                    ExitCode::from(2)
                }
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                ExitCode::from(1)
            }
        },
    }
}
