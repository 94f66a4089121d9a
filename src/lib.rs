//! Pagelint: layout consistency checks for digitized document pages.
//!
//! Pagelint audits the page layouts produced by a structural-markup
//! pipeline (polygonal text regions plus per-line baselines and
//! transcriptions) and flags two kinds of inconsistency:
//!
//! - **Crossings**: a text line whose physical trace enters a region other
//!   than the one it is filed under — a sign of mis-segmentation.
//! - **Duplicates**: transcribed sentences that repeat on the same page
//!   after normalization — a sign of double transcription.
//!
//! # Modules
//!
//! - [`page`]: the page model (Region, TextLine, Point, JSON I/O)
//! - [`geometry`]: point-in-polygon and segment/edge intersection primitives
//! - [`analysis`]: the detectors, finding types, and per-page entry point
//! - [`error`]: error types for pagelint operations

pub mod analysis;
pub mod error;
pub mod geometry;
pub mod page;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use error::PagelintError;

/// The pagelint CLI application.
#[derive(Parser)]
#[command(name = "pagelint")]
#[command(version, author, about)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Analyze one or more pages for layout inconsistencies.
    Analyze(AnalyzeArgs),
}

/// Arguments for the analyze subcommand.
#[derive(clap::Args)]
struct AnalyzeArgs {
    /// Page JSON files to analyze.
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Output format for the report ('text' or 'json').
    #[arg(long, default_value = "text")]
    output: String,

    /// Exit non-zero if any finding is produced.
    #[arg(long)]
    strict: bool,
}

/// Run the pagelint CLI.
///
/// This is the main entry point for the CLI, called from `main.rs`.
pub fn run() -> Result<(), PagelintError> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Analyze(args)) => run_analyze(args),
        None => {
            // No subcommand: just print a usage hint and exit successfully
            println!("pagelint {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Layout consistency checker for digitized document pages.");
            println!();
            println!("Run 'pagelint --help' for usage information.");
            Ok(())
        }
    }
}

/// Execute the analyze subcommand.
///
/// Pages are independent: a page that fails to load is reported on stderr
/// and skipped, and the remaining pages still run. Only when no page at all
/// could be analyzed does the command fail outright.
fn run_analyze(args: AnalyzeArgs) -> Result<(), PagelintError> {
    let multiple = args.inputs.len() > 1;
    let mut analyzed = 0usize;
    let mut total_crossings = 0usize;
    let mut total_duplicates = 0usize;

    for input in &args.inputs {
        let page = match page::io_json::read_page_json(input) {
            Ok(page) => page,
            Err(err) => {
                eprintln!("pagelint: skipping {}: {}", input.display(), err);
                continue;
            }
        };

        let report = analysis::analyze_page(&page);
        analyzed += 1;
        total_crossings += report.crossing_count();
        total_duplicates += report.duplicate_count();

        match args.output.as_str() {
            "json" => {
                let json = serde_json::to_string_pretty(&serde_json::json!({
                    "page": page.name,
                    "crossing_count": report.crossing_count(),
                    "duplicate_count": report.duplicate_count(),
                    "crossings": report.crossings,
                    "duplicates": report.duplicates,
                }))?;
                println!("{}", json);
            }
            _ => {
                // Default text output
                if multiple {
                    println!("== {}", input.display());
                }
                print!("{}", report);
            }
        }
    }

    if analyzed == 0 {
        return Err(PagelintError::NoPagesAnalyzed);
    }

    if multiple && args.output != "json" {
        println!();
        println!(
            "Total: {} crossing(s), {} duplicate(s) across {} page(s)",
            total_crossings, total_duplicates, analyzed
        );
    }

    if args.strict && (total_crossings > 0 || total_duplicates > 0) {
        return Err(PagelintError::FindingsDetected {
            crossing_count: total_crossings,
            duplicate_count: total_duplicates,
        });
    }

    Ok(())
}
