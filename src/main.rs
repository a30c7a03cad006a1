//! FolderSleuth — folder size breakdown with live progress.
//!
//! Thin binary entry point. Scanning lives in `foldersleuth-core`, the
//! reporting side in `foldersleuth-report`.

use anyhow::{bail, Context};
use clap::{Parser, ValueEnum};
use foldersleuth_report::export::{to_csv, to_json};
use foldersleuth_report::state::TOP_ENTRIES;
use foldersleuth_report::{render, LiveProgress, ReportState, TerminalReporter};
use std::io::IsTerminal;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Debug, Parser)]
#[command(name = "foldersleuth", version, about = "Rank the immediate subdirectories of a folder by size")]
struct Args {
    /// Directory whose immediate subdirectories are sized.
    path: PathBuf,

    /// Output format for the final breakdown.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Progress refresh interval in milliseconds (at most 250).
    #[arg(long, default_value_t = 100)]
    interval_ms: u64,

    /// Number of entries in the bar chart.
    #[arg(long, default_value_t = TOP_ENTRIES)]
    top: usize,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Logs go to stderr so exported output on stdout stays clean.
    tracing_subscriber::fmt()
        .with_max_level(if args.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("FolderSleuth starting");

    let mut state = ReportState::new();
    let pump = state
        .start_scan(args.path.clone())
        .context("could not start scan")?;
    let mut pump = pump.with_interval(Duration::from_millis(args.interval_ms));

    let bar = if std::io::stderr().is_terminal() {
        LiveProgress::new()
    } else {
        LiveProgress::hidden()
    };
    let mut reporter = TerminalReporter::new(state, bar);

    let finished = pump.run_until(&mut reporter, |r| r.is_finished());
    let state = reporter.state;

    if let Some(message) = &state.error {
        bail!("{message}");
    }
    if !finished {
        bail!("scan of {} ended without a result", args.path.display());
    }

    match args.format {
        OutputFormat::Table => {
            println!("{}", render::table(&state.rows()));
            println!("Top {}:", args.top);
            println!("{}", render::bar_chart(&state.top(args.top)));
            println!("{}", render::summary(&state));
        }
        OutputFormat::Json => println!("{}", to_json(&state)?),
        OutputFormat::Csv => print!("{}", to_csv(&state)?),
    }

    Ok(())
}
