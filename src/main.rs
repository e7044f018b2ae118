//! PerfDiff CLI
//!
//! Compares two exported profiling captures of the same workload and prints
//! the symbols most responsible for the performance delta.

use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use std::path::PathBuf;

use perfdiff::commands::{execute_diff, validate_args, DiffArgs};
use perfdiff::parser::ProcessSelector;
use perfdiff::utils::config::{DEFAULT_PROCESS_NAME, DEFAULT_TOP_N};

/// PerfDiff - rank overweight symbols between two profiling captures
#[derive(Parser, Debug)]
#[command(name = "perfdiff")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Exported capture of the run under investigation
    source: PathBuf,

    /// Exported capture of the reference run
    baseline: PathBuf,

    /// Symbol store (JSON file or directory of JSON files)
    symbol_store: PathBuf,

    /// Process to analyse, by name or pid
    #[arg(short, long, env = "PERFDIFF_PROCESS", default_value = DEFAULT_PROCESS_NAME)]
    process: String,

    /// Number of ranked symbols to print
    #[arg(short, long, default_value_t = DEFAULT_TOP_N)]
    top: usize,

    /// Output path for the JSON diff report (optional)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let process: ProcessSelector = cli.process.parse()?;

    let args = DiffArgs {
        source: cli.source,
        baseline: cli.baseline,
        symbol_store: cli.symbol_store,
        process,
        top_n: cli.top,
        output: cli.output,
    };

    // Validate args first
    validate_args(&args)?;

    execute_diff(args)
}
