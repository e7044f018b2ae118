//! Diff command implementation.
//!
//! The diff command:
//! 1. Loads the symbol store
//! 2. Reads the call tree of the process of interest from both captures
//! 3. Aggregates each call tree
//! 4. Computes and ranks overweight symbols
//! 5. Writes the JSON report (optional) and prints the top results

use super::models::DiffArgs;
use crate::aggregator::{build_aggregate, TraceAggregate};
use crate::diff::{generate_report, render_terminal_report, DiffReport, TraceMetadata};
use crate::output::write_report;
use crate::parser::{CallTreeProvider, JsonCaptureProvider, SymbolStore};
use crate::utils::config::MAX_TOP_N;
use anyhow::{Context, Result};
use colored::*;
use log::{info, warn};
use std::path::Path;
use std::time::Instant;

/// Execute the diff command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Unreadable captures or symbol store
/// * Process not found in a capture
/// * Empty call tree on either side
/// * Baseline with zero total cost
/// * File write errors
pub fn execute_diff(args: DiffArgs) -> Result<()> {
    let start_time = Instant::now();

    info!("Loading symbol store: {}", args.symbol_store.display());
    let symbols = SymbolStore::load(&args.symbol_store).context("Failed to load symbol store")?;
    let provider = JsonCaptureProvider::new(symbols);

    let report = run_diff(&provider, &args)?;

    if let Some(path) = &args.output {
        write_report(&report, path).context("Failed to write diff report JSON")?;
        println!(
            "📊 Diff report written to {}",
            path.display().to_string().cyan()
        );
    }

    println!("{}", render_terminal_report(&report, args.top_n));

    info!(
        "Diff completed in {:.2}s",
        start_time.elapsed().as_secs_f64()
    );
    Ok(())
}

/// Load, aggregate and diff both captures through `provider`
///
/// **Public** - lets callers plug in their own call tree source
pub fn run_diff<P: CallTreeProvider>(provider: &P, args: &DiffArgs) -> Result<DiffReport> {
    let (source_meta, source) = load_side(provider, args, &args.source, "source")?;
    let (baseline_meta, baseline) = load_side(provider, args, &args.baseline, "baseline")?;

    let report = generate_report(source_meta, &source, baseline_meta, &baseline)
        .context("Failed to diff source against baseline")?;

    Ok(report)
}

/// Load one capture and reduce it to an aggregate
///
/// **Private** - internal helper for run_diff
fn load_side<P: CallTreeProvider>(
    provider: &P,
    args: &DiffArgs,
    capture: &Path,
    side: &str,
) -> Result<(TraceMetadata, TraceAggregate)> {
    info!("Reading {} capture: {}", side, capture.display());

    let tree = provider
        .load_call_tree(capture, &args.process)
        .with_context(|| format!("Failed to load {} capture {}", side, capture.display()))?;

    let aggregate = build_aggregate(&tree);
    if aggregate.is_empty() {
        anyhow::bail!(
            "The {} capture {} has an empty call tree for process {} ({}); nothing to compare",
            side,
            capture.display(),
            tree.process.name,
            tree.process.pid
        );
    }

    let meta = TraceMetadata {
        capture: capture.display().to_string(),
        process: format!("{} ({})", tree.process.name, tree.process.pid),
        ..Default::default()
    };

    Ok((meta, aggregate))
}

/// Validate diff arguments
///
/// **Public** - can be called before execute_diff for early validation
pub fn validate_args(args: &DiffArgs) -> Result<()> {
    if args.source.as_os_str().is_empty() {
        anyhow::bail!("Source capture path cannot be empty");
    }

    if args.baseline.as_os_str().is_empty() {
        anyhow::bail!("Baseline capture path cannot be empty");
    }

    if args.symbol_store.as_os_str().is_empty() {
        anyhow::bail!("Symbol store path cannot be empty");
    }

    if args.top_n == 0 {
        anyhow::bail!("top must be greater than 0");
    }

    if args.top_n > MAX_TOP_N {
        anyhow::bail!("top is too large (max {})", MAX_TOP_N);
    }

    if args.source == args.baseline {
        warn!("Source and baseline are the same capture, expect identical totals");
    }

    Ok(())
}
