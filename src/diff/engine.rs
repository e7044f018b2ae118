//! Core diff engine implementation.
//! Runs the overweight computation and ranking, and wraps the result in a report.

use crate::aggregator::TraceAggregate;
use crate::utils::config::REPORT_SCHEMA_VERSION;
use chrono::Utc;
use log::info;

use super::overweight::compute_overweights;
use super::ranker::rank;
use super::schema::{DiffOutcome, DiffReport, DiffSummary, OverweightResult, TraceMetadata};
use super::DiffError;

/// Compute and rank overweight results for two aggregates
///
/// # Arguments
/// * `source` - Aggregate of the run under investigation
/// * `baseline` - Aggregate of the reference run
///
/// # Returns
/// Results ordered most interesting first; callers truncate for display
///
/// # Errors
/// * `DiffError::ZeroBaselineTotal` - If the baseline has no cost but the source does
///
/// # Example
/// ```ignore
/// let results = diff(&build_aggregate(&source_tree), &build_aggregate(&baseline_tree))?;
/// for result in results.iter().take(10) {
///     println!("{}", result);
/// }
/// ```
pub fn diff(
    source: &TraceAggregate,
    baseline: &TraceAggregate,
) -> Result<Vec<OverweightResult>, DiffError> {
    let results = compute_overweights(source, baseline)?;
    Ok(rank(results))
}

/// Generate a complete diff report
///
/// `source_meta` and `baseline_meta` describe where the aggregates came from;
/// their totals and symbol counts are filled in from the aggregates.
pub fn generate_report(
    source_meta: TraceMetadata,
    source: &TraceAggregate,
    baseline_meta: TraceMetadata,
    baseline: &TraceAggregate,
) -> Result<DiffReport, DiffError> {
    let results = diff(source, baseline)?;

    let source_total = source.total_exclusive();
    let baseline_total = baseline.total_exclusive();

    let outcome = classify(source, baseline, &results);
    let summary = DiffSummary {
        outcome,
        result_count: results.len(),
        warning: match outcome {
            DiffOutcome::DifferencesFound => None,
            other => Some(other.description().to_string()),
        },
    };

    info!(
        "Diff complete: {} results ({:?})",
        summary.result_count, summary.outcome
    );

    Ok(DiffReport {
        report_version: REPORT_SCHEMA_VERSION.to_string(),
        generated_at: Utc::now().to_rfc3339(),
        source: with_totals(source_meta, source),
        baseline: with_totals(baseline_meta, baseline),
        total_delta: source_total - baseline_total,
        growth: (baseline_total != 0.0).then(|| source_total / baseline_total),
        results,
        summary,
    })
}

/// Decide why the diff came out the way it did
fn classify(
    source: &TraceAggregate,
    baseline: &TraceAggregate,
    results: &[OverweightResult],
) -> DiffOutcome {
    if !results.is_empty() {
        DiffOutcome::DifferencesFound
    } else if source.total_exclusive() == baseline.total_exclusive() {
        DiffOutcome::IdenticalTotals
    } else {
        DiffOutcome::NoCommonSymbols
    }
}

fn with_totals(meta: TraceMetadata, aggregate: &TraceAggregate) -> TraceMetadata {
    TraceMetadata {
        total_exclusive: aggregate.total_exclusive(),
        symbol_count: aggregate.symbol_count(),
        ..meta
    }
}
