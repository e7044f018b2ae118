//! Per-symbol overweight and interest computation.
//!
//! A symbol is "overweight" when its time grew by more than its share of the
//! overall growth between the two runs. With `growth = source / baseline`,
//! a symbol that took `before` ms is expected to change by
//! `before * (growth - 1)`; overweight is the observed delta as a percentage
//! of that expectation.

use super::schema::OverweightResult;
use crate::aggregator::TraceAggregate;
use crate::utils::config::{
    DEEP_STACK_SHARE, OVERWEIGHT_INTEREST_THRESHOLD, PERCENT_INTEREST_THRESHOLDS,
    TOP_OF_STACK_SHARE,
};
use crate::utils::error::DiffError;
use log::debug;

/// Compute overweight results for every symbol present in both aggregates
///
/// # Returns
/// Unranked results, in baseline symbol order. Empty when both totals are
/// identical, since there is no growth to attribute.
///
/// # Errors
/// * `DiffError::ZeroBaselineTotal` - baseline total is zero while the source is not
pub fn compute_overweights(
    source: &TraceAggregate,
    baseline: &TraceAggregate,
) -> Result<Vec<OverweightResult>, DiffError> {
    let source_total = source.total_exclusive();
    let baseline_total = baseline.total_exclusive();

    if source_total == baseline_total {
        debug!("Identical totals ({:.2}), skipping overweight computation", source_total);
        return Ok(Vec::new());
    }

    if baseline_total == 0.0 {
        return Err(DiffError::ZeroBaselineTotal { source_total });
    }

    let total_delta = source_total - baseline_total;
    let growth = source_total / baseline_total;

    debug!(
        "Total delta {:.2}ms, growth {:.4} ({} baseline symbols, {} source symbols)",
        total_delta,
        growth,
        baseline.symbol_count(),
        source.symbol_count()
    );

    let results: Vec<OverweightResult> = baseline
        .by_symbol()
        .iter()
        .filter_map(|(name, &before)| {
            // Symbols missing from either side are not reported
            let after = source.get(name)?;
            let delta = after - before;
            let overweight = overweight(delta, before * (growth - 1.0));
            let percent = delta / total_delta;

            Some(OverweightResult {
                name: name.clone(),
                before,
                after,
                delta,
                overweight,
                percent,
                interest: interest(overweight, percent, share_of_total(after, source_total)),
            })
        })
        .collect();

    debug!("Computed {} overweight results", results.len());

    Ok(results)
}

/// Observed delta as a percentage of the expected delta
///
/// Returns 0.0 when the expected delta is zero or the ratio is not finite.
pub fn overweight(delta: f64, expected_delta: f64) -> f64 {
    if expected_delta == 0.0 {
        return 0.0;
    }

    let ratio = delta / expected_delta * 100.0;
    if ratio.is_finite() {
        ratio
    } else {
        0.0
    }
}

/// Score how likely a symbol's deviation is real signal
///
/// One point each for: overweight beyond the threshold, each percent
/// threshold exceeded (cumulative), sitting below the top of the stack and
/// sitting further down the stack. `share` is `None` when the source total
/// is zero, in which case the stack-position points are not awarded.
pub fn interest(overweight: f64, percent: f64, share: Option<f64>) -> u8 {
    let mut score = u8::from(overweight.abs() > OVERWEIGHT_INTEREST_THRESHOLD);

    for threshold in PERCENT_INTEREST_THRESHOLDS {
        score += u8::from(percent.abs() > threshold);
    }

    if let Some(share) = share {
        score += u8::from(share < TOP_OF_STACK_SHARE);
        score += u8::from(share < DEEP_STACK_SHARE);
    }

    score
}

/// Fraction of the source total a symbol accounts for
fn share_of_total(after: f64, source_total: f64) -> Option<f64> {
    if source_total == 0.0 {
        None
    } else {
        Some(after / source_total)
    }
}
