//! Schema definitions for diff reports.
//!
//! Defines the per-symbol results and the report wrapping them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How one symbol moved between baseline and source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverweightResult {
    /// Symbol name
    pub name: String,

    /// Inclusive time in the baseline (ms)
    pub before: f64,

    /// Inclusive time in the source (ms)
    pub after: f64,

    /// `after - before`
    pub delta: f64,

    /// Observed delta as a percentage of the delta expected under uniform scaling
    pub overweight: f64,

    /// Delta as a fraction of the total delta between the two runs
    pub percent: f64,

    /// Confidence score in `0..=6`
    pub interest: u8,
}

impl fmt::Display for OverweightResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "'{}': Overweight: '{:.2}%', Before: '{:.2}ms', After: '{:.2}ms', Interest: '{}'",
            self.name, self.overweight, self.before, self.after, self.interest
        )
    }
}

/// Complete diff report comparing a source capture against a baseline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiffReport {
    /// Schema version for the report format
    pub report_version: String,

    /// Timestamp when the report was generated
    pub generated_at: String,

    pub source: TraceMetadata,
    pub baseline: TraceMetadata,

    /// `source.total_exclusive - baseline.total_exclusive`
    pub total_delta: f64,

    /// `source.total_exclusive / baseline.total_exclusive`, absent when undefined
    #[serde(skip_serializing_if = "Option::is_none")]
    pub growth: Option<f64>,

    /// Ranked results, most interesting first
    pub results: Vec<OverweightResult>,

    pub summary: DiffSummary,
}

/// Description of one side of the comparison
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TraceMetadata {
    /// Capture the call tree came from
    pub capture: String,

    /// Process the call tree belongs to
    pub process: String,

    /// Total exclusive time (ms)
    pub total_exclusive: f64,

    /// Number of distinct symbols aggregated
    pub symbol_count: usize,
}

/// Summary of diff results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiffSummary {
    pub outcome: DiffOutcome,

    pub result_count: usize,

    /// Optional warning message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

/// Why a diff did or did not produce results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiffOutcome {
    DifferencesFound,
    /// Both runs cost exactly the same, so no growth can be attributed
    IdenticalTotals,
    NoCommonSymbols,
}

impl DiffOutcome {
    pub fn description(&self) -> &'static str {
        match self {
            DiffOutcome::DifferencesFound => "Differences found",
            DiffOutcome::IdenticalTotals => {
                "Source and baseline have identical total cost, nothing to attribute"
            }
            DiffOutcome::NoCommonSymbols => "Source and baseline share no symbols",
        }
    }
}
