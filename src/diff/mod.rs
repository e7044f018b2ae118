//! Overweight diffing of two trace aggregates.
//!
//! This module compares a source aggregate against a baseline aggregate and
//! ranks the symbols whose time moved more than the overall run did.
//!
//! # Example
//! ```ignore
//! use perfdiff::aggregator::build_aggregate;
//! use perfdiff::diff::diff;
//!
//! let source = build_aggregate(&source_tree);
//! let baseline = build_aggregate(&baseline_tree);
//! let ranked = diff(&source, &baseline)?;
//! ```

mod engine;
mod output;
mod overweight;
mod ranker;
mod schema;

// Public API exports
pub use engine::{diff, generate_report};
pub use output::render_terminal_report;
pub use overweight::{compute_overweights, interest, overweight};
pub use ranker::{compare_results, rank};
pub use schema::{DiffOutcome, DiffReport, DiffSummary, OverweightResult, TraceMetadata};

pub use crate::utils::error::DiffError;
