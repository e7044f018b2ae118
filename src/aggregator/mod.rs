//! Aggregation of call trees into per-symbol totals.
//!
//! This module transforms a process call tree into a `TraceAggregate`:
//! - Summed inclusive time per symbol name
//! - Total exclusive time across the tree

pub mod trace_aggregate;

// Re-export main types and functions
pub use trace_aggregate::{build_aggregate, TraceAggregate};
