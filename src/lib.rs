//! PerfDiff
//!
//! Regression triage for performance captures: compares the call tree of a
//! source run against a baseline run and ranks the symbols whose time moved
//! more than the run as a whole did.
//!
//! This crate provides the core implementation for the `perfdiff` CLI tool.
//!
//! ## Getting Started
//!
//! ```bash
//! perfdiff source.json baseline.json symbols/
//! perfdiff --help
//! ```

pub mod aggregator;
pub mod commands;
pub mod diff;
pub mod output;
pub mod parser;
pub mod utils;
