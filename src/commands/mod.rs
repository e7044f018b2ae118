//! CLI command implementations.
//!
//! Commands orchestrate the various library components to perform user tasks.

pub mod diff;
pub mod models;

// Re-export main command functions
pub use diff::{execute_diff, run_diff, validate_args};
pub use models::DiffArgs;
