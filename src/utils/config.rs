//! Configuration and constants for the CLI.

/// Current diff report schema version
pub const REPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Capture export versions this build can read
pub const SUPPORTED_CAPTURE_VERSIONS: &[&str] = &["1.0.0"];

/// Process analysed when no selector is given
pub const DEFAULT_PROCESS_NAME: &str = "dotnet";

/// Number of ranked symbols shown by default
pub const DEFAULT_TOP_N: usize = 10;
pub const MAX_TOP_N: usize = 1000;

// Interest score thresholds. Each check that passes adds one point.
pub const OVERWEIGHT_INTEREST_THRESHOLD: f64 = 110.0;
pub const PERCENT_INTEREST_THRESHOLDS: [f64; 3] = [5.0, 20.0, 100.0];

// Share of the source total a symbol must stay under to count as
// "below the top of the stack" and "further down the stack".
pub const TOP_OF_STACK_SHARE: f64 = 0.95;
pub const DEEP_STACK_SHARE: f64 = 0.75;

/// Highest interest score a symbol can reach
pub const MAX_INTEREST: u8 = 6;
