use crate::parser::ProcessSelector;
use crate::utils::config::DEFAULT_TOP_N;
use std::path::PathBuf;

/// Arguments for the diff command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct DiffArgs {
    /// Capture of the run under investigation
    pub source: PathBuf,

    /// Capture of the reference run
    pub baseline: PathBuf,

    /// Symbol store used to resolve frame names
    pub symbol_store: PathBuf,

    /// Process to analyse in both captures
    pub process: ProcessSelector,

    /// Number of ranked symbols to print
    pub top_n: usize,

    /// Path to write the diff report JSON
    pub output: Option<PathBuf>,
}

impl Default for DiffArgs {
    fn default() -> Self {
        Self {
            source: PathBuf::new(),
            baseline: PathBuf::new(),
            symbol_store: PathBuf::new(),
            process: ProcessSelector::default(),
            top_n: DEFAULT_TOP_N,
            output: None,
        }
    }
}
