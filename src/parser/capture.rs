//! Reader for exported call-tree captures.
//!
//! Loads the capture JSON, picks the process of interest and resolves
//! frame names through the symbol store. Decoding raw trace formats is
//! left to whichever analyzer produced the export.

use super::schema::{CallTree, CallTreeNode, CaptureExport, ExportedProcess, ProcessInfo};
use super::symbols::SymbolStore;
use crate::utils::config::{DEFAULT_PROCESS_NAME, SUPPORTED_CAPTURE_VERSIONS};
use crate::utils::error::ParseError;
use log::{debug, info, warn};
use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::str::FromStr;

/// Selects which process of a capture to analyse
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessSelector {
    /// Process name, compared case-insensitively
    Name(String),

    /// Exact process id
    Pid(u32),
}

impl ProcessSelector {
    pub fn matches(&self, process: &ExportedProcess) -> bool {
        match self {
            ProcessSelector::Name(name) => process.name.eq_ignore_ascii_case(name),
            ProcessSelector::Pid(pid) => process.pid == *pid,
        }
    }
}

impl Default for ProcessSelector {
    fn default() -> Self {
        ProcessSelector::Name(DEFAULT_PROCESS_NAME.to_string())
    }
}

impl FromStr for ProcessSelector {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseError::InvalidFormat(
                "Process selector cannot be empty".to_string(),
            ));
        }

        if s.chars().all(|c| c.is_ascii_digit()) {
            let pid = s
                .parse()
                .map_err(|_| ParseError::InvalidFormat(format!("Process id out of range: {}", s)))?;
            return Ok(ProcessSelector::Pid(pid));
        }

        Ok(ProcessSelector::Name(s.to_string()))
    }
}

impl fmt::Display for ProcessSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessSelector::Name(name) => write!(f, "{}", name),
            ProcessSelector::Pid(pid) => write!(f, "pid {}", pid),
        }
    }
}

/// Source of weighted call trees for a capture
///
/// Anything that can turn a capture plus a process selector into a call tree
/// can feed the diff.
pub trait CallTreeProvider {
    fn load_call_tree(
        &self,
        capture: &Path,
        selector: &ProcessSelector,
    ) -> Result<CallTree, ParseError>;
}

/// Provider reading exported JSON captures
#[derive(Debug, Clone, Default)]
pub struct JsonCaptureProvider {
    symbols: SymbolStore,
}

impl JsonCaptureProvider {
    pub fn new(symbols: SymbolStore) -> Self {
        Self { symbols }
    }
}

impl CallTreeProvider for JsonCaptureProvider {
    fn load_call_tree(
        &self,
        capture: &Path,
        selector: &ProcessSelector,
    ) -> Result<CallTree, ParseError> {
        let export = read_capture(capture)?;
        let tree = select_process(export, selector, &self.symbols).ok_or_else(|| {
            ParseError::ProcessNotFound {
                selector: selector.to_string(),
                capture: capture.to_path_buf(),
            }
        })?;

        info!(
            "Loaded {} call tree nodes for {} ({}) from {}",
            tree.nodes.len(),
            tree.process.name,
            tree.process.pid,
            capture.display()
        );

        Ok(tree)
    }
}

/// Read and validate an exported capture file
///
/// **Public** - also used to inspect captures without selecting a process
pub fn read_capture(path: impl AsRef<Path>) -> Result<CaptureExport, ParseError> {
    let path = path.as_ref();

    debug!("Reading capture from: {}", path.display());

    let file = File::open(path).map_err(|source| ParseError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let export: CaptureExport = serde_json::from_reader(BufReader::new(file))?;

    if !SUPPORTED_CAPTURE_VERSIONS.contains(&export.version.as_str()) {
        return Err(ParseError::InvalidFormat(format!(
            "Unsupported capture version: {}",
            export.version
        )));
    }

    if export.processes.is_empty() {
        warn!("Capture {} contains no processes", path.display());
    }

    Ok(export)
}

/// Pick the first process matching `selector` and resolve its frame names
///
/// **Private** - internal selection step
fn select_process(
    export: CaptureExport,
    selector: &ProcessSelector,
    symbols: &SymbolStore,
) -> Option<CallTree> {
    let process = export
        .processes
        .into_iter()
        .find(|process| selector.matches(process))?;

    let nodes = process
        .nodes
        .into_iter()
        .map(|node| CallTreeNode {
            name: symbols.resolve(&node.name).to_string(),
            ..node
        })
        .collect();

    Some(CallTree::new(
        ProcessInfo {
            name: process.name,
            pid: process.pid,
        },
        nodes,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn process(name: &str, pid: u32, nodes: Vec<CallTreeNode>) -> ExportedProcess {
        ExportedProcess {
            name: name.to_string(),
            pid,
            nodes,
        }
    }

    #[test]
    fn test_selector_from_str() {
        assert_eq!(
            "4242".parse::<ProcessSelector>().unwrap(),
            ProcessSelector::Pid(4242)
        );
        assert_eq!(
            "dotnet".parse::<ProcessSelector>().unwrap(),
            ProcessSelector::Name("dotnet".to_string())
        );
        assert!("  ".parse::<ProcessSelector>().is_err());
        assert!("99999999999".parse::<ProcessSelector>().is_err());
    }

    #[test]
    fn test_selector_name_is_case_insensitive() {
        let selector = ProcessSelector::Name("dotnet".to_string());
        assert!(selector.matches(&process("DotNet", 1, vec![])));
        assert!(!selector.matches(&process("dotnet-host", 1, vec![])));
    }

    #[test]
    fn test_select_first_matching_process() {
        let export = CaptureExport {
            version: "1.0.0".to_string(),
            processes: vec![
                process("explorer", 10, vec![]),
                process("dotnet", 20, vec![CallTreeNode::new("first", 1.0, 1.0)]),
                process("dotnet", 30, vec![CallTreeNode::new("second", 1.0, 1.0)]),
            ],
        };

        let tree = select_process(export, &ProcessSelector::default(), &SymbolStore::default())
            .unwrap();

        assert_eq!(tree.process.pid, 20);
        assert_eq!(tree.nodes[0].name, "first");
    }

    #[test]
    fn test_select_resolves_symbols() {
        let mut symbols = SymbolStore::default();
        symbols.insert("app.dll!0x40", "App.Program.Main");

        let export = CaptureExport {
            version: "1.0.0".to_string(),
            processes: vec![process(
                "dotnet",
                7,
                vec![CallTreeNode::new("app.dll!0x40", 12.5, 2.5)],
            )],
        };

        let tree = select_process(export, &ProcessSelector::Pid(7), &symbols).unwrap();

        assert_eq!(tree.nodes[0].name, "App.Program.Main");
        assert_eq!(tree.nodes[0].inclusive_metric, 12.5);
        assert_eq!(tree.nodes[0].exclusive_metric, 2.5);
    }

    #[test]
    fn test_select_missing_process() {
        let export = CaptureExport {
            version: "1.0.0".to_string(),
            processes: vec![process("explorer", 10, vec![])],
        };

        assert!(select_process(export, &ProcessSelector::default(), &SymbolStore::default())
            .is_none());
    }
}
