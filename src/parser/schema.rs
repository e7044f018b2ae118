//! Input schema definitions for exported call-tree captures.
//!
//! An exported capture is the JSON an external trace analyzer writes after it
//! has decoded the raw capture and built a weighted call tree per process.
//! Metrics are already scaled to milliseconds.

use serde::{Deserialize, Serialize};

/// Top-level structure of an exported capture file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptureExport {
    /// Schema version for compatibility checking
    pub version: String,

    /// Processes recorded in the capture
    #[serde(default)]
    pub processes: Vec<ExportedProcess>,
}

/// One process and its call tree, as exported
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportedProcess {
    pub name: String,
    pub pid: u32,

    /// Every node of the call tree, not deduplicated by name
    #[serde(default)]
    pub nodes: Vec<CallTreeNode>,
}

/// A single weighted call tree node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallTreeNode {
    /// Stable per-node identity from the exporter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// Symbol name of the frame
    pub name: String,

    /// Time in this frame and its callees
    pub inclusive_metric: f64,

    /// Time in this frame only
    pub exclusive_metric: f64,
}

impl CallTreeNode {
    pub fn new(name: impl Into<String>, inclusive_metric: f64, exclusive_metric: f64) -> Self {
        Self {
            id: None,
            name: name.into(),
            inclusive_metric,
            exclusive_metric,
        }
    }
}

/// Identity of the process a call tree was taken from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessInfo {
    pub name: String,
    pub pid: u32,
}

/// Call tree of the process of interest, ready for aggregation
#[derive(Debug, Clone)]
pub struct CallTree {
    pub process: ProcessInfo,
    pub nodes: Vec<CallTreeNode>,
}

impl CallTree {
    pub fn new(process: ProcessInfo, nodes: Vec<CallTreeNode>) -> Self {
        Self { process, nodes }
    }
}
