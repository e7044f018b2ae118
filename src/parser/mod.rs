//! Capture reading for exported call trees.
//!
//! This is the boundary to the external trace analyzer: it turns an
//! exported capture into the call tree of one process, with symbol names
//! resolved, ready for aggregation.

pub mod capture;
pub mod schema;
pub mod symbols;

// Re-export main types and functions
pub use capture::{read_capture, CallTreeProvider, JsonCaptureProvider, ProcessSelector};
pub use schema::{CallTree, CallTreeNode, CaptureExport, ExportedProcess, ProcessInfo};
pub use symbols::SymbolStore;
