//! Flatten a weighted call tree into per-symbol totals.
//!
//! Every node carrying the same symbol name contributes its inclusive time
//! to that symbol. Nodes with zero inclusive time are placeholders (dummy
//! roots and the like) and are ignored entirely.

use crate::parser::schema::{CallTree, CallTreeNode};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-symbol inclusive totals plus the overall exclusive total of a trace
///
/// **Public** - input to the overweight computation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TraceAggregate {
    by_symbol: BTreeMap<String, f64>,
    total_exclusive: f64,
}

impl TraceAggregate {
    /// Aggregate a sequence of call tree nodes
    pub fn from_nodes<'a>(nodes: impl IntoIterator<Item = &'a CallTreeNode>) -> Self {
        let mut by_symbol: BTreeMap<String, f64> = BTreeMap::new();
        let mut total_exclusive = 0.0;
        let mut skipped = 0usize;

        for node in nodes {
            if node.inclusive_metric == 0.0 {
                skipped += 1;
                continue;
            }

            *by_symbol.entry(node.name.clone()).or_insert(0.0) += node.inclusive_metric;
            total_exclusive += node.exclusive_metric;
        }

        debug!(
            "Aggregated {} symbols (skipped {} zero-weight nodes), total exclusive {:.2}",
            by_symbol.len(),
            skipped,
            total_exclusive
        );

        Self {
            by_symbol,
            total_exclusive,
        }
    }

    /// Build an aggregate directly from symbol totals
    pub fn from_parts(by_symbol: BTreeMap<String, f64>, total_exclusive: f64) -> Self {
        Self {
            by_symbol,
            total_exclusive,
        }
    }

    pub fn by_symbol(&self) -> &BTreeMap<String, f64> {
        &self.by_symbol
    }

    pub fn total_exclusive(&self) -> f64 {
        self.total_exclusive
    }

    pub fn get(&self, symbol: &str) -> Option<f64> {
        self.by_symbol.get(symbol).copied()
    }

    pub fn symbol_count(&self) -> usize {
        self.by_symbol.len()
    }

    /// True when no node carried any inclusive time
    pub fn is_empty(&self) -> bool {
        self.by_symbol.is_empty()
    }
}

/// Aggregate a call tree
///
/// **Public** - main entry point for aggregation
pub fn build_aggregate(tree: &CallTree) -> TraceAggregate {
    debug!(
        "Aggregating {} nodes for process {} ({})",
        tree.nodes.len(),
        tree.process.name,
        tree.process.pid
    );
    TraceAggregate::from_nodes(&tree.nodes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_inclusive_node_is_skipped() {
        let nodes = vec![
            CallTreeNode::new("ROOT", 0.0, 40.0),
            CallTreeNode::new("Main", 30.0, 10.0),
        ];

        let aggregate = TraceAggregate::from_nodes(&nodes);

        assert_eq!(aggregate.get("ROOT"), None);
        assert_eq!(aggregate.get("Main"), Some(30.0));
        assert_eq!(aggregate.total_exclusive(), 10.0);
    }

    #[test]
    fn test_same_symbol_sums_across_nodes() {
        let nodes = vec![
            CallTreeNode::new("f", 1.5, 0.5),
            CallTreeNode::new("g", 4.0, 4.0),
            CallTreeNode::new("f", 2.5, 1.0),
            CallTreeNode::new("f", 6.0, 0.0),
        ];

        let aggregate = TraceAggregate::from_nodes(&nodes);

        assert_eq!(aggregate.symbol_count(), 2);
        assert_eq!(aggregate.get("f"), Some(10.0));
        assert_eq!(aggregate.total_exclusive(), 5.5);
    }

    #[test]
    fn test_empty_input() {
        let aggregate = TraceAggregate::from_nodes(std::iter::empty());
        assert!(aggregate.is_empty());
        assert_eq!(aggregate.total_exclusive(), 0.0);
    }
}
