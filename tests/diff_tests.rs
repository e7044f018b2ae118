//! Integration tests for the diff API.

use perfdiff::aggregator::{build_aggregate, TraceAggregate};
use perfdiff::diff::*;
use perfdiff::parser::{CallTree, CallTreeNode, ProcessInfo};
use std::collections::BTreeMap;

// ============================================================================
// SHARED TEST HELPERS
// ============================================================================

fn aggregate(symbols: &[(&str, f64)], total_exclusive: f64) -> TraceAggregate {
    let by_symbol: BTreeMap<String, f64> = symbols
        .iter()
        .map(|(name, value)| (name.to_string(), *value))
        .collect();
    TraceAggregate::from_parts(by_symbol, total_exclusive)
}

fn tree(nodes: Vec<CallTreeNode>) -> CallTree {
    CallTree::new(
        ProcessInfo {
            name: "dotnet".to_string(),
            pid: 1,
        },
        nodes,
    )
}

// ============================================================================
// END-TO-END SCENARIOS
// ============================================================================

#[test]
fn test_regression_in_leaf_surfaces_first() {
    let baseline = tree(vec![
        CallTreeNode::new("ROOT", 0.0, 0.0),
        CallTreeNode::new("Main", 100.0, 10.0),
        CallTreeNode::new("Parse", 50.0, 50.0),
        CallTreeNode::new("Emit", 40.0, 40.0),
    ]);
    let source = tree(vec![
        CallTreeNode::new("ROOT", 0.0, 0.0),
        CallTreeNode::new("Main", 140.0, 10.0),
        CallTreeNode::new("Parse", 50.0, 50.0),
        CallTreeNode::new("Emit", 80.0, 80.0),
    ]);

    let results = diff(&build_aggregate(&source), &build_aggregate(&baseline)).unwrap();

    assert_eq!(results.len(), 3);
    assert_eq!(results[0].name, "Emit");
    assert_eq!(results[0].delta, 40.0);
    assert!(results[0].overweight > 200.0);
    // Main is the whole run, so it scores lowest on stack position
    assert_eq!(results.last().unwrap().name, "Main");
}

#[test]
fn test_results_match_ranker_order() {
    let baseline = aggregate(&[("a", 10.0), ("b", 20.0), ("c", 30.0), ("d", 90.0)], 100.0);
    let source = aggregate(&[("a", 25.0), ("b", 18.0), ("c", 45.0), ("d", 120.0)], 125.0);

    let results = diff(&source, &baseline).unwrap();
    let reranked = rank(results.clone());

    assert_eq!(results, reranked);
    for pair in results.windows(2) {
        assert_ne!(
            compare_results(&pair[0], &pair[1]),
            std::cmp::Ordering::Greater
        );
    }
}

#[test]
fn test_symbols_unique_to_one_side_skipped() {
    let baseline = aggregate(&[("Main", 100.0), ("OldHelper", 30.0)], 100.0);
    let source = aggregate(&[("Main", 110.0), ("NewHelper", 30.0)], 110.0);

    let results = compute_overweights(&source, &baseline).unwrap();
    let names: Vec<&str> = results.iter().map(|r| r.name.as_str()).collect();

    assert_eq!(names, vec!["Main"]);
}

#[test]
fn test_zero_baseline_total_is_an_error() {
    let baseline = aggregate(&[("Main", 10.0)], 0.0);
    let source = aggregate(&[("Main", 10.0)], 5.0);

    let err = diff(&source, &baseline).unwrap_err();
    assert!(matches!(err, DiffError::ZeroBaselineTotal { .. }));
    assert!(err.to_string().contains("zero total cost"));
}

#[test]
fn test_display_line() {
    let result = OverweightResult {
        name: "App.Parser.Parse".to_string(),
        before: 12.0,
        after: 30.5,
        delta: 18.5,
        overweight: 245.123,
        percent: 0.4,
        interest: 5,
    };

    assert_eq!(
        result.to_string(),
        "'App.Parser.Parse': Overweight: '245.12%', Before: '12.00ms', After: '30.50ms', Interest: '5'"
    );
}

#[test]
fn test_interest_and_overweight_helpers() {
    assert_eq!(overweight(50.0, 25.0), 200.0);
    assert_eq!(overweight(50.0, 0.0), 0.0);
    assert_eq!(interest(200.0, 30.0, Some(0.5)), 5);
}
