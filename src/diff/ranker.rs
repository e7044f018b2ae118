//! Ordering of overweight results.

use super::schema::OverweightResult;
use std::cmp::Ordering;

/// Sort results so the most actionable symbols come first
///
/// Order: interest descending, then overweight descending, then delta
/// ascending. Remaining ties keep their input order.
pub fn rank(mut results: Vec<OverweightResult>) -> Vec<OverweightResult> {
    results.sort_by(compare_results);
    results
}

/// Comparator behind [`rank`]
///
/// Incomparable floats (NaN) are treated as equal so they fall through to
/// the next key.
pub fn compare_results(left: &OverweightResult, right: &OverweightResult) -> Ordering {
    right
        .interest
        .cmp(&left.interest)
        .then_with(|| float_cmp(right.overweight, left.overweight))
        .then_with(|| float_cmp(left.delta, right.delta))
}

fn float_cmp(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(name: &str, interest: u8, overweight: f64, delta: f64) -> OverweightResult {
        OverweightResult {
            name: name.to_string(),
            before: 0.0,
            after: 0.0,
            delta,
            overweight,
            percent: 0.0,
            interest,
        }
    }

    fn names(results: &[OverweightResult]) -> Vec<&str> {
        results.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_interest_dominates() {
        let ranked = rank(vec![
            result("low", 1, 900.0, -5.0),
            result("high", 4, 10.0, 5.0),
        ]);
        assert_eq!(names(&ranked), vec!["high", "low"]);
    }

    #[test]
    fn test_overweight_breaks_interest_ties() {
        let ranked = rank(vec![
            result("small", 3, 120.0, 1.0),
            result("large", 3, 400.0, 1.0),
        ]);
        assert_eq!(names(&ranked), vec!["large", "small"]);
    }

    #[test]
    fn test_smaller_delta_first_on_full_ties() {
        let ranked = rank(vec![
            result("grew", 2, 150.0, 40.0),
            result("shrank", 2, 150.0, -40.0),
        ]);
        assert_eq!(names(&ranked), vec!["shrank", "grew"]);
    }

    #[test]
    fn test_complete_ties_keep_input_order() {
        let ranked = rank(vec![
            result("b", 2, 150.0, 1.0),
            result("a", 2, 150.0, 1.0),
            result("c", 2, 150.0, 1.0),
        ]);
        assert_eq!(names(&ranked), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_signed_zero_overweights_tie() {
        let ranked = rank(vec![
            result("neg", 2, -0.0, 3.0),
            result("pos", 2, 0.0, 1.0),
        ]);
        assert_eq!(names(&ranked), vec!["pos", "neg"]);
    }
}
