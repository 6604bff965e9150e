//! Global score aggregation and top contributor selection.

use serde::{Deserialize, Serialize};

use super::indicator::IndicatorResult;
use crate::model::{ClassThreshold, GradeKey};

/// Complete scoring result for one unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[must_use]
pub struct GlobalScoreResult {
    /// Sum of every indicator's weighted score
    pub global_score: f64,
    /// Grade the score maps to
    pub class_info: ClassThreshold,
    /// One result per catalog indicator, in catalog order
    pub details: Vec<IndicatorResult>,
    /// Highest weighted scores first, ties in catalog order
    pub top_contributors: Vec<IndicatorResult>,
}

impl GlobalScoreResult {
    /// Grade assigned to the unit
    #[must_use]
    pub const fn grade(&self) -> GradeKey {
        self.class_info.class_key
    }

    /// Result for one indicator
    #[must_use]
    pub fn detail(&self, key: &str) -> Option<&IndicatorResult> {
        self.details.iter().find(|d| d.key == key)
    }
}

/// Global score and top contributors of a unit's indicator results.
#[must_use]
pub fn aggregate(details: &[IndicatorResult], count: usize) -> (f64, Vec<IndicatorResult>) {
    (global_score(details), top_contributors(details, count))
}

/// Sum weighted scores.
///
/// Summation runs in the order given (catalog order), so the same inputs
/// always produce the same bits.
#[must_use]
pub fn global_score(details: &[IndicatorResult]) -> f64 {
    details.iter().map(|d| d.weighted_score).sum()
}

/// The `count` highest weighted scores, descending.
///
/// The sort is stable, so ties keep their catalog order.
#[must_use]
pub fn top_contributors(details: &[IndicatorResult], count: usize) -> Vec<IndicatorResult> {
    let mut ranked = details.to_vec();
    ranked.sort_by(|a, b| b.weighted_score.total_cmp(&a.weighted_score));
    ranked.truncate(count);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(key: &str, weighted_score: f64) -> IndicatorResult {
        IndicatorResult {
            key: key.to_string(),
            label: key.to_string(),
            value: 0.0,
            value_present: true,
            unit: String::new(),
            tier_min: 0.0,
            tier_max: None,
            points: weighted_score,
            weight: 1.0,
            weighted_score,
        }
    }

    fn keys(results: &[IndicatorResult]) -> Vec<&str> {
        results.iter().map(|r| r.key.as_str()).collect()
    }

    #[test]
    fn test_global_score_sums() {
        let details = vec![result("a", 2.0), result("b", 0.5), result("c", 1.25)];
        assert_eq!(global_score(&details), 3.75);
        assert_eq!(global_score(&[]), 0.0);
    }

    #[test]
    fn test_top_contributors_sorted_and_truncated() {
        let details = vec![
            result("a", 1.0),
            result("b", 3.0),
            result("c", 2.0),
            result("d", 0.5),
        ];
        assert_eq!(keys(&top_contributors(&details, 3)), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_top_contributors_ties_keep_catalog_order() {
        let details = vec![
            result("a", 1.0),
            result("b", 2.0),
            result("c", 1.0),
            result("d", 2.0),
        ];
        assert_eq!(keys(&top_contributors(&details, 3)), vec!["b", "d", "a"]);
    }

    #[test]
    fn test_aggregate() {
        let details = vec![result("a", 1.0), result("b", 3.0)];
        let (score, top) = aggregate(&details, 1);
        assert_eq!(score, 4.0);
        assert_eq!(keys(&top), vec!["b"]);
    }

    #[test]
    fn test_top_contributors_fewer_than_k() {
        let details = vec![result("a", 1.0)];
        assert_eq!(top_contributors(&details, 3).len(), 1);
    }
}
