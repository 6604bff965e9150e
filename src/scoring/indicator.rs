//! Per-indicator scoring.

use serde::{Deserialize, Serialize};

use crate::catalog::Indicator;
use crate::model::EntityMetrics;

/// Score of one indicator for one unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorResult {
    /// Indicator key
    pub key: String,
    /// Indicator label
    pub label: String,
    /// Value used for tier lookup (0 when the metric was missing)
    pub value: f64,
    /// Whether the unit actually supplied a value
    pub value_present: bool,
    /// Unit of the value
    pub unit: String,
    /// Lower bound of the matched tier
    pub tier_min: f64,
    /// Upper bound of the matched tier, `None` when open-ended
    pub tier_max: Option<f64>,
    /// Points of the matched tier
    pub points: f64,
    /// Indicator weight
    pub weight: f64,
    /// `points * weight`
    pub weighted_score: f64,
}

/// Score one indicator against a unit's metrics.
///
/// A missing metric is scored as `0`; this is a normal situation (a unit may
/// have no volume for an indicator), not an error.
#[must_use]
pub fn score_indicator(indicator: &Indicator, metrics: &EntityMetrics) -> IndicatorResult {
    let present = metrics.get(&indicator.key);
    if present.is_none() {
        tracing::trace!(indicator = %indicator.key, "Metric missing, scoring as 0");
    }
    let value = present.unwrap_or(0.0);
    let tier = indicator.tiers.resolve(value);

    IndicatorResult {
        key: indicator.key.clone(),
        label: indicator.label.clone(),
        value,
        value_present: present.is_some(),
        unit: indicator.unit.clone(),
        tier_min: tier.min,
        tier_max: tier.max,
        points: tier.points,
        weight: indicator.weight,
        weighted_score: tier.points * indicator.weight,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{IndicatorDefinition, Tier};

    fn colis() -> Indicator {
        Indicator::from_definition(IndicatorDefinition::new(
            "colis",
            "Colis traités",
            "colis/an",
            0.25,
            vec![
                Tier::new(0.0, 2000.0, 1.0),
                Tier::new(2001.0, 10000.0, 4.0),
                Tier::new(10001.0, 50000.0, 8.0),
                Tier::open(50001.0, 10.0),
            ],
        ))
        .expect("valid indicator")
    }

    #[test]
    fn test_weighted_score() {
        let result = score_indicator(&colis(), &EntityMetrics::new().with("colis", 12000.0));
        assert_eq!(result.points, 8.0);
        assert_eq!(result.weighted_score, 2.0);
        assert_eq!(result.tier_min, 10001.0);
        assert_eq!(result.tier_max, Some(50000.0));
        assert!(result.value_present);
    }

    #[test]
    fn test_missing_metric_scores_lowest_tier() {
        let result = score_indicator(&colis(), &EntityMetrics::new());
        assert_eq!(result.value, 0.0);
        assert!(!result.value_present);
        assert_eq!(result.points, 1.0);
        assert_eq!(result.weighted_score, 0.25);
    }

    #[test]
    fn test_open_tier_reported() {
        let result = score_indicator(&colis(), &EntityMetrics::new().with("colis", 60000.0));
        assert_eq!(result.tier_max, None);
        assert_eq!(result.weighted_score, 2.5);
    }
}
