//! Validated indicator with its tier table.

use serde::Serialize;

use crate::config::Validatable;
use crate::error::{GradingError, Result};
use crate::model::{IndicatorDefinition, TierTable};

/// Indicator ready for scoring.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Indicator {
    pub key: String,
    pub label: String,
    pub unit: String,
    pub weight: f64,
    pub tiers: TierTable,
}

impl Indicator {
    /// Validate a definition and build its tier table.
    pub fn from_definition(definition: IndicatorDefinition) -> Result<Self> {
        let errors = definition.validate();
        if !errors.is_empty() {
            return Err(GradingError::InvalidConfig(errors));
        }

        let IndicatorDefinition {
            key,
            label,
            unit,
            weight,
            tiers,
            granularity,
        } = definition;

        Ok(Self {
            key,
            label,
            unit,
            weight,
            tiers: TierTable::with_granularity(tiers, granularity)?,
        })
    }

    /// Weighted score of the top tier
    #[must_use]
    pub fn max_weighted_score(&self) -> f64 {
        self.tiers.max_points() * self.weight
    }
}

impl TryFrom<IndicatorDefinition> for Indicator {
    type Error = GradingError;

    fn try_from(definition: IndicatorDefinition) -> Result<Self> {
        Self::from_definition(definition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Tier;

    #[test]
    fn test_from_definition_sorts_tiers() {
        let indicator = Indicator::from_definition(IndicatorDefinition::new(
            "lrh",
            "LRH",
            "plis/an",
            0.5,
            vec![Tier::open(1001.0, 4.0), Tier::new(0.0, 1000.0, 1.0)],
        ))
        .expect("valid definition");
        assert_eq!(indicator.tiers.lowest().points, 1.0);
        assert_eq!(indicator.max_weighted_score(), 2.0);
    }

    #[test]
    fn test_from_definition_rejects_bad_weight() {
        let result = Indicator::try_from(IndicatorDefinition::new(
            "lrh",
            "LRH",
            "plis/an",
            0.0,
            vec![Tier::open(0.0, 1.0)],
        ));
        let err = result.unwrap_err();
        assert_eq!(err.config_errors()[0].field, "indicators[lrh].weight");
    }
}
