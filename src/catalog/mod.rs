//! Indicator catalog and class threshold table.
//!
//! A [`Catalog`] is the validated, immutable form of a [`GradingConfig`].
//! It is built once per session and shared read-only by every evaluation.

mod indicator;
mod thresholds;

pub use indicator::Indicator;
pub use thresholds::ThresholdTable;

use indexmap::IndexMap;
use serde::Serialize;

use crate::config::{GradingConfig, ScoringConfig, Validatable};
use crate::error::{GradingError, Result};
use crate::model::{ClassThreshold, EntityMetrics, IndicatorDefinition, MetricsAdapter};

/// Validated indicator catalog plus class thresholds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Catalog {
    indicators: IndexMap<String, Indicator>,
    thresholds: ThresholdTable,
    top_contributors: usize,
}

impl Catalog {
    /// Validate a full configuration and build the catalog.
    ///
    /// Every validation problem is reported at once.
    pub fn from_config(config: &GradingConfig) -> Result<Self> {
        let errors = config.validate();
        if !errors.is_empty() {
            return Err(GradingError::InvalidConfig(errors));
        }

        let indicators = config
            .indicators
            .iter()
            .cloned()
            .map(|definition| Indicator::from_definition(definition).map(|i| (i.key.clone(), i)))
            .collect::<Result<IndexMap<_, _>>>()?;
        let thresholds = ThresholdTable::new(config.thresholds.clone())?;

        tracing::debug!(
            indicators = indicators.len(),
            grades = thresholds.len(),
            top_contributors = config.scoring.top_contributors,
            "Loaded grading catalog"
        );

        Ok(Self {
            indicators,
            thresholds,
            top_contributors: config.scoring.top_contributors,
        })
    }

    /// Build a catalog from indicator definitions and thresholds with
    /// default scoring options.
    pub fn new(
        indicators: Vec<IndicatorDefinition>,
        thresholds: Vec<ClassThreshold>,
    ) -> Result<Self> {
        Self::from_config(&GradingConfig {
            scoring: ScoringConfig::default(),
            indicators,
            thresholds,
        })
    }

    /// Indicators in catalog order
    pub fn indicators(&self) -> impl Iterator<Item = &Indicator> {
        self.indicators.values()
    }

    /// Look up an indicator by key
    #[must_use]
    pub fn indicator(&self, key: &str) -> Option<&Indicator> {
        self.indicators.get(key)
    }

    /// Number of indicators
    #[must_use]
    pub fn len(&self) -> usize {
        self.indicators.len()
    }

    /// Always false for a validated catalog
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indicators.is_empty()
    }

    /// Class threshold table
    #[must_use]
    pub const fn thresholds(&self) -> &ThresholdTable {
        &self.thresholds
    }

    /// Number of top contributors reported per unit
    #[must_use]
    pub const fn top_contributors(&self) -> usize {
        self.top_contributors
    }

    /// Highest global score any unit can reach
    #[must_use]
    pub fn max_attainable_score(&self) -> f64 {
        self.indicators().map(Indicator::max_weighted_score).sum()
    }

    /// Metric keys the catalog does not know about
    #[must_use]
    pub fn unknown_keys<'a>(&self, metrics: &'a EntityMetrics) -> Vec<&'a str> {
        metrics
            .iter()
            .map(|(key, _)| key)
            .filter(|key| !self.indicators.contains_key(*key))
            .collect()
    }

    /// Boundary adapter restricted to this catalog's key space
    #[must_use]
    pub fn metrics_adapter(&self) -> MetricsAdapter {
        MetricsAdapter::new(self.indicators.keys().cloned())
    }
}
