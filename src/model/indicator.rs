//! Indicator definitions as they appear in configuration.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::tier::{Tier, DEFAULT_TIER_GRANULARITY};

/// A measurable metric used as scoring input.
///
/// This is the unvalidated form read from configuration; the catalog turns
/// it into a [`crate::catalog::Indicator`] with a validated tier table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct IndicatorDefinition {
    /// Unique identifier, also the metric key in [`super::EntityMetrics`]
    pub key: String,
    /// Human-readable name
    pub label: String,
    /// Unit of the raw value (e.g. "colis/an")
    #[serde(default)]
    pub unit: String,
    /// Relative importance in the global score, strictly positive
    pub weight: f64,
    /// Scoring tiers, any order
    pub tiers: Vec<Tier>,
    /// Largest step allowed between consecutive tiers (`1` for counts)
    #[serde(default = "default_granularity")]
    pub granularity: f64,
}

fn default_granularity() -> f64 {
    DEFAULT_TIER_GRANULARITY
}

impl IndicatorDefinition {
    /// Create an indicator definition
    pub fn new(
        key: impl Into<String>,
        label: impl Into<String>,
        unit: impl Into<String>,
        weight: f64,
        tiers: Vec<Tier>,
    ) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            unit: unit.into(),
            weight,
            tiers,
            granularity: DEFAULT_TIER_GRANULARITY,
        }
    }

    /// Set the tier granularity, for fractional indicators
    #[must_use]
    pub const fn with_granularity(mut self, granularity: f64) -> Self {
        self.granularity = granularity;
        self
    }
}
