//! Configuration types for unit grading.
//!
//! A [`GradingConfig`] carries the indicator catalog, the class threshold
//! table and scoring options. It is validated once when the engine is loaded.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::defaults::{reference_indicators, reference_thresholds, DEFAULT_TOP_CONTRIBUTORS};
use super::validation::ConfigError;
use crate::model::{ClassThreshold, IndicatorDefinition};

// ============================================================================
// Unified Grading Configuration
// ============================================================================

/// Top-level configuration for a grading session.
///
/// A configuration file either sets both `indicators` and `thresholds`, or
/// neither and grades against the built-in reference catalog (see
/// [`GradingConfig::default`]). `scoring` may always be omitted. Unknown keys
/// are rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields, try_from = "GradingConfigFile")]
pub struct GradingConfig {
    /// Scoring options
    pub scoring: ScoringConfig,
    /// Indicator catalog, in display order
    pub indicators: Vec<IndicatorDefinition>,
    /// Class thresholds, best grade first
    pub thresholds: Vec<ClassThreshold>,
}

impl Default for GradingConfig {
    fn default() -> Self {
        Self {
            scoring: ScoringConfig::default(),
            indicators: reference_indicators(),
            thresholds: reference_thresholds(),
        }
    }
}

/// On-disk shape of a [`GradingConfig`], before the catalog pairing rule.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct GradingConfigFile {
    #[serde(default)]
    scoring: ScoringConfig,
    indicators: Option<Vec<IndicatorDefinition>>,
    thresholds: Option<Vec<ClassThreshold>>,
}

impl TryFrom<GradingConfigFile> for GradingConfig {
    type Error = ConfigError;

    fn try_from(file: GradingConfigFile) -> Result<Self, ConfigError> {
        let missing = |field: &str, other: &str| ConfigError {
            field: field.to_string(),
            message: format!("Required when `{other}` is set"),
        };

        let (indicators, thresholds) = match (file.indicators, file.thresholds) {
            (Some(indicators), Some(thresholds)) => (indicators, thresholds),
            (None, None) => (reference_indicators(), reference_thresholds()),
            (Some(_), None) => return Err(missing("thresholds", "indicators")),
            (None, Some(_)) => return Err(missing("indicators", "thresholds")),
        };

        Ok(Self {
            scoring: file.scoring,
            indicators,
            thresholds,
        })
    }
}

impl GradingConfig {
    /// Create a `GradingConfig` with the reference catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder starting from an empty catalog.
    pub fn builder() -> GradingConfigBuilder {
        GradingConfigBuilder::default()
    }
}

/// Scoring options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct ScoringConfig {
    /// Number of top contributing indicators reported per unit
    pub top_contributors: usize,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            top_contributors: DEFAULT_TOP_CONTRIBUTORS,
        }
    }
}

// ============================================================================
// Builder for GradingConfig
// ============================================================================

/// Builder for constructing `GradingConfig` with fluent API.
#[derive(Debug)]
#[must_use]
pub struct GradingConfigBuilder {
    config: GradingConfig,
}

impl Default for GradingConfigBuilder {
    fn default() -> Self {
        Self {
            config: GradingConfig {
                scoring: ScoringConfig::default(),
                indicators: Vec::new(),
                thresholds: Vec::new(),
            },
        }
    }
}

impl GradingConfigBuilder {
    /// Append an indicator definition.
    pub fn indicator(mut self, indicator: IndicatorDefinition) -> Self {
        self.config.indicators.push(indicator);
        self
    }

    /// Append a class threshold (call best grade first).
    pub fn threshold(mut self, threshold: ClassThreshold) -> Self {
        self.config.thresholds.push(threshold);
        self
    }

    /// Set the number of reported top contributors.
    pub const fn top_contributors(mut self, count: usize) -> Self {
        self.config.scoring.top_contributors = count;
        self
    }

    /// Build the `GradingConfig`.
    #[must_use]
    pub fn build(self) -> GradingConfig {
        self.config
    }
}
