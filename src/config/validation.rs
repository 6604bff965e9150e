//! Configuration validation for unit-grading.
//!
//! Provides validation traits and implementations for all configuration types.
//! Every rule is checked at load time; evaluation never re-validates.

use std::collections::HashSet;

use super::types::{GradingConfig, ScoringConfig};
use crate::model::{check_tiers, ClassThreshold, IndicatorDefinition};

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for GradingConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.scoring.validate());
        errors.extend(self.indicators.as_slice().validate());
        errors.extend(self.thresholds.as_slice().validate());
        errors
    }
}

impl Validatable for ScoringConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if self.top_contributors == 0 {
            errors.push(ConfigError {
                field: "scoring.top_contributors".to_string(),
                message: "Top contributor count must be at least 1".to_string(),
            });
        }
        errors
    }
}

impl Validatable for IndicatorDefinition {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        let prefix = format!("indicators[{}]", self.key);

        if self.key.trim().is_empty() {
            errors.push(ConfigError {
                field: "indicators[].key".to_string(),
                message: format!("Indicator '{}' has an empty key", self.label),
            });
        }

        if !self.weight.is_finite() || self.weight <= 0.0 {
            errors.push(ConfigError {
                field: format!("{prefix}.weight"),
                message: format!("Weight must be strictly positive, got {}", self.weight),
            });
        }

        errors.extend(check_tiers(&format!("{prefix}.tiers"), &self.tiers, self.granularity));
        errors
    }
}

impl Validatable for [IndicatorDefinition] {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if self.is_empty() {
            errors.push(ConfigError {
                field: "indicators".to_string(),
                message: "At least one indicator is required".to_string(),
            });
        }

        let mut seen = HashSet::new();
        for indicator in self {
            if !seen.insert(indicator.key.as_str()) {
                errors.push(ConfigError {
                    field: format!("indicators[{}].key", indicator.key),
                    message: format!("Duplicate indicator key '{}'", indicator.key),
                });
            }
            errors.extend(indicator.validate());
        }

        errors
    }
}

impl Validatable for [ClassThreshold] {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        let Some(last) = self.last() else {
            errors.push(ConfigError {
                field: "thresholds".to_string(),
                message: "At least one threshold is required".to_string(),
            });
            return errors;
        };

        let mut seen = HashSet::new();
        for (i, threshold) in self.iter().enumerate() {
            if threshold.min_score.is_nan() {
                errors.push(ConfigError {
                    field: format!("thresholds[{i}].min_score"),
                    message: format!("Minimum score for {} is NaN", threshold.class_key),
                });
            }
            if !seen.insert(threshold.class_key) {
                errors.push(ConfigError {
                    field: format!("thresholds[{i}].class_key"),
                    message: format!("Duplicate grade {}", threshold.class_key),
                });
            }
        }

        for (i, pair) in self.windows(2).enumerate() {
            let (better, worse) = (&pair[0], &pair[1]);
            if worse.min_score >= better.min_score {
                errors.push(ConfigError {
                    field: format!("thresholds[{}].min_score", i + 1),
                    message: format!(
                        "Thresholds must be strictly descending: {} ({}) is not below {} ({})",
                        worse.class_key, worse.min_score, better.class_key, better.min_score
                    ),
                });
            }
            if worse.class_key.rank() >= better.class_key.rank() {
                errors.push(ConfigError {
                    field: format!("thresholds[{}].class_key", i + 1),
                    message: format!(
                        "Grades must be listed best first: {} follows {}",
                        worse.class_key, better.class_key
                    ),
                });
            }
        }

        if last.min_score > 0.0 {
            errors.push(ConfigError {
                field: format!("thresholds[{}].min_score", self.len() - 1),
                message: format!(
                    "Lowest grade {} must be a catch-all (min_score <= 0), got {}",
                    last.class_key, last.min_score
                ),
            });
        }

        errors
    }
}

// ============================================================================
// Tests
// ============================================================================
