//! Configuration module for unit-grading.
//!
//! This module provides the configuration system with:
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - The built-in reference catalog
//! - YAML config file loading and discovery
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use unit_grading::config::{GradingConfig, load_or_default};
//!
//! // Reference catalog
//! let config = GradingConfig::default();
//!
//! // Load the discovered file, or the reference catalog when there is none
//! let (config, loaded_from) = load_or_default(None)?;
//! ```
//!
//! # Configuration File
//!
//! Place a `.unit-grading.yaml` file in your working directory or
//! `~/.config/unit-grading/`:
//!
//! ```yaml
//! scoring:
//!   top_contributors: 3
//! indicators:
//!   - key: colis
//!     label: Colis traités
//!     unit: colis/an
//!     weight: 0.25
//!     tiers:
//!       - { min: 0, max: 2000, points: 1 }
//!       - { min: 2001, points: 4 }
//! thresholds:
//!   - { class_key: A, min_score: 2.0, label: Classe A }
//!   - { class_key: D, min_score: 0, label: Classe D }
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

// Re-export main types
pub use defaults::{
    reference_indicators, reference_thresholds, DEFAULT_TOP_CONTRIBUTORS, REFERENCE_GRADE_A_MIN,
    REFERENCE_GRADE_B_MIN, REFERENCE_GRADE_C_MIN,
};
pub use types::{GradingConfig, GradingConfigBuilder, ScoringConfig};
pub use validation::{ConfigError, Validatable};

// Re-export file utilities
pub use file::{
    discover_config_file, generate_example_config, load_config_file, load_or_default,
    ConfigFileError,
};

/// Generate a JSON Schema for the `GradingConfig` configuration format.
///
/// This schema documents all configuration options that can be set in
/// `.unit-grading.yaml` config files. It can be used by editors for
/// validation and autocompletion.
#[must_use]
pub fn generate_json_schema() -> String {
    let schema = schemars::schema_for!(GradingConfig);
    serde_json::to_string_pretty(&schema).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_schema_lists_sections() {
        let schema = generate_json_schema();
        assert!(schema.contains("\"indicators\""));
        assert!(schema.contains("\"thresholds\""));
        assert!(schema.contains("\"top_contributors\""));
    }
}
