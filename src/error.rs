//! Unified error types for unit-grading.
//!
//! Only configuration loading and the metrics boundary adapter can fail.
//! Scoring, classification and impact evaluation are total functions.

use thiserror::Error;

use crate::config::{ConfigError, ConfigFileError};

/// Main error type for unit-grading operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum GradingError {
    /// Catalog or threshold configuration failed validation
    #[error("Invalid configuration: {}", join_errors(.0))]
    InvalidConfig(Vec<ConfigError>),

    /// Configuration file could not be read or parsed
    #[error("Configuration file error: {0}")]
    ConfigFile(#[from] ConfigFileError),

    /// Upstream record could not be turned into metrics
    #[error("Invalid metrics input: {context}")]
    Metrics {
        context: String,
        #[source]
        source: MetricsErrorKind,
    },
}

/// Specific metrics adapter error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum MetricsErrorKind {
    #[error("expected a JSON object, found {0}")]
    NotAnObject(String),

    #[error("value for '{key}' is not numeric: {found}")]
    NotNumeric { key: String, found: String },

    #[error("value for '{key}' is not finite")]
    NonFinite { key: String },
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for unit-grading operations
pub type Result<T> = std::result::Result<T, GradingError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl GradingError {
    /// Create a configuration error from a single message
    pub fn config(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfig(vec![ConfigError {
            field: field.into(),
            message: message.into(),
        }])
    }

    /// Create a metrics adapter error with context
    pub fn metrics(context: impl Into<String>, source: MetricsErrorKind) -> Self {
        Self::Metrics {
            context: context.into(),
            source,
        }
    }

    /// Validation errors carried by this error, if any
    #[must_use]
    pub fn config_errors(&self) -> &[ConfigError] {
        match self {
            Self::InvalidConfig(errors) => errors,
            _ => &[],
        }
    }
}

fn join_errors(errors: &[ConfigError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
