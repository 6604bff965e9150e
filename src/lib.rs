//! **Weighted complexity grading for organizational units.**
//!
//! `unit-grading` scores an organizational unit (a branch office, an agency,
//! a service point) from raw activity volumes. Each volume is mapped to
//! points through a tiered scale, weighted, and summed into a global score.
//! The score is classified into a grade (A to D), and when the unit's
//! current grade is known, the change is reported as a promotion, a
//! re-classification or no change.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: Plain data types: grades and thresholds, tiers, indicator
//!   definitions, and [`EntityMetrics`] (the raw volumes of one unit).
//! - **[`config`]**: [`GradingConfig`], its validation, the built-in reference
//!   catalog, and YAML config file discovery.
//! - **[`catalog`]**: [`Catalog`], the validated and immutable form of a
//!   configuration.
//! - **[`scoring`]**: Indicator scoring, aggregation, classification and
//!   impact assessment.
//! - **[`engine`]**: [`GradingEngine`], a shareable handle that evaluates single
//!   units or whole batches.
//!
//! ## Getting Started
//!
//! ```no_run
//! use unit_grading::{EntityMetrics, GradingEngine};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let engine = GradingEngine::with_defaults()?;
//!
//!     let metrics = EntityMetrics::new()
//!         .with("colis", 12_000.0)
//!         .with("courrier", 300_000.0)
//!         .with("guichets", 3.0);
//!
//!     let evaluation = engine.evaluate(&metrics, Some("Classe C"));
//!     println!(
//!         "score {:.2} -> {}",
//!         evaluation.score.global_score, evaluation.score.class_info.label
//!     );
//!     if let Some(impact) = evaluation.impact {
//!         println!("{} -> {}: {}", impact.baseline, impact.simulated, impact.impact);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ### Custom Catalog
//!
//! ```no_run
//! use unit_grading::model::{ClassThreshold, GradeKey, IndicatorDefinition, Tier};
//! use unit_grading::load_catalog;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let engine = load_catalog(
//!         vec![IndicatorDefinition::new(
//!             "visits",
//!             "Visits",
//!             "visits/year",
//!             1.0,
//!             vec![Tier::new(0.0, 100.0, 1.0), Tier::open(101.0, 5.0)],
//!         )],
//!         vec![
//!             ClassThreshold::new(GradeKey::A, 4.0, "Top"),
//!             ClassThreshold::new(GradeKey::D, 0.0, "Base"),
//!         ],
//!     )?;
//!     println!("max score {}", engine.catalog().max_attainable_score());
//!     Ok(())
//! }
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    // usize -> f64 for batch means
    clippy::cast_precision_loss,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod model;
pub mod scoring;

// Re-export main types for convenience
pub use catalog::{Catalog, Indicator, ThresholdTable};
pub use config::{ConfigError, GradingConfig, GradingConfigBuilder, ScoringConfig, Validatable};
pub use engine::{
    load_catalog, BatchEntry, BatchReport, BatchSummary, Evaluation, GradingEngine, UnitInput,
};
pub use error::{GradingError, MetricsErrorKind, Result};
pub use model::{
    ClassThreshold, EntityMetrics, GradeKey, IndicatorDefinition, MetricsAdapter, Tier, TierTable,
};
pub use scoring::{
    GlobalScoreResult, Impact, ImpactAssessment, IndicatorResult, SCORING_ENGINE_VERSION,
};
