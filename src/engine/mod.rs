//! Grading engine handle.
//!
//! [`GradingEngine`] binds evaluations to one validated [`Catalog`]. The
//! catalog sits behind an `Arc` and is never mutated, so the handle is cheap
//! to clone and safe to share across threads.
//!
//! # Usage
//!
//! ```no_run
//! use unit_grading::engine::{GradingEngine, UnitInput};
//! use unit_grading::model::EntityMetrics;
//!
//! let engine = GradingEngine::with_defaults().unwrap();
//!
//! let metrics = EntityMetrics::new().with("colis", 12_000.0).with("lrh", 6_000.0);
//! let evaluation = engine.evaluate(&metrics, Some("Classe C"));
//! println!("{} ({:?})", evaluation.score.class_info.label, evaluation.impact);
//!
//! let report = engine.evaluate_batch(&[
//!     UnitInput::new("agence-01", metrics).with_baseline("Classe B"),
//! ]);
//! println!("{} promotion(s)", report.summary.promotions);
//! ```

mod batch;

pub use batch::{BatchEntry, BatchReport, BatchSummary, UnitInput};

use std::sync::Arc;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::config::GradingConfig;
use crate::error::Result;
use crate::model::{ClassThreshold, EntityMetrics, IndicatorDefinition};
use crate::scoring::{
    assess_impact, score_unit, GlobalScoreResult, ImpactAssessment, SCORING_ENGINE_VERSION,
};

/// Single-unit evaluation output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[must_use]
pub struct Evaluation {
    pub score: GlobalScoreResult,
    /// Present only when a baseline label was supplied
    pub impact: Option<ImpactAssessment>,
}

/// Handle bound to a loaded catalog.
#[derive(Debug, Clone)]
pub struct GradingEngine {
    catalog: Arc<Catalog>,
}

impl GradingEngine {
    /// Wrap an already validated catalog
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }

    /// Validate a configuration and load it
    pub fn from_config(config: &GradingConfig) -> Result<Self> {
        Catalog::from_config(config).map(Self::new)
    }

    /// Load the built-in reference catalog
    pub fn with_defaults() -> Result<Self> {
        Self::from_config(&GradingConfig::default())
    }

    /// The loaded catalog
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Score, classify and, when a baseline label is given, assess impact
    /// for one unit.
    pub fn evaluate(&self, metrics: &EntityMetrics, baseline_label: Option<&str>) -> Evaluation {
        let unknown = self.catalog.unknown_keys(metrics);
        if !unknown.is_empty() {
            tracing::debug!(keys = ?unknown, "Ignoring metrics outside the catalog");
        }

        let score = score_unit(&self.catalog, metrics);
        let impact = baseline_label
            .map(|label| assess_impact(label, score.grade(), self.catalog.thresholds()));

        Evaluation { score, impact }
    }

    /// Evaluate many units in parallel.
    ///
    /// Entries come back in input order; the summary is folded afterwards.
    pub fn evaluate_batch(&self, units: &[UnitInput]) -> BatchReport {
        let entries: Vec<BatchEntry> = units
            .par_iter()
            .map(|unit| {
                let Evaluation { score, impact } =
                    self.evaluate(&unit.metrics, unit.baseline_grade_label.as_deref());
                BatchEntry {
                    id: unit.id.clone(),
                    score,
                    impact,
                }
            })
            .collect();

        let summary = BatchSummary::from_entries(&entries);
        tracing::info!(
            total = summary.total,
            promotions = summary.promotions,
            reclassements = summary.reclassements,
            stable = summary.stable,
            unrecognized_baselines = summary.unrecognized_baselines,
            "Batch evaluation complete"
        );

        BatchReport {
            scoring_engine_version: SCORING_ENGINE_VERSION.to_string(),
            entries,
            summary,
        }
    }
}

/// Validate indicator definitions and class thresholds and return an engine
/// bound to them.
pub fn load_catalog(
    indicators: Vec<IndicatorDefinition>,
    thresholds: Vec<ClassThreshold>,
) -> Result<GradingEngine> {
    Catalog::new(indicators, thresholds).map(GradingEngine::new)
}
