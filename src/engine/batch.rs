//! Batch evaluation inputs, results and summary counters.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::{EntityMetrics, GradeKey};
use crate::scoring::{GlobalScoreResult, Impact, ImpactAssessment};

/// One unit to evaluate in a batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitInput {
    /// Caller-side identifier, echoed back in the results
    pub id: String,
    pub metrics: EntityMetrics,
    /// Grade label currently held by the unit, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub baseline_grade_label: Option<String>,
}

impl UnitInput {
    /// Create a unit without baseline grade
    pub fn new(id: impl Into<String>, metrics: EntityMetrics) -> Self {
        Self {
            id: id.into(),
            metrics,
            baseline_grade_label: None,
        }
    }

    /// Attach the unit's current grade label
    #[must_use]
    pub fn with_baseline(mut self, label: impl Into<String>) -> Self {
        self.baseline_grade_label = Some(label.into());
        self
    }
}

/// Result for one unit of a batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchEntry {
    pub id: String,
    pub score: GlobalScoreResult,
    /// Present only when the unit had a baseline label
    pub impact: Option<ImpactAssessment>,
}

/// Aggregate counters over a batch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    /// Units evaluated
    pub total: usize,
    pub promotions: usize,
    pub reclassements: usize,
    pub stable: usize,
    /// Units evaluated without a baseline label
    pub without_baseline: usize,
    /// Units whose baseline label matched no grade
    pub unrecognized_baselines: usize,
    /// Units per computed grade
    pub per_grade: BTreeMap<GradeKey, usize>,
    /// Mean global score, `None` for an empty batch
    pub mean_score: Option<f64>,
}

impl BatchSummary {
    /// Fold counters over batch entries, in order.
    #[must_use]
    pub fn from_entries(entries: &[BatchEntry]) -> Self {
        let mut summary = Self::default();
        let mut score_sum = 0.0_f64;

        for entry in entries {
            summary.total += 1;
            score_sum += entry.score.global_score;
            *summary.per_grade.entry(entry.score.grade()).or_insert(0) += 1;

            match &entry.impact {
                None => summary.without_baseline += 1,
                Some(assessment) => {
                    if !assessment.baseline_recognized {
                        summary.unrecognized_baselines += 1;
                    }
                    match assessment.impact {
                        Impact::Promotion => summary.promotions += 1,
                        Impact::Reclassement => summary.reclassements += 1,
                        Impact::Stable => summary.stable += 1,
                    }
                }
            }
        }

        if summary.total > 0 {
            summary.mean_score = Some(score_sum / summary.total as f64);
        }
        summary
    }

    /// Number of units that received `grade`
    #[must_use]
    pub fn count_for(&self, grade: GradeKey) -> usize {
        self.per_grade.get(&grade).copied().unwrap_or(0)
    }
}

/// Complete batch evaluation output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[must_use]
pub struct BatchReport {
    /// Scoring engine version
    pub scoring_engine_version: String,
    /// One entry per input unit, in input order
    pub entries: Vec<BatchEntry>,
    pub summary: BatchSummary,
}

impl BatchReport {
    /// Entries with the given impact
    pub fn with_impact(&self, impact: Impact) -> impl Iterator<Item = &BatchEntry> {
        self.entries
            .iter()
            .filter(move |e| e.impact.as_ref().map(|a| a.impact) == Some(impact))
    }
}
