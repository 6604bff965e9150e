//! Unit scoring pipeline.
//!
//! Scoring a unit runs, for every catalog indicator, tier resolution and
//! weighting ([`score_indicator`]), sums the weighted scores into a global
//! score, picks the top contributors, and classifies the score with the
//! catalog's threshold table. Impact evaluation compares the computed grade
//! with a baseline label ([`assess_impact`]).
//!
//! # Usage
//!
//! ```no_run
//! use unit_grading::catalog::Catalog;
//! use unit_grading::config::GradingConfig;
//! use unit_grading::model::EntityMetrics;
//! use unit_grading::scoring::score_unit;
//!
//! let catalog = Catalog::from_config(&GradingConfig::default()).unwrap();
//! let metrics = EntityMetrics::new().with("colis", 12_000.0);
//! let result = score_unit(&catalog, &metrics);
//!
//! println!("{} -> {}", result.global_score, result.class_info.label);
//! for contributor in &result.top_contributors {
//!     println!("- {}: {}", contributor.label, contributor.weighted_score);
//! }
//! ```

mod aggregate;
mod impact;
mod indicator;

pub use aggregate::{aggregate, global_score, top_contributors, GlobalScoreResult};
pub use impact::{assess_impact, normalize_grade_label, Impact, ImpactAssessment};
pub use indicator::{score_indicator, IndicatorResult};

use crate::catalog::Catalog;
use crate::model::EntityMetrics;

/// Scoring engine version
pub const SCORING_ENGINE_VERSION: &str = "1.0";

/// Score and classify one unit.
pub fn score_unit(catalog: &Catalog, metrics: &EntityMetrics) -> GlobalScoreResult {
    let details: Vec<IndicatorResult> = catalog
        .indicators()
        .map(|indicator| score_indicator(indicator, metrics))
        .collect();

    let (global_score, top_contributors) = aggregate(&details, catalog.top_contributors());
    let class_info = catalog.thresholds().classify(global_score).clone();

    GlobalScoreResult {
        global_score,
        class_info,
        details,
        top_contributors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GradingConfig;
    use crate::model::GradeKey;

    fn catalog() -> Catalog {
        Catalog::from_config(&GradingConfig::default()).expect("valid")
    }

    #[test]
    fn test_empty_metrics_score_lowest_tiers() {
        let result = score_unit(&catalog(), &EntityMetrics::new());
        assert_eq!(result.details.len(), 6);
        assert!((result.global_score - 1.0).abs() < 1e-9);
        assert_eq!(result.grade(), GradeKey::D);
        assert_eq!(result.top_contributors.len(), 3);
        assert_eq!(result.top_contributors[0].key, "colis");
    }

    #[test]
    fn test_large_unit_reaches_a() {
        let metrics: EntityMetrics = [
            ("colis", 80_000.0),
            ("courrier", 2_000_000.0),
            ("lrh", 30_000.0),
            ("mandats", 12_000.0),
            ("guichets", 8.0),
            ("clients_pro", 400.0),
        ]
        .into_iter()
        .collect();
        let result = score_unit(&catalog(), &metrics);
        assert!((result.global_score - 10.0).abs() < 1e-9);
        assert_eq!(result.grade(), GradeKey::A);
    }

    #[test]
    fn test_detail_lookup() {
        let metrics = EntityMetrics::new().with("colis", 12_000.0);
        let result = score_unit(&catalog(), &metrics);
        let colis = result.detail("colis").expect("colis scored");
        assert_eq!(colis.weighted_score, 2.0);
        assert!(result.detail("surface").is_none());
    }
}
