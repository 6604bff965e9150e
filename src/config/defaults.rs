//! Default values and the built-in reference catalog.
//!
//! The reference catalog grades postal network units on six volume
//! indicators. Weights sum to 1.0 and every indicator tops out at 10
//! points, so global scores range from 1.0 to 10.0.

use crate::model::{ClassThreshold, GradeKey, IndicatorDefinition, Tier};

// ============================================================================
// Default Value Constants
// ============================================================================

/// Default number of top contributors reported per unit.
pub const DEFAULT_TOP_CONTRIBUTORS: usize = 3;

/// Minimum score for grade A in the reference table.
pub const REFERENCE_GRADE_A_MIN: f64 = 8.5;

/// Minimum score for grade B in the reference table.
pub const REFERENCE_GRADE_B_MIN: f64 = 6.0;

/// Minimum score for grade C in the reference table.
pub const REFERENCE_GRADE_C_MIN: f64 = 3.5;

// ============================================================================
// Reference Catalog
// ============================================================================

/// Indicators of the reference catalog, in display order.
#[must_use]
pub fn reference_indicators() -> Vec<IndicatorDefinition> {
    vec![
        IndicatorDefinition::new(
            "colis",
            "Colis traités",
            "colis/an",
            0.25,
            vec![
                Tier::new(0.0, 2_000.0, 1.0),
                Tier::new(2_001.0, 10_000.0, 4.0),
                Tier::new(10_001.0, 50_000.0, 8.0),
                Tier::open(50_001.0, 10.0),
            ],
        ),
        IndicatorDefinition::new(
            "courrier",
            "Courrier ordinaire",
            "plis/an",
            0.20,
            vec![
                Tier::new(0.0, 50_000.0, 1.0),
                Tier::new(50_001.0, 200_000.0, 4.0),
                Tier::new(200_001.0, 1_000_000.0, 8.0),
                Tier::open(1_000_001.0, 10.0),
            ],
        ),
        IndicatorDefinition::new(
            "lrh",
            "Lettres recommandées hybrides",
            "plis/an",
            0.15,
            vec![
                Tier::new(0.0, 1_000.0, 1.0),
                Tier::new(1_001.0, 5_000.0, 4.0),
                Tier::new(5_001.0, 20_000.0, 8.0),
                Tier::open(20_001.0, 10.0),
            ],
        ),
        IndicatorDefinition::new(
            "mandats",
            "Opérations de mandats",
            "opérations/an",
            0.15,
            vec![
                Tier::new(0.0, 500.0, 1.0),
                Tier::new(501.0, 3_000.0, 4.0),
                Tier::new(3_001.0, 10_000.0, 8.0),
                Tier::open(10_001.0, 10.0),
            ],
        ),
        IndicatorDefinition::new(
            "guichets",
            "Guichets ouverts",
            "guichets",
            0.15,
            vec![
                Tier::new(0.0, 1.0, 1.0),
                Tier::new(2.0, 3.0, 4.0),
                Tier::new(4.0, 6.0, 8.0),
                Tier::open(7.0, 10.0),
            ],
        ),
        IndicatorDefinition::new(
            "clients_pro",
            "Clients professionnels",
            "comptes",
            0.10,
            vec![
                Tier::new(0.0, 20.0, 1.0),
                Tier::new(21.0, 100.0, 4.0),
                Tier::new(101.0, 300.0, 8.0),
                Tier::open(301.0, 10.0),
            ],
        ),
    ]
}

/// Class thresholds of the reference catalog, best grade first.
#[must_use]
pub fn reference_thresholds() -> Vec<ClassThreshold> {
    vec![
        ClassThreshold::new(GradeKey::A, REFERENCE_GRADE_A_MIN, "Classe A")
            .with_description("Très forte complexité"),
        ClassThreshold::new(GradeKey::B, REFERENCE_GRADE_B_MIN, "Classe B")
            .with_description("Forte complexité"),
        ClassThreshold::new(GradeKey::C, REFERENCE_GRADE_C_MIN, "Classe C")
            .with_description("Complexité moyenne"),
        ClassThreshold::new(GradeKey::D, 0.0, "Classe D").with_description("Complexité faible"),
    ]
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_weights_sum_to_one() {
        let sum: f64 = reference_indicators().iter().map(|i| i.weight).sum();
        assert!((sum - 1.0).abs() < 1e-9, "weights sum to {sum}, expected 1.0");
    }

    #[test]
    fn test_reference_thresholds_best_first() {
        let thresholds = reference_thresholds();
        let keys: Vec<GradeKey> = thresholds.iter().map(|t| t.class_key).collect();
        assert_eq!(keys, GradeKey::all());
        assert_eq!(thresholds[3].min_score, 0.0);
    }
}
