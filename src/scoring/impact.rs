//! Re-classification impact between a baseline grade and a computed grade.
//!
//! Baseline grades come from outside the engine as free-form labels
//! ("Classe C", "classe-b", "D", ...). They are normalized to a [`GradeKey`]
//! before ranks are compared.

use std::cmp::Ordering;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::catalog::ThresholdTable;
use crate::model::GradeKey;

/// Directional change between a baseline grade and a new grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Impact {
    /// New grade ranks higher than the baseline
    Promotion,
    /// New grade ranks lower than the baseline
    Reclassement,
    /// Same grade
    Stable,
}

impl Impact {
    /// Compare a baseline grade with a newly computed one
    #[must_use]
    pub fn between(baseline: GradeKey, simulated: GradeKey) -> Self {
        match simulated.rank().cmp(&baseline.rank()) {
            Ordering::Greater => Self::Promotion,
            Ordering::Less => Self::Reclassement,
            Ordering::Equal => Self::Stable,
        }
    }

    /// Display name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Promotion => "Promotion",
            Self::Reclassement => "Reclassement",
            Self::Stable => "Stable",
        }
    }
}

impl std::fmt::Display for Impact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Impact together with the grades it was derived from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImpactAssessment {
    /// Baseline grade after normalization
    pub baseline: GradeKey,
    /// False when the baseline label matched no grade and the lowest grade was assumed
    pub baseline_recognized: bool,
    /// Newly computed grade
    pub simulated: GradeKey,
    pub impact: Impact,
}

/// Grade letter following a prefix word ("Classe C", "grade:b", "ClasseA").
static PREFIXED_GRADE: LazyLock<Regex> = LazyLock::new(|| {
    let letters: Vec<&str> = GradeKey::all().iter().map(GradeKey::letter).collect();
    let pattern = format!(
        r"(?i)\b(?:classe|class|grade|cat[ée]gorie|cat)[\s._:-]*({})\b",
        letters.join("|")
    );
    Regex::new(&pattern).expect("static regex")
});

/// Normalize a free-form baseline label to a grade.
///
/// Configured threshold labels are matched first (case-insensitive), then a
/// grade letter after a prefix word anywhere in the label ("Recette d'Oran -
/// Classe B"), then a label that is nothing but a grade letter ("B"). Other
/// single letters in the label ("Bureau A. Classe C") are ignored.
#[must_use]
pub fn normalize_grade_label(label: &str, thresholds: &ThresholdTable) -> Option<GradeKey> {
    let label = label.trim();
    if label.is_empty() {
        return None;
    }

    let lowered = label.to_lowercase();
    if let Some(threshold) = thresholds
        .iter()
        .find(|t| t.label.trim().to_lowercase() == lowered)
    {
        return Some(threshold.class_key);
    }

    PREFIXED_GRADE
        .captures(label)
        .and_then(|caps| caps.get(1))
        .and_then(|m| GradeKey::from_letter(m.as_str()))
        .or_else(|| GradeKey::from_letter(label))
}

/// Determine the impact of moving from a baseline label to a computed grade.
///
/// An unrecognized baseline label is treated as the lowest grade.
pub fn assess_impact(
    baseline_label: &str,
    simulated: GradeKey,
    thresholds: &ThresholdTable,
) -> ImpactAssessment {
    let (baseline, baseline_recognized) = match normalize_grade_label(baseline_label, thresholds) {
        Some(grade) => (grade, true),
        None => {
            tracing::warn!(
                label = baseline_label,
                assumed = %GradeKey::lowest(),
                "Unrecognized baseline grade label, assuming lowest grade"
            );
            (GradeKey::lowest(), false)
        }
    };

    ImpactAssessment {
        baseline,
        baseline_recognized,
        simulated,
        impact: Impact::between(baseline, simulated),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::reference_thresholds;
    use crate::model::ClassThreshold;

    fn table() -> ThresholdTable {
        ThresholdTable::new(reference_thresholds()).expect("valid")
    }

    #[test]
    fn test_impact_between() {
        assert_eq!(Impact::between(GradeKey::C, GradeKey::B), Impact::Promotion);
        assert_eq!(Impact::between(GradeKey::A, GradeKey::D), Impact::Reclassement);
        assert_eq!(Impact::between(GradeKey::B, GradeKey::B), Impact::Stable);
    }

    #[test]
    fn test_normalize_common_labels() {
        let table = table();
        let cases = [
            ("Classe A", Some(GradeKey::A)),
            ("classe b", Some(GradeKey::B)),
            ("CLASSE C", Some(GradeKey::C)),
            ("Classe D", Some(GradeKey::D)),
            ("Classe-C", Some(GradeKey::C)),
            ("ClasseB", Some(GradeKey::B)),
            ("Grade: d", Some(GradeKey::D)),
            ("Catégorie A", Some(GradeKey::A)),
            (" B ", Some(GradeKey::B)),
            ("c", Some(GradeKey::C)),
            ("Recette d'Oran - Classe B", Some(GradeKey::B)),
            ("Bureau A. Classe C", Some(GradeKey::C)),
            ("Agence B (classe d)", Some(GradeKey::D)),
            ("A. Martin", None),
            ("Bureau A", None),
            ("Classe", None),
            ("Classe E", None),
            ("", None),
            ("hors classement", None),
        ];
        for (label, expected) in cases {
            assert_eq!(normalize_grade_label(label, &table), expected, "label {label:?}");
        }
    }

    #[test]
    fn test_normalize_prefers_configured_labels() {
        let table = ThresholdTable::new(vec![
            ClassThreshold::new(GradeKey::A, 5.0, "Excellence"),
            ClassThreshold::new(GradeKey::D, 0.0, "Base"),
        ])
        .expect("valid");
        assert_eq!(normalize_grade_label("excellence", &table), Some(GradeKey::A));
        assert_eq!(normalize_grade_label("BASE", &table), Some(GradeKey::D));
    }

    #[test]
    fn test_assess_unrecognized_defaults_to_lowest() {
        let assessment = assess_impact("inconnue", GradeKey::C, &table());
        assert_eq!(assessment.baseline, GradeKey::D);
        assert!(!assessment.baseline_recognized);
        assert_eq!(assessment.impact, Impact::Promotion);
    }

    #[test]
    fn test_assess_recognized() {
        let assessment = assess_impact("Classe A", GradeKey::D, &table());
        assert!(assessment.baseline_recognized);
        assert_eq!(assessment.impact, Impact::Reclassement);
    }
}
