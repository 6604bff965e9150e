//! Validated class threshold table and the score classifier.

use serde::Serialize;

use crate::config::Validatable;
use crate::error::{GradingError, Result};
use crate::model::{ClassThreshold, GradeKey};

/// Class thresholds ordered best grade first, ending with a catch-all.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ThresholdTable {
    thresholds: Vec<ClassThreshold>,
}

impl ThresholdTable {
    /// Validate a threshold list.
    pub fn new(thresholds: Vec<ClassThreshold>) -> Result<Self> {
        let errors = thresholds.as_slice().validate();
        if !errors.is_empty() {
            return Err(GradingError::InvalidConfig(errors));
        }
        Ok(Self { thresholds })
    }

    /// Map a global score to its grade.
    ///
    /// Returns the first threshold (best first) whose `min_score` the score
    /// reaches. The catch-all lowest grade takes everything else, NaN included.
    #[must_use]
    pub fn classify(&self, score: f64) -> &ClassThreshold {
        self.thresholds
            .iter()
            .find(|t| t.min_score <= score)
            .unwrap_or_else(|| self.catch_all())
    }

    /// The lowest grade of the table
    #[must_use]
    pub fn catch_all(&self) -> &ClassThreshold {
        // non-empty by construction
        &self.thresholds[self.thresholds.len() - 1]
    }

    /// Threshold row for a grade, if the table uses it
    #[must_use]
    pub fn get(&self, grade: GradeKey) -> Option<&ClassThreshold> {
        self.thresholds.iter().find(|t| t.class_key == grade)
    }

    /// Iterate best grade first
    pub fn iter(&self) -> impl Iterator<Item = &ClassThreshold> {
        self.thresholds.iter()
    }

    /// Number of grades in the table
    #[must_use]
    pub fn len(&self) -> usize {
        self.thresholds.len()
    }

    /// Always false for a validated table
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.thresholds.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::reference_thresholds;

    fn table() -> ThresholdTable {
        ThresholdTable::new(reference_thresholds()).expect("reference thresholds are valid")
    }

    #[test]
    fn test_classify_boundaries() {
        let table = table();
        assert_eq!(table.classify(10.0).class_key, GradeKey::A);
        assert_eq!(table.classify(8.5).class_key, GradeKey::A);
        assert_eq!(table.classify(8.49).class_key, GradeKey::B);
        assert_eq!(table.classify(7.2).class_key, GradeKey::B);
        assert_eq!(table.classify(6.0).class_key, GradeKey::B);
        assert_eq!(table.classify(3.5).class_key, GradeKey::C);
        assert_eq!(table.classify(0.0).class_key, GradeKey::D);
    }

    #[test]
    fn test_classify_is_total() {
        let table = table();
        assert_eq!(table.classify(-3.0).class_key, GradeKey::D);
        assert_eq!(table.classify(f64::NAN).class_key, GradeKey::D);
        assert_eq!(table.classify(f64::INFINITY).class_key, GradeKey::A);
    }

    #[test]
    fn test_partial_table() {
        let table = ThresholdTable::new(vec![
            ClassThreshold::new(GradeKey::B, 5.0, "Haute"),
            ClassThreshold::new(GradeKey::D, 0.0, "Basse"),
        ])
        .expect("valid table");
        assert_eq!(table.classify(6.0).label, "Haute");
        assert!(table.get(GradeKey::A).is_none());
        assert_eq!(table.catch_all().class_key, GradeKey::D);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_invalid_table_rejected() {
        let result = ThresholdTable::new(vec![ClassThreshold::new(GradeKey::A, 5.0, "A")]);
        assert!(matches!(result, Err(GradingError::InvalidConfig(_))));
    }
}
