#![no_main]
use libfuzzer_sys::fuzz_target;
use unit_grading::config::reference_thresholds;
use unit_grading::scoring::{assess_impact, normalize_grade_label};
use unit_grading::{GradeKey, ThresholdTable};

/// Fuzz baseline grade label normalization.
///
/// Any label must normalize without panicking, and impact assessment must
/// always settle on a grade.
fuzz_target!(|data: &[u8]| {
    if let Ok(label) = std::str::from_utf8(data) {
        let Ok(table) = ThresholdTable::new(reference_thresholds()) else {
            return;
        };
        let _ = normalize_grade_label(label, &table);
        let _ = assess_impact(label, GradeKey::B, &table);
    }
});
