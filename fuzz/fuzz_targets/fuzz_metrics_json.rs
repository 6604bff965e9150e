#![no_main]
use libfuzzer_sys::fuzz_target;
use unit_grading::GradingEngine;

/// Fuzz the metrics adapter with arbitrary JSON records.
///
/// Records that parse as JSON go through the reference catalog's adapter
/// and, when accepted, through a full evaluation.
fuzz_target!(|data: &[u8]| {
    let Ok(record) = serde_json::from_slice::<serde_json::Value>(data) else {
        return;
    };
    let Ok(engine) = GradingEngine::with_defaults() else {
        return;
    };

    if let Ok(metrics) = engine.catalog().metrics_adapter().extract(&record) {
        let _ = engine.evaluate(&metrics, Some("Classe C"));
    }
});
