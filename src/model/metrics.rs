//! Per-unit metric values and the boundary adapter that produces them.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{GradingError, MetricsErrorKind, Result};

/// Indicator key to raw value for one evaluated unit.
///
/// Keys without a value read as `0`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityMetrics {
    values: IndexMap<String, f64>,
}

impl EntityMetrics {
    /// Create an empty metrics set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a value, builder style
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: f64) -> Self {
        self.values.insert(key.into(), value);
        self
    }

    /// Set a value, returning the previous one
    pub fn insert(&mut self, key: impl Into<String>, value: f64) -> Option<f64> {
        self.values.insert(key.into(), value)
    }

    /// Get a value if present
    #[must_use]
    pub fn get(&self, key: &str) -> Option<f64> {
        self.values.get(key).copied()
    }

    /// Get a value, defaulting to `0` when absent
    #[must_use]
    pub fn value_or_zero(&self, key: &str) -> f64 {
        self.get(key).unwrap_or(0.0)
    }

    /// Number of values present
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if no values are present
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over `(key, value)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for EntityMetrics {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

// ============================================================================
// Boundary adapter
// ============================================================================

/// Nested sections searched after the record root, in order.
const NESTED_SECTIONS: &[&str] = &["metrics", "volumes"];

/// Converts loosely shaped upstream records into [`EntityMetrics`].
///
/// Upstream data may carry a value at the record root or under a nested
/// `metrics` / `volumes` object, as a JSON number or a numeric string. Only
/// the keys the adapter was built with are read; everything else is ignored.
#[derive(Debug, Clone)]
pub struct MetricsAdapter {
    keys: Vec<String>,
}

impl MetricsAdapter {
    /// Create an adapter for a set of indicator keys
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
        }
    }

    /// Extract canonical metrics from one record.
    pub fn extract(&self, record: &Value) -> Result<EntityMetrics> {
        let Some(root) = record.as_object() else {
            return Err(GradingError::metrics(
                "record",
                MetricsErrorKind::NotAnObject(json_type_name(record).to_string()),
            ));
        };

        let mut metrics = EntityMetrics::new();
        for key in &self.keys {
            let candidates = std::iter::once(root.get(key)).chain(
                NESTED_SECTIONS
                    .iter()
                    .map(|section| root.get(*section).and_then(|s| s.get(key))),
            );

            for candidate in candidates.flatten() {
                if let Some(value) = parse_metric(key, candidate)? {
                    metrics.insert(key.clone(), value);
                    break;
                }
            }
        }

        Ok(metrics)
    }
}

/// Parse a single metric value; `Ok(None)` means "no value here".
fn parse_metric(key: &str, value: &Value) -> Result<Option<f64>> {
    let parsed = match value {
        Value::Null => return Ok(None),
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let cleaned: String = s
                .chars()
                .filter(|c| !c.is_whitespace() && *c != '_')
                .collect();
            if cleaned.is_empty() {
                return Ok(None);
            }
            let cleaned = if cleaned.contains('.') {
                cleaned
            } else {
                cleaned.replace(',', ".")
            };
            cleaned.parse::<f64>().ok()
        }
        Value::Bool(_) | Value::Array(_) | Value::Object(_) => None,
    };

    match parsed {
        Some(v) if v.is_finite() => Ok(Some(v)),
        Some(_) => Err(GradingError::metrics(
            format!("value for '{key}'"),
            MetricsErrorKind::NonFinite {
                key: key.to_string(),
            },
        )),
        None => Err(GradingError::metrics(
            format!("value for '{key}'"),
            MetricsErrorKind::NotNumeric {
                key: key.to_string(),
                found: value.to_string(),
            },
        )),
    }
}

const fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn adapter() -> MetricsAdapter {
        MetricsAdapter::new(["colis", "lrh", "courrier"])
    }

    #[test]
    fn test_missing_value_reads_zero() {
        let metrics = EntityMetrics::new().with("colis", 12.0);
        assert_eq!(metrics.value_or_zero("colis"), 12.0);
        assert_eq!(metrics.value_or_zero("lrh"), 0.0);
        assert_eq!(metrics.get("lrh"), None);
    }

    #[test]
    fn test_extract_from_root_and_nested_sections() {
        let record = json!({
            "colis": 12000,
            "metrics": { "lrh": "1 500" },
            "volumes": { "courrier": "2500,5", "colis": 1 }
        });
        let metrics = adapter().extract(&record).expect("valid record");
        assert_eq!(metrics.get("colis"), Some(12000.0));
        assert_eq!(metrics.get("lrh"), Some(1500.0));
        assert_eq!(metrics.get("courrier"), Some(2500.5));
    }

    #[test]
    fn test_null_falls_through_to_nested() {
        let record = json!({ "colis": null, "volumes": { "colis": 40 } });
        let metrics = adapter().extract(&record).expect("valid record");
        assert_eq!(metrics.get("colis"), Some(40.0));
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let record = json!({ "colis": 1, "surface": 300 });
        let metrics = adapter().extract(&record).expect("valid record");
        assert_eq!(metrics.len(), 1);
    }

    #[test]
    fn test_non_numeric_rejected() {
        let record = json!({ "metrics": { "lrh": "beaucoup" } });
        let err = adapter().extract(&record).unwrap_err();
        assert!(matches!(
            err,
            GradingError::Metrics {
                source: MetricsErrorKind::NotNumeric { .. },
                ..
            }
        ));
    }

    #[test]
    fn test_non_object_rejected() {
        let err = adapter().extract(&json!([1, 2])).unwrap_err();
        assert!(err.to_string().contains("record"));
    }
}
