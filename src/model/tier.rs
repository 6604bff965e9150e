//! Scoring tiers and the validated tier table.
//!
//! A [`TierTable`] is the only way the engine looks up points for a value.
//! It is built once (from configuration or through [`TierTableBuilder`]) and
//! rejects overlapping, gapped or non-covering tier lists up front, so
//! [`TierTable::resolve`] never has to fail.
//!
//! Tier bounds are inclusive on both ends, so two consecutive tiers always
//! leave a step between them (`0-2000` then `2001-10000`). The largest step
//! accepted is the indicator's granularity: `1` for counts, smaller for
//! fractional indicators such as ratios.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::config::ConfigError;
use crate::error::{GradingError, Result};

/// Default granularity, suited to count indicators.
pub const DEFAULT_TIER_GRANULARITY: f64 = 1.0;

/// A closed numeric range mapped to a fixed number of points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct Tier {
    /// Inclusive lower bound
    pub min: f64,
    /// Inclusive upper bound, `None` for the open-ended top tier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    /// Points awarded when a value falls in this tier
    pub points: f64,
}

impl Tier {
    /// Create a bounded tier
    #[must_use]
    pub const fn new(min: f64, max: f64, points: f64) -> Self {
        Self {
            min,
            max: Some(max),
            points,
        }
    }

    /// Create an open-ended tier (`[min, +inf)`)
    #[must_use]
    pub const fn open(min: f64, points: f64) -> Self {
        Self {
            min,
            max: None,
            points,
        }
    }

    /// Upper bound, with `+inf` for open-ended tiers
    #[must_use]
    pub fn upper(&self) -> f64 {
        self.max.unwrap_or(f64::INFINITY)
    }

    /// Check whether `value` lies in `[min, max]`
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.upper()
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.max {
            Some(max) if max.is_finite() => write!(f, "{}-{} ({} pts)", self.min, max, self.points),
            _ => write!(f, "{}+ ({} pts)", self.min, self.points),
        }
    }
}

/// Tier list sorted by `min`, contiguous and covering `[0, +inf)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Tier>", into = "Vec<Tier>")]
pub struct TierTable {
    tiers: Vec<Tier>,
}

impl TierTable {
    /// Validate and sort a tier list of a count indicator.
    pub fn new(tiers: Vec<Tier>) -> Result<Self> {
        Self::with_granularity(tiers, DEFAULT_TIER_GRANULARITY)
    }

    /// Validate and sort a tier list, accepting steps up to `granularity`
    /// between consecutive tiers.
    pub fn with_granularity(tiers: Vec<Tier>, granularity: f64) -> Result<Self> {
        let errors = check_tiers("tiers", &tiers, granularity);
        if !errors.is_empty() {
            return Err(GradingError::InvalidConfig(errors));
        }

        let mut tiers = tiers;
        tiers.sort_by(|a, b| a.min.total_cmp(&b.min));
        Ok(Self { tiers })
    }

    /// Create a tier table builder
    pub fn builder() -> TierTableBuilder {
        TierTableBuilder::default()
    }

    /// Tiers in ascending order
    #[must_use]
    pub fn tiers(&self) -> &[Tier] {
        &self.tiers
    }

    /// Lowest tier
    #[must_use]
    pub fn lowest(&self) -> &Tier {
        // non-empty by construction
        &self.tiers[0]
    }

    /// Highest tier
    #[must_use]
    pub fn highest(&self) -> &Tier {
        &self.tiers[self.tiers.len() - 1]
    }

    /// Largest number of points any tier awards
    #[must_use]
    pub fn max_points(&self) -> f64 {
        self.tiers.iter().map(|t| t.points).fold(0.0_f64, f64::max)
    }

    /// Find the tier for a value.
    ///
    /// Returns the first tier containing the value. Values below the lowest
    /// tier (negative volumes, NaN) clamp to the lowest tier. Values that fall
    /// in the step between two tiers (2000.5 with `0-2000` then `2001-10000`)
    /// resolve to the highest tier starting at or below them.
    #[must_use]
    pub fn resolve(&self, value: f64) -> &Tier {
        if let Some(tier) = self.tiers.iter().find(|t| t.contains(value)) {
            return tier;
        }

        let lowest = self.lowest();
        if value.is_nan() || value < lowest.min {
            tracing::debug!(value, min = lowest.min, "Value below lowest tier, clamping");
            return lowest;
        }

        self.tiers
            .iter()
            .rev()
            .find(|t| t.min <= value)
            .unwrap_or(lowest)
    }
}

impl TryFrom<Vec<Tier>> for TierTable {
    type Error = GradingError;

    fn try_from(tiers: Vec<Tier>) -> Result<Self> {
        Self::new(tiers)
    }
}

impl From<TierTable> for Vec<Tier> {
    fn from(table: TierTable) -> Self {
        table.tiers
    }
}

/// Builder for constructing a [`TierTable`] with a fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct TierTableBuilder {
    tiers: Vec<Tier>,
    granularity: Option<f64>,
}

impl TierTableBuilder {
    /// Add a bounded tier
    pub fn tier(mut self, min: f64, max: f64, points: f64) -> Self {
        self.tiers.push(Tier::new(min, max, points));
        self
    }

    /// Add the open-ended top tier
    pub fn open_tier(mut self, min: f64, points: f64) -> Self {
        self.tiers.push(Tier::open(min, points));
        self
    }

    /// Set the largest step accepted between consecutive tiers
    pub const fn granularity(mut self, granularity: f64) -> Self {
        self.granularity = Some(granularity);
        self
    }

    /// Validate and build the table
    pub fn build(self) -> Result<TierTable> {
        let granularity = self.granularity.unwrap_or(DEFAULT_TIER_GRANULARITY);
        TierTable::with_granularity(self.tiers, granularity)
    }
}

/// Check a tier list, reporting every problem under `field`.
///
/// Consecutive tiers must not overlap and may leave at most `granularity`
/// between one tier's `max` and the next tier's `min`.
pub(crate) fn check_tiers(field: &str, tiers: &[Tier], granularity: f64) -> Vec<ConfigError> {
    let mut errors = Vec::new();
    let error = |message: String| ConfigError {
        field: field.to_string(),
        message,
    };

    if !granularity.is_finite() || granularity <= 0.0 {
        errors.push(error(format!("Granularity must be strictly positive, got {granularity}")));
        return errors;
    }

    if tiers.is_empty() {
        errors.push(error("At least one tier is required".to_string()));
        return errors;
    }

    for tier in tiers {
        if !tier.min.is_finite() {
            errors.push(error(format!("Tier min must be finite, got {}", tier.min)));
        }
        if !tier.points.is_finite() || tier.points < 0.0 {
            errors.push(error(format!(
                "Tier points must be finite and non-negative, got {}",
                tier.points
            )));
        }
        match tier.max {
            Some(max) if max.is_nan() => {
                errors.push(error(format!("Tier starting at {} has a NaN max", tier.min)));
            }
            Some(max) if max < tier.min => {
                errors.push(error(format!("Tier max {max} is below its min {}", tier.min)));
            }
            _ => {}
        }
    }
    if !errors.is_empty() {
        return errors;
    }

    let mut sorted: Vec<&Tier> = tiers.iter().collect();
    sorted.sort_by(|a, b| a.min.total_cmp(&b.min));

    for pair in sorted.windows(2) {
        let (prev, next) = (pair[0], pair[1]);
        if next.min <= prev.upper() {
            errors.push(error(format!("Tier {next} overlaps tier {prev}")));
        } else if next.min - prev.upper() > granularity {
            errors.push(error(format!(
                "Gap between tier {prev} and tier {next} exceeds granularity {granularity}"
            )));
        }
    }

    let lowest = sorted[0];
    if lowest.min > 0.0 {
        errors.push(error(format!(
            "Lowest tier must start at or below 0, starts at {}",
            lowest.min
        )));
    }

    let highest = sorted[sorted.len() - 1];
    if highest.upper() != f64::INFINITY {
        errors.push(error(format!("Top tier {highest} must be open-ended")));
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn colis_tiers() -> TierTable {
        TierTable::builder()
            .tier(0.0, 2000.0, 1.0)
            .tier(2001.0, 10000.0, 4.0)
            .tier(10001.0, 50000.0, 8.0)
            .open_tier(50001.0, 10.0)
            .build()
            .expect("valid tiers")
    }

    #[test]
    fn test_resolve_inside_tiers() {
        let table = colis_tiers();
        assert_eq!(table.resolve(0.0).points, 1.0);
        assert_eq!(table.resolve(2000.0).points, 1.0);
        assert_eq!(table.resolve(2001.0).points, 4.0);
        assert_eq!(table.resolve(12000.0).points, 8.0);
        assert_eq!(table.resolve(1.0e12).points, 10.0);
    }

    #[test]
    fn test_resolve_clamps_below_lowest() {
        let table = colis_tiers();
        assert_eq!(table.resolve(-5.0).points, 1.0);
        assert_eq!(table.resolve(f64::NAN).points, 1.0);
        assert_eq!(table.resolve(f64::NEG_INFINITY).points, 1.0);
    }

    #[test]
    fn test_resolve_between_integer_tiers() {
        let table = colis_tiers();
        assert_eq!(table.resolve(2000.5).points, 1.0);
        assert_eq!(table.resolve(10000.9).points, 4.0);
    }

    #[test]
    fn test_unsorted_input_is_sorted() {
        let table = TierTable::new(vec![Tier::open(11.0, 5.0), Tier::new(0.0, 10.0, 1.0)])
            .expect("valid tiers");
        assert_eq!(table.lowest().points, 1.0);
        assert_eq!(table.highest().points, 5.0);
        assert_eq!(table.max_points(), 5.0);
    }

    #[test]
    fn test_overlap_rejected() {
        let tiers = [Tier::new(0.0, 100.0, 1.0), Tier::open(50.0, 2.0)];
        let errors = check_tiers("tiers", &tiers, 1.0);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("overlaps"));
    }

    #[test]
    fn test_gap_rejected() {
        let tiers = [Tier::new(0.0, 100.0, 1.0), Tier::open(500.0, 2.0)];
        let errors = check_tiers("tiers", &tiers, 1.0);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("Gap"));
    }

    #[test]
    fn test_fractional_granularity() {
        let ratio = [Tier::new(0.0, 0.2, 1.0), Tier::open(1.1, 2.0)];
        assert!(check_tiers("tiers", &ratio, 1.0).is_empty());
        let errors = check_tiers("tiers", &ratio, 0.01);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("exceeds granularity 0.01"));

        let table = TierTable::builder()
            .tier(0.0, 0.2, 1.0)
            .open_tier(0.21, 2.0)
            .granularity(0.01)
            .build()
            .expect("contiguous at 0.01");
        assert_eq!(table.resolve(0.205).points, 1.0);
        assert_eq!(table.resolve(0.9).points, 2.0);
    }

    #[test]
    fn test_granularity_must_be_positive() {
        let tiers = [Tier::open(0.0, 1.0)];
        assert_eq!(check_tiers("tiers", &tiers, 0.0).len(), 1);
        assert_eq!(check_tiers("tiers", &tiers, f64::NAN).len(), 1);
        assert!(TierTable::with_granularity(tiers.to_vec(), -1.0).is_err());
    }

    #[test]
    fn test_domain_coverage_required() {
        let errors = check_tiers("tiers", &[Tier::new(10.0, 100.0, 1.0)], 1.0);
        assert_eq!(errors.len(), 2);
        assert!(errors.iter().any(|e| e.message.contains("at or below 0")));
        assert!(errors.iter().any(|e| e.message.contains("open-ended")));
    }

    #[test]
    fn test_empty_and_invalid_points_rejected() {
        assert_eq!(check_tiers("tiers", &[], 1.0).len(), 1);
        let errors = check_tiers("tiers", &[Tier::open(0.0, -1.0)], 1.0);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("non-negative"));
    }

    #[test]
    fn test_infinite_max_counts_as_open() {
        let table = TierTable::new(vec![Tier::new(0.0, f64::INFINITY, 3.0)]);
        assert!(table.is_ok());
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: std::result::Result<TierTable, _> =
            serde_json::from_str(r#"[{"min": 0, "max": 9, "points": 1}, {"min": 10, "points": 2}]"#);
        assert!(ok.is_ok());

        let bad: std::result::Result<TierTable, _> =
            serde_json::from_str(r#"[{"min": 0, "max": 9, "points": 1}]"#);
        assert!(bad.is_err());
    }
}
