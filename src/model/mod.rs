//! Core data types for unit grading.
//!
//! Configuration records ([`IndicatorDefinition`], [`ClassThreshold`],
//! [`Tier`]) are plain serde types. [`TierTable`] is the validated form of a
//! tier list and the only place tier lookup happens. [`EntityMetrics`] is the
//! canonical per-unit input; [`MetricsAdapter`] produces it from loosely
//! shaped upstream records.

mod grade;
mod indicator;
mod metrics;
mod tier;

pub use grade::{ClassThreshold, GradeKey};
pub use indicator::IndicatorDefinition;
pub use metrics::{EntityMetrics, MetricsAdapter};
pub use tier::{Tier, TierTable, TierTableBuilder, DEFAULT_TIER_GRANULARITY};

pub(crate) use tier::check_tiers;
