//! Grade keys and their ordinal ranks.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Ordinal grade assigned to a unit, best grade first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
pub enum GradeKey {
    /// Highest complexity class
    A,
    B,
    C,
    /// Lowest class, catch-all
    D,
}

impl GradeKey {
    /// Get all grades, best first
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::A, Self::B, Self::C, Self::D]
    }

    /// The lowest-ranked grade
    #[must_use]
    pub const fn lowest() -> Self {
        Self::D
    }

    /// Ordinal rank, higher is better (A = 4 ... D = 1)
    #[must_use]
    pub const fn rank(&self) -> u8 {
        match self {
            Self::A => 4,
            Self::B => 3,
            Self::C => 2,
            Self::D => 1,
        }
    }

    /// Get grade letter
    #[must_use]
    pub const fn letter(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
        }
    }

    /// Parse a bare grade letter (case-insensitive)
    #[must_use]
    pub fn from_letter(letter: &str) -> Option<Self> {
        match letter.trim().to_ascii_uppercase().as_str() {
            "A" => Some(Self::A),
            "B" => Some(Self::B),
            "C" => Some(Self::C),
            "D" => Some(Self::D),
            _ => None,
        }
    }
}

/// One row of the class threshold table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ClassThreshold {
    /// Grade assigned when the score reaches `min_score`
    pub class_key: GradeKey,
    /// Inclusive lower bound on the global score
    pub min_score: f64,
    /// Display label (e.g. "Classe A")
    pub label: String,
    /// Free-form description shown next to the grade
    #[serde(default)]
    pub description: String,
}

impl ClassThreshold {
    /// Create a threshold row
    pub fn new(class_key: GradeKey, min_score: f64, label: impl Into<String>) -> Self {
        Self {
            class_key,
            min_score,
            label: label.into(),
            description: String::new(),
        }
    }

    /// Attach a description
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

impl std::fmt::Display for GradeKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.letter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranks_follow_declaration_order() {
        let ranks: Vec<u8> = GradeKey::all().iter().map(GradeKey::rank).collect();
        assert_eq!(ranks, vec![4, 3, 2, 1]);
        assert_eq!(GradeKey::lowest().rank(), 1);
    }

    #[test]
    fn test_from_letter() {
        assert_eq!(GradeKey::from_letter("a"), Some(GradeKey::A));
        assert_eq!(GradeKey::from_letter(" D "), Some(GradeKey::D));
        assert_eq!(GradeKey::from_letter("E"), None);
        assert_eq!(GradeKey::from_letter(""), None);
    }
}
