//! Confidence bucket module

use serde::{Deserialize, Serialize};

/// Three-level bucket derived from a 0-100 confidence score
///
/// Downstream steps branch on the bucket rather than the raw score, so the
/// thresholds are part of the contract: strictly greater than 80 is high,
/// strictly greater than 50 is medium, everything else is low. A score of
/// exactly 80 is medium; exactly 50 is low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceLevel {
    /// Score above 80
    High,
    /// Score above 50, up to and including 80
    Medium,
    /// Score of 50 or below (including the default 0)
    Low,
}

impl ConfidenceLevel {
    /// Bucket a numeric confidence score
    pub fn from_score(score: i64) -> Self {
        if score > 80 {
            ConfidenceLevel::High
        } else if score > 50 {
            ConfidenceLevel::Medium
        } else {
            ConfidenceLevel::Low
        }
    }

    /// The lowercase label used in the output record
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfidenceLevel::High => "high",
            ConfidenceLevel::Medium => "medium",
            ConfidenceLevel::Low => "low",
        }
    }
}

impl Default for ConfidenceLevel {
    fn default() -> Self {
        ConfidenceLevel::Low
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_high_above_80() {
        assert_eq!(ConfidenceLevel::from_score(85), ConfidenceLevel::High);
        assert_eq!(ConfidenceLevel::from_score(100), ConfidenceLevel::High);
    }

    #[test]
    fn test_exactly_80_is_medium() {
        assert_eq!(ConfidenceLevel::from_score(80), ConfidenceLevel::Medium);
    }

    #[test]
    fn test_exactly_50_is_low() {
        assert_eq!(ConfidenceLevel::from_score(50), ConfidenceLevel::Low);
    }

    #[test]
    fn test_zero_is_low() {
        assert_eq!(ConfidenceLevel::from_score(0), ConfidenceLevel::Low);
    }

    #[test]
    fn test_unbounded_scores() {
        // Scores are not clamped to 0-100
        assert_eq!(ConfidenceLevel::from_score(999), ConfidenceLevel::High);
        assert_eq!(ConfidenceLevel::from_score(-5), ConfidenceLevel::Low);
    }

    #[test]
    fn test_serializes_lowercase() {
        let json = serde_json::to_string(&ConfidenceLevel::High).unwrap();
        assert_eq!(json, "\"high\"");
    }

    #[test]
    fn test_as_str() {
        assert_eq!(ConfidenceLevel::Medium.as_str(), "medium");
    }
}
