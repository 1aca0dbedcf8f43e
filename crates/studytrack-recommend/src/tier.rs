//! Score tier classification.

use serde::Serialize;

/// Performance tier assigned per subject score.
///
/// The three tiers are mutually exclusive and inclusive at the lower bound:
/// exactly 35 is Moderate, exactly 75 is Excellent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// Score below 35.
    Critical,
    /// Score in 35..75.
    Moderate,
    /// Score 75 or above.
    Excellent,
}

impl Tier {
    /// Classify a score (integer scores and averages share the thresholds).
    #[inline]
    pub fn classify(score: f64) -> Self {
        if score < 35.0 {
            Tier::Critical
        } else if score < 75.0 {
            Tier::Moderate
        } else {
            Tier::Excellent
        }
    }
}
