//! The fixed subject set and the per-subject marks mapping.

use serde::{Deserialize, Serialize};

/// One of the five fixed subjects a student records marks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Subject {
    Math,
    Science,
    Social,
    Computer,
    Gk,
}

impl Subject {
    /// All subjects, in canonical order.
    pub const ALL: [Subject; 5] = [
        Subject::Math,
        Subject::Science,
        Subject::Social,
        Subject::Computer,
        Subject::Gk,
    ];

    /// Lowercase key used in stored mappings and link templates.
    #[inline]
    pub fn key(self) -> &'static str {
        match self {
            Subject::Math => "math",
            Subject::Science => "science",
            Subject::Social => "social",
            Subject::Computer => "computer",
            Subject::Gk => "gk",
        }
    }

    /// Capitalized label for presentation.
    #[inline]
    pub fn label(self) -> &'static str {
        match self {
            Subject::Math => "Math",
            Subject::Science => "Science",
            Subject::Social => "Social",
            Subject::Computer => "Computer",
            Subject::Gk => "Gk",
        }
    }
}

/// Integer score per subject for one submission event.
///
/// Scores are unvalidated: negative or >100 values are stored as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Marks {
    #[serde(default)]
    pub math: i64,
    #[serde(default)]
    pub science: i64,
    #[serde(default)]
    pub social: i64,
    #[serde(default)]
    pub computer: i64,
    #[serde(default)]
    pub gk: i64,
}

impl Marks {
    /// Score for a single subject.
    #[inline]
    pub fn get(&self, subject: Subject) -> i64 {
        match subject {
            Subject::Math => self.math,
            Subject::Science => self.science,
            Subject::Social => self.social,
            Subject::Computer => self.computer,
            Subject::Gk => self.gk,
        }
    }

    /// Iterate `(subject, score)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Subject, i64)> + '_ {
        Subject::ALL.into_iter().map(|s| (s, self.get(s)))
    }

    /// The five scores in canonical subject order.
    pub fn values(&self) -> [i64; 5] {
        [self.math, self.science, self.social, self.computer, self.gk]
    }
}

/// Coerce a raw form value to a score.
///
/// Absent or unparsable input becomes 0, matching the submission contract.
#[inline]
pub fn coerce_score(raw: &str) -> i64 {
    raw.trim().parse().unwrap_or(0)
}
