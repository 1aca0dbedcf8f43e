//! Threshold-based study recommendations.
//!
//! A pure classification over subject scores: each score falls into one of
//! three tiers with fixed messages and link templates. Nothing here touches
//! storage or the network.
//!
//! Two variants exist and intentionally differ:
//! - [`for_submission`] works on a single submission's integer scores and
//!   sets `allow_topic_input` for scores below 70 (a threshold distinct from
//!   the tier boundaries — kept for compatibility with existing behavior).
//! - [`for_averages`] works on per-subject averages across a user's history
//!   and omits the flag entirely.

mod tier;

use std::collections::BTreeMap;

use serde::Serialize;
use studytrack_core::{Marks, Subject};

pub use tier::Tier;

/// Scores below this allow free-text topic input on the submission variant.
pub const ALLOW_TOPIC_BELOW: i64 = 70;

/// One computed recommendation. Transient; never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationEntry {
    /// Capitalized subject label.
    pub subject: String,
    /// Assigned tier.
    pub tier: Tier,
    /// Human-readable advice.
    pub message: String,
    /// Fixed external links parameterized by subject.
    pub resources: Vec<String>,
    /// Present only on the single-submission variant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_topic_input: Option<bool>,
}

/// Recommendations for a single submission's scores.
pub fn for_submission(marks: &Marks) -> Vec<RecommendationEntry> {
    marks
        .iter()
        .map(|(subject, score)| {
            let tier = Tier::classify(score as f64);
            RecommendationEntry {
                subject: subject.label().to_owned(),
                tier,
                message: submission_message(tier, subject),
                resources: resource_links(tier, subject),
                allow_topic_input: Some(score < ALLOW_TOPIC_BELOW),
            }
        })
        .collect()
}

/// Recommendations from per-subject averages across a user's history.
///
/// Subjects absent from the map produce no entry.
pub fn for_averages(averages: &BTreeMap<Subject, f64>) -> Vec<RecommendationEntry> {
    averages
        .iter()
        .map(|(&subject, &avg)| {
            let tier = Tier::classify(avg);
            RecommendationEntry {
                subject: subject.label().to_owned(),
                tier,
                message: average_message(tier, subject),
                resources: resource_links(tier, subject),
                allow_topic_input: None,
            }
        })
        .collect()
}

/// Per-subject mean across all submitted records. Empty input yields an
/// empty map.
pub fn subject_averages<'a, I>(entries: I) -> BTreeMap<Subject, f64>
where
    I: IntoIterator<Item = &'a Marks>,
{
    let mut totals: BTreeMap<Subject, (i64, u32)> = BTreeMap::new();
    for marks in entries {
        for (subject, score) in marks.iter() {
            let slot = totals.entry(subject).or_insert((0, 0));
            slot.0 += score;
            slot.1 += 1;
        }
    }

    totals
        .into_iter()
        .map(|(subject, (total, count))| (subject, total as f64 / f64::from(count)))
        .collect()
}

fn submission_message(tier: Tier, subject: Subject) -> String {
    let label = subject.label();
    match tier {
        Tier::Critical => {
            format!("Your marks in {label} are below 35. Focus on improving this subject.")
        }
        Tier::Moderate => {
            format!("Your marks in {label} are decent, but there's room for improvement.")
        }
        Tier::Excellent => format!("Excellent performance in {label}! Keep up the great work."),
    }
}

fn average_message(tier: Tier, subject: Subject) -> String {
    let label = subject.label();
    match tier {
        Tier::Critical => {
            format!("Your average marks in {label} are below 35. Focus on improving this subject.")
        }
        Tier::Moderate => {
            format!("Your average marks in {label} are decent, but there's room for improvement.")
        }
        Tier::Excellent => format!("Excellent performance in {label}! Keep up the great work."),
    }
}

fn resource_links(tier: Tier, subject: Subject) -> Vec<String> {
    let key = subject.key();
    match tier {
        Tier::Critical => vec![
            format!("https://www.khanacademy.org/{key}"),
            format!("https://www.coursera.org/{key}"),
            format!("https://www.youtube.com/results?search_query={key}+tutorials"),
        ],
        Tier::Moderate => vec![
            format!("https://www.edx.org/{key}"),
            format!("https://www.udemy.com/{key}"),
            format!("https://www.skillshare.com/search?query={key}"),
        ],
        Tier::Excellent => vec![
            format!("https://www.ted.com/topics/{key}"),
            format!("https://www.masterclass.com/search?q={key}"),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submission_entry_per_subject_in_order() {
        let entries = for_submission(&Marks::default());
        let subjects: Vec<_> = entries.iter().map(|e| e.subject.as_str()).collect();
        assert_eq!(subjects, ["Math", "Science", "Social", "Computer", "Gk"]);
    }

    #[test]
    fn critical_submission_has_three_links_and_topic_input() {
        let marks = Marks {
            math: 30,
            science: 80,
            ..Marks::default()
        };
        let entries = for_submission(&marks);

        let math = &entries[0];
        assert_eq!(math.tier, Tier::Critical);
        assert_eq!(math.resources.len(), 3);
        assert_eq!(math.allow_topic_input, Some(true));
        assert!(math.resources[0].contains("khanacademy.org/math"));

        let science = &entries[1];
        assert_eq!(science.tier, Tier::Excellent);
        assert_eq!(science.resources.len(), 2);
        assert_eq!(science.allow_topic_input, Some(false));
    }

    #[test]
    fn topic_input_threshold_is_seventy_not_a_tier_boundary() {
        let marks = Marks {
            math: 69,
            science: 70,
            social: 74,
            ..Marks::default()
        };
        let entries = for_submission(&marks);

        // 69 and 70 share a tier but differ on the flag.
        assert_eq!(entries[0].tier, Tier::Moderate);
        assert_eq!(entries[0].allow_topic_input, Some(true));
        assert_eq!(entries[1].tier, Tier::Moderate);
        assert_eq!(entries[1].allow_topic_input, Some(false));
        assert_eq!(entries[2].allow_topic_input, Some(false));
    }

    #[test]
    fn averages_variant_omits_topic_flag() {
        let mut averages = BTreeMap::new();
        averages.insert(Subject::Math, 20.0);
        let entries = for_averages(&averages);

        assert_eq!(entries.len(), 1);
        assert!(entries[0].allow_topic_input.is_none());
        assert!(entries[0].message.starts_with("Your average marks in Math"));

        let json = serde_json::to_value(&entries[0]).unwrap();
        assert!(json.get("allow_topic_input").is_none());
    }

    #[test]
    fn subject_averages_means_across_records() {
        let first = Marks {
            math: 40,
            science: 90,
            ..Marks::default()
        };
        let second = Marks {
            math: 60,
            science: 70,
            ..Marks::default()
        };

        let averages = subject_averages([&first, &second]);
        assert_eq!(averages[&Subject::Math], 50.0);
        assert_eq!(averages[&Subject::Science], 80.0);
        // Unsubmitted subjects average to zero, not absence: every record
        // carries all five keys.
        assert_eq!(averages[&Subject::Gk], 0.0);

        assert!(subject_averages(std::iter::empty::<&Marks>()).is_empty());
    }
}
