//! Core types for analysis results.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::score::CringeLabel;

/// One rule that fired, with the points it contributed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectedPattern {
    pub label: String,
    /// Serialized with an explicit sign, e.g. `"+15"`.
    #[serde(with = "signed_points")]
    pub points: i32,
    pub occurrences: usize,
    pub description: String,
}

impl DetectedPattern {
    /// Entry for a rule that matched `occurrences` times.
    pub fn counted(label: &str, points: i32, occurrences: usize) -> Self {
        Self {
            label: label.to_string(),
            points,
            occurrences,
            description: found_instances(occurrences),
        }
    }

    /// The points formatted the way they are displayed.
    pub fn points_display(&self) -> String {
        format_points(self.points)
    }
}

/// "Found 1 instance" / "Found 3 instances".
pub fn found_instances(n: usize) -> String {
    let plural = if n > 1 { "s" } else { "" };
    format!("Found {} instance{}", n, plural)
}

/// Format points with an explicit sign.
pub fn format_points(points: i32) -> String {
    format!("{:+}", points)
}

/// The full verdict for one piece of text.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// The input, verbatim.
    pub original_text: String,
    /// Capped at 100.
    pub score: i32,
    pub label: CringeLabel,
    pub detected_patterns: Vec<DetectedPattern>,
    /// The input with every match wrapped in a highlight span.
    pub annotated_text: String,
    pub created_at: DateTime<Utc>,
}

impl AnalysisResult {
    /// Sum of awarded points before the cap.
    pub fn total_points(&self) -> i32 {
        self.detected_patterns.iter().map(|p| p.points).sum()
    }

    /// Whether the score hit the cap.
    pub fn is_capped(&self) -> bool {
        self.total_points() > self.score
    }

    /// Look up a detected pattern by label.
    pub fn pattern(&self, label: &str) -> Option<&DetectedPattern> {
        self.detected_patterns.iter().find(|p| p.label == label)
    }

    /// The `n` highest-scoring patterns; ties keep evaluation order.
    pub fn top_patterns(&self, n: usize) -> Vec<&DetectedPattern> {
        let mut patterns: Vec<&DetectedPattern> = self.detected_patterns.iter().collect();
        patterns.sort_by(|a, b| b.points.cmp(&a.points));
        patterns.truncate(n);
        patterns
    }
}

/// Before/after scores for a rewrite.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comparison {
    pub before: AnalysisResult,
    pub after: AnalysisResult,
    pub rewritten: String,
}

impl Comparison {
    /// Points removed by the rewrite. Negative when the rewrite scored worse.
    pub fn improvement(&self) -> i32 {
        self.before.score - self.after.score
    }
}

mod signed_points {
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(points: &i32, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_points(*points))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i32, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.trim_start_matches('+')
            .parse()
            .map_err(|_| de::Error::custom(format!("invalid points value {:?}", raw)))
    }
}
