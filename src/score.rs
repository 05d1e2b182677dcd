//! Score clamping, labels and severity bands.
//!
//! The score is a plain sum of awarded points capped at 100. The label is a
//! pure function of the capped score.

use serde::{Deserialize, Serialize};

/// Point weights for the structural rules that are not part of the catalog.
pub mod points {
    pub const WALL_OF_TEXT: i32 = 20;
    pub const HASHTAG_OVERLOAD: i32 = 15;
    pub const TRAGEDY_TO_SUCCESS: i32 = 30; // per match
}

/// Upper bound for a reported score.
pub const MAX_SCORE: i32 = 100;

/// Label band thresholds (inclusive upper bounds).
pub mod bands {
    pub const NORMAL_MAX: i32 = 20;
    pub const CORPORATE_MAX: i32 = 50;
    pub const PEAK_MAX: i32 = 75;
    pub const NICE: i32 = 69;
}

/// Cap a raw point total to the reportable range.
pub fn clamp(total: i32) -> i32 {
    total.clamp(0, MAX_SCORE)
}

/// Points for `count` occurrences of a rule worth `weight` each. Saturates
/// instead of overflowing on huge inputs.
pub fn weighted(weight: i32, count: usize) -> i32 {
    weight.saturating_mul(i32::try_from(count).unwrap_or(i32::MAX))
}

/// The verdict attached to a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CringeLabel {
    #[serde(rename = "Nice... but cringe")]
    Nice,
    #[serde(rename = "Achievement Unlocked: Maximum Cringe")]
    MaximumCringe,
    #[serde(rename = "Actually Normal")]
    ActuallyNormal,
    #[serde(rename = "Mildly Corporate")]
    MildlyCorporate,
    #[serde(rename = "Peak LinkedIn")]
    PeakLinkedIn,
    #[serde(rename = "Viral Cringe Material")]
    ViralCringe,
}

impl CringeLabel {
    /// Derive the label from a clamped score. Exact values win over bands.
    pub fn for_score(score: i32) -> Self {
        match score {
            bands::NICE => CringeLabel::Nice,
            MAX_SCORE => CringeLabel::MaximumCringe,
            s if s <= bands::NORMAL_MAX => CringeLabel::ActuallyNormal,
            s if s <= bands::CORPORATE_MAX => CringeLabel::MildlyCorporate,
            s if s <= bands::PEAK_MAX => CringeLabel::PeakLinkedIn,
            _ => CringeLabel::ViralCringe,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CringeLabel::Nice => "Nice... but cringe",
            CringeLabel::MaximumCringe => "Achievement Unlocked: Maximum Cringe",
            CringeLabel::ActuallyNormal => "Actually Normal",
            CringeLabel::MildlyCorporate => "Mildly Corporate",
            CringeLabel::PeakLinkedIn => "Peak LinkedIn",
            CringeLabel::ViralCringe => "Viral Cringe Material",
        }
    }
}

impl std::fmt::Display for CringeLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Coarse severity used for coloring scores. Unlike [`CringeLabel`] it has
/// no special cases for 69 or 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Low,
    Moderate,
    High,
    Extreme,
}

impl Severity {
    pub fn for_score(score: i32) -> Self {
        match score {
            s if s <= bands::NORMAL_MAX => Severity::Low,
            s if s <= bands::CORPORATE_MAX => Severity::Moderate,
            s if s <= bands::PEAK_MAX => Severity::High,
            _ => Severity::Extreme,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weighted_saturates() {
        assert_eq!(weighted(15, 2), 30);
        assert_eq!(weighted(30, usize::MAX), i32::MAX);
        assert_eq!(clamp(weighted(2, 1 << 40)), MAX_SCORE);
    }

    #[test]
    fn test_label_thresholds() {
        assert_eq!(CringeLabel::for_score(0), CringeLabel::ActuallyNormal);
        assert_eq!(CringeLabel::for_score(20), CringeLabel::ActuallyNormal);
        assert_eq!(CringeLabel::for_score(21), CringeLabel::MildlyCorporate);
        assert_eq!(CringeLabel::for_score(50), CringeLabel::MildlyCorporate);
        assert_eq!(CringeLabel::for_score(51), CringeLabel::PeakLinkedIn);
        assert_eq!(CringeLabel::for_score(68), CringeLabel::PeakLinkedIn);
        assert_eq!(CringeLabel::for_score(70), CringeLabel::PeakLinkedIn);
        assert_eq!(CringeLabel::for_score(75), CringeLabel::PeakLinkedIn);
        assert_eq!(CringeLabel::for_score(76), CringeLabel::ViralCringe);
        assert_eq!(CringeLabel::for_score(99), CringeLabel::ViralCringe);
    }

    #[test]
    fn test_special_values_override_bands() {
        assert_eq!(CringeLabel::for_score(69), CringeLabel::Nice);
        assert_eq!(CringeLabel::for_score(100), CringeLabel::MaximumCringe);
    }

    #[test]
    fn test_label_strings() {
        assert_eq!(CringeLabel::Nice.to_string(), "Nice... but cringe");
        assert_eq!(
            serde_json::to_string(&CringeLabel::PeakLinkedIn).unwrap(),
            "\"Peak LinkedIn\""
        );
    }

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(0), 0);
        assert_eq!(clamp(99), 99);
        assert_eq!(clamp(100), 100);
        assert_eq!(clamp(245), 100);
    }

    #[test]
    fn test_severity_ignores_special_values() {
        assert_eq!(Severity::for_score(69), Severity::High);
        assert_eq!(Severity::for_score(100), Severity::Extreme);
        assert_eq!(Severity::for_score(20), Severity::Low);
        assert_eq!(Severity::for_score(50), Severity::Moderate);
    }
}
