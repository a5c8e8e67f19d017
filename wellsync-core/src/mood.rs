//! Mood categories, baseline scores and trend classification.
//!
//! The five categories form a closed set. Each carries a fixed baseline
//! score used when comparing a morning check-in against an evening
//! reflection, and a display label shared with the presentation layer.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Score assumed for a mood label nobody recognizes.
pub const NEUTRAL_BASELINE: i32 = 50;

/// Change (in either direction) that must be exceeded before a trend
/// counts as improved or declined.
pub const TREND_THRESHOLD: i32 = 10;

/// One of the five mood classifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoodCategory {
    #[serde(rename = "Happy & Positive")]
    Happy,
    #[serde(rename = "Calm & Peaceful")]
    Calm,
    #[serde(rename = "Neutral")]
    Neutral,
    #[serde(rename = "Tired & Fatigued")]
    Tired,
    #[serde(rename = "Stressed & Anxious")]
    Stressed,
}

impl MoodCategory {
    /// All categories, in the order the morning check-in offers them.
    pub const ALL: [MoodCategory; 5] = [
        MoodCategory::Happy,
        MoodCategory::Calm,
        MoodCategory::Neutral,
        MoodCategory::Tired,
        MoodCategory::Stressed,
    ];

    /// Fixed baseline score for trend comparison.
    pub fn baseline_score(self) -> i32 {
        match self {
            MoodCategory::Happy => 85,
            MoodCategory::Calm => 75,
            MoodCategory::Neutral => NEUTRAL_BASELINE,
            MoodCategory::Tired => 40,
            MoodCategory::Stressed => 35,
        }
    }

    /// Display label, e.g. "Tired & Fatigued".
    pub fn label(self) -> &'static str {
        match self {
            MoodCategory::Happy => "Happy & Positive",
            MoodCategory::Calm => "Calm & Peaceful",
            MoodCategory::Neutral => "Neutral",
            MoodCategory::Tired => "Tired & Fatigued",
            MoodCategory::Stressed => "Stressed & Anxious",
        }
    }

    /// Short name, e.g. "Tired".
    pub fn short_name(self) -> &'static str {
        match self {
            MoodCategory::Happy => "Happy",
            MoodCategory::Calm => "Calm",
            MoodCategory::Neutral => "Neutral",
            MoodCategory::Tired => "Tired",
            MoodCategory::Stressed => "Stressed",
        }
    }

    /// Look up a category by display label or short name.
    ///
    /// Matching ignores case and surrounding whitespace.
    pub fn from_label(label: &str) -> Option<Self> {
        let wanted = label.trim();
        Self::ALL.into_iter().find(|mood| {
            mood.label().eq_ignore_ascii_case(wanted) || mood.short_name().eq_ignore_ascii_case(wanted)
        })
    }

    /// Lenient lookup for caller-supplied labels: anything unrecognized is
    /// treated as `Neutral`.
    pub fn from_label_or_neutral(label: &str) -> Self {
        Self::from_label(label).unwrap_or(MoodCategory::Neutral)
    }
}

impl fmt::Display for MoodCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned by strict mood parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown mood: {0}")]
pub struct UnknownMood(pub String);

impl FromStr for MoodCategory {
    type Err = UnknownMood;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| UnknownMood(s.to_string()))
    }
}

/// Baseline score for an arbitrary label, defaulting to the neutral score.
pub fn baseline_score_for_label(label: &str) -> i32 {
    MoodCategory::from_label(label)
        .map(MoodCategory::baseline_score)
        .unwrap_or(NEUTRAL_BASELINE)
}

/// Direction of mood change between two check-ins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodTrend {
    Improved,
    Declined,
    Stable,
}

impl MoodTrend {
    /// Classify a signed score change.
    pub fn from_change(change: i32) -> Self {
        if change > TREND_THRESHOLD {
            MoodTrend::Improved
        } else if change < -TREND_THRESHOLD {
            MoodTrend::Declined
        } else {
            MoodTrend::Stable
        }
    }

    /// Lowercase name as used in messages ("improved", ...).
    pub fn as_str(self) -> &'static str {
        match self {
            MoodTrend::Improved => "improved",
            MoodTrend::Declined => "declined",
            MoodTrend::Stable => "stable",
        }
    }
}

impl fmt::Display for MoodTrend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_baseline_scores() {
        assert_eq!(MoodCategory::Happy.baseline_score(), 85);
        assert_eq!(MoodCategory::Calm.baseline_score(), 75);
        assert_eq!(MoodCategory::Neutral.baseline_score(), 50);
        assert_eq!(MoodCategory::Tired.baseline_score(), 40);
        assert_eq!(MoodCategory::Stressed.baseline_score(), 35);
    }

    #[test]
    fn test_from_label_accepts_label_and_short_name() {
        assert_eq!(
            MoodCategory::from_label("Stressed & Anxious"),
            Some(MoodCategory::Stressed)
        );
        assert_eq!(MoodCategory::from_label("  calm "), Some(MoodCategory::Calm));
        assert_eq!(
            MoodCategory::from_label("tired & fatigued"),
            Some(MoodCategory::Tired)
        );
        assert_eq!(MoodCategory::from_label("ecstatic"), None);
    }

    #[test]
    fn test_unknown_label_scores_as_neutral() {
        assert_eq!(baseline_score_for_label("Grumpy"), NEUTRAL_BASELINE);
        assert_eq!(
            MoodCategory::from_label_or_neutral("Grumpy"),
            MoodCategory::Neutral
        );
    }

    #[test]
    fn test_strict_parse_reports_input() {
        let err = "Grumpy".parse::<MoodCategory>().unwrap_err();
        assert_eq!(err, UnknownMood("Grumpy".to_string()));
        assert_eq!(err.to_string(), "Unknown mood: Grumpy");
    }

    #[test]
    fn test_trend_thresholds_are_exclusive() {
        assert_eq!(MoodTrend::from_change(11), MoodTrend::Improved);
        assert_eq!(MoodTrend::from_change(10), MoodTrend::Stable);
        assert_eq!(MoodTrend::from_change(0), MoodTrend::Stable);
        assert_eq!(MoodTrend::from_change(-10), MoodTrend::Stable);
        assert_eq!(MoodTrend::from_change(-11), MoodTrend::Declined);
    }

    #[test]
    fn test_serialized_forms() {
        assert_eq!(
            serde_json::to_string(&MoodCategory::Happy).unwrap(),
            "\"Happy & Positive\""
        );
        assert_eq!(
            serde_json::to_string(&MoodTrend::Declined).unwrap(),
            "\"declined\""
        );
    }
}
