//! Mood inference over free text.
//!
//! `MoodInferenceEngine` is a pure function over its input: no I/O, no
//! shared state, no randomness. Calling it twice with the same text gives
//! the same result, and it can be shared freely across threads.
//!
//! The engine never fails. Blank input is the caller's concern; given an
//! empty string it simply produces the neutral assessment.

use crate::keywords::{
    self, ScoredMood, ANALYSIS_MOOD_RULES, DEFAULT_INSIGHT, DEFAULT_STRESS_FACTOR, INSIGHT_RULES,
    NEUTRAL_CONFIDENCE, REFLECTION_MOOD_RULES, STRESS_FACTOR_RULES,
};
use crate::mood::{MoodCategory, MoodTrend};
use crate::rules::{all_matches, first_match, KeywordRule, NormalizedText};
use serde::{Deserialize, Serialize};

/// Assessment of a single diary entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SingleAnalysisResult {
    pub mood: MoodCategory,
    #[serde(rename = "confidence_score")]
    pub confidence: f64,
    /// Never empty; falls back to "General daily challenges".
    #[serde(rename = "key_stress_factors")]
    pub stress_factors: Vec<String>,
    #[serde(rename = "motivational_suggestion")]
    pub suggestion: String,
}

/// Comparison of a morning check-in with an evening reflection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReflectionComparisonResult {
    pub morning_mood: MoodCategory,
    pub evening_mood: MoodCategory,
    /// Evening score minus morning baseline.
    pub mood_change: i32,
    #[serde(rename = "moodTrend")]
    pub trend: MoodTrend,
    /// Never empty; falls back to a general encouragement.
    pub insights: Vec<String>,
    pub suggestion: String,
}

/// Keyword-driven mood classifier.
#[derive(Debug, Clone, Copy, Default)]
pub struct MoodInferenceEngine;

impl MoodInferenceEngine {
    pub fn new() -> Self {
        Self
    }

    /// Classify a diary entry and list the stress factors it mentions.
    pub fn analyze(&self, text: &str) -> SingleAnalysisResult {
        let normalized = NormalizedText::new(text);

        let ScoredMood { mood, confidence } = first_match(&ANALYSIS_MOOD_RULES, &normalized)
            .copied()
            .unwrap_or(ScoredMood {
                mood: MoodCategory::Neutral,
                confidence: NEUTRAL_CONFIDENCE,
            });

        let stress_factors =
            collect_with_fallback(&STRESS_FACTOR_RULES, &normalized, DEFAULT_STRESS_FACTOR);

        tracing::debug!(
            target: "wellsync::analysis",
            mood = mood.short_name(),
            confidence,
            factors = stress_factors.len(),
            "Analyzed entry"
        );

        SingleAnalysisResult {
            mood,
            confidence,
            stress_factors,
            suggestion: keywords::mood_suggestion(mood).to_string(),
        }
    }

    /// Compare the mood picked this morning with how the evening entry reads.
    pub fn compare_reflection(
        &self,
        morning_mood: MoodCategory,
        evening_text: &str,
    ) -> ReflectionComparisonResult {
        let normalized = NormalizedText::new(evening_text);

        let evening_mood = self.evening_mood(&normalized);
        let mood_change = evening_mood.baseline_score() - morning_mood.baseline_score();
        let trend = MoodTrend::from_change(mood_change);
        let insights = collect_with_fallback(&INSIGHT_RULES, &normalized, DEFAULT_INSIGHT);

        tracing::debug!(
            target: "wellsync::analysis",
            morning = morning_mood.short_name(),
            evening = evening_mood.short_name(),
            mood_change,
            trend = trend.as_str(),
            "Compared reflection"
        );

        ReflectionComparisonResult {
            morning_mood,
            evening_mood,
            mood_change,
            trend,
            insights,
            suggestion: keywords::trend_suggestion(trend).to_string(),
        }
    }

    /// Same as `compare_reflection`, for a morning mood given as a label.
    ///
    /// Unrecognized labels count as `Neutral`.
    pub fn compare_reflection_label(
        &self,
        morning_label: &str,
        evening_text: &str,
    ) -> ReflectionComparisonResult {
        self.compare_reflection(MoodCategory::from_label_or_neutral(morning_label), evening_text)
    }

    fn evening_mood(&self, text: &NormalizedText) -> MoodCategory {
        first_match(&REFLECTION_MOOD_RULES, text)
            .copied()
            .unwrap_or(MoodCategory::Neutral)
    }
}

/// Every matching label in order, or just the fallback when none match.
fn collect_with_fallback(
    rules: &[KeywordRule<&'static str>],
    text: &NormalizedText,
    fallback: &str,
) -> Vec<String> {
    let mut labels: Vec<String> = all_matches(rules, text)
        .into_iter()
        .map(|label| label.to_string())
        .collect();
    if labels.is_empty() {
        labels.push(fallback.to_string());
    }
    labels
}
