//! Fixed keyword tables and canned text.
//!
//! Two mood precedence chains exist. Entry analysis checks Tired before
//! Stressed before Happy before Calm; evening reflection checks Happy
//! first, then Stressed, Tired and Calm. Both orders are kept as observed
//! and should not be merged without a product decision.

use crate::mood::{MoodCategory, MoodTrend};
use crate::rules::KeywordRule;

const TIRED_WORDS: &[&str] = &["tired", "exhausted", "fatigue", "drained", "sleepy", "worn out"];
const STRESS_WORDS: &[&str] = &[
    "stress",
    "anxious",
    "worried",
    "overwhelmed",
    "pressure",
    "tense",
    "frustrated",
];
const HAPPY_WORDS: &[&str] = &[
    "happy",
    "great",
    "wonderful",
    "amazing",
    "excited",
    "positive",
    "good",
    "love",
];
const REFLECTION_HAPPY_WORDS: &[&str] = &[
    "happy",
    "great",
    "wonderful",
    "amazing",
    "excited",
    "positive",
    "good",
    "love",
    "proud",
];
const CALM_WORDS: &[&str] = &["calm", "peaceful", "relaxed", "serene", "tranquil", "mindful"];

/// Mood and confidence produced by an analysis rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredMood {
    pub mood: MoodCategory,
    pub confidence: f64,
}

/// Confidence reported when no mood rule fires.
pub const NEUTRAL_CONFIDENCE: f64 = 0.60;

/// Precedence for single-entry analysis.
pub const ANALYSIS_MOOD_RULES: [KeywordRule<ScoredMood>; 4] = [
    KeywordRule::new(
        TIRED_WORDS,
        ScoredMood {
            mood: MoodCategory::Tired,
            confidence: 0.85,
        },
    ),
    KeywordRule::new(
        STRESS_WORDS,
        ScoredMood {
            mood: MoodCategory::Stressed,
            confidence: 0.90,
        },
    ),
    KeywordRule::new(
        HAPPY_WORDS,
        ScoredMood {
            mood: MoodCategory::Happy,
            confidence: 0.88,
        },
    ),
    KeywordRule::new(
        CALM_WORDS,
        ScoredMood {
            mood: MoodCategory::Calm,
            confidence: 0.82,
        },
    ),
];

/// Precedence for the evening half of a reflection. Scores come from
/// `MoodCategory::baseline_score`.
pub const REFLECTION_MOOD_RULES: [KeywordRule<MoodCategory>; 4] = [
    KeywordRule::new(REFLECTION_HAPPY_WORDS, MoodCategory::Happy),
    KeywordRule::new(STRESS_WORDS, MoodCategory::Stressed),
    KeywordRule::new(TIRED_WORDS, MoodCategory::Tired),
    KeywordRule::new(CALM_WORDS, MoodCategory::Calm),
];

pub const DEFAULT_STRESS_FACTOR: &str = "General daily challenges";

pub const STRESS_FACTOR_RULES: [KeywordRule<&str>; 5] = [
    KeywordRule::new(&["work", "job", "deadline"], "Work-related pressure"),
    KeywordRule::new(&["sleep", "tired", "rest"], "Insufficient rest"),
    KeywordRule::new(&["family", "relationship", "friend"], "Relationship concerns"),
    KeywordRule::new(&["health", "sick", "pain"], "Health concerns"),
    KeywordRule::new(&["money", "financial", "budget"], "Financial worries"),
];

pub const DEFAULT_INSIGHT: &str = "Every day is a step forward in your wellness journey";

pub const INSIGHT_RULES: [KeywordRule<&str>; 5] = [
    KeywordRule::new(
        &["accomplished", "completed"],
        "You had a productive day - celebrate your wins!",
    ),
    KeywordRule::new(
        &["challenge", "difficult"],
        "You faced challenges today - that shows resilience",
    ),
    KeywordRule::new(
        &["learn", "growth"],
        "You're focused on growth - keep that mindset!",
    ),
    KeywordRule::new(
        &["social", "friend", "family"],
        "You valued connections today - relationships matter",
    ),
    KeywordRule::new(&["rest", "break"], "You prioritized self-care - that's important"),
];

/// Suggestion shown after analyzing an entry.
pub fn mood_suggestion(mood: MoodCategory) -> &'static str {
    match mood {
        MoodCategory::Tired => {
            "Your body is telling you it needs rest. Consider taking a short break, staying hydrated, and getting quality sleep tonight. You deserve to recharge."
        }
        MoodCategory::Stressed => {
            "Take a deep breath. Try a 5-minute meditation or a short walk to calm your mind. Breaking tasks into smaller steps can help reduce overwhelm."
        }
        MoodCategory::Happy => {
            "That's wonderful! Keep riding this positive wave. Share your good energy with others and celebrate your wins, no matter how small."
        }
        MoodCategory::Calm => {
            "You're in a great mental space. Use this moment to reflect, plan, or simply enjoy the peace. This is your foundation for a great day."
        }
        MoodCategory::Neutral => {
            "Remember to take care of yourself today. You're doing great!"
        }
    }
}

/// Suggestion shown after comparing morning and evening moods.
pub fn trend_suggestion(trend: MoodTrend) -> &'static str {
    match trend {
        MoodTrend::Improved => {
            "Your mood improved today - great work! Identify what helped and try to repeat it tomorrow. You're building positive momentum."
        }
        MoodTrend::Declined => {
            "Your mood shifted today. That's okay - tomorrow is a fresh start. Consider what you need more of: rest, support, or a change of pace."
        }
        MoodTrend::Stable => {
            "Your mood stayed consistent today. Use this stability as a foundation to build on. Small positive changes can create big shifts."
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trigger_words_are_lowercase() {
        let tables: Vec<&[&str]> = ANALYSIS_MOOD_RULES
            .iter()
            .map(|r| r.keywords)
            .chain(REFLECTION_MOOD_RULES.iter().map(|r| r.keywords))
            .chain(STRESS_FACTOR_RULES.iter().map(|r| r.keywords))
            .chain(INSIGHT_RULES.iter().map(|r| r.keywords))
            .collect();

        for words in tables {
            for word in words {
                assert_eq!(*word, word.to_lowercase(), "trigger word {word:?} must be lowercase");
            }
        }
    }

    #[test]
    fn test_precedence_orders_differ() {
        let analysis: Vec<MoodCategory> = ANALYSIS_MOOD_RULES.iter().map(|r| r.outcome.mood).collect();
        let reflection: Vec<MoodCategory> = REFLECTION_MOOD_RULES.iter().map(|r| r.outcome).collect();

        assert_eq!(
            analysis,
            vec![
                MoodCategory::Tired,
                MoodCategory::Stressed,
                MoodCategory::Happy,
                MoodCategory::Calm
            ]
        );
        assert_eq!(
            reflection,
            vec![
                MoodCategory::Happy,
                MoodCategory::Stressed,
                MoodCategory::Tired,
                MoodCategory::Calm
            ]
        );
    }

    #[test]
    fn test_every_mood_has_distinct_suggestion() {
        let mut seen: Vec<&str> = MoodCategory::ALL.iter().map(|m| mood_suggestion(*m)).collect();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), MoodCategory::ALL.len());
    }
}
