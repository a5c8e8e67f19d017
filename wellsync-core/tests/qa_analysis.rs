//! QA tests for entry analysis and reflection through the public API.
//!
//! These tests verify the behaviour the presentation layer relies on:
//! - Mood precedence and confidence values
//! - Stress factors and insights are never empty
//! - Case-insensitivity and repeatability
//! - Field names of the serialized results
//!
//! Run with: `cargo test -p wellsync-core --test qa_analysis`

use std::thread;

use wellsync_core::{MoodCategory, MoodInferenceEngine, MoodTrend};

const SAMPLE_ENTRIES: &[&str] = &[
    "",
    "just an ordinary day",
    "I'm so stressed about my job deadline",
    "Slept badly, exhausted and sick",
    "Had a wonderful dinner with family",
    "Peaceful evening, budget finally balanced",
    "nothing to report",
];

// =============================================================================
// SINGLE ENTRY ANALYSIS
// =============================================================================

#[test]
fn test_tired_keywords_without_higher_precedence() {
    let engine = MoodInferenceEngine::new();

    for text in ["tired", "So drained today", "feeling worn out", "sleepy again"] {
        let result = engine.analyze(text);
        assert_eq!(result.mood, MoodCategory::Tired, "text: {text:?}");
        assert_eq!(result.confidence, 0.85, "text: {text:?}");
    }
}

#[test]
fn test_stressed_about_job_deadline() {
    let result = MoodInferenceEngine::new().analyze("I'm so stressed about my job deadline");

    assert_eq!(result.mood, MoodCategory::Stressed);
    assert!(result
        .stress_factors
        .iter()
        .any(|f| f == "Work-related pressure"));
}

#[test]
fn test_ordinary_day_is_neutral() {
    let result = MoodInferenceEngine::new().analyze("just an ordinary day");

    assert_eq!(result.mood, MoodCategory::Neutral);
    assert_eq!(result.confidence, 0.60);
    assert_eq!(result.stress_factors, vec!["General daily challenges"]);
}

#[test]
fn test_sequences_never_empty() {
    let engine = MoodInferenceEngine::new();

    for text in SAMPLE_ENTRIES {
        assert!(!engine.analyze(text).stress_factors.is_empty(), "text: {text:?}");
        for morning in MoodCategory::ALL {
            assert!(
                !engine.compare_reflection(morning, text).insights.is_empty(),
                "text: {text:?}"
            );
        }
    }
}

#[test]
fn test_case_insensitivity() {
    let engine = MoodInferenceEngine::new();
    assert_eq!(engine.analyze("TIRED").mood, engine.analyze("tired").mood);
    assert_eq!(
        engine.analyze("My JOB is FINE").stress_factors,
        vec!["Work-related pressure"]
    );
}

#[test]
fn test_repeatable_across_threads() {
    let engine = MoodInferenceEngine::new();
    let expected: Vec<_> = SAMPLE_ENTRIES.iter().map(|t| engine.analyze(t)).collect();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            thread::spawn(move || {
                SAMPLE_ENTRIES
                    .iter()
                    .map(|t| engine.analyze(t))
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

// =============================================================================
// REFLECTION
// =============================================================================

#[test]
fn test_stressed_morning_happy_evening() {
    let result = MoodInferenceEngine::new()
        .compare_reflection_label("Stressed & Anxious", "I feel happy and accomplished today");

    assert_eq!(result.evening_mood, MoodCategory::Happy);
    assert_eq!(result.evening_mood.baseline_score(), 85);
    assert_eq!(result.morning_mood.baseline_score(), 35);
    assert_eq!(result.mood_change, 50);
    assert_eq!(result.trend, MoodTrend::Improved);
}

#[test]
fn test_happy_morning_still_great() {
    let result =
        MoodInferenceEngine::new().compare_reflection_label("Happy & Positive", "still feeling great");

    assert_eq!(result.evening_mood, MoodCategory::Happy);
    assert_eq!(result.mood_change, 0);
    assert_eq!(result.trend, MoodTrend::Stable);
}

#[test]
fn test_every_morning_evening_pair_is_consistent() {
    let engine = MoodInferenceEngine::new();
    let evenings = [
        ("so proud of myself", MoodCategory::Happy),
        ("tense all evening", MoodCategory::Stressed),
        ("sleepy", MoodCategory::Tired),
        ("tranquil", MoodCategory::Calm),
        ("ate soup", MoodCategory::Neutral),
    ];

    for morning in MoodCategory::ALL {
        for (text, evening) in evenings {
            let result = engine.compare_reflection(morning, text);
            assert_eq!(result.evening_mood, evening, "text: {text:?}");
            assert_eq!(
                result.mood_change,
                evening.baseline_score() - morning.baseline_score()
            );
            assert_eq!(result.trend, MoodTrend::from_change(result.mood_change));
        }
    }
}

// =============================================================================
// SERVICE BOUNDARY SHAPES
// =============================================================================

#[test]
fn test_single_analysis_json_shape() {
    let json = serde_json::to_value(MoodInferenceEngine::new().analyze("calm")).unwrap();
    let mut keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
    keys.sort();

    assert_eq!(
        keys,
        vec![
            "confidence_score",
            "key_stress_factors",
            "mood",
            "motivational_suggestion"
        ]
    );
}

#[test]
fn test_reflection_json_shape() {
    let json = serde_json::to_value(
        MoodInferenceEngine::new().compare_reflection(MoodCategory::Neutral, "calm"),
    )
    .unwrap();
    let mut keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
    keys.sort();

    assert_eq!(
        keys,
        vec![
            "eveningMood",
            "insights",
            "moodChange",
            "moodTrend",
            "morningMood",
            "suggestion"
        ]
    );
}
