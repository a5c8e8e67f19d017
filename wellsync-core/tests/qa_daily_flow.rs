//! QA tests for a full day of check-ins using the session API.
//!
//! These tests walk the same path a user takes through the app:
//! - Analyze a diary entry
//! - Take the lifestyle quiz
//! - Generate the daily routine
//! - Reflect in the evening and read the insights report
//!
//! Run with: `cargo test -p wellsync-core --test qa_daily_flow`

use wellsync_core::{
    MoodCategory, MoodTrend, ScheduleProgress, SessionError, TestHarness, WellnessSession,
};

// =============================================================================
// HAPPY PATH
// =============================================================================

#[test]
fn test_full_day() {
    let mut harness = TestHarness::new();

    println!("\n=== Morning entry ===");
    let entry = harness.entry("Worried about the deadline at work, barely got any sleep");
    println!("  mood: {}", entry.mood);
    harness.assert_mood(MoodCategory::Stressed);
    harness.assert_stress_factor("Work-related pressure");
    harness.assert_stress_factor("Insufficient rest");

    println!("=== Quiz ===");
    let score = harness.quiz(["5", "4", "no", "6", "11"]);
    // 5 + 6 + 10 + 7 + 5 = 33 points
    assert_eq!(score, 66);

    println!("=== Schedule ===");
    let schedule = harness.session.daily_schedule().expect("schedule");
    assert_eq!(schedule.mood_focus, MoodCategory::Stressed);
    assert!(schedule.routine[1].contains("mindfulness"));
    assert_eq!(schedule.routine.len(), 8);

    println!("=== Evening reflection ===");
    let reflection = harness.reflect(
        entry.mood.label(),
        "Completed the report and took a break with a friend. Feeling good!",
    );
    harness.assert_trend(MoodTrend::Improved);
    assert_eq!(reflection.mood_change, 50);
    assert_eq!(
        reflection.insights,
        vec![
            "You had a productive day - celebrate your wins!",
            "You valued connections today - relationships matter",
            "You prioritized self-care - that's important",
        ]
    );

    println!("=== Insights ===");
    let report = harness.session.insights().expect("insights");
    assert_eq!(report.wellness_score, 66);
    assert_eq!(report.message, "Your wellness score is 66 and mood has improved.");
    assert_eq!(report.recommendations, reflection.insights);
    assert_eq!(report.trend_data.len(), 3);
    assert_eq!(report.trend_data[2].after, 33);
}

#[test]
fn test_declining_day() {
    let mut harness = TestHarness::new();
    harness.entry("Calm start, peaceful coffee");
    harness.assert_mood(MoodCategory::Calm);

    let reflection = harness.reflect("Calm & Peaceful", "Overwhelmed by everything tonight");
    assert_eq!(reflection.evening_mood, MoodCategory::Stressed);
    assert_eq!(reflection.mood_change, -40);
    harness.assert_trend(MoodTrend::Declined);
}

// =============================================================================
// ERROR STATES
// =============================================================================

#[test]
fn test_out_of_order_requests() {
    let mut session = WellnessSession::new();

    assert_eq!(
        session.daily_schedule().unwrap_err(),
        SessionError::MissingChatAnalysis
    );
    assert_eq!(session.insights().unwrap_err(), SessionError::MissingHistory);
    assert_eq!(session.analyze_entry("").unwrap_err(), SessionError::EmptyInput);
    assert_eq!(
        session.reflect("Neutral", "   ").unwrap_err(),
        SessionError::EmptyInput
    );

    // Nothing was recorded by the failed calls.
    assert!(session.log().chat_history.is_empty());
    assert!(session.log().reflection_history.is_empty());
    assert!(session.log().schedule_history.is_empty());
}

// =============================================================================
// SCHEDULE PROGRESS
// =============================================================================

#[test]
fn test_checking_off_the_routine() {
    let mut harness = TestHarness::new();
    harness.entry("happy");
    harness.quiz(["8", "1", "no", "9", "8"]);

    let schedule = harness.session.daily_schedule().expect("schedule");
    // Happy adds a hobby slot and a score of 100 adds the "great job" line.
    assert_eq!(schedule.routine.len(), 9);

    let mut progress = ScheduleProgress::new(schedule.routine.len());
    for i in 0..3 {
        progress.toggle(i);
    }
    assert_eq!(progress.completion_percentage(), 33);
}
