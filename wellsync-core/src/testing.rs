//! Testing utilities for WellSync.
//!
//! This module provides tools for integration testing:
//! - `TestHarness` for scripted days of check-ins
//! - Assertion helpers for verifying what the session recorded

use crate::analysis::{ReflectionComparisonResult, SingleAnalysisResult};
use crate::mood::{MoodCategory, MoodTrend};
use crate::quiz::QuizAnswers;
use crate::session::WellnessSession;

/// Drives a `WellnessSession` through a scripted day.
pub struct TestHarness {
    pub session: WellnessSession,
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

impl TestHarness {
    pub fn new() -> Self {
        Self {
            session: WellnessSession::new(),
        }
    }

    /// Analyze an entry, panicking if the session rejects it.
    pub fn entry(&mut self, text: &str) -> SingleAnalysisResult {
        match self.session.analyze_entry(text) {
            Ok(result) => result.clone(),
            Err(e) => panic!("entry {text:?} rejected: {e}"),
        }
    }

    /// Submit quiz answers given as form text.
    pub fn quiz(&mut self, answers: [&str; 5]) -> u32 {
        self.session
            .submit_quiz(&QuizAnswers::from_raw(&answers))
            .wellness_score
    }

    /// Record a reflection, panicking if the session rejects it.
    pub fn reflect(&mut self, morning: &str, evening: &str) -> ReflectionComparisonResult {
        match self.session.reflect(morning, evening) {
            Ok(result) => result.clone(),
            Err(e) => panic!("reflection {evening:?} rejected: {e}"),
        }
    }

    /// Assert the latest analyzed mood.
    pub fn assert_mood(&self, expected: MoodCategory) {
        let actual = self
            .session
            .log()
            .latest_analysis()
            .map(|r| r.mood);
        assert_eq!(actual, Some(expected), "latest analyzed mood");
    }

    /// Assert the latest reflection trend.
    pub fn assert_trend(&self, expected: MoodTrend) {
        let actual = self
            .session
            .log()
            .latest_reflection()
            .map(|r| r.trend);
        assert_eq!(actual, Some(expected), "latest reflection trend");
    }

    /// Assert the latest analysis lists a stress factor.
    pub fn assert_stress_factor(&self, factor: &str) {
        let factors = self
            .session
            .log()
            .latest_analysis()
            .map(|r| r.stress_factors.clone())
            .unwrap_or_default();
        assert!(
            factors.iter().any(|f| f == factor),
            "expected stress factor {factor:?}, got {factors:?}"
        );
    }
}
