//! WellnessSession - the primary public API for a day of check-ins.
//!
//! A session keeps an in-memory log of everything the user did: entry
//! analyses, quiz submissions, generated schedules and reflections. The
//! scheduler and insights report read the most recent entries from it.
//! Nothing is written to disk.

use crate::analysis::{MoodInferenceEngine, ReflectionComparisonResult, SingleAnalysisResult};
use crate::insights::{build_insights, InsightsReport};
use crate::quiz::{score_quiz, QuizAnswers, QuizResult};
use crate::schedule::{build_schedule, DailySchedule};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Errors from WellnessSession operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("Please share something about your day first")]
    EmptyInput,

    #[error("Please complete the Chat Analyzer first.")]
    MissingChatAnalysis,

    #[error("Please complete the Wellness Quiz first.")]
    MissingQuiz,

    #[error("Need chat, quiz, and reflection data first.")]
    MissingHistory,
}

/// A logged record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry<T> {
    pub id: Uuid,
    pub recorded_at: DateTime<Utc>,
    pub value: T,
}

impl<T> Entry<T> {
    fn new(value: T) -> Self {
        Self {
            id: Uuid::new_v4(),
            recorded_at: Utc::now(),
            value,
        }
    }
}

/// Everything recorded during a session, oldest first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActivityLog {
    pub chat_history: Vec<Entry<SingleAnalysisResult>>,
    pub quiz_history: Vec<Entry<QuizResult>>,
    pub schedule_history: Vec<Entry<DailySchedule>>,
    pub reflection_history: Vec<Entry<ReflectionComparisonResult>>,
}

impl ActivityLog {
    pub fn latest_analysis(&self) -> Option<&SingleAnalysisResult> {
        self.chat_history.last().map(|e| &e.value)
    }

    pub fn latest_quiz(&self) -> Option<&QuizResult> {
        self.quiz_history.last().map(|e| &e.value)
    }

    pub fn latest_schedule(&self) -> Option<&DailySchedule> {
        self.schedule_history.last().map(|e| &e.value)
    }

    pub fn latest_reflection(&self) -> Option<&ReflectionComparisonResult> {
        self.reflection_history.last().map(|e| &e.value)
    }
}

/// A user's check-ins for one run of the application.
#[derive(Debug, Clone, Default)]
pub struct WellnessSession {
    engine: MoodInferenceEngine,
    log: ActivityLog,
}

/// Reject blank text, returning the original otherwise.
fn require_text(text: &str) -> Result<&str, SessionError> {
    if text.trim().is_empty() {
        Err(SessionError::EmptyInput)
    } else {
        Ok(text)
    }
}

impl WellnessSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn engine(&self) -> &MoodInferenceEngine {
        &self.engine
    }

    pub fn log(&self) -> &ActivityLog {
        &self.log
    }

    /// Analyze a diary entry and record the result.
    pub fn analyze_entry(&mut self, text: &str) -> Result<&SingleAnalysisResult, SessionError> {
        let text = require_text(text)?;
        let result = self.engine.analyze(text);

        tracing::info!(
            target: "wellsync::session",
            mood = result.mood.short_name(),
            "Recorded entry analysis"
        );

        self.log.chat_history.push(Entry::new(result));
        Ok(&self.log.chat_history[self.log.chat_history.len() - 1].value)
    }

    /// Score a quiz and record the result.
    pub fn submit_quiz(&mut self, answers: &QuizAnswers) -> &QuizResult {
        let result = score_quiz(answers);

        tracing::info!(
            target: "wellsync::session",
            wellness_score = result.wellness_score,
            "Recorded quiz"
        );

        self.log.quiz_history.push(Entry::new(result));
        &self.log.quiz_history[self.log.quiz_history.len() - 1].value
    }

    /// Build today's routine from the latest analysis and quiz.
    pub fn daily_schedule(&mut self) -> Result<DailySchedule, SessionError> {
        let mood = self
            .log
            .latest_analysis()
            .ok_or(SessionError::MissingChatAnalysis)?
            .mood;
        let wellness_score = self
            .log
            .latest_quiz()
            .ok_or(SessionError::MissingQuiz)?
            .wellness_score;

        let schedule = build_schedule(mood, wellness_score);
        self.log.schedule_history.push(Entry::new(schedule.clone()));
        Ok(schedule)
    }

    /// Compare the morning mood label with an evening entry and record it.
    pub fn reflect(
        &mut self,
        morning_label: &str,
        evening_text: &str,
    ) -> Result<&ReflectionComparisonResult, SessionError> {
        let evening_text = require_text(evening_text)?;
        let result = self
            .engine
            .compare_reflection_label(morning_label, evening_text);

        tracing::info!(
            target: "wellsync::session",
            trend = result.trend.as_str(),
            mood_change = result.mood_change,
            "Recorded reflection"
        );

        self.log.reflection_history.push(Entry::new(result));
        Ok(&self.log.reflection_history[self.log.reflection_history.len() - 1].value)
    }

    /// Summary of the latest quiz and reflection.
    pub fn insights(&self) -> Result<InsightsReport, SessionError> {
        match (
            self.log.latest_analysis(),
            self.log.latest_quiz(),
            self.log.latest_reflection(),
        ) {
            (Some(_), Some(quiz), Some(reflection)) => Ok(build_insights(quiz, reflection)),
            _ => Err(SessionError::MissingHistory),
        }
    }
}
