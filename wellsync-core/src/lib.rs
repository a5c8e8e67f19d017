//! WellSync wellness engine.
//!
//! This crate provides:
//! - Keyword-based mood inference for diary entries
//! - Morning/evening mood comparison with trend classification
//! - Lifestyle quiz scoring and personalized daily routines
//! - An in-memory session log feeding the insights report
//!
//! # Quick Start
//!
//! ```
//! use wellsync_core::{MoodCategory, MoodInferenceEngine, MoodTrend};
//!
//! let engine = MoodInferenceEngine::new();
//!
//! let entry = engine.analyze("I'm so stressed about my job deadline");
//! assert_eq!(entry.mood, MoodCategory::Stressed);
//!
//! let day = engine.compare_reflection(MoodCategory::Stressed, "I feel happy and accomplished");
//! assert_eq!(day.trend, MoodTrend::Improved);
//! ```

pub mod analysis;
pub mod companion;
pub mod insights;
pub mod keywords;
pub mod mood;
pub mod quiz;
pub mod rules;
pub mod schedule;
pub mod session;
pub mod testing;

// Primary public API
pub use analysis::{MoodInferenceEngine, ReflectionComparisonResult, SingleAnalysisResult};
pub use companion::{ChatMessage, Companion, Sender};
pub use insights::{InsightsReport, TrendPoint};
pub use mood::{MoodCategory, MoodTrend, UnknownMood};
pub use quiz::{score_quiz, QuizAnswers, QuizError, QuizResult, QUIZ_QUESTIONS};
pub use schedule::{build_schedule, DailySchedule, ScheduleProgress};
pub use session::{SessionError, WellnessSession};
pub use testing::TestHarness;
