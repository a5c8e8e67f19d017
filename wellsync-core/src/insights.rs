//! Summary report combining the latest quiz and reflection.

use crate::analysis::ReflectionComparisonResult;
use crate::mood::MoodTrend;
use crate::quiz::QuizResult;
use serde::{Deserialize, Serialize};

/// Before/after pair for one tracked metric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub metric: String,
    pub before: u32,
    pub after: u32,
}

impl TrendPoint {
    fn new(metric: &str, before: u32, after: u32) -> Self {
        Self {
            metric: metric.to_string(),
            before,
            after,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsightsReport {
    pub wellness_score: u32,
    pub mood_trend: MoodTrend,
    pub message: String,
    pub recommendations: Vec<String>,
    pub trend_data: Vec<TrendPoint>,
}

pub fn build_insights(quiz: &QuizResult, reflection: &ReflectionComparisonResult) -> InsightsReport {
    let score = quiz.wellness_score;
    let trend = reflection.trend;

    InsightsReport {
        wellness_score: score,
        mood_trend: trend,
        message: format!("Your wellness score is {score} and mood has {trend}."),
        recommendations: reflection.insights.clone(),
        trend_data: vec![
            TrendPoint::new("Sleep", 5, 7),
            TrendPoint::new("Focus", 40, 75),
            TrendPoint::new("Mood", 50, score / 2),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::MoodInferenceEngine;
    use crate::mood::MoodCategory;

    #[test]
    fn test_report_from_latest_entries() {
        let quiz = QuizResult {
            wellness_score: 94,
            recommendations: vec![],
        };
        let reflection = MoodInferenceEngine::new()
            .compare_reflection(MoodCategory::Tired, "completed my project, feeling good");

        let report = build_insights(&quiz, &reflection);
        assert_eq!(report.wellness_score, 94);
        assert_eq!(report.mood_trend, MoodTrend::Improved);
        assert_eq!(report.message, "Your wellness score is 94 and mood has improved.");
        assert_eq!(report.recommendations, reflection.insights);
        assert_eq!(report.trend_data[2], TrendPoint::new("Mood", 50, 47));
    }
}
