//! Lifestyle quiz scoring.
//!
//! Five questions, each worth up to 10 points. The total is scaled to a
//! 0-100 wellness score and every answer outside the healthy band adds a
//! recommendation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum points across all five questions.
const MAX_POINTS: u32 = 50;

/// A quiz prompt as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizQuestion {
    pub id: u8,
    pub question: &'static str,
    pub placeholder: &'static str,
}

/// The five prompts, in answer order.
pub const QUIZ_QUESTIONS: [QuizQuestion; 5] = [
    QuizQuestion {
        id: 1,
        question: "How many hours do you sleep on average?",
        placeholder: "e.g., 7",
    },
    QuizQuestion {
        id: 2,
        question: "How many cups of caffeine do you drink daily?",
        placeholder: "e.g., 2",
    },
    QuizQuestion {
        id: 3,
        question: "Do you smoke?",
        placeholder: "e.g., Yes or No",
    },
    QuizQuestion {
        id: 4,
        question: "How many glasses of water do you drink daily?",
        placeholder: "e.g., 6",
    },
    QuizQuestion {
        id: 5,
        question: "How many hours do you work per day?",
        placeholder: "e.g., 9",
    },
];

/// Errors from strict answer parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    #[error("Please answer all questions before submitting.")]
    Unanswered { question_id: u8 },

    #[error("Expected {expected} answers, got {found}")]
    WrongCount { expected: usize, found: usize },
}

/// Structured quiz answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizAnswers {
    pub sleep_hours: u32,
    pub caffeine_cups: u32,
    pub smoke: bool,
    pub water_intake_glasses: u32,
    pub work_hours: u32,
}

impl Default for QuizAnswers {
    fn default() -> Self {
        Self {
            sleep_hours: 7,
            caffeine_cups: 2,
            smoke: false,
            water_intake_glasses: 6,
            work_hours: 9,
        }
    }
}

impl QuizAnswers {
    /// Build answers from free-text form input.
    ///
    /// Numbers that do not parse fall back to the defaults (7 hours sleep,
    /// 2 cups, 6 glasses, 9 hours work). Smoking counts as yes only when
    /// the answer contains "yes".
    pub fn from_raw(answers: &[&str; 5]) -> Self {
        let defaults = Self::default();
        Self {
            sleep_hours: parse_or(answers[0], defaults.sleep_hours),
            caffeine_cups: parse_or(answers[1], defaults.caffeine_cups),
            smoke: answers[2].to_lowercase().contains("yes"),
            water_intake_glasses: parse_or(answers[3], defaults.water_intake_glasses),
            work_hours: parse_or(answers[4], defaults.work_hours),
        }
    }

    /// Like `from_raw`, but every question must have a non-blank answer.
    pub fn from_form(answers: &[String]) -> Result<Self, QuizError> {
        if answers.len() != QUIZ_QUESTIONS.len() {
            return Err(QuizError::WrongCount {
                expected: QUIZ_QUESTIONS.len(),
                found: answers.len(),
            });
        }
        if let Some((question, _)) = QUIZ_QUESTIONS
            .iter()
            .zip(answers)
            .find(|(_, answer)| answer.trim().is_empty())
        {
            return Err(QuizError::Unanswered {
                question_id: question.id,
            });
        }
        Ok(Self::from_raw(&[
            answers[0].as_str(),
            answers[1].as_str(),
            answers[2].as_str(),
            answers[3].as_str(),
            answers[4].as_str(),
        ]))
    }
}

fn parse_or(raw: &str, default: u32) -> u32 {
    raw.trim().parse().unwrap_or(default)
}

/// Score and recommendations for one quiz submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizResult {
    /// 0-100.
    pub wellness_score: u32,
    pub recommendations: Vec<String>,
}

/// Score a quiz.
pub fn score_quiz(answers: &QuizAnswers) -> QuizResult {
    let mut points = 0;
    let mut recommendations = Vec::new();
    let mut recommend = |text: &str| recommendations.push(text.to_string());

    points += match answers.sleep_hours {
        7..=9 => 10,
        h if h < 6 => {
            recommend("Try to get at least 7 hours of sleep.");
            5
        }
        _ => 8,
    };

    points += match answers.caffeine_cups {
        0..=2 => 10,
        3..=4 => {
            recommend("Reduce caffeine to 2 cups or less.");
            6
        }
        _ => {
            recommend("Too much caffeine! Cut back.");
            3
        }
    };

    points += if answers.smoke {
        recommend("Avoid smoking for better lung health.");
        3
    } else {
        10
    };

    points += match answers.water_intake_glasses {
        g if g >= 8 => 10,
        g if g >= 5 => {
            recommend("Drink a little more water.");
            7
        }
        _ => {
            recommend("Increase water intake.");
            4
        }
    };

    points += match answers.work_hours {
        8..=9 => 10,
        h if h > 10 => {
            recommend("Try not to overwork.");
            5
        }
        _ => 8,
    };

    let wellness_score = points * 100 / MAX_POINTS;

    tracing::debug!(
        target: "wellsync::quiz",
        points,
        wellness_score,
        "Scored quiz"
    );

    QuizResult {
        wellness_score,
        recommendations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perfect_habits() {
        let answers = QuizAnswers {
            sleep_hours: 8,
            caffeine_cups: 1,
            smoke: false,
            water_intake_glasses: 8,
            work_hours: 8,
        };
        let result = score_quiz(&answers);
        assert_eq!(result.wellness_score, 100);
        assert!(result.recommendations.is_empty());
    }

    #[test]
    fn test_poor_habits() {
        let answers = QuizAnswers {
            sleep_hours: 4,
            caffeine_cups: 6,
            smoke: true,
            water_intake_glasses: 2,
            work_hours: 12,
        };
        let result = score_quiz(&answers);
        // 5 + 3 + 3 + 4 + 5 = 20 points
        assert_eq!(result.wellness_score, 40);
        assert_eq!(
            result.recommendations,
            vec![
                "Try to get at least 7 hours of sleep.",
                "Too much caffeine! Cut back.",
                "Avoid smoking for better lung health.",
                "Increase water intake.",
                "Try not to overwork.",
            ]
        );
    }

    #[test]
    fn test_defaults_score() {
        // 10 + 10 + 10 + 7 + 10 = 47 points
        let result = score_quiz(&QuizAnswers::default());
        assert_eq!(result.wellness_score, 94);
        assert_eq!(result.recommendations, vec!["Drink a little more water."]);
    }

    #[test]
    fn test_boundaries_without_recommendation() {
        // Six hours of sleep and ten hours of work land in the "else" bands.
        let answers = QuizAnswers {
            sleep_hours: 6,
            work_hours: 10,
            ..QuizAnswers::default()
        };
        let result = score_quiz(&answers);
        assert!(!result
            .recommendations
            .iter()
            .any(|r| r.contains("sleep") || r.contains("overwork")));
        // 8 + 10 + 10 + 7 + 8 = 43 points
        assert_eq!(result.wellness_score, 86);
    }

    #[test]
    fn test_moderate_caffeine() {
        let answers = QuizAnswers {
            caffeine_cups: 4,
            ..QuizAnswers::default()
        };
        let result = score_quiz(&answers);
        assert!(result
            .recommendations
            .contains(&"Reduce caffeine to 2 cups or less.".to_string()));
    }

    #[test]
    fn test_from_raw_fallbacks() {
        let answers = QuizAnswers::from_raw(&["", "lots", "Yes, sometimes", " 9 ", "ten"]);
        assert_eq!(answers.sleep_hours, 7);
        assert_eq!(answers.caffeine_cups, 2);
        assert!(answers.smoke);
        assert_eq!(answers.water_intake_glasses, 9);
        assert_eq!(answers.work_hours, 9);
    }

    #[test]
    fn test_from_raw_keeps_explicit_zero() {
        let answers = QuizAnswers::from_raw(&["7", "0", "no", "8", "8"]);
        assert_eq!(answers.caffeine_cups, 0);
        assert!(!answers.smoke);
    }

    #[test]
    fn test_from_form_requires_every_answer() {
        let form: Vec<String> = ["7", "2", " ", "8", "8"].iter().map(|s| s.to_string()).collect();
        assert_eq!(
            QuizAnswers::from_form(&form),
            Err(QuizError::Unanswered { question_id: 3 })
        );

        let short: Vec<String> = vec!["7".to_string()];
        assert!(matches!(
            QuizAnswers::from_form(&short),
            Err(QuizError::WrongCount { expected: 5, found: 1 })
        ));
    }
}
