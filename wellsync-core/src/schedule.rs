//! Daily routine generation.
//!
//! A fixed base routine is personalized by the most recent mood and the
//! most recent wellness score.

use crate::mood::MoodCategory;
use serde::{Deserialize, Serialize};

/// Wellness score assumed when no quiz has been taken.
pub const DEFAULT_WELLNESS_SCORE: u32 = 70;

const BASE_ROUTINE: [&str; 7] = [
    "7:00 AM - Morning walk or meditation (10 mins)",
    "8:00 AM - Healthy breakfast",
    "9:00 AM - Focused work session",
    "11:00 AM - Short tea/coffee break",
    "1:00 PM - Balanced lunch",
    "5:00 PM - Light exercise or stretching",
    "9:00 PM - Reflection or journaling",
];

/// A personalized routine for the day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailySchedule {
    pub message: String,
    pub mood_focus: MoodCategory,
    pub wellness_score: u32,
    pub routine: Vec<String>,
}

/// Build today's routine from the latest mood and wellness score.
pub fn build_schedule(mood: MoodCategory, wellness_score: u32) -> DailySchedule {
    let mut routine: Vec<String> = BASE_ROUTINE.iter().map(|item| item.to_string()).collect();

    match mood {
        MoodCategory::Stressed => routine.insert(
            1,
            "7:30 AM - 10-min mindfulness breathing session".to_string(),
        ),
        MoodCategory::Tired => routine.insert(
            2,
            "10:30 AM - Short 15-min power nap recommended".to_string(),
        ),
        MoodCategory::Happy => {
            routine.push("8:00 PM - Enjoy music or a hobby session".to_string())
        }
        MoodCategory::Calm | MoodCategory::Neutral => {}
    }

    if wellness_score < 60 {
        routine.push("Sleep early tonight for better recovery".to_string());
    } else if wellness_score > 85 {
        routine.push("Great job! Maintain your current lifestyle habits".to_string());
    }

    DailySchedule {
        message: "Your personalized daily schedule is ready.".to_string(),
        mood_focus: mood,
        wellness_score,
        routine,
    }
}

/// Which routine items have been checked off.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleProgress {
    completed: Vec<usize>,
    total: usize,
}

impl ScheduleProgress {
    pub fn new(total: usize) -> Self {
        Self {
            completed: Vec::new(),
            total,
        }
    }

    /// Flip an item between done and not done. Out-of-range indices are ignored.
    pub fn toggle(&mut self, index: usize) {
        if index >= self.total {
            return;
        }
        if let Some(pos) = self.completed.iter().position(|&i| i == index) {
            self.completed.remove(pos);
        } else {
            self.completed.push(index);
        }
    }

    pub fn is_completed(&self, index: usize) -> bool {
        self.completed.contains(&index)
    }

    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Rounded percentage of items done; 0 for an empty routine.
    pub fn completion_percentage(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        ((self.completed.len() as f64 / self.total as f64) * 100.0).round() as u32
    }
}
