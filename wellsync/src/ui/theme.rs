//! Color theme and styling for the WellSync TUI

use ratatui::style::{Color, Modifier, Style};
use wellsync_core::{MoodCategory, MoodTrend};

/// UI color theme
#[derive(Debug, Clone)]
pub struct WellSyncTheme {
    // Base colors
    pub foreground: Color,
    pub border: Color,
    pub border_focused: Color,
    pub accent: Color,

    // Mood colors
    pub happy: Color,
    pub calm: Color,
    pub neutral: Color,
    pub tired: Color,
    pub stressed: Color,

    // Text colors
    pub user_text: Color,
    pub companion_text: Color,
    pub system_text: Color,
    pub error_text: Color,

    // Score colors
    pub score_good: Color,
    pub score_fair: Color,
    pub score_poor: Color,
}

impl Default for WellSyncTheme {
    fn default() -> Self {
        Self {
            foreground: Color::White,
            border: Color::DarkGray,
            border_focused: Color::LightMagenta,
            accent: Color::LightMagenta,

            happy: Color::LightYellow,
            calm: Color::LightBlue,
            neutral: Color::Gray,
            tired: Color::Magenta,
            stressed: Color::LightRed,

            user_text: Color::Cyan,
            companion_text: Color::White,
            system_text: Color::DarkGray,
            error_text: Color::Red,

            score_good: Color::Green,
            score_fair: Color::Yellow,
            score_poor: Color::Red,
        }
    }
}

impl WellSyncTheme {
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.foreground)
    }

    pub fn mood_color(&self, mood: MoodCategory) -> Color {
        match mood {
            MoodCategory::Happy => self.happy,
            MoodCategory::Calm => self.calm,
            MoodCategory::Neutral => self.neutral,
            MoodCategory::Tired => self.tired,
            MoodCategory::Stressed => self.stressed,
        }
    }

    /// Bold style in the mood's color
    pub fn mood_style(&self, mood: MoodCategory) -> Style {
        Style::default()
            .fg(self.mood_color(mood))
            .add_modifier(Modifier::BOLD)
    }

    pub fn trend_style(&self, trend: MoodTrend) -> Style {
        let color = match trend {
            MoodTrend::Improved => self.score_good,
            MoodTrend::Stable => self.score_fair,
            MoodTrend::Declined => self.score_poor,
        };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }

    /// Color for a 0-100 score
    pub fn score_color(&self, score: u32) -> Color {
        if score >= 80 {
            self.score_good
        } else if score >= 60 {
            self.score_fair
        } else {
            self.score_poor
        }
    }

    pub fn user_style(&self) -> Style {
        Style::default().fg(self.user_text)
    }

    pub fn companion_style(&self) -> Style {
        Style::default().fg(self.companion_text)
    }

    pub fn system_style(&self) -> Style {
        Style::default()
            .fg(self.system_text)
            .add_modifier(Modifier::DIM)
    }

    pub fn error_style(&self) -> Style {
        Style::default()
            .fg(self.error_text)
            .add_modifier(Modifier::BOLD)
    }

    pub fn heading_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border_style(&self, focused: bool) -> Style {
        Style::default().fg(if focused {
            self.border_focused
        } else {
            self.border
        })
    }

    /// Highlight for the selected row of a list
    pub fn selected_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    }
}
