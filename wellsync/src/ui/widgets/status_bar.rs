//! Status and hotkey bar widgets

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::app::{InputMode, Page, UiError};
use crate::ui::theme::WellSyncTheme;

/// Status bar showing the input mode and the latest message or error
pub struct StatusBarWidget<'a> {
    input_mode: InputMode,
    theme: &'a WellSyncTheme,
    message: Option<&'a str>,
    error: Option<&'a UiError>,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(input_mode: InputMode, theme: &'a WellSyncTheme) -> Self {
        Self {
            input_mode,
            theme,
            message: None,
            error: None,
        }
    }

    pub fn message(mut self, message: Option<&'a str>) -> Self {
        self.message = message;
        self
    }

    pub fn error(mut self, error: Option<&'a UiError>) -> Self {
        self.error = error;
        self
    }
}

impl Widget for StatusBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Input mode indicator (vim-style)
        let (input_mode_text, color) = match self.input_mode {
            InputMode::Normal => ("NORMAL", Color::Blue),
            InputMode::Insert => ("INSERT", Color::Green),
            InputMode::Command => ("COMMAND", Color::Yellow),
        };

        let mut spans = vec![Span::styled(
            format!("-- {input_mode_text} --"),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )];

        if let Some(error) = self.error {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(error.to_string(), self.theme.error_style()));
        } else if let Some(msg) = self.message {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(
                msg,
                Style::default().add_modifier(Modifier::DIM),
            ));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

/// Hotkey bar listing the keys that work right now
pub struct HotkeyBarWidget {
    page: Page,
    input_mode: InputMode,
}

impl HotkeyBarWidget {
    pub fn new(page: Page, input_mode: InputMode) -> Self {
        Self { page, input_mode }
    }

    fn hotkeys(&self) -> Vec<(&'static str, bool)> {
        match self.input_mode {
            InputMode::Normal => {
                let mut keys = match self.page {
                    Page::Home => vec![("1-7:page", true), ("Tab:next", true)],
                    Page::Chat => vec![("i:type", true), ("Tab:next", true)],
                    Page::Analyzer => vec![("i:type", true), ("c:clear", true)],
                    Page::Quiz => vec![
                        ("j/k:question", true),
                        ("i:answer", true),
                        (":submit", true),
                    ],
                    Page::Scheduler => vec![
                        ("j/k:move", true),
                        ("Space:done", true),
                        ("r:refresh", true),
                    ],
                    Page::Reflection => vec![
                        ("j/k:mood", true),
                        ("Enter:pick", true),
                        ("i:evening", true),
                    ],
                    Page::Insights => vec![("r:refresh", true)],
                };
                keys.extend([("::command", false), ("?:help", false), ("q:quit", false)]);
                keys
            }
            InputMode::Insert => vec![("Esc:normal", true), ("Enter:send", true)],
            InputMode::Command => vec![
                ("Esc:cancel", true),
                ("Enter:execute", true),
                (":q quit", false),
                (":<page>", false),
                (":help", false),
            ],
        }
    }
}

impl Widget for HotkeyBarWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let spans: Vec<Span> = self
            .hotkeys()
            .into_iter()
            .flat_map(|(text, primary)| {
                let style = if primary {
                    Style::default()
                } else {
                    Style::default().add_modifier(Modifier::DIM)
                };
                [Span::styled(text, style), Span::raw("  ")]
            })
            .collect();

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
