//! Input field widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::ui::theme::WellSyncTheme;

/// Input field widget
pub struct InputWidget<'a> {
    content: &'a str,
    cursor_position: usize,
    theme: &'a WellSyncTheme,
    title: &'a str,
    placeholder: &'a str,
    is_active: bool,
    is_command_mode: bool,
}

impl<'a> InputWidget<'a> {
    pub fn new(content: &'a str, theme: &'a WellSyncTheme) -> Self {
        Self {
            content,
            cursor_position: content.chars().count(),
            theme,
            title: "",
            placeholder: "",
            is_active: true,
            is_command_mode: false,
        }
    }

    pub fn cursor_position(mut self, pos: usize) -> Self {
        self.cursor_position = pos;
        self
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = title;
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.is_active = active;
        self
    }

    pub fn command_mode(mut self, is_command: bool) -> Self {
        self.is_command_mode = is_command;
        self
    }

    /// Split the content around the cursor, character-wise.
    fn cursor_parts(&self) -> (String, String, String) {
        let display_content = if self.is_command_mode {
            self.content.strip_prefix(':').unwrap_or(self.content)
        } else {
            self.content
        };
        let cursor = if self.is_command_mode {
            self.cursor_position.saturating_sub(1)
        } else {
            self.cursor_position
        };

        let before: String = display_content.chars().take(cursor).collect();
        let at = display_content
            .chars()
            .nth(cursor)
            .map(|c| c.to_string())
            .unwrap_or_else(|| " ".to_string());
        let after: String = display_content.chars().skip(cursor + 1).collect();
        (before, at, after)
    }
}

impl Widget for InputWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(self.title)
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(self.is_active));

        let inner = block.inner(area);
        block.render(area, buf);

        let prefix = if self.is_command_mode { ":" } else { "> " };
        let line = if self.content.is_empty() && !self.is_command_mode {
            Line::from(vec![
                Span::styled(prefix, self.theme.user_style()),
                Span::styled(
                    self.placeholder,
                    Style::default().add_modifier(Modifier::DIM),
                ),
            ])
        } else {
            let (before, at, after) = self.cursor_parts();
            let cursor_style = if self.is_active {
                Style::default()
                    .add_modifier(Modifier::UNDERLINED | Modifier::BOLD)
                    .fg(self.theme.user_text)
            } else {
                Style::default()
            };
            Line::from(vec![
                Span::styled(prefix, self.theme.user_style()),
                Span::raw(before),
                Span::styled(at, cursor_style),
                Span::raw(after),
            ])
        };

        Paragraph::new(line).render(inner, buf);
    }
}
