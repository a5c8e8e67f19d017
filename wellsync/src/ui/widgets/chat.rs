//! Chat transcript widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use wellsync_core::{ChatMessage, Sender};

use crate::ui::theme::WellSyncTheme;

/// Widget for the companion conversation
pub struct ChatWidget<'a> {
    messages: &'a [ChatMessage],
    theme: &'a WellSyncTheme,
    typing: bool,
    animation_frame: u8,
}

impl<'a> ChatWidget<'a> {
    pub fn new(messages: &'a [ChatMessage], theme: &'a WellSyncTheme) -> Self {
        Self {
            messages,
            theme,
            typing: false,
            animation_frame: 0,
        }
    }

    pub fn typing(mut self, typing: bool, animation_frame: u8) -> Self {
        self.typing = typing;
        self.animation_frame = animation_frame;
        self
    }
}

impl Widget for ChatWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" WellSync Companion ")
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(true));

        let inner = block.inner(area);
        block.render(area, buf);
        let width = inner.width as usize;

        let mut lines: Vec<Line> = Vec::new();
        for message in self.messages {
            let (who, style) = match message.sender {
                Sender::User => ("You", self.theme.user_style()),
                Sender::Ai => ("WellSync", self.theme.companion_style()),
            };
            lines.push(Line::from(vec![
                Span::styled(format!("{who} "), self.theme.heading_style()),
                Span::styled(
                    message.timestamp.format("%H:%M").to_string(),
                    self.theme.system_style(),
                ),
            ]));
            // Wrap by hand so every line is one screen row
            for row in wrap_text(&message.text, width) {
                lines.push(Line::from(Span::styled(row, style)));
            }
            lines.push(Line::from(""));
        }

        if self.typing {
            let dots = ".".repeat((self.animation_frame / 3 % 3) as usize + 1);
            lines.push(Line::from(Span::styled(
                format!("WellSync is typing{dots}"),
                self.theme.system_style(),
            )));
        }

        // Keep the newest lines visible
        let visible = inner.height as usize;
        let scroll = lines.len().saturating_sub(visible) as u16;

        Paragraph::new(lines).scroll((scroll, 0)).render(inner, buf);
    }
}

/// Greedy word wrap to `width` columns. Words longer than a row are split.
fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }

    let mut rows = Vec::new();
    for paragraph in text.lines() {
        let mut row = String::new();
        let mut row_len = 0;
        for word in paragraph.split_whitespace() {
            let mut chars: Vec<char> = word.chars().collect();
            if row_len > 0 && row_len + 1 + chars.len() > width {
                rows.push(std::mem::take(&mut row));
                row_len = 0;
            }
            while chars.len() > width {
                let rest = chars.split_off(width);
                if row_len > 0 {
                    rows.push(std::mem::take(&mut row));
                    row_len = 0;
                }
                rows.push(chars.into_iter().collect());
                chars = rest;
            }
            if row_len > 0 {
                row.push(' ');
                row_len += 1;
            }
            row.extend(chars.iter());
            row_len += chars.len();
        }
        rows.push(row);
    }
    rows
}
