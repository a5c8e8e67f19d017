//! Layout calculations for the WellSync TUI

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Calculate the main layout areas
pub struct AppLayout {
    pub title_area: Rect,
    pub navbar_area: Rect,
    pub content_area: Rect,
    pub status_bar: Rect,
    pub hotkey_bar: Rect,
    pub input_area: Rect,
}

impl AppLayout {
    /// Calculate layout based on terminal size
    pub fn calculate(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title bar
                Constraint::Length(1), // Navbar
                Constraint::Min(8),    // Page content
                Constraint::Length(1), // Status bar
                Constraint::Length(1), // Hotkey bar
                Constraint::Length(3), // Input area
            ])
            .split(area);

        Self {
            title_area: chunks[0],
            navbar_area: chunks[1],
            content_area: chunks[2],
            status_bar: chunks[3],
            hotkey_bar: chunks[4],
            input_area: chunks[5],
        }
    }
}

/// Split the content area into a main panel and a side panel
pub fn split_content(area: Rect, main_percent: u16) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(main_percent),
            Constraint::Percentage(100 - main_percent),
        ])
        .split(area);
    (chunks[0], chunks[1])
}

/// Calculate fixed-size centered popup
pub fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect::new(x, y, width.min(area.width), height.min(area.height))
}
