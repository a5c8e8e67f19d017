//! Page navigation bar

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::app::Page;
use crate::ui::theme::WellSyncTheme;

pub struct NavbarWidget<'a> {
    current: Page,
    theme: &'a WellSyncTheme,
}

impl<'a> NavbarWidget<'a> {
    pub fn new(current: Page, theme: &'a WellSyncTheme) -> Self {
        Self { current, theme }
    }
}

impl Widget for NavbarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let spans: Vec<Span> = Page::ALL
            .iter()
            .enumerate()
            .flat_map(|(i, page)| {
                let label = format!(" {}:{} ", i + 1, page.title());
                let style = if *page == self.current {
                    self.theme.selected_style()
                } else {
                    self.theme.system_style()
                };
                [Span::styled(label, style), Span::raw(" ")]
            })
            .collect();

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
