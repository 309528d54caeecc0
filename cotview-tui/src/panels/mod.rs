//! Dashboard panels — one widget per display surface.

pub mod metric_cards;
pub mod net_position_chart;
pub mod open_interest_chart;
pub mod position_compare_chart;
pub mod weekly_table;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::theme::Theme;

/// Placeholder rendered when a panel has nothing to show (empty projection
/// output or a projection error).
pub struct EmptyPanel<'a> {
    title: &'a str,
    message: String,
    theme: &'a Theme,
}

impl<'a> EmptyPanel<'a> {
    pub fn new(title: &'a str, message: impl Into<String>, theme: &'a Theme) -> Self {
        Self {
            title,
            message: message.into(),
            theme,
        }
    }
}

impl Widget for EmptyPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(format!(" {} ", self.title))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.accent_dim))
            .style(Style::default().bg(self.theme.background));

        Paragraph::new(self.message)
            .style(Style::default().fg(self.theme.text_secondary))
            .alignment(Alignment::Center)
            .block(block)
            .render(area, buf);
    }
}
