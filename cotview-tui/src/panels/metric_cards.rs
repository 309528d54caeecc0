//! Metric cards — the four headline numbers from the summary.
//!
//! Non-commercial net, commercial net, open interest (each with its signed
//! weekly change), and the long/short ratio. The ratio card renders the
//! undefined-ratio sentinel as a dash via the core formatting capability.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use cotview_core::format;
use cotview_core::model::Summary;

use crate::theme::Theme;

/// The metric cards row.
pub struct MetricCards<'a> {
    summary: &'a Summary,
    theme: &'a Theme,
}

impl<'a> MetricCards<'a> {
    pub fn new(summary: &'a Summary, theme: &'a Theme) -> Self {
        Self { summary, theme }
    }

    fn card(&self, label: &'a str, value: String, change: Option<i64>) -> Paragraph<'a> {
        let theme = self.theme;
        let value_color = match change {
            Some(c) if c > 0 => theme.positive,
            Some(c) if c < 0 => theme.negative,
            _ => theme.text_primary,
        };

        let mut lines = vec![
            Line::from(Span::styled(
                label,
                Style::default().fg(theme.text_secondary),
            )),
            Line::from(Span::styled(
                value,
                Style::default()
                    .fg(value_color)
                    .add_modifier(Modifier::BOLD),
            )),
        ];

        if let Some(change) = change {
            lines.push(Line::from(Span::styled(
                format!("wk {}", format::signed_thousands(change)),
                Style::default().fg(theme.change_color(change)),
            )));
        }

        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.accent_dim))
                .style(Style::default().bg(theme.background)),
        )
    }
}

impl Widget for MetricCards<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let slots = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Ratio(1, 4),
                Constraint::Ratio(1, 4),
                Constraint::Ratio(1, 4),
                Constraint::Ratio(1, 4),
            ])
            .split(area);

        let s = self.summary;
        let cards = [
            self.card(
                "Non-Commercial Net",
                format::thousands(s.noncomm_net),
                Some(s.noncomm_net_change),
            ),
            self.card(
                "Commercial Net",
                format::thousands(s.comm_net),
                Some(s.comm_net_change),
            ),
            self.card(
                "Open Interest",
                format::thousands(s.open_interest as i64),
                Some(s.oi_change),
            ),
            self.card("Long/Short Ratio", format::ratio(s.long_short_ratio), None),
        ];

        for (card, slot) in cards.into_iter().zip(slots.iter()) {
            card.render(*slot, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer_content(area: Rect, buf: &Buffer) -> String {
        let mut content = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                content.push_str(buf.cell((x, y)).unwrap().symbol());
            }
        }
        content
    }

    fn summary() -> Summary {
        Summary {
            latest_date: "2025-02-11".into(),
            noncomm_net: 254_832,
            comm_net: -287_456,
            open_interest: 542_103,
            noncomm_net_change: 12_543,
            comm_net_change: -15_234,
            oi_change: 8_921,
            long_short_ratio: 328_000.0 / 73_168.0,
        }
    }

    #[test]
    fn cards_render_without_panicking() {
        let theme = Theme::default();
        let summary = summary();
        let cards = MetricCards::new(&summary, &theme);

        let area = Rect::new(0, 0, 120, 5);
        let mut buf = Buffer::empty(area);
        cards.render(area, &mut buf);

        let content = buffer_content(area, &buf);
        assert!(content.contains("254,832"));
        assert!(content.contains("+12,543"));
        assert!(content.contains("4.48"));
    }

    #[test]
    fn ratio_sentinel_renders_as_dash() {
        let theme = Theme::default();
        let mut summary = summary();
        summary.long_short_ratio = f64::INFINITY;

        let area = Rect::new(0, 0, 120, 5);
        let mut buf = Buffer::empty(area);
        MetricCards::new(&summary, &theme).render(area, &mut buf);

        let content = buffer_content(area, &buf);
        assert!(content.contains("Long/Short Ratio"));
        assert!(!content.contains("inf"));
    }
}
