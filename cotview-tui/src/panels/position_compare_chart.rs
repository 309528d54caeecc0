//! Long/short comparison panel — grouped bars for the recent window.
//!
//! One group per week: non-commercial long/short and commercial long/short
//! side by side.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Widget},
};

use cotview_core::format;
use cotview_core::projections::PositionPoint;

use crate::theme::Theme;

/// Grouped long/short comparison chart.
pub struct PositionCompareChart<'a> {
    window: &'a [PositionPoint],
    theme: &'a Theme,
}

impl<'a> PositionCompareChart<'a> {
    pub fn new(window: &'a [PositionPoint], theme: &'a Theme) -> Self {
        Self { window, theme }
    }

    fn group<'b>(&self, point: &'b PositionPoint) -> BarGroup<'b> {
        let bar = |value: u64, color| {
            Bar::default()
                .value(value)
                .text_value(format::compact(value as i64))
                .style(Style::default().fg(color))
        };

        BarGroup::default().label(point.label.clone().into()).bars(&[
            bar(point.noncomm_long, self.theme.positive),
            bar(point.noncomm_short, self.theme.negative),
            bar(point.comm_long, self.theme.commercial),
            bar(point.comm_short, self.theme.neutral),
        ])
    }
}

impl Widget for PositionCompareChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = format!(" Long/Short Positions (last {} wks) ", self.window.len());

        let mut chart = BarChart::default()
            .block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(self.theme.accent))
                    .style(Style::default().bg(self.theme.background)),
            )
            .bar_width(3)
            .bar_gap(0)
            .group_gap(2);

        for point in self.window {
            chart = chart.data(self.group(point));
        }

        chart.render(area, buf);
    }
}
