//! Open-interest panel — one bar per week, colored against the mean.
//!
//! Bars at or above the whole-window average render in full gold, the rest
//! dimmed; the average itself is shown in the title.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Widget},
};

use cotview_core::format;
use cotview_core::projections::OiSeries;

use crate::theme::Theme;

/// Open-interest bar chart.
pub struct OpenInterestChart<'a> {
    series: &'a OiSeries,
    theme: &'a Theme,
}

impl<'a> OpenInterestChart<'a> {
    pub fn new(series: &'a OiSeries, theme: &'a Theme) -> Self {
        Self { series, theme }
    }
}

impl Widget for OpenInterestChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let bars: Vec<Bar> = self
            .series
            .points
            .iter()
            .map(|p| {
                Bar::default()
                    .value(p.open_interest)
                    .label(p.label.clone().into())
                    .text_value(format::compact(p.open_interest as i64))
                    .style(Style::default().fg(self.theme.oi_color(p.above_average)))
            })
            .collect();

        let title = format!(
            " Open Interest (avg {}) ",
            format::compact(self.series.mean as i64)
        );

        BarChart::default()
            .block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(self.theme.accent))
                    .style(Style::default().bg(self.theme.background)),
            )
            .data(BarGroup::default().bars(&bars))
            .bar_width(5)
            .bar_gap(1)
            .render(area, buf);
    }
}
