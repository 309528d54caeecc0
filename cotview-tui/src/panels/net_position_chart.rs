//! Net-position trend panel — two lines over the full window.
//!
//! Non-commercial net in gold, commercial net in blue, with the month-day
//! labels of the first and last weeks on the x axis.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    symbols,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Widget},
};

use cotview_core::format;
use cotview_core::projections::NetPoint;

use crate::theme::Theme;

/// Net-position trend chart.
pub struct NetPositionChart<'a> {
    points: &'a [NetPoint],
    theme: &'a Theme,
}

impl<'a> NetPositionChart<'a> {
    pub fn new(points: &'a [NetPoint], theme: &'a Theme) -> Self {
        Self { points, theme }
    }
}

impl Widget for NetPositionChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let noncomm_data: Vec<(f64, f64)> = self
            .points
            .iter()
            .enumerate()
            .map(|(i, p)| (i as f64, p.noncomm_net as f64))
            .collect();
        let comm_data: Vec<(f64, f64)> = self
            .points
            .iter()
            .enumerate()
            .map(|(i, p)| (i as f64, p.comm_net as f64))
            .collect();

        // Axis bounds across both series, with a little headroom.
        let all_values = self
            .points
            .iter()
            .flat_map(|p| [p.noncomm_net as f64, p.comm_net as f64]);
        let y_min = all_values.clone().fold(f64::INFINITY, f64::min);
        let y_max = all_values.fold(f64::NEG_INFINITY, f64::max);
        let y_pad = ((y_max - y_min) * 0.05).max(1.0);
        let (y_lower, y_upper) = (y_min - y_pad, y_max + y_pad);

        let x_upper = (self.points.len().saturating_sub(1)) as f64;
        let x_labels: Vec<Span> = [self.points.first(), self.points.last()]
            .into_iter()
            .flatten()
            .map(|p| {
                Span::styled(
                    p.label.clone(),
                    Style::default().fg(self.theme.text_secondary),
                )
            })
            .collect();

        let datasets = vec![
            Dataset::default()
                .name("Non-Comm Net")
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(self.theme.accent))
                .data(&noncomm_data),
            Dataset::default()
                .name("Comm Net")
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(self.theme.commercial))
                .data(&comm_data),
        ];

        let chart = Chart::new(datasets)
            .block(
                Block::default()
                    .title(" Net Position Trend ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(self.theme.accent))
                    .style(Style::default().bg(self.theme.background)),
            )
            .x_axis(
                Axis::default()
                    .style(Style::default().fg(self.theme.text_secondary))
                    .bounds([0.0, x_upper.max(1.0)])
                    .labels(x_labels),
            )
            .y_axis(
                Axis::default()
                    .style(Style::default().fg(self.theme.text_secondary))
                    .bounds([y_lower, y_upper])
                    .labels(vec![
                        Span::raw(format::compact(y_lower as i64)),
                        Span::raw(format::compact(((y_lower + y_upper) / 2.0) as i64)),
                        Span::raw(format::compact(y_upper as i64)),
                    ]),
            );

        chart.render(area, buf);
    }
}
