//! Top-level layout — header, cards, charts grid, table, status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use cotview_core::projections::{
    net_series, open_interest_series, recent_window, reverse_chronological,
};

use crate::app::AppState;
use crate::panels::metric_cards::MetricCards;
use crate::panels::net_position_chart::NetPositionChart;
use crate::panels::open_interest_chart::OpenInterestChart;
use crate::panels::position_compare_chart::PositionCompareChart;
use crate::panels::weekly_table::WeeklyTable;
use crate::panels::EmptyPanel;

/// Draw the entire dashboard.
pub fn draw(f: &mut Frame, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // header
            Constraint::Length(5),  // metric cards
            Constraint::Min(12),    // charts grid
            Constraint::Length(9),  // weekly table
            Constraint::Length(1),  // status bar
        ])
        .split(f.area());

    draw_header(f, chunks[0], app);
    f.render_widget(MetricCards::new(&app.dataset.summary, &app.theme), chunks[1]);
    draw_charts(f, chunks[2], app);
    draw_table(f, chunks[3], app);
    draw_status_bar(f, chunks[4], app);
}

fn draw_header(f: &mut Frame, area: Rect, app: &AppState) {
    let theme = &app.theme;
    let ds = &app.dataset;

    let detail = Line::from(vec![
        Span::styled(
            "Commitments of Traders",
            Style::default().fg(theme.text_secondary),
        ),
        Span::styled(
            format!(" | {} weeks", ds.weeks),
            Style::default().fg(theme.text_secondary),
        ),
        Span::styled(
            format!(" | latest {}", ds.summary.latest_date),
            Style::default().fg(theme.text_primary),
        ),
        Span::styled(
            format!(" | updated {}", ds.updated_at),
            Style::default().fg(theme.text_secondary),
        ),
    ]);

    let header = Paragraph::new(detail).block(
        Block::default()
            .title(Span::styled(
                format!(" CFTC COT Report — {} ", ds.market),
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .style(Style::default().bg(theme.background)),
    );
    f.render_widget(header, area);
}

fn draw_charts(f: &mut Frame, area: Rect, app: &AppState) {
    let theme = &app.theme;
    let records = &app.dataset.weekly_data;

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);
    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(halves[1]);

    match net_series(records) {
        Ok(points) if !points.is_empty() => {
            f.render_widget(NetPositionChart::new(&points, theme), halves[0]);
        }
        Ok(_) => f.render_widget(
            EmptyPanel::new("Net Position Trend", "no data", theme),
            halves[0],
        ),
        Err(e) => f.render_widget(
            EmptyPanel::new("Net Position Trend", e.to_string(), theme),
            halves[0],
        ),
    }

    match open_interest_series(records) {
        Ok(series) if !series.points.is_empty() => {
            f.render_widget(OpenInterestChart::new(&series, theme), right[0]);
        }
        Ok(_) => f.render_widget(EmptyPanel::new("Open Interest", "no data", theme), right[0]),
        Err(e) => f.render_widget(
            EmptyPanel::new("Open Interest", e.to_string(), theme),
            right[0],
        ),
    }

    match recent_window(records, app.recent_weeks) {
        Ok(window) if !window.is_empty() => {
            f.render_widget(PositionCompareChart::new(&window, theme), right[1]);
        }
        Ok(_) => f.render_widget(
            EmptyPanel::new("Long/Short Positions", "no data", theme),
            right[1],
        ),
        Err(e) => f.render_widget(
            EmptyPanel::new("Long/Short Positions", e.to_string(), theme),
            right[1],
        ),
    }
}

fn draw_table(f: &mut Frame, area: Rect, app: &AppState) {
    let rows = reverse_chronological(&app.dataset.weekly_data);
    f.render_widget(WeeklyTable::new(&rows, app.table_offset, &app.theme), area);
}

fn draw_status_bar(f: &mut Frame, area: Rect, app: &AppState) {
    let theme = &app.theme;
    let mut spans = vec![
        Span::styled(
            format!(" [{}] ", app.origin.label()),
            Style::default()
                .fg(theme.origin_color(app.origin))
                .add_modifier(Modifier::BOLD),
        ),
    ];

    if let Some(status) = &app.status {
        spans.push(Span::styled(
            status.clone(),
            Style::default().fg(theme.text_secondary),
        ));
    }

    spans.push(Span::styled(
        "  q quit · r reload · j/k scroll",
        Style::default().fg(theme.accent_dim),
    ));

    f.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(theme.background)),
        area,
    );
}
