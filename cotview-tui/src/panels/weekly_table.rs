//! Weekly change table — every week, most recent first.
//!
//! Net positions and open interest with their weekly changes; change columns
//! are colored by sign. Scrolls by whole rows.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table, Widget},
};

use cotview_core::format;
use cotview_core::model::WeeklyRecord;

use crate::theme::Theme;

/// Reverse-chronological weekly detail table.
pub struct WeeklyTable<'a> {
    /// Rows already in display order (most recent first).
    rows: &'a [WeeklyRecord],
    offset: usize,
    theme: &'a Theme,
}

impl<'a> WeeklyTable<'a> {
    pub fn new(rows: &'a [WeeklyRecord], offset: usize, theme: &'a Theme) -> Self {
        Self {
            rows,
            offset,
            theme,
        }
    }

    fn change_cell(&self, value: i64) -> Cell<'a> {
        Cell::from(format::signed_thousands(value))
            .style(Style::default().fg(self.theme.change_color(value)))
    }
}

impl Widget for WeeklyTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(format!(" Weekly Changes ({} weeks) ", self.rows.len()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.accent))
            .style(Style::default().bg(self.theme.background));

        let header_cells = [
            "Date",
            "Non-Comm Net",
            "Wk Change",
            "Comm Net",
            "Wk Change",
            "Open Int",
            "Wk Change",
        ]
        .iter()
        .map(|h| {
            Cell::from(*h).style(
                Style::default()
                    .fg(self.theme.accent)
                    .add_modifier(Modifier::BOLD),
            )
        });
        let header = Row::new(header_cells).height(1);

        let rows = self.rows.iter().skip(self.offset).map(|record| {
            Row::new(vec![
                Cell::from(record.date.clone())
                    .style(Style::default().fg(self.theme.text_secondary)),
                Cell::from(format::thousands(record.noncomm_net))
                    .style(Style::default().fg(self.theme.text_primary)),
                self.change_cell(record.noncomm_net_change),
                Cell::from(format::thousands(record.comm_net))
                    .style(Style::default().fg(self.theme.text_primary)),
                self.change_cell(record.comm_net_change),
                Cell::from(format::thousands(record.open_interest as i64))
                    .style(Style::default().fg(self.theme.text_primary)),
                self.change_cell(record.oi_change),
            ])
        });

        let widths = [
            Constraint::Length(12),
            Constraint::Length(14),
            Constraint::Length(12),
            Constraint::Length(14),
            Constraint::Length(12),
            Constraint::Length(14),
            Constraint::Length(12),
        ];

        Table::new(rows, widths)
            .header(header)
            .block(block)
            .column_spacing(1)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cotview_core::data::sample;
    use cotview_core::projections::reverse_chronological;

    #[test]
    fn table_shows_most_recent_week_first() {
        let theme = Theme::default();
        let dataset = sample::dataset();
        let rows = reverse_chronological(&dataset.weekly_data);
        let table = WeeklyTable::new(&rows, 0, &theme);

        let area = Rect::new(0, 0, 100, 8);
        let mut buf = Buffer::empty(area);
        table.render(area, &mut buf);

        let mut content = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                content.push_str(buf.cell((x, y)).unwrap().symbol());
            }
        }
        assert!(content.contains("Weekly Changes (13 weeks)"));
        assert!(content.contains("2025-02-11"));
        assert!(content.contains("+8,921"));
    }

    #[test]
    fn offset_skips_leading_rows() {
        let theme = Theme::default();
        let dataset = sample::dataset();
        let rows = reverse_chronological(&dataset.weekly_data);
        let table = WeeklyTable::new(&rows, 2, &theme);

        let area = Rect::new(0, 0, 100, 6);
        let mut buf = Buffer::empty(area);
        table.render(area, &mut buf);

        let mut content = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                content.push_str(buf.cell((x, y)).unwrap().symbol());
            }
        }
        assert!(!content.contains("2025-02-11"));
        assert!(content.contains("2025-01-28"));
    }
}
