//! Application state for the dashboard.

use cotview_core::data::{DataOrigin, LoadOutcome};
use cotview_core::model::Dataset;

use crate::theme::Theme;

/// All state the draw loop needs: the current dataset, where it came from,
/// and the small amount of UI chrome (status line, table scroll).
pub struct AppState {
    pub dataset: Dataset,
    pub origin: DataOrigin,
    /// Why the loader fell back to the sample, when it did.
    pub fallback_reason: Option<String>,
    /// One-line status message shown in the status bar.
    pub status: Option<String>,
    /// Scroll offset into the reverse-chronological table.
    pub table_offset: usize,
    /// Width of the recent long/short comparison window.
    pub recent_weeks: usize,
    pub running: bool,
    pub theme: Theme,
}

impl AppState {
    pub fn new(outcome: LoadOutcome, recent_weeks: usize) -> Self {
        let mut app = Self {
            dataset: outcome.dataset,
            origin: outcome.origin,
            fallback_reason: outcome.fallback_reason,
            status: None,
            table_offset: 0,
            recent_weeks,
            running: true,
            theme: Theme::default(),
        };
        app.announce_origin();
        app
    }

    /// Replace the dataset wholesale after a reload. Scroll position resets;
    /// nothing from the old dataset survives.
    pub fn apply_outcome(&mut self, outcome: LoadOutcome) {
        self.dataset = outcome.dataset;
        self.origin = outcome.origin;
        self.fallback_reason = outcome.fallback_reason;
        self.table_offset = 0;
        self.announce_origin();
    }

    fn announce_origin(&mut self) {
        self.status = Some(match &self.fallback_reason {
            Some(reason) => format!("fell back to sample data ({reason})"),
            None => format!(
                "loaded {} weeks from {}",
                self.dataset.weeks,
                self.origin.label()
            ),
        });
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(message.into());
    }

    pub fn scroll_down(&mut self) {
        let max = self.dataset.weeks.saturating_sub(1);
        if self.table_offset < max {
            self.table_offset += 1;
        }
    }

    pub fn scroll_up(&mut self) {
        self.table_offset = self.table_offset.saturating_sub(1);
    }

    pub fn quit(&mut self) {
        self.running = false;
    }
}
