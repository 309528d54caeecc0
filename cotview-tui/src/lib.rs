//! cotview-tui — terminal dashboard for CFTC COT weekly positioning.
//!
//! Renders the derived dataset from `cotview-core`:
//! - header with market, latest report date, and update time
//! - four metric cards from the summary
//! - net-position trend, open-interest, and long/short comparison charts
//! - reverse-chronological weekly change table

pub mod app;
pub mod config;
pub mod panels;
pub mod theme;
pub mod ui;

pub use app::AppState;
pub use config::DashboardConfig;
pub use theme::Theme;
