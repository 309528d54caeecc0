//! COT dashboard — single-screen terminal UI.
//!
//! Loads the configured data source (remote, local directory, or the
//! embedded sample as last resort) and renders the weekly positioning
//! dashboard. Keys: `q`/`Esc` quit, `r` reload, `j`/`k` scroll the table.

use std::io::{self, stdout};
use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use cotview_core::data::load_or_fallback;

use cotview_tui::{ui, AppState, DashboardConfig};

fn main() -> Result<()> {
    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(info);
    }));

    let config = DashboardConfig::load_or_default(Path::new("cotview.toml"))
        .map_err(anyhow::Error::msg)?;

    let provider = config.provider();
    let outcome = load_or_fallback(provider.as_ref(), &config.market);
    let mut app = AppState::new(outcome, config.recent_weeks);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app, &config);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
    config: &DashboardConfig,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        // Poll for input (50ms timeout for ~20 FPS tick)
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_key(app, config, key.code);
                }
            }
        }

        if !app.running {
            break;
        }
    }
    Ok(())
}

fn handle_key(app: &mut AppState, config: &DashboardConfig, code: KeyCode) {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),
        KeyCode::Char('r') => {
            app.set_status("reloading...");
            let provider = config.provider();
            app.apply_outcome(load_or_fallback(provider.as_ref(), &config.market));
        }
        KeyCode::Char('j') | KeyCode::Down => app.scroll_down(),
        KeyCode::Char('k') | KeyCode::Up => app.scroll_up(),
        _ => {}
    }
}
