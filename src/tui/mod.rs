//! Terminal User Interface (TUI) for breathe.
//!
//! The interactive stopwatch with past timings, sessions, and averages.
//! Built with ratatui and crossterm.

mod app;
mod event;
mod ui;

pub use app::App;

use std::io;
use std::sync::Arc;

use crossterm::{
    cursor::Show,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::LevelFilter;
use ratatui::prelude::*;

use crate::error::BreatheError;
use crate::features::stopwatch::TickSource;
use crate::store::Store;

/// Puts the terminal back the way the TUI found it when dropped, on every
/// exit path including setup failures.
struct TerminalGuard {
    alternate_screen: bool,
}

impl TerminalGuard {
    /// Enter raw mode; the guard undoes it from here on.
    fn enable() -> Result<Self, BreatheError> {
        enable_raw_mode()
            .map_err(|e| BreatheError::Config(format!("Failed to enable raw mode: {e}")))?;
        Ok(Self {
            alternate_screen: false,
        })
    }

    fn enter_alternate_screen(&mut self) -> Result<(), BreatheError> {
        execute!(io::stdout(), EnterAlternateScreen)
            .map_err(|e| BreatheError::Config(format!("Failed to setup terminal: {e}")))?;
        self.alternate_screen = true;
        Ok(())
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        disable_raw_mode().ok();
        if self.alternate_screen {
            execute!(io::stdout(), LeaveAlternateScreen, Show).ok();
        }
    }
}

/// Run the TUI application.
///
/// Logging is silenced while the terminal is in raw mode; Store failures
/// show up in the status bar instead.
///
/// # Errors
///
/// Returns an error if the TUI fails to initialize or run.
pub fn run(store: Arc<dyn Store>, tick_ms: u64) -> Result<(), BreatheError> {
    let mut guard = TerminalGuard::enable()?;
    guard.enter_alternate_screen()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)
        .map_err(|e| BreatheError::Config(format!("Failed to create terminal: {e}")))?;

    let log_level = log::max_level();
    log::set_max_level(LevelFilter::Off);

    let mut app = App::new(store, tick_ms);
    let result = run_app(&mut terminal, &mut app);

    log::set_max_level(log_level);
    drop(guard);

    result
}

/// Run the main application loop.
fn run_app<B: Backend, T: TickSource>(
    terminal: &mut Terminal<B>,
    app: &mut App<T>,
) -> Result<(), BreatheError> {
    loop {
        app.tick();
        terminal
            .draw(|frame| ui::render(frame, app))
            .map_err(|e| BreatheError::Config(format!("Failed to draw: {e}")))?;

        if let Some(action) = event::handle_events()? {
            if app.show_help && action != event::Action::Quit {
                app.show_help = false;
                continue;
            }
            match action {
                event::Action::Quit => break,
                event::Action::SelectPhase(phase) => app.select_phase(phase),
                event::Action::Toggle => app.toggle(),
                event::Action::Reset => app.reset(),
                event::Action::SaveTiming => app.save_timing(),
                event::Action::SaveSession => app.save_session(),
                event::Action::Next => app.select_next(),
                event::Action::Previous => app.select_previous(),
                event::Action::Delete => app.delete_selected(),
                event::Action::Refresh => app.refresh(),
                event::Action::Help => app.show_help = true,
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_restores_without_a_terminal() {
        // Dropping must not panic even when raw mode was never entered.
        drop(TerminalGuard {
            alternate_screen: false,
        });
    }
}
