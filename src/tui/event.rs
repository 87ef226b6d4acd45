//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::core::Phase;
use crate::error::BreatheError;

/// Input poll timeout. Short enough for the clock to redraw smoothly.
const POLL: Duration = Duration::from_millis(50);

/// Action to take after handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit the application.
    Quit,
    /// Select a phase.
    SelectPhase(Phase),
    /// Start or pause the stopwatch.
    Toggle,
    /// Zero the stopwatch.
    Reset,
    /// Save the measured time.
    SaveTiming,
    /// Merge the latest timings into a session.
    SaveSession,
    /// Move the selection down.
    Next,
    /// Move the selection up.
    Previous,
    /// Delete the selected timing.
    Delete,
    /// Reload past data.
    Refresh,
    /// Open or close the key help.
    Help,
}

/// Handle terminal events.
///
/// Returns an action to take, or None if no key was pressed within the
/// poll timeout.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn handle_events() -> Result<Option<Action>, BreatheError> {
    if !event::poll(POLL).map_err(|e| BreatheError::Config(format!("Event poll failed: {e}")))? {
        return Ok(None);
    }

    match event::read().map_err(|e| BreatheError::Config(format!("Event read failed: {e}")))? {
        Event::Key(key) if key.kind == KeyEventKind::Press => Ok(action_for(key)),
        _ => Ok(None),
    }
}

/// Map a key press to an action.
pub fn action_for(key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    let action = match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char('1') => Action::SelectPhase(Phase::Inhalation),
        KeyCode::Char('2') => Action::SelectPhase(Phase::BreathHold),
        KeyCode::Char('3') => Action::SelectPhase(Phase::Exhalation),
        KeyCode::Char(' ') => Action::Toggle,
        KeyCode::Char('r') => Action::Reset,
        KeyCode::Char('s') => Action::SaveTiming,
        KeyCode::Char('b') => Action::SaveSession,
        KeyCode::Char('j') | KeyCode::Down => Action::Next,
        KeyCode::Char('k') | KeyCode::Up => Action::Previous,
        KeyCode::Char('d') | KeyCode::Delete => Action::Delete,
        KeyCode::Char('R') => Action::Refresh,
        KeyCode::Char('?') => Action::Help,
        _ => return None,
    };
    Some(action)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> Option<Action> {
        action_for(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_phase_keys() {
        assert_eq!(press(KeyCode::Char('1')), Some(Action::SelectPhase(Phase::Inhalation)));
        assert_eq!(press(KeyCode::Char('2')), Some(Action::SelectPhase(Phase::BreathHold)));
        assert_eq!(press(KeyCode::Char('3')), Some(Action::SelectPhase(Phase::Exhalation)));
    }

    #[test]
    fn test_reset_and_refresh_are_distinct() {
        assert_eq!(press(KeyCode::Char('r')), Some(Action::Reset));
        assert_eq!(
            action_for(KeyEvent::new(KeyCode::Char('R'), KeyModifiers::SHIFT)),
            Some(Action::Refresh)
        );
    }

    #[test]
    fn test_ctrl_c_quits() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(action_for(key), Some(Action::Quit));
    }

    #[test]
    fn test_unbound_key() {
        assert_eq!(press(KeyCode::Char('z')), None);
    }
}
