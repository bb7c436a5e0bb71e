//! Keyboard event handling for the chat TUI.
//!
//! Maps crossterm keyboard events to application state changes. Every
//! printable key goes to the input line, so quitting uses Esc or Ctrl+C.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::App;

/// Lines moved per PageUp/PageDown.
const PAGE: u16 = 10;

/// Handles a keyboard event and updates the app state accordingly.
///
/// Returns `true` if the application should quit, `false` otherwise.
///
/// # Event Handling
///
/// - `Esc` / `Ctrl+C`: quit
/// - `Enter`: submit the question
/// - `Backspace`: delete the last character
/// - `Up`/`Down`, `PageUp`/`PageDown`: scroll the history
/// - `Ctrl+L`: clear the conversation
/// - any other character: append to the input line
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use renewal::tui::{App, event::handle_key_event};
/// use renewal::{Dataset, QueryAnswerer};
/// use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
///
/// let mut app = App::new(Arc::new(Dataset::default()), QueryAnswerer::new());
/// let key = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
/// assert!(handle_key_event(&mut app, key));
/// ```
pub fn handle_key_event(app: &mut App, key: KeyEvent) -> bool {
    // Windows terminals also report releases
    if key.kind == KeyEventKind::Release {
        return false;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Esc => return true,
        KeyCode::Char('c') if ctrl => return true,
        KeyCode::Char('l') if ctrl => app.clear(),
        KeyCode::Char(c) if !ctrl => app.push_input_char(c),
        KeyCode::Backspace => app.pop_input_char(),
        KeyCode::Enter => app.submit(),
        KeyCode::Up => app.scroll_up(1),
        KeyCode::Down => app.scroll_down(1),
        KeyCode::PageUp => app.scroll_up(PAGE),
        KeyCode::PageDown => app.scroll_down(PAGE),
        _ => {}
    }

    false
}
