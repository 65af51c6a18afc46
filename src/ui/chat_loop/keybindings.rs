//! Maps key presses to chat actions.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::app::AppAction;

/// Rows moved by a single arrow key press.
const LINE_SCROLL_STEP: u16 = 1;

/// What the event loop should do with a key press.
#[derive(Debug)]
pub enum KeyResult {
    /// Take the current input text and submit it.
    Submit,
    /// Dispatch an action against the app.
    Action(AppAction),
    /// Forward the key to the input field.
    Edit,
}

pub fn resolve_key(key: &KeyEvent) -> KeyResult {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => KeyResult::Action(AppAction::RequestExit),
        KeyCode::Char('c') | KeyCode::Char('d') if ctrl => {
            KeyResult::Action(AppAction::RequestExit)
        }
        KeyCode::Char('l') if ctrl => KeyResult::Action(AppAction::ClearInput),
        KeyCode::Enter => KeyResult::Submit,
        // Terminals report these as line feeds; keep the input single-line.
        KeyCode::Char('j') | KeyCode::Char('m') if ctrl => KeyResult::Submit,
        KeyCode::Up => KeyResult::Action(AppAction::ScrollUp {
            lines: LINE_SCROLL_STEP,
        }),
        KeyCode::Down => KeyResult::Action(AppAction::ScrollDown {
            lines: LINE_SCROLL_STEP,
        }),
        KeyCode::PageUp => KeyResult::Action(AppAction::PageUp),
        KeyCode::PageDown => KeyResult::Action(AppAction::PageDown),
        KeyCode::Home if ctrl => KeyResult::Action(AppAction::ScrollToTop),
        KeyCode::End if ctrl => KeyResult::Action(AppAction::ScrollToBottom),
        _ => KeyResult::Edit,
    }
}

/// Make pasted text fit the single-line input: line breaks become spaces,
/// tabs expand to four spaces and other control characters are dropped.
pub fn sanitize_pasted_text(text: &str) -> String {
    let without_crlf = text.replace("\r\n", " ");
    let without_breaks = without_crlf.replace(['\r', '\n'], " ");
    let expanded_tabs = without_breaks.replace('\t', "    ");
    expanded_tabs.chars().filter(|c| !c.is_control()).collect()
}
