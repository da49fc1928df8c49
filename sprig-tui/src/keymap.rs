use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use sprig_core::action::Action;
use sprig_core::state::{AppState, Mode};

/// Resolve a key event into an Action based on current mode. Keys with
/// no meaning in the current mode resolve to nothing, which is what
/// makes pressing enter/delete mid-command a guarded no-op.
pub fn resolve_action(key: KeyEvent, state: &AppState) -> Option<Action> {
    // Global quit
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Action::Quit);
    }

    match &state.mode {
        Mode::Navigating => resolve_navigating_key(key.code),
        Mode::Busy { .. } => resolve_busy_key(key.code),
        Mode::ConfirmingForceDelete { .. } => resolve_confirm_key(key.code),
    }
}

fn resolve_navigating_key(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Esc => Some(Action::Quit),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveSelection(-1)),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveSelection(1)),
        KeyCode::Enter => Some(Action::SwitchBranch),
        KeyCode::Delete => Some(Action::DeleteBranch),
        _ => None,
    }
}

fn resolve_busy_key(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Esc => Some(Action::Quit),
        KeyCode::Enter => Some(Action::SubmitInput),
        KeyCode::Backspace => Some(Action::InputBackspace),
        KeyCode::Left => Some(Action::InputCursorLeft),
        KeyCode::Right => Some(Action::InputCursorRight),
        KeyCode::Home => Some(Action::InputCursorStart),
        KeyCode::End => Some(Action::InputCursorEnd),
        KeyCode::Char(c) => Some(Action::InputInsert(c)),
        _ => None,
    }
}

fn resolve_confirm_key(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('y' | 'Y') => Some(Action::ConfirmForceDelete),
        // n, enter, anything else: cancel the escalation
        _ => Some(Action::CancelForceDelete),
    }
}
