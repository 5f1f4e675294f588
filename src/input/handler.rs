use crate::app::AppState;
use crate::domain::UiMode;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Handle keyboard input events
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key),
        UiMode::Editing => handle_editing_mode(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Ok(true),

        // Switch focused field
        KeyCode::Tab | KeyCode::Up | KeyCode::Down => {
            app.toggle_field();
            Ok(false)
        }

        // Edit the focused field
        KeyCode::Char('e') | KeyCode::Char('E') | KeyCode::Enter => {
            app.start_editing();
            Ok(false)
        }

        _ => Ok(false),
    }
}

/// Handle keys in editing mode - each keystroke mutates the event value
/// directly and is persisted by the main loop
fn handle_editing_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        // Leave editing mode
        KeyCode::Esc | KeyCode::Enter => {
            app.stop_editing();
            Ok(false)
        }

        // Switch between name and date without leaving editing
        KeyCode::Tab => {
            app.toggle_field();
            Ok(false)
        }

        // Clear the field
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.clear_field();
            Ok(false)
        }

        // Backspace
        KeyCode::Backspace => {
            app.backspace();
            Ok(false)
        }

        // Add character (without Ctrl modifier to allow Ctrl+C to work)
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.push_char(c);
            Ok(false)
        }

        _ => Ok(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ActiveField;
    use crate::persistence::MemoryStore;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn create_test_app() -> AppState {
        AppState::new(Box::new(MemoryStore::new()))
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    #[test]
    fn test_handle_quit() {
        let mut app = create_test_app();
        let should_quit = handle_key(&mut app, key(KeyCode::Char('q'))).unwrap();
        assert!(should_quit);
    }

    #[test]
    fn test_handle_edit_and_type() {
        let mut app = create_test_app();

        // Press 'e' to start editing the name field
        handle_key(&mut app, key(KeyCode::Char('e'))).unwrap();
        assert_eq!(app.ui_mode, UiMode::Editing);

        handle_key(&mut app, key(KeyCode::Char('!'))).unwrap();
        assert!(app.event.name.ends_with('!'));
        assert!(app.needs_save);

        // Esc returns to normal mode
        handle_key(&mut app, key(KeyCode::Esc)).unwrap();
        assert_eq!(app.ui_mode, UiMode::Normal);
    }

    #[test]
    fn test_handle_tab_switches_field() {
        let mut app = create_test_app();
        assert_eq!(app.active_field, ActiveField::Name);

        handle_key(&mut app, key(KeyCode::Tab)).unwrap();
        assert_eq!(app.active_field, ActiveField::Date);

        handle_key(&mut app, key(KeyCode::Tab)).unwrap();
        assert_eq!(app.active_field, ActiveField::Name);
    }

    #[test]
    fn test_handle_backspace_while_editing() {
        let mut app = create_test_app();
        let original_len = app.event.name.len();

        handle_key(&mut app, key(KeyCode::Enter)).unwrap();
        handle_key(&mut app, key(KeyCode::Backspace)).unwrap();
        assert_eq!(app.event.name.len(), original_len - 1);
    }

    #[test]
    fn test_q_is_a_character_while_editing() {
        let mut app = create_test_app();

        handle_key(&mut app, key(KeyCode::Char('e'))).unwrap();
        let should_quit = handle_key(&mut app, key(KeyCode::Char('q'))).unwrap();
        assert!(!should_quit);
        assert!(app.event.name.ends_with('q'));
    }

    #[test]
    fn test_ctrl_u_clears_field() {
        let mut app = create_test_app();

        handle_key(&mut app, key(KeyCode::Char('e'))).unwrap();
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL),
        )
        .unwrap();
        assert_eq!(app.event.name, "");
    }
}
