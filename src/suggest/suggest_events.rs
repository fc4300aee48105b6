use ratatui::crossterm::event::{KeyCode, KeyEvent};

use crate::app::App;

/// Handle keys while the suggestion popup is visible.
/// Returns true if the key was consumed.
pub fn handle_suggest_key(app: &mut App, key: KeyEvent) -> bool {
    if !app.suggest.is_visible() {
        return false;
    }

    match key.code {
        KeyCode::Esc => {
            app.suggest.close();
            true
        }
        KeyCode::Down | KeyCode::Tab => {
            app.suggest.select_next();
            true
        }
        KeyCode::Up | KeyCode::BackTab => {
            app.suggest.select_prev();
            true
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.apply_selected_suggestion();
            true
        }
        // Block everything else while the popup is open
        _ => true,
    }
}
