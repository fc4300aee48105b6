use ratatui::crossterm::event::{KeyCode, KeyEvent};

use crate::app::App;

use super::state::RenamePhase;

/// Handle keys while the rename modal is open.
/// Returns true if the key was consumed.
pub fn handle_rename_key(app: &mut App, key: KeyEvent) -> bool {
    match app.rename.phase() {
        RenamePhase::Idle => false,
        // Block input while the save request is in flight
        RenamePhase::Saving => true,
        RenamePhase::ModalOpen => {
            match key.code {
                KeyCode::Esc => app.rename.cancel(),
                KeyCode::Enter => app.save_field_name(),
                _ => {
                    app.rename.editor.input(key);
                }
            }
            true
        }
    }
}
