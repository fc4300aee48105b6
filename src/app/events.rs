use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::form::FieldKind;
use crate::rename::handle_rename_key;
use crate::suggest::handle_suggest_key;

use super::state::App;

impl App {
    /// Handle key press events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        // Modal layers first: they block the form underneath
        if handle_rename_key(self, key) {
            return;
        }
        if handle_suggest_key(self, key) {
            return;
        }
        if self.handle_global_keys(key) {
            return;
        }
        self.handle_form_key(key);
    }

    /// Handle global keys that work regardless of focus
    /// Returns true if key was handled, false otherwise
    fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        if !key.modifiers.contains(KeyModifiers::CONTROL) {
            if key.code == KeyCode::Esc {
                self.should_quit = true;
                return true;
            }
            return false;
        }

        match key.code {
            KeyCode::Char('c') => {
                self.should_quit = true;
                true
            }
            KeyCode::Char('f') => {
                self.trigger_auto_fill();
                true
            }
            KeyCode::Char('s') => {
                self.commit_value_editor();
                self.trigger_smart_suggestions();
                true
            }
            KeyCode::Char('e') => {
                self.trigger_field_suggestions();
                true
            }
            KeyCode::Char('r') => {
                self.open_rename_modal();
                true
            }
            KeyCode::Char('g') => {
                self.trigger_export();
                true
            }
            KeyCode::Char('t') => {
                self.theme.toggle();
                true
            }
            _ => false,
        }
    }

    /// Keys operating on the form itself
    fn handle_form_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Down | KeyCode::Tab => self.select_next_field(),
            KeyCode::Up | KeyCode::BackTab => self.select_prev_field(),
            _ => self.edit_selected_field(key),
        }
    }

    fn edit_selected_field(&mut self, key: KeyEvent) {
        let Some(kind) = self.form.selected_field().map(|f| f.kind.clone()) else {
            return;
        };
        match kind {
            FieldKind::Text => {
                self.value_editor.input(key);
                self.commit_value_editor();
            }
            FieldKind::Boolean => {
                if matches!(key.code, KeyCode::Char(' ') | KeyCode::Enter) {
                    if let Some(field) = self.form.selected_field_mut() {
                        field.toggle();
                    }
                }
            }
            FieldKind::Choice { .. } => {
                let forward = match key.code {
                    KeyCode::Right | KeyCode::Char(' ') => Some(true),
                    KeyCode::Left => Some(false),
                    _ => None,
                };
                if let Some(forward) = forward
                    && let Some(field) = self.form.selected_field_mut()
                {
                    field.cycle_choice(forward);
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
