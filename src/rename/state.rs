use ratatui::style::Style;
use tui_textarea::TextArea;

/// Phase of the field-name edit flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenamePhase {
    #[default]
    Idle,
    ModalOpen,
    Saving,
}

/// Field-name edit modal state
pub struct RenameState {
    phase: RenamePhase,
    field_code: Option<String>,
    pub editor: TextArea<'static>,
}

impl Default for RenameState {
    fn default() -> Self {
        Self::new()
    }
}

impl RenameState {
    pub fn new() -> Self {
        Self {
            phase: RenamePhase::Idle,
            field_code: None,
            editor: TextArea::default(),
        }
    }

    /// Open the modal pre-filled with the current label
    pub fn open(&mut self, field_code: String, current_label: &str) {
        let mut editor = TextArea::from([current_label.to_string()]);
        editor.set_cursor_line_style(Style::default());
        editor.move_cursor(tui_textarea::CursorMove::End);
        self.editor = editor;
        self.field_code = Some(field_code);
        self.phase = RenamePhase::ModalOpen;
    }

    /// Close without any network effect
    pub fn cancel(&mut self) {
        self.phase = RenamePhase::Idle;
        self.field_code = None;
    }

    /// Transition into `Saving` while the request is in flight
    pub fn begin_save(&mut self) {
        self.phase = RenamePhase::Saving;
    }

    /// Return to `Idle`; called on both success and failure
    pub fn finish(&mut self) {
        self.phase = RenamePhase::Idle;
        self.field_code = None;
    }

    pub fn phase(&self) -> RenamePhase {
        self.phase
    }

    pub fn is_open(&self) -> bool {
        self.phase != RenamePhase::Idle
    }

    pub fn is_saving(&self) -> bool {
        self.phase == RenamePhase::Saving
    }

    pub fn field_code(&self) -> Option<&str> {
        self.field_code.as_deref()
    }

    /// The entered name, trimmed; None when empty
    pub fn entered_name(&self) -> Option<String> {
        let name = self.editor.lines().first()?.trim();
        (!name.is_empty()).then(|| name.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_starts_idle() {
        let state = RenameState::new();
        assert_eq!(state.phase(), RenamePhase::Idle);
        assert!(!state.is_open());
        assert!(state.field_code().is_none());
    }

    #[test]
    fn test_open_prefills_current_label() {
        let mut state = RenameState::new();
        state.open("name[_1_]".to_string(), "Company name");
        assert_eq!(state.phase(), RenamePhase::ModalOpen);
        assert_eq!(state.field_code(), Some("name[_1_]"));
        assert_eq!(state.entered_name().as_deref(), Some("Company name"));
    }

    #[test]
    fn test_cancel_returns_to_idle() {
        let mut state = RenameState::new();
        state.open("name[_1_]".to_string(), "Company name");
        state.cancel();
        assert_eq!(state.phase(), RenamePhase::Idle);
        assert!(state.field_code().is_none());
    }

    #[test]
    fn test_save_transitions_and_finishes_idle() {
        let mut state = RenameState::new();
        state.open("name[_1_]".to_string(), "Company name");
        state.begin_save();
        assert!(state.is_saving());
        state.finish();
        assert_eq!(state.phase(), RenamePhase::Idle);
    }

    #[test]
    fn test_entered_name_trims_whitespace() {
        let mut state = RenameState::new();
        state.open("f".to_string(), "  padded  ");
        assert_eq!(state.entered_name().as_deref(), Some("padded"));
    }

    #[test]
    fn test_entered_name_empty_is_none() {
        let mut state = RenameState::new();
        state.open("f".to_string(), "   ");
        assert!(state.entered_name().is_none());
    }

    // The flow always terminates in Idle: for any sequence of open /
    // cancel / begin_save / finish operations, cancel and finish both
    // land in Idle with no field code retained.
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_cancel_and_finish_always_reach_idle(ops in prop::collection::vec(0u8..4, 1..20)) {
            let mut state = RenameState::new();
            for op in ops {
                match op {
                    0 => state.open("code".to_string(), "label"),
                    1 => state.cancel(),
                    2 => if state.is_open() { state.begin_save() },
                    _ => state.finish(),
                }
            }
            state.finish();
            prop_assert_eq!(state.phase(), RenamePhase::Idle);
            prop_assert!(state.field_code().is_none());
        }
    }
}
