use std::path::PathBuf;
use std::sync::mpsc::{Receiver, Sender};

use ratatui::style::Style;
use tui_textarea::TextArea;

use crate::client::worker::{ApiRequest, ApiResponse};
use crate::config::Config;
use crate::form::loader::FormTemplate;
use crate::form::{FieldKind, FormState};
use crate::notify::{NotificationId, NotificationState, Severity};
use crate::rename::RenameState;
use crate::suggest::SuggestState;
use crate::theme::Theme;

/// Backend-touching actions; at most one is in flight at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    SmartSuggestions,
    AutoFill,
    FieldSuggestions,
    RenameSave,
    Export,
}

pub(crate) struct InFlight {
    pub action: ActionKind,
    pub request_id: u64,
    pub toast: Option<NotificationId>,
}

/// Application state
pub struct App {
    pub config: Config,
    pub theme: Theme,
    pub form: FormState,
    pub form_type: String,
    pub notifications: NotificationState,
    pub suggest: SuggestState,
    pub rename: RenameState,
    pub value_editor: TextArea<'static>,
    pub output_dir: PathBuf,
    pub document_name: Option<String>,
    pub should_quit: bool,
    request_tx: Option<Sender<ApiRequest>>,
    response_rx: Option<Receiver<ApiResponse>>,
    next_request_id: u64,
    in_flight: Option<InFlight>,
    #[cfg(test)]
    pub(crate) test_request_rx: Option<Receiver<ApiRequest>>,
}

impl App {
    /// Create a new App instance from a loaded template
    pub fn new(template: FormTemplate, config: Config, output_dir: PathBuf) -> Self {
        let form_type = template
            .form_type
            .clone()
            .unwrap_or_else(|| "default".to_string());
        let theme = Theme::resolve(config.theme.mode);
        let form = FormState::new(template.fields);

        let mut app = Self {
            config,
            theme,
            form,
            form_type,
            notifications: NotificationState::new(),
            suggest: SuggestState::new(),
            rename: RenameState::new(),
            value_editor: TextArea::default(),
            output_dir,
            document_name: None,
            should_quit: false,
            request_tx: None,
            response_rx: None,
            next_request_id: 0,
            in_flight: None,
            #[cfg(test)]
            test_request_rx: None,
        };
        app.load_value_editor();
        app
    }

    /// Set the channel handles for communication with the worker thread
    pub fn set_channels(
        &mut self,
        request_tx: Sender<ApiRequest>,
        response_rx: Receiver<ApiResponse>,
    ) {
        self.request_tx = Some(request_tx);
        self.response_rx = Some(response_rx);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn in_flight_action(&self) -> Option<ActionKind> {
        self.in_flight.as_ref().map(|f| f.action)
    }

    /// Claim the single in-flight slot for an action.
    ///
    /// Returns the request id to use, or None when another request is
    /// already running (the overlap is rejected with a warning toast, not
    /// queued). A sticky progress toast is shown when a message is given.
    pub(crate) fn begin_action(
        &mut self,
        action: ActionKind,
        progress_message: Option<&str>,
    ) -> Option<u64> {
        if self.in_flight.is_some() {
            self.notifications
                .push("A request is already in progress", Severity::Warning);
            return None;
        }
        self.next_request_id = self.next_request_id.wrapping_add(1);
        let toast = progress_message
            .map(|m| self.notifications.push_with_duration(m, Severity::Info, 0));
        self.in_flight = Some(InFlight {
            action,
            request_id: self.next_request_id,
            toast,
        });
        Some(self.next_request_id)
    }

    /// Release the in-flight slot and restore every triggering control:
    /// dismiss the progress toast, clear the per-field loading marker,
    /// and return a saving rename modal to idle.
    pub(crate) fn finish_action(&mut self) {
        if let Some(in_flight) = self.in_flight.take()
            && let Some(toast) = in_flight.toast
        {
            self.notifications.dismiss(toast);
        }
        self.suggest.finish_loading();
        if self.rename.is_saving() {
            self.rename.finish();
        }
    }

    pub(crate) fn current_request_id(&self) -> Option<u64> {
        self.in_flight.as_ref().map(|f| f.request_id)
    }

    /// Hand a request to the worker; failure degrades to an error toast
    /// and releases the in-flight slot
    pub(crate) fn send_request(&mut self, request: ApiRequest) {
        let sent = match &self.request_tx {
            Some(tx) => tx.send(request).is_ok(),
            None => false,
        };
        if !sent {
            log::debug!("Request channel unavailable");
            self.notifications
                .push("Backend connection is not available", Severity::Error);
            self.finish_action();
        }
    }

    pub(crate) fn take_responses(&mut self) -> Vec<ApiResponse> {
        match &self.response_rx {
            Some(rx) => rx.try_iter().collect(),
            None => Vec::new(),
        }
    }

    /// Load the selected field's text into the inline value editor
    pub fn load_value_editor(&mut self) {
        let text = self
            .form
            .selected_field()
            .and_then(|f| f.as_text())
            .unwrap_or("");
        let mut editor = TextArea::from([text.to_string()]);
        editor.set_cursor_line_style(Style::default());
        editor.move_cursor(tui_textarea::CursorMove::End);
        self.value_editor = editor;
    }

    /// Write the editor line back into the selected text field
    pub fn commit_value_editor(&mut self) {
        let line = self
            .value_editor
            .lines()
            .first()
            .cloned()
            .unwrap_or_default();
        if let Some(field) = self.form.selected_field_mut()
            && field.kind == FieldKind::Text
        {
            field.set_text(line);
        }
    }

    pub fn select_next_field(&mut self) {
        self.commit_value_editor();
        self.form.select_next();
        self.load_value_editor();
    }

    pub fn select_prev_field(&mut self) {
        self.commit_value_editor();
        self.form.select_prev();
        self.load_value_editor();
    }

    #[cfg(test)]
    pub(crate) fn sent_requests(&mut self) -> Vec<ApiRequest> {
        match &self.test_request_rx {
            Some(rx) => rx.try_iter().collect(),
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
