//! Action triggers and worker-response routing
//!
//! Every trigger follows the same flow: claim the in-flight slot, build
//! the payload from current form state, hand the request to the worker.
//! Responses come back on the tick and are dropped when their request id
//! no longer matches the in-flight action. Every outcome, success or
//! failure, degrades to a toast and re-enables the triggering control.

use std::time::Instant;

use crate::client::worker::{ApiRequest, ApiResponse};
use crate::client::{ApiError, types};
use crate::export;
use crate::form::FieldKind;
use crate::notify::Severity;

use super::state::{ActionKind, App};

impl App {
    /// Advance time-based state: worker responses, toast expiry, field
    /// highlight expiry
    pub fn on_tick(&mut self, now: Instant) {
        self.poll_responses(now);
        self.notifications.tick(now);
        self.form.tick(now);
    }

    /// Request AI suggestions for the whole form
    pub fn trigger_smart_suggestions(&mut self) {
        if !self.config.ai.enabled {
            self.notifications
                .push("AI suggestions are disabled in config", Severity::Info);
            return;
        }
        let Some(request_id) =
            self.begin_action(ActionKind::SmartSuggestions, Some("Analyzing form history..."))
        else {
            return;
        };
        self.send_request(ApiRequest::FormSuggestions {
            form_type: self.form_type.clone(),
            max_history: self.config.ai.max_history,
            request_id,
        });
    }

    /// Auto-fill empty text fields from history
    pub fn trigger_auto_fill(&mut self) {
        let target_fields = self.form.text_field_codes();
        if target_fields.is_empty() {
            log::debug!("No text fields in the current form");
            self.notifications
                .push("No text fields to fill", Severity::Info);
            return;
        }
        let Some(request_id) =
            self.begin_action(ActionKind::AutoFill, Some("Auto-filling form from history..."))
        else {
            return;
        };
        self.send_request(ApiRequest::AutoFill {
            target_fields,
            partial_form: self.form.collect_filled(),
            request_id,
        });
    }

    /// Request enhanced suggestions for the selected field
    pub fn trigger_field_suggestions(&mut self) {
        self.commit_value_editor();
        let Some(field) = self.form.selected_field() else {
            return;
        };
        if field.kind != FieldKind::Text {
            self.notifications.push(
                "Suggestions are only available for text fields",
                Severity::Info,
            );
            return;
        }
        let field_code = field.code.clone();
        let Some(request_id) = self.begin_action(ActionKind::FieldSuggestions, None) else {
            return;
        };
        self.suggest.begin_loading(&field_code);
        self.send_request(ApiRequest::EnhancedSuggestions {
            field_code,
            partial_form: self.form.collect_filled(),
            context_text: self.form.context_text(),
            request_id,
        });
    }

    /// Open the rename modal for the selected field
    pub fn open_rename_modal(&mut self) {
        if let Some(field) = self.form.selected_field() {
            let code = field.code.clone();
            let label = field.label.clone();
            self.rename.open(code, &label);
        }
    }

    /// Validate and submit the field-name edit.
    /// An empty trimmed name never issues a network call.
    pub fn save_field_name(&mut self) {
        let Some(field_code) = self.rename.field_code().map(String::from) else {
            return;
        };
        let Some(new_field_name) = self.rename.entered_name() else {
            self.notifications
                .push("Field name must not be empty", Severity::Error);
            return;
        };
        let Some(request_id) =
            self.begin_action(ActionKind::RenameSave, Some("Updating field name..."))
        else {
            return;
        };
        self.rename.begin_save();
        self.send_request(ApiRequest::UpdateFieldName {
            field_code,
            new_field_name,
            request_id,
        });
    }

    /// Save the form on the backend and download the generated docx
    pub fn trigger_export(&mut self) {
        self.commit_value_editor();
        let Some(request_id) =
            self.begin_action(ActionKind::Export, Some("Generating document..."))
        else {
            return;
        };
        self.send_request(ApiRequest::GenerateDocx {
            fields: self.form.collect_all(),
            document_name: self.document_name.clone(),
            request_id,
        });
    }

    /// Write the highlighted suggestion into its field and close the popup
    pub fn apply_selected_suggestion(&mut self) {
        let Some(field_code) = self.suggest.field_code().map(String::from) else {
            return;
        };
        let Some(value) = self.suggest.selected_item().map(String::from) else {
            return;
        };
        self.form.set_field_text(&field_code, &value, Instant::now());
        self.suggest.close();
        self.load_value_editor();
    }

    fn poll_responses(&mut self, now: Instant) {
        for response in self.take_responses() {
            self.handle_response(response, now);
        }
    }

    pub(crate) fn handle_response(&mut self, response: ApiResponse, now: Instant) {
        match self.current_request_id() {
            Some(id) if id == response.request_id() => {}
            _ => {
                log::debug!("Dropping stale response {}", response.request_id());
                return;
            }
        }
        self.finish_action();

        match response {
            ApiResponse::FormSuggestions { response, .. } => {
                self.handle_form_suggestions(response, now)
            }
            ApiResponse::AutoFill { response, .. } => self.handle_auto_fill(response, now),
            ApiResponse::EnhancedSuggestions {
                field_code,
                response,
                ..
            } => self.handle_enhanced_suggestions(field_code, response),
            ApiResponse::UpdateFieldName {
                field_code,
                new_field_name,
                response,
                ..
            } => self.handle_update_field_name(field_code, new_field_name, response),
            ApiResponse::Docx { response, .. } => self.handle_docx(response),
        }
    }

    fn handle_form_suggestions(
        &mut self,
        response: Result<types::FormSuggestionsResponse, ApiError>,
        now: Instant,
    ) {
        match response {
            Ok(body) if body.success => match body.suggestions {
                Some(suggestions) if !suggestions.is_empty() => {
                    let applied = self.form.apply_suggestions(&suggestions, now);
                    self.load_value_editor();
                    if applied > 0 {
                        self.notifications.push(
                            format!("Applied {} smart suggestions", applied),
                            Severity::Success,
                        );
                    } else {
                        self.notifications.push(
                            "No suggestions matched the current form",
                            Severity::Info,
                        );
                    }
                }
                _ => {
                    self.notifications
                        .push("No suggestions available", Severity::Info);
                }
            },
            Ok(body) => {
                let message = body
                    .message
                    .unwrap_or_else(|| "Could not get suggestions".to_string());
                self.notifications.push(message, Severity::Error);
            }
            Err(e) => {
                self.notifications.push(e.to_string(), Severity::Error);
            }
        }
    }

    fn handle_auto_fill(
        &mut self,
        response: Result<types::AutoFillResponse, ApiError>,
        now: Instant,
    ) {
        match response {
            Ok(body) if !body.auto_fill_data.is_empty() => {
                let filled = self.form.apply_fill(&body.auto_fill_data, now);
                self.load_value_editor();
                if filled > 0 {
                    self.notifications.push(
                        format!("Auto-filled {} fields from history", filled),
                        Severity::Success,
                    );
                } else {
                    self.notifications
                        .push("No fields were auto-filled", Severity::Info);
                }
            }
            Ok(_) => {
                self.notifications
                    .push("No matching history data to fill from", Severity::Info);
            }
            Err(e) => {
                self.notifications.push(e.to_string(), Severity::Error);
            }
        }
    }

    fn handle_enhanced_suggestions(
        &mut self,
        field_code: String,
        response: Result<types::EnhancedSuggestionsResponse, ApiError>,
    ) {
        match response {
            Ok(body) if !body.suggestions.is_empty() => {
                self.suggest.open(field_code, body.suggestions);
            }
            Ok(body) => {
                let message = match body.error_details {
                    Some(details) => format!("No suggestions for this field: {}", details),
                    None => "No suggestions available for this field".to_string(),
                };
                self.notifications.push(message, Severity::Info);
            }
            Err(e) => {
                self.notifications.push(e.to_string(), Severity::Error);
            }
        }
    }

    fn handle_update_field_name(
        &mut self,
        field_code: String,
        new_field_name: String,
        response: Result<types::UpdateFieldNameResponse, ApiError>,
    ) {
        match response {
            Ok(body) if body.success => {
                self.form.rename_label(&field_code, &new_field_name);
                self.notifications
                    .push("Field name updated", Severity::Success);
            }
            Ok(body) => {
                let message = body
                    .error
                    .unwrap_or_else(|| "Could not update the field name".to_string());
                self.notifications.push(message, Severity::Error);
            }
            Err(e) => {
                self.notifications.push(e.to_string(), Severity::Error);
            }
        }
    }

    fn handle_docx(&mut self, response: Result<types::DocxDownload, ApiError>) {
        match response {
            Ok(download) => match export::save_download(&download, &self.output_dir) {
                Ok(path) => {
                    self.notifications.push(
                        format!("Document saved to {}", path.display()),
                        Severity::Success,
                    );
                }
                Err(e) => {
                    self.notifications
                        .push(format!("Could not save document: {}", e), Severity::Error);
                }
            },
            Err(e) => {
                self.notifications.push(e.to_string(), Severity::Error);
            }
        }
    }
}

#[cfg(test)]
#[path = "app_actions_tests.rs"]
mod app_actions_tests;
