//! API worker thread
//!
//! Handles backend requests in a background thread to avoid blocking the
//! UI. Receives requests via channel, makes one HTTP call each, and sends
//! the outcome back to the main thread. Every message carries the request
//! id it belongs to; the main thread drops responses whose id no longer
//! matches the in-flight action.

use std::collections::BTreeMap;
use std::sync::mpsc::{Receiver, Sender};

use super::types::{
    AutoFillRequest, AutoFillResponse, DocxDownload, EnhancedSuggestionsRequest,
    EnhancedSuggestionsResponse, FormSuggestionsRequest, FormSuggestionsResponse,
    UpdateFieldNameRequest, UpdateFieldNameResponse,
};
use super::{ApiClient, ApiError};

/// Request messages sent to the worker thread
#[derive(Debug)]
pub enum ApiRequest {
    FormSuggestions {
        form_type: String,
        max_history: u32,
        request_id: u64,
    },
    AutoFill {
        target_fields: Vec<String>,
        partial_form: BTreeMap<String, String>,
        request_id: u64,
    },
    EnhancedSuggestions {
        field_code: String,
        partial_form: BTreeMap<String, String>,
        context_text: String,
        request_id: u64,
    },
    UpdateFieldName {
        field_code: String,
        new_field_name: String,
        request_id: u64,
    },
    GenerateDocx {
        fields: Vec<(String, String)>,
        document_name: Option<String>,
        request_id: u64,
    },
}

impl ApiRequest {
    pub fn request_id(&self) -> u64 {
        match self {
            ApiRequest::FormSuggestions { request_id, .. }
            | ApiRequest::AutoFill { request_id, .. }
            | ApiRequest::EnhancedSuggestions { request_id, .. }
            | ApiRequest::UpdateFieldName { request_id, .. }
            | ApiRequest::GenerateDocx { request_id, .. } => *request_id,
        }
    }
}

/// Response messages received from the worker thread
#[derive(Debug)]
pub enum ApiResponse {
    FormSuggestions {
        response: Result<FormSuggestionsResponse, ApiError>,
        request_id: u64,
    },
    AutoFill {
        response: Result<AutoFillResponse, ApiError>,
        request_id: u64,
    },
    EnhancedSuggestions {
        field_code: String,
        response: Result<EnhancedSuggestionsResponse, ApiError>,
        request_id: u64,
    },
    UpdateFieldName {
        field_code: String,
        new_field_name: String,
        response: Result<UpdateFieldNameResponse, ApiError>,
        request_id: u64,
    },
    Docx {
        response: Result<DocxDownload, ApiError>,
        request_id: u64,
    },
}

impl ApiResponse {
    pub fn request_id(&self) -> u64 {
        match self {
            ApiResponse::FormSuggestions { request_id, .. }
            | ApiResponse::AutoFill { request_id, .. }
            | ApiResponse::EnhancedSuggestions { request_id, .. }
            | ApiResponse::UpdateFieldName { request_id, .. }
            | ApiResponse::Docx { request_id, .. } => *request_id,
        }
    }
}

/// Spawn the API worker thread
///
/// Creates a background thread that listens for requests on the request
/// channel, performs the HTTP call, and sends the outcome back via the
/// response channel.
pub fn spawn_worker(
    client: ApiClient,
    request_rx: Receiver<ApiRequest>,
    response_tx: Sender<ApiResponse>,
) {
    std::thread::spawn(move || {
        worker_loop(&client, request_rx, response_tx);
    });
}

/// Main worker loop - processes requests until the channel is closed
fn worker_loop(
    client: &ApiClient,
    request_rx: Receiver<ApiRequest>,
    response_tx: Sender<ApiResponse>,
) {
    while let Ok(request) = request_rx.recv() {
        log::debug!("Worker handling request {}", request.request_id());
        let response = handle_request(client, request);
        if response_tx.send(response).is_err() {
            // Main thread disconnected
            return;
        }
    }
    log::debug!("API worker thread shutting down");
}

fn handle_request(client: &ApiClient, request: ApiRequest) -> ApiResponse {
    match request {
        ApiRequest::FormSuggestions {
            form_type,
            max_history,
            request_id,
        } => ApiResponse::FormSuggestions {
            response: client.form_suggestions(&FormSuggestionsRequest {
                form_type,
                max_history,
            }),
            request_id,
        },
        ApiRequest::AutoFill {
            target_fields,
            partial_form,
            request_id,
        } => ApiResponse::AutoFill {
            response: client.auto_fill(&AutoFillRequest {
                target_fields,
                partial_form,
            }),
            request_id,
        },
        ApiRequest::EnhancedSuggestions {
            field_code,
            partial_form,
            context_text,
            request_id,
        } => ApiResponse::EnhancedSuggestions {
            response: client.enhanced_suggestions(&EnhancedSuggestionsRequest {
                field_code: field_code.clone(),
                partial_form,
                context_text,
            }),
            field_code,
            request_id,
        },
        ApiRequest::UpdateFieldName {
            field_code,
            new_field_name,
            request_id,
        } => ApiResponse::UpdateFieldName {
            response: client.update_field_name(&UpdateFieldNameRequest {
                field_code: field_code.clone(),
                new_field_name: new_field_name.clone(),
            }),
            field_code,
            new_field_name,
            request_id,
        },
        ApiRequest::GenerateDocx {
            fields,
            document_name,
            request_id,
        } => ApiResponse::Docx {
            response: client.generate_docx(&fields, document_name.as_deref()),
            request_id,
        },
    }
}
