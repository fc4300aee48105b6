//! Request and response payloads for the backend API

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `POST /api/ai/form-suggestions`
#[derive(Debug, Clone, Serialize)]
pub struct FormSuggestionsRequest {
    pub form_type: String,
    pub max_history: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FormSuggestionsResponse {
    pub success: bool,
    #[serde(default)]
    pub suggestions: Option<BTreeMap<String, Value>>,
    #[serde(default)]
    pub message: Option<String>,
}

/// `POST /auto_fill_form`
#[derive(Debug, Clone, Serialize)]
pub struct AutoFillRequest {
    pub target_fields: Vec<String>,
    pub partial_form: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AutoFillResponse {
    #[serde(default)]
    pub auto_fill_data: BTreeMap<String, String>,
}

/// `POST /get_enhanced_suggestions`
#[derive(Debug, Clone, Serialize)]
pub struct EnhancedSuggestionsRequest {
    pub field_code: String,
    pub partial_form: BTreeMap<String, String>,
    pub context_text: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EnhancedSuggestionsResponse {
    #[serde(default)]
    pub suggestions: Vec<String>,
    #[serde(default)]
    pub error_details: Option<String>,
}

/// `POST /update_field_name`
#[derive(Debug, Clone, Serialize)]
pub struct UpdateFieldNameRequest {
    pub field_code: String,
    pub new_field_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateFieldNameResponse {
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

/// JSON error body returned on failed requests
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// A generated docx document returned by `POST /save-and-generate-docx`
#[derive(Debug, Clone)]
pub struct DocxDownload {
    pub filename: String,
    pub bytes: Vec<u8>,
}
