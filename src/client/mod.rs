//! Backend API client
//!
//! One synchronous HTTP call per user-initiated action, no retry and no
//! backoff. Calls are made from the worker thread, never from the UI
//! thread. Non-success statuses surface as `ApiError::Api` carrying the
//! status code and the `{error}` body message when one is present.

pub mod types;
pub mod worker;

use std::time::Duration;

use reqwest::blocking::multipart;
use reqwest::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use types::{
    AutoFillRequest, AutoFillResponse, DocxDownload, EnhancedSuggestionsRequest,
    EnhancedSuggestionsResponse, ErrorBody, FormSuggestionsRequest, FormSuggestionsResponse,
    UpdateFieldNameRequest, UpdateFieldNameResponse,
};

const DOCX_MIME: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
const DEFAULT_DOCX_FILENAME: &str = "document.docx";

/// Errors that can occur during backend API calls
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network error (connection refused, timeout, DNS)
    #[error("Network error: {0}")]
    Network(String),

    /// Backend returned a non-success status
    #[error("Server error ({code}): {message}")]
    Api { code: u16, message: String },

    /// Failed to parse the response body
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Blocking HTTP client bound to one backend base URL
#[derive(Debug)]
pub struct ApiClient {
    http: reqwest::blocking::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn post_json<Req, Resp>(&self, path: &str, request: &Req) -> Result<Resp, ApiError>
    where
        Req: Serialize,
        Resp: DeserializeOwned,
    {
        let response = self
            .http
            .post(self.url(path))
            .json(request)
            .send()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(ApiError::Api {
                code: status.as_u16(),
                message: error_message(&body, status.as_u16()),
            });
        }

        serde_json::from_str(&body).map_err(|e| ApiError::Parse(e.to_string()))
    }

    /// `POST /api/ai/form-suggestions`
    pub fn form_suggestions(
        &self,
        request: &FormSuggestionsRequest,
    ) -> Result<FormSuggestionsResponse, ApiError> {
        self.post_json("/api/ai/form-suggestions", request)
    }

    /// `POST /auto_fill_form`
    pub fn auto_fill(&self, request: &AutoFillRequest) -> Result<AutoFillResponse, ApiError> {
        self.post_json("/auto_fill_form", request)
    }

    /// `POST /get_enhanced_suggestions`
    pub fn enhanced_suggestions(
        &self,
        request: &EnhancedSuggestionsRequest,
    ) -> Result<EnhancedSuggestionsResponse, ApiError> {
        self.post_json("/get_enhanced_suggestions", request)
    }

    /// `POST /update_field_name`
    pub fn update_field_name(
        &self,
        request: &UpdateFieldNameRequest,
    ) -> Result<UpdateFieldNameResponse, ApiError> {
        self.post_json("/update_field_name", request)
    }

    /// `POST /save-and-generate-docx`
    ///
    /// Sends the current field values as a multipart form. The backend
    /// answers with either the generated document (dispatched on the
    /// declared content type) or a JSON `{error}` body.
    pub fn generate_docx(
        &self,
        fields: &[(String, String)],
        document_name: Option<&str>,
    ) -> Result<DocxDownload, ApiError> {
        let mut form = multipart::Form::new();
        for (code, value) in fields {
            form = form.text(code.clone(), value.clone());
        }
        if let Some(name) = document_name {
            form = form.text("document_name", name.to_string());
        }

        let response = self
            .http
            .post(self.url("/save-and-generate-docx"))
            .multipart(form)
            .send()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();

        if status.is_success() && content_type.starts_with(DOCX_MIME) {
            let filename = response
                .headers()
                .get(CONTENT_DISPOSITION)
                .and_then(|v| v.to_str().ok())
                .and_then(disposition_filename)
                .unwrap_or_else(|| DEFAULT_DOCX_FILENAME.to_string());
            let bytes = response
                .bytes()
                .map_err(|e| ApiError::Network(e.to_string()))?;
            return Ok(DocxDownload {
                filename,
                bytes: bytes.to_vec(),
            });
        }

        let body = response
            .text()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Err(ApiError::Api {
            code: status.as_u16(),
            message: error_message(&body, status.as_u16()),
        })
    }
}

/// Extract the `{error}` message from a failure body, falling back to a
/// generic status description
fn error_message(body: &str, code: u16) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.error)
        .unwrap_or_else(|_| format!("request failed with status {}", code))
}

/// Parse the filename out of a `Content-Disposition` header value
fn disposition_filename(header: &str) -> Option<String> {
    let rest = header.split("filename=").nth(1)?;
    let name = rest.split(';').next()?.trim().trim_matches('"');
    (!name.is_empty()).then(|| name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_without_double_slash() {
        let client = ApiClient::new("http://localhost:5000/", Duration::from_secs(1)).unwrap();
        assert_eq!(
            client.url("/auto_fill_form"),
            "http://localhost:5000/auto_fill_form"
        );
        assert_eq!(
            client.url("auto_fill_form"),
            "http://localhost:5000/auto_fill_form"
        );
    }

    #[test]
    fn test_error_message_prefers_json_body() {
        assert_eq!(error_message(r#"{"error": "bad request"}"#, 500), "bad request");
    }

    #[test]
    fn test_error_message_falls_back_on_non_json() {
        assert_eq!(
            error_message("<html>Internal Server Error</html>", 500),
            "request failed with status 500"
        );
    }

    #[test]
    fn test_disposition_filename_quoted() {
        assert_eq!(
            disposition_filename(r#"attachment; filename="report 2024.docx""#),
            Some("report 2024.docx".to_string())
        );
    }

    #[test]
    fn test_disposition_filename_unquoted_with_trailing_params() {
        assert_eq!(
            disposition_filename("attachment; filename=report.docx; size=1024"),
            Some("report.docx".to_string())
        );
    }

    #[test]
    fn test_disposition_filename_missing() {
        assert_eq!(disposition_filename("attachment"), None);
        assert_eq!(disposition_filename(r#"attachment; filename="""#), None);
    }
}
