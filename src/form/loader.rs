//! Form template loading
//!
//! Templates are JSON files describing the fields to render:
//!
//! ```json
//! {
//!   "form_type": "contract",
//!   "fields": [
//!     {"code": "name[_1_]", "label": "Company name"},
//!     {"code": "approved", "label": "Approved", "kind": "boolean"},
//!     {"code": "doc_type", "label": "Type", "kind": "choice",
//!      "options": ["contract", "report"]}
//!   ]
//! }
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::error::FormfillError;
use crate::form::Field;

/// A loaded and validated form template
#[derive(Debug)]
pub struct FormTemplate {
    pub form_type: Option<String>,
    pub fields: Vec<Field>,
}

#[derive(Deserialize)]
struct TemplateFile {
    #[serde(default)]
    form_type: Option<String>,
    fields: Vec<TemplateField>,
}

#[derive(Deserialize)]
struct TemplateField {
    code: String,
    label: String,
    #[serde(default)]
    kind: TemplateKind,
    #[serde(default)]
    options: Vec<String>,
    #[serde(default)]
    checked: bool,
}

#[derive(Deserialize, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
enum TemplateKind {
    #[default]
    Text,
    Boolean,
    Choice,
}

/// Load a form template from a JSON file
pub fn load_template(path: &Path) -> Result<FormTemplate, FormfillError> {
    let contents = std::fs::read_to_string(path)?;
    parse_template(&contents)
}

/// Parse and validate template JSON
pub fn parse_template(json: &str) -> Result<FormTemplate, FormfillError> {
    let file: TemplateFile = serde_json::from_str(json)
        .map_err(|e| FormfillError::InvalidTemplate(e.to_string()))?;

    if file.fields.is_empty() {
        return Err(FormfillError::InvalidTemplate(
            "template contains no fields".to_string(),
        ));
    }

    let mut fields = Vec::with_capacity(file.fields.len());
    for def in file.fields {
        if def.code.trim().is_empty() {
            return Err(FormfillError::InvalidTemplate(
                "field with empty code".to_string(),
            ));
        }
        if fields.iter().any(|f: &Field| f.code == def.code) {
            return Err(FormfillError::InvalidTemplate(format!(
                "duplicate field code: {}",
                def.code
            )));
        }
        let field = match def.kind {
            TemplateKind::Text => Field::text(def.code, def.label),
            TemplateKind::Boolean => Field::boolean(def.code, def.label, def.checked),
            TemplateKind::Choice => {
                if def.options.is_empty() {
                    return Err(FormfillError::InvalidTemplate(format!(
                        "choice field {} has no options",
                        def.code
                    )));
                }
                Field::choice(def.code, def.label, def.options)
            }
        };
        fields.push(field);
    }

    Ok(FormTemplate {
        form_type: file.form_type,
        fields,
    })
}
