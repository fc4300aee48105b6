use serde_json::Value;

/// Field kind, deciding the assignment strategy for suggested values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text
    Text,
    /// Checked/unchecked; suggested values are coerced to a boolean
    Boolean,
    /// One of a fixed set of options
    Choice { options: Vec<String> },
}

/// Current field value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Boolean(bool),
}

/// A single form field: identifier, display label, kind, and value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub code: String,
    pub label: String,
    pub kind: FieldKind,
    pub value: FieldValue,
}

impl Field {
    pub fn text(code: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            label: label.into(),
            kind: FieldKind::Text,
            value: FieldValue::Text(String::new()),
        }
    }

    pub fn boolean(code: impl Into<String>, label: impl Into<String>, checked: bool) -> Self {
        Self {
            code: code.into(),
            label: label.into(),
            kind: FieldKind::Boolean,
            value: FieldValue::Boolean(checked),
        }
    }

    pub fn choice(
        code: impl Into<String>,
        label: impl Into<String>,
        options: Vec<String>,
    ) -> Self {
        Self {
            code: code.into(),
            label: label.into(),
            kind: FieldKind::Choice { options },
            value: FieldValue::Text(String::new()),
        }
    }

    /// Whether the field currently holds no value.
    /// Unchecked booleans count as empty, matching an unchecked checkbox
    /// being absent from a submitted form.
    pub fn is_empty(&self) -> bool {
        match &self.value {
            FieldValue::Text(s) => s.trim().is_empty(),
            FieldValue::Boolean(b) => !b,
        }
    }

    /// Current value rendered as a string (export payload and display)
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Boolean(b) => if *b { "on" } else { "" }.to_string(),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match &self.value {
            FieldValue::Text(s) => Some(s),
            FieldValue::Boolean(_) => None,
        }
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.value = FieldValue::Text(text.into());
    }

    /// Toggle a boolean field; no-op for other kinds
    pub fn toggle(&mut self) {
        if let FieldValue::Boolean(b) = &mut self.value {
            *b = !*b;
        }
    }

    /// Step to the next/previous option of a choice field; no-op otherwise
    pub fn cycle_choice(&mut self, forward: bool) {
        let FieldKind::Choice { options } = &self.kind else {
            return;
        };
        if options.is_empty() {
            return;
        }
        let current = self.as_text().unwrap_or("").to_string();
        let pos = options.iter().position(|o| *o == current);
        let next = match (pos, forward) {
            (Some(i), true) => (i + 1) % options.len(),
            (Some(i), false) => (i + options.len() - 1) % options.len(),
            (None, true) => 0,
            (None, false) => options.len() - 1,
        };
        self.value = FieldValue::Text(options[next].clone());
    }

    /// Apply a suggested value according to the field kind.
    ///
    /// Boolean targets coerce any truthy value to checked; choice targets
    /// accept only values matching one of their options; text targets take
    /// the value verbatim. Returns whether the field was written.
    pub fn apply_suggestion(&mut self, suggested: &Value) -> bool {
        match &self.kind {
            FieldKind::Boolean => {
                self.value = FieldValue::Boolean(truthy(suggested));
                true
            }
            FieldKind::Choice { options } => {
                let text = value_as_text(suggested);
                if options.contains(&text) {
                    self.value = FieldValue::Text(text);
                    true
                } else {
                    log::debug!(
                        "Suggested value {:?} is not an option of choice field {}",
                        suggested,
                        self.code
                    );
                    false
                }
            }
            FieldKind::Text => {
                self.value = FieldValue::Text(value_as_text(suggested));
                true
            }
        }
    }
}

/// JS-style truthiness over a JSON value
fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Render a suggested JSON value as field text
fn value_as_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
