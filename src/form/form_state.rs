use std::collections::{BTreeMap, HashMap};
use std::time::{Duration, Instant};

use serde_json::Value;

use super::field::{Field, FieldKind};

/// How long a freshly written field stays visually highlighted
pub const HIGHLIGHT_DURATION: Duration = Duration::from_secs(2);

/// The rendered form: field list, cursor, and highlight bookkeeping
pub struct FormState {
    fields: Vec<Field>,
    selected: usize,
    highlights: HashMap<String, Instant>,
}

impl FormState {
    pub fn new(fields: Vec<Field>) -> Self {
        Self {
            fields,
            selected: 0,
            highlights: HashMap::new(),
        }
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_field(&self) -> Option<&Field> {
        self.fields.get(self.selected)
    }

    pub fn selected_field_mut(&mut self) -> Option<&mut Field> {
        self.fields.get_mut(self.selected)
    }

    pub fn select_next(&mut self) {
        if !self.fields.is_empty() && self.selected < self.fields.len() - 1 {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn field(&self, code: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.code == code)
    }

    fn field_mut(&mut self, code: &str) -> Option<&mut Field> {
        self.fields.iter_mut().find(|f| f.code == code)
    }

    /// Codes of all text fields, the targets for history auto-fill
    pub fn text_field_codes(&self) -> Vec<String> {
        self.fields
            .iter()
            .filter(|f| f.kind == FieldKind::Text)
            .map(|f| f.code.clone())
            .collect()
    }

    /// Non-empty trimmed text values keyed by field code (the partial
    /// form sent with suggestion and auto-fill requests). Pure read.
    pub fn collect_filled(&self) -> BTreeMap<String, String> {
        self.fields
            .iter()
            .filter_map(|f| {
                let text = f.as_text()?.trim();
                (!text.is_empty()).then(|| (f.code.clone(), text.to_string()))
            })
            .collect()
    }

    /// Concatenation of all collected values, used as request context
    pub fn context_text(&self) -> String {
        self.collect_filled()
            .values()
            .cloned()
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Every field's current value, for the export payload
    pub fn collect_all(&self) -> Vec<(String, String)> {
        self.fields
            .iter()
            .map(|f| (f.code.clone(), f.display_value()))
            .collect()
    }

    /// Apply auto-fill data: write only fields that exist and are
    /// currently empty. Unknown codes are skipped. Returns the number of
    /// fields written.
    pub fn apply_fill(&mut self, data: &BTreeMap<String, String>, now: Instant) -> usize {
        let mut filled = 0;
        for (code, value) in data {
            match self.field_mut(code) {
                Some(field) if field.is_empty() => {
                    field.set_text(value.clone());
                    self.highlights.insert(code.clone(), now);
                    filled += 1;
                }
                Some(_) => {}
                None => log::debug!("Auto-fill target {} not present in form", code),
            }
        }
        filled
    }

    /// Apply AI suggestions: assignment strategy per field kind,
    /// overwriting current values. Unknown codes are skipped. Returns the
    /// number of fields written.
    pub fn apply_suggestions(&mut self, suggestions: &BTreeMap<String, Value>, now: Instant) -> usize {
        let mut applied = 0;
        for (code, value) in suggestions {
            match self.field_mut(code) {
                Some(field) => {
                    if field.apply_suggestion(value) {
                        self.highlights.insert(code.clone(), now);
                        applied += 1;
                    }
                }
                None => log::debug!("Suggestion target {} not present in form", code),
            }
        }
        applied
    }

    /// Write a value into one field (enhanced-suggestion selection)
    pub fn set_field_text(&mut self, code: &str, value: &str, now: Instant) -> bool {
        match self.field_mut(code) {
            Some(field) => {
                field.set_text(value);
                self.highlights.insert(code.to_string(), now);
                true
            }
            None => {
                log::debug!("Field {} not present in form", code);
                false
            }
        }
    }

    /// Update the displayed label after a successful field-name save
    pub fn rename_label(&mut self, code: &str, new_label: &str) -> bool {
        match self.field_mut(code) {
            Some(field) => {
                field.label = new_label.to_string();
                true
            }
            None => false,
        }
    }

    pub fn is_highlighted(&self, code: &str, now: Instant) -> bool {
        self.highlights
            .get(code)
            .is_some_and(|start| now.duration_since(*start) < HIGHLIGHT_DURATION)
    }

    /// Drop expired highlights
    pub fn tick(&mut self, now: Instant) {
        self.highlights
            .retain(|_, start| now.duration_since(*start) < HIGHLIGHT_DURATION);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_form() -> FormState {
        FormState::new(vec![
            Field::text("name[_1_]", "Company name"),
            Field::text("address[_2_]", "Address"),
            Field::boolean("approved", "Approved", false),
            Field::choice(
                "doc_type",
                "Document type",
                vec!["contract".to_string(), "report".to_string()],
            ),
        ])
    }

    #[test]
    fn test_selection_navigation_clamps() {
        let mut form = sample_form();
        assert_eq!(form.selected_index(), 0);
        form.select_prev();
        assert_eq!(form.selected_index(), 0);
        for _ in 0..10 {
            form.select_next();
        }
        assert_eq!(form.selected_index(), form.len() - 1);
    }

    #[test]
    fn test_collect_filled_trims_and_skips_empty() {
        let mut form = sample_form();
        form.selected_field_mut().unwrap().set_text("  Acme Corp  ");
        let filled = form.collect_filled();
        assert_eq!(filled.len(), 1);
        assert_eq!(filled["name[_1_]"], "Acme Corp");
    }

    #[test]
    fn test_context_text_joins_values() {
        let mut form = sample_form();
        form.set_field_text("name[_1_]", "Acme", Instant::now());
        form.set_field_text("address[_2_]", "12 Main St", Instant::now());
        let context = form.context_text();
        assert!(context.contains("Acme"));
        assert!(context.contains("12 Main St"));
    }

    #[test]
    fn test_apply_fill_writes_only_empty_fields() {
        let mut form = sample_form();
        form.set_field_text("address[_2_]", "kept", Instant::now());

        let mut data = BTreeMap::new();
        data.insert("name[_1_]".to_string(), "Acme Corp".to_string());
        data.insert("address[_2_]".to_string(), "overwritten?".to_string());

        let filled = form.apply_fill(&data, Instant::now());
        assert_eq!(filled, 1);
        assert_eq!(form.field("name[_1_]").unwrap().as_text(), Some("Acme Corp"));
        assert_eq!(form.field("address[_2_]").unwrap().as_text(), Some("kept"));
    }

    #[test]
    fn test_apply_fill_unknown_code_is_noop() {
        let mut form = sample_form();
        let mut data = BTreeMap::new();
        data.insert("missing[_9_]".to_string(), "value".to_string());
        assert_eq!(form.apply_fill(&data, Instant::now()), 0);
        assert!(form.collect_filled().is_empty());
    }

    #[test]
    fn test_apply_suggestions_dispatches_by_kind() {
        let mut form = sample_form();
        let mut suggestions = BTreeMap::new();
        suggestions.insert("name[_1_]".to_string(), json!("Acme Corp"));
        suggestions.insert("approved".to_string(), json!(1));
        suggestions.insert("doc_type".to_string(), json!("report"));
        suggestions.insert("unknown".to_string(), json!("ignored"));

        let applied = form.apply_suggestions(&suggestions, Instant::now());
        assert_eq!(applied, 3);
        assert_eq!(form.field("name[_1_]").unwrap().as_text(), Some("Acme Corp"));
        assert!(!form.field("approved").unwrap().is_empty());
        assert_eq!(form.field("doc_type").unwrap().as_text(), Some("report"));
    }

    #[test]
    fn test_apply_suggestions_overwrites_existing_text() {
        let mut form = sample_form();
        form.set_field_text("name[_1_]", "Old Name", Instant::now());
        let mut suggestions = BTreeMap::new();
        suggestions.insert("name[_1_]".to_string(), json!("New Name"));
        form.apply_suggestions(&suggestions, Instant::now());
        assert_eq!(form.field("name[_1_]").unwrap().as_text(), Some("New Name"));
    }

    #[test]
    fn test_rename_label() {
        let mut form = sample_form();
        assert!(form.rename_label("name[_1_]", "Legal entity"));
        assert_eq!(form.field("name[_1_]").unwrap().label, "Legal entity");
        assert!(!form.rename_label("missing", "nope"));
    }

    #[test]
    fn test_highlight_expires() {
        let mut form = sample_form();
        let start = Instant::now();
        form.set_field_text("name[_1_]", "Acme", start);
        assert!(form.is_highlighted("name[_1_]", start));

        let later = start + HIGHLIGHT_DURATION + Duration::from_millis(1);
        assert!(!form.is_highlighted("name[_1_]", later));
        form.tick(later);
        assert!(!form.is_highlighted("name[_1_]", later));
    }

    #[test]
    fn test_text_field_codes_excludes_other_kinds() {
        let form = sample_form();
        let codes = form.text_field_codes();
        assert_eq!(codes, vec!["name[_1_]".to_string(), "address[_2_]".to_string()]);
    }
}
