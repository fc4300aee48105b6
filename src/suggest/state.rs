/// Enhanced-suggestion popup state
///
/// Holds the candidate list for one field at a time plus the per-field
/// loading guard that keeps a second request from launching while one is
/// in flight.
pub struct SuggestState {
    visible: bool,
    field_code: Option<String>,
    items: Vec<String>,
    selected: usize,
    loading_field: Option<String>,
}

impl Default for SuggestState {
    fn default() -> Self {
        Self::new()
    }
}

impl SuggestState {
    pub fn new() -> Self {
        Self {
            visible: false,
            field_code: None,
            items: Vec::new(),
            selected: 0,
            loading_field: None,
        }
    }

    /// Show the popup with a freshly built candidate list
    pub fn open(&mut self, field_code: String, items: Vec<String>) {
        self.field_code = Some(field_code);
        self.items = items;
        self.selected = 0;
        self.visible = true;
    }

    pub fn close(&mut self) {
        self.visible = false;
        self.items.clear();
        self.field_code = None;
        self.selected = 0;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn field_code(&self) -> Option<&str> {
        self.field_code.as_deref()
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_item(&self) -> Option<&str> {
        self.items.get(self.selected).map(String::as_str)
    }

    pub fn select_next(&mut self) {
        if !self.items.is_empty() && self.selected < self.items.len() - 1 {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Mark a request in flight for one field. Returns false when that
    /// field already has a request running.
    pub fn begin_loading(&mut self, field_code: &str) -> bool {
        if self.loading_field.is_some() {
            return false;
        }
        self.loading_field = Some(field_code.to_string());
        true
    }

    pub fn finish_loading(&mut self) {
        self.loading_field = None;
    }

    pub fn is_loading(&self) -> bool {
        self.loading_field.is_some()
    }

    pub fn loading_field(&self) -> Option<&str> {
        self.loading_field.as_deref()
    }
}
