#[cfg(test)]
pub mod test_helpers {
    use std::sync::mpsc;

    use crate::app::App;
    use crate::config::Config;
    use crate::form::loader::parse_template;
    use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    pub const TEST_TEMPLATE: &str = r#"{
        "form_type": "contract",
        "fields": [
            {"code": "name[_1_]", "label": "Company name"},
            {"code": "address[_2_]", "label": "Address"},
            {"code": "approved", "label": "Approved", "kind": "boolean"},
            {"code": "doc_type", "label": "Document type", "kind": "choice",
             "options": ["contract", "report"]}
        ]
    }"#;

    /// App wired to a test request channel; sent requests can be
    /// inspected via `App::sent_requests()`
    pub fn test_app() -> App {
        let template = parse_template(TEST_TEMPLATE).unwrap();
        let output_dir = std::env::temp_dir().join("formfill-tests");
        let mut app = App::new(template, Config::default(), output_dir);

        let (request_tx, request_rx) = mpsc::channel();
        let (_response_tx, response_rx) = mpsc::channel();
        app.set_channels(request_tx, response_rx);
        app.test_request_rx = Some(request_rx);
        app
    }

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    pub fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }
}
