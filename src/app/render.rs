//! Frame layout and form rendering

use std::time::Instant;

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::form::{Field, FieldKind};
use crate::notify::render_notifications;
use crate::rename::render_rename_modal;
use crate::suggest::render_suggest_popup;

use super::state::App;

impl App {
    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let [title_area, form_area, status_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        self.render_title(frame, title_area);
        self.render_form(frame, form_area);
        self.render_status(frame, status_area);

        render_rename_modal(frame, self);
        render_suggest_popup(frame, self);
        render_notifications(frame, frame.area(), &self.notifications);
    }

    fn render_title(&self, frame: &mut Frame, area: Rect) {
        let title = Line::from(vec![
            Span::styled(" formfill ", self.theme.selected()),
            Span::styled(format!("- {} ", self.form_type), self.theme.hint()),
        ]);
        frame.render_widget(Paragraph::new(title), area);
    }

    fn render_form(&self, frame: &mut Frame, area: Rect) {
        let now = Instant::now();
        let selected = self.form.selected_index();
        let lines: Vec<Line> = self
            .form
            .fields()
            .iter()
            .enumerate()
            .map(|(i, field)| self.field_line(field, i == selected, now))
            .collect();

        let viewport = area.height.saturating_sub(2);
        let scroll = (selected as u16).saturating_sub(viewport.saturating_sub(1));
        frame.render_widget(
            Paragraph::new(lines)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title(" Form ")
                        .border_style(self.theme.border_focused()),
                )
                .scroll((scroll, 0)),
            area,
        );
    }

    fn field_line(&self, field: &Field, is_selected: bool, now: Instant) -> Line<'static> {
        let theme = &self.theme;
        let marker = if is_selected { "> " } else { "  " };
        let label_style = if is_selected {
            theme.selected()
        } else {
            theme.label()
        };
        let value_style = if self.form.is_highlighted(&field.code, now) {
            theme.highlight()
        } else {
            theme.value()
        };

        let mut spans = vec![
            Span::styled(marker.to_string(), theme.selected()),
            Span::styled(format!("{}: ", field.label), label_style),
            Span::styled(field_value_text(field, is_selected), value_style),
        ];
        if self.suggest.loading_field() == Some(field.code.as_str()) {
            spans.push(Span::styled(
                "  (loading suggestions...)".to_string(),
                theme.hint(),
            ));
        }
        Line::from(spans)
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let hints =
            " ^F fill  ^S suggest  ^E field suggest  ^R rename  ^G docx  ^T theme  Esc quit ";
        frame.render_widget(
            Paragraph::new(Line::styled(hints, self.theme.hint())),
            area,
        );
    }
}

fn field_value_text(field: &Field, is_selected: bool) -> String {
    match &field.kind {
        FieldKind::Boolean => {
            if field.is_empty() {
                "[ ]".to_string()
            } else {
                "[x]".to_string()
            }
        }
        FieldKind::Choice { .. } => {
            format!("< {} >", field.as_text().unwrap_or(""))
        }
        FieldKind::Text => {
            let text = field.as_text().unwrap_or("").to_string();
            if is_selected { format!("{}█", text) } else { text }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::Field;

    #[test]
    fn test_boolean_value_text() {
        let mut field = Field::boolean("ok", "Ok", false);
        assert_eq!(field_value_text(&field, false), "[ ]");
        field.toggle();
        assert_eq!(field_value_text(&field, false), "[x]");
    }

    #[test]
    fn test_choice_value_text() {
        let mut field = Field::choice("t", "T", vec!["a".to_string()]);
        field.cycle_choice(true);
        assert_eq!(field_value_text(&field, false), "< a >");
    }

    #[test]
    fn test_text_value_shows_cursor_when_selected() {
        let mut field = Field::text("n", "N");
        field.set_text("abc");
        assert_eq!(field_value_text(&field, true), "abc█");
        assert_eq!(field_value_text(&field, false), "abc");
    }
}
