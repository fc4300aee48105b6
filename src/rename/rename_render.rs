//! Rename modal rendering

use ratatui::{
    Frame,
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::widgets::popup::{centered_popup, clear_area, inset_rect};

const MODAL_WIDTH: u16 = 48;
const MODAL_HEIGHT: u16 = 7;

pub fn render_rename_modal(frame: &mut Frame, app: &mut App) {
    if !app.rename.is_open() {
        return;
    }

    let theme = app.theme;
    let area = centered_popup(frame.area(), MODAL_WIDTH, MODAL_HEIGHT);
    clear_area(frame, area);

    let title = if app.rename.is_saving() {
        " Edit field name (saving...) "
    } else {
        " Edit field name "
    };
    frame.render_widget(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(theme.border_focused()),
        area,
    );

    let inner = inset_rect(area, 2, 1);
    let editor_area = ratatui::layout::Rect {
        height: 3.min(inner.height),
        ..inner
    };
    app.rename.editor.set_block(
        Block::default()
            .borders(Borders::ALL)
            .title(" New name ")
            .border_style(theme.border()),
    );
    frame.render_widget(&app.rename.editor, editor_area);

    if inner.height > 3 {
        let hint_area = ratatui::layout::Rect {
            y: editor_area.y + 3,
            height: inner.height - 3,
            ..inner
        };
        frame.render_widget(
            Paragraph::new(Line::styled("Enter: save   Esc: cancel", theme.hint())),
            hint_area,
        );
    }
}
