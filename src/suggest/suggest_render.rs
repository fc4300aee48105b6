//! Suggestion popup rendering

use ratatui::{
    Frame,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::widgets::popup::{centered_popup, clear_area};

const MAX_VISIBLE_ITEMS: u16 = 8;

pub fn render_suggest_popup(frame: &mut Frame, app: &App) {
    if !app.suggest.is_visible() {
        return;
    }

    let theme = &app.theme;
    let title = match app.suggest.field_code().and_then(|c| app.form.field(c)) {
        Some(field) => format!(" Suggestions: {} ", field.label),
        None => " Suggestions ".to_string(),
    };

    let item_count = app.suggest.items().len() as u16;
    let height = item_count.min(MAX_VISIBLE_ITEMS) + 2;
    let width = app
        .suggest
        .items()
        .iter()
        .map(|s| s.len() as u16 + 6)
        .max()
        .unwrap_or(20)
        .max(title.len() as u16 + 4)
        .min(frame.area().width.saturating_sub(4));
    let area = centered_popup(frame.area(), width, height);
    clear_area(frame, area);

    let selected = app.suggest.selected_index();
    let lines: Vec<Line> = app
        .suggest
        .items()
        .iter()
        .enumerate()
        .map(|(i, item)| {
            if i == selected {
                Line::from(Span::styled(
                    format!("> {}", item),
                    theme.selected().add_modifier(Modifier::REVERSED),
                ))
            } else {
                Line::from(Span::styled(format!("  {}", item), theme.value()))
            }
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(theme.border_focused());
    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .scroll((scroll_offset(selected, item_count), 0)),
        area,
    );
}

fn scroll_offset(selected: usize, item_count: u16) -> u16 {
    let selected = selected as u16;
    if item_count <= MAX_VISIBLE_ITEMS {
        0
    } else {
        selected.saturating_sub(MAX_VISIBLE_ITEMS - 1)
    }
}
