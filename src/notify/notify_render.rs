//! Toast rendering
//!
//! Toasts stack upward from the bottom-right corner of the frame, one
//! line each, newest at the bottom. Width follows the longest visible
//! message, clamped to the frame.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use super::state::NotificationState;

const MARGIN: u16 = 1;
const TOAST_HEIGHT: u16 = 3;

pub fn render_notifications(frame: &mut Frame, area: Rect, notifications: &NotificationState) {
    if notifications.is_empty() {
        return;
    }

    let max_visible = (area.height / TOAST_HEIGHT) as usize;
    let visible: Vec<_> = notifications.iter().collect();
    let start = visible.len().saturating_sub(max_visible);

    let mut bottom = area.y + area.height;
    for notification in visible[start..].iter().rev() {
        let text = format!(
            "{} {}",
            notification.severity.symbol(),
            notification.message
        );
        let width = (text.width() as u16 + 4).min(area.width.saturating_sub(MARGIN * 2));
        if bottom < area.y + TOAST_HEIGHT {
            break;
        }
        let toast_area = Rect {
            x: area.x + area.width - width - MARGIN,
            y: bottom - TOAST_HEIGHT,
            width,
            height: TOAST_HEIGHT,
        };
        bottom = toast_area.y;

        let color = notification.severity.color();
        let line = Line::from(vec![
            Span::styled(
                format!("{} ", notification.severity.symbol()),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::raw(notification.message.clone()),
        ]);

        frame.render_widget(Clear, toast_area);
        frame.render_widget(
            Paragraph::new(line).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color)),
            ),
            toast_area,
        );
    }
}
