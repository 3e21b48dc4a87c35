// src/ui/widgets/notification.rs

use crate::app::App;
use crate::ui::layout::bottom_right_rect;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

/// Renders the current toast, if any, in the bottom-right corner of `area`.
pub fn render_notification(frame: &mut Frame, app: &App, area: Rect) {
    let Some(notification) = &app.notification else {
        return;
    };

    let color = if notification.is_error { Color::Red } else { Color::Green };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .title(Line::from(notification.title.as_str().bold()));

    let toast_area = bottom_right_rect(48, 4, area);
    let p = Paragraph::new(notification.description.as_str())
        .wrap(Wrap { trim: true })
        .block(block);

    frame.render_widget(Clear, toast_area);
    frame.render_widget(p, toast_area);
}
