// src/ui/widgets/emergency_popup.rs

use crate::core::resources::EMERGENCY_NUMBER;
use crate::ui::layout::centered_rect;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    text::Line,
};

/// Renders the "In Immediate Danger?" confirmation on top of the existing UI.
///
/// `Clear` wipes the popup area first so the panel underneath does not bleed
/// through.
pub fn render_emergency_popup(frame: &mut Frame, area: Rect) {
    let text = Text::from(vec![
        Line::from("IN IMMEDIATE DANGER?".bold().red()),
        Line::from(""),
        Line::from("If you are in immediate physical danger, contact emergency services right away."),
        Line::from(""),
        Line::from("Press ".bold() + "Enter".bold().yellow() + format!(" to call {}", EMERGENCY_NUMBER).bold()),
        Line::from("Press ".dark_gray() + "Esc".yellow() + " to go back".dark_gray()),
    ]);

    let block = Block::default()
        .title("Emergency")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));

    let popup_area = centered_rect(60, 40, area);
    let popup = Paragraph::new(text)
        .block(block)
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Center);

    frame.render_widget(Clear, popup_area);
    frame.render_widget(popup, popup_area);
}
