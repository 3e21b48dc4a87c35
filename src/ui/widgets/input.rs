// src/ui/widgets/input.rs
use ratatui::{prelude::*, widgets::{Block, Borders, Paragraph, Wrap}};

/// Renders a bordered text box.
///
/// An empty `value` shows `placeholder` in gray. The cursor is only placed
/// when `focused` is set, i.e. while the tool accepts typing.
pub fn render_input(frame: &mut Frame, area: Rect, title: &str, value: &str, placeholder: &str, focused: bool) {
    let input_block = Block::default().borders(Borders::ALL).title(title.to_string());
    let paragraph = if value.is_empty() {
        Paragraph::new(placeholder.to_string()).style(Style::default().fg(Color::DarkGray))
    } else {
        Paragraph::new(value.to_string()).style(Style::default().fg(Color::Yellow))
    };
    frame.render_widget(paragraph.block(input_block).wrap(Wrap { trim: false }), area);

    if focused {
        let (x, y) = cursor_offset(value, area.width.saturating_sub(2));
        frame.set_cursor_position((
            (area.x + 1 + x).min(area.right().saturating_sub(2)),
            (area.y + 1 + y).min(area.bottom().saturating_sub(2)),
        ));
    }
}

/// Column/row of the cursor after `value` in a box `inner_width` wide.
fn cursor_offset(value: &str, inner_width: u16) -> (u16, u16) {
    if inner_width == 0 {
        return (0, 0);
    }
    let len = value.chars().count() as u16;
    (len % inner_width, len / inner_width)
}
