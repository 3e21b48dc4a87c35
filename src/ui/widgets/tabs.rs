// src/ui/widgets/tabs.rs

use crate::app::App;
use crate::core::catalog::Tool;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Tabs},
};
use strum::IntoEnumIterator;

/// Renders the tool selector with the SafeGuard brand as its title.
pub fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = Tool::iter().map(|tool| Line::from(tool.to_string())).collect();

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Line::from(" 🛡 SafeGuard ".bold().fg(Color::Cyan))),
        )
        .select(app.active_tool.index())
        .style(Style::default().fg(Color::Gray))
        .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .divider(" | ");

    frame.render_widget(tabs, area);
}
