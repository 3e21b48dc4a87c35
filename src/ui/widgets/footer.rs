// src/ui/widgets/footer.rs

use crate::app::{App, RunState};
use crate::core::catalog::Tool;
use crate::core::resources::EMERGENCY_NUMBER;
use ratatui::{
    prelude::*,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

fn key(label: &str) -> Span<'_> {
    Span::styled(label, Style::new().bold().fg(Color::Yellow))
}

/// Renders the footer widget, which displays available actions.
pub fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let line = if app.resources.show_emergency_popup {
        Line::from(vec![
            key("Enter"),
            Span::raw(format!(" call {}, ", EMERGENCY_NUMBER)),
            key("Esc"),
            Span::raw(" close"),
        ])
    } else {
        let mut spans = vec![key("Tab"), Span::raw(" switch tool, ")];
        match app.active_tool {
            Tool::Privacy => spans.extend(run_hints(app.privacy.state, "scan")),
            Tool::Harassment => spans.extend(run_hints(app.harassment.state, "analyze")),
            Tool::Emergency => spans.extend([
                key("↑↓"), Span::raw(" select, "),
                key("C"), Span::raw("all, "),
                key("W"), Span::raw("ebsite, "),
                key("!"), Span::raw(" emergency, "),
            ]),
        }
        spans.extend([key("Ctrl+E"), Span::raw(" export, "), key("Esc"), Span::raw(" quit")]);
        Line::from(spans)
    };

    let footer = Paragraph::new(line).alignment(Alignment::Center);
    frame.render_widget(footer, area);
}

fn run_hints(state: RunState, verb: &'static str) -> Vec<Span<'static>> {
    match state {
        RunState::Running => vec![Span::raw("Working... ")],
        RunState::Idle => vec![key("Enter"), Span::raw(format!(" {}, ", verb))],
        RunState::Finished => vec![
            key("Enter"), Span::raw(format!(" {} again, ", verb)),
            key("↑↓"), Span::raw(" scroll, "),
        ],
    }
}
