// src/ui/widgets/privacy_view.rs

use crate::app::{App, RunState, SPINNER_CHARS};
use crate::core::catalog::{tool_detail, Tool};
use crate::core::models::{ScanResult, ScanStatus};
use crate::ui::layout::tool_panel;
use crate::ui::widgets::input::render_input;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Gauge, Paragraph, Scrollbar, ScrollbarOrientation, Wrap},
};

/// Icon and color used for each scan status.
pub fn status_style(status: ScanStatus) -> (&'static str, Style) {
    match status {
        ScanStatus::Safe => ("✓", Style::default().fg(Color::Green)),
        ScanStatus::Warning => ("⚠", Style::default().fg(Color::Yellow)),
        ScanStatus::Danger => ("✗", Style::default().fg(Color::Red).bold()),
    }
}

pub fn render_privacy_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let detail = tool_detail(Tool::Privacy);
    let (header, input_area, body) = tool_panel(area, 3);

    frame.render_widget(
        Paragraph::new(vec![Line::from(detail.title.bold()), Line::from(detail.tagline.dark_gray())]),
        header,
    );

    let scanner = &app.privacy;
    render_input(
        frame,
        input_area,
        "Profile URL or username",
        &scanner.input,
        detail.placeholder.unwrap_or_default(),
        scanner.state != RunState::Running,
    );

    let results_block = Block::default().borders(Borders::ALL).title("Scan Results (Navigate with ↑ ↓)");

    match scanner.state {
        RunState::Idle => {
            let p = Paragraph::new(detail.description)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .block(results_block);
            frame.render_widget(p, body);
        }
        RunState::Running => {
            let inner = results_block.inner(body);
            frame.render_widget(results_block, body);
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .margin(1)
                .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Min(0)])
                .split(inner);

            let gauge = Gauge::default()
                .percent(u16::from(scanner.progress))
                .gauge_style(Style::default().fg(Color::Cyan));
            frame.render_widget(gauge, chunks[0]);

            let spinner = SPINNER_CHARS[app.spinner_frame];
            let label = match scanner.stage {
                Some(stage) => format!("[{}/{}] {}", stage.index + 1, stage.total, stage.label),
                None => "Analyzing privacy settings...".to_string(),
            };
            frame.render_widget(
                Paragraph::new(Line::from(vec![
                    Span::styled(format!("{} ", spinner), Style::default().fg(Color::Cyan)),
                    Span::raw(label),
                ]))
                .alignment(Alignment::Center),
                chunks[1],
            );
        }
        RunState::Finished => {
            let lines = build_results_text(&scanner.results);
            let line_count = lines.len();
            let inner = results_block.inner(body);
            let scanner = &mut app.privacy;
            // Keep the offset within the content so ↓ cannot scroll into emptiness.
            scanner.scroll_offset = scanner.scroll_offset.min(line_count.saturating_sub(1));
            scanner.scroll_state = scanner
                .scroll_state
                .content_length(line_count)
                .position(scanner.scroll_offset);

            let p = Paragraph::new(lines)
                .block(results_block)
                .wrap(Wrap { trim: false })
                .scroll((scanner.scroll_offset as u16, 0));
            frame.render_widget(p, body);
            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight),
                inner,
                &mut scanner.scroll_state,
            );
        }
    }
}

/// Turns the scan report into styled lines, one card per category.
fn build_results_text(results: &[ScanResult]) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for result in results {
        let (icon, style) = status_style(result.status);
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", icon), style),
            Span::styled(result.platform.clone(), Style::default().bold()),
            Span::styled(format!("  [{}]", result.status.to_string().to_uppercase()), style),
        ]));

        if !result.issues.is_empty() {
            lines.push(Line::from("  Issues Found:".yellow()));
            for issue in &result.issues {
                lines.push(Line::from(format!("    ⚠ {}", issue)));
            }
        }
        lines.push(Line::from("  Recommendations:".green()));
        for rec in &result.recommendations {
            lines.push(Line::from(format!("    ✓ {}", rec)));
        }
        lines.push(Line::from(""));
    }
    lines
}
