// src/ui/widgets/harassment_view.rs

use crate::app::{App, RunState, SPINNER_CHARS};
use crate::core::catalog::{tool_detail, Tool};
use crate::core::models::{AnalysisResult, RiskTier};
use crate::ui::layout::tool_panel;
use crate::ui::widgets::input::render_input;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, Wrap},
};

fn risk_style(risk: RiskTier) -> Style {
    match risk {
        RiskTier::Low => Style::default().fg(Color::Green),
        RiskTier::Medium => Style::default().fg(Color::Yellow),
        RiskTier::High => Style::default().fg(Color::Red).bold(),
    }
}

pub fn render_harassment_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let detail = tool_detail(Tool::Harassment);
    let (header, input_area, body) = tool_panel(area, 6);

    frame.render_widget(
        Paragraph::new(vec![Line::from(detail.title.bold()), Line::from(detail.tagline.dark_gray())]),
        header,
    );

    let detector = &app.harassment;
    render_input(
        frame,
        input_area,
        "Message",
        &detector.input,
        detail.placeholder.unwrap_or_default(),
        detector.state != RunState::Running,
    );

    let results_block = Block::default().borders(Borders::ALL).title("Analysis Results");

    // Build the report up front so the state can be borrowed mutably for scrolling.
    let report = detector.result.as_ref().map(|r| (build_analysis_text(r), r.risk));

    match (detector.state, report) {
        (RunState::Running, _) => {
            let spinner = SPINNER_CHARS[app.spinner_frame];
            let p = Paragraph::new(Line::from(vec![
                Span::styled(format!("{} ", spinner), Style::default().fg(Color::Cyan)),
                Span::raw("Analyzing..."),
            ]))
            .alignment(Alignment::Center)
            .block(results_block);
            frame.render_widget(p, body);
        }
        (_, Some((lines, risk))) => {
            let line_count = lines.len();
            let inner = results_block.inner(body);
            let detector = &mut app.harassment;
            detector.scroll_offset = detector.scroll_offset.min(line_count.saturating_sub(1));
            detector.scroll_state = detector
                .scroll_state
                .content_length(line_count)
                .position(detector.scroll_offset);

            let p = Paragraph::new(lines)
                .block(results_block.border_style(risk_style(risk)))
                .wrap(Wrap { trim: true })
                .scroll((detector.scroll_offset as u16, 0));
            frame.render_widget(p, body);
            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight),
                inner,
                &mut detector.scroll_state,
            );
        }
        (_, None) => {
            let p = Paragraph::new(detail.description)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .block(results_block);
            frame.render_widget(p, body);
        }
    }
}

fn build_analysis_text(result: &AnalysisResult) -> Vec<Line<'static>> {
    let style = risk_style(result.risk);
    let mut lines = vec![
        Line::from(Span::styled(format!("{} RISK", result.risk.to_string().to_uppercase()), style)),
        Line::from(format!("Analysis confidence: {}%", result.confidence).dark_gray()),
        Line::from(""),
    ];

    if !result.threats.is_empty() {
        lines.push(Line::from("Detected Threats:".yellow().bold()));
        for threat in &result.threats {
            lines.push(Line::from(vec![Span::styled("  • ", Style::default().fg(Color::Red)), Span::raw(threat.clone())]));
        }
        lines.push(Line::from(""));
    }

    lines.push(Line::from("Recommended Actions:".cyan().bold()));
    for rec in &result.recommendations {
        lines.push(Line::from(vec![Span::styled("  • ", Style::default().fg(Color::Green)), Span::raw(rec.clone())]));
    }

    if let Some(advisory) = result.advisory() {
        lines.push(Line::from(""));
        lines.push(Line::from("⚠ High Risk Detected".red().bold()));
        lines.push(Line::from(advisory.red()));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(risk: RiskTier, threats: &[&str]) -> AnalysisResult {
        AnalysisResult {
            risk,
            confidence: 88,
            threats: threats.iter().map(|s| s.to_string()).collect(),
            recommendations: vec!["Block the sender if continuing".into()],
        }
    }

    #[test]
    fn low_risk_hides_threats_and_advisory() {
        let text: Vec<String> = build_analysis_text(&result(RiskTier::Low, &[]))
            .iter()
            .map(|l| l.to_string())
            .collect();
        assert_eq!(text[0], "LOW RISK");
        assert_eq!(text[1], "Analysis confidence: 88%");
        assert!(!text.iter().any(|l| l.contains("Detected Threats")));
        assert!(!text.iter().any(|l| l.contains("High Risk Detected")));
    }

    #[test]
    fn high_risk_shows_the_advisory() {
        let text: Vec<String> = build_analysis_text(&result(RiskTier::High, &["Intimidation tactics"]))
            .iter()
            .map(|l| l.to_string())
            .collect();
        assert!(text.iter().any(|l| l.contains("Intimidation tactics")));
        assert!(text.iter().any(|l| l.contains("High Risk Detected")));
    }
}
