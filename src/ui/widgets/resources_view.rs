// src/ui/widgets/resources_view.rs

use crate::app::App;
use crate::core::catalog::{tool_detail, Tool};
use crate::core::models::EmergencyContact;
use crate::core::resources::{self, EMERGENCY_NUMBER};
use crate::ui::layout::tool_panel;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};

pub fn render_resources_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let detail = tool_detail(Tool::Emergency);
    let (header, _, body) = tool_panel(area, 0);

    frame.render_widget(
        Paragraph::new(vec![Line::from(detail.title.bold()), Line::from(detail.tagline.dark_gray())]),
        header,
    );

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(body);
    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Length(7)])
        .split(columns[0]);
    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(5)])
        .split(columns[1]);

    render_contact_list(frame, app, left[0]);
    render_contact_detail(frame, app.selected_contact(), left[1]);
    render_safety_tips(frame, right[0]);
    render_danger_banner(frame, right[1]);
}

fn render_contact_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let items: Vec<ListItem> = resources::emergency_contacts()
        .iter()
        .map(|contact| {
            let mut spans = vec![Span::raw(contact.name)];
            if contact.available_24h {
                spans.push(Span::styled(" 24/7", Style::default().fg(Color::Green).bold()));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Emergency Contacts"))
        .highlight_style(Style::new().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
        .highlight_symbol("› ");
    frame.render_stateful_widget(list, area, &mut app.resources.contact_list_state);
}

fn render_contact_detail(frame: &mut Frame, contact: Option<&EmergencyContact>, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title("Details");
    let Some(contact) = contact else {
        frame.render_widget(Paragraph::new("Select a contact above.").block(block), area);
        return;
    };

    let mut lines = vec![Line::from(contact.description)];
    if let Some(phone) = contact.phone {
        lines.push(Line::from(vec!["[C] ".yellow().bold(), Span::raw(phone)]));
    }
    if let Some(website) = contact.website {
        lines.push(Line::from(vec!["[W] ".yellow().bold(), Span::styled(website, Style::default().fg(Color::Cyan))]));
    }
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }).block(block), area);
}

fn render_safety_tips(frame: &mut Frame, area: Rect) {
    let items: Vec<ListItem> = resources::safety_tips()
        .iter()
        .map(|tip| ListItem::new(Line::from(vec![Span::styled("• ", Style::default().fg(Color::Cyan)), Span::raw(*tip)])))
        .collect();
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Safety Tips")
            .title_bottom(Line::from("Essential practices to protect yourself online".dark_gray())),
    );
    frame.render_widget(list, area);
}

fn render_danger_banner(frame: &mut Frame, area: Rect) {
    let text = vec![
        Line::from("In Immediate Danger?".red().bold()),
        Line::from("Contact emergency services right away."),
        Line::from(vec![
            Span::raw("Press "),
            "!".yellow().bold(),
            Span::raw(format!(" to call {}", EMERGENCY_NUMBER)),
        ]),
    ];
    let p = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::Red)));
    frame.render_widget(p, area);
}
