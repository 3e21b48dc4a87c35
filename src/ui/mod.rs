// src/ui/mod.rs

use crate::app::App;
use crate::core::catalog::Tool;
use ratatui::prelude::*;

mod layout;
mod widgets;

pub fn render(app: &mut App, frame: &mut Frame) {
    let frame_area = frame.area();
    let layout = layout::create_layout(frame_area);

    widgets::tabs::render_tabs(frame, app, layout.tabs);

    // Solo il pannello dello strumento attivo viene disegnato.
    match app.active_tool {
        Tool::Privacy => widgets::privacy_view::render_privacy_view(frame, app, layout.content),
        Tool::Harassment => widgets::harassment_view::render_harassment_view(frame, app, layout.content),
        Tool::Emergency => widgets::resources_view::render_resources_view(frame, app, layout.content),
    }

    widgets::footer::render_footer(frame, app, layout.footer);

    if app.resources.show_emergency_popup {
        widgets::emergency_popup::render_emergency_popup(frame, frame_area);
    }
    widgets::notification::render_notification(frame, app, layout.content);
}
