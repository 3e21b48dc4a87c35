// src/main.rs

use color_eyre::eyre::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::prelude::*;
use std::io::stdout;
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedSender};
use tracing::{error, info};

mod app;
mod config;
mod core;
mod export;
mod logging;
mod ui;

use app::{App, AppEvent, Ticker};
use config::Config;
use crate::core::catalog::Tool;

const TICK_RATE: Duration = Duration::from_millis(100);

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    logging::initialize_logging()?;
    let config = Config::from_env();
    info!(?config, "SafeGuard starting.");

    // --- Setup ---
    stdout().execute(EnterAlternateScreen)?;
    stdout().execute(EnableMouseCapture)?;
    enable_raw_mode()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    terminal.clear()?;

    let result = run(&mut terminal, App::new(config)).await;

    // --- Restore Terminal ---
    stdout().execute(LeaveAlternateScreen)?;
    stdout().execute(DisableMouseCapture)?;
    disable_raw_mode()?;

    if let Err(e) = &result {
        error!(error = %e, "SafeGuard exited with an error.");
    }
    info!("SafeGuard stopped.");
    result
}

/// Draw loop: render, react to keys, then apply whatever the background runs reported.
async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut ticker = Ticker::new(TICK_RATE);

    while !app.should_quit {
        terminal.draw(|frame| ui::render(&mut app, frame))?;

        if event::poll(ticker.timeout())? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_key(&mut app, key, &tx);
                }
            }
        }

        while let Ok(app_event) = rx.try_recv() {
            app.handle_event(app_event);
        }
        // Keypresses wake the loop early; only elapsed time advances toasts and the spinner.
        if ticker.is_due() {
            app.on_tick();
        }
    }
    Ok(())
}

fn handle_key(app: &mut App, key: KeyEvent, tx: &UnboundedSender<AppEvent>) {
    // AltGr arrives as Ctrl+Alt on Windows and must still type its character.
    let is_ctrl_shortcut =
        key.modifiers.contains(KeyModifiers::CONTROL) && !key.modifiers.contains(KeyModifiers::ALT);
    if is_ctrl_shortcut {
        match key.code {
            KeyCode::Char('c') => app.quit(),
            KeyCode::Char('e') => export_results(app),
            _ => {}
        }
        return;
    }

    if app.resources.show_emergency_popup {
        handle_popup_input(app, key.code);
        return;
    }

    match key.code {
        KeyCode::Esc => app.quit(),
        KeyCode::Tab => app.next_tool(),
        KeyCode::BackTab => app.previous_tool(),
        KeyCode::Up => app.scroll_up(),
        KeyCode::Down => app.scroll_down(),
        code => match app.active_tool {
            Tool::Privacy | Tool::Harassment => handle_tool_input(app, code, tx),
            Tool::Emergency => handle_resources_input(app, code),
        },
    }
}

/// Typing and submission for the two tools that take text.
fn handle_tool_input(app: &mut App, key_code: KeyCode, tx: &UnboundedSender<AppEvent>) {
    match key_code {
        KeyCode::Enter => match app.active_tool {
            Tool::Privacy => start_scan(app, tx),
            Tool::Harassment => start_analysis(app, tx),
            Tool::Emergency => {}
        },
        KeyCode::Char(c) => {
            if let Some(input) = app.active_input_mut() {
                input.push(c);
            }
        }
        KeyCode::Backspace => {
            if let Some(input) = app.active_input_mut() {
                input.pop();
            }
        }
        _ => {}
    }
}

fn handle_resources_input(app: &mut App, key_code: KeyCode) {
    if key_code == KeyCode::Char('!') {
        app.resources.show_emergency_popup = true;
    } else if let Some(uri) = contact_uri(app, key_code) {
        open_or_notify(app, &uri);
    }
}

/// The link a contact action opens for the selected contact, if it has one.
fn contact_uri(app: &App, key_code: KeyCode) -> Option<String> {
    let contact = app.selected_contact()?;
    match key_code {
        KeyCode::Char('c' | 'C') => contact.dial_uri(),
        KeyCode::Char('w' | 'W') => contact.website.map(String::from),
        _ => None,
    }
}

fn handle_popup_input(app: &mut App, key_code: KeyCode) {
    match key_code {
        KeyCode::Enter => {
            app.resources.show_emergency_popup = false;
            open_or_notify(app, &crate::core::resources::emergency_dial_uri());
        }
        KeyCode::Esc => app.resources.show_emergency_popup = false,
        _ => {}
    }
}

fn start_scan(app: &mut App, tx: &UnboundedSender<AppEvent>) {
    let Some(input) = app.begin_scan() else { return };
    let step_delay = app.config.scan_step_delay;
    let tx = tx.clone();
    tokio::spawn(async move {
        let progress_tx = tx.clone();
        let results = crate::core::scanner::run_privacy_scan(&input, step_delay, move |update| {
            let _ = progress_tx.send(AppEvent::ScanProgress(update));
        })
        .await;
        let _ = tx.send(AppEvent::ScanFinished(results));
    });
}

fn start_analysis(app: &mut App, tx: &UnboundedSender<AppEvent>) {
    let Some(text) = app.begin_analysis() else { return };
    let delay = app.config.analysis_delay;
    let tx = tx.clone();
    tokio::spawn(async move {
        let result = crate::core::detector::run_analysis(&text, delay).await;
        let _ = tx.send(AppEvent::AnalysisFinished(result));
    });
}

fn open_or_notify(app: &mut App, uri: &str) {
    match crate::core::launcher::open_uri(uri) {
        Ok(()) => app.notify("Opening", uri),
        Err(e) => {
            error!(uri, error = %e, "Could not open URI.");
            app.notify_error("Could not open link", &e.to_string());
        }
    }
}

fn export_results(app: &mut App) {
    let data_dir = logging::get_data_dir();
    let outcome = export::write_export(&data_dir, &app.export_document());
    match outcome {
        Ok(Some(path)) => app.notify("Results exported", &path.display().to_string()),
        Ok(None) => app.notify("Nothing to export", "Run a scan or an analysis first."),
        Err(e) => {
            error!(error = ?e, "Export failed.");
            app.notify_error("Export failed", &e.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::RiskTier;
    use crate::app::RunState;
    use tokio::sync::mpsc::UnboundedReceiver;

    fn setup() -> (App, UnboundedSender<AppEvent>, UnboundedReceiver<AppEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (App::new(Config::default()), tx, rx)
    }

    fn press(app: &mut App, tx: &UnboundedSender<AppEvent>, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE), tx);
    }

    fn type_text(app: &mut App, tx: &UnboundedSender<AppEvent>, text: &str) {
        for c in text.chars() {
            press(app, tx, KeyCode::Char(c));
        }
    }

    fn drain(rx: &mut UnboundedReceiver<AppEvent>) -> Vec<AppEvent> {
        let mut events = Vec::new();
        while let Ok(event) = rx.try_recv() {
            events.push(event);
        }
        events
    }

    #[test]
    fn esc_and_ctrl_c_quit() {
        let (mut app, tx, _rx) = setup();
        press(&mut app, &tx, KeyCode::Esc);
        assert!(app.should_quit);

        let (mut app, tx, _rx) = setup();
        handle_key(&mut app, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL), &tx);
        assert!(app.should_quit);
        assert!(app.privacy.input.is_empty());
    }

    #[test]
    fn altgr_characters_reach_the_input() {
        let (mut app, tx, _rx) = setup();
        type_text(&mut app, &tx, "jane");
        let altgr = KeyModifiers::CONTROL | KeyModifiers::ALT;
        handle_key(&mut app, KeyEvent::new(KeyCode::Char('@'), altgr), &tx);
        handle_key(&mut app, KeyEvent::new(KeyCode::Char('c'), altgr), &tx);
        assert_eq!(app.privacy.input, "jane@c");
        assert!(!app.should_quit);
    }

    #[test]
    fn tab_and_backtab_switch_tools() {
        let (mut app, tx, _rx) = setup();
        press(&mut app, &tx, KeyCode::Tab);
        assert_eq!(app.active_tool, Tool::Harassment);
        press(&mut app, &tx, KeyCode::BackTab);
        press(&mut app, &tx, KeyCode::BackTab);
        assert_eq!(app.active_tool, Tool::Emergency);
    }

    #[test]
    fn backspace_edits_the_active_input_only() {
        let (mut app, tx, _rx) = setup();
        type_text(&mut app, &tx, "janex");
        press(&mut app, &tx, KeyCode::Backspace);
        press(&mut app, &tx, KeyCode::Tab);
        type_text(&mut app, &tx, "hi");
        assert_eq!(app.privacy.input, "jane");
        assert_eq!(app.harassment.input, "hi");
    }

    #[tokio::test(start_paused = true)]
    async fn enter_runs_a_scan_and_locks_typing() {
        let (mut app, tx, mut rx) = setup();
        type_text(&mut app, &tx, "instagram.com/jane");
        press(&mut app, &tx, KeyCode::Enter);
        assert_eq!(app.privacy.state, RunState::Running);

        type_text(&mut app, &tx, "zz");
        press(&mut app, &tx, KeyCode::Backspace);
        assert_eq!(app.privacy.input, "instagram.com/jane");

        tokio::time::sleep(Duration::from_secs(5)).await;
        let events = drain(&mut rx);
        let progress: Vec<u8> = events
            .iter()
            .filter_map(|e| match e {
                AppEvent::ScanProgress(update) => Some(update.progress),
                _ => None,
            })
            .collect();
        assert_eq!(progress, vec![20, 40, 60, 80, 100]);
        assert!(matches!(events.last(), Some(AppEvent::ScanFinished(results)) if results.len() == 3));

        for event in events {
            app.handle_event(event);
        }
        assert_eq!(app.privacy.state, RunState::Finished);
    }

    #[tokio::test(start_paused = true)]
    async fn enter_with_blank_input_sends_nothing() {
        let (mut app, tx, mut rx) = setup();
        type_text(&mut app, &tx, "   ");
        press(&mut app, &tx, KeyCode::Enter);
        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(app.privacy.state, RunState::Idle);
        assert!(drain(&mut rx).is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn enter_on_the_detector_reports_one_analysis() {
        let (mut app, tx, mut rx) = setup();
        press(&mut app, &tx, KeyCode::Tab);
        type_text(&mut app, &tx, "I will hurt you");
        press(&mut app, &tx, KeyCode::Enter);
        press(&mut app, &tx, KeyCode::Enter);
        assert_eq!(app.harassment.state, RunState::Running);

        tokio::time::sleep(Duration::from_secs(3)).await;
        let events = drain(&mut rx);
        assert_eq!(events.len(), 1);
        assert!(matches!(&events[0], AppEvent::AnalysisFinished(r) if r.risk == RiskTier::High));
    }

    #[test]
    fn bang_opens_the_danger_popup_and_esc_closes_it() {
        let (mut app, tx, _rx) = setup();
        press(&mut app, &tx, KeyCode::BackTab);
        press(&mut app, &tx, KeyCode::Char('!'));
        assert!(app.resources.show_emergency_popup);

        // The popup swallows everything but its own keys.
        press(&mut app, &tx, KeyCode::Tab);
        assert_eq!(app.active_tool, Tool::Emergency);

        press(&mut app, &tx, KeyCode::Esc);
        assert!(!app.resources.show_emergency_popup);
        assert!(!app.should_quit);
    }

    #[test]
    fn contact_actions_accept_either_case() {
        let (mut app, _tx, _rx) = setup();
        app.active_tool = Tool::Emergency;
        let hotline = Some("tel:1-800-799-7233".to_string());
        assert_eq!(contact_uri(&app, KeyCode::Char('c')), hotline);
        assert_eq!(contact_uri(&app, KeyCode::Char('C')), hotline);
        assert_eq!(contact_uri(&app, KeyCode::Char('W')).as_deref(), Some("https://www.thehotline.org"));

        // Crisis Text Line has no website.
        app.select_next_contact();
        assert_eq!(contact_uri(&app, KeyCode::Char('w')), None);
        assert_eq!(contact_uri(&app, KeyCode::Char('x')), None);
    }
}
