// src/app.rs

use std::time::Duration;

use ratatui::widgets::{ListState, ScrollbarState};
use tokio::time::Instant;

use crate::config::Config;
use crate::core::catalog::Tool;
use crate::core::models::{AnalysisResult, EmergencyContact, ScanResult};
use crate::core::resources;
use crate::core::staged::StageUpdate;
use crate::export::ExportDocument;

pub const SPINNER_CHARS: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// How many ticks a notification stays on screen.
const NOTIFICATION_TICKS: u16 = 40;

/// Paces `App::on_tick` by wall time, however often the draw loop wakes up.
#[derive(Debug)]
pub struct Ticker {
    rate: Duration,
    last_tick: Instant,
}

impl Ticker {
    pub fn new(rate: Duration) -> Self {
        Self { rate, last_tick: Instant::now() }
    }

    /// How long the loop may wait for input before the next tick is due.
    pub fn timeout(&self) -> Duration {
        self.rate.saturating_sub(self.last_tick.elapsed())
    }

    /// True once per elapsed `rate`; restarts the period when it fires.
    pub fn is_due(&mut self) -> bool {
        if self.last_tick.elapsed() >= self.rate {
            self.last_tick = Instant::now();
            true
        } else {
            false
        }
    }
}

/// Messages sent back to the draw loop by background runs.
#[derive(Debug, Clone)]
pub enum AppEvent {
    ScanProgress(StageUpdate),
    ScanFinished(Vec<ScanResult>),
    AnalysisFinished(AnalysisResult),
}

/// Lifecycle of a single tool run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Idle,
    Running,
    Finished,
}

#[derive(Debug, Default)]
pub struct PrivacyScannerState {
    pub input: String,
    pub state: RunState,
    pub progress: u8,
    /// Last checkpoint reported by the running scan.
    pub stage: Option<StageUpdate>,
    pub results: Vec<ScanResult>,
    pub scroll_offset: usize,
    pub scroll_state: ScrollbarState,
}

#[derive(Debug, Default)]
pub struct HarassmentDetectorState {
    pub input: String,
    pub state: RunState,
    pub result: Option<AnalysisResult>,
    pub scroll_offset: usize,
    pub scroll_state: ScrollbarState,
}

#[derive(Debug)]
pub struct ResourcesState {
    pub contact_list_state: ListState,
    pub show_emergency_popup: bool,
}

impl Default for ResourcesState {
    fn default() -> Self {
        Self {
            contact_list_state: ListState::default().with_selected(Some(0)),
            show_emergency_popup: false,
        }
    }
}

/// A transient toast shown above the footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub is_error: bool,
    pub ticks_left: u16,
}

pub struct App {
    pub should_quit: bool,
    pub config: Config,
    pub active_tool: Tool,
    pub privacy: PrivacyScannerState,
    pub harassment: HarassmentDetectorState,
    pub resources: ResourcesState,
    pub notification: Option<Notification>,
    pub spinner_frame: usize,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self {
            should_quit: false,
            config,
            active_tool: Tool::default(),
            privacy: PrivacyScannerState::default(),
            harassment: HarassmentDetectorState::default(),
            resources: ResourcesState::default(),
            notification: None,
            spinner_frame: 0,
        }
    }

    // --- Tabs ---

    pub fn next_tool(&mut self) {
        self.active_tool = self.active_tool.next();
    }

    pub fn previous_tool(&mut self) {
        self.active_tool = self.active_tool.previous();
    }

    /// The text field of the active tool, while it accepts typing.
    pub fn active_input_mut(&mut self) -> Option<&mut String> {
        match self.active_tool {
            Tool::Privacy if self.privacy.state != RunState::Running => Some(&mut self.privacy.input),
            Tool::Harassment if self.harassment.state != RunState::Running => Some(&mut self.harassment.input),
            _ => None,
        }
    }

    // --- Runs ---

    /// Starts a privacy scan if the input is usable and no scan is in flight.
    ///
    /// Returns the text to scan; `None` means the request was a no-op.
    pub fn begin_scan(&mut self) -> Option<String> {
        let scanner = &mut self.privacy;
        if scanner.input.trim().is_empty() || scanner.state == RunState::Running {
            return None;
        }
        scanner.state = RunState::Running;
        scanner.progress = 0;
        scanner.stage = None;
        scanner.results.clear();
        scanner.scroll_offset = 0;
        scanner.scroll_state = ScrollbarState::default();
        Some(scanner.input.clone())
    }

    /// Starts a harassment analysis under the same rules as `begin_scan`.
    pub fn begin_analysis(&mut self) -> Option<String> {
        let detector = &mut self.harassment;
        if detector.input.trim().is_empty() || detector.state == RunState::Running {
            return None;
        }
        detector.state = RunState::Running;
        detector.scroll_offset = 0;
        detector.scroll_state = ScrollbarState::default();
        Some(detector.input.clone())
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::ScanProgress(update) => {
                self.privacy.progress = update.progress;
                self.privacy.stage = Some(update);
            }
            AppEvent::ScanFinished(results) => {
                self.privacy.results = results;
                self.privacy.state = RunState::Finished;
                self.privacy.stage = None;
                self.notify(
                    "Privacy scan complete",
                    "Review your results and implement recommended changes.",
                );
            }
            AppEvent::AnalysisFinished(result) => {
                let description = format!("Message analyzed with {}% confidence", result.confidence);
                self.harassment.result = Some(result);
                self.harassment.state = RunState::Finished;
                self.notify("Analysis complete", &description);
            }
        }
    }

    // --- Emergency directory ---

    pub fn selected_contact(&self) -> Option<&'static EmergencyContact> {
        self.resources
            .contact_list_state
            .selected()
            .and_then(|i| resources::emergency_contacts().get(i))
    }

    pub fn select_next_contact(&mut self) {
        let count = resources::emergency_contacts().len();
        let next = self.resources.contact_list_state.selected().map_or(0, |i| (i + 1) % count);
        self.resources.contact_list_state.select(Some(next));
    }

    pub fn select_previous_contact(&mut self) {
        let count = resources::emergency_contacts().len();
        let previous = self
            .resources
            .contact_list_state
            .selected()
            .map_or(0, |i| (i + count - 1) % count);
        self.resources.contact_list_state.select(Some(previous));
    }

    // --- Scrolling ---

    pub fn scroll_up(&mut self) {
        match self.active_tool {
            Tool::Privacy => {
                self.privacy.scroll_offset = self.privacy.scroll_offset.saturating_sub(1);
                self.privacy.scroll_state = self.privacy.scroll_state.position(self.privacy.scroll_offset);
            }
            Tool::Harassment => {
                self.harassment.scroll_offset = self.harassment.scroll_offset.saturating_sub(1);
                self.harassment.scroll_state = self.harassment.scroll_state.position(self.harassment.scroll_offset);
            }
            Tool::Emergency => self.select_previous_contact(),
        }
    }

    pub fn scroll_down(&mut self) {
        match self.active_tool {
            Tool::Privacy => {
                self.privacy.scroll_offset = self.privacy.scroll_offset.saturating_add(1);
                self.privacy.scroll_state = self.privacy.scroll_state.position(self.privacy.scroll_offset);
            }
            Tool::Harassment => {
                self.harassment.scroll_offset = self.harassment.scroll_offset.saturating_add(1);
                self.harassment.scroll_state = self.harassment.scroll_state.position(self.harassment.scroll_offset);
            }
            Tool::Emergency => self.select_next_contact(),
        }
    }

    // --- Notifications ---

    pub fn notify(&mut self, title: &str, description: &str) {
        self.notification = Some(Notification {
            title: title.to_string(),
            description: description.to_string(),
            is_error: false,
            ticks_left: NOTIFICATION_TICKS,
        });
    }

    pub fn notify_error(&mut self, title: &str, description: &str) {
        self.notify(title, description);
        if let Some(n) = self.notification.as_mut() {
            n.is_error = true;
        }
    }

    pub fn on_tick(&mut self) {
        if self.privacy.state == RunState::Running || self.harassment.state == RunState::Running {
            self.spinner_frame = (self.spinner_frame + 1) % SPINNER_CHARS.len();
        }
        if let Some(n) = self.notification.as_mut() {
            n.ticks_left = n.ticks_left.saturating_sub(1);
            if n.ticks_left == 0 {
                self.notification = None;
            }
        }
    }

    pub fn export_document(&self) -> ExportDocument<'_> {
        ExportDocument::new(&self.privacy.results, self.harassment.result.as_ref())
    }

    pub fn quit(&mut self) { self.should_quit = true; }
}
