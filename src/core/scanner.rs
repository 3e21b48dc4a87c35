// src/core/scanner.rs

use std::fmt;
use std::time::Duration;

use tracing::{debug, info};
use url::Url;

use crate::core::models::{ScanResult, ScanStatus};
use crate::core::staged::{Stage, StageUpdate, StagedTask};

/// The five checkpoints of a privacy scan, in order.
pub static PRIVACY_SCAN_STAGES: &[Stage] = &[
    Stage { progress: 20, label: "Analyzing privacy settings..." },
    Stage { progress: 40, label: "Checking visibility settings..." },
    Stage { progress: 60, label: "Scanning for personal data exposure..." },
    Stage { progress: 80, label: "Reviewing security configurations..." },
    Stage { progress: 100, label: "Generating recommendations..." },
];

/// What the user typed into the scanner, as far as we can tell.
///
/// The scan result never depends on it; it only feeds the logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanTarget {
    ProfileUrl { host: String },
    Username(String),
}

impl ScanTarget {
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        let looks_like_url = trimmed.contains('/') || trimmed.contains('.');
        if looks_like_url {
            // Same trick as a browser address bar: assume https when no scheme is given.
            let with_scheme = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
                trimmed.to_string()
            } else {
                format!("https://{}", trimmed)
            };
            if let Some(host) = Url::parse(&with_scheme).ok().and_then(|u| u.host_str().map(String::from)) {
                return ScanTarget::ProfileUrl { host };
            }
        }
        ScanTarget::Username(trimmed.trim_start_matches('@').to_string())
    }
}

impl fmt::Display for ScanTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanTarget::ProfileUrl { host } => write!(f, "profile on {}", host),
            ScanTarget::Username(name) => write!(f, "user @{}", name),
        }
    }
}

/// The fixed report produced by every privacy scan.
pub fn privacy_scan_results() -> Vec<ScanResult> {
    vec![
        ScanResult::new(
            "Profile Visibility",
            ScanStatus::Warning,
            &["Profile is public", "Location sharing enabled"],
            &["Set profile to private", "Disable location sharing"],
        ),
        ScanResult::new(
            "Contact Information",
            ScanStatus::Safe,
            &[],
            &["Keep current settings"],
        ),
        ScanResult::new(
            "Activity Tracking",
            ScanStatus::Danger,
            &["Activity status visible", "Online status shown"],
            &["Hide activity status", "Disable online indicators"],
        ),
    ]
}

/// Builds the staged task behind a privacy scan.
pub fn privacy_scan_task(step_delay: Duration) -> StagedTask<Vec<ScanResult>> {
    StagedTask::new(PRIVACY_SCAN_STAGES, step_delay, privacy_scan_results)
}

/// Runs a full privacy scan for `input`, forwarding each checkpoint to `on_progress`.
pub async fn run_privacy_scan<P>(input: &str, step_delay: Duration, on_progress: P) -> Vec<ScanResult>
where
    P: FnMut(StageUpdate),
{
    let target = ScanTarget::parse(input);
    info!(%target, "Starting privacy scan.");
    let results = privacy_scan_task(step_delay).run(on_progress).await;
    debug!(categories = results.len(), "Privacy scan produced its report.");
    info!(%target, "Privacy scan finished.");
    results
}
