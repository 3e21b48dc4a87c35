// src/core/launcher.rs

use color_eyre::eyre::{eyre, Result};
use std::process::{Child, Command, ExitStatus, Stdio};
use tokio::task::JoinHandle;
use tracing::{info, warn};

/// Platform opener commands, tried in order.
fn opener_commands(uri: &str) -> Vec<(&'static str, Vec<String>)> {
    if cfg!(target_os = "macos") {
        vec![("open", vec![uri.to_string()])]
    } else if cfg!(target_os = "windows") {
        vec![("cmd", vec!["/C".to_string(), "start".to_string(), String::new(), uri.to_string()])]
    } else {
        vec![
            ("xdg-open", vec![uri.to_string()]),
            ("gio", vec!["open".to_string(), uri.to_string()]),
        ]
    }
}

/// Hands `uri` (a `tel:` or web link) to the desktop's default handler.
///
/// Output of the opener is discarded so it cannot scribble over the TUI.
pub fn open_uri(uri: &str) -> Result<()> {
    for (program, args) in opener_commands(uri) {
        let spawned = Command::new(program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();
        match spawned {
            Ok(child) => {
                info!(uri, program, "Handed URI to the system opener.");
                reap(child, uri.to_string());
                return Ok(());
            }
            Err(e) => warn!(uri, program, error = %e, "Opener could not be spawned."),
        }
    }
    Err(eyre!("No application available to open {}", uri))
}

/// Waits for the opener off the draw loop so it does not linger as a zombie.
fn reap(mut child: Child, uri: String) -> JoinHandle<Option<ExitStatus>> {
    tokio::task::spawn_blocking(move || match child.wait() {
        Ok(status) if status.success() => Some(status),
        Ok(status) => {
            warn!(uri = %uri, %status, "Opener exited with a failure status.");
            Some(status)
        }
        Err(e) => {
            warn!(uri = %uri, error = %e, "Could not wait for the opener.");
            None
        }
    })
}
