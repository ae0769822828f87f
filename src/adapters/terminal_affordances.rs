//! Terminal stand-ins for device affordances.
//!
//! Vibration becomes the terminal bell. Notifications go to Notification
//! Center through `osascript` on macOS and are dropped elsewhere.

use std::io::Write;

use crate::traits::Affordances;

#[derive(Debug, Default, Clone)]
pub struct TerminalAffordances {
    bell: bool,
}

impl TerminalAffordances {
    pub fn new() -> Self {
        Self { bell: true }
    }

    /// Disable the bell, e.g. for headless runs.
    pub fn quiet() -> Self {
        Self { bell: false }
    }
}

impl Affordances for TerminalAffordances {
    fn vibrate(&mut self, pattern_ms: &[u64]) {
        if !self.bell || pattern_ms.is_empty() {
            return;
        }
        let mut stdout = std::io::stdout();
        if let Err(e) = stdout.write_all(b"\x07").and_then(|_| stdout.flush()) {
            tracing::debug!("Bell failed: {}", e);
        }
    }

    fn notify(&mut self, title: &str, body: &str) {
        tracing::debug!("Sending OS notification: {}", body);
        let title = title.to_string();
        let body = body.to_string();

        // Fire and forget; the event loop never waits on the notifier.
        if let Ok(handle) = tokio::runtime::Handle::try_current() {
            handle.spawn_blocking(move || send_notification(&title, &body));
        }
    }
}

#[cfg(target_os = "macos")]
fn send_notification(title: &str, body: &str) {
    use std::process::Command;

    let escaped_title = escape_applescript(title);
    let escaped_body = escape_applescript(body);
    let script = format!(
        "display notification \"{}\" with title \"{}\"",
        escaped_body, escaped_title
    );

    match Command::new("osascript").arg("-e").arg(&script).output() {
        Ok(output) if !output.status.success() => {
            let stderr = String::from_utf8_lossy(&output.stderr);
            tracing::warn!("osascript notification failed: {}", stderr.trim());
        }
        Err(e) => {
            tracing::warn!("Failed to spawn osascript: {}", e);
        }
        _ => {}
    }
}

#[cfg(not(target_os = "macos"))]
fn send_notification(_title: &str, _body: &str) {}

#[cfg_attr(not(target_os = "macos"), allow(dead_code))]
fn escape_applescript(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}
