//! Drives the binary inside a detached tmux session.

use std::path::Path;
use std::process::Command;
use std::time::{Duration, Instant};

pub struct TmuxHarness {
    session: String,
}

impl TmuxHarness {
    pub fn new(name: &str) -> Self {
        Self {
            session: format!("paramedit-e2e-{}-{}", name, std::process::id()),
        }
    }

    /// Start `binary` in a 140x40 session with config and data dirs under `home`
    pub fn start(&self, binary: &str, home: &Path) -> Result<(), String> {
        let cmd = format!(
            "env XDG_CONFIG_HOME={home}/config XDG_DATA_HOME={home}/data {binary}",
            home = home.display(),
            binary = binary,
        );
        let status = Command::new("tmux")
            .args(["new-session", "-d", "-s", &self.session, "-x", "140", "-y", "40", &cmd])
            .status()
            .map_err(|e| e.to_string())?;
        if status.success() {
            Ok(())
        } else {
            Err(format!("tmux new-session exited with {}", status))
        }
    }

    pub fn send_key(&self, key: &str) -> Result<(), String> {
        let status = Command::new("tmux")
            .args(["send-keys", "-t", &self.session, key])
            .status()
            .map_err(|e| e.to_string())?;
        if status.success() {
            Ok(())
        } else {
            Err(format!("tmux send-keys {} failed", key))
        }
    }

    pub fn capture_screen(&self) -> Result<String, String> {
        let output = Command::new("tmux")
            .args(["capture-pane", "-p", "-t", &self.session])
            .output()
            .map_err(|e| e.to_string())?;
        if !output.status.success() {
            return Err("tmux capture-pane failed".to_string());
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    pub fn is_running(&self) -> bool {
        Command::new("tmux")
            .args(["has-session", "-t", &self.session])
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }

    /// Poll the screen until it contains `text`
    pub fn wait_for_text(&self, text: &str, timeout: Duration) -> Result<(), String> {
        let start = Instant::now();
        let mut last = String::new();
        while start.elapsed() < timeout {
            if let Ok(screen) = self.capture_screen() {
                if screen.contains(text) {
                    return Ok(());
                }
                last = screen;
            }
            std::thread::sleep(Duration::from_millis(50));
        }
        Err(format!("'{}' not found on screen:\n{}", text, last))
    }

    pub fn wait_for_exit(&self, timeout: Duration) -> Result<(), String> {
        let start = Instant::now();
        while start.elapsed() < timeout {
            if !self.is_running() {
                return Ok(());
            }
            std::thread::sleep(Duration::from_millis(50));
        }
        Err("app still running".to_string())
    }
}

impl Drop for TmuxHarness {
    fn drop(&mut self) {
        let _ = Command::new("tmux")
            .args(["kill-session", "-t", &self.session])
            .status();
    }
}
