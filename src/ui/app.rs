//! Main application state and logic

use crate::capture::{key_symbol, KeyLog, KeyRecord};
use crate::config::Config;
use crate::export;
use crate::stats::SessionStats;
use chrono::{DateTime, Local};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::path::PathBuf;

/// Application running state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Running,
    Quitting,
}

/// Which surface currently owns the keyboard.
///
/// Plain keystrokes are only recorded in `Capture`; the save prompt and
/// informational dialogs are modal and consume every key until dismissed.
#[derive(Debug)]
pub enum Mode {
    Capture,
    SavePrompt(SavePrompt),
    Dialog(Dialog),
}

/// Filename prompt shown before a CSV export
#[derive(Debug)]
pub struct SavePrompt {
    /// Destination path, editable by the user
    pub input: String,
}

/// Modal informational dialog, dismissed by any key
#[derive(Debug)]
pub struct Dialog {
    pub title: String,
    pub body: String,
}

impl Dialog {
    pub fn new(title: &str, body: impl Into<String>) -> Self {
        Self {
            title: title.to_string(),
            body: body.into(),
        }
    }
}

/// Main application
pub struct App {
    /// Captured keystrokes for this session
    pub log: KeyLog,
    /// Modal routing state
    pub mode: Mode,
    /// Application state
    pub state: AppState,
    /// Configuration
    pub config: Config,
    /// One-line status indicator
    pub status_message: String,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self {
            log: KeyLog::new(),
            mode: Mode::Capture,
            state: AppState::Running,
            config,
            status_message: "Ready".to_string(),
        }
    }

    /// Route one key event to the surface that owns the keyboard.
    ///
    /// `now` is the capture instant; the caller supplies it so command
    /// handling stays deterministic under test.
    pub fn handle_key(&mut self, key: KeyEvent, now: DateTime<Local>) {
        // Press events only; release/repeat never reach the log
        if key.kind == KeyEventKind::Release {
            return;
        }

        match self.mode {
            Mode::Dialog(_) => self.dismiss_dialog(),
            Mode::SavePrompt(_) => self.handle_prompt_key(key),
            Mode::Capture => self.handle_capture_key(key, now),
        }
    }

    fn handle_capture_key(&mut self, key: KeyEvent, now: DateTime<Local>) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('q') => self.quit(),
                KeyCode::Char('l') => self.clear(),
                KeyCode::Char('s') => self.request_export(now),
                KeyCode::Char('t') => self.show_stats(now),
                // Unbound chords pass through like any other key
                code => self.capture(now, key_symbol(code)),
            }
            return;
        }
        self.capture(now, key_symbol(key.code));
    }

    fn handle_prompt_key(&mut self, key: KeyEvent) {
        let Mode::SavePrompt(prompt) = &mut self.mode else {
            return;
        };
        match key.code {
            // Cancel is silent: no file I/O, no dialog
            KeyCode::Esc => self.mode = Mode::Capture,
            KeyCode::Enter => {
                let input = prompt.input.trim().to_string();
                if input.is_empty() {
                    return;
                }
                self.finish_export(PathBuf::from(input));
            }
            KeyCode::Backspace => {
                prompt.input.pop();
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                prompt.input.push(c);
            }
            _ => {}
        }
    }

    /// Record one key press: build the record from the capture instant,
    /// append it, and reflect the key name in the status line.
    pub fn capture(&mut self, instant: DateTime<Local>, symbol: impl Into<String>) {
        let record = KeyRecord::at(instant, symbol);
        self.set_status(format!("Captured: {}", record.key_symbol));
        self.log.append(record);
    }

    /// Empty the log and unset the session start. Idempotent, no prompt.
    pub fn clear(&mut self) {
        self.log.clear();
        log::debug!("log cleared");
        self.set_status("Cleared.");
    }

    /// Open the save prompt, or show the empty-state notice when there is
    /// nothing to export.
    pub fn request_export(&mut self, now: DateTime<Local>) {
        if self.log.is_empty() {
            self.mode = Mode::Dialog(Dialog::new(
                "Nothing to save",
                "No keystrokes recorded yet.",
            ));
            return;
        }
        self.mode = Mode::SavePrompt(SavePrompt {
            input: self.suggested_filename(now),
        });
    }

    /// Suggested export destination: `<prefix>_<timestamp>.csv`
    pub fn suggested_filename(&self, now: DateTime<Local>) -> String {
        format!(
            "{}_{}.csv",
            self.config.export.filename_prefix,
            now.format("%Y%m%d_%H%M%S")
        )
    }

    fn finish_export(&mut self, path: PathBuf) {
        match export::write_csv(&self.log, &path) {
            Ok(count) => {
                self.set_status(format!("Saved {} keys", count));
                self.mode = Mode::Dialog(Dialog::new(
                    "Saved",
                    format!("Saved {} keys to:\n{}", count, path.display()),
                ));
            }
            Err(err) => {
                // A failed write is reported, never presented as saved
                log::warn!("export failed: {err}");
                self.set_status("Export failed");
                self.mode = Mode::Dialog(Dialog::new("Export Failed", err.to_string()));
            }
        }
    }

    /// Show the stats dialog. Read-only: neither the log nor the session
    /// start change.
    pub fn show_stats(&mut self, now: DateTime<Local>) {
        let now_unix = now.timestamp_millis() as f64 / 1000.0;
        self.mode = match SessionStats::compute(&self.log, now_unix) {
            Some(stats) => Mode::Dialog(Dialog::new("Typing Stats", stats.to_string())),
            None => Mode::Dialog(Dialog::new("No Data", "No keys recorded yet.")),
        };
    }

    pub fn dismiss_dialog(&mut self) {
        self.mode = Mode::Capture;
    }

    /// Request quit
    pub fn quit(&mut self) {
        self.state = AppState::Quitting;
    }

    /// Set the status line
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
