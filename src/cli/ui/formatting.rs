use std::fmt;

use colored::Colorize;

use crate::cli::output::{current_preferences, OutputPreferences};

pub struct Formatter {
    prefs: OutputPreferences,
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter {
    pub fn new() -> Self {
        Self {
            prefs: current_preferences(),
        }
    }

    /// A formatter that never emits styling, regardless of global preferences.
    pub fn plain() -> Self {
        Self {
            prefs: OutputPreferences { plain_mode: true },
        }
    }

    pub fn header_text(&self, title: impl fmt::Display) -> String {
        let text = format!("=== {} ===", title);
        if self.prefs.plain_mode {
            text
        } else {
            text.bold().to_string()
        }
    }

    pub fn option_text(&self, number: usize, label: &str) -> String {
        let marker = format!("[{number}]");
        if self.prefs.plain_mode {
            format!("{marker} {label}")
        } else {
            format!("{} {label}", marker.bright_cyan())
        }
    }

    pub fn detail_text(&self, message: impl fmt::Display) -> String {
        message.to_string()
    }
}
