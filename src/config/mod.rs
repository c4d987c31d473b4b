use std::{env, path::PathBuf};

use crate::core::utils;

pub const SCRIPT_ENV: &str = "GIFT_SAVER_CLI_SCRIPT";
const NO_COLOR_ENV: &str = "NO_COLOR";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    /// Line editor on a terminal.
    Interactive,
    /// Plain lines read from stdin, one answer per prompt.
    Script,
}

/// Process-wide settings resolved once at startup and handed to the shell.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_file: PathBuf,
    pub mode: CliMode,
    pub plain_output: bool,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let mode = if env::var_os(SCRIPT_ENV).is_some() {
            CliMode::Script
        } else {
            CliMode::Interactive
        };
        let plain_output = mode == CliMode::Script || env::var_os(NO_COLOR_ENV).is_some();
        Self {
            data_file: utils::data_file(),
            mode,
            plain_output,
        }
    }

    /// Script-mode configuration pointing at an explicit data file.
    pub fn with_data_file(data_file: impl Into<PathBuf>) -> Self {
        Self {
            data_file: data_file.into(),
            mode: CliMode::Script,
            plain_output: true,
        }
    }
}
