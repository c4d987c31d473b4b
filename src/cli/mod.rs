pub mod io;
pub mod menus;
pub mod output;
pub mod shell;
pub mod shell_context;
pub mod ui;

use rustyline::error::ReadlineError;
use thiserror::Error;

use crate::core::errors::GiftError;

pub use shell::{run_cli, Shell};
pub use shell_context::ShellContext;

/// User-facing CLI error wrapper.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] GiftError),
    #[error("Line editor error: {0}")]
    Readline(#[from] ReadlineError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Input closed")]
    EndOfInput,
}
