use crate::cli::io::LineReader;
use crate::cli::output;
use crate::cli::ui::{Formatter, Menu};
use crate::cli::CliError;
use crate::core::services::GiftService;
use crate::domain::{GiftDocument, Occasion};
use crate::storage::DocumentStore;

pub const CHOICE_PROMPT: &str = "Enter your choice: ";
pub const INVALID_INPUT: &str = "Invalid input.";

/// Everything a screen needs: the loaded document, the store that persists
/// it, and the source of user answers.
pub struct ShellContext {
    document: GiftDocument,
    store: Box<dyn DocumentStore>,
    input: Box<dyn LineReader>,
}

impl ShellContext {
    /// Loads the document once from `store`.
    pub fn new(store: Box<dyn DocumentStore>, input: Box<dyn LineReader>) -> Self {
        let document = store.load();
        Self {
            document,
            store,
            input,
        }
    }

    pub fn document(&self) -> &GiftDocument {
        &self.document
    }

    /// Reads one trimmed answer; a closed input becomes [`CliError::EndOfInput`].
    pub fn prompt(&mut self, label: &str) -> Result<String, CliError> {
        let line = self
            .input
            .read_line(&format!("{label}> "))?
            .ok_or(CliError::EndOfInput)?;
        Ok(line.trim().to_string())
    }

    /// Renders `menu` and returns the raw answer without validating it.
    pub fn ask<A>(&mut self, menu: &Menu<A>) -> Result<String, CliError> {
        println!("{}", menu.render(&Formatter::new()));
        self.prompt(CHOICE_PROMPT)
    }

    /// Renders `menu` once; prints a notice and yields `None` on an invalid answer.
    pub fn choose<A: Clone>(&mut self, menu: &Menu<A>) -> Result<Option<A>, CliError> {
        let answer = self.ask(menu)?;
        let selected = menu.select(&answer).cloned();
        if selected.is_none() {
            output::warning(INVALID_INPUT);
        }
        Ok(selected)
    }

    /// Re-renders `menu` until a listed option is chosen.
    pub fn choose_until_valid<A: Clone>(&mut self, menu: &Menu<A>) -> Result<A, CliError> {
        loop {
            if let Some(action) = self.choose(menu)? {
                return Ok(action);
            }
        }
    }

    pub fn confirm(&mut self, question: &str) -> Result<bool, CliError> {
        let menu = Menu::untitled()
            .with_context(question)
            .item(1, "Confirm", true)
            .item(0, "Cancel", false);
        self.choose_until_valid(&menu)
    }

    pub fn ask_yes_no(&mut self, question: &str) -> Result<bool, CliError> {
        let menu = Menu::untitled()
            .with_context(question)
            .item(1, "Yes", true)
            .item(0, "No", false);
        self.choose_until_valid(&menu)
    }

    pub fn add_recipient(&mut self, name: &str) -> Result<bool, CliError> {
        Ok(GiftService::add_recipient(
            &mut self.document,
            self.store.as_ref(),
            name,
        )?)
    }

    pub fn add_gift(
        &mut self,
        recipient: &str,
        idea: &str,
        occasion: &Occasion,
    ) -> Result<(), CliError> {
        GiftService::add_gift(
            &mut self.document,
            self.store.as_ref(),
            recipient,
            idea,
            occasion,
        )?;
        Ok(())
    }
}
