use std::io;

use tracing::{debug, info};

use crate::cli::io::{EditorReader, LineReader, ScriptReader};
use crate::cli::menus::{Screen, Transition};
use crate::cli::output::{self, OutputPreferences};
use crate::cli::{CliError, ShellContext};
use crate::config::{AppConfig, CliMode};
use crate::storage::JsonStorage;

/// Entry point used by the binary: resolves configuration from the
/// environment and runs the menus until the user exits.
pub fn run_cli() -> Result<(), CliError> {
    let config = AppConfig::from_env();
    output::set_preferences(OutputPreferences {
        plain_mode: config.plain_output,
    });
    info!(path = %config.data_file.display(), mode = ?config.mode, "starting gift saver");

    let input: Box<dyn LineReader> = match config.mode {
        CliMode::Interactive => Box::new(EditorReader::new()?),
        CliMode::Script => Box::new(ScriptReader::new(io::stdin().lock())),
    };
    let store = JsonStorage::new(config.data_file);
    let mut shell = Shell::new(ShellContext::new(Box::new(store), input));
    shell.run()
}

/// Drives the screen state machine from the main menu until it exits.
pub struct Shell {
    context: ShellContext,
    screen: Screen,
}

impl Shell {
    pub fn new(context: ShellContext) -> Self {
        Self {
            context,
            screen: Screen::MainMenu,
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn context(&self) -> &ShellContext {
        &self.context
    }

    pub fn into_context(self) -> ShellContext {
        self.context
    }

    pub fn run(&mut self) -> Result<(), CliError> {
        loop {
            match self.screen.run(&mut self.context) {
                Ok(Transition::Goto(next)) => {
                    debug!(from = ?self.screen, to = ?next, "screen transition");
                    self.screen = next;
                }
                Ok(Transition::Exit) => {
                    output::info("\nGoodbye!\n");
                    return Ok(());
                }
                Err(CliError::EndOfInput) => {
                    output::info("\nInput closed. Goodbye!");
                    return Ok(());
                }
                Err(err) => return Err(err),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::io::QueueReader;
    use crate::core::services::tests::RecordingStore;
    use crate::domain::{GiftDocument, GiftIdea};

    fn shell_with(store: &RecordingStore, answers: &[&str]) -> Shell {
        shell_and_input(store, answers).0
    }

    fn shell_and_input(store: &RecordingStore, answers: &[&str]) -> (Shell, QueueReader) {
        let input = QueueReader::new(answers.iter().copied());
        let context = ShellContext::new(Box::new(store.clone()), Box::new(input.clone()));
        (Shell::new(context), input)
    }

    fn seeded_store() -> RecordingStore {
        let mut document = GiftDocument::new();
        document.insert_recipient("Dad");
        RecordingStore::seeded(document)
    }

    #[test]
    fn exit_from_main_menu_stops_without_saving() {
        let store = RecordingStore::default();
        let mut shell = shell_with(&store, &["0"]);

        shell.run().unwrap();

        assert_eq!(shell.screen(), &Screen::MainMenu);
        assert_eq!(store.saves.get(), 0);
    }

    #[test]
    fn invalid_main_menu_input_redisplays_main_menu() {
        let store = RecordingStore::default();
        let (mut shell, input) = shell_and_input(&store, &["banana", "7"]);

        shell.run().unwrap();

        // Both answers were rejected and the menu asked again.
        assert_eq!(shell.screen(), &Screen::MainMenu);
        assert_eq!(input.remaining(), 0);
        assert!(input.exhausted());
    }

    #[test]
    fn invalid_recipient_list_input_stays_on_recipient_list() {
        let store = seeded_store();
        let (mut shell, input) = shell_and_input(&store, &["1", "abc", "5"]);

        shell.run().unwrap();

        assert_eq!(shell.screen(), &Screen::RecipientList);
        assert!(input.exhausted());
    }

    #[test]
    fn invalid_gift_list_input_stays_on_gift_list() {
        let store = seeded_store();
        let (mut shell, input) = shell_and_input(&store, &["1", "1", "x", "3"]);

        shell.run().unwrap();

        assert_eq!(shell.screen(), &Screen::GiftList("Dad".into()));
        assert!(input.exhausted());
    }

    #[test]
    fn zero_on_sub_screens_returns_to_main_menu_without_exiting() {
        for answers in [&["1", "0"][..], &["1", "1", "0"][..]] {
            let store = seeded_store();
            let (mut shell, input) = shell_and_input(&store, answers);

            shell.run().unwrap();

            assert_eq!(shell.screen(), &Screen::MainMenu, "answers {answers:?}");
            assert!(input.exhausted(), "answers {answers:?} exited early");
        }
    }

    #[test]
    fn only_main_menu_zero_exits() {
        let store = seeded_store();
        let (mut shell, input) = shell_and_input(&store, &["1", "1", "0", "1", "0", "0"]);

        shell.run().unwrap();

        assert_eq!(shell.screen(), &Screen::MainMenu);
        assert_eq!(input.remaining(), 0);
        assert!(!input.exhausted());
    }

    #[test]
    fn gift_list_two_returns_to_recipient_list() {
        let store = seeded_store();
        let (mut shell, input) = shell_and_input(&store, &["1", "1", "2"]);

        shell.run().unwrap();

        assert_eq!(shell.screen(), &Screen::RecipientList);
        assert!(input.exhausted());
    }

    #[test]
    fn closed_input_ends_the_loop_gracefully() {
        let store = RecordingStore::default();
        let mut shell = shell_with(&store, &["1"]);

        shell.run().unwrap();

        assert_eq!(shell.screen(), &Screen::RecipientList);
    }

    #[test]
    fn cancel_at_name_prompt_never_saves() {
        let store = seeded_store();
        let mut shell = shell_with(&store, &["2", "CANCEL", "0"]);

        shell.run().unwrap();

        assert_eq!(store.saves.get(), 0);
        assert_eq!(shell.context().document().len(), 1);
    }

    #[test]
    fn cancel_at_occasion_prompt_never_saves() {
        let store = seeded_store();
        let mut shell = shell_with(&store, &["1", "1", "1", "Tie", "0", "0", "0"]);

        shell.run().unwrap();

        assert_eq!(store.saves.get(), 0);
        assert!(shell.context().document().gifts("Dad").is_empty());
    }

    #[test]
    fn declining_confirmation_never_saves() {
        let store = seeded_store();
        let mut shell = shell_with(&store, &["2", "Mom", "0", "0"]);

        shell.run().unwrap();

        assert_eq!(store.saves.get(), 0);
        assert!(!shell.context().document().contains("Mom"));
    }

    #[test]
    fn add_recipient_then_gift_saves_twice() {
        let store = RecordingStore::default();
        let mut shell = shell_with(
            &store,
            &["2", "Mom", "1", "1", "Scarf", "1", "1", "0", "0"],
        );

        shell.run().unwrap();

        assert_eq!(store.saves.get(), 2);
        let saved = store.last.borrow().clone().expect("document saved");
        assert_eq!(saved.gifts("Mom"), &[GiftIdea::new("Scarf", "Birthday")]);
    }

    #[test]
    fn duplicate_recipient_is_reported_without_saving() {
        let store = seeded_store();
        let mut shell = shell_with(&store, &["2", " Dad ", "0"]);

        shell.run().unwrap();

        assert_eq!(store.saves.get(), 0);
        assert_eq!(shell.context().document().len(), 1);
    }

    #[test]
    fn storage_failures_abort_the_loop() {
        let store = RecordingStore::failing();
        let mut shell = shell_with(&store, &["2", "Mom", "1"]);

        let err = shell.run().unwrap_err();

        assert!(matches!(err, CliError::Core(_)));
    }
}
