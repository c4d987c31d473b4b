use crate::cli::ui::Menu;
use crate::cli::{CliError, ShellContext};
use crate::domain::Occasion;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OccasionChoice {
    Birthday,
    Christmas,
    Other,
    Cancel,
}

pub fn menu() -> Menu<OccasionChoice> {
    Menu::untitled()
        .with_context("Choose an occasion:")
        .item(1, "Birthday", OccasionChoice::Birthday)
        .item(2, "Christmas", OccasionChoice::Christmas)
        .item(3, "Other", OccasionChoice::Other)
        .item(0, "Cancel", OccasionChoice::Cancel)
}

/// Maps a raw answer to a choice; anything unrecognized counts as cancel.
pub fn interpret(answer: &str) -> OccasionChoice {
    menu()
        .select(answer)
        .copied()
        .unwrap_or(OccasionChoice::Cancel)
}

/// Runs the occasion prompt. `None` means the user backed out, either
/// directly or by leaving the custom label blank.
pub fn choose(context: &mut ShellContext) -> Result<Option<Occasion>, CliError> {
    let answer = context.ask(&menu())?;
    let occasion = match interpret(&answer) {
        OccasionChoice::Birthday => Some(Occasion::Birthday),
        OccasionChoice::Christmas => Some(Occasion::Christmas),
        OccasionChoice::Other => {
            let label = context.prompt("Type the occasion: ")?;
            Occasion::other(&label)
        }
        OccasionChoice::Cancel => None,
    };
    Ok(occasion)
}
