use crate::cli::output;
use crate::cli::{CliError, ShellContext};
use crate::core::services::GiftService;
use crate::core::utils::{clean_text, is_cancel_keyword};

use super::{Screen, Transition};

const NOT_ADDED: &str = "No recipient was added.";

pub fn show(context: &mut ShellContext) -> Result<Transition, CliError> {
    let main_menu = Transition::Goto(Screen::MainMenu);
    output::section("Add a new recipient");

    let raw = context.prompt("Enter the recipient's name (or type 'cancel' to go back): ")?;
    if is_cancel_keyword(&raw) {
        output::info(format!("Cancelled. {NOT_ADDED}"));
        return Ok(main_menu);
    }

    let name = clean_text(&raw);
    if name.is_empty() {
        output::warning(format!("The name cannot be empty. {NOT_ADDED}"));
        return Ok(main_menu);
    }
    if context.document().contains(&name) {
        output::warning(format!("{name} is already in your recipient list."));
        return Ok(main_menu);
    }
    if let Some(similar) = GiftService::similar_recipient(context.document(), &name) {
        output::info(format!("Note: a similar recipient is already saved: {similar}"));
    }

    if !context.confirm(&format!("Add {name} as a new recipient?"))? {
        output::info(format!("Cancelled. {NOT_ADDED}"));
        return Ok(main_menu);
    }
    if !context.add_recipient(&name)? {
        output::warning(format!("{name} is already in your recipient list."));
        return Ok(main_menu);
    }
    output::success(format!("{name} was added."));

    if context.ask_yes_no(&format!("Would you like to add a gift idea for {name} now?"))? {
        Ok(Transition::Goto(Screen::AddGift(name)))
    } else {
        Ok(main_menu)
    }
}
