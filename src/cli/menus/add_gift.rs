use crate::cli::output;
use crate::cli::{CliError, ShellContext};
use crate::core::utils::{clean_text, is_cancel_keyword};

use super::{occasion, Screen, Transition};

const NOT_ADDED: &str = "Gift idea not added.";

pub fn show(context: &mut ShellContext, recipient: &str) -> Result<Transition, CliError> {
    if !context.document().contains(recipient) {
        output::warning(format!("{recipient} is not in your recipient list."));
        return Ok(Transition::Goto(Screen::RecipientList));
    }

    let gift_list = Transition::Goto(Screen::GiftList(recipient.to_string()));
    output::section(format!("Add a gift idea for {recipient}"));

    let raw = context.prompt("Enter the gift idea (or type 'cancel' to go back): ")?;
    if is_cancel_keyword(&raw) {
        output::info(NOT_ADDED);
        return Ok(gift_list);
    }
    let idea = clean_text(&raw);
    if idea.is_empty() {
        output::warning(format!("The gift idea cannot be empty. {NOT_ADDED}"));
        return Ok(gift_list);
    }

    let Some(occasion) = occasion::choose(context)? else {
        output::info(NOT_ADDED);
        return Ok(gift_list);
    };

    if !context.confirm(&format!("Save \"{idea}\" ({occasion}) for {recipient}?"))? {
        output::info(NOT_ADDED);
        return Ok(gift_list);
    }
    context.add_gift(recipient, &idea, &occasion)?;
    output::success(format!("Saved \"{idea}\" ({occasion}) for {recipient}."));

    Ok(gift_list)
}
