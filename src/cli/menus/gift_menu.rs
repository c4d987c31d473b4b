use crate::cli::ui::Menu;
use crate::cli::{CliError, ShellContext};
use crate::core::services::GiftService;
use crate::domain::GiftDocument;

use super::{route, Screen, Transition};

pub fn menu(document: &GiftDocument, recipient: &str) -> Menu<Transition> {
    let gifts = GiftService::list_gifts(document, recipient);
    let mut menu = Menu::new(format!("Gift ideas for {recipient}"));

    if gifts.is_empty() {
        menu = menu.with_context("No gift ideas saved yet.");
    } else {
        for (index, gift) in gifts.iter().enumerate() {
            menu = menu.with_context(format!("{}. {}", index + 1, gift));
        }
    }

    menu.item(
        1,
        "Add a gift idea",
        Transition::Goto(Screen::AddGift(recipient.to_string())),
    )
    .item(2, "Return to recipients", Transition::Goto(Screen::RecipientList))
    .item(0, "Return to main menu", Transition::Goto(Screen::MainMenu))
}

pub fn show(context: &mut ShellContext, recipient: &str) -> Result<Transition, CliError> {
    let menu = menu(context.document(), recipient);
    route(context, &menu, Screen::GiftList(recipient.to_string()))
}
