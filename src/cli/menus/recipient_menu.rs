use crate::cli::ui::Menu;
use crate::cli::{CliError, ShellContext};
use crate::core::services::GiftService;
use crate::domain::GiftDocument;

use super::{route, Screen, Transition};

pub fn menu(document: &GiftDocument) -> Menu<Transition> {
    let recipients = GiftService::list_recipients(document);
    let menu = Menu::new("Recipients");

    if recipients.is_empty() {
        return menu
            .with_context("No recipients saved yet.")
            .item(1, "Add a new recipient", Transition::Goto(Screen::AddRecipient))
            .item(0, "Return to main menu", Transition::Goto(Screen::MainMenu));
    }

    let add_number = recipients.len() + 1;
    let menu = recipients
        .into_iter()
        .enumerate()
        .fold(menu, |menu, (index, name)| {
            let label = format!("{name} ({})", idea_count(document.gifts(&name).len()));
            menu.item(index + 1, label, Transition::Goto(Screen::GiftList(name)))
        });
    menu.item(
        add_number,
        "Add a new recipient",
        Transition::Goto(Screen::AddRecipient),
    )
    .item(0, "Return to main menu", Transition::Goto(Screen::MainMenu))
}

pub fn show(context: &mut ShellContext) -> Result<Transition, CliError> {
    let menu = menu(context.document());
    route(context, &menu, Screen::RecipientList)
}

fn idea_count(count: usize) -> String {
    match count {
        1 => "1 idea".to_string(),
        n => format!("{n} ideas"),
    }
}
