use crate::cli::ui::Menu;
use crate::cli::{CliError, ShellContext};

use super::{route, Screen, Transition};

pub fn menu() -> Menu<Transition> {
    Menu::new("Gift Idea Saver")
        .with_context("What would you like to do?")
        .item(1, "View recipients", Transition::Goto(Screen::RecipientList))
        .item(2, "Add a new recipient", Transition::Goto(Screen::AddRecipient))
        .item(0, "Exit", Transition::Exit)
}

pub fn show(context: &mut ShellContext) -> Result<Transition, CliError> {
    route(context, &menu(), Screen::MainMenu)
}
