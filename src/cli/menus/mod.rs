//! The menu screens and the transitions between them.
//!
//! Numbered screens expose a `menu` builder returning a [`Menu`] of
//! [`Transition`]s, so routing can be checked by selecting answers on the
//! built menu without any console I/O.
//!
//! [`Menu`]: crate::cli::ui::Menu

pub mod add_gift;
pub mod add_recipient;
pub mod gift_menu;
pub mod main_menu;
pub mod occasion;
pub mod recipient_menu;

use crate::cli::ui::Menu;
use crate::cli::{CliError, ShellContext};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    MainMenu,
    RecipientList,
    AddRecipient,
    GiftList(String),
    AddGift(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    Goto(Screen),
    Exit,
}

impl Screen {
    pub fn run(&self, context: &mut ShellContext) -> Result<Transition, CliError> {
        match self {
            Screen::MainMenu => main_menu::show(context),
            Screen::RecipientList => recipient_menu::show(context),
            Screen::AddRecipient => add_recipient::show(context),
            Screen::GiftList(recipient) => gift_menu::show(context, recipient),
            Screen::AddGift(recipient) => add_gift::show(context, recipient),
        }
    }
}

/// Runs a numbered screen once; an invalid answer stays on `current`.
fn route(
    context: &mut ShellContext,
    menu: &Menu<Transition>,
    current: Screen,
) -> Result<Transition, CliError> {
    Ok(context.choose(menu)?.unwrap_or(Transition::Goto(current)))
}
