pub mod formatting;
pub mod menu;

pub use formatting::Formatter;
pub use menu::{Menu, MenuItem};
