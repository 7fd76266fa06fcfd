mod cli;
mod tui;

pub(crate) use cli::{replay, summary};
pub(crate) use tui::as_tui;
