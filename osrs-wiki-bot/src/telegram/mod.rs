//! Telegram transport: the teloxide-backed [`crate::core::Bot`] and the REPL that feeds commands
//! to the dispatcher.

mod bot_adapter;
mod runner;

pub use bot_adapter::TelegramBotAdapter;
pub use runner::{build_teloxide_bot, run_repl};
