//! Slash commands understood by the bot and the help text listing them.

use teloxide::utils::command::BotCommands;

use crate::query::RECENT_DEFAULT_LIMIT;

/// Commands parsed from incoming Telegram text (`/name args`, optionally `/name@botname args`).
#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(
    rename_rule = "lowercase",
    description = "OSRS Wiki bot: search and read the Old School RuneScape Wiki."
)]
pub enum Command {
    #[command(description = "show available commands and how to use them.")]
    Help,
    #[command(description = "search the OSRS Wiki for a topic.")]
    Search(String),
    #[command(description = "get detailed information about a specific OSRS topic.")]
    Info(String),
    #[command(description = "get a random page from the OSRS Wiki.")]
    Random,
    #[command(description = "show recent changes to the OSRS Wiki (default 5, max 10).")]
    Recent(String),
    #[command(description = "get an AI-enhanced explanation of an OSRS topic.")]
    Ai(String),
}

/// Free-text `/recent` argument to a requested limit. Empty or unparsable means the default.
///
/// Out-of-range numbers are returned as-is; clamping is the query layer's job.
pub fn parse_recent_limit(arg: &str) -> i64 {
    arg.trim()
        .parse::<i64>()
        .unwrap_or(i64::from(RECENT_DEFAULT_LIMIT))
}

/// Usage line shown when a command that needs an argument arrives without one.
pub fn usage_hint(command: &Command) -> Option<&'static str> {
    match command {
        Command::Search(_) => Some("Usage: /search <query>\nExample: /search dragon scimitar"),
        Command::Info(_) => Some("Usage: /info <topic>\nExample: /info fishing"),
        Command::Ai(_) => Some("Usage: /ai <topic>\nExample: /ai money making"),
        Command::Help | Command::Random | Command::Recent(_) => None,
    }
}

/// Full help message: command list plus a few examples.
pub fn help_text() -> String {
    format!(
        "{}\n\nExamples:\n\
         • /search dragon scimitar\n\
         • /info fishing\n\
         • /random\n\
         • /recent 8\n\
         • /ai money making\n\n\
         Data sourced from the official Old School RuneScape Wiki.",
        Command::descriptions()
    )
}

#[cfg(test)]
#[path = "commands_test.rs"]
mod commands_test;
