//! # OSRS Wiki bot
//!
//! Telegram bot answering questions from the Old School RuneScape Wiki. Wires the wiki client,
//! the query service (search, info, random, recent changes, AI summary), and the Telegram REPL.
//! Config is loaded from env; see [`BotConfig`].

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod dispatch;
pub mod query;
pub mod render;
pub mod runner;
pub mod telegram;

pub use cli::{Cli, Commands, QueryCommand};
pub use commands::{help_text, parse_recent_limit, Command};
pub use config::BotConfig;
pub use core::{
    init_cli_tracing, init_tracing, Bot, BotError, Chat, FormattedResponse, ResponseField,
    ResponseStatus, Result,
};
pub use dispatch::CommandDispatcher;
pub use query::{clamp_recent_limit, QueryError, WikiQueryService};
pub use render::render;
pub use runner::{build_query_service, execute_query, run_bot, run_check, run_query};
pub use telegram::{run_repl, TelegramBotAdapter};
