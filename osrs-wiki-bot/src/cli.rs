//! Command-line interface: run the bot, check the setup, or run a single query.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "osrs-wiki-bot")]
#[command(about = "OSRS Wiki Telegram bot: run, check, query", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the Telegram bot (config from env; token can override BOT_TOKEN).
    Run {
        #[arg(short, long)]
        token: Option<String>,
    },
    /// Validate configuration, report whether AI is enabled, and probe the wiki.
    Check,
    /// Run one query flow and print the reply (no Telegram token needed).
    Query {
        #[command(subcommand)]
        query: QueryCommand,
        /// Print the structured response as JSON instead of chat text.
        #[arg(long, global = true)]
        json: bool,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum QueryCommand {
    /// Search the wiki.
    Search {
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },
    /// Lead section and headings of the best match.
    Info {
        #[arg(required = true, num_args = 1..)]
        topic: Vec<String>,
    },
    /// A random page.
    Random,
    /// Latest edits (clamped to 1..=10; values below 1 mean 5).
    Recent {
        #[arg(default_value_t = 5, allow_negative_numbers = true)]
        limit: i64,
    },
    /// AI explanation of a topic (needs OPENAI_API_KEY).
    Ai {
        #[arg(required = true, num_args = 1..)]
        topic: Vec<String>,
    },
}
