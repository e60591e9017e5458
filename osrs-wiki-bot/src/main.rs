//! Binary for the OSRS Wiki Telegram bot.

use anyhow::Result;
use clap::Parser;
use osrs_wiki_bot::{init_cli_tracing, run_bot, run_check, run_query, BotConfig, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => {
            let config = BotConfig::load(token)?;
            run_bot(config).await
        }
        Commands::Check => {
            init_cli_tracing()?;
            run_check(BotConfig::load(None)?).await
        }
        Commands::Query { query, json } => {
            init_cli_tracing()?;
            run_query(BotConfig::load(None)?, query, json).await
        }
    }
}
